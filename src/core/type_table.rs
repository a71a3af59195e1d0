//! # TypeTable — Tipos Semânticos por Entidade
//!
//! Mapeia o nome canônico de uma entidade para a lista ordenada de rótulos
//! de tipo legíveis ("German city", "City/Town/Village", ...), usados para
//! formar perguntas "Which <tipo>".
//!
//! ## Arquivos de Origem
//!
//! ```text
//! type_names (id = número da linha, 0-based)   name_to_type_ids
//! ┌──────────────────────┐                      ┌──────────────────────────┐
//! │ 0  German city       │                      │ Potsdam \t 0 \t 1        │
//! │ 1  City/Town/Village │                      │ Biology \t 2             │
//! │ 2  Field of study    │                      └──────────────────────────┘
//! └──────────────────────┘
//! ```
//!
//! Carregada **uma vez** na inicialização
//! ([`persistence::load_type_table`](crate::persistence::load_type_table))
//! e compartilhada somente para leitura.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{QgError, Result};

/// Tabela somente-leitura nome → tipos.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TypeTable {
    /// Nome canônico → ids de tipo (apenas ids resolvíveis).
    name_to_type_ids: HashMap<String, Vec<usize>>,
    /// id → rótulo.
    type_names: Vec<String>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpreta o conteúdo dos dois arquivos.
    ///
    /// Ids que não existem em `type_names` são descartados com `warn`.
    ///
    /// # Erros
    ///
    /// [`QgError::TypeTable`] se um id não for um inteiro.
    pub fn parse(name_to_type_ids: &str, type_names: &str) -> Result<Self> {
        let type_names: Vec<String> = type_names.lines().map(|l| l.trim().to_string()).collect();
        let mut table = HashMap::new();

        for (index, line) in name_to_type_ids.lines().enumerate() {
            let mut cells = line.split('\t');
            let Some(name) = cells.next() else { continue };
            let mut ids = Vec::new();
            for cell in cells {
                let cell = cell.trim();
                let id = cell.parse::<usize>().map_err(|_| QgError::TypeTable {
                    line: index + 1,
                    reason: format!("id de tipo inválido '{}'", cell),
                })?;
                if id < type_names.len() {
                    ids.push(id);
                } else {
                    tracing::warn!(line = index + 1, id, name, "id de tipo sem rótulo, ignorado");
                }
            }
            table.insert(name.to_string(), ids);
        }

        Ok(Self {
            name_to_type_ids: table,
            type_names,
        })
    }

    /// Registra uma entidade com seus rótulos de tipo.
    pub fn insert(&mut self, name: &str, types: &[&str]) {
        let mut ids = Vec::with_capacity(types.len());
        for label in types {
            let id = match self.type_names.iter().position(|t| t == label) {
                Some(id) => id,
                None => {
                    self.type_names.push(label.to_string());
                    self.type_names.len() - 1
                }
            };
            ids.push(id);
        }
        self.name_to_type_ids.insert(name.to_string(), ids);
    }

    /// `true` se a entidade aparece na tabela (mesmo sem tipos).
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_type_ids.contains_key(name)
    }

    /// Rótulos de tipo da entidade, na ordem do arquivo.
    pub fn types_of(&self, name: &str) -> Option<Vec<&str>> {
        self.name_to_type_ids.get(name).map(|ids| {
            ids.iter()
                .filter_map(|&id| self.type_names.get(id).map(String::as_str))
                .collect()
        })
    }

    /// Número de entidades.
    pub fn len(&self) -> usize {
        self.name_to_type_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_type_ids.is_empty()
    }

    /// Número de rótulos de tipo distintos.
    pub fn type_count(&self) -> usize {
        self.type_names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_resolves_ids_in_file_order() {
        let table = TypeTable::parse(
            "Potsdam\t0\t1\nBiology\t2\n",
            "German city\nCity/Town/Village\nField of study\n",
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.type_count(), 3);
        assert_eq!(table.types_of("Potsdam"), Some(vec!["German city", "City/Town/Village"]));
        assert_eq!(table.types_of("Biology"), Some(vec!["Field of study"]));
        assert_eq!(table.types_of("Berlin"), None);
    }

    #[test]
    fn unknown_ids_are_dropped() {
        let table = TypeTable::parse("Potsdam\t0\t7\n", "German city\n").unwrap();
        assert_eq!(table.types_of("Potsdam"), Some(vec!["German city"]));
    }

    #[test]
    fn non_numeric_id_is_an_error() {
        let err = TypeTable::parse("Potsdam\tcity\n", "German city\n").unwrap_err();
        assert!(matches!(err, QgError::TypeTable { line: 1, .. }));
    }

    #[test]
    fn name_without_ids_is_known_but_typeless() {
        let table = TypeTable::parse("Potsdam\n", "").unwrap();
        assert!(table.contains("Potsdam"));
        assert_eq!(table.types_of("Potsdam"), Some(vec![]));
    }

    #[test]
    fn insert_reuses_labels() {
        let mut table = TypeTable::new();
        table.insert("Potsdam", &["German city", "City/Town/Village"]);
        table.insert("Bonn", &["German city"]);
        assert_eq!(table.type_count(), 2);
        assert_eq!(table.types_of("Bonn"), Some(vec!["German city"]));
    }
}
