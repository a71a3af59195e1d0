//! # Persistência — Configuração e Tabelas de Tipos em Disco
//!
//! Tudo o que o gerador lê do disco passa por aqui, uma única vez, na
//! inicialização. Depois disso a [`TypeTable`] é somente leitura.
//!
//! | Arquivo | Formato | Destino |
//! |---------|---------|---------|
//! | configuração | JSON de [`QgConfig`] (campos ausentes = padrão) | [`load_config`] |
//! | nomes de tipos | um rótulo por linha, id = número da linha | [`load_type_table`] |
//! | nome → ids | `name \t id \t id ...` | [`load_type_table`] |
//!
//! Erros de I/O saem como `anyhow::Error` com contexto; o binário encerra
//! com status diferente de zero.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{QgConfig, TypeTableConfig};
use crate::core::TypeTable;

/// Lê a configuração JSON.
pub fn load_config(path: &Path) -> Result<QgConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Falha ao ler configuração {}", path.display()))?;
    let config: QgConfig = serde_json::from_str(&json)
        .with_context(|| format!("Falha ao desserializar configuração {}", path.display()))?;
    Ok(config)
}

/// Carrega as tabelas de tipos.
///
/// Sem nenhum dos dois caminhos a tabela é vazia; com apenas um deles é
/// erro de configuração.
pub fn load_type_table(config: &TypeTableConfig) -> Result<TypeTable> {
    let (map_path, names_path) = match (&config.name_to_type_ids, &config.type_names) {
        (None, None) => {
            tracing::info!("Nenhuma tabela de tipos configurada, só \"What\" para não-pessoas");
            return Ok(TypeTable::new());
        }
        (Some(map), Some(names)) => (map, names),
        _ => bail!("As tabelas de tipos exigem os dois arquivos: nome → ids e nomes de tipos"),
    };

    let map = std::fs::read_to_string(map_path)
        .with_context(|| format!("Falha ao ler {}", map_path.display()))?;
    let names = std::fs::read_to_string(names_path)
        .with_context(|| format!("Falha ao ler {}", names_path.display()))?;
    let table = TypeTable::parse(&map, &names).context("Falha ao interpretar tabelas de tipos")?;

    tracing::info!(
        entities = table.len(),
        types = table.type_count(),
        "Tabela de tipos carregada"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Diretório temporário exclusivo do teste.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("entity-qg-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn partial_config_uses_defaults() {
        let dir = scratch("config");
        let path = dir.join("qg.json");
        std::fs::write(&path, r#"{ "graph": { "zero_based": true }, "mentions": { "id_aware": true } }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.graph.zero_based);
        assert_eq!(config.graph.root_label, "root");
        assert!(config.mentions.id_aware);
        assert_eq!(config.generation.max_tokens, 150);
    }

    #[test]
    fn missing_config_reports_path() {
        let err = load_config(Path::new("/nonexistent/qg.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/qg.json"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = scratch("bad-config");
        let path = dir.join("qg.json");
        std::fs::write(&path, "{ graph: ").unwrap();
        assert!(load_config(&path).is_err());
    }

    // ─── tabelas de tipos ────────────────────────────────────────

    #[test]
    fn no_paths_means_empty_table() {
        let table = load_type_table(&TypeTableConfig::default()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn single_path_is_rejected() {
        let config = TypeTableConfig {
            name_to_type_ids: Some(PathBuf::from("map.tsv")),
            type_names: None,
        };
        assert!(load_type_table(&config).is_err());
    }

    #[test]
    fn tables_are_loaded_from_disk() {
        let dir = scratch("types");
        let map = dir.join("map.tsv");
        let names = dir.join("names.txt");
        std::fs::write(&names, "German city\nCity/Town/Village\n").unwrap();
        std::fs::write(&map, "Potsdam\t0\t1\n").unwrap();

        let table = load_type_table(&TypeTableConfig {
            name_to_type_ids: Some(map),
            type_names: Some(names),
        })
        .unwrap();
        assert_eq!(table.types_of("Potsdam"), Some(vec!["German city", "City/Town/Village"]));
    }
}
