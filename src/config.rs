//! # Configuração — Parâmetros do Gerador
//!
//! [`QgConfig`] agrupa tudo o que varia entre corpora: o rótulo da relação
//! raiz, a base dos endereços, o separador de colunas, o modo com
//! identificadores e as tabelas de tipos.
//!
//! Carregada de JSON (todos os campos opcionais, `#[serde(default)]`) e
//! sobrescrita pelas flags da linha de comando.
//!
//! ```json
//! {
//!   "graph": { "root_label": "root", "zero_based": false, "cell_separator": "\t" },
//!   "mentions": { "id_aware": false, "single_word_originals": true, "remove_article": false },
//!   "generation": { "regard_entity_name": false, "max_tokens": 150 },
//!   "types": { "name_to_type_ids": "mappings/qg_name_to_type_ids.txt",
//!              "type_names": "mappings/qg_types.txt" }
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuração completa do gerador.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QgConfig {
    pub graph: GraphConfig,
    pub mentions: MentionConfig,
    pub generation: GenerationConfig,
    pub types: TypeTableConfig,
}

/// Leitura do formato de intercâmbio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Rótulo da relação da raiz.
    pub root_label: String,
    /// Somar 1 a cada `head` (parsers com endereços 0-based).
    pub zero_based: bool,
    /// Separador de colunas; `None` divide por qualquer espaço em branco.
    pub cell_separator: Option<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            root_label: "root".to_string(),
            zero_based: false,
            cell_separator: Some("\t".to_string()),
        }
    }
}

/// Formato das menções `[name|category|original]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentionConfig {
    /// Aceita `[id:name|category|original]`.
    pub id_aware: bool,
    /// Na entrada do parser, menções de uma palavra ficam com o original.
    pub single_word_originals: bool,
    /// Remove o "the" antes de menções genéricas (`The [Actrius|Film|film]`).
    pub remove_article: bool,
}

impl Default for MentionConfig {
    fn default() -> Self {
        Self {
            id_aware: false,
            single_word_originals: true,
            remove_article: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Reinsere `'s` possessivo e descarta menções pouco confiáveis.
    pub regard_entity_name: bool,
    /// Limite de tokens por sentença antes do parser.
    pub max_tokens: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            regard_entity_name: false,
            max_tokens: 150,
        }
    }
}

/// Caminhos das tabelas de tipos. Ambos ausentes → tabela vazia.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeTableConfig {
    /// `name \t id \t id ...`
    pub name_to_type_ids: Option<PathBuf>,
    /// Um rótulo por linha; o número da linha (0-based) é o id.
    pub type_names: Option<PathBuf>,
}
