//! # Entity — Menção Anotada de uma Entidade
//!
//! Uma [`Entity`] representa um trecho da sentença marcado como menção:
//! nome canônico, categoria, forma de superfície original e, opcionalmente,
//! a posição (endereço) do token e um identificador externo.
//!
//! ## Formatos Textuais
//!
//! | Formato | Exemplo | Uso |
//! |---------|---------|-----|
//! | Menção | `[Albert_Einstein\|Person\|Einstein]` | entrada e saída de texto |
//! | Menção com id | `[Q937:Albert_Einstein\|Person\|Einstein]` | modo `id_aware` |
//! | Tupla | `("Albert_Einstein", "Person", "Einstein", 3)` | coluna 6 do formato de intercâmbio |
//!
//! ## Visões Derivadas
//!
//! ```text
//! name:            The_Lord_of_the_Rings__The_Two_Towers_(film)
//! clean_name:      The Lord of the Rings: The Two Towers (film)
//! plain_name:      The Lord of the Rings: The Two Towers
//! parseable_name:  The_Lord_of_the_Rings__The_Two_Towers
//! ```

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Menção `[name|category|original]` (nomes podem conter espaços).
const MENTION_PATTERN: &str = r"\[([^\]\[|]*?)\|([^\]\[|]*?)\|([^\]\[|]*?)\]";

/// Menção com prefixo opcional de identificador: `[id:name|category|original]`.
const ID_MENTION_PATTERN: &str =
    r"\[(?:([^\]\[|:\s]+):)?([^\]\[|]*?)\|([^\]\[|]*?)\|([^\]\[|]*?)\]";

/// Tupla da coluna de entidade, com id opcional no modo `id_aware`.
const TUPLE_PATTERN: &str =
    r#"^\("(.*?)", "(.*?)", "(.*?)", (-?\d*)(?:, "(.*?)")?\)$"#;

fn mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MENTION_PATTERN).expect("padrão de menção válido"))
}

fn id_mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ID_MENTION_PATTERN).expect("padrão de menção com id válido"))
}

fn tuple_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TUPLE_PATTERN).expect("padrão de tupla válido"))
}

fn disambiguation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(_|\s)\(.*\).*").expect("padrão de desambiguação válido"))
}

fn non_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W").expect("padrão \\W válido"))
}

/// Entidade anotada em uma sentença.
///
/// O `address` só é definido depois que a sentença foi tokenizada; o `id`
/// só existe quando a menção veio no formato com identificador.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Nome canônico, palavras separadas por `_`.
    pub name: String,
    /// Rótulo livre de categoria (ex: "Person", "Location").
    pub category: String,
    /// Forma de superfície como apareceu no texto.
    pub original: String,
    /// Posição 1-based do token na sentença.
    pub address: Option<usize>,
    /// Identificador externo na base de conhecimento.
    pub id: Option<String>,
}

impl Entity {
    /// Cria uma entidade sem endereço e sem identificador.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        original: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            original: original.into(),
            address: None,
            id: None,
        }
    }

    /// Define o endereço do token (builder).
    pub fn with_address(mut self, address: usize) -> Self {
        self.address = Some(address);
        self
    }

    /// Define o identificador externo (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // ─── Parsing ─────────────────────────────────────────────────

    /// Interpreta uma menção no **início** de `text`.
    ///
    /// Retorna `None` se o texto não começar por uma menção bem formada.
    /// Com `id_aware`, um prefixo `id:` no nome vira [`Entity::id`].
    pub fn parse_mention(text: &str, id_aware: bool) -> Option<Self> {
        if id_aware {
            let caps = id_mention_re().captures(text)?;
            if caps.get(0)?.start() != 0 {
                return None;
            }
            let mut entity = Self::new(&caps[2], &caps[3], &caps[4]);
            entity.id = caps.get(1).map(|m| m.as_str().to_string());
            Some(entity)
        } else {
            let caps = mention_re().captures(text)?;
            if caps.get(0)?.start() != 0 {
                return None;
            }
            Some(Self::new(&caps[1], &caps[2], &caps[3]))
        }
    }

    /// Encontra todas as menções de `text`, da esquerda para a direita,
    /// sem sobreposição.
    pub fn find_all_mentions(text: &str, id_aware: bool) -> Vec<Self> {
        if id_aware {
            id_mention_re()
                .captures_iter(text)
                .map(|caps| {
                    let mut entity = Self::new(&caps[2], &caps[3], &caps[4]);
                    entity.id = caps.get(1).map(|m| m.as_str().to_string());
                    entity
                })
                .collect()
        } else {
            mention_re()
                .captures_iter(text)
                .map(|caps| Self::new(&caps[1], &caps[2], &caps[3]))
                .collect()
        }
    }

    /// Interpreta a coluna de entidade do formato de intercâmbio.
    ///
    /// `"None"` não chega aqui: o construtor do grafo já o trata como nulo.
    /// Endereços vazios ou negativos ficam sem endereço; o id `"None"`
    /// é tratado como ausente.
    pub fn parse_tuple(cell: &str) -> Option<Self> {
        let caps = tuple_re().captures(cell.trim())?;
        let mut entity = Self::new(&caps[1], &caps[2], &caps[3]);
        entity.address = caps[4].parse::<i64>().ok().and_then(|a| usize::try_from(a).ok()).filter(|&a| a > 0);
        entity.id = caps
            .get(5)
            .map(|m| m.as_str())
            .filter(|id| *id != "None")
            .map(str::to_string);
        Some(entity)
    }

    // ─── Formatação ──────────────────────────────────────────────

    /// Formata a entidade como menção.
    ///
    /// - `include_original = false` → `[name|category]`
    /// - `nospace_category = true` → espaços da categoria viram `_`
    /// - id presente → `[id:name|...]`
    pub fn format(&self, include_original: bool, nospace_category: bool) -> String {
        let category = if nospace_category {
            self.category.replace(' ', "_")
        } else {
            self.category.clone()
        };
        let name = match &self.id {
            Some(id) => format!("{}:{}", id, self.name),
            None => self.name.clone(),
        };
        if include_original {
            format!("[{}|{}|{}]", name, category, self.original)
        } else {
            format!("[{}|{}]", name, category)
        }
    }

    /// Formato completo `[name|category|original]`, usado na montagem das perguntas.
    pub fn to_mention(&self) -> String {
        self.format(true, false)
    }

    // ─── Visões derivadas do nome ────────────────────────────────

    /// Nome legível: `__` vira `: ` e `_` vira espaço.
    pub fn clean_name(&self) -> String {
        clean_name(&self.name)
    }

    /// Nome sem o sufixo de desambiguação (`Paris_(France)` → `Paris`).
    pub fn remove_disambiguation(&self) -> String {
        disambiguation_re().replace(&self.name, "").into_owned()
    }

    /// Nome sem desambiguação e sem underscores.
    pub fn plain_name(&self) -> String {
        clean_name(&self.remove_disambiguation())
    }

    /// Nome que o parser trata como um único token.
    pub fn parseable_name(&self) -> String {
        non_word_re()
            .replace_all(&self.remove_disambiguation(), "")
            .into_owned()
    }

    /// Forma original utilizável como um único token.
    pub fn parseable_original(&self) -> String {
        non_word_re().replace_all(&self.original, "").into_owned()
    }
}

/// Limpeza de nome usada por [`Entity::clean_name`].
pub fn clean_name(name: &str) -> String {
    name.replace("__", ": ").replace('_', " ")
}

impl fmt::Display for Entity {
    /// Forma de tupla da coluna de entidade; endereço ausente vira `-1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address = self.address.map(|a| a as i64).unwrap_or(-1);
        write!(
            f,
            "(\"{}\", \"{}\", \"{}\", {}",
            self.name, self.category, self.original, address
        )?;
        if let Some(id) = &self.id {
            write!(f, ", \"{}\"", id)?;
        }
        write!(f, ")")
    }
}
