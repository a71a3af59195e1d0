//! # Anotação — Texto com Menções ↔ Entrada do Parser
//!
//! Etapa anterior ao parser de dependências externo. O texto chega com
//! menções `[name|category|original]`; o parser precisa de uma sentença
//! plana em que cada menção seja **um único token**.
//!
//! ```text
//! "The [Actrius|Film|film] first aired in the [Paris_(France)|Location|city] ."
//!        │ clean_sentence(remove_article = true)
//!        ▼
//! "Actrius first aired in Paris ."     entidades: Actrius@1, Paris_(France)@5
//!        │ parser externo (5 colunas)
//!        ▼
//! attach_entities ──► linhas de 6 colunas prontas para o DependencyGraph
//! ```
//!
//! Na entrada anotada do binário cada bloco traz a sentença num cabeçalho
//! [`TEXT_HEADER`], seguida das linhas de 5 colunas do parser:
//!
//! ```text
//! # text = [Actrius|Film|It] was shown .
//! 1	Actrius	NNP	3	nsubjpass
//! 2	was	VBD	3	auxpass
//! 3	shown	VBN	3	ROOT
//! 4	.	.	3	punct
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::{GraphConfig, MentionConfig};
use crate::core::Entity;
use crate::error::{QgError, Result};

use super::morphology::is_lowercase;

fn aside_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s\(\s[^)]*\s\)\s").expect("padrão de aparte válido"))
}

fn spaced_digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d)\s(\d)").expect("padrão de dígitos válido"))
}

fn article_mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?P<article>\b[tT]he\s)?\[(?P<name>[^\]\[|]*?)\|(?P<category>[^\]\[|]*?)\|(?P<original>[^\]\[|]*?)\]")
            .expect("padrão de menção com artigo válido")
    })
}

/// Número de palavras não vazias separadas por espaço simples.
fn word_count(text: &str) -> usize {
    text.split(' ').filter(|w| !w.is_empty()).count()
}

/// Remove as menções de `text`, devolvendo a sentença plana e as entidades
/// com seus endereços (1-based) na sentença resultante.
///
/// - `single_word_originals`: menções cujo original é uma só palavra ficam
///   com o original ("his" em vez de "Albert_Einstein"), o que deixa o parse
///   mais confiável.
/// - `remove_article`: "the" antes de uma menção cujo original está em
///   minúsculas e difere do nome é removido (`The [Actrius|Film|film]`).
pub fn clean_sentence(
    text: &str,
    single_word_originals: bool,
    remove_article: bool,
) -> (String, Vec<Entity>) {
    let text = aside_re().replace_all(text.trim(), " ");

    let mut text = text.into_owned();
    loop {
        let joined = spaced_digits_re().replace_all(&text, "$1,$2").into_owned();
        if joined == text {
            break;
        }
        text = joined;
    }

    let mut out = String::with_capacity(text.len());
    let mut entities = Vec::new();
    let mut last = 0;

    for caps in article_mention_re().captures_iter(&text) {
        let (Some(whole), Some(name), Some(category), Some(original)) = (
            caps.get(0),
            caps.name("name"),
            caps.name("category"),
            caps.name("original"),
        ) else {
            continue;
        };
        let mut entity = Entity::new(name.as_str(), category.as_str(), original.as_str());

        out.push_str(&text[last..whole.start()]);
        if let Some(article) = caps.name("article") {
            let drop_article = remove_article
                && !entity.original.is_empty()
                && is_lowercase(&entity.original)
                && entity.original.to_lowercase() != entity.name.to_lowercase();
            if !drop_article {
                out.push_str(article.as_str());
            }
        }

        entity.address = Some(word_count(&out) + 1);
        if single_word_originals && entity.original.split(' ').count() == 1 {
            out.push_str(&entity.original);
        } else {
            out.push_str(&entity.parseable_name());
        }
        entities.push(entity);
        last = whole.end();
    }
    out.push_str(&text[last..]);

    (out, entities)
}

/// Sentença plana para o parser externo, com a guarda de tamanho.
///
/// # Erros
///
/// [`QgError::SentenceTooLong`] acima de `max_tokens` palavras.
pub fn prepare_for_parser(text: &str, mentions: &MentionConfig, max_tokens: usize) -> Result<String> {
    let (sentence, _) = clean_sentence(text, mentions.single_word_originals, mentions.remove_article);
    let tokens = sentence.split_whitespace().count();
    if tokens > max_tokens {
        return Err(QgError::SentenceTooLong {
            tokens,
            max: max_tokens,
        });
    }
    Ok(sentence)
}

/// Prefixo da linha com a sentença anotada num bloco de entrada.
pub const TEXT_HEADER: &str = "# text = ";

/// Separa um bloco anotado em `(sentença com menções, linhas do parser)`.
///
/// `None` se a primeira linha não for o cabeçalho [`TEXT_HEADER`].
pub fn split_annotated_block(block: &str) -> Option<(&str, &str)> {
    let block = block.trim_start();
    let (header, rows) = block.split_once('\n').unwrap_or((block, ""));
    let text = header.trim_end().strip_prefix(TEXT_HEADER)?;
    Some((text.trim(), rows))
}

/// Acrescenta a coluna de entidade às linhas de 5 colunas do parser.
///
/// `ROOT` vira o rótulo de raiz configurado e um head igual ao próprio
/// endereço vira 0. Endereços de linha sem entidade recebem `None`.
///
/// # Erros
///
/// - [`QgError::SentenceTooLong`] acima de `max_tokens` linhas;
/// - [`QgError::MalformedRow`] para linhas sem 5 colunas;
/// - [`QgError::EntityMismatch`] quando o token no endereço de uma entidade
///   não é nem o nome parseável nem o original.
pub fn attach_entities(
    rows: &str,
    entities: &[Entity],
    config: &GraphConfig,
    max_tokens: usize,
) -> Result<String> {
    let rows: Vec<&str> = rows.lines().map(str::trim_end).filter(|l| !l.is_empty()).collect();
    if rows.len() > max_tokens {
        return Err(QgError::SentenceTooLong {
            tokens: rows.len(),
            max: max_tokens,
        });
    }

    let by_address: HashMap<usize, &Entity> = entities
        .iter()
        .filter_map(|e| e.address.map(|a| (a, e)))
        .collect();
    let separator = config.cell_separator.as_deref().unwrap_or("\t");

    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        let line = index + 1;
        let cells: Vec<&str> = match config.cell_separator.as_deref() {
            Some(sep) => row.split(sep).collect(),
            None => row.split_whitespace().collect(),
        };
        let [address, word, tag, head, rel] = cells[..] else {
            return Err(QgError::MalformedRow {
                line,
                reason: format!("{} colunas, esperadas 5", cells.len()),
            });
        };

        let head = if head == address { "0" } else { head };
        let rel = if rel == "ROOT" { config.root_label.as_str() } else { rel };

        let entity_cell = match by_address.get(&line) {
            Some(entity) => {
                if word != entity.parseable_name() && word != entity.original {
                    tracing::debug!(
                        address = line,
                        token = word,
                        entity = %entity.parseable_name(),
                        "atribuição de entidade falhou"
                    );
                    return Err(QgError::EntityMismatch {
                        address: line,
                        token: word.to_string(),
                        expected: entity.parseable_name(),
                    });
                }
                entity.to_string()
            }
            None => "None".to_string(),
        };

        out.push_str(
            &[address, word, tag, head, rel, entity_cell.as_str()].join(separator),
        );
        out.push('\n');
    }
    Ok(out)
}
