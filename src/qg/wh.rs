//! Escolha das palavras interrogativas.
//!
//! ```text
//! relação nummod            → "How many"
//! categoria de pessoa       → "Who" / "Whose"
//! demais entidades          → "Which <tipo>" ... + "What"
//! ```
//!
//! Os tipos vêm da [`TypeTable`]; tipos já presentes na pergunta são
//! descartados ("Which city is the city ..." não faz sentido).

use crate::core::{Entity, Node, TypeTable, SUBJECT_RELATIONS};
use crate::nlu::lexicon::WHO_CATEGORIES;
use crate::nlu::{get_plural, lemmatize_noun};

/// Tipo genérico que se desdobra em "City" e "Town".
const CITY_TOWN_VILLAGE: &str = "City/Town/Village";

const SETTLEMENT_WORDS: &[&str] = &["village", "town", "city"];

/// Plural de um rótulo de tipo; em "X of Y" só X vai ao plural.
fn pluralize_type(label: &str) -> String {
    let of_at = label
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| label.get(i..i + 4).is_some_and(|s| s.eq_ignore_ascii_case(" of ")));
    match of_at {
        Some(i) => format!("{}{}", get_plural(&label[..i]), &label[i..]),
        None => get_plural(label),
    }
}

/// Palavras interrogativas para uma resposta com relação `answer_rel`.
///
/// `question_tokens` é a pergunta já renderizada com as entidades
/// mascaradas; serve para descartar tipos repetidos. `root` decide o
/// plural ("Which fields of study are ..." com raiz `VBP`).
pub fn resolve_wh_words(
    types: &TypeTable,
    entity: Option<&Entity>,
    question_tokens: &[String],
    root: Option<&Node>,
    answer_rel: &str,
) -> Vec<String> {
    if answer_rel == "nummod" {
        return vec!["How many".to_string()];
    }
    let Some(entity) = entity else {
        return Vec::new();
    };
    let possessive = answer_rel == "poss";

    if WHO_CATEGORIES.contains(&entity.category.as_str()) {
        let wh = if possessive { "Whose" } else { "Who" };
        return vec![wh.to_string()];
    }

    let mut wh_words = Vec::new();
    if let Some(labels) = types.types_of(&entity.name) {
        let lemmas: Vec<String> = question_tokens.iter().map(|t| lemmatize_noun(t)).collect();
        let mentioned = |label: &str| lemmas.contains(&lemmatize_noun(label));

        let mut labels: Vec<String> = labels
            .into_iter()
            .filter(|&label| !mentioned(label))
            .map(str::to_string)
            .collect();

        if let Some(pos) = labels.iter().position(|l| l == CITY_TOWN_VILLAGE) {
            labels.remove(pos);
            if !SETTLEMENT_WORDS.iter().any(|&w| mentioned(w)) {
                labels.push("City".to_string());
                labels.push("Town".to_string());
            }
        }

        let plural = answer_rel_is_subject(answer_rel) && root.is_some_and(|r| r.tag() == "VBP");
        if plural {
            labels = labels.iter().map(|l| pluralize_type(l)).collect();
        }

        let suffix = if possessive { " 's" } else { "" };
        wh_words.extend(
            labels
                .iter()
                .map(|l| format!("Which {}{}", l.to_lowercase(), suffix)),
        );
    }

    if !possessive {
        wh_words.push("What".to_string());
    }
    wh_words
}

fn answer_rel_is_subject(rel: &str) -> bool {
    SUBJECT_RELATIONS.contains(&rel)
}
