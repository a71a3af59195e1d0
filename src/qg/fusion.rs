//! Correções de menções na pergunta montada.
//!
//! O reconhecedor de entidades às vezes marca só parte do nome:
//!
//! ```text
//! [Albert_Einstein|Person|Albert] [Albert_Einstein|Person|Einstein]
//!   → [Albert_Einstein|Person|Albert Einstein]
//! The [The_Hobbit|Book|Hobbit]
//!   → [The_Hobbit|Book|The Hobbit]
//! ```
//!
//! [`remove_entity_mentions`] faz o caminho oposto: menções cujo original
//! em minúsculas não se parece com o nome ("war" para `World_War_II`)
//! voltam a ser texto, ou invalidam a pergunta inteira.

use std::sync::OnceLock;

use regex::Regex;
use rust_stemmers::Stemmer;

use crate::core::Entity;
use crate::nlu::lexicon::{is_pronoun, is_stopword};
use crate::nlu::{is_lowercase, stem_phrase};

fn token_mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[([^\s|\]]*?)\|([^\]\[|]*?)\|([^\]\[|]*?)\]")
            .expect("padrão de menção por token válido")
    })
}

/// Menção no início do token: `(name, category, original)`.
fn mention_at_start(token: &str) -> Option<(String, String, String)> {
    let caps = token_mention_re().captures(token)?;
    if caps.get(0)?.start() != 0 {
        return None;
    }
    Some((caps[1].to_string(), caps[2].to_string(), caps[3].to_string()))
}

fn fused(name: &str, category: &str, original: String) -> String {
    Entity::new(name, category, original).to_mention()
}

/// Funde menções vizinhas da mesma entidade e palavras que completam o nome.
///
/// Três casos, testados nesta ordem para cada menção:
/// 1. a próxima é menção do mesmo nome com outro original;
/// 2. stopwords seguidas da próxima palavra de conteúdo continuam o nome;
/// 3. a palavra anterior é o início do nome ("The" + `The_Hobbit`).
pub fn correct_entity_recognition(mut tokens: Vec<String>) -> Vec<String> {
    let mut i = 0;
    while i < tokens.len() {
        let Some((name, category, original)) = mention_at_start(&tokens[i]) else {
            i += 1;
            continue;
        };

        if i + 1 < tokens.len() {
            match mention_at_start(&tokens[i + 1]) {
                Some((next_name, _, next_original)) => {
                    let readable = name.to_lowercase().replace('_', " ");
                    if name == next_name
                        && original != next_original
                        && readable.contains(&original.to_lowercase())
                        && readable.contains(&next_original.to_lowercase())
                    {
                        tracing::debug!(%name, "menções vizinhas fundidas");
                        tokens[i] = fused(&name, &category, format!("{} {}", original, next_original));
                        tokens.remove(i + 1);
                        continue;
                    }
                }
                None => {
                    let mut successors: Vec<String> = Vec::new();
                    for word in &tokens[i + 1..] {
                        if !is_stopword(word) {
                            let content = mention_at_start(word).map_or_else(|| word.clone(), |m| m.2);
                            successors.push(content);
                            break;
                        }
                        successors.push(word.clone());
                    }
                    let joined = successors.join("_");
                    let prefix = format!(
                        "{}_{}",
                        original.to_lowercase().replace(' ', "_"),
                        joined.to_lowercase()
                    );
                    if name.to_lowercase().starts_with(&prefix) {
                        tracing::debug!(%name, "menção estendida para a direita");
                        tokens[i] = fused(
                            &name,
                            &category,
                            format!("{} {}", original, joined.replace('_', " ")),
                        );
                        tokens.drain(i + 1..i + 1 + successors.len());
                        continue;
                    }
                }
            }
        }

        if i > 0 && mention_at_start(&tokens[i - 1]).is_none() {
            let previous = tokens[i - 1].clone();
            if name.starts_with(&format!("{}_{}", previous, original.replace(' ', "_"))) {
                tracing::debug!(%name, "menção estendida para a esquerda");
                tokens[i] = fused(&name, &category, format!("{} {}", previous, original));
                tokens.remove(i - 1);
                i -= 1;
                continue;
            }
        }
        i += 1;
    }
    tokens
}

/// Troca menções pouco confiáveis pelo texto original.
///
/// Uma menção é suspeita quando o original está em minúsculas, não é
/// pronome e tem radicais diferentes dos do nome. Se ela vier depois de
/// "the" e for a única menção desse nome, a pergunta inteira é descartada
/// e o retorno é vazio.
pub fn remove_entity_mentions(text: &str, stemmer: &Stemmer, id_aware: bool) -> String {
    let entities = Entity::find_all_mentions(text, id_aware);
    let mut out = text.to_string();

    for (i, entity) in entities.iter().enumerate() {
        let suspicious = is_lowercase(&entity.original)
            && !is_pronoun(&entity.original.to_lowercase())
            && stem_phrase(stemmer, &entity.clean_name()) != stem_phrase(stemmer, &entity.original);
        if !suspicious {
            continue;
        }

        let mention = entity.to_mention();
        let after_article =
            out.contains(&format!("the {}", mention)) || out.contains(&format!("The {}", mention));
        let unique = !entities
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && other.name == entity.name);
        if after_article && unique {
            tracing::debug!(name = %entity.name, original = %entity.original, "menção genérica, pergunta descartada");
            return String::new();
        }
        out = out.replace(&mention, &entity.original);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_stemmers::Algorithm;

    fn toks(text: &str) -> Vec<String> {
        text.split(' ').map(str::to_string).collect()
    }

    fn correct(text: &str) -> String {
        correct_entity_recognition(toks(text)).join(" ")
    }

    // ─── correct_entity_recognition ──────────────────────────────

    /// Duas menções da mesma entidade lado a lado viram uma.
    #[test]
    fn adjacent_mentions_are_merged() {
        assert_eq!(
            correct("Who was [Albert_Einstein|Person|Albert] [Albert_Einstein|Person|Einstein] ?"),
            "Who was [Albert_Einstein|Person|Albert Einstein] ?"
        );
    }

    /// Stopwords e a palavra seguinte completam o nome.
    #[test]
    fn stopword_run_extends_mention() {
        assert_eq!(
            correct("He studied at [University_of_Calgary|Organisation|University] of [Calgary|Location|Calgary] ."),
            "He studied at [University_of_Calgary|Organisation|University of Calgary] ."
        );
    }

    /// Sem casamento com o nome, nada muda.
    #[test]
    fn unrelated_successor_is_kept() {
        let text = "What is [Alabama|Location|Alabama] 's capital ?";
        assert_eq!(correct(text), text);
        let text = "Who composed [Rhapsody_in_Blue|Musical Work|Rhapsody in Blue] in 1924 ?";
        assert_eq!(correct(text), text);
    }

    /// A palavra anterior que inicia o nome entra na menção.
    #[test]
    fn preceding_word_extends_mention() {
        assert_eq!(
            correct("Who wrote The [The_Hobbit|Book|Hobbit] ?"),
            "Who wrote [The_Hobbit|Book|The Hobbit] ?"
        );
    }

    /// Palavra de conteúdo logo depois da menção.
    #[test]
    fn content_word_extends_mention() {
        assert_eq!(
            correct("Who taught [American_History_X|Film|American History] X ?"),
            "Who taught [American_History_X|Film|American History X] ?"
        );
    }

    /// Mesmo nome com o mesmo original não funde.
    #[test]
    fn identical_mentions_are_kept() {
        let text = "[Bob|Person|Bob] [Bob|Person|Bob] ?";
        assert_eq!(correct(text), text);
    }

    // ─── remove_entity_mentions ──────────────────────────────────

    fn stemmer() -> Stemmer {
        Stemmer::create(Algorithm::English)
    }

    /// Menção genérica depois de "the" descarta a pergunta.
    #[test]
    fn generic_mention_after_article_discards() {
        let s = stemmer();
        assert_eq!(
            remove_entity_mentions("Who fought in the [World_War_II|Event|war] ?", &s, false),
            ""
        );
    }

    /// Sem artigo, a menção volta a ser texto.
    #[test]
    fn generic_mention_becomes_text() {
        let s = stemmer();
        assert_eq!(
            remove_entity_mentions("Who fought in [World_War_II|Event|war] ?", &s, false),
            "Who fought in war ?"
        );
    }

    /// Pronomes, nomes próprios e originais com o mesmo radical ficam.
    #[test]
    fn reliable_mentions_are_kept() {
        let s = stemmer();
        for text in [
            "Who read [Alice|Person|her] 's book ?",
            "Who met [Bob|Person|Bob] ?",
            "Who visited the [Paris|Location|paris] ?",
            "Who won the [World_War|Event|world war] ?",
        ] {
            assert_eq!(remove_entity_mentions(text, &s, false), text);
        }
    }

    /// Nome repetido: a menção depois de "the" só é trocada.
    #[test]
    fn repeated_name_is_replaced_not_discarded() {
        let s = stemmer();
        assert_eq!(
            remove_entity_mentions(
                "Did the [World_War_II|Event|war] end [World_War_II|Event|World War II] ?",
                &s,
                false
            ),
            "Did the war end [World_War_II|Event|World War II] ?"
        );
    }

    /// Menções com identificador.
    #[test]
    fn id_aware_mentions_are_replaced() {
        let s = stemmer();
        assert_eq!(
            remove_entity_mentions("Who fought in [Q362:World_War_II|Event|war] ?", &s, true),
            "Who fought in war ?"
        );
    }
}
