//! Perguntas cuja resposta é um objeto, um lugar ou uma data.
//!
//! | Nó de resposta | Condição | Palavra interrogativa |
//! |----------------|----------|-----------------------|
//! | `dobj` com entidade | categoria conhecida | pela categoria/tipos |
//! | `poss` com entidade | governante é `dobj` | "Whose" / "Which X 's" |
//! | `pobj` Location | preposição de lugar ligada à raiz | "Where" |
//! | `pobj` ano ou mês | preposição temporal ligada à raiz | "When" |
//!
//! A pergunta é montada com inversão: auxiliar, sujeito, predicado e o
//! restante da sentença.
//!
//! ```text
//! Gershwin composed [Rhapsody in Blue] in 1924 .
//!   → What + did + Gershwin + compose + in 1924 + ?
//! ```

use crate::core::{DependencyGraph, SUBJECT_RELATIONS};
use crate::nlu::lemmatize_verb;
use crate::nlu::lexicon::{is_context_word, is_year_or_month, DASHES, TEMPORAL_PREPOSITIONS};

use super::assembly::{render, Piece};
use super::auxiliary::{determine_auxiliaries, Auxiliaries};
use super::wh::resolve_wh_words;
use super::{Method, QuestionAnswer, QuestionGenerator};

/// Preposições que não indicam lugar ("a letter from Paris").
const NON_LOCATIVE_PREPOSITIONS: &[&str] = &["for", "as", "of", "from", "by", "with"];

/// Preposições de frases de lugar que concorrem com a resposta.
const DETACHED_LOCATIVE_EXCEPTIONS: &[&str] = &["of", "from", "by", "with", "for", "as", "to"];

fn is_location_pobj(graph: &DependencyGraph, address: usize) -> bool {
    graph.get(address).is_some_and(|n| {
        n.rel() == "pobj" && n.entity.as_ref().is_some_and(|e| e.category == "Location")
    })
}

/// Remove as frases temporais ("in 1924", "on May 3") ligadas por preposição.
fn remove_time_phrases(graph: &mut DependencyGraph) {
    let prepositions: Vec<usize> = graph
        .nodes_with_relations(&["pobj"])
        .into_iter()
        .filter(|n| is_year_or_month(n.word()))
        .filter_map(|n| n.head.and_then(|h| graph.get(h)))
        .filter(|head| head.tag() == "IN" && TEMPORAL_PREPOSITIONS.contains(&head.word().to_lowercase().as_str()))
        .map(|head| head.address)
        .collect();

    for preposition in prepositions {
        if graph.contains(preposition) {
            graph.remove_recursive(preposition);
            graph.remove(preposition);
        }
    }
}

/// Remove as outras frases de lugar, exceto as de preposição não locativa.
fn remove_location_phrases(graph: &mut DependencyGraph) {
    let prepositions: Vec<usize> = graph
        .iter()
        .filter(|n| is_location_pobj(graph, n.address))
        .filter_map(|n| n.head)
        .collect();

    for preposition in prepositions {
        let competing = graph
            .get(preposition)
            .is_some_and(|p| !p.word_in(DETACHED_LOCATIVE_EXCEPTIONS));
        if competing {
            graph.remove_recursive(preposition);
            graph.remove(preposition);
        }
    }
}

impl QuestionGenerator<'_> {
    /// Todas as perguntas de objeto para a raiz `root`.
    pub(crate) fn object_questions(&self, graph: &DependencyGraph, root: usize) -> Vec<QuestionAnswer> {
        let mut questions = Vec::new();

        for node in graph.iter() {
            if node.word.as_deref().map_or(true, str::is_empty)
                || !graph.is_within_main_dependents(root, node.address)
            {
                continue;
            }
            let head = node.head.and_then(|h| graph.get(h));

            let wh_words: Vec<&str> = match (node.rel(), &node.entity) {
                ("dobj", Some(entity)) if entity.category != "unknown" => vec![],
                ("poss", Some(_)) if head.is_some_and(|h| h.rel() == "dobj") => vec![],
                ("pobj", entity) => {
                    let Some(head) = head.filter(|h| h.head == Some(root)) else {
                        continue;
                    };
                    let locative = entity.as_ref().is_some_and(|e| e.category == "Location")
                        && head.rel() == "prep"
                        && head.has_tag(&["IN", "RP"]);
                    if locative {
                        if head.word_in(NON_LOCATIVE_PREPOSITIONS) {
                            continue;
                        }
                        vec!["Where"]
                    } else if is_year_or_month(node.word())
                        && head.tag() == "IN"
                        && TEMPORAL_PREPOSITIONS.contains(&head.word().to_lowercase().as_str())
                    {
                        vec!["When"]
                    } else {
                        continue;
                    }
                }
                _ => continue,
            };

            let wh_words: Vec<String> = wh_words.into_iter().map(str::to_string).collect();
            let pairs = self.object_question(graph, node.address, wh_words);
            tracing::debug!(address = node.address, count = pairs.len(), "perguntas de objeto");
            questions.extend(
                pairs
                    .into_iter()
                    .map(|(question, answer)| QuestionAnswer::new(question, answer, Method::Object)),
            );
        }
        questions
    }

    /// Monta a pergunta para o nó de resposta `address`.
    ///
    /// `wh_words` vazio: as palavras interrogativas saem da entidade.
    fn object_question(
        &self,
        graph: &DependencyGraph,
        address: usize,
        wh_words: Vec<String>,
    ) -> Vec<(String, String)> {
        let mut g = graph.clone();
        let answer = self.form_answer(&mut g, address);
        let Some(node) = g.get_mut(address) else {
            return Vec::new();
        };
        let entity = node.entity.take();
        let rel = node.rel().to_string();
        let node_head = node.head;
        g.remove_recursive(address);

        if rel == "pobj" {
            if let Some(preposition) = node_head {
                if graph.get(preposition).map_or(true, |p| p.word() != "to") {
                    g.remove(preposition);
                }
            }
        }

        let asks_when = wh_words.iter().any(|w| w == "When");
        let asks_where = wh_words.iter().any(|w| w == "Where");
        if asks_when {
            remove_time_phrases(&mut g);
        }

        // a primeira palavra deixa de abrir a sentença
        if let Some(first) = g.get_mut(1) {
            let lowercase = first.word.as_deref().is_some_and(|w| !w.is_empty() && w != "I")
                && !first.has_tag(&["NNP", "NNPS"]);
            if lowercase {
                first.word = first.word.as_deref().map(str::to_lowercase);
            }
        }

        if asks_where {
            remove_location_phrases(&mut g);
        }

        let mut pieces: Vec<Piece> = Vec::new();
        if rel == "poss" {
            if let Some(possessed) = node_head.filter(|&h| g.contains(h)) {
                let mut phrase = g.subtree_excluding(possessed, &[address]);
                phrase.push(possessed);
                phrase.sort_unstable();
                pieces.extend(Piece::nodes(phrase));
            }
            g.remove_recursive(address);
            g.remove(address);
        }

        let Some(root) = g.root().map(|r| r.address) else {
            return Vec::new();
        };
        let infinitive = lemmatize_verb(g.get(root).map_or("", |r| r.word()));
        let Auxiliaries { active, mut passive } = determine_auxiliaries(&mut g, root, &infinitive);
        let copula = infinitive == "be";

        if active.is_empty() && passive.is_empty() && !copula {
            tracing::debug!(%infinitive, "raiz sem auxiliar possível");
            return Vec::new();
        }

        if copula {
            pieces.push(Piece::Node(root));
        } else if let Some(first) = active.first() {
            pieces.push(Piece::text(first.as_str()));
        } else {
            pieces.extend(passive.drain(..).map(Piece::Text));
        }

        // "It" anotado com oração completiva volta a ser pronome
        let root_has_ccomp = g.get(root).is_some_and(|r| r.had_dependent("ccomp"));
        let first_subject = g.nodes_with_relations(SUBJECT_RELATIONS).first().map(|n| n.address);
        if let Some(subject) = first_subject.and_then(|s| g.get_mut(s)) {
            let expletive = subject
                .entity
                .as_ref()
                .is_some_and(|e| e.original.to_lowercase() == "it");
            if expletive && root_has_ccomp {
                subject.word = Some("it".to_string());
                subject.entity = None;
            }
        }

        let Some(subject) = g
            .nodes_with_relations(SUBJECT_RELATIONS)
            .into_iter()
            .find(|n| n.head == Some(root))
            .map(|n| n.address)
        else {
            return Vec::new();
        };
        let mut subject_phrase = g.phrase(subject);
        if subject_phrase
            .first()
            .and_then(|&a| g.get(a))
            .is_some_and(|n| n.word_in(DASHES))
        {
            subject_phrase.remove(0);
        }
        pieces.extend(Piece::nodes(subject_phrase));

        if !copula {
            pieces.extend(active.iter().skip(1).map(|w| Piece::text(w.as_str())));
            pieces.extend(passive.into_iter().map(Piece::Text));
            let predicate: Vec<usize> = g
                .predicate_list(root)
                .into_iter()
                .filter(|&a| g.get(a).is_some_and(|n| !is_context_word(n.word())))
                .collect();
            pieces.extend(Piece::nodes(predicate));
        }

        // restante da sentença: depois da raiz, e antes do governante da resposta
        let answer_before_root = address < root;
        let rest: Vec<usize> = g
            .addresses()
            .into_iter()
            .filter(|&i| {
                if answer_before_root {
                    i > root
                } else {
                    root < i && node_head.is_some_and(|h| i < h)
                }
            })
            .filter(|&i| !pieces.contains(&Piece::Node(i)))
            .collect();
        pieces.extend(Piece::nodes(rest));

        // a primeira frase preposicional ligada à raiz
        let prepositions: Vec<usize> = g
            .nodes_with_relations(&["prep"])
            .into_iter()
            .filter(|n| n.head == Some(root))
            .map(|n| n.address)
            .collect();
        let mut prep_phrase = Vec::new();
        for preposition in prepositions {
            if pieces.contains(&Piece::Node(preposition)) || preposition < root {
                continue;
            }
            let subtree = g.subtree(preposition);
            if subtree.contains(&address) {
                continue;
            }
            if asks_where && subtree.iter().any(|&a| is_location_pobj(&g, a)) {
                break;
            }
            prep_phrase.extend(subtree);
            prep_phrase.push(preposition);
            break;
        }
        prep_phrase.sort_unstable();
        pieces.extend(Piece::nodes(prep_phrase));

        // orações completivas da raiz
        let complements: Vec<usize> = g
            .nodes_with_relations(&["ccomp", "xcomp"])
            .into_iter()
            .filter(|n| n.head == Some(root))
            .map(|n| n.address)
            .filter(|&c| c >= root && !pieces.contains(&Piece::Node(c)))
            .collect();
        let mut complement_phrase = Vec::new();
        for complement in complements {
            complement_phrase.extend(g.subtree(complement));
            complement_phrase.push(complement);
        }
        complement_phrase.sort_unstable();
        pieces.extend(Piece::nodes(complement_phrase));

        pieces.push(Piece::text("?"));

        let wh_words = if wh_words.is_empty() {
            let masked = render(&g, &pieces, true, false);
            resolve_wh_words(self.types, entity.as_ref(), &masked, g.get(root), &rel)
        } else {
            wh_words
        };
        self.form_question(&g, &pieces, &wh_words, &answer)
    }
}
