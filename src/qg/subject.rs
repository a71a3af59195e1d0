//! Perguntas cuja resposta é o sujeito.
//!
//! O sujeito (ou o possessivo dentro dele, ou um numeral que o quantifica)
//! sai da sentença; o que vem depois dele vira a pergunta:
//!
//! ```text
//! [Gershwin] composed Rhapsody in Blue in 1924 .
//!   → Who composed [Rhapsody_in_Blue|...] in 1924 ?
//! ```

use crate::core::{DependencyGraph, Node, SUBJECT_RELATIONS};
use crate::nlu::lemmatize_verb;
use crate::nlu::lexicon::is_context_word;

use super::assembly::{render, Piece};
use super::wh::resolve_wh_words;
use super::{Method, QuestionAnswer, QuestionGenerator};

/// Determinantes que impedem "How many" ("these three books").
const DEMONSTRATIVES: &[&str] = &["that", "these", "those"];

impl QuestionGenerator<'_> {
    /// Todas as perguntas de sujeito para a raiz `root`.
    pub(crate) fn subject_questions(&self, graph: &DependencyGraph, root: usize) -> Vec<QuestionAnswer> {
        let Some(root_node) = graph.get(root) else {
            return Vec::new();
        };
        let mut questions = Vec::new();

        for node in graph.iter() {
            if !graph.is_within_main_dependents(root, node.address) {
                continue;
            }
            let head = node.head.and_then(|h| graph.get(h));
            if !is_subject_candidate(node, head, root_node) {
                continue;
            }
            let expletive_it = node
                .entity
                .as_ref()
                .is_some_and(|e| e.original.to_lowercase() == "it");
            if expletive_it && root_node.had_dependent("ccomp") {
                continue;
            }
            if node.rel() == "nummod" && head.is_some_and(|h| has_determiner(graph, h.address)) {
                continue;
            }

            let address = node.address;
            let mut clone = graph.clone();
            let answer = self.form_answer(&mut clone, address);
            if let Some(answer_node) = clone.get_mut(address) {
                answer_node.entity = None;
            }
            clone.remove_recursive(address);

            let mut pieces: Vec<Piece> = Piece::nodes(
                clone
                    .iter()
                    .filter(|n| n.address > address)
                    .filter(|n| !(is_context_word(n.word()) && n.address + 1 == root))
                    .map(|n| n.address),
            )
            .collect();
            pieces.push(Piece::text("?"));

            let masked = render(&clone, &pieces, true, false);
            let wh_words =
                resolve_wh_words(self.types, node.entity.as_ref(), &masked, Some(root_node), node.rel());
            if wh_words.is_empty() {
                continue;
            }

            let pairs = self.form_question(&clone, &pieces, &wh_words, &answer);
            tracing::debug!(address, count = pairs.len(), "perguntas de sujeito");
            questions.extend(
                pairs
                    .into_iter()
                    .map(|(question, answer)| QuestionAnswer::new(question, answer, Method::Subject)),
            );
        }
        questions
    }
}

/// Sujeito com entidade, possessivo dentro do sujeito, ou numeral que
/// quantifica um sujeito plural de verbo que não é "be".
fn is_subject_candidate(node: &Node, head: Option<&Node>, root: &Node) -> bool {
    let head_is_subject = head.is_some_and(|h| h.has_rel(SUBJECT_RELATIONS));
    if let Some(entity) = &node.entity {
        let subject = node.has_rel(SUBJECT_RELATIONS) && entity.category != "unknown";
        let possessive = node.rel() == "poss" && head_is_subject;
        if subject || possessive {
            return true;
        }
    }
    node.rel() == "nummod"
        && head_is_subject
        && head.is_some_and(|h| h.has_tag(&["NNS", "NNPS"]))
        && lemmatize_verb(root.word()) != "be"
}

fn has_determiner(graph: &DependencyGraph, head: usize) -> bool {
    graph.subtree(head).into_iter().filter_map(|a| graph.get(a)).any(|n| {
        n.rel() == "det" || DEMONSTRATIVES.contains(&n.word().to_lowercase().as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GraphConfig, QgConfig};
    use crate::core::TypeTable;
    use crate::fixtures::*;

    fn parse(rows: &[&str]) -> DependencyGraph {
        DependencyGraph::parse(&block(rows), &GraphConfig::default()).unwrap()
    }

    fn questions(table: &TypeTable, rows: &[&str]) -> Vec<(String, String)> {
        let qg = QuestionGenerator::new(table, QgConfig::default());
        let g = parse(rows);
        let root = g.root().unwrap().address;
        qg.subject_questions(&g, root)
            .into_iter()
            .map(|qa| (qa.question, qa.answer))
            .collect()
    }

    #[test]
    fn person_subject_asks_who() {
        let table = TypeTable::new();
        assert_eq!(
            questions(&table, GERSHWIN),
            vec![(
                "Who composed [Rhapsody_in_Blue|Musical Work|Rhapsody in Blue] in 1924 ?".to_string(),
                "[George_Gershwin|Musical Artist|Gershwin]".to_string()
            )]
        );
    }

    /// Passiva: o auxiliar fica na pergunta.
    #[test]
    fn passive_subject_keeps_auxiliary() {
        let table = TypeTable::new();
        assert_eq!(
            questions(&table, RIEL),
            vec![(
                "Who was born in [Winnipeg|Location|Winnipeg] ?".to_string(),
                "[Louis_Riel|Person|Riel]".to_string()
            )]
        );
    }

    /// Um par por tipo conhecido, mais "What".
    #[test]
    fn typed_subject_asks_which() {
        let mut table = TypeTable::new();
        table.insert("Potsdam", &["German city", "City/Town/Village"]);
        let got: Vec<String> = questions(&table, POTSDAM).into_iter().map(|(q, _)| q).collect();
        assert_eq!(
            got,
            vec![
                "Which german city is the capital of [Brandenburg|Location|Brandenburg] ?",
                "Which city is the capital of [Brandenburg|Location|Brandenburg] ?",
                "Which town is the capital of [Brandenburg|Location|Brandenburg] ?",
                "What is the capital of [Brandenburg|Location|Brandenburg] ?",
            ]
        );
    }

    /// "It" expletivo com oração completiva não gera pergunta.
    #[test]
    fn expletive_it_is_skipped() {
        let table = TypeTable::new();
        assert!(questions(&table, IT_CCOMP).is_empty());
    }

    /// A completiva removida antes da geração ainda conta para o "It".
    #[test]
    fn expletive_it_is_skipped_after_complement_removal() {
        let table = TypeTable::new();
        let qg = QuestionGenerator::new(&table, QgConfig::default());
        let mut g = parse(IT_WORRIED);
        g.remove_recursive(6);
        g.remove(6);
        assert!(!g.get(2).unwrap().has_dependent("ccomp"));
        assert!(qg.subject_questions(&g, 2).is_empty());
    }

    /// Advérbio de contexto logo antes da raiz sai da pergunta.
    #[test]
    fn context_word_before_root_is_dropped() {
        let table = TypeTable::new();
        let got = questions(
            &table,
            &[
                "1\tBob\tNNP\t3\tnsubj\t(\"Bob\", \"Person\", \"Bob\", 1)",
                "2\tthen\tRB\t3\tadvmod\tNone",
                "3\tmet\tVBD\t0\troot\tNone",
                "4\tAlice\tNNP\t3\tdobj\t(\"Alice\", \"Person\", \"Alice\", 4)",
                "5\t.\t.\t3\tpunct\tNone",
            ],
        );
        assert_eq!(got[0].0, "Who met [Alice|Person|Alice] ?");
    }

    /// O numeral é candidato, mas `nummod` não é relação argumental:
    /// a partir da raiz ele nunca é alcançado e "How many" não sai.
    #[test]
    fn nummod_subject_is_outside_main_dependents() {
        let table = TypeTable::new();
        let g = parse(THREE_BOYS);
        let root = g.get(3).unwrap();
        assert!(is_subject_candidate(g.get(1).unwrap(), g.get(2), root));
        assert!(!g.is_within_main_dependents(3, 1));
        assert!(questions(&table, THREE_BOYS).is_empty());
    }

    #[test]
    fn candidate_rules() {
        let g = parse(POSS_OBJECT);
        let root = g.get(2).unwrap();
        assert!(is_subject_candidate(g.get(1).unwrap(), g.get(2), root));
        // possessivo dentro do objeto não é sujeito
        assert!(!is_subject_candidate(g.get(3).unwrap(), g.get(5), root));

        let g = parse(&[
            "1\tthree\tCD\t2\tnummod\tNone",
            "2\tboys\tNNS\t3\tnsubj\tNone",
            "3\tran\tVBD\t0\troot\tNone",
        ]);
        let root = g.get(3).unwrap();
        assert!(is_subject_candidate(g.get(1).unwrap(), g.get(2), root));
        assert!(!has_determiner(&g, 2));
    }
}
