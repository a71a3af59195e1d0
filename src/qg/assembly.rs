//! Montagem de respostas e perguntas a partir de listas de nós.
//!
//! Uma pergunta em construção é uma lista de [`Piece`]: endereços de nós do
//! grafo (que ainda podem ser filtrados) e textos literais já decididos,
//! como o auxiliar "did" ou o "?" final.
//!
//! ```text
//! [Text("did"), Node(1), Node(2), Node(5), Text("?")]
//!   └── form_question(["What"]) → "What did [George_Gershwin|...] compose in 1924 ?"
//! ```

use crate::core::{DependencyGraph, Entity, ENTITY_MASK};
use crate::nlu::lexicon::{is_month, is_year, DASHES};
use crate::preprocess::is_possessive_pronoun;

use super::fusion::{correct_entity_recognition, remove_entity_mentions};
use super::QuestionGenerator;

/// Elemento de uma pergunta em construção.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    /// Texto literal.
    Text(String),
    /// Nó do grafo, por endereço.
    Node(usize),
}

impl Piece {
    pub fn text(text: impl Into<String>) -> Self {
        Piece::Text(text.into())
    }

    /// Uma peça [`Piece::Node`] por endereço, na ordem dada.
    pub fn nodes(addresses: impl IntoIterator<Item = usize>) -> impl Iterator<Item = Piece> {
        addresses.into_iter().map(Piece::Node)
    }
}

/// Relações de nós que não podem seguir uma vírgula inicial.
const VERBAL_RELATIONS: &[&str] = &["root", "aux", "auxpass"];

/// Texto de cada peça.
///
/// Com `mask_entities` as entidades viram [`ENTITY_MASK`]; com
/// `append_possessive`, pronomes possessivos anotados ganham `'s`. Nós
/// sem palavra e sem entidade são omitidos.
pub fn render(
    graph: &DependencyGraph,
    pieces: &[Piece],
    mask_entities: bool,
    append_possessive: bool,
) -> Vec<String> {
    let mut out = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let address = match piece {
            Piece::Text(text) => {
                out.push(text.clone());
                continue;
            }
            Piece::Node(address) => *address,
        };
        let Some(node) = graph.get(address) else {
            continue;
        };
        match &node.entity {
            Some(entity) => {
                let mut text = if mask_entities {
                    ENTITY_MASK.to_string()
                } else {
                    entity.to_mention()
                };
                if append_possessive && is_possessive_pronoun(node) {
                    text.push_str(" 's");
                }
                out.push(text);
            }
            None => {
                if let Some(word) = node.word.as_deref() {
                    out.push(word.to_string());
                }
            }
        }
    }
    out
}

/// Anexa uma entidade de data (Year ou Month) a um nó sem entidade.
fn attach_date_entity(graph: &mut DependencyGraph, address: usize) {
    let Some(node) = graph.get_mut(address) else {
        return;
    };
    let Some(word) = node.word.clone() else {
        return;
    };
    if is_year(&word) {
        node.entity = Some(Entity::new(word.clone(), "Year", word).with_address(address));
    } else if is_month(&word) {
        node.entity = Some(Entity::new(word.clone(), "Month", word).with_address(address));
    }
}

impl QuestionGenerator<'_> {
    /// Texto da resposta para o nó `address`, modificando o clone `graph`.
    ///
    /// Um nó sem entidade é tratado como data: ele e sua subárvore recebem
    /// entidades Year/Month. Para `pobj` a resposta é a frase preposicional
    /// inteira ("in [1924|Year|1924]").
    pub(crate) fn form_answer(&self, graph: &mut DependencyGraph, address: usize) -> String {
        let Some(node) = graph.get(address) else {
            return String::new();
        };
        let date = node.entity.is_none();
        let anchor = match node.head {
            Some(head) if node.rel() == "pobj" && graph.contains(head) => head,
            _ => address,
        };

        if date {
            attach_date_entity(graph, address);
            for descendant in graph.subtree(anchor) {
                attach_date_entity(graph, descendant);
            }
        }

        let phrase = graph.phrase(anchor);
        let pieces: Vec<Piece> = Piece::nodes(phrase).collect();
        render(graph, &pieces, false, self.config.generation.regard_entity_name).join(" ")
    }

    /// Filtra, renderiza e completa a pergunta com cada palavra interrogativa.
    ///
    /// Devolve pares `(pergunta, resposta)`; vazio quando não sobra
    /// entidade na pergunta ou quando a limpeza de menções a invalida.
    pub(crate) fn form_question(
        &self,
        graph: &DependencyGraph,
        pieces: &[Piece],
        wh_words: &[String],
        answer: &str,
    ) -> Vec<(String, String)> {
        let regard = self.config.generation.regard_entity_name;
        let mut kept: Vec<Piece> = Vec::with_capacity(pieces.len());
        let mut exists_entity = false;

        for (i, piece) in pieces.iter().enumerate() {
            let address = match piece {
                Piece::Text(_) => {
                    kept.push(piece.clone());
                    continue;
                }
                Piece::Node(address) => *address,
            };
            let Some(node) = graph.get(address) else {
                continue;
            };

            if node.rel() == "punct" && !self.keeps_comma(graph, pieces, i) {
                continue;
            }
            if node.word.as_deref().is_some_and(|w| !w.is_empty()) {
                kept.push(piece.clone());
            }
            if node.entity.is_some() {
                exists_entity = true;
                if regard && is_possessive_pronoun(node) {
                    kept.push(Piece::text("'s"));
                }
            }
        }

        if !exists_entity || kept.len() <= 1 {
            return Vec::new();
        }

        // pontuação, conjunção ou travessão logo antes do "?"
        loop {
            let n = kept.len();
            let dangling = match &kept[n - 2] {
                Piece::Node(address) => graph
                    .get(*address)
                    .is_some_and(|node| node.word_in(DASHES) || node.has_rel(&["cc", "punct"])),
                Piece::Text(_) => false,
            };
            if !dangling {
                break;
            }
            kept.remove(n - 2);
            if kept.len() <= 1 {
                return Vec::new();
            }
        }

        let tokens = correct_entity_recognition(render(graph, &kept, false, false));
        let mut question = tokens.join(" ");
        let mut answer = answer.to_string();

        if regard {
            let id_aware = self.config.mentions.id_aware;
            question = remove_entity_mentions(&question, &self.stemmer, id_aware);
            answer = remove_entity_mentions(&answer, &self.stemmer, id_aware);
            if question.is_empty() || answer.is_empty() {
                return Vec::new();
            }
        }

        wh_words
            .iter()
            .map(|wh| (format!("{} {}", wh, question), answer.clone()))
            .collect()
    }

    /// Uma vírgula fica quando separa duas partes de conteúdo da pergunta.
    fn keeps_comma(&self, graph: &DependencyGraph, pieces: &[Piece], i: usize) -> bool {
        let is_comma = matches!(&pieces[i], Piece::Node(a) if graph.get(*a).is_some_and(|n| n.word() == ","));
        if !is_comma {
            return false;
        }
        match pieces.get(i + 1) {
            None => false,
            Some(Piece::Text(text)) => text != "?" && i != 0,
            Some(Piece::Node(next)) => match graph.get(*next) {
                Some(next) => !(i == 0 && next.has_rel(VERBAL_RELATIONS)) && next.rel() != "punct",
                None => true,
            },
        }
    }
}
