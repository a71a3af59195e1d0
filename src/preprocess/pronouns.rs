//! Pronomes anotados como entidades.
//!
//! O anotador marca pronomes ("her", "his", "himself") com a entidade a que
//! se referem. Numa pergunta isso vira `Who wrote [Alice|Person|her] book ?`;
//! aqui esses pronomes voltam a ser palavras comuns quando o nome da
//! entidade já aparece na sentença.

use crate::core::{DependencyGraph, Node};
use crate::nlu::lexicon::{POSSESSIVE_RELATIONS, REFLEXIVE_PRONOUNS, UNAMBIGUOUS_POSSESSIVES};

/// `true` se o nó é uma entidade cujo original é pronome possessivo.
///
/// "her" só conta quando a relação é possessiva (`compound`, `nmod`,
/// `poss`). O mesmo critério decide onde reinserir `'s` na montagem.
pub fn is_possessive_pronoun(node: &Node) -> bool {
    let Some(entity) = &node.entity else {
        return false;
    };
    let original = entity.original.to_lowercase();
    UNAMBIGUOUS_POSSESSIVES.contains(&original.as_str())
        || (original == "her" && node.has_rel(POSSESSIVE_RELATIONS))
}

/// Rotula como `poss` as entidades "her" seguidas de substantivo ou adjetivo.
pub fn repair_possessive_pronouns(graph: &mut DependencyGraph) {
    let targets: Vec<usize> = graph
        .iter()
        .filter(|n| {
            n.entity
                .as_ref()
                .is_some_and(|e| e.original.to_lowercase() == "her")
        })
        .filter(|n| {
            graph.get(n.address + 1).is_some_and(|next| {
                next.tag().starts_with("NN") || next.tag().starts_with("JJ")
            })
        })
        .map(|n| n.address)
        .collect();

    for address in targets {
        tracing::debug!(address, "\"her\" reinterpretado como possessivo");
        graph.relabel(address, "poss");
    }
}

/// Desliga a entidade do nó e devolve o original em minúsculas como palavra.
fn detach(graph: &mut DependencyGraph, address: usize) {
    if let Some(node) = graph.get_mut(address) {
        if let Some(entity) = node.entity.take() {
            node.word = Some(entity.original.to_lowercase());
        }
    }
}

/// Troca menções-pronome pelo pronome.
///
/// 1. Reflexivos sempre voltam a ser palavras; possessivos voltam quando a
///    mesma entidade já apareceu antes na sentença.
/// 2. Possessivos de entidades que aparecem em algum lugar como menção não
///    possessiva também voltam, antes ou depois do nome.
pub fn recover_pronouns(graph: &mut DependencyGraph) {
    let mut seen: Vec<String> = Vec::new();
    let mut seen_by_name: Vec<String> = Vec::new();

    for address in graph.addresses() {
        let Some(node) = graph.get(address) else {
            continue;
        };
        let Some(entity) = &node.entity else {
            continue;
        };
        let possessive = is_possessive_pronoun(node);
        let reflexive = REFLEXIVE_PRONOUNS.contains(&entity.original.to_lowercase().as_str());

        if reflexive || (possessive && seen.contains(&entity.name)) {
            detach(graph, address);
        } else {
            seen.push(entity.name.clone());
            if !possessive {
                seen_by_name.push(entity.name.clone());
            }
        }
    }

    for address in graph.addresses() {
        let recover = graph.get(address).is_some_and(|node| {
            is_possessive_pronoun(node)
                && node
                    .entity
                    .as_ref()
                    .is_some_and(|e| seen_by_name.contains(&e.name))
        });
        if recover {
            detach(graph, address);
        }
    }

    tracing::debug!(sentence = %graph.to_sentence(false), "pronomes recuperados");
}
