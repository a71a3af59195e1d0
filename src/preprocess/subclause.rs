//! Remoção de orações subordinadas delimitadas por vírgula ou ponto e vírgula.
//!
//! A varredura segue a sentença da esquerda para a direita com uma flag de
//! "oração principal": ela liga quando aparece um argumento direto da raiz
//! (`nsubj`, `nsubjpass`, `dobj`, `iobj`, `prep`) e desliga a cada
//! separador. Trechos entre separadores em que a flag nunca ligou são
//! removidos junto com seus dependentes.
//!
//! | Separador | Oração principal já vista? | Efeito |
//! |-----------|---------------------------|--------|
//! | `,` | flag ligada | novo trecho começa na vírgula |
//! | `,` | flag desligada | trecho anterior (com a vírgula) é removido |
//! | `;` | sim | remove do `;` até o fim e encerra |
//! | `;` | não | remove do início até o `;` |

use crate::core::{DependencyGraph, Node};

/// Relações que, ligadas diretamente à raiz, marcam a oração principal.
const MAIN_CLAUSE_RELATIONS: &[&str] = &["nsubj", "nsubjpass", "dobj", "iobj", "prep"];

fn opens_main_clause(node: &Node, root: usize, rel_before_comma: &str) -> bool {
    (node.has_rel(MAIN_CLAUSE_RELATIONS) && node.head == Some(root))
        || (node.rel() == "amod" && rel_before_comma == "amod")
}

/// Remove as orações que não pertencem à oração principal.
///
/// Sem raiz o grafo fica intacto.
pub fn remove_subclauses(graph: &mut DependencyGraph) {
    let Some(root) = graph.root().map(|r| r.address) else {
        return;
    };
    let addresses = graph.addresses();
    let Some(&last) = addresses.last() else {
        return;
    };

    let mut marked: Vec<usize> = Vec::new();
    let mut seq_start = 1;
    let mut main_clause = false;
    let mut main_clause_seen = false;
    let mut last_rel = String::new();
    let mut rel_before_comma = String::new();
    let mut current = last;

    for &address in &addresses {
        current = address;
        let Some(node) = graph.get(address) else {
            continue;
        };

        match node.word() {
            "," => {
                if main_clause {
                    seq_start = address;
                    rel_before_comma = last_rel.clone();
                } else {
                    marked.extend(seq_start..=address);
                    seq_start = address + 1;
                }
                main_clause = false;
            }
            ";" => {
                if main_clause_seen {
                    marked.extend(address..=last);
                    break;
                }
                marked.extend(1..=address);
                seq_start = address + 1;
                main_clause = false;
            }
            _ => {}
        }

        if !main_clause && opens_main_clause(node, root, &rel_before_comma) {
            main_clause = true;
            main_clause_seen = true;
        }
        last_rel = node.rel().to_string();
    }

    // o último trecho também sai se não voltou à oração principal
    if !main_clause {
        marked.extend(seq_start..=current);
    }

    for address in marked {
        if graph.contains(address) {
            graph.remove_recursive(address);
            graph.remove(address);
        }
    }
    tracing::debug!(sentence = %graph.to_sentence(false), "sentença sem orações subordinadas");
}
