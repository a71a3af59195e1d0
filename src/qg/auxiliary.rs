//! Escolha do verbo auxiliar da pergunta.
//!
//! | Dependentes da raiz | Tag da raiz | Auxiliar | Raiz vira |
//! |---------------------|-------------|----------|-----------|
//! | `aux` / `auxpass` | qualquer | os próprios | inalterada |
//! | nenhum | `VB`, `VBP` | "do" | infinitivo |
//! | nenhum | `VBZ` | "does" | infinitivo |
//! | nenhum | `VBD` | "did" | infinitivo |
//! | nenhum, raiz "be" | qualquer | nenhum | inalterada |

use crate::core::DependencyGraph;

/// Auxiliares encontrados (ou sintetizados) para a raiz.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Auxiliaries {
    /// Palavras dos dependentes `aux`, ou o "do"/"does"/"did" sintetizado.
    pub active: Vec<String>,
    /// Palavras dos dependentes `auxpass`.
    pub passive: Vec<String>,
}

impl Auxiliaries {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.passive.is_empty()
    }
}

/// Coleta os auxiliares da raiz `predicate`.
///
/// Sem auxiliares e com infinitivo diferente de "be", sintetiza "do" pela
/// tag e troca a palavra da raiz pelo `infinitive` ("composed" → "compose").
pub fn determine_auxiliaries(
    graph: &mut DependencyGraph,
    predicate: usize,
    infinitive: &str,
) -> Auxiliaries {
    let mut found = Auxiliaries::default();
    let Some(node) = graph.get(predicate) else {
        return found;
    };

    for (rel, children) in &node.deps {
        let target = match rel.as_str() {
            "aux" => &mut found.active,
            "auxpass" => &mut found.passive,
            _ => continue,
        };
        target.extend(
            children
                .iter()
                .filter_map(|&a| graph.get(a))
                .map(|aux| aux.word().to_string()),
        );
    }

    if found.is_empty() && infinitive != "be" {
        let synthesized = match node.tag() {
            "VBP" | "VB" => Some("do"),
            "VBZ" => Some("does"),
            "VBD" => Some("did"),
            _ => None,
        };
        found.active.extend(synthesized.map(str::to_string));
        if let Some(node) = graph.get_mut(predicate) {
            node.word = Some(infinitive.to_string());
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphConfig;
    use crate::fixtures::*;
    use crate::nlu::lemmatize_verb;

    fn parse(rows: &[&str]) -> DependencyGraph {
        DependencyGraph::parse(&block(rows), &GraphConfig::default()).unwrap()
    }

    fn run(rows: &[&str]) -> (Auxiliaries, String) {
        let mut g = parse(rows);
        let root = g.root().unwrap().address;
        let infinitive = lemmatize_verb(g.get(root).unwrap().word());
        let aux = determine_auxiliaries(&mut g, root, &infinitive);
        let word = g.get(root).unwrap().word().to_string();
        (aux, word)
    }

    /// Passado simples: "did" e a raiz no infinitivo.
    #[test]
    fn past_tense_gets_did() {
        let (aux, word) = run(GERSHWIN);
        assert_eq!(aux.active, vec!["did"]);
        assert!(aux.passive.is_empty());
        assert_eq!(word, "compose");
    }

    /// Terceira pessoa do presente: "does".
    #[test]
    fn third_person_present_gets_does() {
        let (aux, word) = run(&[
            "1\tBob\tNNP\t2\tnsubj\tNone",
            "2\tplays\tVBZ\t0\troot\tNone",
            "3\tchess\tNN\t2\tdobj\tNone",
        ]);
        assert_eq!(aux.active, vec!["does"]);
        assert_eq!(word, "play");
    }

    /// Presente plural: "do".
    #[test]
    fn plural_present_gets_do() {
        let (aux, word) = run(&[
            "1\tThey\tPRP\t2\tnsubj\tNone",
            "2\tplay\tVBP\t0\troot\tNone",
            "3\tchess\tNN\t2\tdobj\tNone",
        ]);
        assert_eq!(aux.active, vec!["do"]);
        assert_eq!(word, "play");
    }

    /// Auxiliar passivo já presente na sentença.
    #[test]
    fn passive_auxiliary_is_collected() {
        let (aux, word) = run(RIEL);
        assert!(aux.active.is_empty());
        assert_eq!(aux.passive, vec!["was"]);
        assert_eq!(word, "born");
    }

    /// Auxiliares ativos na ordem dos endereços.
    #[test]
    fn active_auxiliaries_are_collected() {
        let (aux, word) = run(&[
            "1\tBob\tNNP\t4\tnsubj\tNone",
            "2\thas\tVBZ\t4\taux\tNone",
            "3\tbeen\tVBN\t4\taux\tNone",
            "4\twriting\tVBG\t0\troot\tNone",
        ]);
        assert_eq!(aux.active, vec!["has", "been"]);
        assert_eq!(word, "writing");
    }

    /// "be" como raiz não ganha auxiliar nem muda de forma.
    #[test]
    fn copula_has_no_auxiliary() {
        let (aux, word) = run(POTSDAM);
        assert!(aux.is_empty());
        assert_eq!(word, "is");
    }

    /// Tag desconhecida: nenhum auxiliar, mas a raiz vai ao infinitivo.
    #[test]
    fn unknown_tag_only_lemmatizes() {
        let (aux, word) = run(&[
            "1\tBob\tNNP\t2\tnsubj\tNone",
            "2\twritten\tVBN\t0\troot\tNone",
        ]);
        assert!(aux.is_empty());
        assert_eq!(word, "write");
    }
}
