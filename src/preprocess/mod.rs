//! # Pré-processamento — Normalização do Parse
//!
//! Passagens que modificam o grafo **no lugar**, antes da geração. A ordem
//! importa: a remoção de orações muda quais pronomes sobram, e o reparo de
//! "her" muda quais pronomes são possessivos.
//!
//! ```text
//! DependencyGraph
//!   ├── 1. remove_subclauses           (subclause)
//!   ├── 2. repair_possessive_pronouns  (pronouns)
//!   ├── 3. recover_pronouns            (pronouns)
//!   └── 4. is_chronological?  ──► sentença descartada
//! ```

/// Remoção de orações subordinadas.
pub mod subclause;

/// Reparo e recuperação de pronomes.
pub mod pronouns;

use std::sync::OnceLock;

use regex::Regex;

use crate::core::DependencyGraph;

pub use pronouns::{is_possessive_pronoun, recover_pronouns, repair_possessive_pronouns};
pub use subclause::remove_subclauses;

fn chronicle_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9.,/]+\s\x{2013}\s").expect("padrão de cronologia válido"))
}

/// Aplica as passagens 1–3 em ordem.
pub fn preprocess(graph: &mut DependencyGraph) {
    remove_subclauses(graph);
    repair_possessive_pronouns(graph);
    recover_pronouns(graph);
}

/// `true` para fragmentos de cronologia: "1992 – Barcelona hosts ...".
pub fn is_chronological(graph: &DependencyGraph) -> bool {
    let chronicle = chronicle_re().is_match(&graph.to_sentence(false));
    if chronicle {
        tracing::debug!("sentença de cronologia");
    }
    chronicle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphConfig;
    use crate::fixtures::*;

    fn parse(rows: &[&str]) -> DependencyGraph {
        DependencyGraph::parse(&block(rows), &GraphConfig::default()).unwrap()
    }

    #[test]
    fn chronicle_fragments_are_detected() {
        let g = parse(CHRONICLE);
        assert!(is_chronological(&g));
        assert!(!is_chronological(&parse(GERSHWIN)));
        assert!(!is_chronological(&parse(MARY)));
    }

    /// As passagens em sequência: vírgula removida, pronome recuperado.
    #[test]
    fn passes_run_in_order() {
        let mut g = parse(&[
            "1\tAlice\tNNP\t2\tnsubj\t(\"Alice\", \"Person\", \"Alice\", 1)",
            "2\twrote\tVBD\t0\troot\tNone",
            "3\ther\tPRP$\t5\tnmod\t(\"Alice\", \"Person\", \"her\", 3)",
            "4\tfirst\tJJ\t5\tamod\tNone",
            "5\tbook\tNN\t2\tdobj\tNone",
            "6\t,\t,\t5\tpunct\tNone",
            "7\tsadly\tRB\t2\tadvmod\tNone",
            "8\t.\t.\t2\tpunct\tNone",
        ]);
        preprocess(&mut g);
        assert_eq!(g.to_sentence(false), "[Alice|Person|Alice] wrote her first book");
    }

    #[test]
    fn plain_sentence_survives_preprocessing() {
        let mut g = parse(GERSHWIN);
        let before = g.to_sentence(false);
        preprocess(&mut g);
        assert_eq!(g.to_sentence(false), before);
    }
}
