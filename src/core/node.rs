//! # Node — Vértice do Grafo de Dependências
//!
//! Cada [`Node`] é uma palavra da sentença. Os vínculos com outros nós são
//! **endereços inteiros** (nunca ponteiros): `head` aponta para o governante
//! e `deps` indexa os dependentes por relação.
//!
//! ```text
//!          wrote (root)
//!         /      \
//!   Alice(nsubj)  book(dobj)
//!                   |
//!                 her(poss)
//!
//! wrote.deps = { "nsubj": [1], "dobj": [5] }
//! book.deps  = { "poss": [3], "amod": [4] }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use super::entity::Entity;

/// Tag do nó sintético de endereço 0.
pub const TOP_TAG: &str = "TOP";

/// Palavra da sentença com seus vínculos sintáticos.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    /// Posição 1-based; 0 é reservado para a âncora sintética.
    pub address: usize,
    /// Token de superfície (`None` na âncora).
    pub word: Option<String>,
    /// Não preenchido pelo formato de intercâmbio.
    pub lemma: Option<String>,
    /// Tag POS (`VBD`, `NNP`, ...).
    pub tag: Option<String>,
    /// Endereço do governante.
    pub head: Option<usize>,
    /// Relação de dependência com o governante.
    pub rel: Option<String>,
    /// Dependentes por relação, na ordem em que apareceram.
    pub deps: BTreeMap<String, Vec<usize>>,
    /// Entidade anotada neste token.
    pub entity: Option<Entity>,
}

impl Node {
    /// Âncora sintética (endereço 0, tag `TOP`).
    pub fn top() -> Self {
        Self {
            address: 0,
            word: None,
            lemma: None,
            tag: Some(TOP_TAG.to_string()),
            head: None,
            rel: None,
            deps: BTreeMap::new(),
            entity: None,
        }
    }

    /// Token, ou `""` quando ausente.
    pub fn word(&self) -> &str {
        self.word.as_deref().unwrap_or("")
    }

    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or("")
    }

    pub fn rel(&self) -> &str {
        self.rel.as_deref().unwrap_or("")
    }

    /// `true` se a relação do nó estiver em `rels`.
    pub fn has_rel(&self, rels: &[&str]) -> bool {
        self.rel.as_deref().is_some_and(|r| rels.contains(&r))
    }

    /// `true` se a tag do nó estiver em `tags`.
    pub fn has_tag(&self, tags: &[&str]) -> bool {
        self.tag.as_deref().is_some_and(|t| tags.contains(&t))
    }

    /// `true` se a palavra existir e estiver em `words`.
    pub fn word_in(&self, words: &[&str]) -> bool {
        self.word.as_deref().is_some_and(|w| words.contains(&w))
    }

    /// Todos os endereços dependentes, relação por relação.
    pub fn dependents(&self) -> Vec<usize> {
        self.deps.values().flatten().copied().collect()
    }

    /// Endereços dependentes cujas relações estão em `rels`.
    pub fn dependents_with(&self, rels: &[&str]) -> Vec<usize> {
        self.deps
            .iter()
            .filter(|(rel, _)| rels.contains(&rel.as_str()))
            .flat_map(|(_, addrs)| addrs.iter().copied())
            .collect()
    }

    /// `true` se houver ao menos um dependente sob `rel`.
    pub fn has_dependent(&self, rel: &str) -> bool {
        self.deps.get(rel).is_some_and(|addrs| !addrs.is_empty())
    }

    /// `true` se o parse ligou algum dependente sob `rel`, mesmo que ele
    /// já tenha sido removido: a remoção esvazia a lista mas mantém a chave.
    pub fn had_dependent(&self, rel: &str) -> bool {
        self.deps.contains_key(rel)
    }

    /// Linha CoNLL: `address, word, tag, head, rel, entity`.
    ///
    /// Campos ausentes são escritos como `None`, como no formato de intercâmbio.
    pub fn to_conll_row(&self) -> String {
        fn or_none(value: Option<&str>) -> &str {
            value.unwrap_or("None")
        }
        let head = self
            .head
            .map(|h| h.to_string())
            .unwrap_or_else(|| "None".to_string());
        let entity = self
            .entity
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "None".to_string());
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.address,
            or_none(self.word.as_deref()),
            or_none(self.tag.as_deref()),
            head,
            or_none(self.rel.as_deref()),
            entity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb() -> Node {
        let mut deps = BTreeMap::new();
        deps.insert("nsubj".to_string(), vec![1]);
        deps.insert("dobj".to_string(), vec![4]);
        deps.insert("aux".to_string(), vec![]);
        Node {
            address: 2,
            word: Some("wrote".into()),
            lemma: None,
            tag: Some("VBD".into()),
            head: Some(0),
            rel: Some("root".into()),
            deps,
            entity: None,
        }
    }

    #[test]
    fn top_anchor_has_no_word() {
        let top = Node::top();
        assert_eq!(top.address, 0);
        assert_eq!(top.word(), "");
        assert_eq!(top.tag(), TOP_TAG);
    }

    #[test]
    fn dependents_follow_relation_filter() {
        let n = verb();
        assert_eq!(n.dependents_with(&["dobj"]), vec![4]);
        assert_eq!(n.dependents().len(), 2);
        assert!(n.has_dependent("nsubj"));
        // chave presente mas vazia não conta
        assert!(!n.has_dependent("aux"));
    }

    /// A chave esvaziada ainda registra que o parse tinha o dependente.
    #[test]
    fn emptied_relation_was_a_dependent() {
        let n = verb();
        assert!(n.had_dependent("aux"));
        assert!(n.had_dependent("dobj"));
        assert!(!n.had_dependent("ccomp"));
    }

    #[test]
    fn conll_row_writes_none_for_missing_entity() {
        assert_eq!(verb().to_conll_row(), "2\twrote\tVBD\t0\troot\tNone");
    }
}
