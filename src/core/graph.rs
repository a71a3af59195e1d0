//! # DependencyGraph — Árvore de Dependências com Entidades
//!
//! Arena de [`Node`]s indexada por endereço. O endereço 0 é sempre a âncora
//! sintética `TOP`; todas as referências entre nós são índices inteiros.
//!
//! ## Formato de Intercâmbio
//!
//! Um bloco por sentença, uma linha por token, 6 colunas:
//!
//! ```text
//! 1   Gershwin    NNP  2  nsubj  ("George_Gershwin", "Musical Artist", "Gershwin", 1)
//! 2   composed    VBD  0  root   None
//! 3   Rhapsody    NNP  2  dobj   ("Rhapsody_in_Blue", "Musical Work", "Rhapsody in Blue", 3)
//! 4   .           .    2  punct  None
//! ```
//!
//! ## Regras de Construção
//!
//! | Situação | Tratamento |
//! |----------|------------|
//! | célula `None` | nulo (exceto a palavra literal "None") |
//! | head `_` | linha ignorada |
//! | número de colunas diferente da 1ª linha | `warn` + linha ignorada |
//! | relação raiz com head ≠ 0 | `warn` + head forçado a 0 |
//! | nenhum dependente raiz da âncora | `warn`, grafo sem raiz |
//!
//! ## Mutação
//!
//! Remover um nó também o retira da lista `deps` do governante. Todas as
//! travessias recursivas carregam um conjunto de visitados, de modo que um
//! grafo malformado com ciclos não causa recursão infinita.

use std::collections::BTreeSet;

use crate::config::GraphConfig;
use crate::error::{QgError, Result};

use super::entity::Entity;
use super::node::{Node, TOP_TAG};

/// Token que substitui entidades em [`DependencyGraph::to_sentence`] mascarado.
pub const ENTITY_MASK: &str = "[x]";

/// Relações de sujeito.
pub const SUBJECT_RELATIONS: &[&str] = &["nsubj", "nsubjpass"];

/// Relações "argumentais" que definem as dependências principais.
const MAIN_DEPENDENT_RELATIONS: &[&str] =
    &["prep", "pobj", "dobj", "nsubj", "nsubjpass", "iobj", "poss"];

/// Modificadores que acompanham o predicado (advérbio, negação, partícula).
const PREDICATE_MODIFIERS: &[&str] = &["advmod", "neg", "prt"];

/// Limite de endereço aceito numa linha.
const MAX_ADDRESS: usize = 4096;

/// Grafo de dependências de uma sentença.
#[derive(Clone, Debug)]
pub struct DependencyGraph {
    /// `nodes[addr]`; `None` para endereços removidos ou nunca vistos.
    nodes: Vec<Option<Node>>,
    /// Primeiro dependente da âncora pela relação raiz, fixado na construção.
    root: Option<usize>,
    root_label: String,
}

/// Linha já decodificada do formato de intercâmbio.
struct Row<'a> {
    address: usize,
    word: Option<&'a str>,
    tag: Option<&'a str>,
    head: Option<usize>,
    rel: Option<&'a str>,
    entity: Option<Entity>,
}

impl<'a> Row<'a> {
    /// Decodifica as células. `Ok(None)` para linhas com head `_`.
    fn extract(cells: &[&'a str], line: usize, zero_based: bool) -> Result<Option<Self>> {
        let cell = |i: usize| -> Option<&'a str> {
            let value = *cells.get(i)?;
            // a palavra pode ser literalmente "None"
            if value == "None" && (i != 1 || cells[0] == "None") {
                None
            } else {
                Some(value)
            }
        };
        let malformed = |reason: String| QgError::MalformedRow { line, reason };

        let head = match cell(3) {
            Some("_") => return Ok(None),
            Some(h) => Some(
                h.parse::<usize>()
                    .map_err(|_| malformed(format!("head inválido '{}'", h)))?,
            ),
            None => None,
        };
        let raw_address = cell(0).ok_or_else(|| malformed("endereço ausente".to_string()))?;
        let address = raw_address
            .parse::<usize>()
            .map_err(|_| malformed(format!("endereço inválido '{}'", raw_address)))?;
        if address == 0 || address > MAX_ADDRESS {
            return Err(malformed(format!("endereço fora do intervalo: {}", address)));
        }

        let entity = match cell(5) {
            Some(c) => Some(Entity::parse_tuple(c).ok_or_else(|| QgError::MalformedEntity {
                line,
                cell: c.to_string(),
            })?),
            None => None,
        };

        Ok(Some(Self {
            address,
            word: cell(1),
            tag: cell(2),
            head: if zero_based { head.map(|h| h + 1) } else { head },
            rel: cell(4),
            entity,
        }))
    }
}

impl DependencyGraph {
    /// Grafo contendo apenas a âncora.
    pub fn new(root_label: &str) -> Self {
        Self {
            nodes: vec![Some(Node::top())],
            root: None,
            root_label: root_label.to_string(),
        }
    }

    /// Constrói o grafo a partir de um bloco do formato de intercâmbio.
    ///
    /// # Erros
    ///
    /// Linhas com endereço/head ilegíveis, com menos de 5 ou mais de 6
    /// colunas, ou com coluna de entidade fora do formato tupla.
    pub fn parse(input: &str, config: &GraphConfig) -> Result<Self> {
        let mut graph = Self::new(&config.root_label);
        let mut cell_number: Option<usize> = None;
        // (head, rel, dependente) — ligados só no fim, heads podem vir depois
        let mut links: Vec<(usize, String, usize)> = Vec::new();

        let lines = input.lines().map(str::trim_end).filter(|l| !l.is_empty());
        for (index, line) in lines.enumerate() {
            let line_no = index + 1;
            let cells: Vec<&str> = match config.cell_separator.as_deref() {
                Some(sep) => line.split(sep).collect(),
                None => line.split_whitespace().collect(),
            };

            match cell_number {
                None => cell_number = Some(cells.len()),
                Some(expected) if expected != cells.len() => {
                    tracing::warn!(
                        line = line_no,
                        cells = cells.len(),
                        expected,
                        "número de colunas inconsistente, linha ignorada"
                    );
                    continue;
                }
                Some(_) => {}
            }
            if !(5..=6).contains(&cells.len()) {
                return Err(QgError::MalformedRow {
                    line: line_no,
                    reason: format!("{} colunas", cells.len()),
                });
            }

            let Some(row) = Row::extract(&cells, line_no, config.zero_based)? else {
                continue;
            };

            let mut head = row.head;
            if row.rel == Some(config.root_label.as_str()) && head != Some(0) {
                tracing::warn!(
                    address = row.address,
                    head = ?head,
                    "raiz com head não nulo, forçando head = 0"
                );
                head = Some(0);
            }

            if let Some(h) = head {
                links.push((h, row.rel.unwrap_or_default().to_string(), row.address));
            }
            graph.insert(Node {
                address: row.address,
                word: row.word.map(str::to_string),
                lemma: None,
                tag: row.tag.map(str::to_string),
                head,
                rel: row.rel.map(str::to_string),
                deps: Default::default(),
                entity: row.entity,
            });
        }

        for (head, rel, dependent) in links {
            match graph.get_mut(head) {
                Some(h) => h.deps.entry(rel).or_default().push(dependent),
                None => tracing::warn!(head, dependent, "head inexistente, dependente solto"),
            }
        }

        graph.root = graph.nodes[0]
            .as_ref()
            .and_then(|top| top.deps.get(&graph.root_label))
            .and_then(|d| d.first().copied());
        if graph.root.is_none() {
            tracing::warn!("nenhum nó depende da âncora pela relação raiz");
        }
        Ok(graph)
    }

    /// Insere (ou substitui) um nó, preservando dependentes já registrados.
    fn insert(&mut self, mut node: Node) {
        let address = node.address;
        if self.nodes.len() <= address {
            self.nodes.resize(address + 1, None);
        }
        if let Some(previous) = self.nodes[address].take() {
            node.deps = previous.deps;
        }
        self.nodes[address] = Some(node);
    }

    // ─── Consulta ────────────────────────────────────────────────

    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    /// Raiz fixada na construção (pode já ter sido removida).
    pub fn root_address(&self) -> Option<usize> {
        self.root
    }

    pub fn get(&self, address: usize) -> Option<&Node> {
        self.nodes.get(address).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, address: usize) -> Option<&mut Node> {
        self.nodes.get_mut(address).and_then(Option::as_mut)
    }

    pub fn contains(&self, address: usize) -> bool {
        self.get(address).is_some()
    }

    /// Nós vivos em ordem de endereço, incluindo a âncora.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().flatten()
    }

    /// Endereços vivos em ordem crescente, incluindo a âncora.
    pub fn addresses(&self) -> Vec<usize> {
        self.iter().map(|n| n.address).collect()
    }

    /// Maior endereço vivo.
    pub fn last_address(&self) -> usize {
        self.iter().last().map(|n| n.address).unwrap_or(0)
    }

    /// O único nó com a relação raiz, ou `None` se houver zero ou vários.
    pub fn root(&self) -> Option<&Node> {
        let roots = self.nodes_with_relations(&[self.root_label.as_str()]);
        match roots.as_slice() {
            [root] => Some(root),
            _ => {
                tracing::debug!(count = roots.len(), "número inesperado de raízes");
                None
            }
        }
    }

    /// Nós cuja relação está em `rels`, em ordem de endereço.
    pub fn nodes_with_relations(&self, rels: &[&str]) -> Vec<&Node> {
        self.iter().filter(|n| n.has_rel(rels)).collect()
    }

    pub fn has_word(&self, word: &str) -> bool {
        self.iter().any(|n| n.word.as_deref() == Some(word))
    }

    pub fn has_subject(&self) -> bool {
        self.iter().any(|n| n.has_rel(SUBJECT_RELATIONS))
    }

    // ─── Travessia ───────────────────────────────────────────────

    /// Descendentes de `address` (sem o próprio nó), em profundidade.
    ///
    /// A ordem não é a da sentença; ordene quando precisar.
    pub fn subtree(&self, address: usize) -> Vec<usize> {
        self.subtree_excluding(address, &[])
    }

    /// Como [`subtree`](Self::subtree), mas sem entrar nos nós de `excluded`.
    pub fn subtree_excluding(&self, address: usize, excluded: &[usize]) -> Vec<usize> {
        let mut out = Vec::new();
        let mut visited = BTreeSet::from([address]);
        self.collect_subtree(address, excluded, &mut visited, &mut out);
        out
    }

    fn collect_subtree(
        &self,
        address: usize,
        excluded: &[usize],
        visited: &mut BTreeSet<usize>,
        out: &mut Vec<usize>,
    ) {
        let Some(node) = self.get(address) else {
            return;
        };
        for dep in node.dependents() {
            if excluded.contains(&dep) || !self.contains(dep) || !visited.insert(dep) {
                continue;
            }
            self.collect_subtree(dep, excluded, visited, out);
            out.push(dep);
        }
    }

    /// Nó e descendentes, em ordem de endereço.
    pub fn phrase(&self, address: usize) -> Vec<usize> {
        let mut phrase = self.subtree(address);
        phrase.push(address);
        phrase.sort_unstable();
        phrase
    }

    /// O predicado com seus `advmod`, `neg` e `prt`, em ordem de endereço.
    pub fn predicate_list(&self, predicate: usize) -> Vec<usize> {
        let Some(node) = self.get(predicate) else {
            return Vec::new();
        };
        let mut list: Vec<usize> = node
            .dependents_with(PREDICATE_MODIFIERS)
            .into_iter()
            .filter(|&a| self.contains(a))
            .collect();
        list.push(predicate);
        list.sort_unstable();
        list
    }

    /// `true` se `candidate` é alcançável a partir de `anchor` seguindo
    /// apenas relações argumentais (`prep, pobj, dobj, nsubj, nsubjpass,
    /// iobj, poss`).
    pub fn is_within_main_dependents(&self, anchor: usize, candidate: usize) -> bool {
        if anchor == candidate {
            return true;
        }
        let mut visited = BTreeSet::new();
        self.reaches_through_arguments(anchor, candidate, &mut visited)
    }

    fn reaches_through_arguments(
        &self,
        from: usize,
        target: usize,
        visited: &mut BTreeSet<usize>,
    ) -> bool {
        if !visited.insert(from) {
            return false;
        }
        let Some(node) = self.get(from) else {
            return false;
        };
        for rel in MAIN_DEPENDENT_RELATIONS {
            let Some(children) = node.deps.get(*rel) else {
                continue;
            };
            if children.contains(&target) {
                return true;
            }
            for &child in children {
                if self.contains(child) && self.reaches_through_arguments(child, target, visited) {
                    return true;
                }
            }
        }
        false
    }

    // ─── Mutação ─────────────────────────────────────────────────

    /// Remove um nó (não seus dependentes) e o desliga do governante.
    ///
    /// A âncora nunca é removida.
    pub fn remove(&mut self, address: usize) -> Option<Node> {
        if address == 0 {
            return None;
        }
        let node = self.nodes.get_mut(address)?.take()?;
        if let Some(head) = node.head.and_then(|h| self.get_mut(h)) {
            for children in head.deps.values_mut() {
                children.retain(|&a| a != address);
            }
        }
        Some(node)
    }

    /// Remove todos os descendentes de `address`, mantendo o próprio nó.
    pub fn remove_recursive(&mut self, address: usize) {
        let mut visited = BTreeSet::from([address]);
        self.remove_descendants(address, &mut visited);
    }

    fn remove_descendants(&mut self, address: usize, visited: &mut BTreeSet<usize>) {
        let children = match self.get(address) {
            Some(node) => node.dependents(),
            None => return,
        };
        for child in children {
            if !visited.insert(child) {
                continue;
            }
            self.remove_descendants(child, visited);
            self.remove(child);
        }
    }

    /// Troca a relação de um nó mantendo o índice `deps` do governante.
    pub fn relabel(&mut self, address: usize, rel: &str) {
        let Some(node) = self.get_mut(address) else {
            return;
        };
        let previous = node.rel.replace(rel.to_string());
        let head = node.head;
        if previous.as_deref() == Some(rel) {
            return;
        }
        if let Some(governor) = head.and_then(|h| self.get_mut(h)) {
            if let Some(children) = previous.and_then(|p| governor.deps.get_mut(&p)) {
                children.retain(|&a| a != address);
            }
            governor.deps.entry(rel.to_string()).or_default().push(address);
        }
    }

    // ─── Serialização ────────────────────────────────────────────

    /// Sentença plana: entidades viram menções (ou [`ENTITY_MASK`]).
    pub fn to_sentence(&self, mask_entities: bool) -> String {
        self.iter()
            .filter_map(|n| {
                let word = n.word.as_deref()?;
                Some(match &n.entity {
                    Some(_) if mask_entities => ENTITY_MASK.to_string(),
                    Some(e) => e.to_mention(),
                    None => word.to_string(),
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Linhas CoNLL-entidade de todos os nós reais, em ordem de endereço.
    pub fn to_conll(&self) -> String {
        self.iter()
            .filter(|n| n.tag() != TOP_TAG)
            .map(|n| n.to_conll_row() + "\n")
            .collect()
    }
}
