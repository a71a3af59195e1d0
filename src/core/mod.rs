//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Tudo no gerador gira em torno destes tipos:
//!
//! - [`Entity`] — menção anotada `[name|category|original]`
//! - [`Node`] — palavra da sentença com head, relação e dependentes
//! - [`DependencyGraph`] — arena de nós indexada por endereço
//! - [`TypeTable`] — tipos semânticos por entidade (somente leitura)
//!
//! ## Analogia
//!
//! O [`DependencyGraph`] é uma **árvore genealógica** da sentença: cada
//! palavra sabe quem é seu "pai" (`head`) e lista seus "filhos" por tipo de
//! parentesco (`deps`). Perguntar por algo é podar um galho inteiro e
//! reorganizar o que sobrou.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use entity_qg::config::GraphConfig;
//! use entity_qg::core::DependencyGraph;
//!
//! let block = "1\tMary\tNNP\t2\tnsubj\tNone\n2\tsleeps\tVBZ\t0\troot\tNone\n";
//! let graph = DependencyGraph::parse(block, &GraphConfig::default()).unwrap();
//! assert_eq!(graph.to_sentence(false), "Mary sleeps");
//! ```

/// Sub-módulo com a implementação de [`Entity`].
pub mod entity;

/// Sub-módulo com a implementação de [`Node`].
pub mod node;

/// Sub-módulo com a implementação de [`DependencyGraph`].
pub mod graph;

/// Sub-módulo com a implementação de [`TypeTable`].
pub mod type_table;

// Re-exports: `crate::core::Entity` direto.
pub use entity::Entity;
pub use graph::{DependencyGraph, ENTITY_MASK, SUBJECT_RELATIONS};
pub use node::Node;
pub use type_table::TypeTable;
