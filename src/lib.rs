//! # entity-qg — Geração de Perguntas sobre Entidades
//!
//! Gera pares **pergunta/resposta** em inglês a partir de sentenças com
//! entidades anotadas e já analisadas por um parser de dependências externo.
//! Não há modelo estatístico: tudo é regra sobre o grafo.
//!
//! ## Fluxo
//!
//! ```text
//! bloco CoNLL-entidade
//!   ├── core::DependencyGraph::parse    (grafo + entidades)
//!   ├── preprocess                      (orações, pronomes, cronologia)
//!   └── qg::QuestionGenerator
//!         ├── perguntas de sujeito      (Who / What / Which ...)
//!         └── perguntas de objeto       (What / Where / When / Whose ...)
//! ```
//!
//! ## Camadas
//!
//! | Módulo | Responsabilidade |
//! |--------|-----------------|
//! | [`core`] | entidades, nós, grafo de dependências, tabela de tipos |
//! | [`nlu`] | léxico, morfologia, preparação de entrada para o parser |
//! | [`preprocess`] | passagens que normalizam o grafo antes da geração |
//! | [`qg`] | o gerador propriamente dito |
//! | [`orchestrator`] | leitura em lote, blocos separados por linha vazia |
//! | [`metrics`] | contadores da execução |
//! | [`persistence`] | configuração e tabelas de tipos em disco |
//!
//! ## Exemplo
//!
//! ```text
//! Gershwin composed Rhapsody in Blue in 1924 .
//!   → Who composed [Rhapsody_in_Blue|Musical Work|Rhapsody in Blue] in 1924 ?
//!   → What did [George_Gershwin|Musical Artist|Gershwin] compose in 1924 ?
//!   → When did [George_Gershwin|Musical Artist|Gershwin] compose [Rhapsody_in_Blue|Musical Work|Rhapsody in Blue] ?
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod metrics;
pub mod nlu;
pub mod orchestrator;
pub mod persistence;
pub mod preprocess;
pub mod qg;

#[cfg(test)]
mod fixtures;

pub use config::QgConfig;
pub use error::{QgError, Result};
pub use qg::{Method, Outcome, QuestionAnswer, QuestionGenerator, SkipReason};
