//! # Gerador de Perguntas — Regras sobre o Grafo
//!
//! O [`QuestionGenerator`] recebe um bloco do formato de intercâmbio e
//! devolve um [`Outcome`]: as perguntas geradas com a sentença original,
//! ou o motivo pelo qual a sentença foi descartada.
//!
//! ## Pipeline de uma sentença
//!
//! ```text
//! (sentença anotada + linhas do parser)
//!   ├── clean_sentence + attach_entities ── erro ► Skipped(EntityMismatch | SentenceTooLong)
//!   ▼
//! bloco
//!   ├── DependencyGraph::parse ──── erro ──────► Skipped(MalformedParse)
//!   ├── token ":" ? ─────────────────────────── ► Skipped(ColonToken)
//!   ├── sem nsubj/nsubjpass ? ──────────────── ► Skipped(NoSubject)
//!   ├── preprocess (orações, pronomes)
//!   ├── cronologia ? ───────────────────────── ► Skipped(Chronological)
//!   ├── raiz verbal sem entidade ? ── não ──── ► Skipped(NoVerbalRoot)
//!   ├── perguntas de sujeito  (subject)
//!   └── perguntas de objeto   (object)
//! ```
//!
//! | Módulo | Responsabilidade |
//! |--------|-----------------|
//! | [`subject`] | resposta = sujeito, possessivo do sujeito ou numeral |
//! | [`object`] | resposta = objeto direto, possessivo do objeto, lugar, data |
//! | [`assembly`] | resposta, filtragem e renderização da pergunta |
//! | [`auxiliary`] | "do" / "does" / "did" e auxiliares existentes |
//! | [`wh`] | Who / Whose / Which ... / What / Where / When / How many |
//! | [`fusion`] | correção de menções partidas e menções genéricas |
//!
//! ## Analogia
//!
//! Funciona como um **professor preparando uma prova** a partir de um texto:
//! cobre um nome na frase, reordena o resto e escreve a pergunta que tem
//! aquele nome como resposta.

pub mod assembly;
pub mod auxiliary;
pub mod fusion;
pub mod object;
pub mod subject;
pub mod wh;

use rust_stemmers::{Algorithm, Stemmer};
use serde::Serialize;

use crate::config::QgConfig;
use crate::core::{DependencyGraph, TypeTable};
use crate::error::QgError;
use crate::nlu::{attach_entities, clean_sentence};
use crate::preprocess::{is_chronological, preprocess};

/// De onde veio a pergunta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Subject,
    Object,
}

impl Method {
    pub fn label(&self) -> &'static str {
        match self {
            Method::Subject => "subject",
            Method::Object => "object",
        }
    }
}

/// Um par pergunta/resposta.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
    pub method: Method,
}

impl QuestionAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, method: Method) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            method,
        }
    }
}

/// Por que uma sentença não gerou perguntas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// O bloco não é um grafo válido.
    MalformedParse,
    /// A sentença contém o token ":".
    ColonToken,
    /// Nenhum `nsubj`/`nsubjpass`.
    NoSubject,
    /// Fragmento de cronologia ("1992 – ...").
    Chronological,
    /// Sem raiz, raiz não verbal ou raiz anotada como entidade.
    NoVerbalRoot,
    /// Token do parser não confere com a menção no mesmo endereço.
    EntityMismatch,
    /// Mais tokens que `generation.max_tokens`.
    SentenceTooLong,
}

impl SkipReason {
    pub const ALL: [SkipReason; 7] = [
        SkipReason::MalformedParse,
        SkipReason::ColonToken,
        SkipReason::NoSubject,
        SkipReason::Chronological,
        SkipReason::NoVerbalRoot,
        SkipReason::EntityMismatch,
        SkipReason::SentenceTooLong,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::MalformedParse => "malformed_parse",
            SkipReason::ColonToken => "colon_token",
            SkipReason::NoSubject => "no_subject",
            SkipReason::Chronological => "chronological",
            SkipReason::NoVerbalRoot => "no_verbal_root",
            SkipReason::EntityMismatch => "entity_mismatch",
            SkipReason::SentenceTooLong => "sentence_too_long",
        }
    }
}

/// Resultado de uma sentença.
///
/// `Generated` com lista vazia é diferente de `Skipped`: a sentença passou
/// pelos filtros, mas nenhuma regra produziu pergunta.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Generated {
        questions: Vec<QuestionAnswer>,
        /// Sentença depois do pré-processamento, com menções.
        sentence: String,
    },
    Skipped {
        reason: SkipReason,
    },
}

impl Outcome {
    pub(crate) fn skipped(reason: SkipReason) -> Self {
        tracing::debug!(reason = reason.label(), "sentença descartada");
        Outcome::Skipped { reason }
    }

    /// Perguntas geradas (vazio para sentenças descartadas).
    pub fn questions(&self) -> &[QuestionAnswer] {
        match self {
            Outcome::Generated { questions, .. } => questions,
            Outcome::Skipped { .. } => &[],
        }
    }
}

/// Gerador de perguntas, reutilizável entre sentenças.
pub struct QuestionGenerator<'a> {
    types: &'a TypeTable,
    config: QgConfig,
    stemmer: Stemmer,
}

impl<'a> QuestionGenerator<'a> {
    pub fn new(types: &'a TypeTable, config: QgConfig) -> Self {
        Self {
            types,
            config,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn config(&self) -> &QgConfig {
        &self.config
    }

    /// Gera as perguntas de um bloco do formato de intercâmbio.
    pub fn generate_question(&self, block: &str) -> Outcome {
        let mut graph = match DependencyGraph::parse(block, &self.config.graph) {
            Ok(graph) => graph,
            Err(err) => {
                tracing::warn!(error = %err, "parse inválido");
                return Outcome::skipped(SkipReason::MalformedParse);
            }
        };

        if graph.has_word(":") {
            return Outcome::skipped(SkipReason::ColonToken);
        }
        if !graph.has_subject() {
            return Outcome::skipped(SkipReason::NoSubject);
        }

        preprocess(&mut graph);
        if is_chronological(&graph) {
            return Outcome::skipped(SkipReason::Chronological);
        }

        let root = match graph.root() {
            Some(root) if root.tag().starts_with('V') && root.entity.is_none() => root.address,
            _ => return Outcome::skipped(SkipReason::NoVerbalRoot),
        };

        let sentence = graph.to_sentence(false);
        let mut questions = self.subject_questions(&graph, root);
        questions.extend(self.object_questions(&graph, root));

        tracing::debug!(%sentence, count = questions.len(), "perguntas geradas");
        Outcome::Generated { questions, sentence }
    }

    /// Gera as perguntas de uma sentença anotada e das linhas de 5 colunas
    /// que o parser externo produziu para ela.
    pub fn generate_from_annotated(&self, text: &str, rows: &str) -> Outcome {
        let mentions = &self.config.mentions;
        let (_, entities) = clean_sentence(text, mentions.single_word_originals, mentions.remove_article);
        let max_tokens = self.config.generation.max_tokens;
        match attach_entities(rows, &entities, &self.config.graph, max_tokens) {
            Ok(block) => self.generate_question(&block),
            Err(QgError::EntityMismatch { .. }) => Outcome::skipped(SkipReason::EntityMismatch),
            Err(QgError::SentenceTooLong { tokens, max }) => {
                tracing::debug!(tokens, max, "sentença longa demais");
                Outcome::skipped(SkipReason::SentenceTooLong)
            }
            Err(err) => {
                tracing::warn!(error = %err, "linhas do parser inválidas");
                Outcome::skipped(SkipReason::MalformedParse)
            }
        }
    }
}
