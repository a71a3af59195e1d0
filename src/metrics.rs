//! # Métricas da Execução — Contadores do Lote
//!
//! [`RunMetrics`] acumula, sentença a sentença, o que o gerador produziu e
//! por que descartou o resto. Ao fim da entrada vira uma linha de log
//! ([`RunMetrics::summary_line`]) ou um objeto JSON (`--format json`).
//!
//! | Contador | Significado |
//! |----------|-------------|
//! | `sentences` | blocos não vazios lidos |
//! | `sentences_with_questions` | blocos com ao menos uma pergunta |
//! | `questions` | pares gerados (`subject_questions + object_questions`) |
//! | `skipped` | descartes por [`SkipReason`] |
//! | `elapsed_ms` | duração total |

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::qg::{Method, Outcome, SkipReason};

/// Contadores de uma execução.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunMetrics {
    pub sentences: usize,
    pub sentences_with_questions: usize,
    pub questions: usize,
    pub subject_questions: usize,
    pub object_questions: usize,
    /// Rótulo do motivo → quantidade; todos os motivos aparecem.
    pub skipped: BTreeMap<&'static str, usize>,
    pub elapsed_ms: u64,
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self {
            sentences: 0,
            sentences_with_questions: 0,
            questions: 0,
            subject_questions: 0,
            object_questions: 0,
            skipped: SkipReason::ALL.iter().map(|r| (r.label(), 0)).collect(),
            elapsed_ms: 0,
        }
    }
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contabiliza o resultado de uma sentença.
    pub fn record(&mut self, outcome: &Outcome) {
        self.sentences += 1;
        match outcome {
            Outcome::Generated { questions, .. } => {
                if !questions.is_empty() {
                    self.sentences_with_questions += 1;
                }
                self.questions += questions.len();
                for qa in questions {
                    match qa.method {
                        Method::Subject => self.subject_questions += 1,
                        Method::Object => self.object_questions += 1,
                    }
                }
            }
            Outcome::Skipped { reason } => {
                *self.skipped.entry(reason.label()).or_default() += 1;
            }
        }
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed_ms = elapsed.as_millis() as u64;
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Linha de sumário.
    ///
    /// Formato: `"1200ms | 10 sentences | 4 with questions | 7 questions (5 subject, 2 object) | skipped 3: colon_token=1 no_subject=2"`
    pub fn summary_line(&self) -> String {
        let reasons: Vec<String> = self
            .skipped
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(label, count)| format!("{}={}", label, count))
            .collect();
        let skipped_part = if reasons.is_empty() {
            String::new()
        } else {
            format!(": {}", reasons.join(" "))
        };

        format!(
            "{}ms | {} sentences | {} with questions | {} questions ({} subject, {} object) | skipped {}{}",
            self.elapsed_ms,
            self.sentences,
            self.sentences_with_questions,
            self.questions,
            self.subject_questions,
            self.object_questions,
            self.skipped_total(),
            skipped_part,
        )
    }
}
