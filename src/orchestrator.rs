//! # Orquestrador — O Lote de Sentenças
//!
//! O [`Orchestrator`] lê um fluxo de blocos do formato de intercâmbio
//! (uma linha por token, linha vazia entre sentenças), passa cada bloco
//! pelo [`QuestionGenerator`] e entrega os resultados a quem chamou.
//!
//! ## Ciclo por sentença
//!
//! ```text
//! linhas ──► bloco (até linha vazia ou EOF)
//!              ├── NFC
//!              ├── generate_question  ──► Outcome
//!              ├── RunMetrics::record
//!              └── sink(&SentenceResult)
//! ```
//!
//! Uma sentença problemática vira [`Outcome::Skipped`] e nunca interrompe
//! o lote; só erros de I/O (leitura ou escrita) sobem como `anyhow::Error`.
//!
//! ## Formatos de bloco
//!
//! | [`BlockFormat`] | Conteúdo do bloco | Entrada do gerador |
//! |-----------------|-------------------|--------------------|
//! | `Interchange` | linhas de 6 colunas | `generate_question` |
//! | `Annotated` | `# text = ...` + linhas de 5 colunas | `generate_from_annotated` |
//!
//! [`prepare_parser_input`] faz o caminho inverso: limpa sentenças
//! anotadas (uma por linha) para o parser externo.

use std::io::BufRead;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::config::QgConfig;
use crate::metrics::RunMetrics;
use crate::nlu::{prepare_for_parser, split_annotated_block};
use crate::qg::{Method, Outcome, QuestionGenerator, SkipReason};

/// Intervalo, em sentenças, entre logs de progresso.
const PROGRESS_EVERY: usize = 100_000;

/// Como interpretar cada bloco da entrada.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockFormat {
    /// Linhas de 6 colunas com a coluna de entidade.
    #[default]
    Interchange,
    /// Cabeçalho `# text = ` com a sentença anotada e linhas de 5 colunas.
    Annotated,
}

/// Resultado de uma sentença do lote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceResult {
    /// Posição 1-based entre os blocos não vazios.
    pub index: usize,
    pub outcome: Outcome,
}

/// Uma linha de saída: uma pergunta com sua origem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionRecord<'a> {
    pub index: usize,
    pub question: &'a str,
    pub answer: &'a str,
    pub method: Method,
    pub sentence: &'a str,
}

impl QuestionRecord<'_> {
    /// `index \t question \t answer \t sentence`
    pub fn to_tsv(&self) -> String {
        format!("{}\t{}\t{}\t{}", self.index, self.question, self.answer, self.sentence)
    }
}

impl SentenceResult {
    /// Uma linha por pergunta; vazio para sentenças descartadas.
    pub fn records(&self) -> Vec<QuestionRecord<'_>> {
        match &self.outcome {
            Outcome::Generated { questions, sentence } => questions
                .iter()
                .map(|qa| QuestionRecord {
                    index: self.index,
                    question: &qa.question,
                    answer: &qa.answer,
                    method: qa.method,
                    sentence,
                })
                .collect(),
            Outcome::Skipped { .. } => Vec::new(),
        }
    }
}

/// Driver do lote.
pub struct Orchestrator<'a> {
    generator: QuestionGenerator<'a>,
    format: BlockFormat,
    metrics: RunMetrics,
    started: Instant,
}

impl<'a> Orchestrator<'a> {
    pub fn new(generator: QuestionGenerator<'a>) -> Self {
        Self {
            generator,
            format: BlockFormat::default(),
            metrics: RunMetrics::new(),
            started: Instant::now(),
        }
    }

    pub fn with_format(mut self, format: BlockFormat) -> Self {
        self.format = format;
        self
    }

    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Processa um bloco; `None` se ele só tiver espaços.
    pub fn process_block(&mut self, block: &str) -> Option<SentenceResult> {
        if block.trim().is_empty() {
            return None;
        }
        let normalized: String = block.nfc().collect();
        let outcome = match self.format {
            BlockFormat::Interchange => self.generator.generate_question(&normalized),
            BlockFormat::Annotated => match split_annotated_block(&normalized) {
                Some((text, rows)) => self.generator.generate_from_annotated(text, rows),
                None => {
                    tracing::warn!("bloco anotado sem cabeçalho \"# text = \"");
                    Outcome::skipped(SkipReason::MalformedParse)
                }
            },
        };
        self.metrics.record(&outcome);

        let index = self.metrics.sentences;
        if index % PROGRESS_EVERY == 0 {
            tracing::info!(
                sentences = index,
                questions = self.metrics.questions,
                elapsed_ms = self.started.elapsed().as_millis() as u64,
                "progresso"
            );
        }
        Some(SentenceResult { index, outcome })
    }

    /// Lê todos os blocos de `reader` e chama `sink` para cada sentença.
    ///
    /// O último bloco é processado mesmo sem linha vazia final.
    pub fn run<R, F>(&mut self, reader: R, mut sink: F) -> Result<()>
    where
        R: BufRead,
        F: FnMut(&SentenceResult) -> Result<()>,
    {
        let mut block = String::new();
        for line in reader.lines() {
            let line = line.context("Falha ao ler a entrada")?;
            if line.trim().is_empty() {
                if let Some(result) = self.process_block(&block) {
                    sink(&result)?;
                }
                block.clear();
            } else {
                block.push_str(&line);
                block.push('\n');
            }
        }
        if let Some(result) = self.process_block(&block) {
            sink(&result)?;
        }
        Ok(())
    }

    /// Fecha a execução: registra a duração e loga o sumário.
    pub fn finish(mut self) -> RunMetrics {
        self.metrics.finish(self.started.elapsed());
        tracing::info!("{}", self.metrics.summary_line());
        self.metrics
    }
}

/// Limpa cada linha anotada de `reader` e entrega a sentença plana a `sink`.
///
/// Linhas vazias são ignoradas; sentenças acima de `generation.max_tokens`
/// são puladas com `warn`. Devolve `(escritas, puladas)`.
pub fn prepare_parser_input<R, F>(reader: R, config: &QgConfig, mut sink: F) -> Result<(usize, usize)>
where
    R: BufRead,
    F: FnMut(&str) -> Result<()>,
{
    let (mut written, mut skipped) = (0, 0);
    for line in reader.lines() {
        let line = line.context("Falha ao ler a entrada")?;
        let line: String = line.nfc().collect();
        if line.trim().is_empty() {
            continue;
        }
        match prepare_for_parser(&line, &config.mentions, config.generation.max_tokens) {
            Ok(sentence) => {
                sink(&sentence)?;
                written += 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, "linha pulada");
                skipped += 1;
            }
        }
    }
    tracing::info!(written, skipped, "entrada do parser pronta");
    Ok((written, skipped))
}
