//! # entity-qg — Ponto de Entrada
//!
//! Lê blocos do formato de intercâmbio (arquivo ou stdin), gera as
//! perguntas e escreve uma linha por pergunta em stdout.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (stderr, RUST_LOG, padrão info)
//!   ├── Carrega QgConfig (--config) e aplica as flags
//!   ├── --parser-input: limpa as sentenças anotadas e encerra
//!   ├── Carrega a tabela de tipos (uma vez, somente leitura)
//!   ├── Cria QuestionGenerator + Orchestrator
//!   ├── Processa a entrada bloco a bloco
//!   └── Sumário (log; com --format json também em stdout)
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # TSV: índice, pergunta, resposta, sentença
//! entity-qg parsed.conll > questions.tsv
//!
//! # Tabelas de tipos e JSON por linha
//! entity-qg --types-map map.tsv --type-names types.txt --format json parsed.conll
//!
//! # Logs detalhados
//! RUST_LOG=debug entity-qg parsed.conll
//!
//! # Sentenças anotadas → entrada do parser externo
//! entity-qg --parser-input annotated.txt > sentences.txt
//!
//! # Blocos "# text = ..." + 5 colunas do parser
//! entity-qg --input-format annotated parsed5.txt
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use entity_qg::config::QgConfig;
use entity_qg::core::TypeTable;
use entity_qg::orchestrator::{self, BlockFormat, Orchestrator};
use entity_qg::persistence;
use entity_qg::QuestionGenerator;

/// Formato da saída.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `index \t question \t answer \t sentence`
    #[default]
    Tsv,
    /// Um objeto JSON por pergunta; o sumário na última linha
    Json,
}

/// Formato dos blocos de entrada.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// Linhas de 6 colunas com a coluna de entidade
    #[default]
    Interchange,
    /// `# text = <sentença anotada>` seguido das 5 colunas do parser
    Annotated,
}

impl From<InputFormat> for BlockFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Interchange => BlockFormat::Interchange,
            InputFormat::Annotated => BlockFormat::Annotated,
        }
    }
}

/// Rule-based question generation over entity-annotated dependency parses
#[derive(Parser, Debug)]
#[command(name = "entity-qg", version, about)]
struct Cli {
    /// Configuração JSON; as flags abaixo têm precedência
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tabela `name \t id \t id ...`
    #[arg(long, requires = "type_names")]
    types_map: Option<PathBuf>,

    /// Rótulos de tipo, um por linha (id = número da linha)
    #[arg(long, requires = "types_map")]
    type_names: Option<PathBuf>,

    /// Rótulo da relação da raiz
    #[arg(long)]
    root_label: Option<String>,

    /// Heads 0-based no formato de intercâmbio
    #[arg(long)]
    zero_based: bool,

    /// Colunas separadas por qualquer espaço em branco (em vez de tab)
    #[arg(long)]
    whitespace: bool,

    /// Menções `[id:name|category|original]`
    #[arg(long)]
    id_aware: bool,

    /// Reinsere `'s` possessivo e descarta menções pouco confiáveis
    #[arg(long)]
    regard_entity_name: bool,

    /// Limite de tokens por sentença
    #[arg(long)]
    max_tokens: Option<usize>,

    /// Menções de uma palavra viram o nome parseável, não o original
    #[arg(long)]
    parseable_names: bool,

    /// Remove "the" antes de menções genéricas
    #[arg(long)]
    remove_article: bool,

    #[arg(long, value_enum, default_value_t = InputFormat::Interchange)]
    input_format: InputFormat,

    /// Só limpa as sentenças anotadas (uma por linha) para o parser externo
    #[arg(long, conflicts_with = "input_format")]
    parser_input: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,

    /// Arquivo de entrada; stdin se ausente
    input: Option<PathBuf>,
}

impl Cli {
    /// Configuração final: arquivo (ou padrão) com as flags por cima.
    fn resolve_config(&self) -> Result<QgConfig> {
        let mut config = match &self.config {
            Some(path) => persistence::load_config(path)?,
            None => QgConfig::default(),
        };
        if let Some(label) = &self.root_label {
            config.graph.root_label = label.clone();
        }
        if self.zero_based {
            config.graph.zero_based = true;
        }
        if self.whitespace {
            config.graph.cell_separator = None;
        }
        if self.id_aware {
            config.mentions.id_aware = true;
        }
        if self.regard_entity_name {
            config.generation.regard_entity_name = true;
        }
        if let Some(max) = self.max_tokens {
            config.generation.max_tokens = max;
        }
        if self.parseable_names {
            config.mentions.single_word_originals = false;
        }
        if self.remove_article {
            config.mentions.remove_article = true;
        }
        if self.types_map.is_some() {
            config.types.name_to_type_ids = self.types_map.clone();
            config.types.type_names = self.type_names.clone();
        }
        Ok(config)
    }

    fn open_input(&self) -> Result<Box<dyn BufRead>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Falha ao abrir {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

fn main() -> Result<()> {
    // logs em stderr; stdout é só das perguntas
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if cli.parser_input {
        let reader = cli.open_input()?;
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        orchestrator::prepare_parser_input(reader, &config, |sentence| {
            writeln!(out, "{}", sentence).context("Falha ao escrever a saída")
        })?;
        out.flush().context("Falha ao escrever a saída")?;
        return Ok(());
    }

    let types: TypeTable = persistence::load_type_table(&config.types)?;
    tracing::info!(
        root_label = %config.graph.root_label,
        zero_based = config.graph.zero_based,
        id_aware = config.mentions.id_aware,
        regard_entity_name = config.generation.regard_entity_name,
        type_entities = types.len(),
        input_format = ?cli.input_format,
        "entity-qg iniciado"
    );

    let reader = cli.open_input()?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let format = cli.format;

    let mut orchestrator =
        Orchestrator::new(QuestionGenerator::new(&types, config)).with_format(cli.input_format.into());
    orchestrator.run(reader, |result| {
        for record in result.records() {
            match format {
                OutputFormat::Tsv => writeln!(out, "{}", record.to_tsv()),
                OutputFormat::Json => {
                    let line = serde_json::to_string(&record).context("Falha ao serializar pergunta")?;
                    writeln!(out, "{}", line)
                }
            }
            .context("Falha ao escrever a saída")?;
        }
        Ok(())
    })?;

    let metrics = orchestrator.finish();
    if format == OutputFormat::Json {
        let summary = serde_json::json!({ "summary": metrics });
        writeln!(out, "{}", summary).context("Falha ao escrever o sumário")?;
    }
    out.flush().context("Falha ao escrever a saída")?;
    Ok(())
}
