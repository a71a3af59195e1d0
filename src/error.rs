//! # Erros — Taxonomia de Falhas por Sentença
//!
//! Erros da biblioteca, todos **contidos na fronteira da sentença**: o
//! [`Orchestrator`](crate::orchestrator::Orchestrator) converte qualquer
//! [`QgError`] em "zero perguntas" e segue para o próximo bloco.
//!
//! | Variante | Origem | Nível de log |
//! |----------|--------|--------------|
//! | `MalformedRow` | linha do formato de intercâmbio ilegível | `warn` |
//! | `MalformedEntity` | coluna de entidade fora do formato tupla | `warn` |
//! | `EntityMismatch` | token do parser ≠ forma esperada da entidade | `debug` |
//! | `SentenceTooLong` | guarda de tamanho máximo antes do parser | `debug` |
//! | `TypeTable` | tabela de tipos corrompida (apenas na carga) | fatal no binário |

use thiserror::Error;

/// Resultado padrão das operações da biblioteca.
pub type Result<T> = std::result::Result<T, QgError>;

/// Falhas da biblioteca de geração de perguntas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QgError {
    /// Linha do bloco de parse que não pode ser interpretada.
    #[error("linha {line} malformada: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// Coluna de entidade que não casa com `("name", "category", "original", address)`.
    #[error("entidade malformada na linha {line}: {cell}")]
    MalformedEntity { line: usize, cell: String },

    /// O token do parser não corresponde à entidade anotada naquele endereço.
    #[error("token '{token}' no endereço {address} não corresponde à entidade '{expected}'")]
    EntityMismatch {
        address: usize,
        token: String,
        expected: String,
    },

    /// Sentença acima do limite de tokens.
    #[error("sentença com {tokens} tokens excede o limite de {max}")]
    SentenceTooLong { tokens: usize, max: usize },

    /// Entrada da tabela de tipos inválida.
    #[error("tabela de tipos inválida na linha {line}: {reason}")]
    TypeTable { line: usize, reason: String },
}
