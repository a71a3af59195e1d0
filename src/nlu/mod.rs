//! # Camada NLU — Conhecimento do Inglês
//!
//! Tudo o que o gerador sabe sobre a língua inglesa, sem modelo estatístico:
//!
//! | Módulo | Responsabilidade |
//! |--------|-----------------|
//! | [`lexicon`] | listas fechadas: stopwords, meses, pronomes, travessões |
//! | [`morphology`] | plural, lematização, radicais Snowball, caixa |
//! | [`annotation`] | texto com menções ↔ entrada/saída do parser externo |
//!
//! ## Analogia
//!
//! É o **dicionário de bolso** do gerador: não entende a sentença, mas sabe
//! que "was" é "be", que "cities" é "city" e que "her" pode ser possessivo.

/// Listas de palavras do inglês.
pub mod lexicon;

/// Regras morfológicas (plural, lema, radical).
pub mod morphology;

/// Limpeza de menções e anexação de entidades ao parse.
pub mod annotation;

pub use annotation::{
    attach_entities, clean_sentence, prepare_for_parser, split_annotated_block, TEXT_HEADER,
};
pub use morphology::{get_plural, is_lowercase, lemmatize_noun, lemmatize_verb, stem_phrase};
