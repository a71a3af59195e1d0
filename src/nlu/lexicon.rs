//! # Léxico — Listas de Palavras do Inglês
//!
//! Conhecimento lexical fixo usado pelas passagens de pré-processamento e
//! pelo gerador. São listas fechadas, não um modelo: a gramática inglesa
//! aqui é conhecimento de projeto.
//!
//! | Lista | Uso |
//! |-------|-----|
//! | [`STOPWORDS`] | re-fusão de menções (fronteira de sequência) |
//! | [`MONTHS`] | respostas "When" e frases temporais |
//! | [`CONTEXT_WORDS`] | advérbios que exigem contexto antes da raiz |
//! | [`WHO_CATEGORIES`] | categorias respondidas por "Who"/"Whose" |
//! | pronomes | recuperação de pronomes, menções pouco confiáveis |

/// Stopwords do inglês (lista NLTK, 179 palavras).
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

pub const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Advérbios que, logo antes da raiz, pressupõem uma sentença anterior.
pub const CONTEXT_WORDS: &[&str] = &[
    "also", "then", "however", "instead", "therefore", "otherwise", "immediately", "later",
    "even",
];

pub const WHO_CATEGORIES: &[&str] = &[
    "Person", "Fictional Character", "Musical Artist", "Musical Group", "Sports Team",
];

pub const SUBJECT_PRONOUNS: &[&str] = &["she", "he", "it", "they"];
pub const POSSESSIVE_PRONOUNS: &[&str] = &["her", "his", "its", "their"];
pub const OBJECT_PRONOUNS: &[&str] = &["her", "him", "it", "them"];
pub const REFLEXIVE_PRONOUNS: &[&str] = &["himself", "herself", "themselves", "itself"];

/// Possessivos sem ambiguidade ("her" depende da relação).
pub const UNAMBIGUOUS_POSSESSIVES: &[&str] = &["his", "its", "their"];

/// Relações em que "her" é possessivo.
pub const POSSESSIVE_RELATIONS: &[&str] = &["compound", "nmod", "poss"];

/// Travessões tratados como token solto (en-dash e hífen).
pub const DASHES: &[&str] = &["\u{2013}", "-"];

/// Preposições que introduzem uma frase temporal ("in 1992", "after May").
pub const TEMPORAL_PREPOSITIONS: &[&str] = &["in", "at", "on", "by", "after", "before", "from"];

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

pub fn is_month(word: &str) -> bool {
    MONTHS.contains(&word)
}

pub fn is_context_word(word: &str) -> bool {
    CONTEXT_WORDS.contains(&word)
}

/// `true` para qualquer pronome pessoal, possessivo ou oblíquo.
pub fn is_pronoun(word: &str) -> bool {
    SUBJECT_PRONOUNS.contains(&word)
        || POSSESSIVE_PRONOUNS.contains(&word)
        || OBJECT_PRONOUNS.contains(&word)
}

/// Token que começa com 4 dígitos ("1992", "1990s").
pub fn is_year(word: &str) -> bool {
    word.chars().take(4).filter(char::is_ascii_digit).count() == 4
}

/// Ano de 4 dígitos no início do token, ou nome de mês.
pub fn is_year_or_month(word: &str) -> bool {
    is_year(word) || is_month(word)
}
