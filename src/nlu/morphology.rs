//! # Morfologia — Plural, Lematização e Radicais do Inglês
//!
//! Regras morfológicas escritas à mão, no mesmo espírito das listas de
//! sufixos do extrator: cobrem o que o gerador precisa (infinitivo do verbo
//! raiz, forma singular de rótulos de tipo, plural de rótulos) sem depender
//! de dicionário externo.
//!
//! ## Lematização Verbal
//!
//! ```text
//! palavra ──► tabela de irregulares ──► sufixo (-ies/-ied/-eed/-ed/-ing/-es/-s)
//!                                             │
//!                                             ▼
//!                              restauração do radical
//!                      (verbos em -e conhecidos, consoante dobrada,
//!                       padrões de final em -e, radical curto CVC)
//! ```
//!
//! | Entrada | Lema |
//! |---------|------|
//! | `was` | `be` |
//! | `composed` | `compose` |
//! | `stopped` | `stop` |
//! | `studies` | `study` |
//! | `founded` | `found` |
//!
//! Radicais para comparação de nomes usam o Snowball inglês (`rust-stemmers`).

use rust_stemmers::Stemmer;

/// Formas irregulares → infinitivo.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("'s", "be"), ("'re", "be"), ("'m", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"), ("'ve", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"),
    ("goes", "go"), ("went", "go"), ("gone", "go"),
    ("arose", "arise"), ("arisen", "arise"), ("awoke", "awake"), ("awoken", "awake"),
    ("bore", "bear"), ("born", "bear"), ("borne", "bear"), ("beat", "beat"), ("beaten", "beat"),
    ("became", "become"), ("become", "become"), ("began", "begin"), ("begun", "begin"),
    ("bent", "bend"), ("bet", "bet"), ("bit", "bite"), ("bitten", "bite"), ("bled", "bleed"),
    ("blew", "blow"), ("blown", "blow"), ("broke", "break"), ("broken", "break"),
    ("bred", "breed"), ("brought", "bring"), ("built", "build"), ("burnt", "burn"),
    ("bought", "buy"), ("caught", "catch"), ("chose", "choose"), ("chosen", "choose"),
    ("came", "come"), ("come", "come"), ("cost", "cost"), ("crept", "creep"), ("cut", "cut"),
    ("dealt", "deal"), ("dug", "dig"), ("drew", "draw"), ("drawn", "draw"), ("dreamt", "dream"),
    ("drank", "drink"), ("drunk", "drink"), ("drove", "drive"), ("driven", "drive"),
    ("ate", "eat"), ("eaten", "eat"), ("fell", "fall"), ("fallen", "fall"), ("fed", "feed"),
    ("felt", "feel"), ("fought", "fight"), ("found", "find"), ("fled", "flee"),
    ("flew", "fly"), ("flown", "fly"), ("forbade", "forbid"), ("forbidden", "forbid"),
    ("forgot", "forget"), ("forgotten", "forget"), ("forgave", "forgive"),
    ("forgiven", "forgive"), ("foresaw", "foresee"), ("foreseen", "foresee"),
    ("froze", "freeze"), ("frozen", "freeze"), ("got", "get"), ("gotten", "get"),
    ("gave", "give"), ("given", "give"), ("grew", "grow"), ("grown", "grow"),
    ("hung", "hang"), ("hanged", "hang"), ("heard", "hear"), ("hid", "hide"),
    ("hidden", "hide"), ("hit", "hit"), ("held", "hold"), ("hurt", "hurt"), ("kept", "keep"),
    ("knew", "know"), ("known", "know"), ("laid", "lay"), ("led", "lead"), ("left", "leave"),
    ("lent", "lend"), ("let", "let"), ("lain", "lie"), ("lay", "lie"), ("lit", "light"),
    ("lost", "lose"), ("made", "make"), ("meant", "mean"), ("met", "meet"),
    ("misled", "mislead"), ("overcame", "overcome"), ("overcome", "overcome"),
    ("oversaw", "oversee"), ("overseen", "oversee"), ("overtook", "overtake"),
    ("overtaken", "overtake"), ("paid", "pay"), ("put", "put"), ("quit", "quit"),
    ("read", "read"), ("rebuilt", "rebuild"), ("rode", "ride"), ("ridden", "ride"),
    ("rang", "ring"), ("rung", "ring"), ("rose", "rise"), ("risen", "rise"), ("ran", "run"),
    ("run", "run"), ("said", "say"), ("saw", "see"), ("seen", "see"), ("sought", "seek"),
    ("sold", "sell"), ("sent", "send"), ("set", "set"), ("shook", "shake"),
    ("shaken", "shake"), ("shed", "shed"), ("shone", "shine"), ("shot", "shoot"),
    ("shown", "show"), ("shrank", "shrink"), ("shrunk", "shrink"), ("shut", "shut"),
    ("sang", "sing"), ("sung", "sing"), ("sank", "sink"), ("sunk", "sink"), ("sat", "sit"),
    ("slew", "slay"), ("slain", "slay"), ("slept", "sleep"), ("slid", "slide"),
    ("spoke", "speak"), ("spoken", "speak"), ("sped", "speed"), ("spent", "spend"),
    ("spun", "spin"), ("split", "split"), ("spread", "spread"), ("sprang", "spring"),
    ("sprung", "spring"), ("stood", "stand"), ("stole", "steal"), ("stolen", "steal"),
    ("stuck", "stick"), ("stung", "sting"), ("strode", "stride"), ("struck", "strike"),
    ("strove", "strive"), ("striven", "strive"), ("swore", "swear"), ("sworn", "swear"),
    ("swept", "sweep"), ("swam", "swim"), ("swum", "swim"), ("swung", "swing"),
    ("took", "take"), ("taken", "take"), ("taught", "teach"), ("tore", "tear"),
    ("torn", "tear"), ("told", "tell"), ("thought", "think"), ("threw", "throw"),
    ("thrown", "throw"), ("thrust", "thrust"), ("trod", "tread"), ("trodden", "tread"),
    ("understood", "understand"), ("undertook", "undertake"), ("undertaken", "undertake"),
    ("underwent", "undergo"), ("undergone", "undergo"), ("upheld", "uphold"),
    ("woke", "wake"), ("woken", "wake"), ("wore", "wear"), ("worn", "wear"),
    ("wove", "weave"), ("woven", "weave"), ("wed", "wed"), ("wept", "weep"), ("won", "win"),
    ("wound", "wind"), ("withdrew", "withdraw"), ("withdrawn", "withdraw"),
    ("withheld", "withhold"), ("wrote", "write"), ("written", "write"),
    ("rewrote", "rewrite"), ("rewritten", "rewrite"), ("bound", "bind"), ("fit", "fit"),
    ("dies", "die"), ("died", "die"), ("dying", "die"), ("ties", "tie"), ("tied", "tie"),
    ("tying", "tie"), ("lies", "lie"), ("lied", "lie"), ("lying", "lie"),
    ("bring", "bring"), ("sing", "sing"), ("ring", "ring"), ("sting", "sting"),
    ("swing", "swing"), ("spring", "spring"), ("string", "string"), ("cling", "cling"),
    ("fling", "fling"), ("sling", "sling"), ("wring", "wring"), ("embed", "embed"),
    ("need", "need"), ("bias", "bias"), ("focus", "focus"),
];

/// Infinitivos terminados em `-e` que as regras não reconstroem sozinhas.
const E_FINAL_VERBS: &[&str] = &[
    "create", "recreate", "procreate", "escape", "explore", "ignore", "restore", "deplore",
    "implore", "adore", "complete", "compete", "delete", "deplete", "secrete", "excrete",
    "quote", "promote", "devote", "denote", "emote", "invite", "cite", "excite", "incite",
    "ignite", "recite", "unite", "reunite", "expedite", "paste", "waste", "taste", "baste",
    "postpone", "condone", "atone", "intone", "convene", "intervene", "interfere", "adhere",
    "revere", "persevere", "cohere", "breathe", "bathe", "soothe", "clothe", "loathe",
    "seethe", "teethe", "writhe", "agree", "disagree", "free", "decree", "guarantee",
    "referee", "flee", "emcee", "ache", "elope", "reshape", "landscape", "stereotype",
    "prototype", "compose", "dispose", "release", "increase", "decrease",
];

/// Verbos com `-l` final que dobram na flexão britânica (`controlled`).
const DOUBLE_L_VERBS: &[&str] = &[
    "control", "patrol", "compel", "expel", "propel", "rebel", "excel", "enrol", "annul",
    "label", "travel", "cancel", "model", "fuel", "level", "signal", "total", "counsel",
    "channel", "dispel", "repel", "impel", "quarrel", "marvel", "shovel", "tunnel", "dial",
    "equal", "fulfil", "instil", "distil",
];

/// Radicais cuja consoante dobrada é original (`added`, `erred`).
const KEEP_DOUBLE: &[&str] = &["add", "err", "ebb", "egg", "purr"];

/// Radicais em `-s` sem `-e` final.
const NO_E_STEMS: &[&str] = &["focus", "bias", "canvas", "gas", "bus", "plus", "chorus"];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"), ("men", "man"), ("women", "woman"), ("feet", "foot"),
    ("teeth", "tooth"), ("mice", "mouse"), ("geese", "goose"), ("wives", "wife"),
    ("knives", "knife"), ("lives", "life"), ("halves", "half"), ("leaves", "leaf"),
];

// ─── Plural ──────────────────────────────────────────────────────

/// Plural inglês por regra.
///
/// Não trata `-f/-fe` → `-ves` nem `-o` → `-oes`, que não são regulares.
pub fn get_plural(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if word.ends_with('y') && n >= 2 && !"aeiou".contains(chars[n - 2]) {
        format!("{}ies", &word[..word.len() - 1])
    } else if word.ends_with("sh") || word.ends_with("ch") || word.ends_with('s') || word.ends_with('x') {
        format!("{}es", word)
    } else if word.ends_with('z') {
        format!("{}zes", word)
    } else {
        format!("{}s", word)
    }
}

// ─── Lematização ─────────────────────────────────────────────────

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Medida de Porter: número de sequências vogal→consoante.
fn measure(chars: &[char]) -> usize {
    let mut m = 0;
    let mut previous_vowel = false;
    for (i, &c) in chars.iter().enumerate() {
        // 'y' após consoante conta como vogal
        let vowel = is_vowel(c) || (c == 'y' && i > 0 && !previous_vowel);
        if previous_vowel && !vowel {
            m += 1;
        }
        previous_vowel = vowel;
    }
    m
}

/// Decide se o radical perdeu um `-e` final ao receber `-ed`/`-ing`.
fn needs_final_e(stem: &str, chars: &[char]) -> bool {
    let n = chars.len();
    if n < 2 || NO_E_STEMS.contains(&stem) {
        return false;
    }
    let last = chars[n - 1];
    let prev = chars[n - 2];
    let prev2 = if n >= 3 { Some(chars[n - 3]) } else { None };
    let after_consonant = prev2.map_or(true, is_consonant);
    let vowel_or_y = |c: char| is_vowel(c) || c == 'y';

    let by_pattern = match last {
        'v' | 'u' | 'c' => true,
        'z' => vowel_or_y(prev),
        's' => vowel_or_y(prev) || matches!(prev, 'n' | 'r' | 'l' | 'p'),
        'g' => {
            matches!(prev, 'a' | 'd' | 'r' | 'l' | 'e' | 'u')
                || (prev == 'n' && prev2.is_some_and(|c| matches!(c, 'a' | 'e' | 'u')))
        }
        'l' => {
            (is_consonant(prev) && prev != 'r' && prev != 'l')
                || (matches!(prev, 'i' | 'o' | 'u') && after_consonant)
        }
        'd' | 'b' | 'k' | 'm' => is_vowel(prev) && after_consonant,
        't' => {
            (prev == 'a' && !prev2.is_some_and(|c| matches!(c, 'e' | 'o' | 'a')))
                || (prev == 'u' && after_consonant)
        }
        'r' => {
            matches!(prev, 'a' | 'i' | 'u')
                && (after_consonant || (prev == 'i' && prev2 == Some('u')))
        }
        'n' => matches!(prev, 'i' | 'u') && after_consonant,
        _ => false,
    };
    if by_pattern {
        return true;
    }

    // radical curto consoante-vogal-consoante: name(d), hop(ed), vot(ed)
    n >= 3
        && measure(chars) == 1
        && is_consonant(chars[n - 3])
        && vowel_or_y(prev)
        && is_consonant(last)
        && !matches!(last, 'w' | 'x' | 'y')
}

/// Reconstrói o infinitivo a partir do radical sem `-ed`/`-ing`.
fn restore_stem(stem: &str) -> String {
    let with_e = format!("{}e", stem);
    if E_FINAL_VERBS.contains(&with_e.as_str()) {
        return with_e;
    }
    if KEEP_DOUBLE.contains(&stem) {
        return stem.to_string();
    }
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n >= 3 && chars[n - 1] == chars[n - 2] && is_consonant(chars[n - 1]) {
        let single = &stem[..stem.len() - 1];
        return match chars[n - 1] {
            'l' if DOUBLE_L_VERBS.contains(&single) => single.to_string(),
            'l' | 's' | 'f' | 'z' => stem.to_string(),
            _ => single.to_string(),
        };
    }
    if needs_final_e(stem, &chars) {
        return with_e;
    }
    stem.to_string()
}

/// Infinitivo de uma forma verbal, em minúsculas.
pub fn lemmatize_verb(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some((_, lemma)) = IRREGULAR_VERBS.iter().find(|(form, _)| *form == lower) {
        return lemma.to_string();
    }
    if lower.len() <= 3 || !lower.is_ascii() {
        return lower;
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        return format!("{}y", stem);
    }
    if lower.ends_with("eed") {
        let without_d = &lower[..lower.len() - 1];
        return if E_FINAL_VERBS.contains(&without_d) {
            without_d.to_string()
        } else {
            lower
        };
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        return restore_stem(stem);
    }
    if let Some(stem) = lower.strip_suffix("ing").filter(|s| s.len() >= 2) {
        return restore_stem(stem);
    }
    for suffix in ["sses", "shes", "ches", "xes", "zzes", "oes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return lower;
    }
    if let Some(stem) = lower.strip_suffix('s') {
        return stem.to_string();
    }
    lower
}

/// Forma singular de um substantivo, em minúsculas.
///
/// Expressões com espaço são devolvidas apenas em minúsculas.
pub fn lemmatize_noun(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.contains(char::is_whitespace) || !lower.is_ascii() {
        return lower;
    }
    if let Some((_, lemma)) = IRREGULAR_NOUNS.iter().find(|(form, _)| *form == lower) {
        return lemma.to_string();
    }
    if lower.len() <= 3 {
        return lower;
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return lower;
    }
    match lower.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => lower,
    }
}

// ─── Caixa e radicais ────────────────────────────────────────────

/// `true` se há ao menos uma letra com caixa e nenhuma maiúscula.
pub fn is_lowercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            cased = true;
        }
    }
    cased
}

/// Concatena os radicais Snowball de cada palavra (separada por espaço).
pub fn stem_phrase(stemmer: &Stemmer, phrase: &str) -> String {
    phrase
        .to_lowercase()
        .split(' ')
        .map(|w| stemmer.stem(w).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_stemmers::Algorithm;

    // ─── get_plural ──────────────────────────────────────────────

    #[test]
    fn plural_rules() {
        assert_eq!(get_plural("fish"), "fishes");
        assert_eq!(get_plural("quiz"), "quizzes");
        assert_eq!(get_plural("baby"), "babies");
        assert_eq!(get_plural("tray"), "trays");
        assert_eq!(get_plural("bus"), "buses");
        assert_eq!(get_plural("church"), "churches");
        assert_eq!(get_plural("box"), "boxes");
        assert_eq!(get_plural("city"), "cities");
        assert_eq!(get_plural("Field"), "Fields");
    }

    // ─── lemmatize_verb ──────────────────────────────────────────

    #[test]
    fn irregular_verbs() {
        assert_eq!(lemmatize_verb("was"), "be");
        assert_eq!(lemmatize_verb("Is"), "be");
        assert_eq!(lemmatize_verb("has"), "have");
        assert_eq!(lemmatize_verb("wrote"), "write");
        assert_eq!(lemmatize_verb("born"), "bear");
        assert_eq!(lemmatize_verb("sold"), "sell");
    }

    #[test]
    fn regular_past_forms() {
        assert_eq!(lemmatize_verb("composed"), "compose");
        assert_eq!(lemmatize_verb("played"), "play");
        assert_eq!(lemmatize_verb("stopped"), "stop");
        assert_eq!(lemmatize_verb("called"), "call");
        assert_eq!(lemmatize_verb("controlled"), "control");
        assert_eq!(lemmatize_verb("added"), "add");
        assert_eq!(lemmatize_verb("founded"), "found");
        assert_eq!(lemmatize_verb("created"), "create");
        assert_eq!(lemmatize_verb("stated"), "state");
        assert_eq!(lemmatize_verb("treated"), "treat");
        assert_eq!(lemmatize_verb("named"), "name");
        assert_eq!(lemmatize_verb("opened"), "open");
        assert_eq!(lemmatize_verb("provided"), "provide");
        assert_eq!(lemmatize_verb("included"), "include");
        assert_eq!(lemmatize_verb("produced"), "produce");
        assert_eq!(lemmatize_verb("moved"), "move");
        assert_eq!(lemmatize_verb("changed"), "change");
        assert_eq!(lemmatize_verb("belonged"), "belong");
        assert_eq!(lemmatize_verb("acquired"), "acquire");
        assert_eq!(lemmatize_verb("entered"), "enter");
        assert_eq!(lemmatize_verb("handled"), "handle");
        assert_eq!(lemmatize_verb("married"), "marry");
        assert_eq!(lemmatize_verb("agreed"), "agree");
        assert_eq!(lemmatize_verb("needed"), "need");
        assert_eq!(lemmatize_verb("visited"), "visit");
        assert_eq!(lemmatize_verb("evaluated"), "evaluate");
        assert_eq!(lemmatize_verb("continued"), "continue");
        assert_eq!(lemmatize_verb("described"), "describe");
    }

    #[test]
    fn present_and_gerund_forms() {
        assert_eq!(lemmatize_verb("depicts"), "depict");
        assert_eq!(lemmatize_verb("watches"), "watch");
        assert_eq!(lemmatize_verb("studies"), "study");
        assert_eq!(lemmatize_verb("uses"), "use");
        assert_eq!(lemmatize_verb("discuss"), "discuss");
        assert_eq!(lemmatize_verb("making"), "make");
        assert_eq!(lemmatize_verb("running"), "run");
        assert_eq!(lemmatize_verb("seeing"), "see");
        assert_eq!(lemmatize_verb("bringing"), "bring");
        assert_eq!(lemmatize_verb("proceed"), "proceed");
        assert_eq!(lemmatize_verb("compose"), "compose");
    }

    // ─── lemmatize_noun ──────────────────────────────────────────

    #[test]
    fn noun_lemmas() {
        assert_eq!(lemmatize_noun("cities"), "city");
        assert_eq!(lemmatize_noun("City"), "city");
        assert_eq!(lemmatize_noun("towns"), "town");
        assert_eq!(lemmatize_noun("churches"), "church");
        assert_eq!(lemmatize_noun("class"), "class");
        assert_eq!(lemmatize_noun("children"), "child");
        assert_eq!(lemmatize_noun("German city"), "german city");
        assert_eq!(lemmatize_noun("[x]"), "[x]");
        assert_eq!(lemmatize_noun("is"), "is");
    }

    // ─── caixa e radicais ────────────────────────────────────────

    #[test]
    fn lowercase_detection() {
        assert!(is_lowercase("film"));
        assert!(is_lowercase("world war"));
        assert!(!is_lowercase("Film"));
        assert!(!is_lowercase("1997"));
        assert!(!is_lowercase(""));
    }

    #[test]
    fn stem_phrase_concatenates() {
        let stemmer = Stemmer::create(Algorithm::English);
        assert_eq!(stem_phrase(&stemmer, "World War"), "worldwar");
        assert_eq!(stem_phrase(&stemmer, "films"), stem_phrase(&stemmer, "film"));
    }
}
