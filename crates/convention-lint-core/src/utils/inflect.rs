//! Minimal English noun inflection for identifier words.
//!
//! Covers regular suffix rules plus the irregular and uncountable nouns that
//! show up as model and table names. Input words are expected lowercase;
//! callers split identifiers with [`split_words`](super::case::split_words)
//! first and inflect only the last word.

/// Irregular `(singular, plural)` pairs.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("half", "halves"),
    ("wolf", "wolves"),
    ("shelf", "shelves"),
    ("thief", "thieves"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("quiz", "quizzes"),
    ("criterion", "criteria"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("axis", "axes"),
    ("crisis", "crises"),
    ("analysis", "analyses"),
    ("thesis", "theses"),
    ("movie", "movies"),
    ("cookie", "cookies"),
    ("zombie", "zombies"),
    ("calorie", "calories"),
    ("rookie", "rookies"),
    ("selfie", "selfies"),
    ("tie", "ties"),
    ("pie", "pies"),
];

/// Singular nouns ending in `s` that are not covered by the `-ss`, `-us`
/// and `-is` endings.
const SINGULAR_S: &[&str] = &[
    "alias",
    "atlas",
    "bias",
    "canvas",
    "chaos",
    "corps",
    "cosmos",
    "gas",
    "kudos",
    "lens",
    "pancreas",
    "plus",
    "thermos",
];

/// Nouns whose singular and plural forms are identical.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
];

/// Returns true if the word is uncountable.
#[must_use]
pub fn is_uncountable(word: &str) -> bool {
    UNCOUNTABLE.contains(&word)
}

/// Returns the plural form of a lowercase singular word.
///
/// ```
/// use convention_lint_core::utils::inflect::pluralize;
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("person"), "people");
/// ```
#[must_use]
pub fn pluralize(word: &str) -> String {
    if word.is_empty() || is_uncountable(word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == word) {
        return (*plural).to_string();
    }
    if IRREGULAR.iter().any(|(_, p)| *p == word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.ends_with(is_vowel) {
            return format!("{stem}ies");
        }
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Returns the singular form of a lowercase word.
///
/// Words that are already singular are returned unchanged.
///
/// ```
/// use convention_lint_core::utils::inflect::singularize;
/// assert_eq!(singularize("articles"), "article");
/// assert_eq!(singularize("addresses"), "address");
/// assert_eq!(singularize("status"), "status");
/// ```
#[must_use]
pub fn singularize(word: &str) -> String {
    if word.is_empty() || is_uncountable(word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, p)| *p == word) {
        return (*singular).to_string();
    }
    if IRREGULAR.iter().any(|(s, _)| *s == word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    if SINGULAR_S.contains(&word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("es") {
        if SINGULAR_S.contains(&stem)
            || stem.ends_with("ss")
            || stem.ends_with("us")
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            return stem.to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !stem.is_empty() {
            return stem.to_string();
        }
    }
    word.to_string()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
