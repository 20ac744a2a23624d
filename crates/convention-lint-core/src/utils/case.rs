//! Identifier casing predicates and conversions.
//!
//! All predicates are ASCII-only: identifiers with non-ASCII characters never
//! satisfy a casing convention.

/// Splits an identifier into lowercase words.
///
/// Word boundaries are `_`, `-`, `.`, whitespace, lower-to-upper transitions
/// (`showActive`), acronym ends (`HTTPServer` → `http`, `server`) and
/// letter/digit transitions are kept inside a word (`v2`).
///
/// ```
/// use convention_lint_core::utils::case::split_words;
/// assert_eq!(split_words("HTTPServerError"), vec!["http", "server", "error"]);
/// assert_eq!(split_words("open_source-page"), vec!["open", "source", "page"]);
/// ```
#[must_use]
pub fn split_words(ident: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = ident.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `snake_case`: lowercase letters and digits separated by single underscores,
/// starting with a letter.
#[must_use]
pub fn is_snake_case(ident: &str) -> bool {
    is_delimited_lower(ident, '_')
}

/// `kebab-case`: lowercase letters and digits separated by single hyphens,
/// starting with a letter.
#[must_use]
pub fn is_kebab_case(ident: &str) -> bool {
    is_delimited_lower(ident, '-')
}

fn is_delimited_lower(ident: &str, delimiter: char) -> bool {
    ident.starts_with(|c: char| c.is_ascii_lowercase())
        && !ident.ends_with(delimiter)
        && !ident.contains(&format!("{delimiter}{delimiter}"))
        && ident
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == delimiter)
}

/// `camelCase`: starts with a lowercase letter, ASCII alphanumerics only,
/// no run of two or more uppercase letters.
#[must_use]
pub fn is_camel_case(ident: &str) -> bool {
    ident.starts_with(|c: char| c.is_ascii_lowercase()) && is_capitalized_words(ident)
}

/// `PascalCase`: starts with an uppercase letter, ASCII alphanumerics only,
/// no run of two or more uppercase letters.
#[must_use]
pub fn is_pascal_case(ident: &str) -> bool {
    ident.starts_with(|c: char| c.is_ascii_uppercase()) && is_capitalized_words(ident)
}

fn is_capitalized_words(ident: &str) -> bool {
    if !ident.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    let bytes = ident.as_bytes();
    !bytes
        .windows(2)
        .any(|w| w[0].is_ascii_uppercase() && w[1].is_ascii_uppercase())
}

/// Converts an identifier to `snake_case`.
#[must_use]
pub fn to_snake_case(ident: &str) -> String {
    split_words(ident).join("_")
}

/// Converts an identifier to `kebab-case`.
#[must_use]
pub fn to_kebab_case(ident: &str) -> String {
    split_words(ident).join("-")
}

/// Converts an identifier to `camelCase`.
#[must_use]
pub fn to_camel_case(ident: &str) -> String {
    let mut words = split_words(ident).into_iter();
    let mut out = words.next().unwrap_or_default();
    for word in words {
        out.push_str(&capitalize(&word));
    }
    out
}

/// Converts an identifier to `PascalCase`.
#[must_use]
pub fn to_pascal_case(ident: &str) -> String {
    split_words(ident).iter().map(|w| capitalize(w)).collect()
}

/// Uppercases the first character of a word.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_mixed_styles() {
        assert_eq!(split_words("showActive"), vec!["show", "active"]);
        assert_eq!(split_words("ArticlesController"), vec!["articles", "controller"]);
        assert_eq!(split_words("user_profile"), vec!["user", "profile"]);
        assert_eq!(split_words("parseXMLFile"), vec!["parse", "xml", "file"]);
        assert_eq!(split_words("oauth2Client"), vec!["oauth2", "client"]);
        assert!(split_words("__").is_empty());
    }

    #[test]
    fn snake_case() {
        assert!(is_snake_case("created_at"));
        assert!(is_snake_case("address2"));
        assert!(!is_snake_case("createdAt"));
        assert!(!is_snake_case("created__at"));
        assert!(!is_snake_case("_created"));
        assert!(!is_snake_case("created_"));
        assert!(!is_snake_case(""));
    }

    #[test]
    fn kebab_case() {
        assert!(is_kebab_case("open-source"));
        assert!(is_kebab_case("articles"));
        assert!(!is_kebab_case("open_source"));
        assert!(!is_kebab_case("OpenSource"));
        assert!(!is_kebab_case("open--source"));
    }

    #[test]
    fn camel_and_pascal_case() {
        assert!(is_camel_case("showActive"));
        assert!(is_camel_case("index"));
        assert!(!is_camel_case("ShowActive"));
        assert!(!is_camel_case("show_active"));
        assert!(!is_camel_case("parseXML"));

        assert!(is_pascal_case("ArticleController"));
        assert!(!is_pascal_case("articleController"));
        assert!(!is_pascal_case("Article_Controller"));
        assert!(!is_pascal_case("HTTPClient"));
    }

    #[test]
    fn conversions() {
        assert_eq!(to_snake_case("ArticleId"), "article_id");
        assert_eq!(to_kebab_case("open_source"), "open-source");
        assert_eq!(to_camel_case("show_filtered"), "showFiltered");
        assert_eq!(to_camel_case("open-source"), "openSource");
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("HTTPClient"), "HttpClient");
    }
}
