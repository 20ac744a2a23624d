//! Naming utilities shared by rule implementations.

pub mod case;
pub mod inflect;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use case::{
    is_camel_case, is_kebab_case, is_pascal_case, is_snake_case, split_words, to_camel_case,
    to_kebab_case, to_pascal_case, to_snake_case,
};
#[doc(inline)]
pub use inflect::{pluralize, singularize};

/// Singularizes the last word of an identifier and returns it in `PascalCase`.
///
/// ```
/// use convention_lint_core::utils::singular_pascal;
/// assert_eq!(singular_pascal("UserProfiles"), "UserProfile");
/// assert_eq!(singular_pascal("blog_posts"), "BlogPost");
/// ```
#[must_use]
pub fn singular_pascal(ident: &str) -> String {
    let mut words = split_words(ident);
    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }
    words.iter().map(|w| case::capitalize(w)).collect()
}

/// Singularizes the last word of an identifier and returns it in `snake_case`.
#[must_use]
pub fn singular_snake(ident: &str) -> String {
    let mut words = split_words(ident);
    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }
    words.join("_")
}

/// Pluralizes the last word of an identifier and returns it in `snake_case`.
///
/// ```
/// use convention_lint_core::utils::plural_snake;
/// assert_eq!(plural_snake("BlogPost"), "blog_posts");
/// ```
#[must_use]
pub fn plural_snake(ident: &str) -> String {
    let mut words = split_words(ident);
    if let Some(last) = words.last_mut() {
        *last = pluralize(&singularize(last));
    }
    words.join("_")
}
