//! Route rules: URL shape, route names, and route parameters.
//!
//! # Good Patterns
//!
//! ```text
//! Route::get('articles/{article}', ...)->name('articles.show');
//! Route::get('open-source', ...)->name('openSource');
//! Route::get('users/{userId}/posts', ...)->name('users.showActive');
//! ```
//!
//! # Bad Patterns
//!
//! ```text
//! Route::get('/open_source', ...)->name('open-source');
//! Route::get('users/{user_id}', ...);
//! ```

use convention_lint_core::utils::{is_camel_case, is_kebab_case, to_camel_case, to_kebab_case};
use convention_lint_core::{
    Fact, FactKind, Finding, FixTarget, Rule, RouteDecl, RuleError, Severity, Verdict,
};

fn route_of(fact: &Fact) -> Result<&RouteDecl, RuleError> {
    fact.as_route()
        .ok_or_else(|| RuleError::unexpected(FactKind::Route, fact))
}

/// Route parameter placeholders (`{article}`, `{slug?}`) are not URL text.
fn is_placeholder(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

fn is_url_segment(segment: &str) -> bool {
    segment.is_empty()
        || is_placeholder(segment)
        || is_kebab_case(segment)
        || segment.chars().all(|c| c.is_ascii_digit())
}

/// Parameter names declared by the path placeholders, optional marker removed.
fn placeholder_params(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
        .filter(|segment| is_placeholder(segment))
        .map(|segment| segment[1..segment.len() - 1].trim_end_matches('?'))
}

fn normalize_segment(segment: &str) -> String {
    if is_placeholder(segment) {
        let inner = &segment[1..segment.len() - 1];
        let (name, optional) = match inner.strip_suffix('?') {
            Some(name) => (name, "?"),
            None => (inner, ""),
        };
        if is_camel_case(name) {
            segment.to_string()
        } else {
            format!("{{{}{optional}}}", to_camel_case(name))
        }
    } else if is_url_segment(segment) {
        segment.to_string()
    } else {
        to_kebab_case(segment)
    }
}

/// The path with every route convention applied: no leading slash unless
/// root, kebab-case static segments, camelCase parameters.
///
/// All path rules suggest this same text, so whichever fix wins the path
/// satisfies the others.
fn normalized_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    trimmed
        .split('/')
        .map(normalize_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Static URL segments are `kebab-case`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteUrlKebabCase;

impl RouteUrlKebabCase {
    /// Rule code.
    pub const CODE: &'static str = "CL020";
    /// Rule id.
    pub const NAME: &'static str = "route-url-kebab-case";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RouteUrlKebabCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Route URL segments are kebab-case"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Route
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let path = route_of(fact)?.path();
        if path.split('/').all(is_url_segment) {
            return Ok(Verdict::Pass);
        }

        let expected = normalized_path(path);
        Ok(Verdict::Violation(
            Finding::new(format!(
                "Route URLs must be kebab-case without underscores: expected `{expected}`"
            ))
            .with_fix(expected)
            .targeting(FixTarget::Path),
        ))
    }
}

/// Route URLs carry no leading slash unless the route is the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteLeadingSlash;

impl RouteLeadingSlash {
    /// Rule code.
    pub const CODE: &'static str = "CL021";
    /// Rule id.
    pub const NAME: &'static str = "route-leading-slash";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RouteLeadingSlash {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Route URLs have no leading slash unless the path is the root"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Route
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let path = route_of(fact)?.path();
        if path == "/" || !path.starts_with('/') {
            return Ok(Verdict::Pass);
        }

        let expected = normalized_path(path);
        Ok(Verdict::Violation(
            Finding::new(format!(
                "Route URLs must not start with a slash unless root: expected `{expected}`"
            ))
            .with_fix(expected)
            .targeting(FixTarget::Path),
        ))
    }
}

/// Route names are `camelCase`, with `.` separating hierarchy levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteNameCamelCase;

impl RouteNameCamelCase {
    /// Rule code.
    pub const CODE: &'static str = "CL022";
    /// Rule id.
    pub const NAME: &'static str = "route-name-camel-case";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RouteNameCamelCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Route names are camelCase with dot-separated hierarchy (users.showActive)"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Route
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let Some(name) = route_of(fact)?.name() else {
            return Ok(Verdict::Pass);
        };
        if name.split('.').all(is_camel_case) {
            return Ok(Verdict::Pass);
        }

        let expected = name
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(to_camel_case)
            .collect::<Vec<_>>()
            .join(".");
        Ok(Verdict::Violation(
            Finding::new(format!(
                "Route names must be camelCase with dot hierarchy: expected `{expected}`"
            ))
            .with_fix(expected),
        ))
    }
}

/// Route parameters are `camelCase`.
///
/// Checks the declared parameter names, or the path placeholders when the
/// front-end did not declare any.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteParamCamelCase;

impl RouteParamCamelCase {
    /// Rule code.
    pub const CODE: &'static str = "CL023";
    /// Rule id.
    pub const NAME: &'static str = "route-param-camel-case";

    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RouteParamCamelCase {
    fn id(&self) -> &'static str {
        Self::NAME
    }

    fn code(&self) -> &'static str {
        Self::CODE
    }

    fn description(&self) -> &'static str {
        "Route parameters are camelCase"
    }

    fn applies_to(&self) -> FactKind {
        FactKind::Route
    }

    fn check(&self, fact: &Fact) -> Result<Verdict, RuleError> {
        let route = route_of(fact)?;
        let path = route.path();
        let params: Vec<&str> = if route.param_names().is_empty() {
            placeholder_params(path).collect()
        } else {
            route
                .param_names()
                .iter()
                .map(|p| p.trim_end_matches('?'))
                .collect()
        };
        let offending: Vec<String> = params
            .into_iter()
            .filter(|p| !is_camel_case(p))
            .map(|p| format!("`{p}` → `{}`", to_camel_case(p)))
            .collect();

        if offending.is_empty() {
            return Ok(Verdict::Pass);
        }
        let finding = Finding::new(format!(
            "Route parameters must be camelCase: {}",
            offending.join(", ")
        ));
        // Declared names that do not appear in the path have nothing to rewrite.
        if placeholder_params(path).all(is_camel_case) {
            return Ok(Verdict::Violation(finding));
        }
        Ok(Verdict::Violation(
            finding
                .with_fix(normalized_path(path))
                .targeting(FixTarget::Path),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convention_lint_core::Location;

    fn route(path: &str, name: Option<&str>, params: &[&str]) -> Fact {
        Fact::new(
            Location::new("routes/web.php", 4, 1),
            RouteDecl::new(
                path,
                "GET",
                name.map(Into::into),
                params.iter().map(ToString::to_string).collect(),
            )
            .unwrap(),
        )
    }

    fn fix(verdict: Verdict) -> Option<String> {
        match verdict {
            Verdict::Violation(finding) => finding.fix,
            Verdict::Pass => panic!("expected a violation"),
        }
    }

    #[test]
    fn url_segments_must_be_kebab_case() {
        let rule = RouteUrlKebabCase::new();
        for path in ["/", "articles/{article}", "open-source", "api/v2/users/{user?}", "archive/2023"] {
            assert!(rule.check(&route(path, None, &[])).unwrap().is_pass(), "{path}");
        }

        let verdict = rule.check(&route("/open_source", None, &[])).unwrap();
        assert_eq!(fix(verdict).as_deref(), Some("open-source"));

        let verdict = rule.check(&route("userProfiles/{id}", None, &[])).unwrap();
        assert_eq!(fix(verdict).as_deref(), Some("user-profiles/{id}"));
    }

    #[test]
    fn leading_slash_only_for_root() {
        let rule = RouteLeadingSlash::new();
        assert!(rule.check(&route("/", None, &[])).unwrap().is_pass());
        assert!(rule.check(&route("articles", None, &[])).unwrap().is_pass());
        let verdict = rule.check(&route("/open_source", None, &[])).unwrap();
        assert_eq!(fix(verdict).as_deref(), Some("open-source"));
        let verdict = rule.check(&route("//", None, &[])).unwrap();
        assert_eq!(fix(verdict).as_deref(), Some("/"));
    }

    #[test]
    fn path_fixes_agree_across_rules() {
        let fact = route("/user_posts/{post_id?}", None, &[]);
        let fixes: Vec<Option<String>> = [
            RouteUrlKebabCase::new().check(&fact).unwrap(),
            RouteLeadingSlash::new().check(&fact).unwrap(),
            RouteParamCamelCase::new().check(&fact).unwrap(),
        ]
        .into_iter()
        .map(fix)
        .collect();
        let expected = Some("user-posts/{postId?}".to_string());
        assert_eq!(fixes, vec![expected.clone(), expected.clone(), expected]);
    }

    #[test]
    fn route_names_are_dotted_camel_case() {
        let rule = RouteNameCamelCase::new();
        assert!(rule.check(&route("users", Some("users.showActive"), &[])).unwrap().is_pass());
        assert!(rule.check(&route("users", None, &[])).unwrap().is_pass());

        let verdict = rule.check(&route("open-source", Some("open-source"), &[])).unwrap();
        assert_eq!(fix(verdict).as_deref(), Some("openSource"));

        let verdict = rule.check(&route("users", Some("users.show_active"), &[])).unwrap();
        assert_eq!(fix(verdict).as_deref(), Some("users.showActive"));
    }

    #[test]
    fn route_params_are_camel_case() {
        let rule = RouteParamCamelCase::new();
        assert!(rule
            .check(&route("users/{userId}", None, &["userId", "slug?"]))
            .unwrap()
            .is_pass());

        let verdict = rule
            .check(&route("users/{user_id}", None, &["user_id", "post"]))
            .unwrap();
        let Verdict::Violation(finding) = verdict else {
            panic!("expected a violation");
        };
        assert_eq!(finding.message, "Route parameters must be camelCase: `user_id` → `userId`");
        assert_eq!(finding.fix.as_deref(), Some("users/{userId}"));
        assert_eq!(finding.target, FixTarget::Path);

        // Declared only, nothing in the path to rewrite.
        let verdict = rule.check(&route("users", None, &["user_id"])).unwrap();
        assert!(fix(verdict).is_none());
    }

    #[test]
    fn route_params_fall_back_to_path_placeholders() {
        let rule = RouteParamCamelCase::new();
        assert!(rule
            .check(&route("posts/{postSlug?}", None, &[]))
            .unwrap()
            .is_pass());

        let verdict = rule.check(&route("posts/{post_slug?}", None, &[])).unwrap();
        let Verdict::Violation(finding) = verdict else {
            panic!("expected a violation");
        };
        assert_eq!(finding.message, "Route parameters must be camelCase: `post_slug` → `postSlug`");
        assert_eq!(finding.fix.as_deref(), Some("posts/{postSlug?}"));
    }
}
