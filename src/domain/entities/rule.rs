//! Domain entity representing a configuration snippet.

use chrono::{DateTime, Utc};

/// A stored web-server configuration snippet.
///
/// Ids are assigned by the store, unique and monotonically increasing, so
/// ascending id order is also insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Opaque snippet body, stored verbatim.
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rule {
    /// Creates a new Rule instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let rule = Rule::new(
    ///     1,
    ///     "Force HTTPS".to_string(),
    ///     None,
    ///     "RewriteEngine On".to_string(),
    ///     Utc::now(),
    ///     Utc::now(),
    /// );
    /// ```
    pub fn new(
        id: i64,
        title: String,
        description: Option<String>,
        code: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            code,
            created_at,
            updated_at,
        }
    }

    /// Case-insensitive substring match on title and description.
    ///
    /// An empty (or whitespace-only) query matches every rule.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// Input data for creating a new rule.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRule {
    pub title: String,
    pub description: Option<String>,
    pub code: String,
}

/// Full replacement of a rule's mutable fields.
///
/// Unlike a patch, `description: None` clears the stored description.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleUpdate {
    pub title: String,
    pub description: Option<String>,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(title: &str, description: Option<&str>) -> Rule {
        let now = Utc::now();
        Rule::new(
            1,
            title.to_string(),
            description.map(str::to_string),
            "RewriteEngine On".to_string(),
            now,
            now,
        )
    }

    #[test]
    fn test_rule_creation() {
        let r = rule("Force HTTPS", Some("Redirect all traffic"));

        assert_eq!(r.id, 1);
        assert_eq!(r.title, "Force HTTPS");
        assert_eq!(r.description.as_deref(), Some("Redirect all traffic"));
        assert_eq!(r.code, "RewriteEngine On");
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        let r = rule("Force HTTPS", None);

        assert!(r.matches("https"));
        assert!(r.matches("FORCE"));
        assert!(!r.matches("gzip"));
    }

    #[test]
    fn test_matches_description() {
        let r = rule("Canonical host", Some("Strip the WWW prefix"));

        assert!(r.matches("www"));
        assert!(!r.matches("cache"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let r = rule("Anything", None);

        assert!(r.matches(""));
        assert!(r.matches("   "));
    }
}
