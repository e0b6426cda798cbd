//! Query parameter types for list endpoints.

use serde::Deserialize;

/// Query parameters for `GET /projects` (`?category=&featured=`).
///
/// A non-empty `category` takes precedence over `featured`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub category: Option<String>,
    pub featured: Option<String>,
}

impl ProjectListParams {
    /// The requested category, ignoring an empty value.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// `true` only for `featured=true` (case-insensitive).
    pub fn featured_only(&self) -> bool {
        self.featured
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("true"))
    }
}

/// Query parameters for `GET /contact/messages` (`?read=true|false`).
#[derive(Debug, Default, Deserialize)]
pub struct MessageListParams {
    pub read: Option<String>,
}

impl MessageListParams {
    /// Requested read state. Any non-empty value other than `true`
    /// (case-insensitive) selects unread messages.
    pub fn read_filter(&self) -> Option<bool> {
        self.read
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(|r| r.eq_ignore_ascii_case("true"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_category_is_ignored() {
        let params = ProjectListParams {
            category: Some(String::new()),
            featured: None,
        };
        assert_eq!(params.category(), None);
    }

    #[test]
    fn featured_requires_true() {
        let on = ProjectListParams {
            category: None,
            featured: Some("TRUE".into()),
        };
        let off = ProjectListParams {
            category: None,
            featured: Some("1".into()),
        };
        assert!(on.featured_only());
        assert!(!off.featured_only());
    }

    #[test]
    fn read_filter_maps_values() {
        let read = |v: Option<&str>| MessageListParams {
            read: v.map(str::to_string),
        };
        assert_eq!(read(None).read_filter(), None);
        assert_eq!(read(Some("")).read_filter(), None);
        assert_eq!(read(Some("true")).read_filter(), Some(true));
        assert_eq!(read(Some("false")).read_filter(), Some(false));
        assert_eq!(read(Some("no")).read_filter(), Some(false));
    }
}
