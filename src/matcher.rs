//! Route patterns and segment matching
//!
//! A pattern is split on `/` into segments:
//!
//! - `posts` - literal, compared exactly (case-sensitive)
//! - `:id` - parameter, matches any single segment and binds it
//! - `*` - wildcard, only allowed last; matches any remaining suffix
//!
//! Empty segments are ignored on both sides, so `/about/` and `/about` are the
//! same path and `/` has no segments at all.

use crate::error::RouteError;
use crate::params::RouteParams;
use std::collections::HashSet;

/// Split a path into its non-empty `/`-delimited segments
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// A single segment of a [`RoutePattern`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that must equal the path segment
    Literal(String),
    /// Capturing segment, binds the path segment to this name
    Param(String),
    /// Matches the rest of the path
    Wildcard,
}

impl Segment {
    fn parse(pattern: &str, raw: &str) -> Result<Self, RouteError> {
        if raw == "*" {
            return Ok(Segment::Wildcard);
        }

        if let Some(name) = raw.strip_prefix(':') {
            if name.is_empty() {
                return Err(RouteError::invalid(
                    pattern,
                    "parameter name cannot be empty",
                ));
            }
            if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(RouteError::invalid(
                    pattern,
                    format!(
                        "parameter '{}' must contain only alphanumeric characters and underscores",
                        name
                    ),
                ));
            }
            return Ok(Segment::Param(name.to_string()));
        }

        if raw.contains('*') {
            return Err(RouteError::invalid(
                pattern,
                format!("'*' must be a whole segment, found '{}'", raw),
            ));
        }

        Ok(Segment::Literal(raw.to_string()))
    }
}

/// Successful match of a pattern against a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Values bound by `:name` segments
    pub params: RouteParams,
    /// Suffix consumed by a trailing wildcard, without a leading `/`
    pub remainder: Option<String>,
}

/// Parsed, validated route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern such as `/posts/:id` or `*`
    ///
    /// # Errors
    ///
    /// Empty or malformed parameter names, duplicate parameter names, and a
    /// wildcard outside the last position are rejected.
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let raw_segments = split_path(pattern);
        let mut segments = Vec::with_capacity(raw_segments.len());
        let mut seen = HashSet::new();

        for (i, raw) in raw_segments.iter().enumerate() {
            let segment = Segment::parse(pattern, raw)?;
            match &segment {
                Segment::Wildcard if i + 1 != raw_segments.len() => {
                    return Err(RouteError::WildcardNotLast {
                        pattern: pattern.to_string(),
                    });
                }
                Segment::Param(name) if !seen.insert(name.clone()) => {
                    return Err(RouteError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.clone(),
                    });
                }
                _ => {}
            }
            segments.push(segment);
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as it was registered
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameter segments, in order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard))
    }

    /// `*` on its own: matches every path
    pub fn is_catch_all(&self) -> bool {
        self.segments == [Segment::Wildcard]
    }

    /// Score used only for diagnostics: literals count most, wildcards least
    pub fn specificity(&self) -> u32 {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Literal(_) => 3,
                Segment::Param(_) => 2,
                Segment::Wildcard => 0,
            })
            .sum()
    }

    /// Match against a route-relevant path (no query or fragment)
    pub fn matches(&self, path: &str) -> Option<PatternMatch> {
        let path_segments = split_path(path);
        let fixed = self.fixed_len();

        if self.has_wildcard() {
            if path_segments.len() < fixed {
                return None;
            }
        } else if path_segments.len() != fixed {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, value) in self.segments[..fixed].iter().zip(&path_segments) {
            match segment {
                Segment::Literal(expected) if expected != value => return None,
                Segment::Param(name) => params.insert(name.as_str(), *value),
                // The wildcard, if any, lies beyond `fixed`.
                Segment::Literal(_) | Segment::Wildcard => {}
            }
        }

        let remainder = self
            .has_wildcard()
            .then(|| path_segments[fixed..].join("/"));

        Some(PatternMatch { params, remainder })
    }

    /// Whether every path matched by `other` is already matched by `self`
    ///
    /// In a first-match table this means `other` is unreachable when it is
    /// registered after `self`.
    pub fn shadows(&self, other: &RoutePattern) -> bool {
        let fixed = self.fixed_len();
        let other_fixed = other.fixed_len();

        let lengths_ok = if self.has_wildcard() {
            other_fixed >= fixed
        } else {
            !other.has_wildcard() && other_fixed == fixed
        };
        if !lengths_ok {
            return false;
        }

        self.segments[..fixed]
            .iter()
            .zip(&other.segments[..fixed])
            .all(|(mine, theirs)| match (mine, theirs) {
                (Segment::Param(_), _) => true,
                (Segment::Literal(a), Segment::Literal(b)) => a == b,
                _ => false,
            })
    }

    // Segments that consume exactly one path segment.
    fn fixed_len(&self) -> usize {
        if self.has_wildcard() {
            self.segments.len() - 1
        } else {
            self.segments.len()
        }
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> RoutePattern {
        RoutePattern::parse(s).unwrap()
    }

    #[test]
    fn test_segment_parsing() {
        assert_eq!(
            pattern("/posts/:id/*").segments(),
            &[
                Segment::Literal("posts".to_string()),
                Segment::Param("id".to_string()),
                Segment::Wildcard,
            ]
        );
        assert!(pattern("/").segments().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            RoutePattern::parse("/users/:"),
            Err(RouteError::InvalidPattern { .. })
        ));
        assert!(matches!(
            RoutePattern::parse("/users/:user-id"),
            Err(RouteError::InvalidPattern { .. })
        ));
        assert!(matches!(
            RoutePattern::parse("/files/*/raw"),
            Err(RouteError::WildcardNotLast { .. })
        ));
        assert!(matches!(
            RoutePattern::parse("/files/x*"),
            Err(RouteError::InvalidPattern { .. })
        ));
        assert_eq!(
            RoutePattern::parse("/a/:id/b/:id"),
            Err(RouteError::DuplicateParam {
                pattern: "/a/:id/b/:id".to_string(),
                name: "id".to_string(),
            })
        );
    }

    #[test]
    fn test_literal_matching() {
        let about = pattern("/about");

        assert!(about.matches("/about").is_some());
        assert!(about.matches("/about/").is_some());
        assert!(about.matches("/About").is_none());
        assert!(about.matches("/about/team").is_none());
        assert!(about.matches("/").is_none());
    }

    #[test]
    fn test_root_matches_only_root() {
        let root = pattern("/");

        assert!(root.matches("/").is_some());
        assert!(root.matches("").is_some());
        assert!(root.matches("/about").is_none());
    }

    #[test]
    fn test_param_binding() {
        let detail = pattern("/posts/:id");

        let result = detail.matches("/posts/42").unwrap();
        assert_eq!(result.params.get("id"), Some("42"));
        assert_eq!(result.remainder, None);

        assert!(detail.matches("/posts").is_none());
        assert!(detail.matches("/posts/42/comments").is_none());
    }

    #[test]
    fn test_multiple_params() {
        let result = pattern("/users/:user_id/posts/:post_id")
            .matches("/users/7/posts/99")
            .unwrap();

        assert_eq!(result.params.len(), 2);
        assert_eq!(result.params.get("user_id"), Some("7"));
        assert_eq!(result.params.get("post_id"), Some("99"));
    }

    #[test]
    fn test_substituted_values_round_trip() {
        let patterns = ["/posts/:id", "/users/:user/repos/:repo", "/:lang/docs/:page"];
        let values = ["42", "Hello_World", "v1.2", "%20"];

        for source in patterns {
            let p = pattern(source);
            for value in values {
                let path: String = p
                    .segments()
                    .iter()
                    .map(|s| match s {
                        Segment::Literal(text) => format!("/{}", text),
                        Segment::Param(_) => format!("/{}", value),
                        Segment::Wildcard => unreachable!(),
                    })
                    .collect();

                let result = p.matches(&path).unwrap();
                for name in p.param_names() {
                    assert_eq!(result.params.get(name), Some(value), "{} on {}", name, path);
                }
            }
        }
    }

    #[test]
    fn test_catch_all() {
        let any = pattern("*");
        assert!(any.is_catch_all());

        for path in ["/", "/unknown", "/unknown/x/y"] {
            let result = any.matches(path).unwrap();
            assert!(result.params.is_empty());
        }
        assert_eq!(any.matches("/unknown/x").unwrap().remainder.as_deref(), Some("unknown/x"));
    }

    #[test]
    fn test_prefix_wildcard() {
        let files = pattern("/files/*");
        assert!(!files.is_catch_all());

        assert_eq!(files.matches("/files").unwrap().remainder.as_deref(), Some(""));
        assert_eq!(
            files.matches("/files/docs/report.pdf").unwrap().remainder.as_deref(),
            Some("docs/report.pdf")
        );
        assert!(files.matches("/other/path").is_none());
    }

    #[test]
    fn test_specificity() {
        assert_eq!(pattern("/").specificity(), 0);
        assert!(pattern("/posts/new").specificity() > pattern("/posts/:id").specificity());
        assert!(pattern("/posts/:id").specificity() > pattern("/posts/*").specificity());
    }

    #[test]
    fn test_shadows() {
        assert!(pattern("/posts/:id").shadows(&pattern("/posts/new")));
        assert!(!pattern("/posts/new").shadows(&pattern("/posts/:id")));
        assert!(pattern("*").shadows(&pattern("/about")));
        assert!(pattern("/files/*").shadows(&pattern("/files/:name")));
        assert!(pattern("/files/*").shadows(&pattern("/files/raw/*")));
        assert!(!pattern("/files/:name").shadows(&pattern("/files/*")));
        assert!(!pattern("/about").shadows(&pattern("/contact")));
    }
}
