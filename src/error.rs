//! Route configuration errors
//!
//! An unmatched path is never an error: the route table always ends with a
//! catch-all fallback. The errors here are raised while the table is being
//! built, or when a named route cannot be resolved.

use std::fmt;

/// Errors raised while configuring routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A pattern could not be parsed
    InvalidPattern { pattern: String, reason: String },

    /// A parameter name appears twice in one pattern
    DuplicateParam { pattern: String, name: String },

    /// `*` used anywhere but the last segment
    WildcardNotLast { pattern: String },

    /// The table has no catch-all route
    MissingFallback,

    /// A route was registered after the catch-all and could never match
    RouteAfterFallback { pattern: String },

    /// No route registered under this name
    UnknownRouteName { name: String },

    /// A named route needs a parameter that was not supplied
    MissingParam { name: String, param: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid route pattern '{}': {}", pattern, reason)
            }
            RouteError::DuplicateParam { pattern, name } => {
                write!(f, "Duplicate parameter ':{}' in '{}'", name, pattern)
            }
            RouteError::WildcardNotLast { pattern } => {
                write!(f, "Wildcard must be the last segment in '{}'", pattern)
            }
            RouteError::MissingFallback => {
                write!(f, "Route table has no catch-all '*' route")
            }
            RouteError::RouteAfterFallback { pattern } => {
                write!(f, "Route '{}' registered after the catch-all route", pattern)
            }
            RouteError::UnknownRouteName { name } => {
                write!(f, "No route named '{}'", name)
            }
            RouteError::MissingParam { name, param } => {
                write!(f, "Route '{}' requires parameter ':{}'", name, param)
            }
        }
    }
}

impl std::error::Error for RouteError {}

impl RouteError {
    /// Pattern the error refers to, if any
    pub fn pattern(&self) -> Option<&str> {
        match self {
            RouteError::InvalidPattern { pattern, .. }
            | RouteError::DuplicateParam { pattern, .. }
            | RouteError::WildcardNotLast { pattern }
            | RouteError::RouteAfterFallback { pattern } => Some(pattern),
            _ => None,
        }
    }

    pub(crate) fn invalid(pattern: &str, reason: impl Into<String>) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
