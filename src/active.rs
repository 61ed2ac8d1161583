//! Active-link determination

use crate::location::route_path;
use crate::matcher::split_path;

/// How a link's target is compared with the current path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMatch {
    /// Active when the target is a segment prefix of the current path
    #[default]
    Prefix,
    /// Active only when both paths are equal
    Exact,
}

/// Whether a link to `target` is active while the router is at `current`
///
/// Paths are compared segment by segment, after dropping query strings,
/// fragments and redundant slashes. In prefix mode `/` is active everywhere
/// and `/about` is active at `/about/team` but not at `/aboutus`.
///
/// ```
/// use gpui_waypoint::{is_link_active, LinkMatch};
///
/// assert!(is_link_active("/about", "/about/team", LinkMatch::Prefix));
/// assert!(!is_link_active("/about", "/about/team", LinkMatch::Exact));
/// assert!(!is_link_active("/about", "/aboutus", LinkMatch::Prefix));
/// ```
pub fn is_link_active(target: &str, current: &str, mode: LinkMatch) -> bool {
    let target = split_path(route_path(target));
    let current = split_path(route_path(current));

    match mode {
        LinkMatch::Exact => target == current,
        LinkMatch::Prefix => current.starts_with(&target),
    }
}
