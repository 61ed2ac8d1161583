//! Route definition and named routes

use crate::context::RouteContext;
use crate::error::RouteError;
use crate::matcher::{PatternMatch, RoutePattern, Segment};
use crate::params::RouteParams;
use gpui::{AnyElement, App, IntoElement};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// NamedRouteRegistry
// ============================================================================

/// Registry of route names to patterns
#[derive(Clone, Debug, Default)]
pub struct NamedRouteRegistry {
    routes: HashMap<String, RoutePattern>,
}

impl NamedRouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named pattern; a later registration under the same name wins
    pub fn register(&mut self, name: impl Into<String>, pattern: RoutePattern) {
        self.routes.insert(name.into(), pattern);
    }

    pub fn get(&self, name: &str) -> Option<&RoutePattern> {
        self.routes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Build a path for a named route
    ///
    /// Parameter segments are replaced by the matching value from `params`;
    /// a trailing wildcard is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use gpui_waypoint::{NamedRouteRegistry, RoutePattern, RouteParams};
    ///
    /// let mut registry = NamedRouteRegistry::new();
    /// registry.register("post.detail", RoutePattern::parse("/posts/:id").unwrap());
    ///
    /// let params: RouteParams = [("id", "2")].into_iter().collect();
    /// assert_eq!(registry.url_for("post.detail", &params).unwrap(), "/posts/2");
    /// ```
    pub fn url_for(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        let pattern = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownRouteName {
                name: name.to_string(),
            })?;

        let mut url = String::new();
        for segment in pattern.segments() {
            match segment {
                Segment::Literal(text) => {
                    url.push('/');
                    url.push_str(text);
                }
                Segment::Param(param) => {
                    let value = params.get(param).ok_or_else(|| RouteError::MissingParam {
                        name: name.to_string(),
                        param: param.clone(),
                    })?;
                    url.push('/');
                    url.push_str(value);
                }
                Segment::Wildcard => {}
            }
        }

        if url.is_empty() {
            url.push('/');
        }
        Ok(url)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// ============================================================================
// Route
// ============================================================================

/// View factory for a route
///
/// The handler receives the app and an explicit [`RouteContext`] carrying the
/// bound parameters and the navigation payload. Nothing is looked up
/// implicitly.
pub type RouteHandler = Arc<dyn Fn(&mut App, &RouteContext) -> AnyElement + Send + Sync>;

/// A pattern bound to a handler
pub struct Route {
    pattern: RoutePattern,
    handler: RouteHandler,
    name: Option<String>,
    meta: HashMap<String, String>,
}

impl Route {
    /// Create a route
    ///
    /// # Panics
    ///
    /// Panics if the pattern is invalid. Use [`Route::try_new`] to handle the
    /// error instead.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gpui::{div, ParentElement};
    /// use gpui_waypoint::Route;
    ///
    /// Route::new("/posts/:id", |_cx, route| {
    ///     let id = route.param("id").unwrap_or("?");
    ///     div().child(format!("Post {}", id))
    /// });
    /// ```
    pub fn new<F, E>(pattern: &str, handler: F) -> Self
    where
        E: IntoElement,
        F: Fn(&mut App, &RouteContext) -> E + Send + Sync + 'static,
    {
        match Self::try_new(pattern, handler) {
            Ok(route) => route,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create a route, returning an error for an invalid pattern
    pub fn try_new<F, E>(pattern: &str, handler: F) -> Result<Self, RouteError>
    where
        E: IntoElement,
        F: Fn(&mut App, &RouteContext) -> E + Send + Sync + 'static,
    {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            handler: Arc::new(move |cx: &mut App, route: &RouteContext| {
                handler(cx, route).into_any_element()
            }),
            name: None,
            meta: HashMap::new(),
        })
    }

    /// Name the route so it can be navigated to with `push_named`
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach metadata (titles, analytics tags, ...)
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn route_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    pub fn handler(&self) -> &RouteHandler {
        &self.handler
    }

    pub fn matches(&self, path: &str) -> Option<PatternMatch> {
        self.pattern.matches(path)
    }

    /// Render this route's view
    pub fn build(&self, cx: &mut App, route: &RouteContext) -> AnyElement {
        (self.handler)(cx, route)
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.as_str())
            .field("name", &self.name)
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::div;

    fn pattern(s: &str) -> RoutePattern {
        RoutePattern::parse(s).unwrap()
    }

    fn blank(_cx: &mut App, _route: &RouteContext) -> gpui::Div {
        div()
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = NamedRouteRegistry::new();
        registry.register("home", pattern("/"));
        registry.register("post.detail", pattern("/posts/:id"));

        assert_eq!(registry.get("post.detail").map(|p| p.as_str()), Some("/posts/:id"));
        assert!(registry.contains("home"));
        assert!(!registry.contains("unknown"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_url_for_root() {
        let mut registry = NamedRouteRegistry::new();
        registry.register("home", pattern("/"));

        assert_eq!(registry.url_for("home", &RouteParams::new()).unwrap(), "/");
    }

    #[test]
    fn test_url_for_multiple_params() {
        let mut registry = NamedRouteRegistry::new();
        registry.register("comment", pattern("/posts/:post_id/comments/:id"));

        let params: RouteParams = [("post_id", "42"), ("id", "99")].into_iter().collect();
        assert_eq!(
            registry.url_for("comment", &params).unwrap(),
            "/posts/42/comments/99"
        );
    }

    #[test]
    fn test_url_for_does_not_touch_similar_names() {
        let mut registry = NamedRouteRegistry::new();
        registry.register("user", pattern("/users/:id/:id_type"));

        let params: RouteParams = [("id", "7"), ("id_type", "admin")].into_iter().collect();
        assert_eq!(registry.url_for("user", &params).unwrap(), "/users/7/admin");
    }

    #[test]
    fn test_url_for_errors() {
        let mut registry = NamedRouteRegistry::new();
        registry.register("post.detail", pattern("/posts/:id"));

        assert_eq!(
            registry.url_for("post.detail", &RouteParams::new()),
            Err(RouteError::MissingParam {
                name: "post.detail".to_string(),
                param: "id".to_string(),
            })
        );
        assert!(matches!(
            registry.url_for("nope", &RouteParams::new()),
            Err(RouteError::UnknownRouteName { .. })
        ));
    }

    #[test]
    fn test_route_builder_methods() {
        let route = Route::new("/about", blank)
            .name("about")
            .meta("title", "About us");

        assert_eq!(route.pattern().as_str(), "/about");
        assert_eq!(route.route_name(), Some("about"));
        assert_eq!(route.get_meta("title"), Some("About us"));
        assert!(route.matches("/about").is_some());
    }

    #[test]
    fn test_route_try_new_invalid() {
        assert!(Route::try_new("/users/:", blank).is_err());
    }

    #[test]
    #[should_panic(expected = "Invalid route pattern")]
    fn test_route_new_panics_on_invalid() {
        Route::new("/users/:", blank);
    }
}
