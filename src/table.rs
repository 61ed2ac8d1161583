//! Route table: ordered first-match resolution with a catch-all fallback
//!
//! Routes are tried in registration order and the first one whose pattern
//! matches wins. The table always ends with a `*` route, so every path
//! resolves to exactly one route and "not found" is a normal, renderable
//! result.

use crate::context::RouteContext;
use crate::error::RouteError;
use crate::location::route_path;
use crate::matcher::{PatternMatch, RoutePattern};
use crate::params::RouteParams;
use crate::route::{NamedRouteRegistry, Route};
use crate::{debug_log, trace_log, warn_log};
use gpui::{App, IntoElement};
use std::sync::Arc;

/// Result of resolving a path
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The winning route
    pub route: Arc<Route>,
    /// Position of the route in the table
    pub index: usize,
    /// Values bound by parameter segments (empty for the fallback)
    pub params: RouteParams,
    /// Suffix consumed by a trailing wildcard
    pub remainder: Option<String>,
    /// Whether the catch-all fallback was selected
    pub is_fallback: bool,
}

/// Immutable ordered list of routes
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Arc<Route>>,
    named: NamedRouteRegistry,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    pub fn named_routes(&self) -> &NamedRouteRegistry {
        &self.named
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Never true for a built table; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve a path to exactly one route
    ///
    /// A query string or fragment on `path` is ignored.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let path = route_path(path);

        for (index, route) in self.routes.iter().enumerate() {
            if let Some(found) = route.matches(path) {
                trace_log!("'{}' matched '{}'", path, route.pattern());
                return self.to_match(index, found);
            }
        }

        // Not reached for a built table: the last route is always `*`.
        let fallback = self.routes.len() - 1;
        self.to_match(
            fallback,
            PatternMatch {
                params: RouteParams::new(),
                remainder: Some(path.trim_start_matches('/').to_string()),
            },
        )
    }

    /// Rebuild a match for a known route position (used by the resolve cache)
    pub(crate) fn to_match(&self, index: usize, found: PatternMatch) -> RouteMatch {
        let route = Arc::clone(&self.routes[index]);
        let is_fallback = route.pattern().is_catch_all();
        RouteMatch {
            route,
            index,
            params: if is_fallback {
                RouteParams::new()
            } else {
                found.params
            },
            remainder: found.remainder,
            is_fallback,
        }
    }
}

/// Collects routes in order and validates the table
///
/// ```no_run
/// use gpui::div;
/// use gpui_waypoint::{Route, RouteTable};
///
/// let table = RouteTable::builder()
///     .route(Route::new("/", |_, _| div()))
///     .route(Route::new("/posts/:id", |_, _| div()))
///     .not_found(|_, _| div())
///     .build()
///     .unwrap();
///
/// assert!(table.resolve("/nowhere").is_fallback);
/// ```
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
    error: Option<RouteError>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route; order is the only precedence rule
    pub fn route(mut self, route: Route) -> Self {
        self.add_route(route);
        self
    }

    /// Append a route in place
    pub fn add_route(&mut self, route: Route) {
        if self.error.is_some() {
            return;
        }
        if self.has_fallback() {
            self.error = Some(RouteError::RouteAfterFallback {
                pattern: route.pattern().as_str().to_string(),
            });
            return;
        }
        self.routes.push(route);
    }

    /// Register the catch-all `*` route
    pub fn not_found<F, E>(mut self, handler: F) -> Self
    where
        E: IntoElement,
        F: Fn(&mut App, &RouteContext) -> E + Send + Sync + 'static,
    {
        self.add_not_found(handler);
        self
    }

    pub fn add_not_found<F, E>(&mut self, handler: F)
    where
        E: IntoElement,
        F: Fn(&mut App, &RouteContext) -> E + Send + Sync + 'static,
    {
        self.add_route(Route::new("*", handler));
    }

    /// Whether the last registered route is the catch-all
    pub fn has_fallback(&self) -> bool {
        self.routes
            .last()
            .is_some_and(|r| r.pattern().is_catch_all())
    }

    /// Validate and freeze the table
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingFallback`] if no `*` route was registered, or the
    /// first registration error encountered.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !self.has_fallback() {
            return Err(RouteError::MissingFallback);
        }

        warn_shadowed(&self.routes);

        let mut named = NamedRouteRegistry::new();
        for route in &self.routes {
            if let Some(name) = route.route_name() {
                if named.contains(name) {
                    warn_log!("Route name '{}' registered twice; the later route wins", name);
                }
                named.register(name, route.pattern().clone());
            }
        }

        let routes: Vec<Arc<Route>> = self.routes.into_iter().map(Arc::new).collect();
        debug_log!(
            "Route table built: {} routes, {} named",
            routes.len(),
            named.len()
        );

        Ok(RouteTable { routes, named })
    }
}

/// Routes that can never be selected because an earlier route always wins
///
/// Returns `(earlier, later)` index pairs. The fallback is not reported: it
/// is meant to be reached only when nothing else matches.
pub fn shadowed_routes(table: &RouteTable) -> Vec<(usize, usize)> {
    let patterns: Vec<&RoutePattern> = table.routes().iter().map(|r| r.pattern()).collect();
    shadowed_pairs(&patterns)
}

fn shadowed_pairs(patterns: &[&RoutePattern]) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    for (later_index, later) in patterns.iter().enumerate() {
        if later.is_catch_all() {
            continue;
        }
        if let Some(earlier_index) = patterns[..later_index]
            .iter()
            .position(|earlier| earlier.shadows(later))
        {
            found.push((earlier_index, later_index));
        }
    }
    found
}

fn warn_shadowed(routes: &[Route]) {
    let patterns: Vec<&RoutePattern> = routes.iter().map(Route::pattern).collect();
    for (earlier, later) in shadowed_pairs(&patterns) {
        warn_log!(
            "Route '{}' is unreachable: '{}' is registered earlier and matches every path it does",
            patterns[later],
            patterns[earlier]
        );
    }
}
