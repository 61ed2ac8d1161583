//! Router state in the GPUI context
//!
//! [`GlobalRouter`] is stored as a GPUI global and owns the route table and the
//! navigation history. Views never read it to find their own parameters:
//! the outlet builds a [`RouteContext`] and passes it to the handler.

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, ResolveCache};
use crate::active::{is_link_active, LinkMatch};
use crate::error::RouteError;
use crate::history::History;
use crate::location::{Location, NavigationPayload};
use crate::params::{QueryParams, RouteParams};
use crate::table::{RouteMatch, RouteTable, RouteTableBuilder};
use crate::widgets::DefaultPages;
use crate::{debug_log, warn_log, RouteChangeEvent};
use gpui::{AnyElement, App, BorrowAppContext, Global};
use std::any::Any;
#[cfg(feature = "cache")]
use std::cell::RefCell;

// ============================================================================
// RouteContext
// ============================================================================

/// What a mounted handler may know about the navigation that mounted it
///
/// Read-only. Absent parameters and payloads come back as `None`; a detail
/// view reached by typing its path has params but no payload, and is expected
/// to render a placeholder rather than fail.
#[derive(Debug, Clone)]
pub struct RouteContext {
    path: String,
    pattern: String,
    params: RouteParams,
    query: QueryParams,
    payload: Option<NavigationPayload>,
    remainder: Option<String>,
    is_fallback: bool,
}

impl RouteContext {
    /// Combine the current location with its resolved route
    pub fn new(location: &Location, route_match: &RouteMatch) -> Self {
        Self {
            path: location.path().to_string(),
            pattern: route_match.route.pattern().as_str().to_string(),
            params: route_match.params.clone(),
            query: location.query().clone(),
            payload: location.payload().cloned(),
            remainder: route_match.remainder.clone(),
            is_fallback: route_match.is_fallback,
        }
    }

    /// Current path, without query string
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Pattern of the route that matched
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn param_as<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.params.get_as(name)
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Payload attached by the navigation that created this location
    pub fn payload(&self) -> Option<&NavigationPayload> {
        self.payload.as_ref()
    }

    /// Payload as a `T`; `None` if absent or of another type
    pub fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref()?.downcast_ref::<T>()
    }

    /// Suffix consumed by a trailing `*`
    pub fn remainder(&self) -> Option<&str> {
        self.remainder.as_deref()
    }

    /// Whether this is the catch-all "not found" route
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }
}

// ============================================================================
// NavigationRequest
// ============================================================================

/// A target path plus an optional payload
///
/// ```
/// use gpui_waypoint::NavigationRequest;
///
/// let request = NavigationRequest::new("/posts/2").with_payload("Second Post");
/// assert_eq!(request.path, "/posts/2");
/// assert!(request.payload.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct NavigationRequest {
    pub path: String,
    pub payload: Option<NavigationPayload>,
}

impl NavigationRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            payload: None,
        }
    }

    pub fn with_payload<T: Any + Send + Sync>(mut self, payload: T) -> Self {
        self.payload = Some(NavigationPayload::new(payload));
        self
    }
}

/// Anything `Navigator::push` accepts
pub trait IntoNavigation {
    fn into_navigation(self) -> NavigationRequest;
}

impl IntoNavigation for NavigationRequest {
    fn into_navigation(self) -> NavigationRequest {
        self
    }
}

impl IntoNavigation for &str {
    fn into_navigation(self) -> NavigationRequest {
        NavigationRequest::new(self)
    }
}

impl IntoNavigation for String {
    fn into_navigation(self) -> NavigationRequest {
        NavigationRequest::new(self)
    }
}

// ============================================================================
// RouterOptions
// ============================================================================

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterOptions {
    /// Location on startup, as if typed into the address bar
    pub initial_path: String,
    /// Maximum history entries kept (0 = unlimited)
    pub history_limit: usize,
    /// Capacity of the resolve cache (ignored without the `cache` feature)
    pub cache_capacity: usize,
}

impl RouterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_path(mut self, path: impl Into<String>) -> Self {
        self.initial_path = path.into();
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            initial_path: "/".to_string(),
            history_limit: History::DEFAULT_MAX_ENTRIES,
            cache_capacity: 256,
        }
    }
}

// ============================================================================
// GlobalRouter
// ============================================================================

/// Router state shared by the outlet, links and `Navigator`
pub struct GlobalRouter {
    table: RouteTable,
    history: History,
    /// Bumped on every navigation that changes the current entry
    generation: u64,
    #[cfg(feature = "cache")]
    cache: RefCell<ResolveCache>,
}

impl GlobalRouter {
    pub fn new(table: RouteTable, options: &RouterOptions) -> Self {
        debug_log!("Router starting at '{}'", options.initial_path);
        Self {
            table,
            history: History::with_max_entries(
                Location::parse(&options.initial_path),
                options.history_limit,
            ),
            generation: 0,
            #[cfg(feature = "cache")]
            cache: RefCell::new(ResolveCache::with_capacity(options.cache_capacity)),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_location(&self) -> &Location {
        self.history.current()
    }

    pub fn current_path(&self) -> &str {
        self.history.current_path()
    }

    /// Navigation counter; changes whenever the mounted view must change
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Navigate to a new location
    pub fn push(&mut self, path: &str, payload: Option<NavigationPayload>) -> RouteChangeEvent {
        let event = self.history.push(path, payload);
        self.generation += 1;
        log_event(&event);
        event
    }

    /// Replace the current location
    pub fn replace(&mut self, path: &str, payload: Option<NavigationPayload>) -> RouteChangeEvent {
        let event = self.history.replace(path, payload);
        self.generation += 1;
        log_event(&event);
        event
    }

    pub fn back(&mut self) -> Option<RouteChangeEvent> {
        let event = self.history.back()?;
        self.generation += 1;
        log_event(&event);
        Some(event)
    }

    pub fn forward(&mut self) -> Option<RouteChangeEvent> {
        let event = self.history.forward()?;
        self.generation += 1;
        log_event(&event);
        Some(event)
    }

    /// Simulate a full page reload: same path, every payload forgotten
    pub fn reload(&mut self) {
        let dropped = self.history.discard_payloads();
        self.generation += 1;
        debug_log!(
            "Reload at '{}', discarded {} payload(s)",
            self.history.current_path(),
            dropped
        );
    }

    /// Navigate to a named route
    pub fn push_named(
        &mut self,
        name: &str,
        params: &RouteParams,
        payload: Option<NavigationPayload>,
    ) -> Result<RouteChangeEvent, RouteError> {
        let path = self.url_for(name, params)?;
        Ok(self.push(&path, payload))
    }

    pub fn url_for(&self, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        self.table.named_routes().url_for(name, params)
    }

    /// Resolve the current location
    pub fn current_match(&self) -> RouteMatch {
        #[cfg(feature = "cache")]
        {
            self.cache
                .borrow_mut()
                .resolve(&self.table, self.history.current_path())
        }
        #[cfg(not(feature = "cache"))]
        {
            self.table.resolve(self.history.current_path())
        }
    }

    /// Context for the handler of the current location
    pub fn current_context(&self) -> RouteContext {
        let route_match = self.current_match();
        RouteContext::new(self.history.current(), &route_match)
    }

    /// Whether a link to `target` is active at the current location
    pub fn is_active(&self, target: &str, mode: LinkMatch) -> bool {
        is_link_active(target, self.current_path(), mode)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats().clone()
    }
}

impl Global for GlobalRouter {}

fn log_event(event: &RouteChangeEvent) {
    debug_log!(
        "Navigate {:?}: {:?} -> '{}' (payload: {})",
        event.direction,
        event.from,
        event.to,
        event.has_payload
    );
}

/// Access to the global router from an `App`
pub trait UseRouter {
    fn router(&self) -> &GlobalRouter;

    fn update_router<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalRouter, &mut App) -> R;
}

impl UseRouter for App {
    fn router(&self) -> &GlobalRouter {
        self.global::<GlobalRouter>()
    }

    fn update_router<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalRouter, &mut App) -> R,
    {
        self.update_global(f)
    }
}

/// Build the route table and install the router as a global
///
/// A default "not found" page is appended when `configure` registers no
/// catch-all route.
///
/// # Example
///
/// ```ignore
/// use gpui_waypoint::{init_router, Route};
///
/// init_router(cx, |routes| {
///     routes.add_route(Route::new("/", home));
///     routes.add_route(Route::new("/posts/:id", post_detail));
///     routes.add_not_found(not_found);
/// })?;
/// ```
pub fn init_router<F>(cx: &mut App, configure: F) -> Result<(), RouteError>
where
    F: FnOnce(&mut RouteTableBuilder),
{
    init_router_with(cx, &RouterOptions::default(), configure)
}

/// [`init_router`] with explicit options
pub fn init_router_with<F>(
    cx: &mut App,
    options: &RouterOptions,
    configure: F,
) -> Result<(), RouteError>
where
    F: FnOnce(&mut RouteTableBuilder),
{
    let mut builder = RouteTable::builder();
    configure(&mut builder);

    if !builder.has_fallback() {
        debug_log!("No catch-all route configured, installing default not-found page");
        builder.add_not_found(DefaultPages::not_found);
    }

    let table = builder.build()?;
    cx.set_global(GlobalRouter::new(table, options));
    Ok(())
}

/// Current path of the global router
pub fn current_path(cx: &App) -> String {
    Navigator::current_path(cx)
}

/// Shorthand for [`Navigator::push`]
pub fn navigate(cx: &mut impl BorrowAppContext, target: impl IntoNavigation) {
    Navigator::push(cx, target);
}

/// Render the handler for the current location
///
/// Returns the default "router not initialized" page when no router global
/// exists.
pub fn render_current(cx: &mut App) -> AnyElement {
    let Some(router) = cx.try_global::<GlobalRouter>() else {
        return DefaultPages::uninitialized();
    };

    let route_match = router.current_match();
    let context = RouteContext::new(router.current_location(), &route_match);
    route_match.route.build(cx, &context)
}

// ============================================================================
// Navigator
// ============================================================================

/// Handle for `Navigator::of(cx)` chained calls
pub struct NavigatorHandle<'a, C: BorrowAppContext> {
    cx: &'a mut C,
}

impl<C: BorrowAppContext> NavigatorHandle<'_, C> {
    pub fn push(self, target: impl IntoNavigation) -> Self {
        let request = target.into_navigation();
        self.cx.update_global::<GlobalRouter, _>(|router, _| {
            router.push(&request.path, request.payload);
        });
        self
    }

    pub fn replace(self, target: impl IntoNavigation) -> Self {
        let request = target.into_navigation();
        self.cx.update_global::<GlobalRouter, _>(|router, _| {
            router.replace(&request.path, request.payload);
        });
        self
    }

    pub fn pop(self) -> Self {
        self.cx.update_global::<GlobalRouter, _>(|router, _| {
            router.back();
        });
        self
    }

    pub fn forward(self) -> Self {
        self.cx.update_global::<GlobalRouter, _>(|router, _| {
            router.forward();
        });
        self
    }
}

/// Navigation API
///
/// Mutating calls take any context that can borrow the app (`App`,
/// `Context<V>`, ...); queries take `&App`.
///
/// ```ignore
/// use gpui_waypoint::{Navigator, NavigationPayload};
///
/// Navigator::push(cx, "/about");
/// Navigator::push_with_payload(cx, "/posts/2", NavigationPayload::new(post));
/// Navigator::pop(cx);
/// ```
pub struct Navigator;

impl Navigator {
    pub fn of<C: BorrowAppContext>(cx: &mut C) -> NavigatorHandle<'_, C> {
        NavigatorHandle { cx }
    }

    /// Navigate to a path or [`NavigationRequest`]
    pub fn push(cx: &mut impl BorrowAppContext, target: impl IntoNavigation) {
        let request = target.into_navigation();
        cx.update_global::<GlobalRouter, _>(|router, _| {
            router.push(&request.path, request.payload);
        });
    }

    /// Navigate and hand `payload` to the next mounted handler
    pub fn push_with_payload(
        cx: &mut impl BorrowAppContext,
        path: impl Into<String>,
        payload: NavigationPayload,
    ) {
        let path = path.into();
        cx.update_global::<GlobalRouter, _>(|router, _| {
            router.push(&path, Some(payload));
        });
    }

    /// Replace the current location without adding a history entry
    pub fn replace(cx: &mut impl BorrowAppContext, target: impl IntoNavigation) {
        let request = target.into_navigation();
        cx.update_global::<GlobalRouter, _>(|router, _| {
            router.replace(&request.path, request.payload);
        });
    }

    pub fn pop(cx: &mut impl BorrowAppContext) {
        cx.update_global::<GlobalRouter, _>(|router, _| {
            router.back();
        });
    }

    pub fn forward(cx: &mut impl BorrowAppContext) {
        cx.update_global::<GlobalRouter, _>(|router, _| {
            router.forward();
        });
    }

    /// Forget every navigation payload, as a page reload would
    pub fn reload(cx: &mut impl BorrowAppContext) {
        cx.update_global::<GlobalRouter, _>(|router, _| router.reload());
    }

    /// Navigate to a named route
    ///
    /// On an unknown name or a missing parameter the location is left
    /// unchanged and the error is logged and returned.
    pub fn push_named(
        cx: &mut impl BorrowAppContext,
        name: &str,
        params: &RouteParams,
    ) -> Result<(), RouteError> {
        cx.update_global::<GlobalRouter, _>(|router, _| {
            router.push_named(name, params, None).map(|_| ()).map_err(|e| {
                warn_log!("push_named failed: {}", e);
                e
            })
        })
    }

    pub fn url_for(cx: &App, name: &str, params: &RouteParams) -> Result<String, RouteError> {
        cx.global::<GlobalRouter>().url_for(name, params)
    }

    pub fn current_path(cx: &App) -> String {
        cx.global::<GlobalRouter>().current_path().to_string()
    }

    /// Whether a link to `target` would be drawn active
    pub fn is_active(cx: &App, target: &str, mode: LinkMatch) -> bool {
        cx.global::<GlobalRouter>().is_active(target, mode)
    }

    pub fn can_pop(cx: &App) -> bool {
        cx.global::<GlobalRouter>().can_go_back()
    }

    pub fn can_go_forward(cx: &App) -> bool {
        cx.global::<GlobalRouter>().can_go_forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;
    use gpui::{div, IntoElement, TestAppContext};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    struct Post {
        id: u32,
        title: String,
    }

    type Seen = Arc<Mutex<Vec<(&'static str, RouteContext)>>>;

    // Every handler records the context it was mounted with.
    fn init_blog(cx: &mut TestAppContext, options: RouterOptions) -> Seen {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));

        let record = |name: &'static str, seen: &Seen| {
            let seen = Arc::clone(seen);
            move |_: &mut App, route: &RouteContext| {
                seen.lock().unwrap().push((name, route.clone()));
                div().into_any_element()
            }
        };

        cx.update(|cx| {
            init_router_with(cx, &options, |routes| {
                routes.add_route(Route::new("/", record("home", &seen)));
                routes.add_route(Route::new("/about", record("about", &seen)));
                routes.add_route(Route::new("/contact", record("contact", &seen)));
                routes.add_route(Route::new("/posts/:id", record("post", &seen)).name("post"));
                routes.add_not_found(record("not_found", &seen));
            })
            .unwrap();
        });

        seen
    }

    fn render(cx: &mut TestAppContext, seen: &Seen) -> (&'static str, RouteContext) {
        cx.update(|cx| {
            render_current(cx);
        });
        seen.lock().unwrap().last().cloned().unwrap()
    }

    #[test]
    fn test_route_context_accessors() {
        let table = RouteTable::builder()
            .route(Route::new("/posts/:id", |_, _| div()))
            .not_found(|_, _| div())
            .build()
            .unwrap();
        let location = Location::parse("/posts/2?tab=comments")
            .with_payload(Some(NavigationPayload::new(7u32)));

        let context = RouteContext::new(&location, &table.resolve(location.path()));

        assert_eq!(context.path(), "/posts/2");
        assert_eq!(context.pattern(), "/posts/:id");
        assert_eq!(context.param("id"), Some("2"));
        assert_eq!(context.param_as::<u32>("id"), Some(2));
        assert_eq!(context.query().get("tab"), Some("comments"));
        assert_eq!(context.payload_as::<u32>(), Some(&7));
        assert_eq!(context.payload_as::<String>(), None);
        assert!(!context.is_fallback());
    }

    #[test]
    fn test_router_options_builder() {
        let options = RouterOptions::new()
            .initial_path("/posts/2")
            .history_limit(10)
            .cache_capacity(4);

        assert_eq!(options.initial_path, "/posts/2");
        assert_eq!(options.history_limit, 10);
        assert_eq!(options.cache_capacity, 4);
        assert_eq!(RouterOptions::default().initial_path, "/");
    }

    #[gpui::test]
    fn test_payload_round_trip(cx: &mut TestAppContext) {
        let seen = init_blog(cx, RouterOptions::default());
        let post = Post {
            id: 2,
            title: "Second Post".to_string(),
        };

        let payload = NavigationPayload::new(post.clone());
        let sent = payload.clone();
        cx.update(|cx| Navigator::push_with_payload(cx, "/posts/2", sent));

        let (name, context) = render(cx, &seen);
        assert_eq!(name, "post");
        assert_eq!(context.payload_as::<Post>(), Some(&post));
        assert_eq!(context.payload_as::<Post>().map(|p| p.title.as_str()), Some("Second Post"));
        assert_eq!(post.id, 2);
        assert!(context.payload().unwrap().ptr_eq(&payload));
        assert_eq!(
            context.params(),
            &[("id", "2")].into_iter().collect::<RouteParams>()
        );
    }

    #[gpui::test]
    fn test_direct_entry_has_no_payload(cx: &mut TestAppContext) {
        let seen = init_blog(cx, RouterOptions::new().initial_path("/posts/2"));

        let (name, context) = render(cx, &seen);
        assert_eq!(name, "post");
        assert_eq!(context.param("id"), Some("2"));
        assert!(context.payload().is_none());
    }

    #[gpui::test]
    fn test_payload_not_carried_to_next_navigation(cx: &mut TestAppContext) {
        let seen = init_blog(cx, RouterOptions::default());

        cx.update(|cx| {
            Navigator::push(cx, NavigationRequest::new("/posts/1").with_payload(1u32));
            Navigator::push(cx, "/posts/3");
        });
        let (_, context) = render(cx, &seen);
        assert!(context.payload().is_none());

        cx.update(|cx| Navigator::pop(cx));
        let (_, context) = render(cx, &seen);
        assert_eq!(context.payload_as::<u32>(), Some(&1));
    }

    #[gpui::test]
    fn test_reload_drops_payload(cx: &mut TestAppContext) {
        let seen = init_blog(cx, RouterOptions::default());

        cx.update(|cx| {
            Navigator::push(cx, NavigationRequest::new("/posts/1").with_payload(1u32));
            Navigator::reload(cx);
        });

        let (name, context) = render(cx, &seen);
        assert_eq!(name, "post");
        assert_eq!(context.param("id"), Some("1"));
        assert!(context.payload().is_none());
    }

    #[gpui::test]
    fn test_unknown_path_renders_fallback(cx: &mut TestAppContext) {
        let seen = init_blog(cx, RouterOptions::default());

        cx.update(|cx| Navigator::push(cx, "/unknown/x"));

        let (name, context) = render(cx, &seen);
        assert_eq!(name, "not_found");
        assert!(context.is_fallback());
        assert!(context.params().is_empty());
        assert_eq!(context.path(), "/unknown/x");
    }

    #[gpui::test]
    fn test_nav_back_forward(cx: &mut TestAppContext) {
        init_blog(cx, RouterOptions::default());

        cx.update(|cx| {
            Navigator::push(cx, "/about");
            Navigator::push(cx, "/contact");
        });
        assert_eq!(cx.read(Navigator::current_path), "/contact");

        cx.update(|cx| Navigator::pop(cx));
        assert_eq!(cx.read(Navigator::current_path), "/about");
        assert!(cx.read(Navigator::can_go_forward));

        cx.update(|cx| Navigator::forward(cx));
        assert_eq!(cx.read(Navigator::current_path), "/contact");
        assert!(!cx.read(Navigator::can_go_forward));
    }

    #[gpui::test]
    fn test_nav_replace(cx: &mut TestAppContext) {
        init_blog(cx, RouterOptions::default());

        cx.update(|cx| {
            Navigator::push(cx, "/about");
            Navigator::replace(cx, "/contact");
            Navigator::pop(cx);
        });

        assert_eq!(cx.read(Navigator::current_path), "/");
        assert!(!cx.read(Navigator::can_pop));
    }

    #[gpui::test]
    fn test_navigator_handle_chain(cx: &mut TestAppContext) {
        init_blog(cx, RouterOptions::default());

        cx.update(|cx| {
            Navigator::of(cx).push("/about").push("/contact").pop();
        });

        assert_eq!(cx.read(Navigator::current_path), "/about");
    }

    #[gpui::test]
    fn test_push_named(cx: &mut TestAppContext) {
        init_blog(cx, RouterOptions::default());
        let params: RouteParams = [("id", "9")].into_iter().collect();

        let pushed = cx.update(|cx| Navigator::push_named(cx, "post", &params));
        assert!(pushed.is_ok());
        assert_eq!(cx.read(Navigator::current_path), "/posts/9");

        let failed = cx.update(|cx| Navigator::push_named(cx, "missing", &params));
        assert!(matches!(failed, Err(RouteError::UnknownRouteName { .. })));
        assert_eq!(cx.read(Navigator::current_path), "/posts/9");
    }

    #[gpui::test]
    fn test_is_active(cx: &mut TestAppContext) {
        init_blog(cx, RouterOptions::new().initial_path("/about/x"));

        assert!(cx.read(|cx| Navigator::is_active(cx, "/about", LinkMatch::Prefix)));
        assert!(!cx.read(|cx| Navigator::is_active(cx, "/about", LinkMatch::Exact)));
        assert!(cx.read(|cx| Navigator::is_active(cx, "/", LinkMatch::Prefix)));
        assert!(!cx.read(|cx| Navigator::is_active(cx, "/contact", LinkMatch::Prefix)));
    }

    #[gpui::test]
    fn test_default_not_found_installed(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init_router(cx, |routes| {
                routes.add_route(Route::new("/", |_, _| div()));
            })
            .unwrap();
        });

        let fallback = cx.update(|cx| {
            cx.update_router(|router, _| {
                router.push("/missing", None);
                router.current_match().is_fallback
            })
        });
        assert!(fallback);
    }

    #[gpui::test]
    fn test_init_router_reports_errors(cx: &mut TestAppContext) {
        let result = cx.update(|cx| {
            init_router(cx, |routes| {
                routes.add_not_found(|_, _| div());
                routes.add_route(Route::new("/late", |_, _| div()));
            })
        });

        assert!(matches!(result, Err(RouteError::RouteAfterFallback { .. })));
        assert!(!cx.read(|cx| cx.has_global::<GlobalRouter>()));
    }

    #[cfg(feature = "cache")]
    #[gpui::test]
    fn test_current_match_uses_cache(cx: &mut TestAppContext) {
        let seen = init_blog(cx, RouterOptions::default());

        render(cx, &seen);
        render(cx, &seen);

        let stats = cx.read(|cx| cx.router().cache_stats());
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }
}
