//! # GPUI Waypoint
//!
//! Client-side routing for GPUI applications:
//!
//! - **Ordered route table** - first match wins, always closed by a `*` fallback
//! - **Path patterns** - literal, `:param` and trailing `*` segments
//! - **Navigation payloads** - opaque data handed from a link to the next view
//! - **Active links** - prefix or exact matching against the current location
//! - **History** - push, replace, back, forward and reload
//! - **Named routes** - build paths from a route name and parameters
//!
//! # Quick Start
//!
//! ```ignore
//! use gpui::*;
//! use gpui_waypoint::*;
//!
//! fn main() {
//!     Application::new().run(|cx| {
//!         init_router(cx, |routes| {
//!             routes.add_route(Route::new("/", home));
//!             routes.add_route(Route::new("/posts/:id", post_detail));
//!             routes.add_not_found(not_found);
//!         })
//!         .expect("valid route table");
//!
//!         cx.open_window(WindowOptions::default(), |_, cx| cx.new(AppView::new))
//!             .unwrap();
//!     });
//! }
//!
//! fn post_detail(_cx: &mut App, route: &RouteContext) -> impl IntoElement {
//!     match route.payload_as::<Post>() {
//!         Some(post) => div().child(post.title.clone()),
//!         None => div().child(format!("Loading post {}", route.param("id").unwrap_or("?"))),
//!     }
//! }
//! ```
//!
//! # Navigation
//!
//! ```ignore
//! use gpui_waypoint::{Navigator, NavigationRequest};
//!
//! Navigator::push(cx, "/about");
//! Navigator::push(cx, NavigationRequest::new("/posts/2").with_payload(post));
//! Navigator::replace(cx, "/login");
//! Navigator::pop(cx);
//! Navigator::forward(cx);
//! ```
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)
//! - `cache` (default) - LRU cache of resolved paths

#![doc(html_root_url = "https://docs.rs/gpui-waypoint/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Cache (optional)
#[cfg(feature = "cache")]
pub mod cache;

// Core routing modules
pub mod active;
pub mod history;
pub mod location;
pub mod matcher;
pub mod route;
pub mod table;

// Error handling
pub mod error;

// Other modules
pub mod params;
pub mod widgets;

// Context module (router context integration)
mod context;

// Re-export main types for convenient access
pub use active::{is_link_active, LinkMatch};
#[cfg(feature = "cache")]
pub use cache::{CacheStats, ResolveCache};
pub use context::{
    current_path, init_router, init_router_with, navigate, render_current, GlobalRouter,
    IntoNavigation, NavigationRequest, Navigator, NavigatorHandle, RouteContext, RouterOptions,
    UseRouter,
};
pub use error::RouteError;
pub use history::History;
pub use location::{Location, NavigationPayload};
pub use matcher::{split_path, PatternMatch, RoutePattern, Segment};
pub use params::{QueryParams, RouteParams};
pub use route::{NamedRouteRegistry, Route, RouteHandler};
pub use table::{shadowed_routes, RouteMatch, RouteTable, RouteTableBuilder};
pub use widgets::{router_link, DefaultPages, MountedRoute, NavShell, RouterLink, RouterOutlet};

/// Navigation direction indicator.
///
/// Used to tell history traversal apart from new navigations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// Navigating forward to a new route
    Forward,
    /// Navigating back in history
    Back,
    /// Replacing the current route without affecting history direction
    Replace,
}

/// Event produced by every navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChangeEvent {
    /// The previous location
    pub from: Option<String>,
    /// The new location, path plus query string
    pub to: String,
    /// The direction of navigation
    pub direction: NavigationDirection,
    /// Whether the new history entry carries a payload
    pub has_payload: bool,
}
