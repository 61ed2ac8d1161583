//! Navigation shell, links and the route outlet
//!
//! [`RouterOutlet`] is the View Composer's mount point: it observes the global
//! router and renders the handler selected for the current location.
//! [`RouterLink`] draws its active state from the same location and navigates
//! on click. [`NavShell`] puts a bar of links around an outlet.

use crate::active::LinkMatch;
use crate::context::{GlobalRouter, NavigationRequest, Navigator, RouteContext};
use crate::location::NavigationPayload;
use crate::route::Route;
use crate::{debug_log, error_log, trace_log};
use gpui::{
    div, rgb, AnyElement, App, Context, Div, Entity, FontWeight, InteractiveElement,
    IntoElement, MouseButton, ParentElement, Render, RenderOnce, SharedString, Styled,
    Subscription, Window,
};
use std::sync::Arc;

// ============================================================================
// RouterOutlet
// ============================================================================

/// Identity of the view currently mounted in an outlet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedRoute {
    /// Router generation at mount time
    pub generation: u64,
    pub path: String,
    pub pattern: String,
}

/// Renders the handler for the current location
///
/// Create it as an entity; it re-renders by itself after every navigation.
///
/// ```ignore
/// struct AppView {
///     outlet: Entity<RouterOutlet>,
/// }
///
/// impl AppView {
///     fn new(cx: &mut Context<'_, Self>) -> Self {
///         Self {
///             outlet: cx.new(RouterOutlet::new),
///         }
///     }
/// }
/// ```
pub struct RouterOutlet {
    mounted: Option<MountedRoute>,
    _subscriptions: Vec<Subscription>,
}

impl RouterOutlet {
    pub fn new(cx: &mut Context<'_, Self>) -> Self {
        let subscription = cx.observe_global::<GlobalRouter>(|_outlet, cx| cx.notify());
        Self {
            mounted: None,
            _subscriptions: vec![subscription],
        }
    }

    /// The view mounted by the last render, if any
    pub fn mounted(&self) -> Option<&MountedRoute> {
        self.mounted.as_ref()
    }

    /// Resolve the current location and record the mount
    ///
    /// Returns `None` when no router has been initialized.
    pub fn resolve(&mut self, cx: &App) -> Option<(Arc<Route>, RouteContext)> {
        let router = cx.try_global::<GlobalRouter>()?;
        let route_match = router.current_match();
        let context = RouteContext::new(router.current_location(), &route_match);

        self.sync(MountedRoute {
            generation: router.generation(),
            path: context.path().to_string(),
            pattern: context.pattern().to_string(),
        });

        Some((route_match.route, context))
    }

    /// Returns whether the mounted view changed
    fn sync(&mut self, next: MountedRoute) -> bool {
        match &self.mounted {
            Some(current) if current.generation == next.generation => {
                trace_log!("Outlet unchanged at '{}'", current.path);
                false
            }
            Some(current) => {
                debug_log!(
                    "Outlet unmount '{}' ({}), mount '{}' ({})",
                    current.path,
                    current.pattern,
                    next.path,
                    next.pattern
                );
                self.mounted = Some(next);
                true
            }
            None => {
                debug_log!("Outlet mount '{}' ({})", next.path, next.pattern);
                self.mounted = Some(next);
                true
            }
        }
    }
}

impl Render for RouterOutlet {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        let Some((route, context)) = self.resolve(cx) else {
            error_log!("RouterOutlet rendered before init_router()");
            return DefaultPages::uninitialized();
        };

        div()
            .size_full()
            .child(route.build(cx, &context))
            .into_any_element()
    }
}

// ============================================================================
// RouterLink
// ============================================================================

/// A clickable link to a path
///
/// ```ignore
/// RouterLink::new("/posts/2")
///     .payload(post.clone())
///     .child(post.title.clone())
/// ```
#[derive(IntoElement)]
pub struct RouterLink {
    target: SharedString,
    payload: Option<NavigationPayload>,
    mode: LinkMatch,
    active_style: Option<Box<dyn Fn(Div) -> Div>>,
    children: Vec<AnyElement>,
}

impl RouterLink {
    pub fn new(target: impl Into<SharedString>) -> Self {
        Self {
            target: target.into(),
            payload: None,
            mode: LinkMatch::default(),
            active_style: None,
            children: Vec::new(),
        }
    }

    /// Attach data handed to the target's handler on click
    pub fn payload<T: std::any::Any + Send + Sync>(mut self, payload: T) -> Self {
        self.payload = Some(NavigationPayload::new(payload));
        self
    }

    /// Only active when the current path equals the target
    pub fn exact(mut self) -> Self {
        self.mode = LinkMatch::Exact;
        self
    }

    pub fn match_mode(mut self, mode: LinkMatch) -> Self {
        self.mode = mode;
        self
    }

    /// Styling applied while the link is active
    pub fn active_style(mut self, style: impl Fn(Div) -> Div + 'static) -> Self {
        self.active_style = Some(Box::new(style));
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn mode(&self) -> LinkMatch {
        self.mode
    }

    /// Whether this link is active at the router's current location
    pub fn is_active(&self, cx: &App) -> bool {
        cx.try_global::<GlobalRouter>()
            .is_some_and(|router| router.is_active(&self.target, self.mode))
    }

    /// The navigation performed on click
    pub fn request(&self) -> NavigationRequest {
        NavigationRequest {
            path: self.target.to_string(),
            payload: self.payload.clone(),
        }
    }
}

impl RenderOnce for RouterLink {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let is_active = self.is_active(cx);
        let request = self.request();

        let mut link = div()
            .cursor_pointer()
            .text_color(if is_active {
                rgb(0x2196f3)
            } else {
                rgb(0x333333)
            })
            .on_mouse_down(MouseButton::Left, move |_event, _window, cx: &mut App| {
                Navigator::push(cx, request.clone());
            });

        if is_active {
            if let Some(style) = self.active_style {
                link = style(link);
            }
        }

        link.children(self.children)
    }
}

/// A text link
pub fn router_link(target: impl Into<SharedString>, label: impl Into<SharedString>) -> RouterLink {
    let label: SharedString = label.into();
    RouterLink::new(target).child(label)
}

// ============================================================================
// NavShell
// ============================================================================

#[derive(Debug, Clone)]
struct NavItem {
    label: SharedString,
    target: SharedString,
    mode: LinkMatch,
}

/// Persistent navigation bar above an outlet
///
/// ```ignore
/// NavShell::new(self.outlet.clone())
///     .title("Blog")
///     .exact_link("Home", "/")
///     .link("Posts", "/posts")
/// ```
#[derive(IntoElement)]
pub struct NavShell {
    title: Option<SharedString>,
    items: Vec<NavItem>,
    outlet: Entity<RouterOutlet>,
}

impl NavShell {
    pub fn new(outlet: Entity<RouterOutlet>) -> Self {
        Self {
            title: None,
            items: Vec::new(),
            outlet,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a link that is active for the target and everything under it
    pub fn link(self, label: impl Into<SharedString>, target: impl Into<SharedString>) -> Self {
        self.item(label, target, LinkMatch::Prefix)
    }

    /// Add a link that is active only on the target itself
    pub fn exact_link(
        self,
        label: impl Into<SharedString>,
        target: impl Into<SharedString>,
    ) -> Self {
        self.item(label, target, LinkMatch::Exact)
    }

    fn item(
        mut self,
        label: impl Into<SharedString>,
        target: impl Into<SharedString>,
        mode: LinkMatch,
    ) -> Self {
        self.items.push(NavItem {
            label: label.into(),
            target: target.into(),
            mode,
        });
        self
    }

    fn links(&self) -> Vec<RouterLink> {
        self.items
            .iter()
            .map(|item| {
                router_link(item.target.clone(), item.label.clone())
                    .match_mode(item.mode)
                    .active_style(|link| link.font_weight(FontWeight::BOLD))
            })
            .collect()
    }
}

impl RenderOnce for NavShell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut bar = div()
            .flex()
            .items_center()
            .gap_4()
            .px_6()
            .h_12()
            .bg(rgb(0xffffff))
            .border_b_1()
            .border_color(rgb(0xe0e0e0));

        if let Some(title) = self.title.clone() {
            bar = bar.child(div().font_weight(FontWeight::BOLD).child(title));
        }

        div()
            .flex()
            .flex_col()
            .size_full()
            .child(bar.children(self.links()))
            .child(div().flex_1().child(self.outlet))
    }
}

// ============================================================================
// DefaultPages
// ============================================================================

/// Built-in pages
pub struct DefaultPages;

impl DefaultPages {
    /// Fallback page installed when no `*` route is configured
    pub fn not_found(_cx: &mut App, route: &RouteContext) -> AnyElement {
        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .size_full()
            .gap_2()
            .child(div().text_xl().font_weight(FontWeight::BOLD).child("404"))
            .child(format!("No page at '{}'", route.path()))
            .into_any_element()
    }

    /// Shown by an outlet when `init_router` was never called
    pub fn uninitialized() -> AnyElement {
        div()
            .child("Router not initialized. Call init_router() first.")
            .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{init_router_with, RouterOptions};
    use gpui::{AppContext, TestAppContext};

    fn mounted(generation: u64, path: &str) -> MountedRoute {
        MountedRoute {
            generation,
            path: path.to_string(),
            pattern: path.to_string(),
        }
    }

    fn init_blog(cx: &mut TestAppContext, initial: &str) {
        cx.update(|cx| {
            init_router_with(cx, &RouterOptions::new().initial_path(initial), |routes| {
                routes.add_route(Route::new("/", |_, _| div()));
                routes.add_route(Route::new("/about", |_, _| div()));
                routes.add_route(Route::new("/posts/:id", |_, _| div()));
            })
            .unwrap();
        });
    }

    #[test]
    fn test_outlet_sync_tracks_mounts() {
        let mut outlet = RouterOutlet {
            mounted: None,
            _subscriptions: Vec::new(),
        };

        assert!(outlet.sync(mounted(0, "/")));
        assert!(!outlet.sync(mounted(0, "/")));
        assert!(outlet.sync(mounted(1, "/about")));
        assert_eq!(outlet.mounted().map(|m| m.path.as_str()), Some("/about"));

        // Same path, new navigation: remount.
        assert!(outlet.sync(mounted(2, "/about")));
    }

    #[gpui::test]
    fn test_outlet_resolves_current_route(cx: &mut TestAppContext) {
        init_blog(cx, "/posts/42");
        let outlet = cx.new(RouterOutlet::new);

        let (pattern, id) = outlet.update(cx, |outlet, cx| {
            let (route, context) = outlet.resolve(cx).unwrap();
            (
                route.pattern().as_str().to_string(),
                context.param("id").map(str::to_string),
            )
        });
        assert_eq!(pattern, "/posts/:id");
        assert_eq!(id.as_deref(), Some("42"));

        cx.update(|cx| Navigator::push(cx, "/about"));
        let path = outlet.update(cx, |outlet, cx| {
            outlet.resolve(cx);
            outlet.mounted().map(|m| m.path.clone())
        });
        assert_eq!(path.as_deref(), Some("/about"));
    }

    #[gpui::test]
    fn test_outlet_without_router(cx: &mut TestAppContext) {
        let outlet = cx.new(RouterOutlet::new);
        let resolved = outlet.update(cx, |outlet, cx| outlet.resolve(cx).is_some());
        assert!(!resolved);
    }

    #[gpui::test]
    fn test_link_active_modes(cx: &mut TestAppContext) {
        init_blog(cx, "/about/x");

        cx.update(|cx| {
            assert!(RouterLink::new("/about").is_active(cx));
            assert!(!RouterLink::new("/about").exact().is_active(cx));
            assert!(RouterLink::new("/").is_active(cx));
            assert!(!RouterLink::new("/").exact().is_active(cx));
            assert!(!RouterLink::new("/posts").is_active(cx));
        });
    }

    #[gpui::test]
    fn test_link_request_carries_payload(cx: &mut TestAppContext) {
        init_blog(cx, "/");
        let link = RouterLink::new("/posts/2").payload(2u32);

        let request = link.request();
        assert_eq!(request.path, "/posts/2");

        cx.update(|cx| Navigator::push(cx, request));
        let payload = cx.read(|cx| {
            cx.global::<GlobalRouter>()
                .current_context()
                .payload_as::<u32>()
                .copied()
        });
        assert_eq!(payload, Some(2));
    }

    #[test]
    fn test_link_builder() {
        let link = router_link("/about", "About").exact();
        assert_eq!(link.target(), "/about");
        assert_eq!(link.mode(), LinkMatch::Exact);
        assert!(link.request().payload.is_none());
    }
}
