//! Blog demo: route table, active links and navigation payloads
//!
//! Run with `RUST_LOG=gpui_waypoint=debug cargo run --example blog` to watch
//! navigations and outlet mounts.

use gpui::prelude::*;
use gpui::*;
use gpui_waypoint::*;

#[derive(Debug, Clone)]
struct Post {
    id: u32,
    title: &'static str,
    body: &'static str,
}

const POSTS: [Post; 3] = [
    Post {
        id: 1,
        title: "First Post",
        body: "Routes are tried in the order they were registered.",
    },
    Post {
        id: 2,
        title: "Second Post",
        body: "A payload travels with the navigation, not inside the path.",
    },
    Post {
        id: 3,
        title: "Third Post",
        body: "Every table ends with a catch-all route.",
    },
];

fn main() {
    env_logger::init();

    Application::new().run(|cx: &mut App| {
        let configured = init_router(cx, |routes| {
            routes.add_route(Route::new("/", |_, _| home_page()).name("home"));
            routes.add_route(Route::new("/about", |_, _| about_page()).name("about"));
            routes.add_route(Route::new("/contact", |_, _| contact_page()).name("contact"));
            routes.add_route(Route::new("/posts", |_, _| posts_page()).name("posts"));
            routes.add_route(Route::new("/posts/:id", post_detail).name("post.detail"));
            routes.add_not_found(not_found_page);
        });
        if let Err(e) = configured {
            eprintln!("Invalid route table: {}", e);
            cx.quit();
            return;
        }

        let bounds = Bounds::centered(None, size(px(900.), px(600.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Waypoint Blog".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_, cx| cx.new(BlogApp::new),
        )
        .unwrap();

        cx.activate(true);
    });
}

struct BlogApp {
    outlet: Entity<RouterOutlet>,
}

impl BlogApp {
    fn new(cx: &mut Context<'_, Self>) -> Self {
        // Re-render the shell too, so link highlighting follows navigation.
        cx.observe_global::<GlobalRouter>(|_, cx| cx.notify()).detach();
        Self {
            outlet: cx.new(RouterOutlet::new),
        }
    }
}

impl Render for BlogApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<'_, Self>) -> impl IntoElement {
        div().size_full().bg(rgb(0xf5f5f5)).child(
            NavShell::new(self.outlet.clone())
                .title("Waypoint Blog")
                .exact_link("Home", "/")
                .link("Posts", "/posts")
                .link("About", "/about")
                .link("Contact", "/contact")
                .link("Broken link", "/unknown/x"),
        )
    }
}

fn home_page() -> impl IntoElement {
    page("Home", "Pick a post from the Posts page.")
}

fn about_page() -> impl IntoElement {
    page("About", "A small blog that shows off the router.")
}

fn contact_page() -> impl IntoElement {
    page("Contact", "Write to us at hello@example.com.")
}

fn posts_page() -> impl IntoElement {
    let mut list = div().flex().flex_col().gap_2();
    for post in POSTS {
        let target = format!("/posts/{}", post.id);
        let title = post.title;
        list = list.child(
            RouterLink::new(target)
                .payload(post)
                .child(div().px_4().py_2().rounded_md().bg(rgb(0xffffff)).child(title)),
        );
    }

    div()
        .flex()
        .flex_col()
        .p_8()
        .gap_4()
        .child(heading("Posts"))
        .child(list)
}

fn post_detail(_cx: &mut App, route: &RouteContext) -> impl IntoElement {
    let id = route.param("id").unwrap_or("?").to_string();

    match route.payload_as::<Post>() {
        Some(post) => page(post.title, post.body).child(
            div()
                .text_sm()
                .text_color(rgb(0x666666))
                .child(format!("Post #{}", id)),
        ),
        // Reached by typing the path or after a reload: nothing was handed over.
        None => page(
            "Post",
            "This post was opened directly, so only its id is known.",
        )
        .child(
            div()
                .text_sm()
                .text_color(rgb(0x666666))
                .child(format!("Post #{}", id)),
        ),
    }
}

fn not_found_page(_cx: &mut App, route: &RouteContext) -> impl IntoElement {
    page("Not Found", "Nothing is registered at this path.").child(
        div()
            .text_sm()
            .text_color(rgb(0xf44336))
            .child(route.path().to_string()),
    )
}

fn heading(text: impl Into<SharedString>) -> Div {
    div()
        .text_3xl()
        .font_weight(FontWeight::BOLD)
        .text_color(rgb(0x212121))
        .child(text.into())
}

fn page(title: &'static str, description: &'static str) -> Div {
    div()
        .flex()
        .flex_col()
        .p_8()
        .gap_4()
        .child(heading(title))
        .child(div().text_color(rgb(0x666666)).child(description))
}
