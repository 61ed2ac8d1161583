//! Current location and navigation payloads

use crate::params::QueryParams;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Opaque data attached to a navigation action
///
/// The payload travels next to the path, never inside it: it does not show up
/// in [`Location::href`] and is lost on [`reload`](crate::GlobalRouter::reload).
/// Cloning is cheap and clones share the same value.
///
/// ```
/// use gpui_waypoint::NavigationPayload;
///
/// #[derive(Debug, PartialEq)]
/// struct Post { id: u32, title: &'static str }
///
/// let payload = NavigationPayload::new(Post { id: 2, title: "Second Post" });
/// assert_eq!(payload.downcast_ref::<Post>().map(|p| p.id), Some(2));
/// assert!(payload.downcast_ref::<String>().is_none());
/// ```
#[derive(Clone)]
pub struct NavigationPayload {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl NavigationPayload {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Borrow the value if it is a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub fn is<T: Any>(&self) -> bool {
        (*self.value).type_id() == TypeId::of::<T>()
    }

    /// Name of the stored type, for diagnostics only
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether both handles point at the same value
    pub fn ptr_eq(&self, other: &NavigationPayload) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for NavigationPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NavigationPayload")
            .field(&self.type_name)
            .finish()
    }
}

/// Route-relevant part of a raw location: query and fragment removed
pub fn route_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    &raw[..end]
}

/// Where the router currently is
#[derive(Debug, Clone)]
pub struct Location {
    path: String,
    query: QueryParams,
    payload: Option<NavigationPayload>,
}

impl Location {
    /// Parse a raw location such as `/posts?page=2#top`
    ///
    /// The path is normalized to start with `/`. The fragment is dropped.
    pub fn parse(raw: &str) -> Self {
        let without_fragment = raw.split_once('#').map_or(raw, |(before, _)| before);
        let (path, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            path,
            query: QueryParams::parse(query),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Option<NavigationPayload>) -> Self {
        self.payload = payload;
        self
    }

    /// Path without query or fragment
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn payload(&self) -> Option<&NavigationPayload> {
        self.payload.as_ref()
    }

    pub(crate) fn take_payload(&mut self) -> Option<NavigationPayload> {
        self.payload.take()
    }

    /// Path plus query string; what a user would see in an address bar
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.to_query_string())
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::parse("/")
    }
}
