use gloo::storage::Storage;
use yew_router::Routable;

use crate::BaseRoute;

/// Debug logging switch, set with `localStorage.setItem("verbose", "true")`.
/// Only call this from callbacks and effects, never while rendering.
pub fn verbose() -> bool {
    gloo::storage::LocalStorage::get::<bool>("verbose").unwrap_or(false)
}

pub fn route_for(path: &str) -> BaseRoute {
    BaseRoute::recognize(path).unwrap_or(BaseRoute::NotFound)
}
