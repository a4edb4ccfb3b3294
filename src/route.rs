use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Dashboard,
    Transactions,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/dashboard" => Route::Dashboard,
            "/transactions" => Route::Transactions,
            _ => Route::Root,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Transactions => "/transactions",
        }
    }
}

/// Decides which view a request actually lands on. The result is never
/// `Route::Root`.
pub fn gate(requested: Route, authenticated: bool) -> Route {
    match (requested, authenticated) {
        (Route::Login | Route::Root, true) => Route::Dashboard,
        (_, false) => Route::Login,
        (route, true) => route,
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn push(route: Route) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if history
            .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
            .is_err()
        {
            warn!(path = route.path(), "history push failed");
        }
    }
}

/// Rewrites the address bar when it disagrees with the view being shown.
pub fn sync(route: Route) {
    if current_path().trim_end_matches('/') == route.path() {
        return;
    }
    debug!(path = route.path(), "redirecting");
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()));
    }
}

/// Keeps back/forward navigation flowing into the app. Dropping the listener
/// unregisters it.
pub struct PopStateListener {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl PopStateListener {
    pub fn register(on_change: Callback<Route>) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            on_change.emit(Route::from_path(&current_path()));
        });
        window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(PopStateListener { closure })
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "popstate",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
