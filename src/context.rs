//! Application Context
//!
//! Shared state provided via Leptos Context API: the current view and the
//! toast queue. Also the browser-side navigator and notifier the admin form
//! submits through.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use food_form::{Navigator, Notifier, LISTING_PATH};

pub const ADMIN_PATH: &str = "/admin";

/// How long a toast stays on screen
const TOAST_MS: u32 = 3_000;

/// Views reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Menu,
    Admin,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Menu,
            ADMIN_PATH => Route::Admin,
            _ => Route::NotFound,
        }
    }

    /// Route for the page the browser is currently on
    pub fn current() -> Self {
        let path = window().location().pathname().unwrap_or_else(|_| LISTING_PATH.to_string());
        Self::from_path(&path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view - read
    pub route: ReadSignal<Route>,
    /// Current view - write
    set_route: WriteSignal<Route>,
    /// Visible toasts, oldest first - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Visible toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(initial: Route) -> Self {
        let (route, set_route) = signal(initial);
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            route,
            set_route,
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
        }
    }

    /// Push a history entry and switch views
    pub fn go_to(&self, path: &str) {
        let pushed = window()
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if let Err(e) = pushed {
            log::warn!("[APP] history push to {} failed: {:?}", path, e);
        }
        self.set_route.set(Route::from_path(path));
    }

    /// Re-read the view from the address bar (back/forward)
    pub fn sync_route(&self) {
        self.set_route.set(Route::current());
    }

    /// Show a toast and schedule its removal
    pub fn toast(&self, kind: ToastKind, message: &str) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));
        self.set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                message: message.to_string(),
            })
        });

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            ctx.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Navigator for AppContext {
    fn navigate(&self, path: &str) {
        self.go_to(path);
    }
}

impl Notifier for AppContext {
    fn success(&self, message: &str) {
        self.toast(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.toast(ToastKind::Error, message);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
