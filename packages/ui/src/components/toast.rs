//! Transient notification stack.
//!
//! `ToastProvider` owns the visible toasts and renders them above the app;
//! any component can push one through [`use_toast`].

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ToastItem {
    id: u64,
    level: ToastLevel,
    message: String,
}

/// Per-toast settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastOptions {
    duration_ms: Option<u32>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

const DEFAULT_DURATION_MS: u32 = 4000;

/// Handle for pushing toasts; obtained via [`use_toast`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<ToastItem>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.push(ToastLevel::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.push(ToastLevel::Error, message, options);
    }

    pub fn info(&self, message: String, options: ToastOptions) {
        self.push(ToastLevel::Info, message, options);
    }

    fn push(&self, level: ToastLevel, message: String, options: ToastOptions) {
        let mut items = self.items;
        let mut next_id = self.next_id;
        let id = {
            let mut counter = next_id.write();
            *counter = counter.wrapping_add(1);
            *counter
        };
        items.write().push(ToastItem { id, level, message });

        let duration = options.duration_ms.unwrap_or(DEFAULT_DURATION_MS);
        spawn(async move {
            dismiss_delay(duration).await;
            items.write().retain(|toast| toast.id != id);
        });
    }
}

#[cfg(target_arch = "wasm32")]
async fn dismiss_delay(duration_ms: u32) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(duration_ms as u64)).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn dismiss_delay(_duration_ms: u32) {}

/// Get the toast handle from context.
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Wrap the app once; renders the toast stack above the children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        div {
            class: "toast-stack",
            for toast in items() {
                div {
                    key: "{toast.id}",
                    class: "{toast.level.class()}",
                    "{toast.message}"
                }
            }
        }
    }
}
