use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast--info",
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    entries: Vec<(u64, Toast)>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a transient notification.
pub fn push_toast(mut toasts: Signal<Toasts>, level: ToastLevel, message: &str) {
    let id = {
        let mut state = toasts.write();
        let id = state.next_id;
        state.next_id += 1;
        state.entries.push((
            id,
            Toast {
                level,
                message: message.to_string(),
            },
        ));
        id
    };
    schedule_expiry(toasts, id);
}

/// Auto-dismiss after a few seconds on the web; elsewhere toasts stay until
/// dismissed by hand.
#[cfg(target_arch = "wasm32")]
fn schedule_expiry(mut toasts: Signal<Toasts>, id: u64) {
    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        toasts.write().entries.retain(|(entry_id, _)| *entry_id != id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_expiry(_toasts: Signal<Toasts>, _id: u64) {}

/// Provider component that owns the toast list and renders the overlay.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        Toaster {}
        {children}
    }
}

#[component]
fn Toaster() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts.read().entries.clone();

    rsx! {
        div {
            class: "toaster",
            for (id, toast) in entries {
                div {
                    key: "{id}",
                    class: toast.level.class(),
                    span { class: "toast__message", "{toast.message}" }
                    button {
                        class: "toast__dismiss",
                        onclick: move |_| {
                            toasts.write().entries.retain(|(entry_id, _)| *entry_id != id);
                        },
                        "\u{00d7}"
                    }
                }
            }
        }
    }
}
