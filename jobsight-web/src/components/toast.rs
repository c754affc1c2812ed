use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::*;

#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

/// How long a toast stays visible before auto-dismissing.
#[cfg(target_arch = "wasm32")]
const DISMISS_MS: u32 = 4000;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Confirmation of a completed action.
    Success,
    /// A failure the user should read.
    Error,
}

/// A single queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id used for dismissal.
    pub id: u32,
    /// Severity.
    pub level: ToastLevel,
    /// Message shown to the user.
    pub message: String,
}

/// Process-wide toast queue.
#[derive(Default, Clone, PartialEq, Store)]
pub struct ToastStore {
    /// Currently visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    next_id: u32,
}

/// Queue a success toast.
pub fn toast_success(message: impl Into<String>) {
    push_toast(ToastLevel::Success, message.into());
}

/// Queue an error toast.
pub fn toast_error(message: impl Into<String>) {
    push_toast(ToastLevel::Error, message.into());
}

// The global dispatch only exists in the browser build; toasts are inert
// under native test compilation.
#[cfg(target_arch = "wasm32")]
fn push_toast(level: ToastLevel, message: String) {
    let dispatch = Dispatch::<ToastStore>::global();
    let mut id = 0;
    dispatch.reduce_mut(|store| {
        id = store.next_id;
        store.next_id = store.next_id.wrapping_add(1);
        store.toasts.push(Toast { id, level, message });
    });

    Timeout::new(DISMISS_MS, move || dismiss(id)).forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn push_toast(_level: ToastLevel, _message: String) {}

#[cfg(target_arch = "wasm32")]
fn dismiss(id: u32) {
    Dispatch::<ToastStore>::global().reduce_mut(|store| store.toasts.retain(|t| t.id != id));
}

/// Renders the toast queue; mounted once at the application root.
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let (store, dispatch) = use_store::<ToastStore>();

    html! {
        <div class="toast toast-top toast-end z-50">
            { for store.toasts.iter().map(|toast| {
                let id = toast.id;
                let onclick = dispatch.reduce_mut_callback(move |store| {
                    store.toasts.retain(|t| t.id != id);
                });
                let alert_class = match toast.level {
                    ToastLevel::Success => "alert alert-success shadow-lg",
                    ToastLevel::Error => "alert alert-error shadow-lg",
                };
                html! {
                    <div class={alert_class} key={toast.id}>
                        <span>{ toast.message.clone() }</span>
                        <button class="btn btn-ghost btn-xs" {onclick}>
                            <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_levels_are_distinct() {
        assert_ne!(ToastLevel::Success, ToastLevel::Error);
    }

    #[test]
    fn test_store_retains_other_toasts_on_dismiss() {
        let mut store = ToastStore::default();
        for (id, message) in [(0, "first"), (1, "second")] {
            store.toasts.push(Toast {
                id,
                level: ToastLevel::Success,
                message: message.to_string(),
            });
        }
        store.toasts.retain(|t| t.id != 0);
        assert_eq!(store.toasts.len(), 1);
        assert_eq!(store.toasts[0].message, "second");
    }
}
