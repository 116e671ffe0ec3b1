//! User notifications (toasts).

use leptos::prelude::*;
use thaw::*;

/// Transient user-facing messages
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Shows notifications through the thaw toaster.
///
/// Must be created inside a `ToasterProvider`.
pub struct ToastNotifier {
    toaster: ToasterInjection,
}

impl ToastNotifier {
    pub fn new(toaster: ToasterInjection) -> Self {
        Self { toaster }
    }

    pub fn from_context() -> Self {
        Self::new(ToasterInjection::expect_context())
    }

    fn dispatch(&self, message: &str, intent: ToastIntent) {
        let text = message.to_string();
        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{text}</ToastTitle>
                    </Toast>
                }
            },
            ToastOptions::default().with_intent(intent),
        );
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: &str) {
        log::info!("{}", message);
        self.dispatch(message, ToastIntent::Success);
    }

    fn error(&self, message: &str) {
        log::warn!("{}", message);
        self.dispatch(message, ToastIntent::Error);
    }
}
