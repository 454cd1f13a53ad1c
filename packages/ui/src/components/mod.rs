//! Small in-crate widget set: buttons, form inputs, and the toast layer.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label};

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider, Toasts};
