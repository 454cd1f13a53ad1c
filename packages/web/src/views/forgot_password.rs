//! Two-step password reset: request an OTP by email, then redeem it.

use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Input, Label, ToastOptions};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ResetStep {
    Email,
    Reset,
}

/// The OTP is always a 6-digit numeric code.
fn validate_otp(otp: &str) -> Result<(), String> {
    if otp.len() != 6 || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err("The code must be exactly 6 digits".to_string());
    }
    Ok(())
}

fn validate_new_password(password: &str, confirm: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("A new password is required".to_string());
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Forgot-password page component.
///
/// Step transitions only happen on successful service calls; every local
/// guard fires before any network traffic.
#[component]
pub fn ForgotPassword() -> Element {
    let nav = use_navigator();
    let toast = use_toast();
    let mut step = use_signal(|| ResetStep::Email);
    let mut email = use_signal(String::new);
    let mut otp = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_send_otp = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            if e.is_empty() {
                error.set(Some("Email is required".to_string()));
                return;
            }

            loading.set(true);
            match api::auth::send_otp(&e).await {
                Ok(()) => {
                    toast.info(format!("A reset code was sent to {e}"), ToastOptions::new());
                    step.set(ResetStep::Reset);
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    let handle_reset = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let code = otp().trim().to_string();
            if let Err(message) = validate_otp(&code) {
                error.set(Some(message));
                return;
            }
            if let Err(message) = validate_new_password(&password(), &confirm_password()) {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            let e = email().trim().to_string();
            match api::auth::reset_password(&e, &code, &password()).await {
                Ok(()) => {
                    toast.success("Password updated, sign in again".to_string(), ToastOptions::new());
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    // Back to step one keeps the email, drops everything entered since.
    let handle_back = move |_| {
        otp.set(String::new());
        password.set(String::new());
        confirm_password.set(String::new());
        error.set(None);
        step.set(ResetStep::Email);
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Reset password" }

            if step() == ResetStep::Email {
                p { class: "auth-subtitle", "Enter your email to receive a reset code" }

                form {
                    class: "auth-form",
                    onsubmit: handle_send_otp,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    Input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Sending…" } else { "Send code" }
                    }
                }
            } else {
                p { class: "auth-subtitle", "Enter the 6-digit code sent to {email()}" }

                form {
                    class: "auth-form",
                    onsubmit: handle_reset,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "reset-otp", "Code" }
                        Input {
                            id: "reset-otp",
                            placeholder: "123456",
                            value: otp(),
                            oninput: move |evt: FormEvent| otp.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "reset-password", "New password" }
                        Input {
                            id: "reset-password",
                            r#type: "password",
                            placeholder: "At least 8 characters",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "reset-confirm", "Confirm password" }
                        Input {
                            id: "reset-confirm",
                            r#type: "password",
                            placeholder: "Repeat the new password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Updating…" } else { "Reset password" }
                    }

                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_back,
                        "Use a different email"
                    }
                }
            }

            p {
                class: "auth-footer",
                Link { to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_must_be_exactly_six_digits() {
        assert!(validate_otp("123456").is_ok());
        assert!(validate_otp("12345").is_err());
        assert!(validate_otp("1234567").is_err());
        assert!(validate_otp("12a456").is_err());
        assert!(validate_otp("").is_err());
    }

    #[test]
    fn new_password_rules() {
        assert!(validate_new_password("", "").is_err());
        assert!(validate_new_password("short", "short").is_err());
        assert!(validate_new_password("longenough", "different").is_err());
        assert!(validate_new_password("longenough", "longenough").is_ok());
    }
}
