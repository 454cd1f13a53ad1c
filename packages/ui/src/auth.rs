//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

/// Session state derived from the bootstrap refresh round trip.
///
/// The session token is an httpOnly cookie the page can never read, so
/// these two flags are the whole client-side picture of the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuthState {
    pub authenticated: bool,
    pub checking: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            authenticated: false,
            checking: true,
        }
    }
}

/// Get the current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Flip state after an explicit login succeeds.
pub fn mark_authenticated(mut auth: Signal<AuthState>) {
    auth.set(AuthState {
        authenticated: true,
        checking: false,
    });
}

/// Flip state after logout (or a rejected session).
pub fn mark_logged_out(mut auth: Signal<AuthState>) {
    auth.set(AuthState {
        authenticated: false,
        checking: false,
    });
}

/// Provider component that resolves session state once on app start.
///
/// Issues a single silent refresh-token call on mount: a 2xx answer means
/// an authenticated session exists, any failure (non-2xx or network) means
/// it does not. The probe is terminal — it is not retried.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || async move {
        match api::auth::refresh_token().await {
            Ok(()) => {
                auth_state.set(AuthState {
                    authenticated: true,
                    checking: false,
                });
            }
            Err(e) => {
                tracing::warn!("session refresh failed: {e}");
                auth_state.set(AuthState {
                    authenticated: false,
                    checking: false,
                });
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that ends the session and returns to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    let onclick = move |_| async move {
        match api::auth::logout().await {
            Ok(()) => {
                mark_logged_out(auth);
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
            }
            Err(e) => {
                tracing::error!("logout failed: {e}");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_starts_checking_and_unauthenticated() {
        let state = AuthState::default();
        assert!(state.checking);
        assert!(!state.authenticated);
    }
}
