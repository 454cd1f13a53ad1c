//! Authentication operations.
//!
//! The session lives in an httpOnly cookie set by the server on login and
//! refresh; the client never reads it. Session state is inferred purely
//! from whether these round trips succeed.

use serde::Serialize;

use crate::client::{self, ApiError};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendOtpRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest<'a> {
    email: &'a str,
    otp: &'a str,
    new_password: &'a str,
}

/// `POST /auth/login` — on success the server sets the session cookie.
pub async fn login(email: &str, password: &str) -> Result<(), ApiError> {
    client::post_unit("/auth/login", &LoginRequest { email, password }).await
}

/// `POST /auth/logout` — clears the server-side session.
pub async fn logout() -> Result<(), ApiError> {
    client::post_empty("/auth/logout").await
}

/// `POST /auth/refresh-token` — the silent session probe issued once at
/// app start. Success means an authenticated session exists.
pub async fn refresh_token() -> Result<(), ApiError> {
    client::post_empty("/auth/refresh-token").await
}

/// `POST /auth/otp` — mail a one-time code for password reset.
pub async fn send_otp(email: &str) -> Result<(), ApiError> {
    client::post_unit("/auth/otp", &SendOtpRequest { email }).await
}

/// `POST /auth/forgot-password` — redeem the OTP for a new password.
pub async fn reset_password(email: &str, otp: &str, new_password: &str) -> Result<(), ApiError> {
    client::post_unit(
        "/auth/forgot-password",
        &ResetPasswordRequest {
            email,
            otp,
            new_password,
        },
    )
    .await
}
