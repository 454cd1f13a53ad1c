//! # API crate — typed service layer for the rental admin dashboard
//!
//! Every call the dashboard makes against the remote REST API goes through
//! this crate. Each domain module exposes one async function per remote
//! operation; all of them funnel through the shared request plumbing in
//! [`client`], which attaches the session cookie, unwraps the standard
//! `{data, message, statusCode}` response envelope, and maps failures into
//! [`ApiError`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Request plumbing: envelope unwrap, credential passthrough, error mapping |
//! | [`models`] | Wire records (`Blog`, `Vehicle`, `Rental`, `Transaction`, …) |
//! | [`auth`] | Login/logout, silent session refresh, OTP password reset |
//! | [`blog`] | Blog post CRUD |
//! | [`transaction`] | Filtered, paginated bank-transaction listing |
//! | [`vehicle`] | Vehicle CRUD |
//! | [`rental`] | Rental CRUD |
//! | [`media`] | Image upload (browser only) |
//!
//! The crate compiles on every target: on wasm32 the client speaks browser
//! `fetch` through `gloo-net`; elsewhere the request helpers are thin stubs
//! that return [`ApiError::Unsupported`] so pure logic stays testable with
//! plain `cargo test`.

pub mod auth;
pub mod blog;
pub mod client;
pub mod media;
pub mod models;
pub mod rental;
pub mod transaction;
pub mod vehicle;

pub use client::ApiError;
pub use models::{
    Blog, BlogPayload, BlogSummary, Page, Rental, RentalPayload, Transaction, TransactionType,
    UploadedImage, Vehicle, VehiclePayload,
};
pub use transaction::TransactionFilter;
