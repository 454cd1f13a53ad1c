//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod components;

mod auth;
pub use auth::{mark_authenticated, mark_logged_out, use_auth, AuthProvider, AuthState, LogoutButton};

mod debounce;
pub use debounce::use_debounced;

mod slug;
pub use slug::slugify;

mod money;
pub use money::format_vnd;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod vehicle_dialog;
pub use vehicle_dialog::{VehicleDialog, VehicleDraft};

mod rental_dialog;
pub use rental_dialog::{RentalDialog, RentalDraft};
