//! Authenticated shell: sidebar navigation around the admin views.

use dioxus::prelude::*;
use ui::icons::{FaCarSide, FaFileSignature, FaMoneyBillTransfer, FaNewspaper};
use ui::{use_auth, Icon, LogoutButton};

use crate::Route;

/// Layout wrapper for every authenticated route.
///
/// While the session probe is still running it shows a splash; once the
/// probe resolves unauthenticated it replaces the location with the login
/// page. Children render through the router outlet.
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().checking {
        return rsx! {
            div { class: "splash", "Checking session…" }
        };
    }

    if !auth().authenticated {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "admin-shell",

            aside {
                class: "admin-sidebar",
                div { class: "admin-brand", "Rental Admin" }

                nav {
                    class: "admin-nav",
                    Link {
                        to: Route::Transactions {},
                        class: "nav-link",
                        active_class: "active",
                        Icon { icon: FaMoneyBillTransfer, width: 16, height: 16 }
                        "Transactions"
                    }
                    Link {
                        to: Route::Blogs {},
                        class: "nav-link",
                        active_class: "active",
                        Icon { icon: FaNewspaper, width: 16, height: 16 }
                        "Posts"
                    }
                    Link {
                        to: Route::Vehicles {},
                        class: "nav-link",
                        active_class: "active",
                        Icon { icon: FaCarSide, width: 16, height: 16 }
                        "Vehicles"
                    }
                    Link {
                        to: Route::Rentals {},
                        class: "nav-link",
                        active_class: "active",
                        Icon { icon: FaFileSignature, width: 16, height: 16 }
                        "Rentals"
                    }
                }

                div {
                    class: "admin-sidebar-footer",
                    LogoutButton { class: "btn btn-outline" }
                }
            }

            main {
                class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}
