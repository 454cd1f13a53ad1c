use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::AuthProvider;
use views::{
    AdminLayout, BlogEdit, BlogNew, Blogs, ForgotPassword, Login, Rentals, Transactions, Vehicles,
};

mod export;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[layout(AdminLayout)]
        #[route("/transactions")]
        Transactions {},
        #[route("/blogs")]
        Blogs {},
        #[route("/blogs/new")]
        BlogNew {},
        #[route("/blogs/:id/edit")]
        BlogEdit { id: String },
        #[route("/vehicles")]
        Vehicles {},
        #[route("/rentals")]
        Rentals {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` once the session probe has resolved.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().checking {
        if auth().authenticated {
            nav.replace(Route::Transactions {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
