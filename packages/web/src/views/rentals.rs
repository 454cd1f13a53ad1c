//! Rental list view with create/edit dialog.

use api::Rental;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, ToastOptions};
use ui::{format_vnd, ModalOverlay, RentalDialog};

#[component]
pub fn Rentals() -> Element {
    let mut rentals = use_signal(Vec::<Rental>::new);
    let mut loading = use_signal(|| false);
    let mut show_dialog = use_signal(|| false);
    let mut dialog_rental = use_signal(|| Option::<Rental>::None);
    let toast = use_toast();

    let load = move || {
        spawn(async move {
            loading.set(true);
            match api::rental::list_rentals().await {
                Ok(list) => rentals.set(list),
                Err(e) => {
                    rentals.set(Vec::new());
                    toast.error(format!("Cannot load rentals: {e}"), ToastOptions::new());
                }
            }
            loading.set(false);
        });
    };

    use_effect(move || {
        load();
    });

    rsx! {
        div {
            class: "view",

            header {
                class: "view-header",
                h1 { "Rentals" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        dialog_rental.set(None);
                        show_dialog.set(true);
                    },
                    "New rental"
                }
            }

            if loading() {
                div { class: "view-loading", "Loading…" }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        th { "User" }
                        th { "Vehicle" }
                        th { "From" }
                        th { "To" }
                        th { "Total" }
                        th { "" }
                    }
                }
                tbody {
                    for rental in rentals() {
                        tr {
                            key: "{rental.id}",
                            td { "{rental.user_id}" }
                            td { "{rental.vehicle_id}" }
                            td { {rental.start_date.format("%d/%m/%Y").to_string()} }
                            td { {rental.end_date.format("%d/%m/%Y").to_string()} }
                            td { class: "cell-strong", {format_vnd(rental.total_fee)} }
                            td {
                                class: "cell-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let rental = rental.clone();
                                        move |_| {
                                            dialog_rental.set(Some(rental.clone()));
                                            show_dialog.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                            }
                        }
                    }
                }
            }

            if rentals().is_empty() && !loading() {
                div { class: "view-empty", "No rentals yet" }
            }
        }

        if show_dialog() {
            ModalOverlay {
                title: if dialog_rental().is_some() { "Edit rental".to_string() } else { "New rental".to_string() },
                on_close: move |_| show_dialog.set(false),
                RentalDialog {
                    rental: dialog_rental(),
                    on_saved: move |_| {
                        show_dialog.set(false);
                        load();
                    },
                    on_cancel: move |_| show_dialog.set(false),
                }
            }
        }
    }
}
