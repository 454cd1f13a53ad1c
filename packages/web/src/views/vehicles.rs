//! Vehicle list view with create/edit dialog.

use api::Vehicle;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, ToastOptions};
use ui::{format_vnd, ModalOverlay, VehicleDialog};

#[component]
pub fn Vehicles() -> Element {
    let mut vehicles = use_signal(Vec::<Vehicle>::new);
    let mut loading = use_signal(|| false);
    let mut show_dialog = use_signal(|| false);
    let mut dialog_vehicle = use_signal(|| Option::<Vehicle>::None);
    let mut delete_target = use_signal(|| Option::<Vehicle>::None);
    let toast = use_toast();

    let load = move || {
        spawn(async move {
            loading.set(true);
            match api::vehicle::list_vehicles().await {
                Ok(list) => vehicles.set(list),
                Err(e) => {
                    vehicles.set(Vec::new());
                    toast.error(format!("Cannot load vehicles: {e}"), ToastOptions::new());
                }
            }
            loading.set(false);
        });
    };

    use_effect(move || {
        load();
    });

    let handle_confirm_delete = move |_| {
        let Some(target) = delete_target.peek().clone() else {
            return;
        };
        spawn(async move {
            match api::vehicle::delete_vehicle(&target.id).await {
                Ok(()) => {
                    toast.success(format!("Deleted \"{}\"", target.name), ToastOptions::new());
                    delete_target.set(None);
                    load();
                }
                Err(e) => {
                    toast.error(format!("Cannot delete the vehicle: {e}"), ToastOptions::new());
                    delete_target.set(None);
                }
            }
        });
    };

    rsx! {
        div {
            class: "view",

            header {
                class: "view-header",
                h1 { "Vehicles" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        dialog_vehicle.set(None);
                        show_dialog.set(true);
                    },
                    "New vehicle"
                }
            }

            if loading() {
                div { class: "view-loading", "Loading…" }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Type" }
                        th { "Plate" }
                        th { "Price / day" }
                        th { "Location" }
                        th { "" }
                    }
                }
                tbody {
                    for vehicle in vehicles() {
                        tr {
                            key: "{vehicle.id}",
                            td { class: "cell-strong", "{vehicle.name}" }
                            td { "{vehicle.vehicle_type}" }
                            td { "{vehicle.license_plate}" }
                            td { {format_vnd(vehicle.price_per_day)} }
                            td { "{vehicle.location}" }
                            td {
                                class: "cell-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let vehicle = vehicle.clone();
                                        move |_| {
                                            dialog_vehicle.set(Some(vehicle.clone()));
                                            show_dialog.set(true);
                                        }
                                    },
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let vehicle = vehicle.clone();
                                        move |_| delete_target.set(Some(vehicle.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            if vehicles().is_empty() && !loading() {
                div { class: "view-empty", "No vehicles yet" }
            }
        }

        if show_dialog() {
            ModalOverlay {
                title: if dialog_vehicle().is_some() { "Edit vehicle".to_string() } else { "New vehicle".to_string() },
                on_close: move |_| show_dialog.set(false),
                VehicleDialog {
                    vehicle: dialog_vehicle(),
                    on_saved: move |_| {
                        show_dialog.set(false);
                        load();
                    },
                    on_cancel: move |_| show_dialog.set(false),
                }
            }
        }

        if let Some(target) = delete_target() {
            ModalOverlay {
                title: "Delete vehicle",
                on_close: move |_| delete_target.set(None),
                div {
                    class: "dialog-body",
                    p { "Delete \"{target.name}\"? This cannot be undone." }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: handle_confirm_delete,
                            "Delete"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| delete_target.set(None),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
