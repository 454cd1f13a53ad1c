//! Rental create/edit dialog.
//!
//! The total fee is never entered by hand: it is the sum of the three fee
//! components, recomputed reactively whenever any of them changes.

use api::{Rental, RentalPayload};
use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label, ToastOptions};
use crate::money::format_vnd;

/// Draft state behind the dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RentalDraft {
    pub id: Option<String>,
    pub user_id: String,
    pub vehicle_id: String,
    /// Date inputs as entered (`YYYY-MM-DD`).
    pub start_date: String,
    pub end_date: String,
    pub rental_fee: i64,
    pub insurance_fee: i64,
    pub vat_fee: i64,
    pub images: Vec<String>,
    pub terms: Vec<String>,
}

impl RentalDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rental(rental: &Rental) -> Self {
        Self {
            id: Some(rental.id.clone()),
            user_id: rental.user_id.clone(),
            vehicle_id: rental.vehicle_id.clone(),
            start_date: rental.start_date.to_string(),
            end_date: rental.end_date.to_string(),
            rental_fee: rental.rental_fee,
            insurance_fee: rental.insurance_fee,
            vat_fee: rental.vat_fee,
            images: rental.images.clone(),
            terms: rental.terms.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// The derived total: always the exact sum of the three components.
    pub fn total_fee(&self) -> i64 {
        self.rental_fee + self.insurance_fee + self.vat_fee
    }

    pub fn add_image(&mut self, url: &str) {
        push_unique(&mut self.images, url);
    }

    pub fn remove_image(&mut self, url: &str) {
        self.images.retain(|u| u != url);
    }

    pub fn add_term(&mut self, term: &str) {
        push_unique(&mut self.terms, term);
    }

    pub fn remove_term(&mut self, term: &str) {
        self.terms.retain(|t| t != term);
    }

    /// Validate and build the request body in one pass.
    pub fn to_payload(&self) -> Result<RentalPayload, String> {
        if self.user_id.trim().is_empty() {
            return Err("User is required".to_string());
        }
        if self.vehicle_id.trim().is_empty() {
            return Err("Vehicle is required".to_string());
        }
        let start_date = parse_date(&self.start_date, "start date")?;
        let end_date = parse_date(&self.end_date, "end date")?;
        if end_date < start_date {
            return Err("End date must not be before the start date".to_string());
        }
        if self.rental_fee < 0 || self.insurance_fee < 0 || self.vat_fee < 0 {
            return Err("Fees cannot be negative".to_string());
        }
        Ok(RentalPayload {
            user_id: self.user_id.trim().to_string(),
            vehicle_id: self.vehicle_id.trim().to_string(),
            start_date,
            end_date,
            rental_fee: self.rental_fee,
            insurance_fee: self.insurance_fee,
            vat_fee: self.vat_fee,
            total_fee: self.total_fee(),
            images: self.images.clone(),
            terms: self.terms.clone(),
        })
    }
}

fn parse_date(value: &str, label: &str) -> Result<NaiveDate, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("A valid {label} is required"))
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Create/edit dialog for rentals.
#[component]
pub fn RentalDialog(
    rental: Option<Rental>,
    on_saved: EventHandler<Rental>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(move || {
        rental
            .as_ref()
            .map(RentalDraft::from_rental)
            .unwrap_or_else(RentalDraft::new)
    });
    let mut image_input = use_signal(String::new);
    let mut term_input = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let toast = use_toast();

    let editing = draft.peek().is_editing();
    let total = use_memo(move || draft().total_fee());

    let mut add_image = move |_| {
        draft.write().add_image(&image_input());
        image_input.set(String::new());
    };

    let mut add_term = move |_| {
        draft.write().add_term(&term_input());
        term_input.set(String::new());
    };

    let handle_submit = move |_| {
        let payload = match draft.peek().to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        spawn(async move {
            saving.set(true);
            error.set(None);
            let id = draft.peek().id.clone();
            let result = match id.as_deref() {
                Some(id) => api::rental::update_rental(id, &payload).await,
                None => api::rental::create_rental(&payload).await,
            };
            match result {
                Ok(saved) => {
                    toast.success("Rental saved".to_string(), ToastOptions::new());
                    draft.set(RentalDraft::new());
                    on_saved.call(saved);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "dialog-body",

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    Label { html_for: "rental-user", "User ID" }
                    Input {
                        id: "rental-user",
                        value: draft().user_id,
                        oninput: move |evt: FormEvent| draft.write().user_id = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "rental-vehicle", "Vehicle ID" }
                    Input {
                        id: "rental-vehicle",
                        value: draft().vehicle_id,
                        oninput: move |evt: FormEvent| draft.write().vehicle_id = evt.value(),
                    }
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    Label { html_for: "rental-start", "Start date" }
                    Input {
                        id: "rental-start",
                        r#type: "date",
                        value: draft().start_date,
                        oninput: move |evt: FormEvent| draft.write().start_date = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "rental-end", "End date" }
                    Input {
                        id: "rental-end",
                        r#type: "date",
                        value: draft().end_date,
                        oninput: move |evt: FormEvent| draft.write().end_date = evt.value(),
                    }
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    Label { html_for: "rental-fee", "Rental fee (VNĐ)" }
                    Input {
                        id: "rental-fee",
                        r#type: "number",
                        min: "0",
                        value: draft().rental_fee.to_string(),
                        oninput: move |evt: FormEvent| {
                            draft.write().rental_fee = evt.value().parse().unwrap_or(0);
                        },
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "rental-insurance", "Insurance (VNĐ)" }
                    Input {
                        id: "rental-insurance",
                        r#type: "number",
                        min: "0",
                        value: draft().insurance_fee.to_string(),
                        oninput: move |evt: FormEvent| {
                            draft.write().insurance_fee = evt.value().parse().unwrap_or(0);
                        },
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "rental-vat", "VAT (VNĐ)" }
                    Input {
                        id: "rental-vat",
                        r#type: "number",
                        min: "0",
                        value: draft().vat_fee.to_string(),
                        oninput: move |evt: FormEvent| {
                            draft.write().vat_fee = evt.value().parse().unwrap_or(0);
                        },
                    }
                }
            }

            div {
                class: "fee-total",
                span { "Total" }
                strong { "{format_vnd(total())}" }
            }

            div {
                class: "form-field",
                Label { html_for: "rental-image", "Image URLs" }
                div {
                    class: "form-inline",
                    Input {
                        id: "rental-image",
                        placeholder: "https://…",
                        value: image_input(),
                        oninput: move |evt: FormEvent| image_input.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| add_image(()),
                        "Add"
                    }
                }
                div {
                    class: "chip-list",
                    for url in draft().images {
                        span {
                            key: "{url}",
                            class: "chip",
                            "{url}"
                            button {
                                class: "chip-remove",
                                onclick: {
                                    let url = url.clone();
                                    move |_| draft.write().remove_image(&url)
                                },
                                "×"
                            }
                        }
                    }
                }
            }

            div {
                class: "form-field",
                Label { html_for: "rental-term", "Terms" }
                div {
                    class: "form-inline",
                    Input {
                        id: "rental-term",
                        placeholder: "Return with a full tank",
                        value: term_input(),
                        oninput: move |evt: FormEvent| term_input.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| add_term(()),
                        "Add"
                    }
                }
                div {
                    class: "chip-list",
                    for term in draft().terms {
                        span {
                            key: "{term}",
                            class: "chip",
                            "{term}"
                            button {
                                class: "chip-remove",
                                onclick: {
                                    let term = term.clone();
                                    move |_| draft.write().remove_term(&term)
                                },
                                "×"
                            }
                        }
                    }
                }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: saving(),
                    onclick: handle_submit,
                    if saving() {
                        "Saving…"
                    } else if editing {
                        "Save changes"
                    } else {
                        "Create rental"
                    }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RentalDraft {
        RentalDraft {
            user_id: "u1".into(),
            vehicle_id: "v1".into(),
            start_date: "2024-04-01".into(),
            end_date: "2024-04-03".into(),
            rental_fee: 300_000,
            insurance_fee: 50_000,
            vat_fee: 35_000,
            ..RentalDraft::new()
        }
    }

    #[test]
    fn total_tracks_every_component_change() {
        let mut draft = valid_draft();
        assert_eq!(draft.total_fee(), 385_000);
        draft.insurance_fee = 60_000;
        assert_eq!(draft.total_fee(), 395_000);
        draft.vat_fee = 0;
        assert_eq!(draft.total_fee(), 360_000);
        draft.rental_fee = 0;
        draft.insurance_fee = 0;
        assert_eq!(draft.total_fee(), 0);
    }

    #[test]
    fn payload_carries_the_derived_total() {
        let payload = valid_draft().to_payload().unwrap();
        assert_eq!(
            payload.total_fee,
            payload.rental_fee + payload.insurance_fee + payload.vat_fee
        );
    }

    #[test]
    fn rejects_inverted_date_range() {
        let mut draft = valid_draft();
        draft.end_date = "2024-03-31".into();
        assert!(draft.to_payload().is_err());
    }

    #[test]
    fn rejects_unparseable_dates() {
        let mut draft = valid_draft();
        draft.start_date = "01/04/2024".into();
        assert!(draft.to_payload().is_err());
    }

    #[test]
    fn term_add_is_deduplicated() {
        let mut draft = RentalDraft::new();
        draft.add_term("Return with a full tank");
        draft.add_term("Return with a full tank");
        assert_eq!(draft.terms.len(), 1);
        draft.remove_term("Return with a full tank");
        assert!(draft.terms.is_empty());
    }
}
