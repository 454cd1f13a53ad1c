//! Vehicle create/edit dialog.

use api::{Vehicle, VehiclePayload};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label, ToastOptions};
use crate::slug::slugify;

/// Draft state behind the dialog: holds the data, resets it, and converts
/// it into the request payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VehicleDraft {
    pub id: Option<String>,
    pub vehicle_type: String,
    pub name: String,
    pub slug: String,
    slug_touched: bool,
    pub license_plate: String,
    pub price_per_day: i64,
    pub location: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub description: String,
}

impl VehicleDraft {
    pub fn new() -> Self {
        Self {
            vehicle_type: "motorbike".to_string(),
            ..Default::default()
        }
    }

    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            id: Some(vehicle.id.clone()),
            vehicle_type: vehicle.vehicle_type.clone(),
            name: vehicle.name.clone(),
            slug: vehicle.slug.clone(),
            // Edit mode never auto-updates the slug.
            slug_touched: true,
            license_plate: vehicle.license_plate.clone(),
            price_per_day: vehicle.price_per_day,
            location: vehicle.location.clone(),
            features: vehicle.features.clone(),
            images: vehicle.images.clone(),
            description: vehicle.description.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Update the name; while the slug is untouched on a new record, keep
    /// deriving it from the name.
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        if !self.is_editing() && !self.slug_touched {
            self.slug = slugify(&self.name);
        }
    }

    /// A manual slug edit stops any further auto-derivation.
    pub fn set_slug(&mut self, slug: String) {
        self.slug_touched = true;
        self.slug = slug;
    }

    /// Add-if-absent by value equality.
    pub fn add_feature(&mut self, feature: &str) {
        push_unique(&mut self.features, feature);
    }

    pub fn remove_feature(&mut self, feature: &str) {
        self.features.retain(|f| f != feature);
    }

    pub fn add_image(&mut self, url: &str) {
        push_unique(&mut self.images, url);
    }

    pub fn remove_image(&mut self, url: &str) {
        self.images.retain(|u| u != url);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.slug.trim().is_empty() {
            return Err("Slug is required".to_string());
        }
        if self.license_plate.trim().is_empty() {
            return Err("License plate is required".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("Location is required".to_string());
        }
        if self.price_per_day <= 0 {
            return Err("Daily price must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> VehiclePayload {
        VehiclePayload {
            vehicle_type: self.vehicle_type.clone(),
            name: self.name.trim().to_string(),
            slug: self.slug.trim().to_string(),
            license_plate: self.license_plate.trim().to_string(),
            price_per_day: self.price_per_day,
            location: self.location.trim().to_string(),
            features: self.features.clone(),
            images: self.images.clone(),
            description: self.description.clone(),
        }
    }
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

/// Create/edit dialog for vehicles. Pass `vehicle` to edit an existing
/// record; `on_saved` receives the persisted result.
#[component]
pub fn VehicleDialog(
    vehicle: Option<Vehicle>,
    on_saved: EventHandler<Vehicle>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(move || {
        vehicle
            .as_ref()
            .map(VehicleDraft::from_vehicle)
            .unwrap_or_else(VehicleDraft::new)
    });
    let mut feature_input = use_signal(String::new);
    let mut image_input = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let toast = use_toast();

    let editing = draft.peek().is_editing();

    let mut add_feature = move |_| {
        draft.write().add_feature(&feature_input());
        feature_input.set(String::new());
    };

    let mut add_image = move |_| {
        draft.write().add_image(&image_input());
        image_input.set(String::new());
    };

    let handle_submit = move |_| {
        if let Err(message) = draft.peek().validate() {
            error.set(Some(message));
            return;
        }
        spawn(async move {
            saving.set(true);
            error.set(None);
            let current = draft.peek().clone();
            let payload = current.to_payload();
            let result = match current.id.as_deref() {
                Some(id) => api::vehicle::update_vehicle(id, &payload).await,
                None => api::vehicle::create_vehicle(&payload).await,
            };
            match result {
                Ok(saved) => {
                    toast.success("Vehicle saved".to_string(), ToastOptions::new());
                    draft.set(VehicleDraft::new());
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
                class: "form-field",
                Label { html_for: "vehicle-type", "Type" }
                select {
                    id: "vehicle-type",
                    class: "select",
                    value: draft().vehicle_type,
                    onchange: move |evt| draft.write().vehicle_type = evt.value(),
                    option { value: "motorbike", "Motorbike" }
                    option { value: "car", "Car" }
                    option { value: "bicycle", "Bicycle" }
                }
            }

            div {
                class: "form-field",
                Label { html_for: "vehicle-name", "Name" }
                Input {
                    id: "vehicle-name",
                    placeholder: "Honda Wave RSX",
                    value: draft().name,
                    oninput: move |evt: FormEvent| draft.write().set_name(evt.value()),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "vehicle-slug", "Slug" }
                Input {
                    id: "vehicle-slug",
                    placeholder: "honda-wave-rsx",
                    value: draft().slug,
                    oninput: move |evt: FormEvent| draft.write().set_slug(evt.value()),
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    Label { html_for: "vehicle-plate", "License plate" }
                    Input {
                        id: "vehicle-plate",
                        placeholder: "43B1-123.45",
                        value: draft().license_plate,
                        oninput: move |evt: FormEvent| draft.write().license_plate = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "vehicle-price", "Price per day (VNĐ)" }
                    Input {
                        id: "vehicle-price",
                        r#type: "number",
                        min: "0",
                        value: draft().price_per_day.to_string(),
                        oninput: move |evt: FormEvent| {
                            draft.write().price_per_day = evt.value().parse().unwrap_or(0);
                        },
                    }
                }
            }

            div {
                class: "form-field",
                Label { html_for: "vehicle-location", "Location" }
                Input {
                    id: "vehicle-location",
                    placeholder: "Đà Nẵng",
                    value: draft().location,
                    oninput: move |evt: FormEvent| draft.write().location = evt.value(),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "vehicle-feature", "Features" }
                div {
                    class: "form-inline",
                    Input {
                        id: "vehicle-feature",
                        placeholder: "Helmet included",
                        value: feature_input(),
                        oninput: move |evt: FormEvent| feature_input.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| add_feature(()),
                        "Add"
                    }
                }
                div {
                    class: "chip-list",
                    for feature in draft().features {
                        span {
                            key: "{feature}",
                            class: "chip",
                            "{feature}"
                            button {
                                class: "chip-remove",
                                onclick: {
                                    let feature = feature.clone();
                                    move |_| draft.write().remove_feature(&feature)
                                },
                                "×"
                            }
                        }
                    }
                }
            }

            div {
                class: "form-field",
                Label { html_for: "vehicle-image", "Image URLs" }
                div {
                    class: "form-inline",
                    Input {
                        id: "vehicle-image",
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
                Label { html_for: "vehicle-description", "Description" }
                textarea {
                    id: "vehicle-description",
                    class: "textarea",
                    rows: 4,
                    value: draft().description,
                    oninput: move |evt| draft.write().description = evt.value(),
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
                        "Create vehicle"
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

    #[test]
    fn name_derives_slug_until_touched() {
        let mut draft = VehicleDraft::new();
        draft.set_name("Honda Wave RSX".to_string());
        assert_eq!(draft.slug, "honda-wave-rsx");
        draft.set_slug("custom-slug".to_string());
        draft.set_name("Honda Wave RSX 2024".to_string());
        assert_eq!(draft.slug, "custom-slug");
    }

    #[test]
    fn edit_mode_never_rederives_slug() {
        let vehicle = Vehicle {
            id: "v1".into(),
            vehicle_type: "motorbike".into(),
            name: "Honda Wave".into(),
            slug: "honda-wave".into(),
            license_plate: "43B1-123.45".into(),
            price_per_day: 120_000,
            location: "Đà Nẵng".into(),
            features: vec![],
            images: vec![],
            description: String::new(),
        };
        let mut draft = VehicleDraft::from_vehicle(&vehicle);
        draft.set_name("Honda Wave Alpha".to_string());
        assert_eq!(draft.slug, "honda-wave");
    }

    #[test]
    fn adding_a_present_feature_is_a_no_op() {
        let mut draft = VehicleDraft::new();
        draft.add_feature("Helmet");
        draft.add_feature("Helmet");
        draft.add_feature("  Helmet  ");
        assert_eq!(draft.features, vec!["Helmet"]);
        draft.remove_feature("Helmet");
        assert!(draft.features.is_empty());
    }

    #[test]
    fn blank_values_are_never_added() {
        let mut draft = VehicleDraft::new();
        draft.add_image("   ");
        assert!(draft.images.is_empty());
    }

    #[test]
    fn validation_requires_positive_price() {
        let mut draft = VehicleDraft::new();
        draft.set_name("Honda Wave".to_string());
        draft.license_plate = "43B1-123.45".to_string();
        draft.location = "Đà Nẵng".to_string();
        assert!(draft.validate().is_err());
        draft.price_per_day = 120_000;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn payload_trims_text_fields() {
        let mut draft = VehicleDraft::new();
        draft.set_name("  Honda Wave  ".to_string());
        draft.license_plate = " 43B1-123.45 ".to_string();
        draft.location = " Đà Nẵng ".to_string();
        draft.price_per_day = 120_000;
        let payload = draft.to_payload();
        assert_eq!(payload.name, "Honda Wave");
        assert_eq!(payload.license_plate, "43B1-123.45");
        assert_eq!(payload.location, "Đà Nẵng");
    }
}
