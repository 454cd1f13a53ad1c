//! Blog post create/edit form.

use api::BlogPayload;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Input, Label, ToastOptions};
use ui::slugify;

use crate::Route;

#[component]
pub fn BlogNew() -> Element {
    rsx! {
        BlogForm { id: None::<String> }
    }
}

#[component]
pub fn BlogEdit(id: String) -> Element {
    rsx! {
        BlogForm { id: Some(id) }
    }
}

fn mime_for(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next().map(str::to_ascii_lowercase) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

#[component]
fn BlogForm(id: Option<String>) -> Element {
    let editing = id.is_some();
    let mut title = use_signal(String::new);
    let mut slug = use_signal(String::new);
    let mut slug_touched = use_signal(|| false);
    let mut blog_type = use_signal(|| "guide".to_string());
    let mut region = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut tags = use_signal(Vec::<String>::new);
    let mut tag_input = use_signal(String::new);
    let mut thumbnail = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let toast = use_toast();
    let nav = use_navigator();

    // Edit mode: load the record; a failed load sends the user back to the list.
    let load_id = id.clone();
    let _loader = use_resource(move || {
        let load_id = load_id.clone();
        async move {
            let Some(id) = load_id else {
                return;
            };
            match api::blog::get_blog(&id).await {
                Ok(blog) => {
                    title.set(blog.title);
                    slug.set(blog.slug);
                    slug_touched.set(true);
                    blog_type.set(blog.blog_type);
                    region.set(blog.region);
                    content.set(blog.content);
                    tags.set(blog.tags);
                    thumbnail.set(blog.thumbnail);
                }
                Err(e) => {
                    toast.error(format!("Cannot load the post: {e}"), ToastOptions::new());
                    nav.replace(Route::Blogs {});
                }
            }
        }
    });

    let handle_title = move |evt: FormEvent| {
        let value = evt.value();
        if !editing && !slug_touched() {
            slug.set(slugify(&value));
        }
        title.set(value);
    };

    let mut add_tag = move |_| {
        let tag = tag_input().trim().to_string();
        if tag.is_empty() {
            return;
        }
        if !tags.peek().iter().any(|t| *t == tag) {
            tags.write().push(tag);
        }
        tag_input.set(String::new());
    };

    let handle_thumbnail = move |evt: FormEvent| {
        let Some(file_engine) = evt.files() else {
            return;
        };
        let Some(name) = file_engine.files().into_iter().next() else {
            return;
        };
        spawn(async move {
            uploading.set(true);
            match file_engine.read_file(&name).await {
                Some(bytes) => {
                    match api::media::upload_image(&name, mime_for(&name), &bytes).await {
                        Ok(image) => thumbnail.set(Some(image.url)),
                        Err(e) => {
                            toast.error(format!("Upload failed: {e}"), ToastOptions::new());
                        }
                    }
                }
                None => {
                    toast.error("Could not read the selected file".to_string(), ToastOptions::new());
                }
            }
            uploading.set(false);
        });
    };

    let save_id = id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let save_id = save_id.clone();
        spawn(async move {
            error.set(None);

            if title.peek().trim().is_empty() {
                error.set(Some("Title is required".to_string()));
                return;
            }
            if slug.peek().trim().is_empty() {
                error.set(Some("Slug is required".to_string()));
                return;
            }
            if region.peek().trim().is_empty() {
                error.set(Some("Region is required".to_string()));
                return;
            }
            if content.peek().trim().is_empty() {
                error.set(Some("Content is required".to_string()));
                return;
            }

            let payload = BlogPayload {
                title: title.peek().trim().to_string(),
                slug: slug.peek().trim().to_string(),
                content: content.peek().clone(),
                blog_type: blog_type.peek().clone(),
                region: region.peek().trim().to_string(),
                tags: tags.peek().clone(),
                thumbnail: thumbnail.peek().clone(),
            };

            saving.set(true);
            let result = match save_id.as_deref() {
                Some(id) => api::blog::update_blog(id, &payload).await,
                None => api::blog::create_blog(&payload).await,
            };
            match result {
                Ok(saved) => {
                    toast.success(format!("Saved \"{}\"", saved.title), ToastOptions::new());
                    nav.replace(Route::Blogs {});
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "view",

            header {
                class: "view-header",
                h1 {
                    if editing { "Edit post" } else { "New post" }
                }
            }

            form {
                class: "form-card",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "form-field",
                    Label { html_for: "post-title", "Title" }
                    Input {
                        id: "post-title",
                        placeholder: "Thuê xe máy tại Đà Nẵng",
                        value: title(),
                        oninput: handle_title,
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "post-slug", "Slug" }
                    Input {
                        id: "post-slug",
                        placeholder: "thue-xe-may-tai-da-nang",
                        value: slug(),
                        oninput: move |evt: FormEvent| {
                            slug_touched.set(true);
                            slug.set(evt.value());
                        },
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        Label { html_for: "post-type", "Type" }
                        select {
                            id: "post-type",
                            class: "select",
                            value: blog_type(),
                            onchange: move |evt| blog_type.set(evt.value()),
                            option { value: "guide", "Guide" }
                            option { value: "news", "News" }
                            option { value: "promotion", "Promotion" }
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "post-region", "Region" }
                        Input {
                            id: "post-region",
                            placeholder: "da-nang",
                            value: region(),
                            oninput: move |evt: FormEvent| region.set(evt.value()),
                        }
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "post-tags", "Tags" }
                    div {
                        class: "form-inline",
                        Input {
                            id: "post-tags",
                            placeholder: "xe-may",
                            value: tag_input(),
                            oninput: move |evt: FormEvent| tag_input.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| add_tag(()),
                            "Add"
                        }
                    }
                    div {
                        class: "chip-list",
                        for tag in tags() {
                            span {
                                key: "{tag}",
                                class: "chip",
                                "{tag}"
                                button {
                                    class: "chip-remove",
                                    onclick: {
                                        let tag = tag.clone();
                                        move |_| tags.write().retain(|t| *t != tag)
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "post-thumbnail", "Thumbnail" }
                    input {
                        id: "post-thumbnail",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_thumbnail,
                    }
                    if uploading() {
                        span { class: "form-hint", "Uploading…" }
                    }
                    if let Some(url) = thumbnail() {
                        img { class: "thumbnail-preview", src: "{url}" }
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "post-content", "Content" }
                    textarea {
                        id: "post-content",
                        class: "textarea",
                        rows: 14,
                        value: content(),
                        oninput: move |evt| content.set(evt.value()),
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: saving() || uploading(),
                        if saving() { "Saving…" } else { "Save post" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| { nav.push(Route::Blogs {}); },
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_is_derived_from_the_extension() {
        assert_eq!(mime_for("photo.PNG"), "image/png");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("photo.webp"), "image/webp");
        assert_eq!(mime_for("archive.zip"), "application/octet-stream");
    }
}
