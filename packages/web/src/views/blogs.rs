//! Blog post list view.

use api::BlogSummary;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, ToastOptions};
use ui::ModalOverlay;

use crate::Route;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn Blogs() -> Element {
    let mut blogs = use_signal(Vec::<BlogSummary>::new);
    let mut total_pages = use_signal(|| 1u32);
    let mut page = use_signal(|| 1u32);
    let mut loading = use_signal(|| false);
    let mut delete_target = use_signal(|| Option::<BlogSummary>::None);
    let toast = use_toast();
    let nav = use_navigator();

    let load = move |page_number: u32| {
        spawn(async move {
            loading.set(true);
            match api::blog::list_blogs(page_number, PAGE_SIZE).await {
                Ok(result) => {
                    blogs.set(result.items);
                    total_pages.set(result.total_pages.max(1));
                }
                Err(e) => {
                    blogs.set(Vec::new());
                    toast.error(format!("Cannot load posts: {e}"), ToastOptions::new());
                }
            }
            loading.set(false);
        });
    };

    use_effect(move || {
        load(page());
    });

    let handle_confirm_delete = move |_| {
        let Some(target) = delete_target.peek().clone() else {
            return;
        };
        spawn(async move {
            match api::blog::delete_blog(&target.id).await {
                Ok(()) => {
                    toast.success(format!("Deleted \"{}\"", target.title), ToastOptions::new());
                    delete_target.set(None);
                    load(*page.peek());
                }
                Err(e) => {
                    toast.error(format!("Cannot delete the post: {e}"), ToastOptions::new());
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
                h1 { "Posts" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| { nav.push(Route::BlogNew {}); },
                    "New post"
                }
            }

            if loading() {
                div { class: "view-loading", "Loading…" }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Type" }
                        th { "Region" }
                        th { "Tags" }
                        th { "Created" }
                        th { "" }
                    }
                }
                tbody {
                    for blog in blogs() {
                        tr {
                            key: "{blog.id}",
                            td { class: "cell-strong", "{blog.title}" }
                            td { "{blog.blog_type}" }
                            td { "{blog.region}" }
                            td { {blog.tags.join(", ")} }
                            td { {blog.created_at.format("%d/%m/%Y").to_string()} }
                            td {
                                class: "cell-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let id = blog.id.clone();
                                        move |_| {
                                            nav.push(Route::BlogEdit { id: id.clone() });
                                        }
                                    },
                                    "Edit"
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let blog = blog.clone();
                                        move |_| delete_target.set(Some(blog.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            if blogs().is_empty() && !loading() {
                div { class: "view-empty", "No posts yet" }
            }

            div {
                class: "pager",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: page() <= 1,
                    onclick: move |_| {
                        let current = *page.peek();
                        if current > 1 {
                            page.set(current - 1);
                        }
                    },
                    "Previous"
                }
                span { class: "pager-label", "Page {page()} / {total_pages()}" }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: page() >= total_pages(),
                    onclick: move |_| {
                        let current = *page.peek();
                        if current < *total_pages.peek() {
                            page.set(current + 1);
                        }
                    },
                    "Next"
                }
            }
        }

        if let Some(target) = delete_target() {
            ModalOverlay {
                title: "Delete post",
                on_close: move |_| delete_target.set(None),
                div {
                    class: "dialog-body",
                    p { "Delete \"{target.title}\"? This cannot be undone." }
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
