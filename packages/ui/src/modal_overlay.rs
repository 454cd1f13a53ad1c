use dioxus::prelude::*;

/// Full-screen overlay hosting a centered dialog card.
/// Clicking the backdrop (but not the card) triggers `on_close`.
#[component]
pub fn ModalOverlay(
    #[props(default = "".to_string())] title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "overlay-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                if !title.is_empty() {
                    div {
                        class: "overlay-header",
                        h2 { class: "overlay-title", "{title}" }
                        button {
                            class: "overlay-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                {children}
            }
        }
    }
}
