//! Debounced mirror of a text signal.

use std::time::Duration;

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
async fn settle(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn settle(_delay: Duration) {}

/// Mirror `value` into the returned signal once it has stopped changing
/// for `delay_ms`.
///
/// Each change bumps a generation counter and schedules a write tagged
/// with it; an older pending write whose generation no longer matches is
/// dropped on wake-up. A burst of edits therefore lands exactly once,
/// with the final value.
pub fn use_debounced(value: Signal<String>, delay_ms: u32) -> ReadOnlySignal<String> {
    let mut debounced = use_signal(|| value.peek().clone());
    let mut generation = use_signal(|| 0u64);

    use_effect(move || {
        let current = value();
        let scheduled = generation.peek().wrapping_add(1);
        generation.set(scheduled);
        spawn(async move {
            settle(Duration::from_millis(delay_ms as u64)).await;
            if *generation.peek() == scheduled && *debounced.peek() != current {
                debounced.set(current);
            }
        });
    });

    debounced.into()
}
