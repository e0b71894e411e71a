//! Explicit page effect-queue executor for reducer-emitted side effects.

use leptos::*;
use platform_host::ScrollOutcome;

use crate::runtime_context::PageRuntimeContext;

/// Installs the effect executor that drains reducer-emitted page effects in order.
pub fn install(runtime: PageRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        drain_pending(runtime);
    });
}

/// Runs every queued effect without subscribing to the queue.
///
/// The queue is cleared before the batch runs so effects dispatched while draining land in a
/// fresh batch.
pub(crate) fn drain_pending(runtime: PageRuntimeContext) -> Vec<ScrollOutcome> {
    let queued = runtime.effects.get_untracked();
    if queued.is_empty() {
        return Vec::new();
    }
    runtime.effects.set(Vec::new());

    let host = runtime.host.get_value();
    queued
        .into_iter()
        .map(|effect| host.run_page_effect(effect))
        .collect()
}
