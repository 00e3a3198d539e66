//! Drains reducer-emitted [`RuntimeEffect`] batches into the host.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::GalleryRuntimeContext};

/// Collapses back-to-back identical effects, e.g. a double-clicked download button, so each
/// asset is fetched once per batch.
fn coalesce(mut batch: Vec<RuntimeEffect>) -> Vec<RuntimeEffect> {
    batch.dedup();
    batch
}

pub fn install(runtime: GalleryRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        // Dispatches made while this batch runs land in the emptied queue and re-trigger us.
        let batch = runtime.effects.try_update(std::mem::take).unwrap_or_default();
        for effect in coalesce(batch) {
            runtime.host.with_value(|host| host.run_runtime_effect(effect));
        }
    });
}
