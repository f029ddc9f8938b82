//! Per-frame light aggregation
//!
//! Turns the scene's ordered light list into view-space, per-type uniform
//! state (`AggregatedState`) once per frame, and derives channel-masked
//! views of it (`FilteredState`) for individual render passes.

mod state;
mod aggregator;

pub use state::{
    AggregatedState, FilteredState, AmbientSnapshot,
    ShadowMapSlot, ShadowMatrixSlot,
};
pub use aggregator::LightAggregator;
