//! Metrics for the store
//!
//! Counters follow the `askboard_*` naming convention. Without an installed
//! recorder the `metrics` macros are no-ops, so the store can be used with or
//! without an exporter.

use metrics::{counter, describe_counter, Unit};

/// Metrics prefix for all Askboard metrics
pub const METRICS_PREFIX: &str = "askboard";

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        format!("{}_entities_created_total", METRICS_PREFIX),
        Unit::Count,
        "Total rows created, labelled by entity"
    );

    describe_counter!(
        format!("{}_entities_deleted_total", METRICS_PREFIX),
        Unit::Count,
        "Total rows deleted directly, labelled by entity"
    );

    describe_counter!(
        format!("{}_votes_total", METRICS_PREFIX),
        Unit::Count,
        "Total votes cast, labelled by target and vote"
    );

    tracing::info!("Metrics registered");
}

/// Record a newly created row
pub fn record_created(entity: &'static str) {
    counter!(
        format!("{}_entities_created_total", METRICS_PREFIX),
        "entity" => entity
    )
    .increment(1);
}

/// Record a direct deletion (cascaded rows are not counted)
pub fn record_deleted(entity: &'static str) {
    counter!(
        format!("{}_entities_deleted_total", METRICS_PREFIX),
        "entity" => entity
    )
    .increment(1);
}

/// Record a vote on a question or answer
pub fn record_vote(target: &'static str, vote: crate::Vote) {
    counter!(
        format!("{}_votes_total", METRICS_PREFIX),
        "target" => target,
        "vote" => vote.action()
    )
    .increment(1);
}
