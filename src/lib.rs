#![doc(test(attr(deny(warnings))))]

//! Report Core turns sets of filtered financial transactions into
//! time-bucketed, grouped, sorted, and color-legended report data for
//! custom, category-group, and budget-analysis reports.

pub mod domain;
pub mod errors;
pub mod report;
pub mod source;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Report Core tracing initialized.");
    });
}
