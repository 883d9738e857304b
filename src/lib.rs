#![doc(test(attr(deny(warnings))))]

//! Hours Core tracks planned versus worked hours per calendar day, rolls
//! them up by month and year with Red/Amber/Green status, and accepts
//! free-text updates through a language model.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod nlp;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Hours Core tracing initialized.");
    });
}
