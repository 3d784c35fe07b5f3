//! HTTP Handlers

mod liveness;

pub use liveness::*;
