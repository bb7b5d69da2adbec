//! Runtime traits and shared-state helpers

pub mod sync;

pub use sync::{CsState, SharedState};
