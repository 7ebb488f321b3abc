//! Staged digest pipeline
//!
//! - [`artifacts`]: transcript input and digest output
//! - [`traits`]: swappable stage implementations
//! - [`observer`]: stage timing and debugging hooks
//! - [`runner`]: the [`Pipeline`](runner::Pipeline) itself
//! - [`gate`]: sign-in gate for interactive callers

pub mod artifacts;
pub mod gate;
pub mod observer;
pub mod runner;
pub mod traits;
