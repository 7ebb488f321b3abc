//! Sign-in gate for interactive flows.
//!
//! Interactive callers consult an [`AuthGate`] before summarizing. When the
//! gate is closed the pipeline asks for sign-in and does no work.

use crate::errors::Result;
use crate::pipeline::artifacts::{Digest, Transcript};
use crate::pipeline::observer::PipelineObserver;
use crate::pipeline::runner::Pipeline;
use crate::pipeline::traits::SentenceSplitter;

/// Authentication state owned by the host application
pub trait AuthGate {
    fn is_authenticated(&self) -> bool;

    /// Ask the host to start its sign-in flow
    fn request_sign_in(&self);
}

/// Gate for non-interactive callers: always open
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl AuthGate for OpenGate {
    fn is_authenticated(&self) -> bool {
        true
    }

    fn request_sign_in(&self) {}
}

impl<S: SentenceSplitter> Pipeline<S> {
    /// Run only when `gate` is open.
    ///
    /// Returns `Ok(None)` after requesting sign-in when it is closed.
    pub fn run_gated(
        &self,
        gate: &impl AuthGate,
        transcript: Option<Transcript<'_>>,
        observer: &mut impl PipelineObserver,
    ) -> Result<Option<Digest>> {
        if !gate.is_authenticated() {
            #[cfg(feature = "tracing")]
            tracing::info!("sign-in required before summarizing");
            gate.request_sign_in();
            return Ok(None);
        }
        self.run(transcript, observer).map(Some)
    }
}
