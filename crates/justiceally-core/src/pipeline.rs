//! Generation/simplification orchestrator
//!
//! [`Session`] is the session-scoped state machine coordinating
//! validation, deterministic rendering, extraction and enhancement.
//! Enhancement is an enrichment, not a requirement: once a base
//! document exists, backend failure degrades to it with a warning and
//! is never a terminal error.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{EnhancementError, PipelineError};
use crate::extract;
use crate::prompt;
use crate::registry;
use crate::render;
use crate::types::{DocumentTypeId, FormValues, PipelineResult, ResultSource};

/// Upper bound on a single enhancement call. Timeout is folded into the
/// uniform enhancement failure so the machine never parks in Enhancing.
pub const DEFAULT_ENHANCE_TIMEOUT: Duration = Duration::from_secs(30);

/// Warning attached to results that fell back to the base document.
pub const ENHANCEMENT_WARNING: &str =
    "Could not enhance the document with AI. Using the basic template instead.";

/// The opaque text-completion collaborator.
///
/// One request, one response; retry policy, if any, belongs to the
/// caller. All failure modes surface as a single [`EnhancementError`].
pub trait Enhancer {
    fn complete(
        &self,
        instruction: &str,
    ) -> impl Future<Output = Result<String, EnhancementError>> + Send;
}

/// Where the session currently is in the request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    /// Raw template shown, no values required yet.
    Previewing(DocumentTypeId),
    /// Reading an uploaded document.
    Extracting,
    /// Waiting on the completion backend.
    Enhancing,
}

/// One user session: at most one request in flight at a time.
pub struct Session<E> {
    enhancer: E,
    enhance_timeout: Duration,
    state: PipelineState,
}

/// Marks the session busy for a scope and restores `Idle` when it ends.
///
/// The restore runs in `Drop`, so a request cancelled by dropping its
/// future still releases the session instead of leaving it busy.
struct BusyGuard<'a> {
    state: &'a mut PipelineState,
}

impl<'a> BusyGuard<'a> {
    fn enter(state: &'a mut PipelineState, busy: PipelineState) -> Self {
        *state = busy;
        Self { state }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.state = PipelineState::Idle;
    }
}

impl<E: Enhancer> Session<E> {
    pub fn new(enhancer: E) -> Self {
        Self::with_timeout(enhancer, DEFAULT_ENHANCE_TIMEOUT)
    }

    pub fn with_timeout(enhancer: E, enhance_timeout: Duration) -> Self {
        Self {
            enhancer,
            enhance_timeout,
            state: PipelineState::Idle,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Select a document type and show its raw template.
    ///
    /// Purely informative: no values are required yet and nothing is
    /// rendered. Unimplemented types answer with a coming-soon notice.
    pub fn select(&mut self, id: DocumentTypeId) -> Result<&'static str, PipelineError> {
        self.ensure_not_busy()?;
        match registry::get_template(id) {
            Some(template) => {
                self.state = PipelineState::Previewing(id);
                Ok(template)
            }
            None => Err(PipelineError::ComingSoon(id)),
        }
    }

    /// Run the full generation pipeline for one document.
    ///
    /// Validates required fields, renders the base document, then
    /// attempts enhancement under the watchdog timeout. On backend
    /// failure the base document is the result, with a warning.
    pub async fn generate(
        &mut self,
        id: DocumentTypeId,
        values: &FormValues,
    ) -> Result<PipelineResult, PipelineError> {
        self.ensure_not_busy()?;
        let spec = registry::spec(id).ok_or(PipelineError::ComingSoon(id))?;

        let missing = render::missing_fields(id, values);
        if !missing.is_empty() {
            return Err(PipelineError::Validation(
                missing.into_iter().map(str::to_string).collect(),
            ));
        }

        // The base document exists before the network call; it is what
        // the user keeps if enhancement fails.
        let base = render::render_spec(spec, values);
        let instruction = (spec.instruction)(values);

        let outcome = {
            let _busy = BusyGuard::enter(&mut self.state, PipelineState::Enhancing);
            Self::complete_with_watchdog(&self.enhancer, self.enhance_timeout, &instruction).await
        };

        let result = match outcome {
            Ok(text) if !text.trim().is_empty() => {
                debug!(document_type = %id, "enhanced document produced");
                PipelineResult {
                    text,
                    source: ResultSource::Enhanced,
                    warning: None,
                }
            }
            Ok(_) => {
                warn!(document_type = %id, "backend returned empty text, keeping base document");
                Self::base_result(base)
            }
            Err(e) => {
                warn!(document_type = %id, error = %e, "enhancement failed, keeping base document");
                Self::base_result(base)
            }
        };
        Ok(result)
    }

    /// Simplify pasted document text.
    ///
    /// No base document exists on this path, so enhancement failure
    /// propagates as an error instead of degrading.
    pub async fn simplify_text(&mut self, text: &str) -> Result<PipelineResult, PipelineError> {
        self.ensure_not_busy()?;
        if text.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let instruction = prompt::simplification(text);
        let outcome = {
            let _busy = BusyGuard::enter(&mut self.state, PipelineState::Enhancing);
            Self::complete_with_watchdog(&self.enhancer, self.enhance_timeout, &instruction).await
        };

        let simplified = outcome?;
        if simplified.trim().is_empty() {
            return Err(EnhancementError("backend returned empty text".to_string()).into());
        }
        Ok(PipelineResult {
            text: simplified,
            source: ResultSource::Enhanced,
            warning: None,
        })
    }

    /// Extract text from an uploaded PDF, then simplify it.
    ///
    /// Extraction failure is terminal but recoverable: the caller can
    /// offer the paste path; no enhancement is attempted on
    /// unextractable content.
    pub async fn simplify_pdf(&mut self, data: &[u8]) -> Result<PipelineResult, PipelineError> {
        self.ensure_not_busy()?;
        let extracted = {
            let _busy = BusyGuard::enter(&mut self.state, PipelineState::Extracting);
            extract::extract_text(data)
        };
        let text = extracted?;
        self.simplify_text(&text).await
    }

    async fn complete_with_watchdog(
        enhancer: &E,
        enhance_timeout: Duration,
        instruction: &str,
    ) -> Result<String, EnhancementError> {
        match tokio::time::timeout(enhance_timeout, enhancer.complete(instruction)).await {
            Ok(result) => result,
            Err(_) => Err(EnhancementError(format!(
                "timed out after {}s",
                enhance_timeout.as_secs()
            ))),
        }
    }

    fn ensure_not_busy(&self) -> Result<(), PipelineError> {
        match self.state {
            PipelineState::Enhancing | PipelineState::Extracting => Err(PipelineError::Busy),
            PipelineState::Idle | PipelineState::Previewing(_) => Ok(()),
        }
    }

    fn base_result(base: String) -> PipelineResult {
        PipelineResult {
            text: base,
            source: ResultSource::Base,
            warning: Some(ENHANCEMENT_WARNING.to_string()),
        }
    }
}
