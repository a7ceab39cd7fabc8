//! JusticeAlly core - legal document synthesis and simplification
//!
//! The pipeline behind the document tools:
//!
//! - A registry of document types, each bundling its template, field
//!   schema and enhancement instruction builder
//! - Deterministic template rendering (the "base document")
//! - PDF text extraction for the simplification flow
//! - A session state machine that validates input, renders, calls the
//!   generative backend and degrades gracefully to the base document
//!   when enhancement fails
//!
//! Nothing here persists: form values and results live for one session.

pub mod error;
pub mod extract;
pub mod pipeline;
mod prompt;
pub mod registry;
pub mod render;
pub mod types;

pub use error::{EnhancementError, ExtractionError, PipelineError};
pub use pipeline::{Enhancer, PipelineState, Session, DEFAULT_ENHANCE_TIMEOUT};
pub use types::{download_filename, DocumentTypeId, FormValues, PipelineResult, ResultSource};
