//! Error taxonomy for the document pipeline
//!
//! Only `Enhancement` is ever swallowed into a degraded-but-successful
//! result (the generate path falls back to the base document). The
//! others are surfaced and require user action; none are fatal.

use crate::types::DocumentTypeId;
use thiserror::Error;

/// Uniform "enhancement failed" condition.
///
/// Network failure, non-success status, malformed response body and
/// watchdog timeout all collapse into this one variant; callers never
/// distinguish between them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct EnhancementError(pub String);

/// Failures while turning an uploaded document into text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Only PDF files are supported")]
    NotPdf,

    #[error("File exceeds the {0} MB upload limit")]
    TooLarge(usize),

    #[error("Could not read this file: {0}")]
    Parse(String),

    #[error("Could not read this file: the document is encrypted")]
    Encrypted,

    #[error("No text could be extracted from this document")]
    NoText,
}

/// Errors surfaced by the generation/simplification orchestrator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// Required fields missing or blank, in schema order.
    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Only reachable on the simplification path; the generate path
    /// falls back to the base document instead.
    #[error("Enhancement failed: {0}")]
    Enhancement(#[from] EnhancementError),

    /// Catalogued but not yet implemented document type.
    #[error("{} documents will be available soon", .0.display_name())]
    ComingSoon(DocumentTypeId),

    #[error("No text provided")]
    EmptyInput,

    /// Another request is already in flight for this session.
    #[error("A request is already in progress")]
    Busy,
}
