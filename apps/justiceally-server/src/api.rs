//! API handlers for the JusticeAlly server

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use justiceally_core::registry::{self, DocumentTypeInfo};
use justiceally_core::{
    download_filename, extract, DocumentTypeId, Enhancer, FormValues, PipelineResult, ResultSource,
    Session,
};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "justiceally-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Catalog response
#[derive(Serialize)]
pub struct CatalogResponse {
    pub success: bool,
    pub document_types: Vec<DocumentTypeInfo>,
    pub count: usize,
}

/// Handler: GET /api/document-types
pub async fn handle_list_document_types() -> Json<CatalogResponse> {
    let document_types = registry::catalog();
    let count = document_types.len();
    Json(CatalogResponse {
        success: true,
        document_types,
        count,
    })
}

/// One field of a document type's schema
#[derive(Serialize)]
pub struct FieldInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// Template preview response
#[derive(Serialize)]
pub struct TemplatePreviewResponse {
    pub id: DocumentTypeId,
    pub name: &'static str,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<&'static str>,
    pub fields: Vec<FieldInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Handler: GET /api/document-types/:id/template
///
/// A not-yet-implemented type is a valid state, answered with a notice
/// rather than an error.
pub async fn handle_template_preview(
    Path(id): Path<DocumentTypeId>,
) -> Json<TemplatePreviewResponse> {
    match registry::spec(id) {
        Some(spec) => Json(TemplatePreviewResponse {
            id,
            name: id.display_name(),
            available: true,
            template: Some(spec.template),
            fields: spec
                .fields
                .iter()
                .map(|f| FieldInfo {
                    key: f.key,
                    label: f.label,
                    required: f.required,
                })
                .collect(),
            notice: None,
        }),
        None => Json(TemplatePreviewResponse {
            id,
            name: id.display_name(),
            available: false,
            template: None,
            fields: Vec::new(),
            notice: Some("This document type will be available soon.".to_string()),
        }),
    }
}

/// Generation request body
#[derive(Deserialize)]
pub struct GenerateRequest {
    pub document_type: DocumentTypeId,
    #[serde(default)]
    pub values: FormValues,
}

/// Final document response (generation and simplification)
#[derive(Serialize)]
pub struct DocumentResponse {
    pub success: bool,
    pub text: String,
    pub source: ResultSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Suggested name for the plain-text download
    pub filename: String,
}

impl DocumentResponse {
    fn from_result(result: PipelineResult, title: &str) -> Self {
        Self {
            success: true,
            text: result.text,
            source: result.source,
            warning: result.warning,
            filename: download_filename(title),
        }
    }
}

/// Handler: POST /api/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<DocumentResponse>, ServerError> {
    info!("Generate request: document_type={}", req.document_type);
    debug!("Field keys: {:?}", req.values.keys().collect::<Vec<_>>());

    let mut session = Session::with_timeout(state.completion.clone(), state.enhance_timeout);
    let result = session.generate(req.document_type, &req.values).await?;

    let title = format!("Generated {}", req.document_type.display_name());
    Ok(Json(DocumentResponse::from_result(result, &title)))
}

/// Simplification request body (paste path)
#[derive(Deserialize)]
pub struct SimplifyRequest {
    pub text: String,
}

/// Handler: POST /api/simplify
pub async fn handle_simplify(
    State(state): State<AppState>,
    Json(req): Json<SimplifyRequest>,
) -> Result<Json<DocumentResponse>, ServerError> {
    info!("Simplify request: {} chars", req.text.len());

    let mut session = Session::with_timeout(state.completion.clone(), state.enhance_timeout);
    let result = session.simplify_text(&req.text).await?;

    Ok(Json(DocumentResponse::from_result(
        result,
        "Simplified Document",
    )))
}

/// Handler: POST /api/simplify/upload
///
/// Multipart upload of a PDF. The MIME type is checked before any
/// bytes reach the extraction adapter.
pub async fn handle_simplify_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DocumentResponse>, ServerError> {
    let mut pdf_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::InvalidUpload(format!("malformed upload: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        check_upload_mime(field.content_type())?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServerError::InvalidUpload(format!("could not read upload: {}", e)))?;
        pdf_bytes = Some(bytes.to_vec());
        break;
    }

    let data = pdf_bytes
        .ok_or_else(|| ServerError::InvalidUpload("missing 'file' field".to_string()))?;
    info!("Upload received: {} bytes", data.len());

    let mut session = Session::with_timeout(state.completion.clone(), state.enhance_timeout);
    let result = session.simplify_pdf(&data).await?;

    Ok(Json(DocumentResponse::from_result(
        result,
        "Simplified Document",
    )))
}

/// Gate on the declared MIME type of the uploaded part, before any of
/// its bytes are read.
fn check_upload_mime(content_type: Option<&str>) -> Result<(), ServerError> {
    match content_type {
        Some(mime) if mime == extract::PDF_MIME => Ok(()),
        other => Err(ServerError::InvalidUpload(format!(
            "Please upload a PDF file (got {})",
            other.unwrap_or("no content type")
        ))),
    }
}

/// Chat request body
#[derive(Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Chat response body
#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Handler: POST /api/chat
///
/// Legal assistant passthrough to the completion backend.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ServerError> {
    if req.query.trim().is_empty() {
        return Err(ServerError::InvalidRequest("No query provided".to_string()));
    }

    let response = state
        .completion
        .complete(&req.query)
        .await
        .map_err(|e| ServerError::EnhancementFailed(e.to_string()))?;

    Ok(Json(ChatResponse { response }))
}
