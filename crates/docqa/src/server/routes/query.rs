//! Question answering and generation endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{AnswerResponse, GenerateRequest, QueryRequest};

/// POST /api/query - Answer a question about stored files
pub async fn query_files(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<AnswerResponse>> {
    let start = Instant::now();
    tracing::info!("Query: \"{}\" over {} files", request.question, request.paths.len());

    let answer = state
        .orchestrator()
        .answer_about_files(&request.question, &request.paths)
        .await?;

    Ok(Json(AnswerResponse {
        answer,
        files: request.paths,
        processing_time_ms: start.elapsed().as_millis() as u64,
    }))
}

/// POST /api/query/pdf - Answer a question about an uploaded PDF
///
/// Expects a `file` part with the document and a `question` text part.
pub async fn query_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnswerResponse>> {
    let start = Instant::now();
    let mut pdf: Option<Vec<u8>> = None;
    let mut question: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        Error::InvalidRequest(format!("Failed to read multipart field: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let data = field.bytes().await.map_err(|e| {
                    Error::InvalidRequest(format!("Failed to read file: {}", e))
                })?;
                pdf = Some(data.to_vec());
            }
            "question" => {
                let text = field.text().await.map_err(|e| {
                    Error::InvalidRequest(format!("Failed to read question: {}", e))
                })?;
                question = Some(text);
            }
            other => tracing::debug!("Ignoring multipart field {}", other),
        }
    }

    let pdf = pdf.ok_or_else(|| Error::InvalidRequest("Missing `file` field".to_string()))?;
    let question =
        question.ok_or_else(|| Error::InvalidRequest("Missing `question` field".to_string()))?;

    let answer = state.orchestrator().answer_about_pdf(pdf, &question).await?;

    Ok(Json(AnswerResponse {
        answer,
        files: Vec::new(),
        processing_time_ms: start.elapsed().as_millis() as u64,
    }))
}

/// POST /api/generate - Free-form generation
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<AnswerResponse>> {
    let start = Instant::now();

    let answer = state
        .orchestrator()
        .generate(&request.prompt, request.temperature)
        .await?;

    Ok(Json(AnswerResponse {
        answer,
        files: Vec::new(),
        processing_time_ms: start.elapsed().as_millis() as u64,
    }))
}
