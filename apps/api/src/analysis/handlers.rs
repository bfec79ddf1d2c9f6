//! Axum route handler for the Analysis API.

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::analysis::engine;
use crate::analysis::models::AnalysisResult;
use crate::documents::{clean_document_text, extract_text, UploadedFile};
use crate::errors::AppError;
use crate::state::AppState;

const MIN_JOB_DESCRIPTION_CHARS: usize = 20;
const MIN_RESUME_CHARS: usize = 50;
const RESUME_FILE_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Text fields of an analysis request, shared by the JSON and form bodies.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeFields {
    #[serde(default, alias = "jobDesc")]
    pub job_description: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Default)]
struct AnalyzeInput {
    fields: AnalyzeFields,
    file: Option<UploadedFile>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Accepts `multipart/form-data` (optional `resume` file), JSON or a urlencoded
/// form. Validation and extraction problems are 400s; LLM problems never are.
pub async fn handle_analyze(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<AnalysisResult>, AppError> {
    let AnalyzeInput { fields, file } = read_input(&state, request).await?;

    let job_description = fields.job_description.unwrap_or_default();
    if job_description.trim().chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(AppError::Validation(
            "Please provide a detailed job description (at least 20 characters).".to_string(),
        ));
    }

    let resume = match file {
        Some(file) => extract_resume(file).await?,
        None => {
            let text = fields.resume_text.unwrap_or_default();
            if text.trim().chars().count() < MIN_RESUME_CHARS {
                return Err(AppError::Validation(
                    "Please provide resume content (at least 50 characters).".to_string(),
                ));
            }
            text
        }
    };

    info!(
        "Analyzing resume ({} chars) against job description ({} chars)",
        resume.chars().count(),
        job_description.chars().count()
    );

    let result = engine::analyze(
        &state.extractor,
        state.llm.as_deref(),
        state.config.llm_timeout,
        &job_description,
        &resume,
    )
    .await;

    Ok(Json(result))
}

async fn read_input(state: &AppState, request: Request) -> Result<AnalyzeInput, AppError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?;
        read_multipart(multipart).await
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(fields) = Form::<AnalyzeFields>::from_request(request, state)
            .await
            .map_err(|e| AppError::Validation(format!("Invalid form body: {e}")))?;
        Ok(AnalyzeInput { fields, file: None })
    } else {
        let Json(fields) = Json::<AnalyzeFields>::from_request(request, state)
            .await
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?;
        Ok(AnalyzeInput { fields, file: None })
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<AnalyzeInput, AppError> {
    let mut input = AnalyzeInput::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == RESUME_FILE_FIELD && field.file_name().is_some() {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;
            // Browsers send an unnamed empty part when no file was chosen.
            if file_name.is_empty() && bytes.is_empty() {
                continue;
            }
            input.file = Some(UploadedFile {
                file_name,
                content_type,
                bytes,
            });
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read field '{name}': {e}")))?;
        match name.as_str() {
            "jobDescription" | "jobDesc" => {
                if input.fields.job_description.as_deref().map_or(true, str::is_empty) {
                    input.fields.job_description = Some(value);
                }
            }
            "resumeText" | RESUME_FILE_FIELD => input.fields.resume_text = Some(value),
            _ => {}
        }
    }

    Ok(input)
}

/// Extracts and cleans an uploaded resume off the async executor.
async fn extract_resume(file: UploadedFile) -> Result<String, AppError> {
    let file_name = file.file_name.clone();

    let extracted = tokio::task::spawn_blocking(move || {
        extract_text(&file).map(|text| clean_document_text(&text))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in text extraction: {e}")))?;

    let text = extracted.map_err(|e| {
        warn!("Text extraction failed for '{file_name}': {e}");
        AppError::Extraction(format!("Failed to process file: {e}. Try pasting text instead."))
    })?;

    if text.trim().chars().count() < MIN_RESUME_CHARS {
        warn!(
            "Text extraction for '{file_name}' yielded only {} characters",
            text.trim().chars().count()
        );
        return Err(AppError::Extraction(
            "Failed to process file: File extraction yielded insufficient text. Try pasting text instead."
                .to_string(),
        ));
    }

    info!("Extracted {} characters from '{file_name}'", text.chars().count());
    Ok(text)
}
