//! Axum route handler for analysis downloads.

use axum::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::export::report::render_report;
use crate::export::{pdf, ExportFormat};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExportRequest {
    pub analysis: Option<Value>,
    pub format: Option<String>,
}

/// POST /export-analysis
pub async fn handle_export(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    let analysis = request
        .analysis
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::Validation("No analysis data provided".to_string()))?;

    let format = request
        .format
        .as_deref()
        .and_then(ExportFormat::parse)
        .ok_or_else(|| AppError::Validation("Unsupported export format".to_string()))?;

    let generated_at = Utc::now();

    let body = match format {
        ExportFormat::Json => serde_json::to_vec_pretty(&analysis)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to serialize analysis: {e}")))?,
        ExportFormat::Txt => render_report(&parse_analysis(analysis)?, generated_at).into_bytes(),
        ExportFormat::Pdf => {
            let report = render_report(&parse_analysis(analysis)?, generated_at);
            let rendered = tokio::task::spawn_blocking({
                let report = report.clone();
                move || pdf::render_pdf(&report)
            })
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF export: {e}")))?;

            match rendered {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("PDF rendering failed, sending text report instead: {e}");
                    report.into_bytes()
                }
            }
        }
    };

    let filename = format!(
        "Career-Analysis-{}.{}",
        generated_at.timestamp_millis(),
        format.extension()
    );
    info!("Exporting analysis as {filename} ({} bytes)", body.len());

    Ok((
        [
            (CONTENT_TYPE, format.content_type().to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
        ],
        body,
    )
        .into_response())
}

fn parse_analysis(value: Value) -> Result<AnalysisResult, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::Validation(format!("Invalid analysis data: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::json;

    fn analysis() -> Value {
        json!({
            "score": 6.7,
            "atsScore": 70.7,
            "experienceLevel": "junior",
            "matchLevel": "Good Fit",
            "summary": "Found 2 matching skills out of 3 required.",
            "skills": {
                "required": [{"name": "Docker", "category": "Cloud & DevOps"}],
                "present": [],
                "missing": [{"name": "Docker", "category": "Cloud & DevOps"}]
            },
            "aiGuidance": "Learn Docker."
        })
    }

    async fn export(format: &str) -> Response {
        handle_export(Json(ExportRequest {
            analysis: Some(analysis()),
            format: Some(format.to_string()),
        }))
        .await
        .unwrap()
    }

    fn header(response: &Response, name: axum::http::HeaderName) -> String {
        response.headers()[name].to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_txt_export() {
        let response = export("txt").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(header(&response, CONTENT_TYPE).starts_with("text/plain"));
        let disposition = header(&response, CONTENT_DISPOSITION);
        assert!(disposition.starts_with("attachment; filename=\"Career-Analysis-"));
        assert!(disposition.ends_with(".txt\""));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Match Level: Good Fit"));
        assert!(text.contains("  1. Docker (Cloud & DevOps)"));
    }

    #[tokio::test]
    async fn test_json_export_is_pretty_copy_of_input() {
        let response = export("json").await;
        assert_eq!(header(&response, CONTENT_TYPE), "application/json");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("\n  \"score\": 6.7"));
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), analysis());
    }

    #[tokio::test]
    async fn test_pdf_export() {
        let response = export("pdf").await;
        assert_eq!(header(&response, CONTENT_TYPE), "application/pdf");
        assert!(header(&response, CONTENT_DISPOSITION).ends_with(".pdf\""));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_missing_analysis_or_format_is_rejected() {
        let err = handle_export(Json(ExportRequest {
            analysis: None,
            format: Some("txt".to_string()),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "No analysis data provided"));

        let err = handle_export(Json(ExportRequest {
            analysis: Some(analysis()),
            format: Some("docx".to_string()),
        }))
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Unsupported export format"));
    }
}
