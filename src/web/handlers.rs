// src/web/handlers.rs
//! Upload handling: buffer the multipart file, run the parser, map errors
//! to the standard envelope

use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

use crate::analyze::review;
use crate::core::analysis_client::fallback_analysis;
use crate::types::UploadedFile;
use crate::web::types::{
    AnalyzeResponse, AppState, ParseResponse, ResumeUploadForm, StandardErrorResponse,
};

pub async fn parse_resume_handler(
    upload: Form<ResumeUploadForm<'_>>,
    state: &State<AppState>,
) -> Result<Json<ParseResponse>, Json<StandardErrorResponse>> {
    let mut upload = upload.into_inner();
    let file = read_upload(&mut upload.file).await?;

    match state.parser.parse(&file) {
        Ok(resume) => {
            let report = review(&resume);
            Ok(Json(ParseResponse {
                success: true,
                resume,
                report,
            }))
        }
        Err(e) => {
            warn!("Parse of {} failed: {}", file.name, e);
            Err(Json(StandardErrorResponse::from(&e)))
        }
    }
}

pub async fn analyze_resume_handler(
    upload: Form<ResumeUploadForm<'_>>,
    state: &State<AppState>,
) -> Result<Json<AnalyzeResponse>, Json<StandardErrorResponse>> {
    let mut upload = upload.into_inner();
    let file = read_upload(&mut upload.file).await?;

    let resume = match state.parser.parse(&file) {
        Ok(resume) => resume,
        Err(e) => {
            warn!("Parse of {} failed: {}", file.name, e);
            return Err(Json(StandardErrorResponse::from(&e)));
        }
    };

    // Service faults degrade to the local analysis rather than failing
    // the request; the parse result is already in hand.
    let (analysis, analysis_source) = match &state.analysis {
        Some(client) => match client.analyze(&resume).await {
            Ok(analysis) => (analysis, "service"),
            Err(e) => {
                warn!("AI analysis failed, using fallback: {}", e);
                (fallback_analysis(&resume), "fallback")
            }
        },
        None => (fallback_analysis(&resume), "fallback"),
    };

    Ok(Json(AnalyzeResponse {
        success: true,
        resume,
        analysis,
        analysis_source: analysis_source.to_string(),
    }))
}

/// Buffer the multipart temp file into an [`UploadedFile`].
async fn read_upload(
    file: &mut rocket::fs::TempFile<'_>,
) -> Result<UploadedFile, Json<StandardErrorResponse>> {
    let name = file
        .raw_name()
        .and_then(|n| n.as_str())
        .unwrap_or("")
        .to_string();
    let declared_size = file.len();
    let content_type = file.content_type().map(|ct| ct.to_string());

    info!("Received upload {} ({} bytes)", name, declared_size);

    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));

    if let Err(e) = file.persist_to(&temp_path).await {
        error!("Failed to save uploaded file: {}", e);
        return Err(Json(StandardErrorResponse::new(
            "Failed to process uploaded file".to_string(),
            "FILE_SAVE_ERROR".to_string(),
            vec!["Try uploading the file again".to_string()],
        )));
    }

    let bytes = tokio::fs::read(&temp_path).await;
    let _ = tokio::fs::remove_file(&temp_path).await;

    let bytes = match bytes {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read uploaded file back: {}", e);
            return Err(Json(StandardErrorResponse::new(
                "Failed to process uploaded file".to_string(),
                "FILE_SAVE_ERROR".to_string(),
                vec!["Try uploading the file again".to_string()],
            )));
        }
    };

    let mut uploaded = UploadedFile::new(name, bytes).with_declared_size(declared_size);
    if let Some(ct) = content_type {
        uploaded = uploaded.with_content_type(ct);
    }
    Ok(uploaded)
}
