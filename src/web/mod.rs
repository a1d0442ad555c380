// src/web/mod.rs
//! HTTP API surface: upload a résumé, get back the parsed record or the
//! full ATS analysis. The parsing engine itself has no web coupling; this
//! layer only adapts transport to [`ResumeParser`] calls.

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::{Context, Result};
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::info;

use crate::core::{AnalysisClient, ConfigManager};
use crate::parser::{ParserConfig, ResumeParser};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/parse", data = "<upload>")]
pub async fn parse_resume(
    upload: Form<ResumeUploadForm<'_>>,
    state: &State<AppState>,
) -> Result<Json<ParseResponse>, Json<StandardErrorResponse>> {
    handlers::parse_resume_handler(upload, state).await
}

#[post("/analyze", data = "<upload>")]
pub async fn analyze_resume(
    upload: Form<ResumeUploadForm<'_>>,
    state: &State<AppState>,
) -> Result<Json<AnalyzeResponse>, Json<StandardErrorResponse>> {
    handlers::analyze_resume_handler(upload, state).await
}

#[get("/health")]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec!["Send the resume as a multipart form field named 'file'".to_string()],
    ))
}

#[rocket::catch(413)]
pub fn payload_too_large() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Uploaded file is too large".to_string(),
        "FILE_TOO_LARGE".to_string(),
        vec!["Use a smaller file size (max 10MB)".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let parser = ResumeParser::with_config(
        ParserConfig::default().with_max_file_size(config.server.max_upload_bytes),
    );

    let analysis = match &config.service.base_url {
        Some(url) => Some(AnalysisClient::new(
            url.clone(),
            config.service.model.clone(),
            config.service.timeout_seconds,
        )?),
        None => None,
    };

    info!("Starting resume analysis API server");

    // Leave headroom above the parser's own ceiling so oversized uploads
    // reach the validation path and get the structured error.
    let upload_limit = (config.server.max_upload_bytes + 2 * 1024 * 1024).bytes();
    let limits = Limits::default()
        .limit("file", upload_limit)
        .limit("data-form", upload_limit);

    let figment = rocket::Config::figment()
        .merge(("port", config.server.port))
        .merge(("address", "0.0.0.0"))
        .merge(("limits", limits));

    rocket::custom(figment)
        .attach(Cors)
        .manage(AppState { parser, analysis })
        .register(
            "/api",
            catchers![bad_request, payload_too_large, internal_error],
        )
        .mount(
            "/api",
            routes![parse_resume, analyze_resume, health, all_options],
        )
        .launch()
        .await
        .context("Rocket server failed")?;

    Ok(())
}
