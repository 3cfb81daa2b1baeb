use actix_web::http::header::CONTENT_TYPE;
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use chrono::NaiveDate;
use log::{info, warn};
use serde::Serialize;
use std::net::IpAddr;
use std::sync::Mutex;

use crate::config::resolve_today;
use crate::display::ReportStatus;
use crate::pairing::{pair_projects_from_csv, DisplayRow};

/// Content types accepted for an upload; browsers label CSV files inconsistently
const ACCEPTED_CONTENT_TYPES: &[&str] = &["text/csv", "application/vnd.ms-excel", "text/plain"];

pub struct AppState {
    /// Last successfully processed report
    pub last_report: Mutex<Option<Vec<DisplayRow>>>,
    /// Date for open-ended assignments; the local date per upload when unset
    pub today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(today: Option<NaiveDate>) -> Self {
        Self {
            last_report: Mutex::new(None),
            today,
        }
    }
}

#[derive(Serialize)]
pub struct UploadResponse {
    success: bool,
    status: ReportStatus,
    title: &'static str,
    rows: Vec<DisplayRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl UploadResponse {
    fn new(status: ReportStatus, rows: Vec<DisplayRow>, error: Option<String>) -> Self {
        Self {
            success: matches!(status, ReportStatus::Empty | ReportStatus::Found),
            status,
            title: status.title(),
            rows,
            error,
        }
    }
}

fn has_accepted_content_type(req: &HttpRequest) -> bool {
    match req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) {
        Some(value) => {
            let mime = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            ACCEPTED_CONTENT_TYPES.contains(&mime.as_str())
        }
        None => true,
    }
}

// CSV upload endpoint
async fn upload(req: HttpRequest, body: web::Bytes, state: web::Data<AppState>) -> Result<HttpResponse> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(HttpResponse::BadRequest().json(UploadResponse::new(ReportStatus::Absent, Vec::new(), None)));
    }

    if !has_accepted_content_type(&req) {
        warn!("Rejected upload with content type {:?}", req.headers().get(CONTENT_TYPE));
        return Ok(HttpResponse::BadRequest().json(UploadResponse::new(
            ReportStatus::Invalid,
            Vec::new(),
            Some("Expected a CSV file".to_string()),
        )));
    }

    let text = match std::str::from_utf8(&body) {
        Ok(text) => text,
        Err(e) => {
            warn!("Rejected upload that is not UTF-8: {}", e);
            return Ok(HttpResponse::BadRequest().json(UploadResponse::new(
                ReportStatus::Invalid,
                Vec::new(),
                Some(format!("File is not valid UTF-8: {}", e)),
            )));
        }
    };

    let today = resolve_today(state.today);
    match pair_projects_from_csv(text, today) {
        Ok(rows) => {
            let status = ReportStatus::for_rows(&rows);
            info!("Upload of {} bytes produced {} rows", body.len(), rows.len());
            if let Ok(mut last) = state.last_report.lock() {
                *last = Some(rows.clone());
            }
            Ok(HttpResponse::Ok().json(UploadResponse::new(status, rows, None)))
        }
        Err(e) => {
            warn!("Failed to process upload: {}", e);
            Ok(HttpResponse::BadRequest().json(UploadResponse::new(
                ReportStatus::Invalid,
                Vec::new(),
                Some(format!("Failed to process CSV: {}", e)),
            )))
        }
    }
}

// Last report endpoint
async fn get_report(state: web::Data<AppState>) -> Result<HttpResponse> {
    let last = state
        .last_report
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("report state poisoned"))?;

    match last.as_ref() {
        Some(rows) => Ok(HttpResponse::Ok().json(UploadResponse::new(ReportStatus::for_rows(rows), rows.clone(), None))),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({"error": "No report available"}))),
    }
}

async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Registers the routes; shared by the server and the handler tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/api/upload", web::post().to(upload))
        .route("/api/report", web::get().to(get_report));
}

pub async fn start_server(bind: IpAddr, port: u16, today: Option<NaiveDate>) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(today));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((bind, port))?
    .run()
    .await
}
