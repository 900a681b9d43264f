use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use pkpd_core::{
    AnalysisError, AnalysisReport, AnalysisType, AnalyzerService, ReleaseTable, ServerConfig,
};
use pkpd_export::{export_filename, write_pdf, write_workbook, ExportError};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const PDF_MIME: &str = "application/pdf";

/// Application state shared across REST API handlers.
///
/// All analysis data is read-only after startup; clones share it by
/// reference.
#[derive(Clone)]
struct AppState {
    analyzer: AnalyzerService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, search_drugs, analyze_drug, export_report),
    components(schemas(
        AnalyzeReq,
        AnalysisReport,
        AnalysisType,
        ReleaseTable,
        ErrorRes,
        HealthRes
    ))
)]
struct ApiDoc;

/// Main entry point for the PK/PD analyzer server.
///
/// # Environment Variables
/// - `PKPD_API_KEY`: required startup credential; the process refuses to
///   start without it
/// - `PKPD_HOST`: bind host (default: "127.0.0.1")
/// - `PKPD_PORT`: bind port (default: 5000)
/// - `PKPD_DEBUG`: raise log verbosity to debug (default: false)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration or startup fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::new(
        std::env::var("PKPD_HOST").ok(),
        std::env::var("PKPD_PORT").ok(),
        std::env::var("PKPD_DEBUG").ok(),
        std::env::var("PKPD_API_KEY").ok(),
    )?;

    let default_level = if config.debug() { "pkpd=debug" } else { "pkpd=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("++ Starting PK/PD analyzer on {}", config.bind_addr());

    let app = router(AppState {
        analyzer: AnalyzerService::new(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/drugs/search", get(search_drugs))
        .route("/api/analyze", post(analyze_drug))
        .route("/api/export/:format", get(export_report))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Minimal landing page; the full front end is served elsewhere.
async fn index() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html><html><head><title>Drug PK/PD Analyzer</title></head>\
         <body><h1>Drug PK/PD Analyzer</h1>\
         <p>See <a href=\"/swagger-ui\">the API documentation</a>.</p></body></html>",
    )
}

#[derive(Serialize, ToSchema)]
struct HealthRes {
    ok: bool,
    message: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "PK/PD analyzer is alive".into(),
    })
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
struct SearchParams {
    /// Case-insensitive substring query; under two characters returns `[]`.
    #[serde(default)]
    q: String,
}

#[utoipa::path(
    get,
    path = "/api/drugs/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching drug names, at most ten", body = [String])
    )
)]
/// Autocomplete search over the drug registry.
async fn search_drugs(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<String>> {
    Json(state.analyzer.search(&params.q))
}

#[derive(Deserialize, ToSchema)]
struct AnalyzeReq {
    drug_name: String,
    #[serde(default)]
    analysis_type: AnalysisType,
}

#[derive(Serialize, ToSchema)]
struct ErrorRes {
    success: bool,
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorRes {
            success: false,
            error: message.into(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeReq,
    responses(
        (status = 200, description = "Assembled analysis report", body = AnalysisReport),
        (status = 400, description = "Invalid or unknown drug name", body = ErrorRes),
        (status = 500, description = "Unexpected failure", body = ErrorRes)
    )
)]
/// Assemble the full analysis report for one drug.
async fn analyze_drug(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeReq>,
) -> Response {
    let drug_name = req.drug_name.trim();
    if drug_name.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Drug name is required");
    }

    match state.analyzer.analyze(drug_name, req.analysis_type) {
        Ok(report) => {
            tracing::info!(drug = %report.drug_name, "analysis served");
            Json(AnalyzeRes {
                success: true,
                report,
            })
            .into_response()
        }
        Err(e @ AnalysisError::InvalidName(_)) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            tracing::error!("analysis failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed")
        }
    }
}

#[derive(Serialize)]
struct AnalyzeRes {
    success: bool,
    #[serde(flatten)]
    report: AnalysisReport,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
struct ExportParams {
    /// Drug name; must pass the same validation as `/api/analyze`.
    drug: Option<String>,
    /// JSON-encoded structured table, as returned by `/api/analyze`.
    table_data: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/export/{format}",
    params(
        ("format" = String, Path, description = "Export format: excel or pdf"),
        ExportParams
    ),
    responses(
        (status = 200, description = "Binary file attachment"),
        (status = 400, description = "Missing parameters, unknown format, or invalid input", body = ErrorRes),
        (status = 500, description = "Export failure", body = ErrorRes)
    )
)]
/// Export a report as a file attachment.
async fn export_report(
    State(state): State<AppState>,
    Path(format): Path<String>,
    Query(params): Query<ExportParams>,
) -> Response {
    let (Some(drug), Some(raw_table)) = (params.drug, params.table_data) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing data");
    };

    if format != "excel" && format != "pdf" {
        return error_response(StatusCode::BAD_REQUEST, "Invalid format");
    }

    // The assembler re-derives the narrative server-side; only the table
    // travels with the request. Unknown drugs never reach the exporters.
    let mut report = match state.analyzer.analyze(&drug, AnalysisType::Comprehensive) {
        Ok(report) => report,
        Err(e @ AnalysisError::InvalidName(_)) => {
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
        Err(e) => {
            tracing::error!("export assembly failed: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Export failed");
        }
    };

    report.table_data = match serde_json::from_str::<ReleaseTable>(&raw_table) {
        Ok(table) => table,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, "Malformed table data"),
    };

    let (result, filename, mime) = match format.as_str() {
        "excel" => (
            write_workbook(&report),
            export_filename(&drug, "xlsx"),
            XLSX_MIME,
        ),
        _ => (write_pdf(&report), export_filename(&drug, "pdf"), PDF_MIME),
    };

    match result {
        Ok(bytes) => {
            tracing::info!(drug = %drug, format = %format, "export served");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{filename}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(
            e @ (ExportError::MissingDrugName
            | ExportError::EmptyTable
            | ExportError::MalformedTable(_)),
        ) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Err(e) => {
            tracing::error!("export failed: {e}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Export failed")
        }
    }
}
