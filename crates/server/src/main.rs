// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use global_lotto_api::{
    ApiError, DrawRequest, DrawResponse, GetRuleRequest, ListCountriesResponse, RuleInfo,
    draw_numbers, get_rule, list_countries, load_catalog,
};
use global_lotto_domain::RuleCatalog;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Global Lotto Server - HTTP server for lottery number draws
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON rule catalog. If not provided, uses the builtin catalog.
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The catalog is immutable after startup, so handlers share it without locking.
#[derive(Clone)]
struct AppState {
    /// The validated rule catalog.
    catalog: Arc<RuleCatalog>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/countries` endpoint.
///
/// Lists every supported country with its rule.
async fn handle_list_countries(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListCountriesResponse> {
    info!("Handling list_countries request");
    Json(list_countries(&app_state.catalog))
}

/// Handler for GET `/rules/{country}` endpoint.
async fn handle_get_rule(
    AxumState(app_state): AxumState<AppState>,
    Path(country): Path<String>,
) -> Result<Json<RuleInfo>, HttpError> {
    info!(country = %country, "Handling get_rule request");

    let request: GetRuleRequest = GetRuleRequest { country };
    let rule: RuleInfo = get_rule(&app_state.catalog, &request)?;
    Ok(Json(rule))
}

/// Handler for POST `/draw` endpoint.
///
/// Draws one set of numbers for the requested country.
async fn handle_draw(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<DrawRequest>,
) -> Result<Json<DrawResponse>, HttpError> {
    info!(country = %req.country, "Handling draw request");

    let response: DrawResponse = draw_numbers(&app_state.catalog, &req)?;
    Ok(Json(response))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/countries", get(handle_list_countries))
        .route("/rules/{country}", get(handle_get_rule))
        .route("/draw", post(handle_draw))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Global Lotto Server");

    // Load and validate the catalog once; a bad catalog stops startup
    let catalog: RuleCatalog = load_catalog(args.rules.as_deref()).inspect_err(|err| {
        error!(error = %err, "Failed to load rule catalog");
    })?;

    let app_state: AppState = AppState {
        catalog: Arc::new(catalog),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
