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
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use clap::Parser;
use config::{Args, load_hierarchy};
use roster::RosterRepository;
use roster_api::{
    AddStaffRequest, ApiError, CoverageResponse, EditModeResponse, EditorResponse,
    OpenCellRequest, ReloadResponse, RosterExport, RosterResponse, RosterView,
    SelectWeekRequest, SetFilterRequest, StaffChangeResponse, UpdateEntryRequest,
};
use roster_domain::{Date, FilterCriteria, LocationHierarchy, StaffId, StaffMember};
use roster_persistence::{InMemoryRepository, JsonFileRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Application state shared across handlers.
///
/// The view is wrapped in a Mutex so writes from concurrent requests are
/// applied one at a time.
#[derive(Clone)]
struct AppState {
    /// The roster session.
    view: Arc<Mutex<RosterView>>,
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
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Repository { .. } => {
                error!(error = %err, "Repository error");
                Self {
                    status: StatusCode::BAD_GATEWAY,
                    message: err.to_string(),
                }
            }
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

/// Handler for GET `/roster` endpoint.
///
/// Returns the visible week, filter, editor and coverage.
async fn handle_get_roster(AxumState(app_state): AxumState<AppState>) -> Json<RosterResponse> {
    let view = app_state.view.lock().await;
    Json(view.snapshot())
}

/// Handler for POST `/roster/reload` endpoint.
///
/// Reloads every record from the repository.
async fn handle_reload(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ReloadResponse>, HttpError> {
    let mut view = app_state.view.lock().await;
    let staff_count: usize = view.load().await?;
    Ok(Json(ReloadResponse { staff_count }))
}

/// Handler for POST `/week` endpoint.
///
/// Shows the week containing the given date.
async fn handle_select_week(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SelectWeekRequest>,
) -> Result<Json<RosterResponse>, HttpError> {
    let date: Date = req.parse_date()?;
    let mut view = app_state.view.lock().await;
    view.select_week(date)?;
    Ok(Json(view.snapshot()))
}

/// Handler for POST `/filter` endpoint.
///
/// Replaces the role/building/floor filter.
async fn handle_set_filter(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SetFilterRequest>,
) -> Result<Json<RosterResponse>, HttpError> {
    let criteria: FilterCriteria = req.to_criteria()?;
    let mut view = app_state.view.lock().await;
    view.set_filter(criteria)?;
    Ok(Json(view.snapshot()))
}

/// Handler for POST `/edit-mode` endpoint.
async fn handle_toggle_edit_mode(
    AxumState(app_state): AxumState<AppState>,
) -> Json<EditModeResponse> {
    let mut view = app_state.view.lock().await;
    Json(EditModeResponse {
        edit_mode: view.toggle_edit_mode(),
    })
}

/// Handler for POST `/staff` endpoint.
async fn handle_add_staff(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddStaffRequest>,
) -> Result<Json<StaffChangeResponse>, HttpError> {
    info!(staff_id = %req.id, role = %req.role, "Handling add_staff request");
    let mut view = app_state.view.lock().await;
    let staff: StaffMember = view.add_staff(&req.to_draft()).await?;
    Ok(Json(StaffChangeResponse {
        message: format!("Added staff member {}", staff.id),
        staff,
    }))
}

/// Handler for DELETE `/staff/{id}` endpoint.
///
/// Removes the staff member and all their assignments. The client is
/// expected to have confirmed the removal.
async fn handle_remove_staff(
    AxumState(app_state): AxumState<AppState>,
    Path(staff_id): Path<String>,
) -> Result<Json<StaffChangeResponse>, HttpError> {
    let staff_id: StaffId = StaffId::new(&staff_id);
    info!(staff_id = %staff_id, "Handling remove_staff request");
    let mut view = app_state.view.lock().await;
    let staff: StaffMember = view.remove_staff(&staff_id).await?;
    Ok(Json(StaffChangeResponse {
        message: format!("Removed staff member {}", staff.id),
        staff,
    }))
}

/// Handler for POST `/editor/open` endpoint.
async fn handle_open_cell(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<OpenCellRequest>,
) -> Result<Json<EditorResponse>, HttpError> {
    let (staff_id, date) = req.parse()?;
    let mut view = app_state.view.lock().await;
    if !view.open_cell(&staff_id, date)? {
        return Err(HttpError {
            status: StatusCode::CONFLICT,
            message: String::from("Edit mode is off"),
        });
    }
    Ok(Json(view.editor_snapshot()))
}

/// Handler for POST `/editor/entries` endpoint.
async fn handle_add_entry(AxumState(app_state): AxumState<AppState>) -> Json<EditorResponse> {
    let mut view = app_state.view.lock().await;
    view.add_entry();
    Json(view.editor_snapshot())
}

/// Handler for DELETE `/editor/entries/{index}` endpoint.
async fn handle_remove_entry(
    AxumState(app_state): AxumState<AppState>,
    Path(index): Path<usize>,
) -> Json<EditorResponse> {
    let mut view = app_state.view.lock().await;
    view.remove_entry(index);
    Json(view.editor_snapshot())
}

/// Handler for PATCH `/editor/entries/{index}` endpoint.
async fn handle_update_entry(
    AxumState(app_state): AxumState<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<UpdateEntryRequest>,
) -> Result<Json<EditorResponse>, HttpError> {
    let mut view = app_state.view.lock().await;
    view.update_entry(index, &req)?;
    Ok(Json(view.editor_snapshot()))
}

/// Handler for POST `/editor/commit` endpoint.
///
/// On failure the editor stays open with its staging intact.
async fn handle_commit(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<RosterResponse>, HttpError> {
    let mut view = app_state.view.lock().await;
    match view.commit().await {
        Ok(true) => Ok(Json(view.snapshot())),
        Ok(false) => Err(HttpError {
            status: StatusCode::CONFLICT,
            message: String::from("No cell is open"),
        }),
        Err(err) => {
            warn!(error = %err, "Commit rejected");
            Err(err.into())
        }
    }
}

/// Handler for POST `/editor/cancel` endpoint.
async fn handle_cancel(AxumState(app_state): AxumState<AppState>) -> Json<EditorResponse> {
    let mut view = app_state.view.lock().await;
    view.cancel();
    Json(view.editor_snapshot())
}

/// Handler for GET `/coverage` endpoint.
async fn handle_get_coverage(AxumState(app_state): AxumState<AppState>) -> Json<CoverageResponse> {
    let view = app_state.view.lock().await;
    Json(view.coverage_snapshot())
}

/// Handler for GET `/export` endpoint.
///
/// Downloads the visible week as CSV.
async fn handle_export(AxumState(app_state): AxumState<AppState>) -> Result<Response, HttpError> {
    let view = app_state.view.lock().await;
    let export: RosterExport = view.export()?;
    drop(view);

    let content_type: String = format!("{}; charset=utf-8", export.content_type);
    let disposition: String = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.body,
    )
        .into_response())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/roster", get(handle_get_roster))
        .route("/roster/reload", post(handle_reload))
        .route("/week", post(handle_select_week))
        .route("/filter", post(handle_set_filter))
        .route("/edit-mode", post(handle_toggle_edit_mode))
        .route("/staff", post(handle_add_staff))
        .route("/staff/{id}", delete(handle_remove_staff))
        .route("/editor/open", post(handle_open_cell))
        .route("/editor/entries", post(handle_add_entry))
        .route("/editor/entries/{index}", delete(handle_remove_entry))
        .route("/editor/entries/{index}", patch(handle_update_entry))
        .route("/editor/commit", post(handle_commit))
        .route("/editor/cancel", post(handle_cancel))
        .route("/coverage", get(handle_get_coverage))
        .route("/export", get(handle_export))
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

    info!("Initializing Roster Server");

    let repository: Arc<dyn RosterRepository> = if let Some(path) = &args.data {
        info!("Using roster file at: {}", path.display());
        Arc::new(JsonFileRepository::new(path))
    } else {
        info!("Using in-memory roster");
        Arc::new(InMemoryRepository::new())
    };

    let hierarchy: LocationHierarchy = load_hierarchy(args.locations.as_deref())?;
    let today: Date = time::OffsetDateTime::now_utc().date();

    let mut view: RosterView =
        RosterView::new(repository, Arc::new(hierarchy), args.roster_config(), today)?;
    view.load().await?;

    let app_state: AppState = AppState {
        view: Arc::new(Mutex::new(view)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
