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

mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use store_roster_api::{
    ApiError, CreateEmployeeRequest, EmployeeResponse, LoginRequest, LoginResponse,
    RosterResponse, SaveRosterRequest, SaveRosterResponse, UpdateEmployeeRequest, WhoAmIResponse,
    create_employee, deactivate_employee, get_employee, get_roster, list_employees, login, logout,
    save_roster, update_employee, whoami,
};
use store_roster_persistence::Persistence;

use session::SessionAccount;

/// Store Roster Server - HTTP server for the Store Roster System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over --database.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for roster, employee and session storage.
    persistence: Arc<Mutex<Persistence>>,
}

/// Query parameters for listing employees.
#[derive(Debug, Deserialize)]
struct ListEmployeesQuery {
    /// Whether deactivated employees are included.
    #[serde(default)]
    include_inactive: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    /// Error indicator.
    pub(crate) error: bool,
    /// Error message.
    pub(crate) message: String,
    /// Individual validation violations, present only for roster
    /// validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) violations: Option<Vec<String>>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Accumulated roster violations, when applicable.
    violations: Option<Vec<String>>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            violations: self.violations,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let message: String = err.to_string();
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message,
                violations: None,
            },
            ApiError::Unauthorized { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message,
                violations: None,
            },
            ApiError::ValidationFailed { violations } => Self {
                status: StatusCode::BAD_REQUEST,
                message: String::from("Roster validation failed"),
                violations: Some(violations),
            },
            ApiError::InvalidEmployeeReference { .. }
            | ApiError::InvalidInput { .. }
            | ApiError::DuplicateShift { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message,
                violations: None,
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message,
                violations: None,
            },
            ApiError::Conflict { .. } => Self {
                status: StatusCode::CONFLICT,
                message,
                violations: None,
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
                violations: None,
            },
        }
    }
}

/// Handler for POST /login.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(login_name = %req.login_name, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /logout.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account, token): SessionAccount,
) -> Result<StatusCode, HttpError> {
    info!(login_name = %account.login_name, "Handling logout request");

    let mut persistence = app_state.persistence.lock().await;
    logout(&mut persistence, &token)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /whoami.
async fn handle_whoami(SessionAccount(account, _token): SessionAccount) -> Json<WhoAmIResponse> {
    Json(whoami(&account))
}

/// Handler for GET `/rosters/{date}`.
///
/// Returns the roster day projection; an unsaved date yields an empty
/// shift list.
async fn handle_get_roster(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account, _token): SessionAccount,
    Path(date): Path<String>,
) -> Result<Json<RosterResponse>, HttpError> {
    info!(store_id = account.store_id, date = %date, "Handling get_roster request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RosterResponse = get_roster(&mut persistence, &account, &date)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/rosters/{date}`.
///
/// Validates the submitted shift set and atomically replaces the day.
async fn handle_save_roster(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account, _token): SessionAccount,
    Path(date): Path<String>,
    Json(req): Json<SaveRosterRequest>,
) -> Result<Json<SaveRosterResponse>, HttpError> {
    info!(
        store_id = account.store_id,
        date = %date,
        shift_count = req.shifts.len(),
        "Handling save_roster request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: SaveRosterResponse = save_roster(&mut persistence, &account, &date, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /employees.
async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account, _token): SessionAccount,
    Query(query): Query<ListEmployeesQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<EmployeeResponse> =
        list_employees(&mut persistence, &account, query.include_inactive)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/employees/{id}`.
async fn handle_get_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account, _token): SessionAccount,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeResponse = get_employee(&mut persistence, &account, employee_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /employees.
async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account, _token): SessionAccount,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), HttpError> {
    info!(store_id = account.store_id, "Handling create_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeResponse = create_employee(&mut persistence, &account, &req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for PUT `/employees/{id}`.
async fn handle_update_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account, _token): SessionAccount,
    Path(employee_id): Path<i64>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>, HttpError> {
    info!(
        store_id = account.store_id,
        employee_id, "Handling update_employee request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeResponse =
        update_employee(&mut persistence, &account, employee_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/employees/{id}` (soft delete).
async fn handle_deactivate_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account, _token): SessionAccount,
    Path(employee_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    info!(
        store_id = account.store_id,
        employee_id, "Handling deactivate_employee request"
    );

    let mut persistence = app_state.persistence.lock().await;
    deactivate_employee(&mut persistence, &account, employee_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/whoami", get(handle_whoami))
        .route("/rosters/{date}", get(handle_get_roster))
        .route("/rosters/{date}", put(handle_save_roster))
        .route("/employees", get(handle_list_employees))
        .route("/employees", post(handle_create_employee))
        .route("/employees/{id}", get(handle_get_employee))
        .route("/employees/{id}", put(handle_update_employee))
        .route("/employees/{id}", delete(handle_deactivate_employee))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Store Roster Server");

    let persistence: Persistence = if let Some(mysql_url) = &args.mysql_url {
        info!("Using MySQL database");
        Persistence::new_with_mysql(mysql_url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
