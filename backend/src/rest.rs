use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{CreateDebtRequest, DebtListResponse, DeleteDebtResponse, UpdateDebtRequest};
use tracing::info;

use crate::domain::{DebtError, DebtService};
use crate::storage::DebtRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub debt_service: DebtService<DebtRepository>,
}

impl AppState {
    pub fn new(debt_service: DebtService<DebtRepository>) -> Self {
        Self { debt_service }
    }
}

fn error_response(context: &str, error: DebtError) -> Response {
    match error {
        DebtError::InvalidInput(_) => {
            info!("{}: rejected input: {}", context, error);
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
        DebtError::NotFound(_) => {
            info!("{}: {}", context, error);
            (StatusCode::NOT_FOUND, error.to_string()).into_response()
        }
        DebtError::Storage(e) => {
            tracing::error!("{}: storage error: {:?}", context, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Storage error").into_response()
        }
    }
}

/// Axum handler for GET /api/debts
pub async fn list_debts(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/debts");

    match state.debt_service.list_debts().await {
        Ok(debts) => (StatusCode::OK, Json(DebtListResponse { debts })).into_response(),
        Err(e) => error_response("list_debts", e),
    }
}

/// Axum handler for POST /api/debts
pub async fn create_debt(
    State(state): State<AppState>,
    Json(request): Json<CreateDebtRequest>,
) -> impl IntoResponse {
    info!("POST /api/debts - name: {}", request.name);

    match state.debt_service.create_debt(request).await {
        Ok(debt) => (StatusCode::CREATED, Json(debt)).into_response(),
        Err(e) => error_response("create_debt", e),
    }
}

/// Axum handler for PUT /api/debts/:id
pub async fn update_debt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateDebtRequest>,
) -> impl IntoResponse {
    info!("PUT /api/debts/{}", id);

    match state.debt_service.update_debt(id, request).await {
        Ok(debt) => (StatusCode::OK, Json(debt)).into_response(),
        Err(e) => error_response("update_debt", e),
    }
}

/// Axum handler for DELETE /api/debts/:id
pub async fn delete_debt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/debts/{}", id);

    match state.debt_service.delete_debt(id).await {
        Ok(()) => {
            let response = DeleteDebtResponse {
                id,
                success_message: format!("Debt {} deleted successfully", id),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("delete_debt", e),
    }
}

/// Axum handler for POST /api/debts/:id/toggle
pub async fn toggle_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("POST /api/debts/{}/toggle", id);

    match state.debt_service.toggle_status(id).await {
        Ok(debt) => (StatusCode::OK, Json(debt)).into_response(),
        Err(e) => error_response("toggle_status", e),
    }
}
