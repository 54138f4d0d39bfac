//! JSON API routes, nested under /api
//!
//! Parallel surface to the page routes: same statements, JSON in and
//! out. `/edit/{id}` is the JSON twin of the edit-form fetch and shares
//! its handler with `/records/{id}`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::routes::common::MessageResponse;
use crate::http::server::AppState;

/// JSON body for create and update
#[derive(Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

/// Envelope for a single user: `{"user": {...}}`
#[derive(Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// Envelope for the full listing: `{"records": [...]}`
#[derive(Serialize)]
pub struct RecordsResponse {
    pub records: Vec<User>,
}

/// POST /api/create - insert a record
async fn create_record(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = UserRepo::new(&state.pool)
        .create(&payload.name, &payload.email)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to add a new record"))?;

    tracing::info!(id, "new record added");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "New record added successfully",
        }),
    ))
}

/// GET /api/records - list all records
async fn list_records(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RecordsResponse>, ApiError> {
    let records = UserRepo::new(&state.pool)
        .list()
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to fetch data"))?;

    Ok(Json(RecordsResponse { records }))
}

/// GET /api/records/{id} and GET /api/edit/{id} - fetch one record
async fn get_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = UserRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to fetch data"))?;

    Ok(Json(UserResponse { user }))
}

/// PUT /api/update/{id} - update a record in place
async fn update_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = UserRepo::new(&state.pool)
        .update(id, &payload.name, &payload.email)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to update the record"))?;

    tracing::info!(id, affected, "record updated");
    Ok(Json(MessageResponse {
        message: "Record updated successfully",
    }))
}

/// DELETE /api/delete/{id} - delete a record
async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = UserRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to delete the record"))?;

    tracing::info!(id, affected, "record deleted");
    Ok(Json(MessageResponse {
        message: "Record deleted successfully",
    }))
}

/// API routes (mounted under /api)
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(create_record))
        .route("/records", get(list_records))
        .route("/records/{id}", get(get_record))
        .route("/edit/{id}", get(get_record))
        .route("/update/{id}", put(update_record))
        .route("/delete/{id}", delete(delete_record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_envelope_shape() {
        let body = serde_json::to_value(RecordsResponse {
            records: vec![User {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            }],
        })
        .expect("serialize failed");

        assert_eq!(
            body,
            serde_json::json!({
                "records": [{"id": 1, "name": "Ada", "email": "ada@example.com"}]
            })
        );
    }

    #[test]
    fn user_envelope_shape() {
        let body = serde_json::to_value(UserResponse {
            user: User {
                id: 2,
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
            },
        })
        .expect("serialize failed");

        assert_eq!(body["user"]["id"], 2);
        assert_eq!(body["user"]["email"], "grace@example.com");
    }
}
