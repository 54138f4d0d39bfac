//! Page routes: rendered list and forms, plus form submissions
//!
//! Form posts follow the browser flow: update and delete bounce back to
//! the record list with a redirect, create answers 201 JSON.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;

use crate::db::UserRepo;
use crate::http::error::ApiError;
use crate::http::routes::common::MessageResponse;
use crate::http::server::AppState;
use crate::http::views;

/// Form body for POST /create
#[derive(Deserialize)]
pub struct CreateForm {
    pub name: String,
    pub email: String,
}

/// Form body for POST /update; the id rides in a hidden field
#[derive(Deserialize)]
pub struct UpdateForm {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// GET / - render the record list
async fn record_list(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let users = UserRepo::new(&state.pool)
        .list()
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to fetch data"))?;

    Ok(Html(views::record_list(&users)))
}

/// GET /add - render the add-record form
async fn add_form() -> Html<String> {
    Html(views::add_form())
}

/// POST /create - insert from the form body
async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CreateForm>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = UserRepo::new(&state.pool)
        .create(&form.name, &form.email)
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

/// GET /edit/{id} - render the edit form for one record
async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let user = UserRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to fetch data"))?;

    Ok(Html(views::edit_form(&user)))
}

/// POST /update - apply the edit form, then bounce to the list
async fn update(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UpdateForm>,
) -> Result<Redirect, ApiError> {
    let affected = UserRepo::new(&state.pool)
        .update(form.id, &form.name, &form.email)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to update the record"))?;

    tracing::info!(id = form.id, affected, "record updated");
    Ok(Redirect::to("/"))
}

/// GET /delete/{id} - delete, then bounce to the list
async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    let affected = UserRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_db(e, "Failed to delete the record"))?;

    tracing::info!(id, affected, "record deleted");
    Ok(Redirect::to("/"))
}

/// Page routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(record_list))
        .route("/add", get(add_form))
        .route("/create", post(create))
        .route("/edit/{id}", get(edit_form))
        .route("/update", post(update))
        .route("/delete/{id}", get(delete))
}
