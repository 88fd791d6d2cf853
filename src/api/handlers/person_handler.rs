//! Person handlers.
//!
//! Thin adapters: extract, call the matching use case, return its
//! `ServiceResponse` which carries the status code.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{PersonInput, PersonView, UpdatePersonCommand};
use crate::errors::AppResult;
use crate::types::ServiceResponse;

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring to look for in usernames (case-insensitive)
    #[serde(default)]
    #[param(example = "admin")]
    pub term: String,
}

/// Create person routes
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_people).post(create_person))
        .route("/search", get(search_people))
        .route(
            "/:username",
            get(get_person).put(update_person).delete(delete_person),
        )
}

/// Register a new person
#[utoipa::path(
    post,
    path = "/people",
    tag = "People",
    request_body = PersonInput,
    responses(
        (status = 201, description = "Person created", body = PersonView),
        (status = 400, description = "Invalid attribute or malformed body"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PersonInput>,
) -> AppResult<ServiceResponse<PersonView>> {
    state.people.create.execute(payload).await
}

/// List every person
#[utoipa::path(
    get,
    path = "/people",
    tag = "People",
    responses(
        (status = 200, description = "All people in insertion order", body = Vec<PersonView>)
    )
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<ServiceResponse<Vec<PersonView>>> {
    state.people.list.execute(()).await
}

/// Search people by username substring
#[utoipa::path(
    get,
    path = "/people/search",
    tag = "People",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching people, possibly none", body = Vec<PersonView>)
    )
)]
pub async fn search_people(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<ServiceResponse<Vec<PersonView>>> {
    state.people.search.execute(params.term).await
}

/// Get a person by exact username
#[utoipa::path(
    get,
    path = "/people/{username}",
    tag = "People",
    params(("username" = String, Path, description = "Exact username")),
    responses(
        (status = 200, description = "Person found", body = PersonView),
        (status = 404, description = "Person not found")
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<ServiceResponse<PersonView>> {
    state.people.get.execute(username).await
}

/// Replace a person's username, password and role
#[utoipa::path(
    put,
    path = "/people/{username}",
    tag = "People",
    params(("username" = String, Path, description = "Current username")),
    request_body = PersonInput,
    responses(
        (status = 200, description = "Person updated", body = PersonView),
        (status = 400, description = "Invalid attribute or malformed body"),
        (status = 404, description = "Person not found"),
        (status = 409, description = "New username already taken")
    )
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(username): Path<String>,
    JsonBody(payload): JsonBody<PersonInput>,
) -> AppResult<ServiceResponse<PersonView>> {
    state
        .people
        .update
        .execute(UpdatePersonCommand::new(username, payload))
        .await
}

/// Delete a person
#[utoipa::path(
    delete,
    path = "/people/{username}",
    tag = "People",
    params(("username" = String, Path, description = "Exact username")),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 404, description = "Person not found")
    )
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<ServiceResponse<()>> {
    state.people.delete.execute(username).await
}
