use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use service::user::dto::{UserCreateDto, UserDto, UserUpdateDto};

use crate::errors::JsonApiError;
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub from_date: NaiveDate,
    /// Inclusive upper bound, `YYYY-MM-DD`
    pub to_date: NaiveDate,
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::UserCreateDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error or Forbidden Age"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UserCreateDto>,
) -> Result<Json<UserDto>, JsonApiError> {
    let user = state.users.create(dto).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get, path = "/api/users", tag = "users",
    responses((status = 200, description = "All live users", body = [crate::openapi::UserDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, JsonApiError> {
    let users = state.users.list().await?;
    info!(count = users.len(), "list users");
    Ok(Json(users))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<UserDto>, JsonApiError> {
    Ok(Json(state.users.get(id).await?))
}

#[utoipa::path(
    put, path = "/api/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = crate::openapi::UserUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error or Forbidden Age"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(dto): ValidatedJson<UserUpdateDto>,
) -> Result<Json<UserDto>, JsonApiError> {
    Ok(Json(state.users.update(id, dto).await?))
}

#[utoipa::path(
    delete, path = "/api/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses((status = 200, description = "Deleted, or nothing to delete"))
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<StatusCode, JsonApiError> {
    state.users.delete(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get, path = "/api/users/search", tag = "users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Users born within the range", body = [crate::openapi::UserDoc]),
        (status = 400, description = "Missing, unparseable or inverted dates")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<UserDto>>, JsonApiError> {
    let users = state.users.search_by_birth_date(q.from_date, q.to_date).await?;
    info!(from = %q.from_date, to = %q.to_date, count = users.len(), "search users by birth date");
    Ok(Json(users))
}
