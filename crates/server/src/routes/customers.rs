use axum::{extract::State, http::StatusCode, Json};

use service::customer::dto::{CustomerCreateDto, CustomerDto, CustomerUpdateDto};

use crate::errors::JsonApiError;
use crate::extract::{ApiPath, ValidatedJson};
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/customers", tag = "customers",
    request_body = crate::openapi::CustomerCreateDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CustomerCreateDto>,
) -> Result<Json<CustomerDto>, JsonApiError> {
    Ok(Json(state.customers.create(dto).await?))
}

#[utoipa::path(
    get, path = "/api/customers", tag = "customers",
    responses((status = 200, description = "All live customers", body = [crate::openapi::CustomerDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CustomerDto>>, JsonApiError> {
    Ok(Json(state.customers.list().await?))
}

#[utoipa::path(
    get, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<CustomerDto>, JsonApiError> {
    Ok(Json(state.customers.get(id).await?))
}

#[utoipa::path(
    put, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(dto): ValidatedJson<CustomerUpdateDto>,
) -> Result<Json<CustomerDto>, JsonApiError> {
    Ok(Json(state.customers.update(id, dto).await?))
}

#[utoipa::path(
    delete, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses((status = 200, description = "Deleted, or nothing to delete"))
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<StatusCode, JsonApiError> {
    state.customers.delete(id).await?;
    Ok(StatusCode::OK)
}
