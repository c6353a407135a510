use crate::AppState;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use repoboard_types::{
    CreateRepositoryReq, ErrorResponse, Repository, RepositoryPathParams, UpdateRepositoryReq,
};

use super::repo::StoreError;

// 400 rather than 404 for an unknown id: the upstream API shipped that way
// and clients depend on it.
fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("Repository not found")),
    )
}

#[utoipa::path(
    post,
    path = "/repositories",
    request_body = CreateRepositoryReq,
    responses(
        (status = 200, description = "Repository created", body = Repository),
    ),
    tag = "Repositories"
)]
pub async fn create(
    Extension(st): Extension<AppState>,
    Json(req): Json<CreateRepositoryReq>,
) -> Json<Repository> {
    let CreateRepositoryReq { title, url, techs } = req;
    Json(st.repositories.create(title, url, techs).await)
}

#[utoipa::path(
    get,
    path = "/repositories",
    responses(
        (status = 200, description = "All repositories in insertion order", body = [Repository]),
    ),
    tag = "Repositories"
)]
pub async fn list(Extension(st): Extension<AppState>) -> Json<Vec<Repository>> {
    Json(st.repositories.list().await)
}

#[utoipa::path(
    put,
    path = "/repositories/{id}",
    params(RepositoryPathParams),
    request_body = UpdateRepositoryReq,
    responses(
        (status = 200, description = "Repository replaced, likes preserved", body = Repository),
        (status = 400, description = "Invalid or unknown repository id", body = ErrorResponse),
    ),
    tag = "Repositories"
)]
pub async fn update(
    Extension(st): Extension<AppState>,
    Path(RepositoryPathParams { id }): Path<RepositoryPathParams>,
    Json(req): Json<UpdateRepositoryReq>,
) -> Result<Json<Repository>, (StatusCode, Json<ErrorResponse>)> {
    let UpdateRepositoryReq { title, url, techs } = req;
    let updated = st
        .repositories
        .replace(id, title, url, techs)
        .await
        .map_err(|err| match err {
            StoreError::NotFound => not_found(),
        })?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/repositories/{id}",
    params(RepositoryPathParams),
    responses(
        (status = 204, description = "Repository deleted"),
        (status = 400, description = "Invalid or unknown repository id", body = ErrorResponse),
    ),
    tag = "Repositories"
)]
pub async fn delete(
    Extension(st): Extension<AppState>,
    Path(RepositoryPathParams { id }): Path<RepositoryPathParams>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    st.repositories.delete(id).await.map_err(|err| match err {
        StoreError::NotFound => not_found(),
    })?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/repositories/{id}/like",
    params(RepositoryPathParams),
    responses(
        (status = 200, description = "Like counter incremented", body = Repository),
        (status = 400, description = "Invalid or unknown repository id", body = ErrorResponse),
    ),
    tag = "Repositories"
)]
pub async fn like(
    Extension(st): Extension<AppState>,
    Path(RepositoryPathParams { id }): Path<RepositoryPathParams>,
) -> Result<Json<Repository>, (StatusCode, Json<ErrorResponse>)> {
    let liked = st.repositories.like(id).await.map_err(|err| match err {
        StoreError::NotFound => not_found(),
    })?;
    Ok(Json(liked))
}
