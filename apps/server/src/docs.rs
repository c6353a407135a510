use axum::{routing::get, Json, Router};
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::features::repositories::routes::create,
        crate::features::repositories::routes::list,
        crate::features::repositories::routes::update,
        crate::features::repositories::routes::delete,
        crate::features::repositories::routes::like,
    ),
    components(
        schemas(
            repoboard_types::Repository,
            repoboard_types::CreateRepositoryReq,
            repoboard_types::UpdateRepositoryReq,
            repoboard_types::ErrorResponse,
        )
    ),
    tags(
        (name = "Repositories", description = "Repository catalog CRUD and like counters."),
    )
)]
pub struct ApiDoc;

pub fn router(openapi: OpenApiDoc) -> Router {
    let spec = openapi.clone();
    Router::new()
        .route(
            "/docs/openapi.json",
            get(move || {
                let spec = spec.clone();
                async move { Json(spec) }
            }),
        )
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi))
}
