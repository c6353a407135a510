use axum::{
    middleware,
    routing::{post, put},
    Router,
};

pub mod repo;
pub mod routes;

pub fn router() -> Router {
    // Id-bearing routes get the syntactic id check before their handler;
    // create and list never see an id and skip it.
    let id_routes = Router::new()
        .route("/:id", put(routes::update).delete(routes::delete))
        .route("/:id/like", post(routes::like))
        .route_layer(middleware::from_fn(
            crate::middleware::validate_repository_id,
        ));

    Router::new()
        .route("/", post(routes::create).get(routes::list))
        .merge(id_routes)
}
