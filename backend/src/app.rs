use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{
        create_task, delete_task, get_task, list_tasks, method_not_allowed, not_found,
        update_task,
    },
    storage::Storage,
};

/// Builds the router. `storage` is the only state the handlers share.
pub fn create_app(storage: Storage) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(list_tasks)
                .post(create_task)
                .fallback(method_not_allowed),
        )
        .route(
            "/tasks/:id",
            get(get_task)
                .put(update_task)
                .delete(delete_task)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(storage)
}
