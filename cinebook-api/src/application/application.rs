use super::{ApplicationMiddleware, ApplicationState};
use crate::routing::routing;
use axum::Router;
use std::path::Path;

pub fn create_application(
    application_state: ApplicationState,
    application_middleware: ApplicationMiddleware,
    uploads_directory: &Path,
) -> Router {
    routing(&application_middleware, uploads_directory)
        .with_state(application_state)
        .layer(application_middleware.disable_default_body_limit)
        .layer(application_middleware.body_limit)
        .layer(application_middleware.cors)
        .layer(application_middleware.trace)
}
