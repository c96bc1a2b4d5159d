use super::ApplicationEnv;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
};
use jwt_auth::JwtAuthLayer;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub auth: JwtAuthLayer,
    pub disable_default_body_limit: DefaultBodyLimit,
    pub body_limit: RequestBodyLimitLayer,
    pub cors: CorsLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> anyhow::Result<ApplicationMiddleware> {
    let auth = JwtAuthLayer::new(env.jwt_key.clone(), env.jwt_algorithms.clone());

    let disable_default_body_limit = DefaultBodyLimit::disable();
    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    let origins = env
        .cors_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    let trace = TraceLayer::new_for_http();

    Ok(ApplicationMiddleware {
        auth,
        disable_default_body_limit,
        body_limit,
        cors,
        trace,
    })
}
