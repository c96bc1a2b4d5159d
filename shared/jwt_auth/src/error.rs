#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("token lifespan out of range")]
    LifespanOutOfRange,
}
