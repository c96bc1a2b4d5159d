use super::jwt_auth_future::JwtAuthFuture;
use crate::{
    cookie,
    dto::{Claims, User},
};
use anyhow::anyhow;
use axum::{extract::Request, http::HeaderMap, response::Response};
use bson::oid::ObjectId;
use jsonwebtoken::{DecodingKey, Validation};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;

#[derive(Clone)]
pub struct JwtAuthService<S> {
    inner: S,
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl<S> JwtAuthService<S> {
    pub fn new(inner: S, validation: Arc<Validation>, key: Arc<DecodingKey>) -> Self {
        Self {
            inner,
            validation,
            key,
        }
    }

    fn parse_session(&self, headers: &HeaderMap) -> anyhow::Result<User> {
        let Some(token) = cookie::find_token(headers) else {
            return Err(anyhow!("missing session token"));
        };
        let token_data = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|err| anyhow!("invalid jwt: {err}"))?;
        let id = ObjectId::parse_str(&token_data.claims.sub)
            .map_err(|err| anyhow!("invalid jwt subject: {err}"))?;

        Ok(User::new(id, token_data.claims.email))
    }
}

impl<S> Service<Request> for JwtAuthService<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = JwtAuthFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        match self.parse_session(req.headers()) {
            Ok(user) => {
                // crate span that holds user information
                let span = tracing::info_span!("user", id = %user.id);

                req.extensions_mut().insert(user);

                JwtAuthFuture::Authorized {
                    inner: self.inner.call(req),
                    span,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "auth error");
                JwtAuthFuture::Unauthorized
            }
        }
    }
}
