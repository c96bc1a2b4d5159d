use crate::{dto::Claims, error::Error};
use bson::oid::ObjectId;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use std::{sync::Arc, time::Duration};
use time::OffsetDateTime;

///
/// Signs session tokens.
///
#[derive(Clone)]
pub struct JwtIssuer {
    inner: Arc<JwtIssuerInner>,
}

struct JwtIssuerInner {
    key: EncodingKey,
    header: Header,
    lifespan: Duration,
}

impl JwtIssuer {
    pub fn new(key: EncodingKey, algorithm: Algorithm, lifespan: Duration) -> Self {
        let inner = JwtIssuerInner {
            key,
            header: Header::new(algorithm),
            lifespan,
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn lifespan(&self) -> Duration {
        self.inner.lifespan
    }

    ///
    /// Creates token for the user that expires after configured lifespan
    ///
    /// ### Errors
    /// - [Error::LifespanOutOfRange] when expiration does not fit in unix timestamp
    /// - [Error::Jwt] when signing failed
    ///
    pub fn issue(&self, user_id: ObjectId, email: &str) -> Result<String, Error> {
        let lifespan =
            i64::try_from(self.inner.lifespan.as_secs()).map_err(|_| Error::LifespanOutOfRange)?;
        let exp = OffsetDateTime::now_utc()
            .unix_timestamp()
            .checked_add(lifespan)
            .ok_or(Error::LifespanOutOfRange)?;

        let claims = Claims {
            sub: user_id.to_hex(),
            email: email.to_string(),
            exp,
        };

        let token = jsonwebtoken::encode(&self.inner.header, &claims, &self.inner.key)?;

        Ok(token)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation};

    #[test]
    fn issue_token_decodes_with_same_secret() {
        let issuer = JwtIssuer::new(
            EncodingKey::from_secret(b"some secret"),
            Algorithm::HS256,
            Duration::from_secs(3600),
        );
        let user_id = ObjectId::new();

        let token = issuer.issue(user_id, "user@example.com").unwrap();

        let decoded = jsonwebtoken::decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"some secret"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, user_id.to_hex());
        assert_eq!(decoded.claims.email, "user@example.com");
        assert!(decoded.claims.exp > OffsetDateTime::now_utc().unix_timestamp());
    }

    #[test]
    fn issue_token_lifespan_too_long() {
        let issuer = JwtIssuer::new(
            EncodingKey::from_secret(b"some secret"),
            Algorithm::HS256,
            Duration::MAX,
        );

        let result = issuer.issue(ObjectId::new(), "user@example.com");

        assert!(matches!(result, Err(Error::LifespanOutOfRange)));
    }
}
