use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::state::AppState;

/// The authenticated caller, as asserted by a verified token. Claims are
/// trusted for the token's lifetime; the credential store is not re-checked,
/// so a renamed or deleted user stays "authenticated" until expiry.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub name: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Token expired")]
    Expired,
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let jwt = &state.config.jwt;
        Self::new(&jwt.secret, jwt.ttl_minutes)
    }
}

impl JwtKeys {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::from_secs((ttl_minutes as u64) * 60),
        }
    }

    pub fn sign(&self, user_id: &str, name: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            user_id: user_id.to_string(),
            name: name.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(%user_id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            },
        )?;
        debug!(user_id = %data.claims.user_id, "jwt verified");
        Ok(Identity {
            user_id: data.claims.user_id,
            name: data.claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys() -> JwtKeys {
        JwtKeys::new("dev-secret", 60)
    }

    #[test]
    fn sign_and_verify_round_trip() {
        let keys = make_keys();
        let token = keys.sign("a1", "Alice").expect("sign");
        let identity = keys.verify(&token).expect("verify");
        assert_eq!(identity.user_id, "a1");
        assert_eq!(identity.name, "Alice");
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = make_keys().sign("a1", "Alice").expect("sign");
        let other = JwtKeys::new("different-secret", 60);
        assert_eq!(other.verify(&token).unwrap_err(), TokenError::InvalidSignature);
    }

    #[test]
    fn verify_rejects_tampered_payload() {
        let keys = make_keys();
        let token = keys.sign("a1", "Alice").expect("sign");
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);
        let payload = &mut parts[1];
        let original = payload.remove(0);
        payload.insert(0, if original == 'A' { 'B' } else { 'A' });
        let tampered = parts.join(".");
        assert_ne!(tampered, token);
        assert!(keys.verify(&tampered).is_err());
    }

    #[test]
    fn verify_rejects_garbage_as_malformed() {
        let keys = make_keys();
        assert_eq!(keys.verify("not.a.jwt").unwrap_err(), TokenError::Malformed);
        assert_eq!(keys.verify("").unwrap_err(), TokenError::Malformed);
    }

    #[test]
    fn verify_rejects_expired_token() {
        let keys = make_keys();
        let now = OffsetDateTime::now_utc().unix_timestamp();
        // Two hours in the past, well beyond the default validation leeway.
        let claims = Claims {
            user_id: "a1".into(),
            name: "Alice".into(),
            iat: (now - 7200) as usize,
            exp: (now - 3600) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"dev-secret"),
        )
        .expect("encode");
        assert_eq!(keys.verify(&token).unwrap_err(), TokenError::Expired);
    }
}
