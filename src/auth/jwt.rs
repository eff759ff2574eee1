use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::{
    auth::{claims::Claims, repo::User},
    config::JwtConfig,
    state::AppState,
};

/// Holds JWT signing and verification keys with config data.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            issuer,
            audience,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            audience,
            ttl: Duration::from_secs((ttl_minutes as u64) * 60),
        }
    }
}

impl JwtKeys {
    /// Issue a session token for the given user.
    pub fn sign(&self, user: &User) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user.id,
            role: user.role,
            name: user.name.clone(),
            gender: user.gender,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user.id, "jwt signed");
        Ok(token)
    }

    /// Check signature, expiry, issuer and audience; return the claims.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo::{Gender, Role};
    use uuid::Uuid;

    fn make_keys() -> JwtKeys {
        let state = AppState::fake();
        JwtKeys::from_ref(&state)
    }

    fn make_user(role: Role, gender: Gender) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Carlos".into(),
            email: "carlos@example.com".into(),
            cpf: "123".into(),
            phone: "123".into(),
            gender,
            role,
            password_hash: "hash".into(),
            health_info: None,
            emergency_contact: None,
            responsible_name: None,
            responsible_phone: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys();
        let user = make_user(Role::Coach, Gender::Masculine);
        let token = keys.sign(&user).expect("sign token");
        let claims = keys.verify(&token).expect("verify token");
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.role, Role::Coach);
        assert_eq!(claims.name, "Carlos");
        assert_eq!(claims.gender, Gender::Masculine);
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.aud, "test-audience");
    }

    #[tokio::test]
    async fn tokens_expire_after_eight_hours() {
        let keys = make_keys();
        let user = make_user(Role::Student, Gender::Feminine);
        let token = keys.sign(&user).expect("sign token");
        let claims = keys.verify(&token).expect("verify token");
        assert_eq!(claims.exp - claims.iat, 8 * 3600);
    }

    #[tokio::test]
    async fn verify_rejects_expired_token() {
        let keys = make_keys();
        let user = make_user(Role::Student, Gender::Feminine);

        // Craft a token whose expiry is already past the validation leeway
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            sub: user.id,
            role: user.role,
            name: user.name.clone(),
            gender: user.gender,
            iat: (now - TimeDuration::hours(9)).unix_timestamp() as usize,
            exp: (now - TimeDuration::hours(1)).unix_timestamp() as usize,
            iss: keys.issuer.clone(),
            aud: keys.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");

        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_wrong_issuer_or_audience() {
        let keys = make_keys();
        let user = make_user(Role::Student, Gender::Feminine);

        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            sub: user.id,
            role: user.role,
            name: user.name.clone(),
            gender: user.gender,
            iat: now.unix_timestamp() as usize,
            exp: (now + TimeDuration::hours(8)).unix_timestamp() as usize,
            iss: "someone-else".into(),
            aud: "other-audience".into(),
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");

        assert!(keys.verify(&token).is_err());
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let keys = make_keys();
        assert!(keys.verify("not-a-token").is_err());
    }
}
