use anyhow::Context;
use axum::extract::FromRef;
use lazy_static::lazy_static;
use regex::Regex;
use tokio::task;
use tracing::{info, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::{NewUser, Role, User},
    },
    error::ApiError,
    state::AppState,
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Register a new user. Succeeds exactly once per email: a concurrent
/// duplicate loses the race on the unique constraint and maps to
/// `DuplicateEmail` the same as the lookup path.
pub async fn register(state: &AppState, req: RegisterRequest) -> Result<(), ApiError> {
    if !is_valid_email(&req.email) {
        warn!(email = %req.email, "invalid email");
        return Err(ApiError::Validation("invalid email".into()));
    }
    if req.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::Validation("password too short".into()));
    }

    if User::find_by_email(&state.db, &req.email).await?.is_some() {
        warn!(email = %req.email, "email already registered");
        return Err(ApiError::DuplicateEmail);
    }

    // Argon2 is CPU-bound; keep it off the async workers
    let password = req.password.clone();
    let hash = task::spawn_blocking(move || hash_password(&password))
        .await
        .context("password hashing task")??;

    let new_user = NewUser {
        name: &req.name,
        email: &req.email,
        cpf: &req.cpf,
        phone: &req.phone,
        gender: req.gender,
        role: req.role.unwrap_or(Role::Student),
        password_hash: &hash,
    };

    let user = User::create(&state.db, &new_user).await.map_err(|e| {
        if e.as_database_error()
            .is_some_and(|db| db.is_unique_violation())
        {
            ApiError::DuplicateEmail
        } else {
            ApiError::Persistence(e)
        }
    })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(())
}

/// Verify credentials and issue a session token with the user's claims.
pub async fn login(state: &AppState, req: LoginRequest) -> Result<LoginResponse, ApiError> {
    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %req.email, "login unknown email");
            ApiError::UserNotFound
        })?;

    let password = req.password;
    let hash = user.password_hash.clone();
    let ok = task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .context("password verification task")??;

    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(state);
    let token = keys.sign(&user)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(LoginResponse {
        user: user.into(),
        token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("joao@email.com"));
        assert!(is_valid_email("ana.oliveira@club.org.br"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("spaces in@mail.com"));
        assert!(!is_valid_email("no-domain@"));
    }
}
