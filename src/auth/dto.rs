use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo::{Gender, Role, User};

/// Request body for user registration. Unknown fields are rejected at the boundary.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
    pub gender: Gender,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after registration. No token: registration does not log in.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

/// Response returned after login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: PublicUser,
    pub token: String,
}

/// Public part of the user returned to the client. Never carries the hash.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub gender: Gender,
    pub role: Role,
    pub health_info: Option<String>,
    pub emergency_contact: Option<String>,
    pub responsible_name: Option<String>,
    pub responsible_phone: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            cpf: user.cpf,
            phone: user.phone,
            gender: user.gender,
            role: user.role,
            health_info: user.health_info,
            emergency_contact: user.emergency_contact,
            responsible_name: user.responsible_name,
            responsible_phone: user.responsible_phone,
            created_at: user.created_at,
        }
    }
}
