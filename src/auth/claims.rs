use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::repo::{Gender, Role};

/// JWT payload carried by every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,      // user ID
    pub role: Role,     // STUDENT or COACH
    pub name: String,   // display name
    pub gender: Gender, // member gender
    pub iat: usize,     // issued at (unix timestamp)
    pub exp: usize,     // expires at (unix timestamp)
    pub iss: String,    // issuer
    pub aud: String,    // audience
}
