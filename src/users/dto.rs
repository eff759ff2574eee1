use serde::Serialize;
use uuid::Uuid;

use crate::auth::repo::{Gender, Role, User};

/// Listing entry for the student roster.
#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub gender: Gender,
    pub cpf: String,
    pub phone: String,
}

impl From<User> for StudentSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            gender: user.gender,
            cpf: user.cpf,
            phone: user.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn summary_keeps_roster_fields_and_drops_the_rest() {
        let user = User {
            id: Uuid::new_v4(),
            name: "João Silva".into(),
            email: "joao@example.com".into(),
            cpf: "123".into(),
            phone: "123".into(),
            gender: Gender::Masculine,
            role: Role::Student,
            password_hash: "hash".into(),
            health_info: Some("asthma".into()),
            emergency_contact: None,
            responsible_name: None,
            responsible_phone: None,
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&StudentSummary::from(user)).unwrap();
        assert!(json.contains("\"role\":\"STUDENT\""));
        assert!(json.contains("\"gender\":\"MASCULINE\""));
        assert!(!json.contains("password"));
        assert!(!json.contains("health_info"));
    }
}
