use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Membership role, governs endpoint authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Coach,
}

/// Gender of a member. Training categories use a separate, wider enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "user_gender", rename_all = "UPPERCASE")]
pub enum Gender {
    Masculine,
    Feminine,
}

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub gender: Gender,
    pub role: Role,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub health_info: Option<String>,
    pub emergency_contact: Option<String>,
    pub responsible_name: Option<String>,
    pub responsible_phone: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Insert parameters for a new user. Password is already hashed here.
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub cpf: &'a str,
    pub phone: &'a str,
    pub gender: Gender,
    pub role: Role,
    pub password_hash: &'a str,
}

impl User {
    /// Find a user by exact email match.
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, cpf, phone, gender, role, password_hash,
                   health_info, emergency_contact, responsible_name, responsible_phone, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user. A unique violation on email surfaces as a database
    /// error; the service layer maps it to a duplicate-email failure.
    pub async fn create(db: &PgPool, new: &NewUser<'_>) -> sqlx::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, cpf, phone, gender, role, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, cpf, phone, gender, role, password_hash,
                      health_info, emergency_contact, responsible_name, responsible_phone, created_at
            "#,
        )
        .bind(new.name)
        .bind(new.email)
        .bind(new.cpf)
        .bind(new.phone)
        .bind(new.gender)
        .bind(new.role)
        .bind(new.password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// List all users with the given role, oldest first.
    pub async fn list_by_role(db: &PgPool, role: Role) -> sqlx::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, cpf, phone, gender, role, password_hash,
                   health_info, emergency_contact, responsible_name, responsible_phone, created_at
            FROM users
            WHERE role = $1
            ORDER BY created_at
            "#,
        )
        .bind(role)
        .fetch_all(db)
        .await?;
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_as_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"STUDENT\"");
        assert_eq!(serde_json::to_string(&Role::Coach).unwrap(), "\"COACH\"");
        let role: Role = serde_json::from_str("\"STUDENT\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn gender_rejects_mixed() {
        let gender: Gender = serde_json::from_str("\"FEMININE\"").unwrap();
        assert_eq!(gender, Gender::Feminine);
        assert!(serde_json::from_str::<Gender>("\"MIXED\"").is_err());
    }

    #[test]
    fn user_json_never_contains_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Ana Oliveira".into(),
            email: "ana@example.com".into(),
            cpf: "123.456.789-00".into(),
            phone: "11999990000".into(),
            gender: Gender::Feminine,
            role: Role::Student,
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".into(),
            health_info: None,
            emergency_contact: None,
            responsible_name: None,
            responsible_phone: None,
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
        assert!(json.contains("ana@example.com"));
    }
}
