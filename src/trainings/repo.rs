use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Audience of a training session. Unlike member gender this includes MIXED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "training_category", rename_all = "UPPERCASE")]
pub enum TrainingCategory {
    Masculine,
    Feminine,
    Mixed,
}

/// Training session record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Training {
    pub id: Uuid,
    pub title: String,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub category: TrainingCategory,
    pub coach_id: Uuid,
    pub created_at: OffsetDateTime,
}

/// Training joined with the coach's display name, for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrainingWithCoach {
    pub id: Uuid,
    pub title: String,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub category: TrainingCategory,
    pub coach_id: Uuid,
    pub coach_name: String,
    pub created_at: OffsetDateTime,
}

pub struct NewTraining<'a> {
    pub title: &'a str,
    pub day_of_week: i32,
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub category: TrainingCategory,
    pub coach_id: Uuid,
}

impl Training {
    /// Insert a new training session owned by the given coach.
    pub async fn create(db: &PgPool, new: &NewTraining<'_>) -> sqlx::Result<Training> {
        let training = sqlx::query_as::<_, Training>(
            r#"
            INSERT INTO trainings (title, day_of_week, start_time, end_time, category, coach_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, day_of_week, start_time, end_time, category, coach_id, created_at
            "#,
        )
        .bind(new.title)
        .bind(new.day_of_week)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(new.category)
        .bind(new.coach_id)
        .fetch_one(db)
        .await?;
        Ok(training)
    }

    /// List the full weekly schedule with coach names.
    pub async fn list(db: &PgPool) -> sqlx::Result<Vec<TrainingWithCoach>> {
        let rows = sqlx::query_as::<_, TrainingWithCoach>(
            r#"
            SELECT t.id, t.title, t.day_of_week, t.start_time, t.end_time,
                   t.category, t.coach_id, u.name AS coach_name, t.created_at
            FROM trainings t
            JOIN users u ON u.id = t.coach_id
            ORDER BY t.day_of_week, t.start_time
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_as_uppercase() {
        assert_eq!(
            serde_json::to_string(&TrainingCategory::Mixed).unwrap(),
            "\"MIXED\""
        );
        let category: TrainingCategory = serde_json::from_str("\"FEMININE\"").unwrap();
        assert_eq!(category, TrainingCategory::Feminine);
    }
}
