//! Financial goal repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Financial goal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GoalRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub kind: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a financial goal
#[derive(Debug, Clone)]
pub struct CreateGoal {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub kind: String,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
}

/// Input for updating a financial goal
#[derive(Debug, Clone, Default)]
pub struct UpdateGoal {
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub target_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Financial goal repository for database operations
pub struct GoalRepository;

impl GoalRepository {
    /// Create a new goal with zero progress
    pub async fn create(pool: &PgPool, input: CreateGoal) -> Result<GoalRecord> {
        let record = sqlx::query_as::<_, GoalRecord>(
            r#"
            INSERT INTO financial_goals
                (user_id, name, description, target_amount, kind, start_date, target_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, name, description, target_amount, current_amount,
                      start_date, target_date, kind, status, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.target_amount)
        .bind(&input.kind)
        .bind(input.start_date)
        .bind(input.target_date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List a user's goals, most recent first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<GoalRecord>> {
        let records = sqlx::query_as::<_, GoalRecord>(
            r#"
            SELECT id, user_id, name, description, target_amount, current_amount,
                   start_date, target_date, kind, status, created_at, updated_at
            FROM financial_goals
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Update a goal; absent fields keep their current value
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: UpdateGoal,
    ) -> Result<Option<GoalRecord>> {
        let record = sqlx::query_as::<_, GoalRecord>(
            r#"
            UPDATE financial_goals SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                target_amount = COALESCE($5, target_amount),
                current_amount = COALESCE($6, current_amount),
                target_date = COALESCE($7, target_date),
                status = COALESCE($8, status),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, description, target_amount, current_amount,
                      start_date, target_date, kind, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(updates.name)
        .bind(updates.description)
        .bind(updates.target_amount)
        .bind(updates.current_amount)
        .bind(updates.target_date)
        .bind(updates.status)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a goal
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM financial_goals
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
