//! Budget repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Budget record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BudgetRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Option<Uuid>,
    pub name: String,
    pub limit_amount: Decimal,
    pub spent_amount: Decimal,
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a budget
#[derive(Debug, Clone)]
pub struct CreateBudget {
    pub user_id: Uuid,
    pub category_id: Option<Uuid>,
    pub name: String,
    pub limit_amount: Decimal,
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Input for updating a budget
#[derive(Debug, Clone, Default)]
pub struct UpdateBudget {
    pub name: Option<String>,
    pub limit_amount: Option<Decimal>,
    pub spent_amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Budget repository for database operations
pub struct BudgetRepository;

impl BudgetRepository {
    /// Create a new budget with zero spend
    pub async fn create(pool: &PgPool, input: CreateBudget) -> Result<BudgetRecord> {
        let record = sqlx::query_as::<_, BudgetRecord>(
            r#"
            INSERT INTO budgets (user_id, category_id, name, limit_amount, period, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, category_id, name, limit_amount, spent_amount,
                      period, start_date, end_date, ativo, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.category_id)
        .bind(&input.name)
        .bind(input.limit_amount)
        .bind(&input.period)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List a user's active budgets
    pub async fn list_active(pool: &PgPool, user_id: Uuid) -> Result<Vec<BudgetRecord>> {
        let records = sqlx::query_as::<_, BudgetRecord>(
            r#"
            SELECT id, user_id, category_id, name, limit_amount, spent_amount,
                   period, start_date, end_date, ativo, created_at, updated_at
            FROM budgets
            WHERE user_id = $1 AND ativo = TRUE
            ORDER BY start_date DESC, name
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Update a budget; absent fields keep their current value
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: UpdateBudget,
    ) -> Result<Option<BudgetRecord>> {
        let record = sqlx::query_as::<_, BudgetRecord>(
            r#"
            UPDATE budgets SET
                name = COALESCE($3, name),
                limit_amount = COALESCE($4, limit_amount),
                spent_amount = COALESCE($5, spent_amount),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, category_id, name, limit_amount, spent_amount,
                      period, start_date, end_date, ativo, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(updates.name)
        .bind(updates.limit_amount)
        .bind(updates.spent_amount)
        .bind(updates.start_date)
        .bind(updates.end_date)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Soft-delete a budget
    pub async fn deactivate(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE budgets SET ativo = FALSE, updated_at = NOW()
            WHERE id = $1 AND user_id = $2 AND ativo = TRUE
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database
}
