//! Transaction repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Transaction record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Option<Uuid>,
    pub bank_account_id: Option<Uuid>,
    pub credit_card_id: Option<Uuid>,
    pub loan_id: Option<Uuid>,
    pub description: String,
    pub amount: Decimal,
    pub kind: String,
    pub occurred_on: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub is_recurring: bool,
    pub recurrence_frequency: Option<String>,
    pub recurrence_end_date: Option<NaiveDate>,
    pub status: String,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a transaction
#[derive(Debug, Clone)]
pub struct CreateTransaction {
    pub user_id: Uuid,
    pub category_id: Option<Uuid>,
    pub bank_account_id: Option<Uuid>,
    pub credit_card_id: Option<Uuid>,
    pub loan_id: Option<Uuid>,
    pub description: String,
    pub amount: Decimal,
    pub kind: String,
    pub occurred_on: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub is_recurring: bool,
    pub recurrence_frequency: Option<String>,
    pub recurrence_end_date: Option<NaiveDate>,
    pub status: String,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Input for updating a transaction
#[derive(Debug, Clone, Default)]
pub struct UpdateTransaction {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub occurred_on: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub category_id: Option<Uuid>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Filters for listing transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub kind: Option<String>,
}

/// Transaction repository for database operations
pub struct TransactionRepository;

impl TransactionRepository {
    /// Create a new transaction
    pub async fn create(pool: &PgPool, input: CreateTransaction) -> Result<TransactionRecord> {
        let record = sqlx::query_as::<_, TransactionRecord>(
            r#"
            INSERT INTO transactions
                (user_id, category_id, bank_account_id, credit_card_id, loan_id,
                 description, amount, kind, occurred_on, due_date,
                 is_recurring, recurrence_frequency, recurrence_end_date,
                 status, notes, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING id, user_id, category_id, bank_account_id, credit_card_id, loan_id,
                      description, amount, kind, occurred_on, due_date,
                      is_recurring, recurrence_frequency, recurrence_end_date,
                      status, notes, tags, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.category_id)
        .bind(input.bank_account_id)
        .bind(input.credit_card_id)
        .bind(input.loan_id)
        .bind(&input.description)
        .bind(input.amount)
        .bind(&input.kind)
        .bind(input.occurred_on)
        .bind(input.due_date)
        .bind(input.is_recurring)
        .bind(&input.recurrence_frequency)
        .bind(input.recurrence_end_date)
        .bind(&input.status)
        .bind(&input.notes)
        .bind(&input.tags)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List a user's transactions with optional date/kind filters,
    /// newest first, paginated. Returns the page and the total count.
    pub async fn list_paginated(
        pool: &PgPool,
        user_id: Uuid,
        filter: &TransactionFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<TransactionRecord>, i64)> {
        let records = sqlx::query_as::<_, TransactionRecord>(
            r#"
            SELECT id, user_id, category_id, bank_account_id, credit_card_id, loan_id,
                   description, amount, kind, occurred_on, due_date,
                   is_recurring, recurrence_frequency, recurrence_end_date,
                   status, notes, tags, created_at, updated_at
            FROM transactions
            WHERE user_id = $1
              AND ($2::date IS NULL OR occurred_on >= $2)
              AND ($3::date IS NULL OR occurred_on <= $3)
              AND ($4::varchar IS NULL OR kind = $4)
            ORDER BY occurred_on DESC, created_at DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(user_id)
        .bind(filter.start)
        .bind(filter.end)
        .bind(&filter.kind)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM transactions
            WHERE user_id = $1
              AND ($2::date IS NULL OR occurred_on >= $2)
              AND ($3::date IS NULL OR occurred_on <= $3)
              AND ($4::varchar IS NULL OR kind = $4)
            "#,
        )
        .bind(user_id)
        .bind(filter.start)
        .bind(filter.end)
        .bind(&filter.kind)
        .fetch_one(pool)
        .await?;

        Ok((records, total))
    }

    /// Get a transaction by ID, scoped to its owner
    pub async fn get_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<TransactionRecord>> {
        let record = sqlx::query_as::<_, TransactionRecord>(
            r#"
            SELECT id, user_id, category_id, bank_account_id, credit_card_id, loan_id,
                   description, amount, kind, occurred_on, due_date,
                   is_recurring, recurrence_frequency, recurrence_end_date,
                   status, notes, tags, created_at, updated_at
            FROM transactions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Update a transaction; absent fields keep their current value
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: UpdateTransaction,
    ) -> Result<Option<TransactionRecord>> {
        let record = sqlx::query_as::<_, TransactionRecord>(
            r#"
            UPDATE transactions SET
                description = COALESCE($3, description),
                amount = COALESCE($4, amount),
                occurred_on = COALESCE($5, occurred_on),
                due_date = COALESCE($6, due_date),
                category_id = COALESCE($7, category_id),
                status = COALESCE($8, status),
                notes = COALESCE($9, notes),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, category_id, bank_account_id, credit_card_id, loan_id,
                      description, amount, kind, occurred_on, due_date,
                      is_recurring, recurrence_frequency, recurrence_end_date,
                      status, notes, tags, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(updates.description)
        .bind(updates.amount)
        .bind(updates.occurred_on)
        .bind(updates.due_date)
        .bind(updates.category_id)
        .bind(updates.status)
        .bind(updates.notes)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a transaction
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM transactions
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

#[cfg(test)]
mod tests {
    // Integration tests require database
}
