//! Bank account repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Bank account record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub bank_name: Option<String>,
    pub kind: String,
    pub balance: Decimal,
    pub initial_balance: Decimal,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a bank account
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub user_id: Uuid,
    pub name: String,
    pub bank_name: Option<String>,
    pub kind: String,
    pub initial_balance: Decimal,
}

/// Input for updating a bank account
#[derive(Debug, Clone, Default)]
pub struct UpdateAccount {
    pub name: Option<String>,
    pub bank_name: Option<String>,
    pub kind: Option<String>,
    pub balance: Option<Decimal>,
}

/// Bank account repository for database operations
pub struct AccountRepository;

impl AccountRepository {
    /// Create a new account; the opening balance is the initial balance
    pub async fn create(pool: &PgPool, input: CreateAccount) -> Result<AccountRecord> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            INSERT INTO bank_accounts (user_id, name, bank_name, kind, balance, initial_balance)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, user_id, name, bank_name, kind, balance, initial_balance,
                      ativo, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(&input.bank_name)
        .bind(&input.kind)
        .bind(input.initial_balance)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List a user's active accounts
    pub async fn list_active(pool: &PgPool, user_id: Uuid) -> Result<Vec<AccountRecord>> {
        let records = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, user_id, name, bank_name, kind, balance, initial_balance,
                   ativo, created_at, updated_at
            FROM bank_accounts
            WHERE user_id = $1 AND ativo = TRUE
            ORDER BY name
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get an account by ID, scoped to its owner
    pub async fn get_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<AccountRecord>> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, user_id, name, bank_name, kind, balance, initial_balance,
                   ativo, created_at, updated_at
            FROM bank_accounts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Update an account; absent fields keep their current value
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: UpdateAccount,
    ) -> Result<Option<AccountRecord>> {
        let record = sqlx::query_as::<_, AccountRecord>(
            r#"
            UPDATE bank_accounts SET
                name = COALESCE($3, name),
                bank_name = COALESCE($4, bank_name),
                kind = COALESCE($5, kind),
                balance = COALESCE($6, balance),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, bank_name, kind, balance, initial_balance,
                      ativo, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(updates.name)
        .bind(updates.bank_name)
        .bind(updates.kind)
        .bind(updates.balance)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Soft-delete an account (transactions keep referencing it)
    pub async fn deactivate(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE bank_accounts SET ativo = FALSE, updated_at = NOW()
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
