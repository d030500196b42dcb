//! User and settings repository
//!
//! Owns the onboarding transaction: a user row, its single settings row,
//! and the default category seed are inserted atomically. Authentication
//! lookups always filter on the active flag; users are never hard-deleted.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub ativo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User settings record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserSettingsRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub currency: String,
    pub date_format: String,
    pub theme: String,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub month_close_day: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

/// Input for updating user settings
#[derive(Debug, Clone, Default)]
pub struct UpdateUserSettings {
    pub currency: Option<String>,
    pub date_format: Option<String>,
    pub theme: Option<String>,
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub month_close_day: Option<i32>,
}

/// Category seed created for every new user: (name, description, kind,
/// color, icon)
pub const DEFAULT_CATEGORIES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Alimentação",
        "Gastos com comida e bebida",
        "despesa",
        "#FF6B6B",
        "restaurant",
    ),
    (
        "Transporte",
        "Gastos com locomoção",
        "despesa",
        "#4ECDC4",
        "directions_car",
    ),
    (
        "Moradia",
        "Aluguel, financiamento, condomínio",
        "despesa",
        "#45B7D1",
        "home",
    ),
    (
        "Saúde",
        "Médicos, medicamentos, plano de saúde",
        "despesa",
        "#96CEB4",
        "local_hospital",
    ),
    (
        "Salário",
        "Salário e bonificações",
        "receita",
        "#55A3FF",
        "work",
    ),
    (
        "Freelance",
        "Trabalhos extras",
        "receita",
        "#26DE81",
        "business_center",
    ),
];

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a user with its default settings and seed categories.
    ///
    /// Runs in a single transaction: on any failure nothing is committed,
    /// so a user is never visible without settings and categories. The
    /// `users.email` unique constraint fires here on concurrent duplicate
    /// registration; the caller maps that violation.
    pub async fn create_with_defaults(pool: &PgPool, input: NewUser) -> Result<UserRecord> {
        let mut tx = pool.begin().await?;

        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, first_name, last_name, phone,
                      ativo, created_at, updated_at
            "#,
        )
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.phone)
        .fetch_one(&mut *tx)
        .await?;

        // Exactly one settings row per user; column defaults supply the
        // fixed default values
        sqlx::query(
            r#"
            INSERT INTO user_settings (user_id)
            VALUES ($1)
            "#,
        )
        .bind(user.id)
        .execute(&mut *tx)
        .await?;

        for (name, description, kind, color, icon) in DEFAULT_CATEGORIES {
            sqlx::query(
                r#"
                INSERT INTO categories (user_id, name, description, kind, color, icon)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(user.id)
            .bind(name)
            .bind(description)
            .bind(kind)
            .bind(color)
            .bind(icon)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(user)
    }

    /// Find an active user by email (authentication lookup)
    pub async fn find_by_email_active(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, phone,
                   ativo, created_at, updated_at
            FROM users
            WHERE email = $1 AND ativo = TRUE
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find an active user by ID (token resolution lookup)
    pub async fn find_active_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, first_name, last_name, phone,
                   ativo, created_at, updated_at
            FROM users
            WHERE id = $1 AND ativo = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check if an email is already registered (optimization only; the
    /// unique constraint remains the authority under races)
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// Soft-delete a user. Dependent rows are kept; authentication lookups
    /// stop seeing the user immediately.
    pub async fn deactivate(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET ativo = FALSE, updated_at = NOW()
            WHERE id = $1 AND ativo = TRUE
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get a user's settings
    pub async fn get_settings(pool: &PgPool, user_id: Uuid) -> Result<Option<UserSettingsRecord>> {
        let settings = sqlx::query_as::<_, UserSettingsRecord>(
            r#"
            SELECT id, user_id, currency, date_format, theme,
                   email_notifications, push_notifications, month_close_day,
                   created_at, updated_at
            FROM user_settings
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(settings)
    }

    /// Update a user's settings; absent fields keep their current value
    pub async fn update_settings(
        pool: &PgPool,
        user_id: Uuid,
        updates: UpdateUserSettings,
    ) -> Result<Option<UserSettingsRecord>> {
        let settings = sqlx::query_as::<_, UserSettingsRecord>(
            r#"
            UPDATE user_settings SET
                currency = COALESCE($2, currency),
                date_format = COALESCE($3, date_format),
                theme = COALESCE($4, theme),
                email_notifications = COALESCE($5, email_notifications),
                push_notifications = COALESCE($6, push_notifications),
                month_close_day = COALESCE($7, month_close_day),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING id, user_id, currency, date_format, theme,
                      email_notifications, push_notifications, month_close_day,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(updates.currency)
        .bind(updates.date_format)
        .bind(updates.theme)
        .bind(updates.email_notifications)
        .bind(updates.push_notifications)
        .bind(updates.month_close_day)
        .fetch_optional(pool)
        .await?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_seed_shape() {
        assert_eq!(DEFAULT_CATEGORIES.len(), 6);
        let expense = DEFAULT_CATEGORIES
            .iter()
            .filter(|(_, _, kind, _, _)| *kind == "despesa")
            .count();
        let income = DEFAULT_CATEGORIES
            .iter()
            .filter(|(_, _, kind, _, _)| *kind == "receita")
            .count();
        assert_eq!(expense, 4);
        assert_eq!(income, 2);
    }

    #[test]
    fn test_default_category_colors_are_hex() {
        for (_, _, _, color, _) in DEFAULT_CATEGORIES {
            assert!(finance_manager_shared::validation::validate_hex_color(color).is_ok());
        }
    }
}
