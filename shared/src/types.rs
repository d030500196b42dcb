//! API request and response types
//!
//! Field names follow the wire format of the public API (Portuguese), so
//! these structs serialize without rename attributes.

use crate::models::{
    AccountKind, BudgetPeriod, BudgetStatus, CategoryKind, Currency, GoalKind, GoalStatus, Theme,
    TransactionKind, TransactionStatus,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Static message response (logout and similar endpoints)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Authentication
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub senha: String,
    pub confirmar_senha: String,
    pub primeiro_nome: String,
    pub ultimo_nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Login response: the bearer token plus the public profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub usuario: UserProfile,
}

/// Public user profile (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub primeiro_nome: String,
    pub ultimo_nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    pub ativo: bool,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

impl UserProfile {
    /// Display name: first + last
    pub fn nome_completo(&self) -> String {
        format!("{} {}", self.primeiro_nome, self.ultimo_nome)
    }
}

// ============================================================================
// User settings
// ============================================================================

/// Per-user settings response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub id: Uuid,
    pub usuario_id: Uuid,
    pub moeda: Currency,
    pub formato_data: String,
    pub tema: Theme,
    pub notificacoes_email: bool,
    pub notificacoes_push: bool,
    pub dia_fechamento_mes: i32,
}

/// Partial settings update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub moeda: Option<Currency>,
    #[serde(default)]
    pub formato_data: Option<String>,
    #[serde(default)]
    pub tema: Option<Theme>,
    #[serde(default)]
    pub notificacoes_email: Option<bool>,
    #[serde(default)]
    pub notificacoes_push: Option<bool>,
    #[serde(default)]
    pub dia_fechamento_mes: Option<i32>,
}

// ============================================================================
// Categories
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub tipo: CategoryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icone: Option<String>,
    pub ativo: bool,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub tipo: CategoryKind,
    #[serde(default)]
    pub cor: Option<String>,
    #[serde(default)]
    pub icone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub cor: Option<String>,
    #[serde(default)]
    pub icone: Option<String>,
}

// ============================================================================
// Bank accounts
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_banco: Option<String>,
    pub tipo_conta: AccountKind,
    pub saldo: Decimal,
    pub saldo_inicial: Decimal,
    /// Derived: balance change since the account was registered
    pub variacao_saldo: Decimal,
    pub ativo: bool,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub nome: String,
    #[serde(default)]
    pub nome_banco: Option<String>,
    pub tipo_conta: AccountKind,
    #[serde(default)]
    pub saldo_inicial: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub nome_banco: Option<String>,
    #[serde(default)]
    pub tipo_conta: Option<AccountKind>,
    #[serde(default)]
    pub saldo: Option<Decimal>,
}

// ============================================================================
// Transactions
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub descricao: String,
    pub valor: Decimal,
    pub tipo_transacao: TransactionKind,
    pub data_transacao: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_vencimento: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conta_bancaria_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cartao_credito_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emprestimo_id: Option<Uuid>,
    pub eh_recorrente: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequencia_recorrencia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim_recorrencia: Option<NaiveDate>,
    pub status: TransactionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub etiquetas: Vec<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub descricao: String,
    pub valor: Decimal,
    pub tipo_transacao: TransactionKind,
    pub data_transacao: NaiveDate,
    #[serde(default)]
    pub data_vencimento: Option<NaiveDate>,
    #[serde(default)]
    pub categoria_id: Option<Uuid>,
    #[serde(default)]
    pub conta_bancaria_id: Option<Uuid>,
    #[serde(default)]
    pub cartao_credito_id: Option<Uuid>,
    #[serde(default)]
    pub emprestimo_id: Option<Uuid>,
    #[serde(default)]
    pub eh_recorrente: bool,
    #[serde(default)]
    pub frequencia_recorrencia: Option<String>,
    #[serde(default)]
    pub data_fim_recorrencia: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub observacoes: Option<String>,
    #[serde(default)]
    pub etiquetas: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub valor: Option<Decimal>,
    #[serde(default)]
    pub data_transacao: Option<NaiveDate>,
    #[serde(default)]
    pub data_vencimento: Option<NaiveDate>,
    #[serde(default)]
    pub categoria_id: Option<Uuid>,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub observacoes: Option<String>,
}

/// Transaction list query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionListQuery {
    #[serde(default)]
    pub inicio: Option<NaiveDate>,
    #[serde(default)]
    pub fim: Option<NaiveDate>,
    #[serde(default)]
    pub tipo: Option<TransactionKind>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

impl TransactionListQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Clamp pagination to sane bounds
    pub fn normalize(self) -> NormalizedTransactionQuery {
        let limit = self
            .limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT);
        let offset = self.offset.unwrap_or(0).max(0);
        NormalizedTransactionQuery {
            inicio: self.inicio,
            fim: self.fim,
            tipo: self.tipo,
            limit,
            offset,
        }
    }
}

/// Transaction query with pagination bounds applied
#[derive(Debug, Clone)]
pub struct NormalizedTransactionQuery {
    pub inicio: Option<NaiveDate>,
    pub fim: Option<NaiveDate>,
    pub tipo: Option<TransactionKind>,
    pub limit: i64,
    pub offset: i64,
}

/// Paginated transaction list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub items: Vec<TransactionResponse>,
    pub total_count: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

// ============================================================================
// Budgets
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub id: Uuid,
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<Uuid>,
    pub valor_limite: Decimal,
    pub valor_gasto: Decimal,
    /// Derived: limit minus spend (negative when over budget)
    pub valor_disponivel: Decimal,
    /// Derived: percent of the limit spent
    pub percentual_gasto: f64,
    /// Derived: four-state health
    pub status_orcamento: BudgetStatus,
    pub tipo_periodo: BudgetPeriod,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub ativo: bool,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBudgetRequest {
    pub nome: String,
    #[serde(default)]
    pub categoria_id: Option<Uuid>,
    pub valor_limite: Decimal,
    pub tipo_periodo: BudgetPeriod,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBudgetRequest {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub valor_limite: Option<Decimal>,
    #[serde(default)]
    pub valor_gasto: Option<Decimal>,
    #[serde(default)]
    pub data_inicio: Option<NaiveDate>,
    #[serde(default)]
    pub data_fim: Option<NaiveDate>,
}

// ============================================================================
// Financial goals
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalResponse {
    pub id: Uuid,
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub valor_objetivo: Decimal,
    pub valor_atual: Decimal,
    /// Derived: amount still missing
    pub valor_restante: Decimal,
    /// Derived: percent of the target reached
    pub percentual_atingido: f64,
    /// Derived: days until the target date
    pub dias_restantes: i64,
    /// Derived: required contribution per 30-day month
    pub valor_mensal_necessario: Decimal,
    pub tipo_meta: GoalKind,
    pub status: GoalStatus,
    pub data_inicio: NaiveDate,
    pub data_objetivo: NaiveDate,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub valor_objetivo: Decimal,
    pub tipo_meta: GoalKind,
    pub data_inicio: NaiveDate,
    pub data_objetivo: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGoalRequest {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub valor_objetivo: Option<Decimal>,
    #[serde(default)]
    pub valor_atual: Option<Decimal>,
    #[serde(default)]
    pub data_objetivo: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<GoalStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_optional_phone() {
        let json = r#"{
            "email": "a@x.com",
            "senha": "Abcdef12",
            "confirmar_senha": "Abcdef12",
            "primeiro_nome": "Ana",
            "ultimo_nome": "Silva"
        }"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.telefone, None);
        assert_eq!(req.primeiro_nome, "Ana");
    }

    #[test]
    fn test_user_profile_full_name() {
        let profile = UserProfile {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            primeiro_nome: "Ana".to_string(),
            ultimo_nome: "Silva".to_string(),
            telefone: None,
            ativo: true,
            criado_em: Utc::now(),
            atualizado_em: Utc::now(),
        };
        assert_eq!(profile.nome_completo(), "Ana Silva");
    }

    #[test]
    fn test_transaction_query_normalize_clamps_limit() {
        let query = TransactionListQuery {
            limit: Some(10_000),
            offset: Some(-5),
            ..Default::default()
        };
        let normalized = query.normalize();
        assert_eq!(normalized.limit, TransactionListQuery::MAX_LIMIT);
        assert_eq!(normalized.offset, 0);

        let defaults = TransactionListQuery::default().normalize();
        assert_eq!(defaults.limit, TransactionListQuery::DEFAULT_LIMIT);
    }
}
