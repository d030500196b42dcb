//! Domain enums for the financial entities
//!
//! Every kind/status column in the database stores the lowercase wire value
//! (the same strings the check constraints accept). These enums are the
//! canonical source for those value sets: parse on the way in, `Display`
//! on the way out.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Categories
// ============================================================================

/// Category kind: income or expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// "receita": income
    Receita,
    /// "despesa": expense
    Despesa,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Receita => "receita",
            CategoryKind::Despesa => "despesa",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receita" => Ok(CategoryKind::Receita),
            "despesa" => Ok(CategoryKind::Despesa),
            _ => Err(format!("Unknown category kind: {}", s)),
        }
    }
}

// ============================================================================
// User settings
// ============================================================================

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Claro,
    Escuro,
    #[default]
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Claro => "claro",
            Theme::Escuro => "escuro",
            Theme::Auto => "auto",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claro" => Ok(Theme::Claro),
            "escuro" => Ok(Theme::Escuro),
            "auto" => Ok(Theme::Auto),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

// ============================================================================
// Bank accounts
// ============================================================================

/// Bank account kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Corrente,
    Poupanca,
    Investimento,
    Dinheiro,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Corrente => "corrente",
            AccountKind::Poupanca => "poupanca",
            AccountKind::Investimento => "investimento",
            AccountKind::Dinheiro => "dinheiro",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AccountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corrente" => Ok(AccountKind::Corrente),
            "poupanca" => Ok(AccountKind::Poupanca),
            "investimento" => Ok(AccountKind::Investimento),
            "dinheiro" => Ok(AccountKind::Dinheiro),
            _ => Err(format!("Unknown account kind: {}", s)),
        }
    }
}

// ============================================================================
// Transactions
// ============================================================================

/// Transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Receita,
    Despesa,
    Transferencia,
    PagamentoEmprestimo,
    PagamentoCartao,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Receita => "receita",
            TransactionKind::Despesa => "despesa",
            TransactionKind::Transferencia => "transferencia",
            TransactionKind::PagamentoEmprestimo => "pagamento_emprestimo",
            TransactionKind::PagamentoCartao => "pagamento_cartao",
        }
    }

    /// Whether this kind increases the user's balance
    pub fn is_income(&self) -> bool {
        matches!(self, TransactionKind::Receita)
    }

    /// Whether this kind decreases the user's balance
    pub fn is_expense(&self) -> bool {
        !self.is_income() && !matches!(self, TransactionKind::Transferencia)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receita" => Ok(TransactionKind::Receita),
            "despesa" => Ok(TransactionKind::Despesa),
            "transferencia" => Ok(TransactionKind::Transferencia),
            "pagamento_emprestimo" => Ok(TransactionKind::PagamentoEmprestimo),
            "pagamento_cartao" => Ok(TransactionKind::PagamentoCartao),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

/// Transaction lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pendente,
    #[default]
    Concluida,
    Cancelada,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pendente => "pendente",
            TransactionStatus::Concluida => "concluida",
            TransactionStatus::Cancelada => "cancelada",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendente" => Ok(TransactionStatus::Pendente),
            "concluida" => Ok(TransactionStatus::Concluida),
            "cancelada" => Ok(TransactionStatus::Cancelada),
            _ => Err(format!("Unknown transaction status: {}", s)),
        }
    }
}

// ============================================================================
// Budgets
// ============================================================================

/// Budget period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Mensal,
    Anual,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Mensal => "mensal",
            BudgetPeriod::Anual => "anual",
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mensal" => Ok(BudgetPeriod::Mensal),
            "anual" => Ok(BudgetPeriod::Anual),
            _ => Err(format!("Unknown budget period: {}", s)),
        }
    }
}

/// Derived budget health, from percent spent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Normal,
    Moderado,
    Atencao,
    Estourado,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Normal => "normal",
            BudgetStatus::Moderado => "moderado",
            BudgetStatus::Atencao => "atencao",
            BudgetStatus::Estourado => "estourado",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Financial goals
// ============================================================================

/// Financial goal kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Economia,
    Investimento,
    Compra,
    Viagem,
    Emergencia,
}

impl GoalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::Economia => "economia",
            GoalKind::Investimento => "investimento",
            GoalKind::Compra => "compra",
            GoalKind::Viagem => "viagem",
            GoalKind::Emergencia => "emergencia",
        }
    }
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GoalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "economia" => Ok(GoalKind::Economia),
            "investimento" => Ok(GoalKind::Investimento),
            "compra" => Ok(GoalKind::Compra),
            "viagem" => Ok(GoalKind::Viagem),
            "emergencia" => Ok(GoalKind::Emergencia),
            _ => Err(format!("Unknown goal kind: {}", s)),
        }
    }
}

/// Financial goal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Ativa,
    Concluida,
    Pausada,
    Cancelada,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Ativa => "ativa",
            GoalStatus::Concluida => "concluida",
            GoalStatus::Pausada => "pausada",
            GoalStatus::Cancelada => "cancelada",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ativa" => Ok(GoalStatus::Ativa),
            "concluida" => Ok(GoalStatus::Concluida),
            "pausada" => Ok(GoalStatus::Pausada),
            "cancelada" => Ok(GoalStatus::Cancelada),
            _ => Err(format!("Unknown goal status: {}", s)),
        }
    }
}

// ============================================================================
// Currencies
// ============================================================================

/// Supported display currencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "BRL")]
    Brl,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BRL" => Ok(Currency::Brl),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_kind_round_trip() {
        for kind in [CategoryKind::Receita, CategoryKind::Despesa] {
            assert_eq!(CategoryKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_transaction_kind_wire_values() {
        assert_eq!(
            TransactionKind::PagamentoEmprestimo.to_string(),
            "pagamento_emprestimo"
        );
        assert_eq!(
            TransactionKind::from_str("pagamento_cartao").unwrap(),
            TransactionKind::PagamentoCartao
        );
        assert!(TransactionKind::from_str("saque").is_err());
    }

    #[test]
    fn test_transaction_kind_direction() {
        assert!(TransactionKind::Receita.is_income());
        assert!(TransactionKind::Despesa.is_expense());
        assert!(TransactionKind::PagamentoCartao.is_expense());
        assert!(!TransactionKind::Transferencia.is_income());
        assert!(!TransactionKind::Transferencia.is_expense());
    }

    #[test]
    fn test_theme_default_is_auto() {
        assert_eq!(Theme::default(), Theme::Auto);
    }

    #[test]
    fn test_currency_parse_is_case_insensitive() {
        assert_eq!(Currency::from_str("brl").unwrap(), Currency::Brl);
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);
        assert!(Currency::from_str("JPY").is_err());
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&TransactionKind::PagamentoEmprestimo).unwrap();
        assert_eq!(json, "\"pagamento_emprestimo\"");
        let theme: Theme = serde_json::from_str("\"escuro\"").unwrap();
        assert_eq!(theme, Theme::Escuro);
    }
}
