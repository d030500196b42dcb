//! Financial derivation functions
//!
//! Display-only figures (percentages, formatted currency, overdue flags)
//! are pure functions over a snapshot of stored fields. Nothing here reads
//! the clock: date-dependent derivations take `today` as an argument so
//! callers and tests control it.

use crate::models::{BudgetStatus, Currency};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Currency display
// ============================================================================

impl Currency {
    /// Display symbol, e.g. `R$` for BRL
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    /// Human-readable currency name (Portuguese, as displayed in the UI)
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Brl => "Real Brasileiro",
            Currency::Usd => "Dólar Americano",
            Currency::Eur => "Euro",
            Currency::Gbp => "Libra Esterlina",
        }
    }
}

/// Format a monetary amount with the currency's symbol and grouping.
///
/// BRL uses Brazilian separators (`R$ 1.234,56`); the other supported
/// currencies use `1,234.56`.
pub fn format_amount(currency: Currency, amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let abs = rounded.abs();

    let s = format!("{:.2}", abs);
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let (group_sep, decimal_sep) = match currency {
        Currency::Brl => ('.', ','),
        _ => (',', '.'),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!(
        "{} {}{}{}{}",
        currency.symbol(),
        sign,
        grouped,
        decimal_sep,
        frac_part
    )
}

// ============================================================================
// Budgets
// ============================================================================

/// Stored budget fields needed for derived figures
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub limit_amount: Decimal,
    pub spent_amount: Decimal,
}

impl BudgetSnapshot {
    /// Amount still available under the limit (negative when over)
    pub fn available_amount(&self) -> Decimal {
        self.limit_amount - self.spent_amount
    }

    /// Percent of the limit already spent
    pub fn percent_spent(&self) -> f64 {
        if self.limit_amount <= Decimal::ZERO {
            return 0.0;
        }
        let ratio = self.spent_amount / self.limit_amount;
        ratio.to_f64().unwrap_or(0.0) * 100.0
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent_amount > self.limit_amount
    }

    /// Near-limit threshold is 80% of the limit
    pub fn is_near_limit(&self) -> bool {
        self.percent_spent() >= 80.0
    }

    /// Four-state health: normal < 50% <= moderado < 80% <= atencao, and
    /// estourado once spending exceeds the limit
    pub fn status(&self) -> BudgetStatus {
        if self.is_over_budget() {
            BudgetStatus::Estourado
        } else if self.is_near_limit() {
            BudgetStatus::Atencao
        } else if self.percent_spent() >= 50.0 {
            BudgetStatus::Moderado
        } else {
            BudgetStatus::Normal
        }
    }
}

// ============================================================================
// Financial goals
// ============================================================================

/// Stored goal fields needed for derived figures
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalSnapshot {
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
}

impl GoalSnapshot {
    pub fn remaining_amount(&self) -> Decimal {
        (self.target_amount - self.current_amount).max(Decimal::ZERO)
    }

    pub fn percent_achieved(&self) -> f64 {
        if self.target_amount <= Decimal::ZERO {
            return 0.0;
        }
        let ratio = self.current_amount / self.target_amount;
        ratio.to_f64().unwrap_or(0.0) * 100.0
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Days until the target date, clamped at zero once it has passed
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days().max(0)
    }

    /// Contribution per 30-day month needed to reach the target in time.
    /// Zero when the date has passed or the goal is already met.
    pub fn required_monthly_amount(&self, today: NaiveDate) -> Decimal {
        let days = self.days_remaining(today);
        if days == 0 {
            return Decimal::ZERO;
        }
        (self.remaining_amount() * Decimal::from(30) / Decimal::from(days)).round_dp(2)
    }
}

// ============================================================================
// Credit cards
// ============================================================================

/// Stored credit card fields needed for derived figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub name: String,
    pub last_digits: Option<String>,
    pub credit_limit: Decimal,
    pub current_balance: Decimal,
}

impl CardSnapshot {
    pub fn available_limit(&self) -> Decimal {
        self.credit_limit - self.current_balance
    }

    pub fn percent_utilized(&self) -> f64 {
        if self.credit_limit <= Decimal::ZERO {
            return 0.0;
        }
        let ratio = self.current_balance / self.credit_limit;
        ratio.to_f64().unwrap_or(0.0) * 100.0
    }

    /// Display name with the card's last digits, e.g. `Nubank ****4321`
    pub fn masked_name(&self) -> String {
        match &self.last_digits {
            Some(digits) => format!("{} ****{}", self.name, digits),
            None => self.name.clone(),
        }
    }
}

// ============================================================================
// Bank accounts
// ============================================================================

/// Stored bank account fields needed for derived figures
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub balance: Decimal,
    pub initial_balance: Decimal,
}

impl AccountSnapshot {
    /// Change since the account was registered
    pub fn balance_change(&self) -> Decimal {
        self.balance - self.initial_balance
    }
}

// ============================================================================
// Loans
// ============================================================================

/// Stored loan fields needed for derived figures
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LoanSnapshot {
    pub principal_amount: Decimal,
    pub installment_amount: Decimal,
    pub total_installments: i32,
    pub installments_paid: i32,
}

impl LoanSnapshot {
    pub fn remaining_installments(&self) -> i32 {
        self.total_installments - self.installments_paid
    }

    pub fn percent_paid(&self) -> f64 {
        if self.total_installments <= 0 {
            return 0.0;
        }
        (self.installments_paid as f64 / self.total_installments as f64) * 100.0
    }

    /// Total interest paid over the full term
    pub fn total_interest(&self) -> Decimal {
        self.installment_amount * Decimal::from(self.total_installments) - self.principal_amount
    }
}

/// Stored loan installment fields needed for derived figures
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InstallmentSnapshot {
    pub amount: Decimal,
    pub amount_paid: Decimal,
    pub due_date: NaiveDate,
    pub is_paid: bool,
}

impl InstallmentSnapshot {
    pub fn remaining_amount(&self) -> Decimal {
        (self.amount - self.amount_paid).max(Decimal::ZERO)
    }

    /// An installment is overdue once its due date has passed unpaid
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today && !self.is_paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_amount_brl_uses_brazilian_separators() {
        assert_eq!(format_amount(Currency::Brl, dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(format_amount(Currency::Brl, dec!(0)), "R$ 0,00");
        assert_eq!(
            format_amount(Currency::Brl, dec!(1234567.8)),
            "R$ 1.234.567,80"
        );
    }

    #[test]
    fn test_format_amount_other_currencies() {
        assert_eq!(format_amount(Currency::Usd, dec!(1234.56)), "$ 1,234.56");
        assert_eq!(format_amount(Currency::Eur, dec!(999.9)), "€ 999.90");
        assert_eq!(format_amount(Currency::Gbp, dec!(-42.5)), "£ -42.50");
    }

    #[test]
    fn test_budget_status_thresholds() {
        let budget = |spent: Decimal| BudgetSnapshot {
            limit_amount: dec!(1000),
            spent_amount: spent,
        };
        assert_eq!(budget(dec!(100)).status(), BudgetStatus::Normal);
        assert_eq!(budget(dec!(500)).status(), BudgetStatus::Moderado);
        assert_eq!(budget(dec!(800)).status(), BudgetStatus::Atencao);
        assert_eq!(budget(dec!(1000)).status(), BudgetStatus::Atencao);
        assert_eq!(budget(dec!(1000.01)).status(), BudgetStatus::Estourado);
    }

    #[test]
    fn test_budget_available_goes_negative_when_over() {
        let budget = BudgetSnapshot {
            limit_amount: dec!(500),
            spent_amount: dec!(620),
        };
        assert_eq!(budget.available_amount(), dec!(-120));
        assert!(budget.is_over_budget());
    }

    #[test]
    fn test_budget_zero_limit_is_not_a_division_error() {
        let budget = BudgetSnapshot {
            limit_amount: Decimal::ZERO,
            spent_amount: dec!(10),
        };
        assert_eq!(budget.percent_spent(), 0.0);
    }

    #[test]
    fn test_goal_progress() {
        let goal = GoalSnapshot {
            target_amount: dec!(10000),
            current_amount: dec!(2500),
            target_date: date(2026, 12, 31),
        };
        assert_eq!(goal.remaining_amount(), dec!(7500));
        assert!((goal.percent_achieved() - 25.0).abs() < 1e-9);
        assert!(!goal.is_completed());
    }

    #[test]
    fn test_goal_days_remaining_clamps_at_zero() {
        let goal = GoalSnapshot {
            target_amount: dec!(100),
            current_amount: dec!(0),
            target_date: date(2026, 1, 1),
        };
        assert_eq!(goal.days_remaining(date(2025, 12, 2)), 30);
        assert_eq!(goal.days_remaining(date(2026, 6, 1)), 0);
    }

    #[test]
    fn test_goal_required_monthly_amount() {
        let goal = GoalSnapshot {
            target_amount: dec!(3000),
            current_amount: dec!(0),
            target_date: date(2026, 1, 31),
        };
        // 30 days out: one month left, the whole remainder is due
        assert_eq!(goal.required_monthly_amount(date(2026, 1, 1)), dec!(3000));
        // Past the date: nothing sensible to suggest
        assert_eq!(goal.required_monthly_amount(date(2026, 2, 1)), dec!(0));
    }

    #[test]
    fn test_card_utilization_and_mask() {
        let card = CardSnapshot {
            name: "Platinum".to_string(),
            last_digits: Some("4321".to_string()),
            credit_limit: dec!(5000),
            current_balance: dec!(1250),
        };
        assert_eq!(card.available_limit(), dec!(3750));
        assert!((card.percent_utilized() - 25.0).abs() < 1e-9);
        assert_eq!(card.masked_name(), "Platinum ****4321");

        let unmasked = CardSnapshot {
            last_digits: None,
            ..card
        };
        assert_eq!(unmasked.masked_name(), "Platinum");
    }

    #[test]
    fn test_account_balance_change() {
        let account = AccountSnapshot {
            balance: dec!(1500),
            initial_balance: dec!(2000),
        };
        assert_eq!(account.balance_change(), dec!(-500));
    }

    #[test]
    fn test_loan_figures() {
        let loan = LoanSnapshot {
            principal_amount: dec!(10000),
            installment_amount: dec!(500),
            total_installments: 24,
            installments_paid: 6,
        };
        assert_eq!(loan.remaining_installments(), 18);
        assert!((loan.percent_paid() - 25.0).abs() < 1e-9);
        assert_eq!(loan.total_interest(), dec!(2000));
    }

    #[test]
    fn test_installment_overdue() {
        let installment = InstallmentSnapshot {
            amount: dec!(500),
            amount_paid: dec!(200),
            due_date: date(2026, 3, 10),
            is_paid: false,
        };
        assert_eq!(installment.remaining_amount(), dec!(300));
        assert!(!installment.is_overdue(date(2026, 3, 10)));
        assert!(installment.is_overdue(date(2026, 3, 11)));

        let paid = InstallmentSnapshot {
            is_paid: true,
            amount_paid: dec!(500),
            ..installment
        };
        assert!(!paid.is_overdue(date(2026, 4, 1)));
    }
}
