//! Database repositories
//!
//! Provides the data access layer for database operations. Every query
//! touching a per-user entity is scoped by the owning user's id.

pub mod account;
pub mod budget;
pub mod category;
pub mod goal;
pub mod transaction;
pub mod user;

pub use account::{AccountRecord, AccountRepository, CreateAccount, UpdateAccount};
pub use budget::{BudgetRecord, BudgetRepository, CreateBudget, UpdateBudget};
pub use category::{CategoryRecord, CategoryRepository, CreateCategory, UpdateCategory};
pub use goal::{CreateGoal, GoalRecord, GoalRepository, UpdateGoal};
pub use transaction::{
    CreateTransaction, TransactionFilter, TransactionRecord, TransactionRepository,
    UpdateTransaction,
};
pub use user::{
    NewUser, UpdateUserSettings, UserRecord, UserRepository, UserSettingsRecord,
    DEFAULT_CATEGORIES,
};
