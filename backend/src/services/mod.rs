//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth primitives. Simple CRUD routes talk to
//! repositories directly; only authentication needs orchestration.

pub mod auth;

pub use auth::AuthService;
