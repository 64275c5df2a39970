//! Route handlers
//!
//! - expenses: the CRUD surface (behind the auth gate)
//! - health: liveness endpoint (outside the gate)

pub mod expenses;
pub mod health;
