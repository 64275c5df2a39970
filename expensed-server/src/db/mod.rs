//! Database layer - connection pool and schema setup

pub mod pool;
pub mod schema;

pub use pool::create_pool;
