//! Database abstraction layer.
//!
//! This module provides the raw-SQL execution side of the pipeline:
//! - Connection pool management
//! - Verbatim statement execution
//! - Row-to-JSON type mappings

pub mod executor;
pub mod pool;
pub mod types;

pub use executor::{PoolExecutor, RawSqlExecutor};
pub use pool::{DatabaseType, DbPool};
pub use types::{RawDecimal, RowToJson, TypeCategory, categorize_type};
