//! SQLite storage implementation for Canastilla.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `canastilla-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `core` is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!       storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod items;
pub mod layaway;
pub mod lists;
pub mod orders;
pub mod products;
pub mod sharing;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from canastilla-core for convenience
pub use canastilla_core::errors::{DatabaseError, Error, Result};
