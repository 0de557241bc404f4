//! spendtrack - Personal expense tracker
//!
//! This library provides the core of the spendtrack expense tracker. Expenses
//! live in a remote REST collection; the library keeps a session copy of that
//! collection, derives statistics, trends and budget progress from it, and
//! exports it to disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `api`: The remote sync gateway (`ExpenseApi` and its HTTP implementation)
//! - `store`: The session's expense list with write-then-apply mutations
//! - `services`: Filtering, aggregation and budget evaluation
//! - `models`: Core data models (expenses, categories, budgets, money)
//! - `reports` and `display`: Terminal rendering
//! - `export`: JSON, CSV and YAML export
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use spendtrack::api::HttpExpenseApi;
//! use spendtrack::config::{Settings, SpendPaths};
//! use spendtrack::store::ExpenseStore;
//!
//! let paths = SpendPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let api = HttpExpenseApi::new(&settings.api_url, settings.request_timeout())?;
//! let store = ExpenseStore::load(api).await?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod file_io;
pub mod models;
pub mod reports;
pub mod services;
pub mod store;

pub use error::{SpendError, SpendResult};
