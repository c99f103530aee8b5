//! P29 Storage Layer
//!
//! This crate provides the key-value persistence used by the P29 playbook
//! tools: the selected fiscal year-end and the web-vitals analytics document.
//!
//! # Features
//!
//! - **Key-Value Adapter**: a small string-keyed, string-valued store trait
//! - **Fiscal Year-End Selection**: persisted under a fixed key, defaulting to
//!   December when absent or unreadable
//! - **Multiple Backends**: JSON file and in-memory adapters
//!
//! # Example
//!
//! ```rust
//! use p29_core::FiscalYearEnd;
//! use p29_storage::{FiscalYearSelection, InMemoryStore};
//!
//! let store = InMemoryStore::new();
//! assert_eq!(FiscalYearSelection::load(&store).unwrap(), FiscalYearEnd::December);
//!
//! FiscalYearSelection::save(&store, FiscalYearEnd::June).unwrap();
//! assert_eq!(FiscalYearSelection::load(&store).unwrap(), FiscalYearEnd::June);
//! ```
//!
//! # Storage Backends
//!
//! ## FileStore
//!
//! Keeps every key in one pretty-printed JSON object on disk, rewritten on
//! each mutation. Suitable for a single CLI process.
//!
//! ## InMemoryStore
//!
//! A simple in-memory implementation for testing and embedding.
//! Data is not persisted across restarts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod adapter;
mod error;
mod file;
mod memory;
mod selection;

pub use adapter::KeyValueStore;
pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use selection::{FiscalYearSelection, SELECTION_KEY};
