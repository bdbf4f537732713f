//! # Phonebook
//!
//! A small contact manager: {name, phone, address} records in a flat file,
//! with create/read/get/update/delete operations and glob-style filtering.
//! The library is UI-agnostic; the bundled CLI is a thin client over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  CLI (args.rs + main.rs, binary only)                   │
//! │  - Parses arguments, formats json/yaml output           │
//! │  - The only place that knows about stdout/exit codes    │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                       │
//! │  - DataStore trait: read / get / create / update /      │
//! │    delete, backend registry                             │
//! │  - FileStore<JsonFormat | YamlFormat> (production),     │
//! │    InMemoryStore (testing)                              │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  Records (model.rs + validate.rs)                       │
//! │  - Record, RecordPatch, field mappings                  │
//! │  - Required-field enforcement, unknown-field stripping  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Stores are constructed explicitly (by name through the registry
//! [`store::open`], or directly) and passed to call sites; there is no
//! process-wide current store.
//!
//! ## Module Overview
//!
//! - [`store`]: the storage contract, its implementations, and the registry
//! - [`model`]: core data types (`Record`, `RecordPatch`, `Fields`)
//! - [`validate`]: payload validation and unknown-field stripping
//! - [`error`]: error types

pub mod error;
pub mod model;
pub mod store;
pub mod validate;
