//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee records library**. The command-line
//! client in `main.rs` is one front end over it; nothing from the API inward
//! knows about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, renders tables, asks for confirmation  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Facade over commands, owns list/router/dialog state      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns `Result<CmdResult>`    │
//! │  - Built on the form, list state, validation and i18n       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - EmployeeStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments, returns plain Rust types
//! and never writes to stdout or stderr. Diagnostics go through `tracing`;
//! the binary decides whether anyone sees them.
//!
//! ## Testing Strategy
//!
//! 1. **Building blocks** (`phone`, `listing`, `validation`, `form`, ...):
//!    unit tests next to the code.
//! 2. **Commands**: unit tests against [`store::memory::InMemoryStore`].
//! 3. **API**: dispatch, list reloads and routing.
//! 4. **CLI**: `tests/` drives the binary with a throwaway data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Employee`, `EmployeeDraft`, departments and positions
//! - [`phone`]: The `+(90) 5XX XXX XX XX` input mask
//! - [`listing`]: Search, pagination, selection and view mode for the list
//! - [`validation`]: Required fields, email and phone checks
//! - [`form`]: Create and edit form state
//! - [`router`]: Path resolution between the list and the forms
//! - [`dialog`]: The yes/no confirmation dialog
//! - [`i18n`]: Turkish and English texts, language switching
//! - [`seed`]: Sample records
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dialog;
pub mod error;
pub mod form;
pub mod i18n;
pub mod listing;
pub mod model;
pub mod phone;
pub mod router;
pub mod seed;
pub mod store;
pub mod validation;
