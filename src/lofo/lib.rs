//! # Lofo Architecture
//!
//! Lofo is a **UI-agnostic lost & found library**. This is not a CLI application that happens
//! to have some library code—it's a library that happens to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (wired by main.rs + args.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ItemStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a browser app, or any other UI.
//!
//! ## Ordering Contract
//!
//! The store—not the call sites—owns the "newest first" display convention.
//! [`store::ItemStore::list_items`] always returns items in descending
//! `created_at` order, so commands never re-sort.
//!
//! ## Testing Strategy
//!
//! The architecture enables focused testing at each layer:
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic.
//!    This is where the lion's share of testing lives.
//!
//! 2. **Core engines** (`search`, `filter`, `validate`): Pure functions,
//!    tested exhaustively with plain unit tests.
//!
//! 3. **CLI** (thin `main.rs`): End-to-end tests in `tests/cli_e2e.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `Category`, `Location`, `ItemStatus`)
//! - [`search`]: The smart search/ranking engine
//! - [`filter`]: Predicate filtering over the item list
//! - [`validate`]: Registration-number and phone-number checks
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod search;
pub mod store;
pub mod validate;
