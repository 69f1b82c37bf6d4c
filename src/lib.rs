//! Tolk - translation key extraction and editing for i18next projects
//!
//! Tolk scans a JavaScript/TypeScript source tree for translation-key usages,
//! keeps the found keys and the translations of every language in SQLite, and
//! classifies each key per language as normal, missing, new in code or not used.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning, key normalization, extraction runs and status views
//! - `json_writer`: Pretty `{ namespace: { key: value } }` file output
//! - `mcp`: Model Context Protocol server implementation
//! - `messages`: Import and export of `<language>.json` files
//! - `store`: Extraction and translation stores

pub mod cli;
pub mod config;
pub mod core;
pub mod json_writer;
pub mod mcp;
pub mod messages;
pub mod store;
