//! Core library for bangla-spell.
//!
//! This crate provides dictionary loading and spell checking for Bangla text,
//! used by the `bangla-spell` CLI and HTTP service.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`dictionary`] - Building the known-word set from word lists
//! - [`checker`] - Tokenization and unknown-word detection
//! - [`store`] - The shared, lazily loaded dictionary
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use bangla_spell_core::{ConfigLoader, DictionarySources, DictionaryStore};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .load()
//!     .expect("Failed to load configuration");
//!
//! let store = DictionaryStore::new(DictionarySources::from_config(&config));
//! let misspelled = store.check("আমি ভাল আছি!");
//! println!("{misspelled:?}");
//! ```
#![deny(unsafe_code)]

pub mod checker;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod store;

pub use checker::{find_misspelled, tokenize};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use dictionary::{Dictionary, DictionarySources, LoadReport, SourceOutcome, SourceStatus};
pub use error::{ConfigError, ConfigResult, SourceError, SourceResult};
pub use store::DictionaryStore;
