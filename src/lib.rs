#![forbid(unsafe_code)]
//! Generate Apple `.strings` localization files from in-memory catalogs.
//!
//! Given a [`LocaleCatalog`] (locale identifier to translations), stringsgen
//! writes one `<locale>.lproj/Localizable.strings` per locale and a keys file
//! listing every key of the default locale as `case` lines, ready to be
//! wrapped into a Swift enum.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stringsgen::{GenerationConfig, LocaleCatalog, LocalizationGenerator, TranslationMap};
//!
//! let mut catalog = LocaleCatalog::new();
//! catalog.insert("en", [("hello", "Hello")].into_iter().collect::<TranslationMap>());
//!
//! let config = GenerationConfig::from_json_str(
//!     r#"{ "output_directory": "./Resources", "keys_file_path": "Keys.swift" }"#,
//! )?;
//! LocalizationGenerator::new(config, catalog).generate_blocking()?;
//! # Ok::<(), stringsgen::Error>(())
//! ```
//!
//! # Output
//!
//! - **`<output>/<locale>.lproj/Localizable.strings`**: one `"key" = "value";` line per entry
//! - **keys file**: `case <key>` lines from the default locale, optionally run through a template
//!
//! Parsing translation sources and loading catalogs is left to the caller.

pub mod config;
pub mod error;
pub mod generator;
pub mod keys;
pub mod strings;
pub mod templates;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    config::GenerationConfig,
    error::Error,
    generator::{GenerationPlan, GeneratorBuilder, LocalizationGenerator, PlannedFile},
    templates::Template,
    types::{LocaleCatalog, Pair, TranslationMap},
};
