//! The generator: renders every locale of a [`LocaleCatalog`] into
//! `<output>/<locale>.lproj/Localizable.strings`, and the default locale's
//! keys into the keys file.
//!
//! # Example
//!
//! ```rust,no_run
//! use stringsgen::{LocaleCatalog, LocalizationGenerator, TranslationMap, templates};
//!
//! let mut catalog = LocaleCatalog::new();
//! catalog.insert("en", [("hello", "Hello")].into_iter().collect::<TranslationMap>());
//! catalog.insert("fr", [("hello", "Bonjour")].into_iter().collect::<TranslationMap>());
//!
//! let generator = LocalizationGenerator::builder()
//!     .output_directory("./Resources")
//!     .keys_file_path("Keys.swift")
//!     .catalog(catalog)
//!     .keys_template(templates::swift_enum("Key"))
//!     .build();
//!
//! generator.generate_blocking()?;
//! # Ok::<(), stringsgen::Error>(())
//! ```

use std::path::{Component, Path, PathBuf};

use futures_util::future::join_all;
use tokio::fs;
use tracing::{debug, error, info, warn};

use crate::{
    config::GenerationConfig,
    error::Error,
    keys, strings,
    templates::Template,
    types::{LocaleCatalog, TranslationMap},
};

/// Generates `.strings` files and the keys file from a catalog.
///
/// Configuration, catalog, and templates are fixed once built; the generator
/// keeps no state between runs, so calling [`generate`](Self::generate) twice
/// produces identical files.
#[derive(Clone)]
pub struct LocalizationGenerator {
    config: GenerationConfig,
    catalog: LocaleCatalog,
    default_locale: Option<String>,
    keys_template: Option<Template>,
    locale_file_template: Option<Template>,
}

impl std::fmt::Debug for LocalizationGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationGenerator")
            .field("config", &self.config)
            .field("catalog", &self.catalog)
            .field("default_locale", &self.default_locale)
            .field("keys_template", &self.keys_template.is_some())
            .field("locale_file_template", &self.locale_file_template.is_some())
            .finish()
    }
}

/// A rendered file that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Locale the file was rendered from.
    pub locale: String,
    pub path: PathBuf,
    pub contents: String,
}

/// Everything a generation run would write, rendered in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationPlan {
    /// The keys file, present only when the default locale is in the catalog.
    pub keys_file: Option<PlannedFile>,
    /// One `.strings` file per locale, in catalog order.
    pub locale_files: Vec<PlannedFile>,
}

impl GenerationPlan {
    /// All planned files, keys file first.
    pub fn files(&self) -> impl Iterator<Item = &PlannedFile> {
        self.keys_file.iter().chain(self.locale_files.iter())
    }
}

impl LocalizationGenerator {
    /// Creates a generator without templates.
    pub fn new(config: GenerationConfig, catalog: LocaleCatalog) -> Self {
        GeneratorBuilder::new().config(config).catalog(catalog).build()
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    /// The locale whose keys go into the keys file, if one could be resolved.
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// `<output_directory>/<locale>.lproj`
    ///
    /// Root and prefix components of `locale` are dropped, so the result
    /// always sits under the output directory.
    pub fn locale_directory(&self, locale: &str) -> PathBuf {
        let dir_name = strings::lproj_dir_name(locale);
        let relative = Path::new(&dir_name)
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
            .collect::<PathBuf>();
        self.config.output_directory.join(relative)
    }

    /// `<output_directory>/<locale>.lproj/Localizable.strings`
    pub fn locale_file_path(&self, locale: &str) -> PathBuf {
        self.locale_directory(locale).join(strings::FILE_NAME)
    }

    fn is_default_locale(&self, locale: &str) -> bool {
        self.default_locale.as_deref() == Some(locale)
    }

    /// Keys body for `locale`, with the keys template applied. `None` unless
    /// `locale` is the default locale.
    fn render_keys(&self, locale: &str, translations: &TranslationMap) -> Option<String> {
        if !self.is_default_locale(locale) {
            return None;
        }
        let raw = keys::render(translations, self.config.indent_width);
        debug!(locale, entries = translations.len(), "rendered keys");
        Some(match &self.keys_template {
            Some(template) => template(&raw),
            None => raw,
        })
    }

    /// `.strings` body for a locale, with the locale file template applied.
    fn render_strings(&self, locale: &str, translations: &TranslationMap) -> String {
        let raw = strings::render(translations);
        debug!(locale, entries = translations.len(), "rendered strings");
        match &self.locale_file_template {
            Some(template) => template(&raw),
            None => raw,
        }
    }

    fn keys_file_path(&self) -> Result<&Path, Error> {
        self.config
            .keys_file_path
            .as_deref()
            .ok_or(Error::MissingKeysFilePath)
    }

    /// Renders every output file in memory without touching the filesystem.
    ///
    /// Fails with [`Error::MissingKeysFilePath`] when the catalog has locales
    /// but no keys file path is configured.
    pub fn plan(&self) -> Result<GenerationPlan, Error> {
        let mut plan = GenerationPlan::default();
        for (locale, translations) in self.catalog.iter() {
            let keys_file_path = self.keys_file_path()?;
            if let Some(contents) = self.render_keys(locale, translations) {
                plan.keys_file = Some(PlannedFile {
                    locale: locale.to_string(),
                    path: keys_file_path.to_path_buf(),
                    contents,
                });
            }
            plan.locale_files.push(PlannedFile {
                locale: locale.to_string(),
                path: self.locale_file_path(locale),
                contents: self.render_strings(locale, translations),
            });
        }
        Ok(plan)
    }

    /// Writes every locale file, and the keys file for the default locale.
    ///
    /// One future per locale is driven concurrently on the current task. A
    /// failing locale does not stop the others; once all have finished, the
    /// first failure in catalog order is returned. Files written by the
    /// successful locales stay on disk.
    pub async fn generate(&self) -> Result<(), Error> {
        if let Some(default_locale) = self.default_locale() {
            if !self.catalog.contains(default_locale) {
                warn!(
                    locale = default_locale,
                    "default locale is not in the catalog, keys file will not be written"
                );
            }
        }

        info!(locales = self.catalog.len(), "generating localization files");

        let tasks = self
            .catalog
            .iter()
            .map(|(locale, translations)| self.generate_locale(locale, translations));
        let results = join_all(tasks).await;

        let mut first_error = None;
        for ((locale, _), result) in self.catalog.iter().zip(results) {
            if let Err(err) = result {
                error!(locale, error = %err, "failed to generate locale");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Runs [`generate`](Self::generate) to completion on a single-threaded runtime.
    ///
    /// Fails with [`Error::Runtime`] when called from within a tokio runtime;
    /// async callers should await [`generate`](Self::generate) instead.
    pub fn generate_blocking(&self) -> Result<(), Error> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(Error::Runtime(
                "generate_blocking called from within a tokio runtime".to_string(),
            ));
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.generate())
    }

    async fn generate_locale(
        &self,
        locale: &str,
        translations: &TranslationMap,
    ) -> Result<(), Error> {
        let keys_file_path = self.keys_file_path()?;

        if let Some(contents) = self.render_keys(locale, translations) {
            write_file(keys_file_path, contents).await?;
        }

        let directory = self.locale_directory(locale);
        let exists = fs::try_exists(&directory)
            .await
            .map_err(|e| Error::filesystem(&directory, e))?;
        if !exists {
            fs::create_dir(&directory)
                .await
                .map_err(|e| Error::filesystem(&directory, e))?;
        }

        let contents = self.render_strings(locale, translations);
        write_file(&directory.join(strings::FILE_NAME), contents).await
    }
}

async fn write_file(path: &Path, contents: String) -> Result<(), Error> {
    fs::write(path, contents.as_bytes())
        .await
        .map_err(|e| Error::filesystem(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Builder for [`LocalizationGenerator`].
///
/// Templates are fixed at build time; there is no way to swap them on a
/// built generator.
#[derive(Default)]
pub struct GeneratorBuilder {
    config: GenerationConfig,
    catalog: LocaleCatalog,
    keys_template: Option<Template>,
    locale_file_template: Option<Template>,
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every path and formatting option at once.
    pub fn config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn output_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_directory = path.into();
        self
    }

    pub fn keys_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.keys_file_path = Some(path.into());
        self
    }

    pub fn catalog(mut self, catalog: LocaleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.config.default_locale = Some(locale.into());
        self
    }

    pub fn indent_width(mut self, width: usize) -> Self {
        self.config.indent_width = width;
        self
    }

    /// Hook applied to the keys body before it is written.
    pub fn keys_template(mut self, template: Template) -> Self {
        self.keys_template = Some(template);
        self
    }

    /// Hook applied to every `.strings` body before it is written.
    pub fn locale_file_template(mut self, template: Template) -> Self {
        self.locale_file_template = Some(template);
        self
    }

    /// Resolves the default locale (explicit, else first in the catalog) and
    /// builds the generator.
    pub fn build(self) -> LocalizationGenerator {
        let default_locale = self
            .config
            .default_locale
            .clone()
            .or_else(|| self.catalog.first_locale().map(str::to_string));

        LocalizationGenerator {
            config: self.config,
            catalog: self.catalog,
            default_locale,
            keys_template: self.keys_template,
            locale_file_template: self.locale_file_template,
        }
    }
}
