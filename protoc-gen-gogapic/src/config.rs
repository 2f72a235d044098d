//! Configuration management for the plugin.

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::Deserialize;
use std::path::Path;

use gogapic_codegen::assembler::{DEFAULT_COPYRIGHT_HOLDER, DEFAULT_PACKAGE_NAME};
use gogapic_codegen::{GeneratorOptions, ImportGrouping, OutputTypeMarker, LONG_RUNNING_OPERATION};

use crate::cli::Args;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Go package declared in every generated header
    pub package_name: String,
    /// Holder named in the license banner
    pub copyright_holder: String,
    /// Banner year; the current year when unset
    pub year: Option<i32>,
    /// Output type marking a method as long-running
    pub long_running_output_type: String,
    /// Import path prefixes grouped with the standard library.
    /// Empty means "first path element has no dot".
    pub stdlib_prefixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            copyright_holder: DEFAULT_COPYRIGHT_HOLDER.to_string(),
            year: None,
            long_running_output_type: LONG_RUNNING_OPERATION.to_string(),
            stdlib_prefixes: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Apply CLI argument overrides to the configuration.
    pub fn with_cli_overrides(mut self, args: &Args) -> Self {
        if let Some(ref package_name) = args.package_name {
            self.package_name = package_name.clone();
        }

        if let Some(year) = args.year {
            self.year = Some(year);
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !is_go_identifier(&self.package_name) {
            return Err(format!("Invalid package name '{}'", self.package_name));
        }

        if self.copyright_holder.trim().is_empty() {
            return Err("Copyright holder cannot be empty".to_string());
        }

        if !self.long_running_output_type.starts_with('.') {
            return Err(format!(
                "Long-running output type '{}' must be fully qualified (start with '.')",
                self.long_running_output_type
            ));
        }

        if let Some(year) = self.year {
            if !(1970..=9999).contains(&year) {
                return Err(format!("Invalid year {}", year));
            }
        }

        if self.stdlib_prefixes.iter().any(|p| p.is_empty()) {
            return Err("Standard library prefixes cannot be empty strings".to_string());
        }

        Ok(())
    }

    /// Library options for this configuration.
    pub fn generator_options(&self) -> GeneratorOptions {
        let year = self.year.unwrap_or_else(|| chrono::Local::now().year());
        let mut opts = GeneratorOptions::new(year);
        opts.package_name = self.package_name.clone();
        opts.copyright_holder = self.copyright_holder.clone();
        if !self.stdlib_prefixes.is_empty() {
            opts.grouping = ImportGrouping::Prefixes(self.stdlib_prefixes.clone());
        }
        opts
    }

    pub fn classifier(&self) -> OutputTypeMarker {
        OutputTypeMarker::new(self.long_running_output_type.clone())
    }
}

fn is_go_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}
