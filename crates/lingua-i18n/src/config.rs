// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Registry configuration and environment loading.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `LINGUA_LOCALE` | Overrides the detected system locale |
//! | `LINGUA_FALLBACK_LOCALE` | Second-tier default code (default `en`) |
//! | `LINGUA_DETECT_SYSTEM_LOCALE` | `false`/`0` disables host detection |
//!
//! Empty variables are treated as unset.
//!
//! [`RegistryConfig::from_env`] and [`RegistryConfig::from_lookup`] reject an
//! invalid fallback code. A config built in code or deserialized is checked
//! again by [`LocaleRegistry::new`](crate::LocaleRegistry::new), which
//! substitutes [`DEFAULT_FALLBACK_LOCALE`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::system;

pub const ENV_LOCALE: &str = "LINGUA_LOCALE";
pub const ENV_FALLBACK_LOCALE: &str = "LINGUA_FALLBACK_LOCALE";
pub const ENV_DETECT_SYSTEM_LOCALE: &str = "LINGUA_DETECT_SYSTEM_LOCALE";

/// Code selected when the system locale is not registered.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

/// Settings used when a registry is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegistryConfig {
	/// Explicit system locale; takes precedence over host detection.
	pub system_locale: Option<String>,
	/// Code tried when the system locale is absent or not registered.
	pub fallback_locale: String,
	/// Query the host for its locale when no explicit one is set.
	pub detect_system_locale: bool,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			system_locale: None,
			fallback_locale: DEFAULT_FALLBACK_LOCALE.to_string(),
			detect_system_locale: true,
		}
	}
}

impl RegistryConfig {
	/// Configuration that never consults the host, for deterministic setups.
	pub fn detached() -> Self {
		Self {
			detect_system_locale: false,
			..Self::default()
		}
	}

	pub fn with_system_locale(mut self, code: impl Into<String>) -> Self {
		self.system_locale = Some(code.into());
		self
	}

	pub fn with_fallback_locale(mut self, code: impl Into<String>) -> Self {
		self.fallback_locale = code.into();
		self
	}

	/// Load configuration from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Load configuration through an arbitrary variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let var = |name: &str| lookup(name).filter(|s| !s.trim().is_empty());
		let mut config = Self::default();

		if let Some(locale) = var(ENV_LOCALE) {
			config.system_locale = Some(locale);
		}

		if let Some(fallback) = var(ENV_FALLBACK_LOCALE) {
			config.fallback_locale = fallback.trim().to_string();
		}

		if let Some(detect) = var(ENV_DETECT_SYSTEM_LOCALE) {
			config.detect_system_locale = parse_bool(ENV_DETECT_SYSTEM_LOCALE, &detect)?;
		}

		config.validate()?;
		Ok(config)
	}

	/// Check that the fallback code is usable as a registry key.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.fallback_locale.is_empty() {
			return Err(ConfigError::invalid_value(
				ENV_FALLBACK_LOCALE,
				"must not be empty",
			));
		}

		if !self
			.fallback_locale
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
		{
			return Err(ConfigError::invalid_value(
				ENV_FALLBACK_LOCALE,
				format!("invalid locale code '{}'", self.fallback_locale),
			));
		}

		Ok(())
	}

	/// Resolve the system code: explicit setting first, then host detection.
	pub fn resolve_system_code(&self) -> Option<String> {
		if let Some(locale) = &self.system_locale {
			return system::normalize_code(locale);
		}

		if self.detect_system_locale {
			system::detect_system_code()
		} else {
			None
		}
	}
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" => Ok(true),
		"false" | "0" | "no" => Ok(false),
		other => Err(ConfigError::invalid_value(
			key,
			format!("invalid boolean value '{other}'"),
		)),
	}
}
