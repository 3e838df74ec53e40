// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale registry and default-selection policy.
//!
//! # Default selection
//!
//! When a registration batch leaves the registry without a current locale,
//! the default is chosen in strict priority:
//!
//! 1. The system code, if a locale with that code is registered.
//! 2. The fallback code (`en` unless configured), if registered.
//! 3. The first registered locale.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown code | `set_locale` with unregistered code | Returns `false`, selection kept |
//! | No selection | Nothing registered yet | `locale()` returns `None` |
//! | Duplicate code | Two locales report the same code | Later one replaces the earlier |
//! | No host locale | Detection unsupported or neutral | System tier skipped |

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::{RegistryConfig, DEFAULT_FALLBACK_LOCALE};
use crate::locale::{Locale, LocaleFactory};

/// One registered language.
pub struct LocaleRecord<T: ?Sized> {
	code: String,
	instance: Arc<T>,
}

impl<T: ?Sized> LocaleRecord<T> {
	/// Code reported by the instance at registration time.
	pub fn code(&self) -> &str {
		&self.code
	}

	pub fn instance(&self) -> &Arc<T> {
		&self.instance
	}
}

/// Registered locales for one capability type and the current selection.
pub struct LocaleRegistry<T: ?Sized + Locale> {
	system_code: Option<String>,
	fallback_code: String,
	/// Records in first-registration order.
	records: Vec<LocaleRecord<T>>,
	/// Code to position in `records`.
	index: HashMap<String, usize>,
	/// Position in `records`; entries are only removed by `reset`.
	current: Option<usize>,
}

impl<T: ?Sized + Locale> Default for LocaleRegistry<T> {
	fn default() -> Self {
		Self::new(&RegistryConfig::default())
	}
}

impl<T: ?Sized + Locale> LocaleRegistry<T> {
	/// Create an empty registry, resolving the system code once.
	///
	/// A fallback code that fails [`RegistryConfig::validate`] is replaced by
	/// [`DEFAULT_FALLBACK_LOCALE`].
	pub fn new(config: &RegistryConfig) -> Self {
		let system_code = config.resolve_system_code();
		let fallback_code = match config.validate() {
			Ok(()) => config.fallback_locale.clone(),
			Err(err) => {
				tracing::warn!(error = %err, "invalid fallback locale, using default");
				DEFAULT_FALLBACK_LOCALE.to_string()
			}
		};
		tracing::debug!(
			system_code = ?system_code,
			fallback_code = %fallback_code,
			"created locale registry"
		);

		Self {
			system_code,
			fallback_code,
			records: Vec::new(),
			index: HashMap::new(),
			current: None,
		}
	}

	/// Register one instance per factory, in order.
	///
	/// A locale reporting an already registered code replaces the earlier
	/// instance. If no locale is current once the whole batch is in, the
	/// default policy is applied.
	pub fn register<I>(&mut self, factories: I)
	where
		I: IntoIterator<Item = LocaleFactory<T>>,
	{
		for factory in factories {
			self.insert(factory.build());
		}
		self.ensure_default();
	}

	/// Register already constructed instances, in order.
	///
	/// Same semantics as [`register`](Self::register).
	pub fn register_instances<I>(&mut self, instances: I)
	where
		I: IntoIterator<Item = Box<T>>,
	{
		for instance in instances {
			self.insert(instance);
		}
		self.ensure_default();
	}

	fn insert(&mut self, instance: Box<T>) {
		let instance: Arc<T> = Arc::from(instance);
		let code = instance.language_code().to_string();

		if let Some(&position) = self.index.get(&code) {
			tracing::debug!(code = %code, "replacing registered locale");
			self.records[position].instance = instance;
			return;
		}

		tracing::debug!(code = %code, "registered locale");
		self.index.insert(code.clone(), self.records.len());
		self.records.push(LocaleRecord { code, instance });
	}

	/// Select the current locale using the default policy.
	///
	/// Does nothing on an empty registry.
	pub fn apply_default(&mut self) {
		if self.records.is_empty() {
			return;
		}

		let position = self
			.system_code
			.as_deref()
			.and_then(|code| self.index.get(code))
			.or_else(|| self.index.get(self.fallback_code.as_str()))
			.copied()
			.unwrap_or(0);

		self.current = Some(position);
		tracing::debug!(code = %self.records[position].code, "applied default locale");
	}

	/// Apply the default policy only if no locale is current.
	pub fn ensure_default(&mut self) {
		if self.current.is_none() {
			self.apply_default();
		}
	}

	/// Switch to the locale registered under `code`.
	///
	/// Returns `false` and keeps the current selection if `code` is unknown.
	pub fn set_locale(&mut self, code: &str) -> bool {
		match self.index.get(code) {
			Some(&position) => {
				self.current = Some(position);
				tracing::debug!(code, "switched locale");
				true
			}
			None => {
				tracing::debug!(code, "locale not registered");
				false
			}
		}
	}

	/// The current locale, or `None` before the first selection.
	pub fn locale(&self) -> Option<&T> {
		self.current_record().map(|record| record.instance.as_ref())
	}

	/// Shared handle to the current locale.
	pub fn locale_handle(&self) -> Option<Arc<T>> {
		self.current_record().map(|record| Arc::clone(&record.instance))
	}

	pub fn current_code(&self) -> Option<&str> {
		self.current_record().map(LocaleRecord::code)
	}

	fn current_record(&self) -> Option<&LocaleRecord<T>> {
		self.current.map(|position| &self.records[position])
	}

	/// Host language code resolved at construction.
	pub fn system_code(&self) -> Option<&str> {
		self.system_code.as_deref()
	}

	pub fn fallback_code(&self) -> &str {
		&self.fallback_code
	}

	/// Look up a registered locale without selecting it.
	pub fn get(&self, code: &str) -> Option<&T> {
		self
			.index
			.get(code)
			.map(|&position| self.records[position].instance.as_ref())
	}

	pub fn contains(&self, code: &str) -> bool {
		self.index.contains_key(code)
	}

	/// Registered codes in first-registration order.
	pub fn codes(&self) -> impl Iterator<Item = &str> {
		self.records.iter().map(LocaleRecord::code)
	}

	pub fn records(&self) -> &[LocaleRecord<T>] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Drop every registered locale and the current selection.
	///
	/// The system code is kept.
	pub fn reset(&mut self) {
		self.records.clear();
		self.index.clear();
		self.current = None;
		tracing::debug!("reset locale registry");
	}
}

impl<T: ?Sized + Locale> fmt::Debug for LocaleRegistry<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LocaleRegistry")
			.field("system_code", &self.system_code)
			.field("fallback_code", &self.fallback_code)
			.field("codes", &self.codes().collect::<Vec<_>>())
			.field("current", &self.current_code())
			.finish()
	}
}
