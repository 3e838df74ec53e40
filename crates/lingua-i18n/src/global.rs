// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide registry, one per capability type.
//!
//! Registration is expected to happen once during start-up, before readers
//! exist. The lock only makes the shared state sound to reach from a static;
//! it does not make interleaved registration from several threads meaningful.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

use crate::config::RegistryConfig;
use crate::locale::{Locale, LocaleFactory};
use crate::registry::LocaleRegistry;

type AnyRegistry = &'static (dyn Any + Send + Sync);

static REGISTRIES: Lazy<Mutex<HashMap<TypeId, AnyRegistry>>> =
	Lazy::new(|| Mutex::new(HashMap::new()));

/// Shared registry for the capability type `T`.
///
/// ```
/// use lingua_i18n::{locales, I18n, Locale};
///
/// pub trait Buttons: Locale {
/// 	fn cancel(&self) -> &str;
/// }
///
/// #[derive(Default)]
/// struct English;
///
/// impl Locale for English {
/// 	fn language_code(&self) -> &str {
/// 		"en"
/// 	}
/// }
///
/// impl Buttons for English {
/// 	fn cancel(&self) -> &str {
/// 		"Cancel"
/// 	}
/// }
///
/// let i18n = I18n::<dyn Buttons>::instance();
/// i18n.register(locales![dyn Buttons; English]);
///
/// assert_eq!(i18n.locale().unwrap().cancel(), "Cancel");
/// ```
pub struct I18n<T: ?Sized + Locale + 'static> {
	inner: RwLock<LocaleRegistry<T>>,
}

impl<T: ?Sized + Locale + 'static> I18n<T> {
	/// The registry for `T`, created on first access and never dropped.
	///
	/// The first call reads the `LINGUA_*` environment variables; an invalid
	/// environment is logged and replaced by the defaults.
	pub fn instance() -> &'static Self {
		let mut registries = REGISTRIES.lock();
		let key = TypeId::of::<T>();

		if let Some(existing) = registries
			.get(&key)
			.copied()
			.and_then(|registry| registry.downcast_ref::<Self>())
		{
			return existing;
		}

		let config = startup_config(|name| std::env::var(name).ok());

		let created: &'static Self = Box::leak(Box::new(Self {
			inner: RwLock::new(LocaleRegistry::new(&config)),
		}));
		registries.insert(key, created);
		created
	}

	/// See [`LocaleRegistry::register`].
	pub fn register<I>(&self, factories: I)
	where
		I: IntoIterator<Item = LocaleFactory<T>>,
	{
		self.inner.write().register(factories);
	}

	/// See [`LocaleRegistry::register_instances`].
	pub fn register_instances<I>(&self, instances: I)
	where
		I: IntoIterator<Item = Box<T>>,
	{
		self.inner.write().register_instances(instances);
	}

	pub fn apply_default(&self) {
		self.inner.write().apply_default();
	}

	pub fn ensure_default(&self) {
		self.inner.write().ensure_default();
	}

	/// Switch to `code`; `false` if it is not registered.
	pub fn set_locale(&self, code: &str) -> bool {
		self.inner.write().set_locale(code)
	}

	/// The current locale, or `None` before the first selection.
	pub fn locale(&self) -> Option<Arc<T>> {
		self.inner.read().locale_handle()
	}

	pub fn current_code(&self) -> Option<String> {
		self.inner.read().current_code().map(str::to_string)
	}

	pub fn system_code(&self) -> Option<String> {
		self.inner.read().system_code().map(str::to_string)
	}

	pub fn contains(&self, code: &str) -> bool {
		self.inner.read().contains(code)
	}

	/// Registered codes in first-registration order.
	pub fn codes(&self) -> Vec<String> {
		self.inner.read().codes().map(str::to_string).collect()
	}

	/// Run `f` against the registry without cloning anything out of it.
	pub fn with_registry<R>(&self, f: impl FnOnce(&LocaleRegistry<T>) -> R) -> R {
		f(&self.inner.read())
	}

	/// Drop every registered locale and the current selection.
	pub fn reset(&self) {
		self.inner.write().reset();
	}

	/// Replace the registry with an empty one built from `config`.
	///
	/// Registered locales are discarded and the system code is resolved again.
	/// An invalid fallback code is replaced as in [`LocaleRegistry::new`].
	pub fn configure(&self, config: &RegistryConfig) {
		*self.inner.write() = LocaleRegistry::new(config);
	}
}

/// Configuration read on first access; an invalid environment yields the defaults.
fn startup_config<F>(lookup: F) -> RegistryConfig
where
	F: Fn(&str) -> Option<String>,
{
	RegistryConfig::from_lookup(lookup).unwrap_or_else(|err| {
		tracing::warn!(error = %err, "invalid locale configuration, using defaults");
		RegistryConfig::default()
	})
}

impl<T: ?Sized + Locale + 'static> fmt::Debug for I18n<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("I18n").field("registry", &*self.inner.read()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	trait Menu: Locale {
		fn quit(&self) -> &str;
	}

	trait Toolbar: Locale {
		fn save(&self) -> &str;
	}

	#[derive(Default)]
	struct MenuEn;

	impl Locale for MenuEn {
		fn language_code(&self) -> &str {
			"en"
		}
	}

	impl Menu for MenuEn {
		fn quit(&self) -> &str {
			"Quit"
		}
	}

	#[derive(Default)]
	struct ToolbarFr;

	impl Locale for ToolbarFr {
		fn language_code(&self) -> &str {
			"fr"
		}
	}

	impl Toolbar for ToolbarFr {
		fn save(&self) -> &str {
			"Enregistrer"
		}
	}

	fn lookup(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
		move |name: &str| {
			vars
				.iter()
				.find(|(key, _)| *key == name)
				.map(|(_, value)| value.to_string())
		}
	}

	#[test]
	fn test_startup_config_invalid_environment_uses_defaults() {
		let config = startup_config(lookup(&[
			(crate::config::ENV_LOCALE, "fr_FR.UTF-8"),
			(crate::config::ENV_DETECT_SYSTEM_LOCALE, "sometimes"),
		]));
		assert_eq!(config, RegistryConfig::default());
	}

	#[test]
	fn test_startup_config_locale_reaches_registry() {
		let config = startup_config(lookup(&[
			(crate::config::ENV_LOCALE, "fr_FR.UTF-8"),
			(crate::config::ENV_DETECT_SYSTEM_LOCALE, "false"),
		]));
		let registry = LocaleRegistry::<dyn Menu>::new(&config);
		assert_eq!(registry.system_code(), Some("fr"));
	}

	#[test]
	fn test_instance_is_shared_per_type() {
		let first = I18n::<dyn Menu>::instance();
		let second = I18n::<dyn Menu>::instance();
		assert!(std::ptr::eq(first, second));
	}

	#[test]
	fn test_types_are_isolated() {
		let menu = I18n::<dyn Menu>::instance();
		let toolbar = I18n::<dyn Toolbar>::instance();
		assert!(!std::ptr::eq(
			menu as *const _ as *const u8,
			toolbar as *const _ as *const u8
		));

		toolbar.configure(&RegistryConfig::detached());
		toolbar.register(crate::locales![dyn Toolbar; ToolbarFr]);

		assert!(toolbar.contains("fr"));
		assert!(!menu.contains("fr"));
		assert_eq!(toolbar.locale().unwrap().save(), "Enregistrer");
	}

	#[test]
	fn test_sized_capability_type() {
		let i18n = I18n::<MenuEn>::instance();
		i18n.configure(&RegistryConfig::detached());
		i18n.register_instances([Box::new(MenuEn)]);

		assert_eq!(i18n.current_code().as_deref(), Some("en"));
		assert_eq!(i18n.locale().unwrap().quit(), "Quit");
		assert_eq!(i18n.with_registry(|registry| registry.len()), 1);

		i18n.reset();
		assert!(i18n.locale().is_none());
		assert!(i18n.codes().is_empty());
	}
}
