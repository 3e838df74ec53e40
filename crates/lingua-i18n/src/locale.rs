// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The locale capability and locale constructors.

use std::fmt;

/// Minimal contract a locale must satisfy to be registered.
///
/// Applications extend this with their own lookup surface and register
/// trait objects of the extended trait:
///
/// ```
/// use lingua_i18n::Locale;
///
/// pub trait HomeStrings: Locale {
/// 	fn title(&self) -> &str;
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
/// impl HomeStrings for English {
/// 	fn title(&self) -> &str {
/// 		"Welcome"
/// 	}
/// }
/// ```
pub trait Locale: Send + Sync {
	/// Language code identifying this locale (e.g., "en", "fr", "es").
	///
	/// Must be stable and non-empty. Two letters by convention; the registry
	/// does not enforce a format.
	fn language_code(&self) -> &str;
}

/// Constructs one instance of a locale as the capability type `T`.
///
/// `new` is a `const fn`, so the supported set of an application can be
/// declared once as a constant slice:
///
/// ```
/// use lingua_i18n::{Locale, LocaleFactory};
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
/// const SUPPORTED: &[LocaleFactory<dyn Locale>] =
/// 	&[LocaleFactory::new(|| Box::new(English) as Box<dyn Locale>)];
///
/// assert_eq!(SUPPORTED[0].build().language_code(), "en");
/// ```
pub struct LocaleFactory<T: ?Sized> {
	build: fn() -> Box<T>,
}

impl<T: ?Sized> LocaleFactory<T> {
	pub const fn new(build: fn() -> Box<T>) -> Self {
		Self { build }
	}

	/// Construct a fresh instance.
	pub fn build(&self) -> Box<T> {
		(self.build)()
	}
}

impl<T: ?Sized> Clone for LocaleFactory<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: ?Sized> Copy for LocaleFactory<T> {}

impl<T: ?Sized> fmt::Debug for LocaleFactory<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LocaleFactory").finish_non_exhaustive()
	}
}

/// Build an ordered `Vec<LocaleFactory<_>>` from a list of locale types.
///
/// Every listed type must implement `Default` and the capability trait named
/// before the `;`. Both are checked at compile time.
///
/// ```
/// use lingua_i18n::{locales, Locale, LocaleRegistry, RegistryConfig};
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
/// #[derive(Default)]
/// struct Spanish;
///
/// impl Locale for Spanish {
/// 	fn language_code(&self) -> &str {
/// 		"es"
/// 	}
/// }
///
/// let mut registry = LocaleRegistry::<dyn Locale>::new(&RegistryConfig::detached());
/// registry.register(locales![dyn Locale; Spanish, English]);
///
/// assert_eq!(registry.current_code(), Some("en"));
/// ```
#[macro_export]
macro_rules! locales {
	($capability:ty; $($locale:ty),* $(,)?) => {{
		let factories: ::std::vec::Vec<$crate::LocaleFactory<$capability>> = ::std::vec![
			$(
				$crate::LocaleFactory::new(|| {
					::std::boxed::Box::new(<$locale as ::std::default::Default>::default())
						as ::std::boxed::Box<$capability>
				}),
			)*
		];
		factories
	}};
}
