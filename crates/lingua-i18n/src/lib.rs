// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Registry of compiled-in locale string providers.
//!
//! Applications describe their localized strings as a trait extending
//! [`Locale`], implement it once per language, and register the
//! implementations with a registry for that trait. The registry picks a
//! default locale and lets callers switch by language code.
//!
//! # Default selection
//!
//! 1. The host's language (see [`system::detect_system_code`]), if registered
//! 2. The fallback code, `"en"` unless configured otherwise
//! 3. The first registered locale
//!
//! # Example
//!
//! ```
//! use lingua_i18n::{locales, Locale, LocaleRegistry, RegistryConfig};
//!
//! pub trait LoginStrings: Locale {
//! 	fn sign_in(&self) -> &str;
//! }
//!
//! #[derive(Default)]
//! struct English;
//!
//! impl Locale for English {
//! 	fn language_code(&self) -> &str {
//! 		"en"
//! 	}
//! }
//!
//! impl LoginStrings for English {
//! 	fn sign_in(&self) -> &str {
//! 		"Sign In"
//! 	}
//! }
//!
//! #[derive(Default)]
//! struct French;
//!
//! impl Locale for French {
//! 	fn language_code(&self) -> &str {
//! 		"fr"
//! 	}
//! }
//!
//! impl LoginStrings for French {
//! 	fn sign_in(&self) -> &str {
//! 		"Connexion"
//! 	}
//! }
//!
//! let mut registry = LocaleRegistry::<dyn LoginStrings>::new(&RegistryConfig::detached());
//! registry.register(locales![dyn LoginStrings; French, English]);
//! assert_eq!(registry.locale().unwrap().sign_in(), "Sign In");
//!
//! assert!(registry.set_locale("fr"));
//! assert_eq!(registry.locale().unwrap().sign_in(), "Connexion");
//!
//! assert!(!registry.set_locale("zz"));
//! assert_eq!(registry.current_code(), Some("fr"));
//! ```
//!
//! For one registry shared across the process, use [`I18n::instance`].

pub mod config;
pub mod error;
pub mod global;
pub mod locale;
pub mod registry;
pub mod system;

pub use config::{RegistryConfig, DEFAULT_FALLBACK_LOCALE};
pub use error::ConfigError;
pub use global::I18n;
pub use locale::{Locale, LocaleFactory};
pub use registry::{LocaleRecord, LocaleRegistry};
