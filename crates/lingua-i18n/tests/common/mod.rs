// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#![allow(dead_code)]

use lingua_i18n::{Locale, LocaleFactory};

/// Strings of a login screen.
pub trait LoginStrings: Locale {
	fn sign_up_title(&self) -> &str;
	fn sign_in_title(&self) -> &str;
	fn login_subtitle(&self) -> &str;
	fn button_submit(&self) -> &str;
	fn button_cancel(&self) -> &str;
}

macro_rules! login_locale {
	($name:ident, $code:literal, $sign_up:literal, $sign_in:literal, $subtitle:literal, $submit:literal, $cancel:literal) => {
		#[derive(Debug, Default)]
		pub struct $name;

		impl Locale for $name {
			fn language_code(&self) -> &str {
				$code
			}
		}

		impl LoginStrings for $name {
			fn sign_up_title(&self) -> &str {
				$sign_up
			}

			fn sign_in_title(&self) -> &str {
				$sign_in
			}

			fn login_subtitle(&self) -> &str {
				$subtitle
			}

			fn button_submit(&self) -> &str {
				$submit
			}

			fn button_cancel(&self) -> &str {
				$cancel
			}
		}
	};
}

login_locale!(LocaleEn, "en", "Sign Up", "Sign In", "welcome !", "Submit", "Cancel");
login_locale!(
	LocaleEs,
	"es",
	"Registro",
	"Iniciar sesión",
	"¡Bienvenido!",
	"Enviar",
	"Cancelar"
);
login_locale!(
	LocaleFr,
	"fr",
	"Inscription",
	"Connexion",
	"Bienvenue !",
	"Valider",
	"Annuler"
);
login_locale!(
	LocaleIt,
	"it",
	"Registrati",
	"Accedi",
	"Benvenuto!",
	"Invia",
	"Annulla"
);
// Reports the same code as `LocaleEn` with British wording.
login_locale!(
	LocaleEnGb,
	"en",
	"Register",
	"Log In",
	"welcome !",
	"Submit",
	"Cancel order"
);

/// Every supported locale of the test application.
pub const SUPPORTED_LOCALES: &[LocaleFactory<dyn LoginStrings>] = &[
	LocaleFactory::new(|| Box::new(LocaleEn) as Box<dyn LoginStrings>),
	LocaleFactory::new(|| Box::new(LocaleEs) as Box<dyn LoginStrings>),
	LocaleFactory::new(|| Box::new(LocaleFr) as Box<dyn LoginStrings>),
	LocaleFactory::new(|| Box::new(LocaleIt) as Box<dyn LoginStrings>),
];
