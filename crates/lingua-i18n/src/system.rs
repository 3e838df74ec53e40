// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Host locale detection.

/// Locale names that carry no language preference.
const NEUTRAL_LOCALES: &[&str] = &["C", "POSIX"];

/// Detect the two-letter language code of the host environment.
///
/// Returns `None` if the platform reports no locale or a neutral one
/// (`C`, `POSIX`).
pub fn detect_system_code() -> Option<String> {
	let Some(raw) = sys_locale::get_locale() else {
		tracing::debug!("system locale unavailable");
		return None;
	};

	let code = normalize_code(&raw);
	tracing::debug!(raw = %raw, code = ?code, "detected system locale");
	code
}

/// Reduce a host locale identifier to its language code.
///
/// Encoding (`.UTF-8`) and modifier (`@euro`) suffixes are stripped, neutral
/// locales are rejected and the first two characters are kept, lowercased.
///
/// ```
/// use lingua_i18n::system::normalize_code;
///
/// assert_eq!(normalize_code("fr_FR.UTF-8").as_deref(), Some("fr"));
/// assert_eq!(normalize_code("en-US").as_deref(), Some("en"));
/// assert_eq!(normalize_code("POSIX"), None);
/// ```
pub fn normalize_code(raw: &str) -> Option<String> {
	let name = raw.split(['.', '@']).next().unwrap_or_default().trim();

	if name.is_empty() || NEUTRAL_LOCALES.contains(&name) {
		return None;
	}

	Some(name.chars().take(2).collect::<String>().to_lowercase())
}
