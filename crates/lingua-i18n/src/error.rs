// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

/// Errors that can occur while loading registry configuration.
///
/// Registry operations themselves never fail; only configuration loading
/// reports errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
	/// Invalid value
	#[error("Invalid value for {key}: {message}")]
	InvalidValue { key: String, message: String },
}

impl ConfigError {
	/// Create an invalid value error
	pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			key: key.into(),
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_value_display() {
		let err = ConfigError::invalid_value("LINGUA_FALLBACK_LOCALE", "must not be empty");
		assert_eq!(
			err.to_string(),
			"Invalid value for LINGUA_FALLBACK_LOCALE: must not be empty"
		);
	}
}
