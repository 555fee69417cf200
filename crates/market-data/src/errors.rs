//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// None of these are retried. The caller either substitutes placeholder
/// data or surfaces the failure; the next scheduled poll replaces whatever
/// was shown.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested asset id or symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// A provider returned an HTTP error or an application-level failure.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider responded, but the payload did not have the expected
    /// shape or failed to parse into numbers.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider whose payload failed to parse
        provider: String,
        /// Description of the parse failure
        message: String,
    },

    /// The operation is not supported by this provider.
    #[error("Operation '{operation}' not supported by provider {provider}")]
    NotSupported {
        /// The unsupported operation
        operation: String,
        /// The provider that was asked
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::ProviderError {
            provider: "BINANCE".to_string(),
            message: "HTTP error: 500".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: BINANCE - HTTP error: 500"
        );

        let error = MarketDataError::InvalidResponse {
            provider: "COINGECKO".to_string(),
            message: "missing prices array".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid response from COINGECKO: missing prices array"
        );
    }
}
