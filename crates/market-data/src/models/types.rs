use serde::{Deserialize, Serialize};

/// Classification of a tradable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Crypto,
    Stock,
}

impl AssetKind {
    /// Lowercase label, matching the persisted document format.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Crypto => "crypto",
            AssetKind::Stock => "stock",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display currency for market listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FiatCurrency {
    #[default]
    Inr,
    Usd,
}

impl FiatCurrency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            FiatCurrency::Inr => "INR",
            FiatCurrency::Usd => "USD",
        }
    }

    /// Lowercase code for APIs that take a `vs_currency` query parameter.
    pub fn vs_currency(&self) -> &'static str {
        match self {
            FiatCurrency::Inr => "inr",
            FiatCurrency::Usd => "usd",
        }
    }
}

impl std::fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_kind_serialization() {
        assert_eq!(serde_json::to_string(&AssetKind::Crypto).unwrap(), "\"crypto\"");
        assert_eq!(serde_json::to_string(&AssetKind::Stock).unwrap(), "\"stock\"");
    }

    #[test]
    fn test_fiat_currency_serialization() {
        assert_eq!(serde_json::to_string(&FiatCurrency::Inr).unwrap(), "\"INR\"");
        assert_eq!(
            serde_json::from_str::<FiatCurrency>("\"USD\"").unwrap(),
            FiatCurrency::Usd
        );
    }

    #[test]
    fn test_fiat_currency_default_is_inr() {
        assert_eq!(FiatCurrency::default(), FiatCurrency::Inr);
    }
}
