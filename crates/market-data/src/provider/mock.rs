//! Generated placeholder listing rows.
//!
//! When a provider fetch fails, the service substitutes these rows so the
//! dashboard always has something to render. The next successful poll
//! replaces them.

use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::models::{AssetKind, MarketQuote};

fn dec(value: f64, scale: u32) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default().round_dp(scale)
}

/// Generate `count` placeholder rows for the given asset kind.
pub fn placeholder_quotes(kind: AssetKind, count: usize) -> Vec<MarketQuote> {
    let mut rng = rand::thread_rng();
    let (id_prefix, symbol_prefix, name_prefix) = match kind {
        AssetKind::Crypto => ("crypto", "CRYPTO", "Cryptocurrency"),
        AssetKind::Stock => ("stock", "STOCK", "Stock"),
    };

    (0..count)
        .map(|index| MarketQuote {
            id: format!("{}-{}", id_prefix, index),
            symbol: format!("{}{}", symbol_prefix, index),
            name: format!("{} {}", name_prefix, index),
            current_price: dec(rng.gen::<f64>() * 1000.0, 2),
            price_change_percentage_24h: dec((rng.gen::<f64>() - 0.5) * 5.0, 2),
            market_cap: dec(rng.gen::<f64>() * 10_000_000.0, 0),
            circulating_supply: Decimal::ZERO,
            total_volume: dec(rng.gen::<f64>() * 100_000.0, 0),
            market_cap_rank: 0,
        })
        .collect()
}
