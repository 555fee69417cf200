//! Market feed providers.

mod binance;
mod coingecko;
pub mod mock;
mod stocks;
mod traits;

pub use binance::{BinanceProvider, PairStats};
pub use coingecko::CoinGeckoProvider;
pub use stocks::SyntheticStockProvider;
pub use traits::MarketFeedProvider;
