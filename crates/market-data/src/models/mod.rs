//! Market data domain models.

mod history;
mod news;
mod quote;
mod types;

pub use history::{HistoricalSeries, OhlcBar, PricePoint};
pub use news::NewsItem;
pub use quote::MarketQuote;
pub use types::{AssetKind, FiatCurrency};
