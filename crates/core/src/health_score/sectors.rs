//! Static sector lookup tables.
//!
//! These tables are small illustrative mappings, not a maintained
//! classification system. A holding resolves to a sector by ticker first,
//! then by asset class, and finally falls back to the asset class name.

use crate::holdings::{AssetClass, Holding};

/// Ticker to sector.
pub const TICKER_SECTORS: &[(&str, &str)] = &[
    ("AAPL", "Technology"),
    ("MSFT", "Technology"),
    ("GOOGL", "Technology"),
    ("META", "Technology"),
    ("NVDA", "Technology"),
    ("QQQ", "Technology"),
    ("AMZN", "Consumer Discretionary"),
    ("TSLA", "Consumer Discretionary"),
    ("MELI", "Consumer Discretionary"),
    ("KO", "Consumer Staples"),
    ("WMT", "Consumer Staples"),
    ("JPM", "Financials"),
    ("GGAL", "Financials"),
    ("BMA", "Financials"),
    ("YPF", "Energy"),
    ("PAMP", "Energy"),
    ("XOM", "Energy"),
    ("JNJ", "Healthcare"),
    ("PFE", "Healthcare"),
    ("TXAR", "Materials"),
    ("ALUA", "Materials"),
    ("TGSU2", "Utilities"),
    ("SPY", "Diversified"),
    ("BTC", "Crypto"),
    ("ETH", "Crypto"),
];

/// Asset class to sector, for holdings without a known ticker.
pub const ASSET_CLASS_SECTORS: &[(AssetClass, &str)] = &[
    (AssetClass::Cash, "Cash"),
    (AssetClass::TermDeposit, "Fixed Income"),
    (AssetClass::Bond, "Fixed Income"),
    (AssetClass::Note, "Fixed Income"),
    (AssetClass::MutualFund, "Diversified"),
    (AssetClass::Etf, "Diversified"),
    (AssetClass::Crypto, "Crypto"),
];

/// Looks up a ticker's sector, ignoring case and surrounding whitespace.
pub fn sector_for_ticker(ticker: &str) -> Option<&'static str> {
    let ticker = ticker.trim();
    TICKER_SECTORS
        .iter()
        .find(|(symbol, _)| symbol.eq_ignore_ascii_case(ticker))
        .map(|(_, sector)| *sector)
}

pub fn sector_for_asset_class(asset_class: AssetClass) -> Option<&'static str> {
    ASSET_CLASS_SECTORS
        .iter()
        .find(|(class, _)| *class == asset_class)
        .map(|(_, sector)| *sector)
}

/// Resolves the sector of a holding.
pub fn resolve_sector(holding: &Holding) -> &'static str {
    holding
        .ticker
        .as_deref()
        .and_then(sector_for_ticker)
        .or_else(|| sector_for_asset_class(holding.asset_class))
        .unwrap_or_else(|| holding.asset_class.as_str())
}
