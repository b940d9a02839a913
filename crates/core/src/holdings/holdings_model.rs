//! Holding domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Result, ValidationError};

/// Asset class of a portfolio position.
///
/// Mirrors the instrument families offered in the tracker: cash and term
/// deposits, fixed income (bonds and corporate notes), funds, equities and
/// their depositary receipts, and crypto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Cash,
    TermDeposit,
    Bond,
    Note,
    MutualFund,
    Equity,
    Etf,
    DepositaryReceipt,
    Crypto,
    Other,
}

impl AssetClass {
    pub const ALL: [AssetClass; 10] = [
        AssetClass::Cash,
        AssetClass::TermDeposit,
        AssetClass::Bond,
        AssetClass::Note,
        AssetClass::MutualFund,
        AssetClass::Equity,
        AssetClass::Etf,
        AssetClass::DepositaryReceipt,
        AssetClass::Crypto,
        AssetClass::Other,
    ];

    /// Returns the serialized (snake_case) name of this asset class.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Cash => "cash",
            AssetClass::TermDeposit => "term_deposit",
            AssetClass::Bond => "bond",
            AssetClass::Note => "note",
            AssetClass::MutualFund => "mutual_fund",
            AssetClass::Equity => "equity",
            AssetClass::Etf => "etf",
            AssetClass::DepositaryReceipt => "depositary_receipt",
            AssetClass::Crypto => "crypto",
            AssetClass::Other => "other",
        }
    }

    /// Relative volatility proxy used by the risk sub-score.
    ///
    /// These are fixed ordinal weights, not measured market volatility.
    pub const fn volatility_weight(&self) -> f64 {
        match self {
            AssetClass::Cash | AssetClass::TermDeposit => 0.0,
            AssetClass::Bond | AssetClass::Note => 1.0,
            AssetClass::MutualFund | AssetClass::Etf => 2.0,
            AssetClass::Equity | AssetClass::DepositaryReceipt => 3.0,
            AssetClass::Crypto => 5.0,
            AssetClass::Other => 2.0,
        }
    }

    pub const fn is_cash(&self) -> bool {
        matches!(self, AssetClass::Cash)
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        AssetClass::ALL
            .into_iter()
            .find(|class| class.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "asset class",
                value: s.to_string(),
            })
    }
}

/// One position in a user's portfolio.
///
/// When `current_price` is absent the purchase price stands in for it in
/// every value computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub asset_class: AssetClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    pub quantity: f64,
    pub purchase_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    /// Annualized dividend yield in percent (e.g. 3.5 for 3.5%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

impl Holding {
    /// Creates a holding with no ticker, market price or dividend data.
    pub fn new(
        asset_class: AssetClass,
        quantity: f64,
        purchase_price: f64,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            asset_class,
            ticker: None,
            quantity,
            purchase_price,
            current_price: None,
            dividend_yield: None,
            updated_at,
        }
    }

    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    pub fn with_current_price(mut self, price: f64) -> Self {
        self.current_price = Some(price);
        self
    }

    pub fn with_dividend_yield(mut self, yield_pct: f64) -> Self {
        self.dividend_yield = Some(yield_pct);
        self
    }

    /// Latest known unit price, falling back to the purchase price.
    pub fn effective_price(&self) -> f64 {
        self.current_price.unwrap_or(self.purchase_price)
    }

    pub fn market_value(&self) -> f64 {
        self.quantity * self.effective_price()
    }

    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.purchase_price
    }

    /// True when the position is currently worth more than it cost.
    pub fn has_gain(&self) -> bool {
        self.market_value() > self.cost_basis()
    }

    /// Checks the data-model invariants of a holding.
    ///
    /// The scoring engine does not call this; it is offered to the layers
    /// that accept holdings from users or storage.
    pub fn validate(&self) -> Result<()> {
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(ValidationError::out_of_range("quantity", "must be greater than zero").into());
        }
        if !self.purchase_price.is_finite() || self.purchase_price <= 0.0 {
            return Err(
                ValidationError::out_of_range("purchasePrice", "must be greater than zero").into(),
            );
        }
        if let Some(price) = self.current_price {
            if !price.is_finite() || price < 0.0 {
                return Err(
                    ValidationError::out_of_range("currentPrice", "must not be negative").into(),
                );
            }
        }
        if let Some(yield_pct) = self.dividend_yield {
            if !yield_pct.is_finite() || yield_pct < 0.0 {
                return Err(
                    ValidationError::out_of_range("dividendYield", "must not be negative").into(),
                );
            }
        }
        if matches!(&self.ticker, Some(ticker) if ticker.trim().is_empty()) {
            return Err(ValidationError::InvalidInput("ticker must not be blank".to_string()).into());
        }
        Ok(())
    }
}
