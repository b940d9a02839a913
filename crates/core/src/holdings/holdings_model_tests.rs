//! Tests for holding domain models.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::holdings::{AssetClass, Holding};
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;

    fn equity(quantity: f64, purchase: f64) -> Holding {
        Holding::new(
            AssetClass::Equity,
            quantity,
            purchase,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        )
    }

    // ==================== AssetClass Tests ====================

    #[test]
    fn test_asset_class_serialization() {
        assert_eq!(
            serde_json::to_string(&AssetClass::TermDeposit).unwrap(),
            "\"term_deposit\""
        );
        assert_eq!(
            serde_json::from_str::<AssetClass>("\"depositary_receipt\"").unwrap(),
            AssetClass::DepositaryReceipt
        );
    }

    #[test]
    fn test_asset_class_from_str_normalizes() {
        assert_eq!(AssetClass::from_str("ETF").unwrap(), AssetClass::Etf);
        assert_eq!(
            AssetClass::from_str("mutual-fund").unwrap(),
            AssetClass::MutualFund
        );
        assert_eq!(
            AssetClass::from_str(" Term Deposit ").unwrap(),
            AssetClass::TermDeposit
        );
    }

    #[test]
    fn test_asset_class_from_str_unknown() {
        let err = AssetClass::from_str("stocks").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownVariant {
                kind: "asset class",
                value: "stocks".to_string()
            }
        );
    }

    #[test]
    fn test_volatility_weights() {
        assert_eq!(AssetClass::Cash.volatility_weight(), 0.0);
        assert_eq!(AssetClass::TermDeposit.volatility_weight(), 0.0);
        assert_eq!(AssetClass::Note.volatility_weight(), 1.0);
        assert_eq!(AssetClass::Etf.volatility_weight(), 2.0);
        assert_eq!(AssetClass::DepositaryReceipt.volatility_weight(), 3.0);
        assert_eq!(AssetClass::Crypto.volatility_weight(), 5.0);
        assert_eq!(AssetClass::Other.volatility_weight(), 2.0);
    }

    // ==================== Holding Value Tests ====================

    #[test]
    fn test_market_value_uses_current_price() {
        let holding = equity(10.0, 150.0).with_current_price(175.0);
        assert_eq!(holding.market_value(), 1750.0);
        assert_eq!(holding.cost_basis(), 1500.0);
        assert!(holding.has_gain());
    }

    #[test]
    fn test_market_value_falls_back_to_purchase_price() {
        let holding = equity(4.0, 25.0);
        assert_eq!(holding.effective_price(), 25.0);
        assert_eq!(holding.market_value(), 100.0);
        assert!(!holding.has_gain());
    }

    #[test]
    fn test_holding_json_shape() {
        let json = r#"{
            "assetClass": "equity",
            "ticker": "AAPL",
            "quantity": 10,
            "purchasePrice": 150,
            "currentPrice": 175,
            "updatedAt": "2024-03-01T12:00:00Z"
        }"#;
        let holding: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(holding.ticker.as_deref(), Some("AAPL"));
        assert_eq!(holding.current_price, Some(175.0));
        assert_eq!(holding.dividend_yield, None);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_accepts_well_formed_holding() {
        let holding = equity(1.5, 10.0)
            .with_ticker("MSFT")
            .with_current_price(0.0)
            .with_dividend_yield(1.2);
        assert!(holding.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_quantity() {
        let err = equity(0.0, 10.0).validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::OutOfRange { ref field, .. }) if field == "quantity"
        ));
    }

    #[test]
    fn test_validate_rejects_bad_prices() {
        assert!(equity(1.0, 0.0).validate().is_err());
        assert!(equity(1.0, f64::NAN).validate().is_err());
        assert!(equity(1.0, 10.0)
            .with_current_price(-1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_blank_ticker() {
        let err = equity(1.0, 10.0).with_ticker("  ").validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }
}
