#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::investments::{Investment, InvestmentDraft, InvestmentField, InvestmentType, NewInvestment};

    fn draft(value: serde_json::Value) -> InvestmentDraft {
        InvestmentDraft::from_value(&value)
    }

    #[test]
    fn test_empty_draft_reports_all_three_fields() {
        let report = draft(json!({})).validate();

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 3);
        assert!(report.error(InvestmentField::Name).is_some());
        assert!(report.error(InvestmentField::Type).is_some());
        assert!(report.error(InvestmentField::InitialBalance).is_some());
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let report = draft(json!({
            "name": "AB",
            "type": "Stocks",
            "initialBalance": 100
        }))
        .validate();

        assert!(report.is_valid());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_one_character_name_fails_only_name() {
        let report = draft(json!({
            "name": "A",
            "type": "Stocks",
            "initialBalance": 0
        }))
        .validate();

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert!(report.error(InvestmentField::Name).is_some());
    }

    #[test]
    fn test_name_is_trimmed_before_length_check() {
        let report = draft(json!({
            "name": "  A  ",
            "type": "Bonds",
            "initialBalance": 10
        }))
        .validate();
        assert!(report.error(InvestmentField::Name).is_some());

        let report = draft(json!({
            "name": "  AB  ",
            "type": "Bonds",
            "initialBalance": 10
        }))
        .validate();
        assert!(report.is_valid());
    }

    #[test]
    fn test_zero_initial_balance_is_valid() {
        let report = draft(json!({
            "name": "Emergency Fund",
            "type": "Cash",
            "initialBalance": 0
        }))
        .validate();
        assert!(report.is_valid());
    }

    #[test]
    fn test_negative_initial_balance_is_invalid() {
        let report = draft(json!({
            "name": "Emergency Fund",
            "type": "Cash",
            "initialBalance": -0.01
        }))
        .validate();
        assert_eq!(
            report.error(InvestmentField::InitialBalance),
            Some("Initial balance must be a non-negative number")
        );
    }

    #[test]
    fn test_non_numeric_balance_is_invalid() {
        // A string is not a number, even if it looks like one.
        let report = draft(json!({
            "name": "Index Fund",
            "type": "ETF",
            "initialBalance": "100"
        }))
        .validate();
        assert!(report.error(InvestmentField::InitialBalance).is_some());
        assert!(report.error(InvestmentField::Name).is_none());
    }

    #[test]
    fn test_unknown_type_is_invalid() {
        let report = draft(json!({
            "name": "Index Fund",
            "type": "stocks",
            "initialBalance": 100
        }))
        .validate();
        assert_eq!(
            report.error(InvestmentField::Type),
            Some("Invalid investment type")
        );
    }

    #[test]
    fn test_all_type_labels_round_trip() {
        for investment_type in InvestmentType::ALL {
            let label = investment_type.as_str();
            assert_eq!(InvestmentType::from_label(label), Some(investment_type));

            let encoded = serde_json::to_string(&investment_type).unwrap();
            assert_eq!(encoded, format!("\"{}\"", label));
            let decoded: InvestmentType = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, investment_type);
        }
    }

    #[test]
    fn test_multi_word_labels() {
        assert_eq!(InvestmentType::MoneyMarketFund.as_str(), "Money Market Fund");
        assert_eq!(InvestmentType::RealEstate.as_str(), "Real Estate");
        assert_eq!(InvestmentType::Etf.as_str(), "ETF");
    }

    #[test]
    fn test_investment_wire_shape() {
        let investment = Investment {
            id: "inv-1".to_string(),
            name: "Retirement".to_string(),
            investment_type: InvestmentType::RealEstate,
            initial_balance: dec!(1000),
            current_balance: dec!(1200),
            description: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&investment).unwrap();
        assert_eq!(value["id"], "inv-1");
        assert_eq!(value["type"], "Real Estate");
        assert!(value["initialBalance"].is_number());
        assert!(value["currentBalance"].is_number());
        assert!(value.get("createdAt").is_some());

        let decoded: Investment = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, investment);
    }

    #[test]
    fn test_non_object_value_becomes_empty_draft() {
        let report = draft(json!(42)).validate();
        assert_eq!(report.errors.len(), 3);

        let report = draft(json!(["not", "an", "object"])).validate();
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn test_malformed_field_types_surface_as_field_errors() {
        // A numeric name must not make the whole draft unreadable.
        let report = draft(json!({
            "name": 42,
            "type": "Stocks",
            "initialBalance": 100
        }))
        .validate();
        assert_eq!(report.errors.len(), 1);
        assert!(report.error(InvestmentField::Name).is_some());
    }

    #[test]
    fn test_into_investment_preserves_present_fields() {
        let created_at = Utc.with_ymd_and_hms(2023, 6, 15, 8, 30, 0).unwrap();
        let investment = draft(json!({
            "id": "inv-42",
            "name": "Retirement",
            "type": "ETF",
            "initialBalance": 1000,
            "currentBalance": 750.5,
            "description": "long horizon",
            "createdAt": created_at.to_rfc3339()
        }))
        .into_investment()
        .unwrap();

        assert_eq!(investment.id, "inv-42");
        assert_eq!(investment.investment_type, InvestmentType::Etf);
        assert_eq!(investment.initial_balance, dec!(1000));
        assert_eq!(investment.current_balance, dec!(750.5));
        assert_eq!(investment.description.as_deref(), Some("long horizon"));
        assert_eq!(investment.created_at, created_at);
    }

    #[test]
    fn test_into_investment_generates_missing_fields() {
        let investment = draft(json!({
            "name": "Retirement",
            "type": "ETF",
            "initialBalance": 1000
        }))
        .into_investment()
        .unwrap();

        assert!(!investment.id.is_empty());
        // Without a recorded balance the position starts at its baseline.
        assert_eq!(investment.current_balance, dec!(1000));
    }

    #[test]
    fn test_into_investment_rejects_unvalidated_drafts() {
        assert!(draft(json!({})).into_investment().is_none());
        assert!(draft(json!({
            "name": "Retirement",
            "type": "not a type",
            "initialBalance": 1000
        }))
        .into_investment()
        .is_none());
    }

    #[test]
    fn test_new_investment_validates_through_draft_rules() {
        let input = NewInvestment {
            name: "R".to_string(),
            investment_type: InvestmentType::Stocks,
            initial_balance: dec!(100),
            description: None,
        };
        let report = input.validate();
        assert!(report.error(InvestmentField::Name).is_some());
        assert!(report.error(InvestmentField::Type).is_none());
    }
}
