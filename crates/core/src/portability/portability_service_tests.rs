#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::errors::Error;
    use crate::events::NoOpDomainEventSink;
    use crate::investments::{InvestmentField, InvestmentType, NewInvestment};
    use crate::ledger::{
        InMemoryLedgerRepository, LedgerService, LedgerServiceTrait, NewTransaction,
    };
    use crate::portability::{
        PortabilityError, PortabilityService, PortabilityServiceTrait, EXPORT_FORMAT_VERSION,
    };

    fn new_ledger() -> Arc<LedgerService> {
        Arc::new(
            LedgerService::new(
                Arc::new(InMemoryLedgerRepository::new()),
                Arc::new(NoOpDomainEventSink),
            )
            .unwrap(),
        )
    }

    fn seeded_ledger() -> Arc<LedgerService> {
        let ledger = new_ledger();
        let retirement = ledger
            .add_investment(NewInvestment {
                name: "Retirement".to_string(),
                investment_type: InvestmentType::Etf,
                initial_balance: dec!(1000),
                description: Some("long horizon".to_string()),
            })
            .unwrap();
        let cash = ledger
            .add_investment(NewInvestment {
                name: "Rainy Day".to_string(),
                investment_type: InvestmentType::Cash,
                initial_balance: dec!(250),
                description: None,
            })
            .unwrap();
        ledger
            .record_transaction(NewTransaction::deposit(&retirement.id, dec!(200)))
            .unwrap();
        ledger
            .record_transaction(NewTransaction::withdrawal(&cash.id, dec!(75.25)))
            .unwrap();
        ledger
    }

    #[test]
    fn test_export_document_shape() {
        let ledger = seeded_ledger();
        let service = PortabilityService::new(ledger);

        let document = service.export().unwrap();
        assert_eq!(document.version, EXPORT_FORMAT_VERSION);
        assert_eq!(document.investments.len(), 2);
        assert_eq!(document.transactions.len(), 2);

        let value: serde_json::Value =
            serde_json::from_str(&service.export_json().unwrap()).unwrap();
        assert_eq!(value["version"], "1.0");
        assert!(value["exportedAt"].is_string());
        assert!(value["investments"].is_array());
        assert!(value["transactions"].is_array());
    }

    #[test]
    fn test_default_file_name_embeds_the_date() {
        let service = PortabilityService::new(new_ledger());
        let document = service.export().unwrap();
        let name = document.default_file_name();
        assert!(name.starts_with("fintrack-export-"));
        assert!(name.ends_with(".json"));
        assert_eq!(
            name,
            format!(
                "fintrack-export-{}.json",
                document.exported_at.format("%Y-%m-%d")
            )
        );
    }

    #[test]
    fn test_round_trip_restores_the_ledger() {
        let source = seeded_ledger();
        let exported = PortabilityService::new(source.clone()).export_json().unwrap();

        let target = new_ledger();
        let summary = PortabilityService::new(target.clone())
            .import_json(&exported)
            .unwrap();

        assert_eq!(summary.investments, 2);
        assert_eq!(summary.transactions, 2);
        assert_eq!(
            target.get_investments().unwrap(),
            source.get_investments().unwrap()
        );
        assert_eq!(
            target.get_transactions().unwrap(),
            source.get_transactions().unwrap()
        );
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let ledger = seeded_ledger();
        let service = PortabilityService::new(ledger.clone());

        let result = service.import_json("{ not json");
        assert!(matches!(
            result,
            Err(Error::Portability(PortabilityError::Parse(_)))
        ));
        assert_eq!(ledger.get_investments().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_collections_are_a_format_error() {
        let service = PortabilityService::new(new_ledger());

        for document in [
            json!({ "version": "1.0" }),
            json!({ "investments": [] }),
            json!({ "transactions": [] }),
            json!({ "investments": null, "transactions": [] }),
        ] {
            let result = service.import_json(&document.to_string());
            assert!(matches!(
                result,
                Err(Error::Portability(PortabilityError::InvalidFormat(_)))
            ));
        }
    }

    #[test]
    fn test_non_array_collections_are_a_format_error() {
        let service = PortabilityService::new(new_ledger());
        let document = json!({ "investments": "nope", "transactions": [] });
        let result = service.import_json(&document.to_string());
        assert!(matches!(
            result,
            Err(Error::Portability(PortabilityError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_import_is_all_or_nothing() {
        let ledger = seeded_ledger();
        let before_investments = ledger.get_investments().unwrap();
        let before_transactions = ledger.get_transactions().unwrap();
        let service = PortabilityService::new(ledger.clone());

        let document = json!({
            "investments": [
                { "name": "Valid", "type": "Stocks", "initialBalance": 100 },
                { "name": "X", "type": "Nope", "initialBalance": -5 }
            ],
            "transactions": []
        });

        let result = service.import_json(&document.to_string());
        let Err(Error::Portability(PortabilityError::InvalidInvestments { rejections })) = result
        else {
            panic!("expected InvalidInvestments");
        };

        assert_eq!(rejections.len(), 1);
        assert_eq!(rejections[0].index, 1);
        assert_eq!(rejections[0].name.as_deref(), Some("X"));
        assert!(rejections[0].report.error(InvestmentField::Name).is_some());
        assert!(rejections[0].report.error(InvestmentField::Type).is_some());
        assert!(rejections[0]
            .report
            .error(InvestmentField::InitialBalance)
            .is_some());

        // Nothing moved.
        assert_eq!(ledger.get_investments().unwrap(), before_investments);
        assert_eq!(ledger.get_transactions().unwrap(), before_transactions);
    }

    #[test]
    fn test_hand_written_documents_are_normalized() {
        let ledger = new_ledger();
        let service = PortabilityService::new(ledger.clone());

        let document = json!({
            "investments": [
                { "name": "Minimal", "type": "Bonds", "initialBalance": 500 }
            ],
            "transactions": []
        });
        service.import_json(&document.to_string()).unwrap();

        let investments = ledger.get_investments().unwrap();
        assert_eq!(investments.len(), 1);
        assert!(!investments[0].id.is_empty());
        assert_eq!(investments[0].current_balance, dec!(500));
    }

    #[test]
    fn test_transactions_travel_verbatim() {
        let ledger = new_ledger();
        let service = PortabilityService::new(ledger.clone());

        // newBalance inconsistent with any derivable sum; it must survive.
        let document = json!({
            "investments": [
                { "id": "inv-1", "name": "Retirement", "type": "ETF", "initialBalance": 1000 }
            ],
            "transactions": [
                {
                    "id": "tx-1",
                    "investmentId": "inv-1",
                    "amount": 10,
                    "type": "deposit",
                    "timestamp": "2024-01-15T10:00:00Z",
                    "newBalance": 123456
                }
            ]
        });
        service.import_json(&document.to_string()).unwrap();

        let transactions = ledger.get_transactions().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].new_balance, dec!(123456));
    }

    #[test]
    fn test_malformed_transaction_rejects_the_import() {
        let ledger = seeded_ledger();
        let service = PortabilityService::new(ledger.clone());

        let document = json!({
            "investments": [
                { "name": "Valid", "type": "Stocks", "initialBalance": 100 }
            ],
            "transactions": [
                { "id": "tx-1", "amount": { "bad": true } }
            ]
        });

        let result = service.import_json(&document.to_string());
        assert!(matches!(
            result,
            Err(Error::Portability(PortabilityError::Parse(_)))
        ));
        assert_eq!(ledger.get_investments().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_collections_import_cleanly() {
        let ledger = seeded_ledger();
        let service = PortabilityService::new(ledger.clone());

        let document = json!({ "investments": [], "transactions": [] });
        let summary = service.import_json(&document.to_string()).unwrap();
        assert_eq!(summary.investments, 0);
        assert_eq!(summary.transactions, 0);
        assert!(ledger.get_investments().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_import_file_reads_and_applies() {
        let exported = PortabilityService::new(seeded_ledger())
            .export_json()
            .unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(exported.as_bytes()).unwrap();

        let target = new_ledger();
        let summary = PortabilityService::new(target.clone())
            .import_file(file.path())
            .await
            .unwrap();
        assert_eq!(summary.investments, 2);
        assert_eq!(target.get_investments().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_import_file_missing_path_is_a_read_error() {
        let service = PortabilityService::new(new_ledger());
        let result = service
            .import_file(std::path::Path::new("/definitely/not/here.json"))
            .await;
        assert!(matches!(
            result,
            Err(Error::Portability(PortabilityError::Read(_)))
        ));
    }
}
