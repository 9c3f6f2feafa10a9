use serde::Deserialize;
use serde_json::Value;

use crate::export::{NormalizedTransaction, TransactionType};
use crate::{ClientError, ClientResult};

/// Source shape of one transaction inside the GraphQL page. Validated
/// here, once, instead of ad-hoc key lookups downstream. `description`
/// is the only genuinely optional field in this source.
#[derive(Debug, Deserialize)]
struct RawTransaction {
    date: String,
    #[serde(default)]
    description: Option<String>,
    amount: RawAmount,
    category: RawCategory,
    merchant: RawMerchant,
    account: RawAccount,
}

#[derive(Debug, Deserialize)]
struct RawAmount {
    value: f64,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    name: String,
    #[serde(rename = "type")]
    category_type: String,
}

#[derive(Debug, Deserialize)]
struct RawMerchant {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawAccount {
    name: String,
    #[serde(rename = "providerName")]
    provider_name: String,
}

/// Single deterministic derivation from raw record to flat output
/// fields. The sign decides the type; the exported amount is always
/// the magnitude.
pub(crate) fn normalize(record: &Value, record_index: usize) -> ClientResult<NormalizedTransaction> {
    let raw = serde_json::from_value::<RawTransaction>(record.clone())
        .map_err(|error| ClientError::transaction_schema_mismatch(record_index, &error.to_string()))?;

    let transaction_type = if raw.amount.value < 0.0 {
        TransactionType::Debit
    } else {
        TransactionType::Credit
    };

    Ok(NormalizedTransaction {
        date: raw.date,
        description: raw.description.unwrap_or_default(),
        // This source has no separate description; the merchant display
        // name stands in for Mint's original description column.
        original_description: raw.merchant.name.clone(),
        amount: raw.amount.value.abs(),
        transaction_type,
        transaction_type_detail: raw.category.category_type,
        category: raw.category.name,
        account_name: raw.account.name,
        account_provider_name: raw.account.provider_name,
        merchant: raw.merchant.name,
        labels: String::new(),
        notes: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::export::TransactionType;

    use super::normalize;

    fn raw_record(amount: f64) -> serde_json::Value {
        json!({
            "date": "2023-04-01",
            "amount": { "value": amount },
            "category": { "name": "Groceries", "type": "EXPENSE" },
            "merchant": { "name": "Whole Foods" },
            "account": { "name": "Checking", "providerName": "Chase" }
        })
    }

    #[test]
    fn negative_amount_becomes_debit_with_magnitude() {
        let normalized = normalize(&raw_record(-50.0), 0);
        assert!(normalized.is_ok());
        if let Ok(row) = normalized {
            assert_eq!(row.transaction_type, TransactionType::Debit);
            assert_eq!(row.amount, 50.0);
        }
    }

    #[test]
    fn non_negative_amount_becomes_credit() {
        for amount in [25.0, 0.0] {
            let normalized = normalize(&raw_record(amount), 0);
            assert!(normalized.is_ok());
            if let Ok(row) = normalized {
                assert_eq!(row.transaction_type, TransactionType::Credit);
                assert_eq!(row.amount, amount);
            }
        }
    }

    #[test]
    fn merchant_name_fills_merchant_and_original_description() {
        let normalized = normalize(&raw_record(-10.0), 0);
        assert!(normalized.is_ok());
        if let Ok(row) = normalized {
            assert_eq!(row.merchant, "Whole Foods");
            assert_eq!(row.original_description, "Whole Foods");
        }
    }

    #[test]
    fn missing_description_becomes_empty_string() {
        let normalized = normalize(&raw_record(-10.0), 0);
        assert!(normalized.is_ok());
        if let Ok(row) = normalized {
            assert_eq!(row.description, "");
            assert_eq!(row.labels, "");
            assert_eq!(row.notes, "");
        }
    }

    #[test]
    fn missing_nested_key_is_a_schema_mismatch() {
        let record = json!({
            "date": "2023-04-01",
            "amount": { "value": -1.0 },
            "merchant": { "name": "Somewhere" },
            "account": { "name": "Checking", "providerName": "Chase" }
        });
        let normalized = normalize(&record, 7);
        assert!(normalized.is_err());
        if let Err(error) = normalized {
            assert_eq!(error.code, "transaction_schema_mismatch");
            assert!(error.message.contains("record 7"));
        }
    }

    #[test]
    fn explicit_description_is_kept() {
        let mut record = raw_record(-10.0);
        record["description"] = json!("CARD PURCHASE 1234");
        let normalized = normalize(&record, 0);
        assert!(normalized.is_ok());
        if let Ok(row) = normalized {
            assert_eq!(row.description, "CARD PURCHASE 1234");
            assert_eq!(row.original_description, "Whole Foods");
        }
    }
}
