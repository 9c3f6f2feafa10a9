use crate::export::NormalizedTransaction;

/// One export convention: which columns, in what order, and the file
/// the rows land in. Adding a third convention means adding a table
/// entry here, nothing else.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExportSchema {
    pub(crate) name: &'static str,
    pub(crate) file_prefix: &'static str,
    pub(crate) columns: &'static [ColumnKey],
}

impl ExportSchema {
    pub(crate) fn file_name(&self, year: i32) -> String {
        format!("{}_{year}.csv", self.file_prefix)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum ColumnKey {
    Date,
    Description,
    OriginalDescription,
    Amount,
    TransactionType,
    TransactionTypeDetail,
    Category,
    AccountName,
    AccountProviderName,
    Merchant,
    Labels,
    Notes,
}

impl ColumnKey {
    pub(crate) fn internal_name(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Description => "description",
            Self::OriginalDescription => "original_description",
            Self::Amount => "amount",
            Self::TransactionType => "transaction_type",
            Self::TransactionTypeDetail => "transaction_type_detail",
            Self::Category => "category",
            Self::AccountName => "account_name",
            Self::AccountProviderName => "account_provider_name",
            Self::Merchant => "merchant",
            Self::Labels => "labels",
            Self::Notes => "notes",
        }
    }

    /// Display form of the internal key: underscores become spaces,
    /// each word title-cased (`account_name` -> `Account Name`).
    pub(crate) fn display_name(self) -> String {
        self.internal_name()
            .split('_')
            .map(title_case_word)
            .collect::<Vec<String>>()
            .join(" ")
    }

    pub(crate) fn value(self, row: &NormalizedTransaction) -> String {
        match self {
            Self::Date => row.date.clone(),
            Self::Description => row.description.clone(),
            Self::OriginalDescription => row.original_description.clone(),
            Self::Amount => format_amount(row.amount),
            Self::TransactionType => row.transaction_type.as_str().to_string(),
            Self::TransactionTypeDetail => row.transaction_type_detail.clone(),
            Self::Category => row.category.clone(),
            Self::AccountName => row.account_name.clone(),
            Self::AccountProviderName => row.account_provider_name.clone(),
            Self::Merchant => row.merchant.clone(),
            Self::Labels => row.labels.clone(),
            Self::Notes => row.notes.clone(),
        }
    }
}

pub(crate) const EXPORT_SCHEMAS: &[ExportSchema] = &[MINT_SCHEMA, CREDITKARMA_SCHEMA];

pub(crate) const MINT_SCHEMA: ExportSchema = ExportSchema {
    name: "mint",
    file_prefix: "mint_transactions",
    columns: &[
        ColumnKey::Date,
        ColumnKey::Description,
        ColumnKey::OriginalDescription,
        ColumnKey::Amount,
        ColumnKey::TransactionType,
        ColumnKey::Category,
        ColumnKey::AccountName,
        ColumnKey::Labels,
        ColumnKey::Notes,
    ],
};

pub(crate) const CREDITKARMA_SCHEMA: ExportSchema = ExportSchema {
    name: "creditkarma",
    file_prefix: "creditkarma_transactions",
    columns: &[
        ColumnKey::Date,
        ColumnKey::Description,
        ColumnKey::TransactionType,
        ColumnKey::TransactionTypeDetail,
        ColumnKey::Amount,
        ColumnKey::Category,
        ColumnKey::AccountName,
        ColumnKey::AccountProviderName,
        ColumnKey::Merchant,
    ],
};

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Whole amounts keep a trailing `.0` (`50.0`, not `50`); fractional
/// amounts use the shortest round-trip representation. Debug formatting
/// of f64 gives exactly that.
fn format_amount(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::export::{NormalizedTransaction, TransactionType};

    use super::{CREDITKARMA_SCHEMA, ColumnKey, EXPORT_SCHEMAS, MINT_SCHEMA, format_amount};

    #[test]
    fn display_names_title_case_each_word() {
        assert_eq!(ColumnKey::AccountName.display_name(), "Account Name");
        assert_eq!(
            ColumnKey::TransactionTypeDetail.display_name(),
            "Transaction Type Detail"
        );
        assert_eq!(ColumnKey::Date.display_name(), "Date");
    }

    #[test]
    fn display_rename_is_a_bijection_per_schema() {
        for schema in EXPORT_SCHEMAS {
            let display = schema
                .columns
                .iter()
                .map(|column| column.display_name())
                .collect::<HashSet<String>>();
            assert_eq!(display.len(), schema.columns.len());
        }
    }

    #[test]
    fn mint_schema_matches_export_convention() {
        let names = MINT_SCHEMA
            .columns
            .iter()
            .map(|column| column.internal_name())
            .collect::<Vec<&str>>();
        assert_eq!(
            names,
            vec![
                "date",
                "description",
                "original_description",
                "amount",
                "transaction_type",
                "category",
                "account_name",
                "labels",
                "notes",
            ]
        );
        assert_eq!(MINT_SCHEMA.file_name(2023), "mint_transactions_2023.csv");
    }

    #[test]
    fn creditkarma_schema_matches_export_convention() {
        let names = CREDITKARMA_SCHEMA
            .columns
            .iter()
            .map(|column| column.internal_name())
            .collect::<Vec<&str>>();
        assert_eq!(
            names,
            vec![
                "date",
                "description",
                "transaction_type",
                "transaction_type_detail",
                "amount",
                "category",
                "account_name",
                "account_provider_name",
                "merchant",
            ]
        );
        assert_eq!(
            CREDITKARMA_SCHEMA.file_name(2022),
            "creditkarma_transactions_2022.csv"
        );
    }

    #[test]
    fn amounts_keep_a_trailing_zero_on_whole_values() {
        assert_eq!(format_amount(50.0), "50.0");
        assert_eq!(format_amount(25.0), "25.0");
        assert_eq!(format_amount(42.15), "42.15");
        assert_eq!(format_amount(0.0), "0.0");
    }

    #[test]
    fn column_values_come_straight_from_the_row() {
        let row = NormalizedTransaction {
            date: "2023-04-01".to_string(),
            description: String::new(),
            original_description: "Whole Foods".to_string(),
            amount: 50.0,
            transaction_type: TransactionType::Debit,
            transaction_type_detail: "EXPENSE".to_string(),
            category: "Groceries".to_string(),
            account_name: "Checking".to_string(),
            account_provider_name: "Chase".to_string(),
            merchant: "Whole Foods".to_string(),
            labels: String::new(),
            notes: String::new(),
        };
        assert_eq!(ColumnKey::Date.value(&row), "2023-04-01");
        assert_eq!(ColumnKey::Amount.value(&row), "50.0");
        assert_eq!(ColumnKey::TransactionType.value(&row), "debit");
        assert_eq!(ColumnKey::AccountProviderName.value(&row), "Chase");
        assert_eq!(ColumnKey::Labels.value(&row), "");
    }
}
