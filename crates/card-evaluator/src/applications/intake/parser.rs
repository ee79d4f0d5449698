use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::super::domain::CreditCardApplication;

/// Parsed batch row: the application plus the caller's reference for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeRecord {
    pub reference: String,
    pub application: CreditCardApplication,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<IntakeRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<ApplicationRow>().enumerate() {
        let row = record?;
        let reference = row.reference.unwrap_or_else(|| format!("row-{}", index + 1));

        records.push(IntakeRecord {
            reference,
            application: CreditCardApplication {
                age: row.age.unwrap_or_default(),
                gross_annual_income: row.gross_annual_income.unwrap_or_default(),
                frequent_flyer_number: row.frequent_flyer_number,
            },
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    reference: Option<String>,
    #[serde(default)]
    age: Option<u8>,
    #[serde(default)]
    gross_annual_income: Option<u64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    frequent_flyer_number: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
