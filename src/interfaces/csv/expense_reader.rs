use crate::application::trip::Trip;
use crate::domain::expense::{ExpenseId, ExpensePatch};
use crate::domain::money::Amount;
use crate::domain::participant::ParticipantId;
use crate::error::{Result, TripError};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::io::Read;
use std::str::FromStr;
use tracing::warn;

/// One row of an expenses file.
///
/// `beneficiaries` holds participant names separated by `;`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ExpenseRecord {
    pub name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: Amount,
    pub paid_by: Option<String>,
    #[serde(default)]
    pub beneficiaries: String,
}

/// Parses the field text directly so no digits are lost to a float.
fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<Amount, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let value = Decimal::from_str(raw.trim()).map_err(serde::de::Error::custom)?;
    Amount::new(value).map_err(serde::de::Error::custom)
}

impl ExpenseRecord {
    pub fn beneficiary_names(&self) -> impl Iterator<Item = &str> {
        self.beneficiaries
            .split(';')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn payer_name(&self) -> Option<&str> {
        self.paid_by
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Records the row as a new expense on the trip.
    ///
    /// With `enroll` set, names the trip does not know yet are added as
    /// participants. Otherwise, and whenever the participant limit is reached,
    /// unknown names are dropped with a warning.
    pub fn add_to(&self, trip: &mut Trip, enroll: bool) -> Result<ExpenseId> {
        let paid_by = match self.payer_name() {
            Some(name) => resolve(trip, name, enroll),
            None => None,
        };
        let beneficiaries: BTreeSet<ParticipantId> = self
            .beneficiary_names()
            .filter_map(|name| resolve(trip, name, enroll))
            .collect();

        let id = trip.add_expense();
        trip.update_expense(
            id,
            ExpensePatch {
                name: Some(self.name.clone()),
                amount: Some(self.amount),
                paid_by: Some(paid_by),
                beneficiaries: Some(beneficiaries),
            },
        )?;
        Ok(id)
    }
}

fn resolve(trip: &mut Trip, name: &str, enroll: bool) -> Option<ParticipantId> {
    if let Some(participant) = trip.participant_by_name(name) {
        return Some(participant.id);
    }
    if !enroll {
        warn!(name, "ignoring unknown participant");
        return None;
    }
    match trip.add_participant(name) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(name, "ignoring participant: {}", e);
            None
        }
    }
}

/// Reads expense rows from a CSV source.
///
/// Whitespace around fields is trimmed and short rows are accepted, so a row
/// may omit its trailing beneficiaries column.
pub struct ExpenseReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ExpenseReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes rows; a bad row yields an error and reading goes on.
    pub fn expenses(self) -> impl Iterator<Item = Result<ExpenseRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(TripError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TripConfig;
    use crate::domain::money::Balance;
    use rust_decimal_macros::dec;

    const HEADER: &str = "name, amount, paid_by, beneficiaries\n";

    fn read(data: &str) -> Vec<Result<ExpenseRecord>> {
        ExpenseReader::new(data.as_bytes()).expenses().collect()
    }

    #[test]
    fn test_reader_valid_stream() {
        let data = format!("{HEADER}Dinner, 90.00, Alice, Alice;Bob;Carol\nTaxi, 20, , Bob");
        let results = read(&data);

        assert_eq!(results.len(), 2);
        let dinner = results[0].as_ref().unwrap();
        assert_eq!(dinner.name, "Dinner");
        assert_eq!(dinner.amount, Amount::new(dec!(90)).unwrap());
        assert_eq!(dinner.payer_name(), Some("Alice"));
        assert_eq!(
            dinner.beneficiary_names().collect::<Vec<_>>(),
            vec!["Alice", "Bob", "Carol"]
        );

        let taxi = results[1].as_ref().unwrap();
        assert_eq!(taxi.payer_name(), None);
    }

    #[test]
    fn test_reader_missing_beneficiaries_column() {
        let results = read(&format!("{HEADER}Deposit, 15, Alice"));
        let record = results[0].as_ref().unwrap();
        assert_eq!(record.beneficiary_names().count(), 0);
    }

    #[test]
    fn test_reader_malformed_lines() {
        let data = format!("{HEADER}Dinner, lots, Alice, Bob\nRefund, -5, Alice, Bob\nBus, 4, Bob, Alice");
        let results = read(&data);

        assert_eq!(results.len(), 3);
        assert!(results[0].is_err());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_reader_keeps_every_digit() {
        let results = read(&format!("{HEADER}Fees, 10.123456789012345678, Alice, Bob"));
        let record = results[0].as_ref().unwrap();
        assert_eq!(record.amount.value(), dec!(10.123456789012345678));
    }

    #[test]
    fn test_reader_rejects_oversized_amount() {
        let results = read(&format!(
            "{HEADER}Island, 50000000000000000000000000000, Alice, Bob\nBus, 4, Bob, Alice"
        ));
        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_add_to_enrolls_new_names() {
        let mut trip = Trip::new(TripConfig::default());
        let results = read(&format!(
            "{HEADER}Dinner, 90, Alice, Alice;Bob;Carol\nBus, 10, Bob, Bob;Alice"
        ));
        for record in results {
            record.unwrap().add_to(&mut trip, true).unwrap();
        }

        let names: Vec<_> = trip.participants().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(trip.expenses().len(), 2);

        let alice = trip.participant_by_name("Alice").unwrap().id;
        assert_eq!(trip.balances()[&alice], Balance::new(dec!(55)));
    }

    #[test]
    fn test_add_to_drops_undeclared_names() {
        let mut trip = Trip::new(TripConfig::default());
        let alice = trip.add_participant("Alice").unwrap();
        let bob = trip.add_participant("Bob").unwrap();

        let record = read(&format!("{HEADER}Boat, 60, Mallory, Alice;Bob;Mallory"))
            .remove(0)
            .unwrap();
        let id = record.add_to(&mut trip, false).unwrap();

        assert_eq!(trip.participants().len(), 2);
        let expense = trip.expense(id).unwrap();
        assert_eq!(expense.paid_by, None);
        assert_eq!(expense.beneficiaries, BTreeSet::from([alice, bob]));
    }

    #[test]
    fn test_add_to_respects_participant_limit() {
        let mut trip = Trip::new(TripConfig {
            max_participants: 2,
            ..Default::default()
        });
        let record = read(&format!("{HEADER}Boat, 60, A, A;B;C"))
            .remove(0)
            .unwrap();
        let id = record.add_to(&mut trip, true).unwrap();

        assert_eq!(trip.participants().len(), 2);
        assert_eq!(trip.expense(id).unwrap().beneficiaries.len(), 2);
    }
}
