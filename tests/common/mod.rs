#![allow(dead_code)]

use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use tripsplit::domain::expense::Expense;
use tripsplit::domain::money::Amount;
use tripsplit::domain::participant::Participant;

pub const NAMES: [&str; 6] = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"];

/// Builds a random trip: up to six participants and `expenses` expenses with
/// amounts up to 500.00, a random payer and a random, possibly empty, set of
/// beneficiaries.
pub fn random_trip<R: Rng>(rng: &mut R, expenses: usize) -> (Vec<Participant>, Vec<Expense>) {
    let count = rng.gen_range(1..=NAMES.len());
    let participants: Vec<Participant> = NAMES[..count]
        .iter()
        .map(|n| Participant::new(*n))
        .collect();

    let expenses = (0..expenses)
        .map(|i| {
            let cents: i64 = rng.gen_range(0..=50_000);
            let payer = participants.choose(rng).map(|p| p.id);
            let beneficiaries: Vec<_> = participants
                .iter()
                .filter(|_| rng.gen_bool(0.6))
                .map(|p| p.id)
                .collect();
            Expense::with(
                format!("expense {i}"),
                Amount::new(Decimal::new(cents, 2)).unwrap(),
                payer,
                beneficiaries,
            )
        })
        .collect();

    (participants, expenses)
}

/// Writes an expenses CSV where everybody shares every expense and payers
/// take turns.
pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["name", "amount", "paid_by", "beneficiaries"])?;

    let everyone = NAMES.join(";");
    for i in 0..rows {
        wtr.write_record([
            format!("expense {i}").as_str(),
            "12.34",
            NAMES[i % NAMES.len()],
            everyone.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
