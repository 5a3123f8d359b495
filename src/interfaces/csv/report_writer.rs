use crate::domain::report::{BalanceLine, SettlementLine};
use crate::error::Result;
use std::io::Write;

/// Writes report sections as CSV.
///
/// The header row is always written, even for an empty section.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_settlements(&mut self, settlements: &[SettlementLine]) -> Result<()> {
        self.writer.write_record(["from", "to", "amount"])?;
        for line in settlements {
            self.writer.write_record([
                line.from_name.as_str(),
                line.to_name.as_str(),
                line.amount.to_string().as_str(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_balances(&mut self, balances: &[BalanceLine]) -> Result<()> {
        self.writer.write_record(["participant", "balance"])?;
        for line in balances {
            self.writer
                .write_record([line.name.as_str(), line.balance.to_string().as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> std::result::Result<W, csv::IntoInnerError<csv::Writer<W>>> {
        self.writer.into_inner()
    }
}
