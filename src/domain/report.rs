use super::money::{Amount, Balance, round_to_cents};
use super::participant::ParticipantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceLine {
    pub participant: ParticipantId,
    pub name: String,
    /// Rounded to cents.
    pub balance: Balance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLine {
    pub from: ParticipantId,
    pub from_name: String,
    pub to: ParticipantId,
    pub to_name: String,
    pub amount: Amount,
}

/// Human-facing summary of a trip: what was spent, who stands where and who
/// pays whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripReport {
    pub currency: String,
    pub total: Amount,
    pub balances: Vec<BalanceLine>,
    pub settlements: Vec<SettlementLine>,
}

impl TripReport {
    fn money(&self, value: Decimal) -> String {
        let value = round_to_cents(value);
        let sign = if value.is_sign_negative() { "-" } else { "" };
        format!("{sign}{}{}", self.currency, Balance::new(value.abs()))
    }
}

impl fmt::Display for TripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total trip expense: {}", self.money(self.total.value()))?;
        writeln!(f)?;
        writeln!(f, "Balances:")?;
        for line in &self.balances {
            writeln!(f, "  {}: {}", line.name, self.money(line.balance.value()))?;
        }
        writeln!(f)?;
        writeln!(f, "Settlements:")?;
        if self.settlements.is_empty() {
            writeln!(f, "  Everyone is settled up.")?;
        }
        for line in &self.settlements {
            writeln!(
                f,
                "  {} owes {} {}",
                line.from_name,
                line.to_name,
                self.money(line.amount.value())
            )?;
        }
        Ok(())
    }
}
