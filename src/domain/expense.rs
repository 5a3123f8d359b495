use super::money::Amount;
use super::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A shared cost paid by one participant on behalf of a set of beneficiaries.
///
/// A freshly created expense has no name, a zero amount, no payer and no
/// beneficiaries. It only affects balances once it has at least one
/// beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Amount,
    /// `None` until a payer has been chosen.
    pub paid_by: Option<ParticipantId>,
    pub beneficiaries: BTreeSet<ParticipantId>,
}

impl Expense {
    pub fn new() -> Self {
        Self {
            id: ExpenseId::new(),
            name: String::new(),
            amount: Amount::ZERO,
            paid_by: None,
            beneficiaries: BTreeSet::new(),
        }
    }

    /// Builds a fully specified expense in one go.
    pub fn with(
        name: impl Into<String>,
        amount: Amount,
        paid_by: Option<ParticipantId>,
        beneficiaries: impl IntoIterator<Item = ParticipantId>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            paid_by,
            beneficiaries: beneficiaries.into_iter().collect(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.beneficiaries.is_empty()
    }

    /// Adds the participant if absent, removes it otherwise. Returns the new
    /// membership.
    pub fn toggle_beneficiary(&mut self, participant: ParticipantId) -> bool {
        if self.beneficiaries.remove(&participant) {
            false
        } else {
            self.beneficiaries.insert(participant);
            true
        }
    }

    /// Drops every reference to a participant that is leaving the trip.
    pub fn forget(&mut self, participant: ParticipantId) {
        if self.paid_by == Some(participant) {
            self.paid_by = None;
        }
        self.beneficiaries.remove(&participant);
    }
}

impl Default for Expense {
    fn default() -> Self {
        Self::new()
    }
}

/// A partial update applied to an existing expense.
///
/// `paid_by: Some(None)` clears the payer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpensePatch {
    pub name: Option<String>,
    pub amount: Option<Amount>,
    pub paid_by: Option<Option<ParticipantId>>,
    pub beneficiaries: Option<BTreeSet<ParticipantId>>,
}

impl ExpensePatch {
    pub fn apply(self, expense: &mut Expense) {
        if let Some(name) = self.name {
            expense.name = name;
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(paid_by) = self.paid_by {
            expense.paid_by = paid_by;
        }
        if let Some(beneficiaries) = self.beneficiaries {
            expense.beneficiaries = beneficiaries;
        }
    }
}
