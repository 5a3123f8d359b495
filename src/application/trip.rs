use super::balances::{Balances, compute_balances};
use super::settlement::settle_balances;
use crate::config::TripConfig;
use crate::domain::expense::{Expense, ExpenseId, ExpensePatch};
use crate::domain::money::Amount;
use crate::domain::participant::{Participant, ParticipantId};
use crate::domain::report::{BalanceLine, SettlementLine, TripReport};
use crate::domain::settlement::Settlement;
use crate::error::{Result, TripError};
use tracing::{debug, info};

/// In-memory state of one trip: who is travelling and what was spent.
///
/// `Trip` only stores participants and expenses. Balances, settlements and
/// reports are derived from scratch on every call.
#[derive(Debug, Clone, Default)]
pub struct Trip {
    config: TripConfig,
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
}

impl Trip {
    pub fn new(config: TripConfig) -> Self {
        Self {
            config,
            participants: Vec::new(),
            expenses: Vec::new(),
        }
    }

    pub fn config(&self) -> &TripConfig {
        &self.config
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn participant_by_name(&self, name: &str) -> Option<&Participant> {
        let name = name.trim();
        self.participants.iter().find(|p| p.name == name)
    }

    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Adds a participant under a trimmed, non-empty name.
    pub fn add_participant(&mut self, name: &str) -> Result<ParticipantId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TripError::ValidationError(
                "Participant name must not be empty".to_string(),
            ));
        }
        if self.participants.len() >= self.config.max_participants {
            return Err(TripError::ParticipantLimit(self.config.max_participants));
        }

        let participant = Participant::new(name);
        let id = participant.id;
        info!(participant = %id, name, "participant added");
        self.participants.push(participant);
        Ok(id)
    }

    /// Removes a participant and every reference expenses hold to them.
    ///
    /// Expenses they paid for lose their payer; they leave every beneficiary
    /// set. The expenses themselves stay.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<Participant> {
        let idx = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| TripError::UnknownParticipant(id.to_string()))?;
        let participant = self.participants.remove(idx);

        for expense in &mut self.expenses {
            expense.forget(id);
        }

        info!(participant = %id, name = %participant.name, "participant removed");
        Ok(participant)
    }

    /// Adds an empty expense and returns its id.
    pub fn add_expense(&mut self) -> ExpenseId {
        let expense = Expense::new();
        let id = expense.id;
        self.expenses.push(expense);
        debug!(expense = %id, "expense added");
        id
    }

    pub fn update_expense(&mut self, id: ExpenseId, patch: ExpensePatch) -> Result<()> {
        if let Some(Some(payer)) = patch.paid_by {
            self.ensure_participant(payer)?;
        }
        if let Some(beneficiaries) = &patch.beneficiaries {
            for beneficiary in beneficiaries {
                self.ensure_participant(*beneficiary)?;
            }
        }

        let expense = self.expense_mut(id)?;
        patch.apply(expense);
        debug!(expense = %id, "expense updated");
        Ok(())
    }

    /// Flips a participant's membership in an expense's beneficiary set and
    /// returns the new membership.
    pub fn toggle_beneficiary(
        &mut self,
        expense_id: ExpenseId,
        participant_id: ParticipantId,
    ) -> Result<bool> {
        self.ensure_participant(participant_id)?;
        let expense = self.expense_mut(expense_id)?;
        Ok(expense.toggle_beneficiary(participant_id))
    }

    pub fn remove_expense(&mut self, id: ExpenseId) -> Result<Expense> {
        let idx = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or(TripError::UnknownExpense(id))?;
        debug!(expense = %id, "expense removed");
        Ok(self.expenses.remove(idx))
    }

    /// Sum of every expense, including ones that do not take part in
    /// settlement yet.
    pub fn total_expenses(&self) -> Amount {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn balances(&self) -> Balances {
        compute_balances(&self.expenses, &self.participants)
    }

    pub fn settlements(&self) -> Vec<Settlement> {
        settle_balances(&self.balances(), &self.participants)
    }

    pub fn report(&self) -> TripReport {
        let balances = self.balances();
        let settlements = settle_balances(&balances, &self.participants);

        let name_of = |id: ParticipantId| {
            self.participant(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| id.to_string())
        };

        TripReport {
            currency: self.config.currency.clone(),
            total: self.total_expenses(),
            balances: self
                .participants
                .iter()
                .map(|p| BalanceLine {
                    participant: p.id,
                    name: p.name.clone(),
                    balance: balances.get(&p.id).copied().unwrap_or_default().rounded(),
                })
                .collect(),
            settlements: settlements
                .into_iter()
                .map(|s| SettlementLine {
                    from: s.from,
                    from_name: name_of(s.from),
                    to: s.to,
                    to_name: name_of(s.to),
                    amount: s.amount,
                })
                .collect(),
        }
    }

    fn ensure_participant(&self, id: ParticipantId) -> Result<()> {
        match self.participant(id) {
            Some(_) => Ok(()),
            None => Err(TripError::UnknownParticipant(id.to_string())),
        }
    }

    fn expense_mut(&mut self, id: ExpenseId) -> Result<&mut Expense> {
        self.expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(TripError::UnknownExpense(id))
    }
}
