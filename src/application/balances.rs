use crate::domain::expense::Expense;
use crate::domain::money::Balance;
use crate::domain::participant::{Participant, ParticipantId};
use std::collections::HashMap;
use tracing::debug;

/// Net position of every known participant, paid minus owed.
pub type Balances = HashMap<ParticipantId, Balance>;

/// Folds expenses into per-participant net balances.
///
/// Every participant starts at zero, so the result always has exactly one entry
/// per known participant. Expenses without beneficiaries are skipped. The
/// payer is credited the full amount and each beneficiary is debited an equal,
/// unrounded share. Ids that do not belong to a known participant (an unset
/// payer, someone who has left the trip) are ignored rather than reported.
pub fn compute_balances(expenses: &[Expense], participants: &[Participant]) -> Balances {
    let mut balances: Balances = participants
        .iter()
        .map(|p| (p.id, Balance::ZERO))
        .collect();

    for expense in expenses {
        let Some(share) = expense.amount.share(expense.beneficiaries.len()) else {
            continue;
        };

        if let Some(payer) = expense.paid_by
            && let Some(balance) = balances.get_mut(&payer)
        {
            *balance += expense.amount.into();
        }

        for beneficiary in &expense.beneficiaries {
            if let Some(balance) = balances.get_mut(beneficiary) {
                *balance -= share;
            }
        }
    }

    debug!(
        participants = participants.len(),
        expenses = expenses.len(),
        "computed balances"
    );
    balances
}
