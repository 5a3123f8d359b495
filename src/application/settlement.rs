use super::balances::{Balances, compute_balances};
use crate::domain::expense::Expense;
use crate::domain::money::{Balance, EPSILON};
use crate::domain::participant::{Participant, ParticipantId};
use crate::domain::settlement::Settlement;
use tracing::debug;

/// Computes balances for the given expenses and settles them.
pub fn compute_settlements(expenses: &[Expense], participants: &[Participant]) -> Vec<Settlement> {
    let balances = compute_balances(expenses, participants);
    settle_balances(&balances, participants)
}

/// Greedily matches debtors against creditors until one side runs out.
///
/// Debtors are ordered by how much they owe and creditors by how much they are
/// owed, largest first; ties keep the order of `participants`. Each step moves
/// `min(owed, due)` between the current pair, emits it rounded to cents when
/// it exceeds one cent, and advances whichever cursor has been brought within
/// one cent of zero. Participants already within one cent of zero take no
/// part.
///
/// This bounds the result to `debtors + creditors - 1` transfers. It is not a
/// minimum-transfer solution.
pub fn settle_balances(balances: &Balances, participants: &[Participant]) -> Vec<Settlement> {
    let position = |p: &Participant| balances.get(&p.id).copied().unwrap_or(Balance::ZERO);

    let mut debtors: Vec<(ParticipantId, Balance)> = participants
        .iter()
        .map(|p| (p.id, position(p)))
        .filter(|(_, balance)| balance.is_debt())
        .collect();
    debtors.sort_by(|a, b| a.1.cmp(&b.1));

    let mut creditors: Vec<(ParticipantId, Balance)> = participants
        .iter()
        .map(|p| (p.id, position(p)))
        .filter(|(_, balance)| balance.is_credit())
        .collect();
    creditors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut settlements = Vec::new();
    let mut debtor_idx = 0;
    let mut creditor_idx = 0;

    while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
        let (debtor, owed) = debtors[debtor_idx];
        let (creditor, due) = creditors[creditor_idx];

        let transfer = owed.abs().min(due);

        if transfer.value() > EPSILON {
            settlements.push(Settlement {
                from: debtor,
                to: creditor,
                amount: transfer.magnitude().rounded(),
            });
        }

        debtors[debtor_idx].1 += transfer;
        creditors[creditor_idx].1 -= transfer;

        if debtors[debtor_idx].1.is_settled() {
            debtor_idx += 1;
        }
        if creditors[creditor_idx].1.is_settled() {
            creditor_idx += 1;
        }
    }

    debug!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        settlements = settlements.len(),
        "settled balances"
    );
    settlements
}
