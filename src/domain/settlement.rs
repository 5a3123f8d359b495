use super::money::Amount;
use super::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// One recommended transfer from a debtor to a creditor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: ParticipantId,
    pub to: ParticipantId,
    /// Rounded to cents.
    pub amount: Amount,
}
