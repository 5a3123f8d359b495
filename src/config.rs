/// Largest group the trip session accepts.
pub const DEFAULT_MAX_PARTICIPANTS: usize = 6;
pub const DEFAULT_CURRENCY: &str = "$";

/// Library-side settings for a trip session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripConfig {
    pub max_participants: usize,
    /// Symbol prepended to amounts in rendered reports.
    pub currency: String,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}
