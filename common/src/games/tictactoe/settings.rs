use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Alpha-beta cutoffs. Turning this off runs plain minimax with identical results.
    pub pruning: bool,
    /// Scale terminal scores by the remaining plies so faster wins and slower losses rank higher.
    pub depth_weighting: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            pruning: true,
            depth_weighting: false,
        }
    }
}
