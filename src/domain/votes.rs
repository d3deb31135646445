use std::collections::HashMap;

/// Vote counts reported by one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTuple {
    pub republican: u64,
    pub democrat: u64,
    pub other: u64,
}

impl VoteTuple {
    /// The substitute for regions that report no votes at all
    pub const ZERO: VoteTuple = VoteTuple {
        republican: 0,
        democrat: 0,
        other: 0,
    };

    pub fn new(republican: u64, democrat: u64, other: u64) -> Self {
        Self {
            republican,
            democrat,
            other,
        }
    }

    pub fn total(&self) -> u64 {
        self.republican + self.democrat + self.other
    }
}

/// Vote counts keyed by region name.
///
/// Keys are exact strings from the results file: no trimming, no case
/// folding. A geography name must match byte-for-byte to find its row.
pub type VoteResults = HashMap<String, VoteTuple>;
