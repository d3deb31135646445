pub mod region;
pub mod votes;

pub use region::Region;
pub use votes::{VoteResults, VoteTuple};
