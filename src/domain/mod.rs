pub mod models;
pub mod tally;

pub use models::*;
pub use tally::{MatchTally, fold_tallies, resolve_participation, tally_match};
