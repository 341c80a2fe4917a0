pub mod stats;

pub use stats::{RunOutcome, StatsReport, StatsRequest, StatsService};
