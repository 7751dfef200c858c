// Dictionary client: request encoding, the HTTP executor, and query outcomes

pub mod encode;
mod executor;
mod outcome;

pub use encode::percent_encode;
pub use executor::{QueryExecutor, SlangLookup, NETWORK_FAILURE_REASON};
pub use outcome::QueryOutcome;
