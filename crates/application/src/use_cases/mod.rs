pub mod probe;
pub mod rank_nameservers;
pub mod write_results;

pub use probe::{PendingProbes, ProbeEngine, ResultAggregator};
pub use rank_nameservers::RankNameserversUseCase;
pub use write_results::WriteResultsUseCase;
