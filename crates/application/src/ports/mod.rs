mod candidate_source;
mod probe_transport;
mod result_writer;

pub use candidate_source::CandidateSource;
pub use probe_transport::{ProbeMeasurement, ProbeTransport};
pub use result_writer::ResultWriter;
