mod dns_server_mock;
mod http_stub;

#[allow(unused_imports)]
pub use dns_server_mock::{MockDnsServer, MockMode};
#[allow(unused_imports)]
pub use http_stub::HttpStub;
