pub mod json_resolver;
pub mod transport;

pub use json_resolver::{build_query_url, parse_resolution, JsonDohResolver};
pub use transport::https::build_http_client;
