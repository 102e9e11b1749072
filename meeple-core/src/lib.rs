pub mod config;
pub mod error;
pub mod extract;
pub mod layers;
pub mod params;
pub mod server;
pub mod validation;

pub use config::{ConfigError, ConfigSection, ConfigValue, FromConfigValue, MeepleConfig, ServerConfig};
pub use error::{error_response, route_not_found, ApiError, ApiResult};
pub use extract::{JsonBody, NumericId, OptionalJsonBody};
pub use layers::{catch_panic_layer, default_cors, default_trace, init_tracing};
pub use params::{parse_id, parse_query_string, QueryParams};
pub use server::serve;
pub use validation::{require_fields, Validate};
