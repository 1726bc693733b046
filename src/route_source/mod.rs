mod file;
mod http;
mod source;

pub use file::FileRouteSource;
pub use http::HttpRouteSource;
pub use source::{RouteLoadError, RouteSource, from_config};
