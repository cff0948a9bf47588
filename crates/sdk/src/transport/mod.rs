//! Transport layer for the PropertyData SDK.

pub mod http;

pub use http::HttpTransport;
