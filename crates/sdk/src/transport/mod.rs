//! Transport layer for the Konbini client.

pub mod http;

pub use http::HttpTransport;
