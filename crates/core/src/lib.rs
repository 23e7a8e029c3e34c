//! Entity models and record mapping for the Konbini ShotGrid wrapper.
//!
//! Records coming back from ShotGrid are plain JSON objects. Every model in
//! [`models`] carries a static [`schema::EntitySchema`] that the [`mapper`]
//! uses to decode records into typed values and to encode them again as
//! sparse write payloads.

pub mod dates;
pub mod error;
pub mod fields;
pub mod filters;
pub mod mapper;
pub mod models;
pub mod schema;
pub mod types;

pub use dates::{validate_sg_date_format, SgDate};
pub use error::{MapperError, MapperResult};
pub use filters::{BatchRequest, Direction, Filter, FilterOperator, Order};
pub use mapper::{decode, decode_value, encode, encode_full, link, SgModel};
pub use models::*;
pub use types::*;
