//! # Konbini
//!
//! Opinionated wrapper around the Autodesk ShotGrid (formerly Shotgun) API.
//!
//! Records come back as typed models from [`konbini_core`]; writes go out as
//! sparse payloads with nested entities reduced to `{"id", "type"}` links.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use konbini::{KonbiniClient, KonbiniResult};
//!
//! #[tokio::main]
//! async fn main() -> KonbiniResult<()> {
//!     // Missing values fall back to KONBINI_BASE_URL, KONBINI_SCRIPT_NAME
//!     // and KONBINI_API_KEY.
//!     let client = KonbiniClient::builder()
//!         .base_url("https://studio.shotgunstudio.com")
//!         .script_name("konbini")
//!         .build()?;
//!
//!     let users = client.humanusers().list_active(None).await?;
//!     println!("Found {} active users", users.len());
//!
//!     for booking in client.bookings().list_by_year(2024, None, None).await? {
//!         println!("{} -> {}", booking.start_date, booking.end_date);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Raw calls
//!
//! ```rust,no_run
//! use konbini::{Filter, KonbiniClient};
//!
//! # async fn example() -> konbini::KonbiniResult<()> {
//! let client = KonbiniClient::from_env()?;
//! let shots = client
//!     .sg()
//!     .find("Shot", &[Filter::is("code", "SH010")], &["code".to_string()], &[])
//!     .await?;
//! println!("{shots:?}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

// Re-export main client
pub use api::CreateOutcome;
pub use client::{KonbiniClient, KonbiniClientBuilder};
pub use config::{ClientConfig, RetryConfig};
pub use error::{KonbiniError, KonbiniResult};

// Re-export core types for convenience
pub use konbini_core::{
    // Mapping
    decode, encode, encode_full, link, MapperError, SgModel,
    // Queries
    BatchRequest, Direction, Filter, FilterOperator, Order,
    // Dates
    validate_sg_date_format, SgDate,
    // Models
    SgAsset, SgAttachment, SgBooking, SgFileLink, SgGenericEntity, SgHumanUser, SgNote,
    SgPipelineStep, SgPlaylist, SgProject, SgReply, SgShot, SgTask, SgTimeLog, SgVersion,
    // Wire types
    EntityType, HumanUserStatus, Record, StatusList,
};
pub use konbini_core::fields;
