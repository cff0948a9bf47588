//! # PropertyData SDK
//!
//! Thin async client for the PropertyData REST API
//! (`https://api.propertydata.co.uk`).
//!
//! ```rust,no_run
//! use propertydata_sdk::{PropertyDataClient, SdkResult};
//! use propertydata_core::QueryParams;
//!
//! # async fn example() -> SdkResult<()> {
//! let client = PropertyDataClient::builder()
//!     .api_key("your-api-key")
//!     .build()?;
//!
//! let mut params = QueryParams::new();
//! params.push("postcode", "W14 9JH");
//! let result = client.get("/prices", &params).await?;
//! println!("{:?}", result);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{PropertyDataClient, PropertyDataClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{SdkError, SdkResult};
