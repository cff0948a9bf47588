//! Area report example.
//!
//! Pulls asking prices, rents and crime figures for one postcode.
//!
//! Run with: PROPERTYDATA_API_KEY=... cargo run --example area_report -- "W14 9JH"

use propertydata_core::{ApiResult, QueryParams};
use propertydata_sdk::{PropertyDataClient, SdkError, SdkResult};

#[tokio::main]
async fn main() -> SdkResult<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("PROPERTYDATA_API_KEY")
        .map_err(|_| SdkError::Config("PROPERTYDATA_API_KEY is not set".to_string()))?;
    let postcode = std::env::args().nth(1).unwrap_or_else(|| "W14 9JH".to_string());

    let client = PropertyDataClient::builder().api_key(api_key).build()?;

    let mut params = QueryParams::new();
    params.push("postcode", postcode.as_str());

    for path in ["/prices", "/rents", "/crime"] {
        println!("== {} {}", path, postcode);
        match client.get(path, &params).await? {
            ApiResult::Success(body) => println!("{}", serde_json::to_string_pretty(&body)?),
            ApiResult::Failure(message) => println!("failed: {}", message),
        }
    }

    Ok(())
}
