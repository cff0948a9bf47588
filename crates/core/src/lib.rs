// Core types for the PropertyData MCP server: the tool catalog, argument
// mapping and the executor seam used by the dispatcher.

pub mod arguments;
pub mod catalog;
pub mod error;
pub mod executor;
pub mod types;

pub use arguments::map_arguments;
pub use catalog::{catalog, find};
pub use error::ArgumentError;
pub use executor::ApiExecutor;
pub use types::*;
