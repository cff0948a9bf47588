mod property;
mod registry;

pub use property::{property_registry, PropertyDataTool};
pub use registry::{descriptor_schema, json_schema_object, json_schema_param, Tool, ToolRegistry};
