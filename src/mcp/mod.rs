pub mod dto;
pub mod handler;
pub mod registry;
pub mod schema;
pub mod transport;

pub use dto::{McpError, McpRequest, McpResponse, Tool, ToolCall};
pub use registry::{ToolKind, ToolRegistry, ToolThunk};
pub use schema::{InputSchema, ParamKind, ParamSpec};
