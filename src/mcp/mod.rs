pub mod protocol;
pub mod server;

pub use protocol::{CallToolResult, Content, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ServerInfo};
pub use server::MCPServer;
