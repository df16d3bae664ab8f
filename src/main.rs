//! BACGuard
//!
//! An MCP server for advisory blood alcohol estimation.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use bacguard::build_info;
use bacguard::mcp::BacService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they don't interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bacguard=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = BacService::new();
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    tracing::info!("MCP server ready");

    server.waiting().await?;

    Ok(())
}
