//! BACGuard MCP Server Implementation
//!
//! Implements the MCP server with all BACGuard tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::DrinkSelection;
use crate::tools::estimate::{self, EstimateRequest};
use crate::tools::status::StatusTracker;

/// BACGuard MCP Service
#[derive(Clone)]
pub struct BacService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<BacService>,
}

impl BacService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for BacService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetDrinkParams {
    /// Drink id from list_drinks (case-insensitive)
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DrinkSelectionParams {
    /// Drink id from list_drinks (e.g. "Soju")
    pub drink: String,
    /// Number of servings
    pub quantity: u32,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateBacParams {
    /// "male" or "female"
    pub gender: String,
    /// Body weight (must be greater than 0)
    pub body_weight: f64,
    /// Unit for body_weight: kg, g, or lb (default kg)
    #[serde(default = "default_weight_unit")]
    pub weight_unit: String,
    /// Drinks consumed
    #[serde(default)]
    pub drinks: Vec<DrinkSelectionParams>,
    /// Hours since drinking started
    pub elapsed_hours: Option<f64>,
    /// RFC 3339 timestamp of the first drink; used when elapsed_hours is omitted
    pub drinking_started_at: Option<String>,
}

fn default_weight_unit() -> String { "kg".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ClassifyBacParams {
    /// BAC in percent (e.g. 0.05)
    pub bac_percent: f64,
}

#[derive(Debug, Serialize)]
struct DrinkNotFound<'a> {
    error: &'static str,
    id: &'a str,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl BacService {
    // --- Status ---

    #[tool(description = "Get the current status of the BACGuard service including build info and process information")]
    async fn bac_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get step-by-step instructions for estimating blood alcohol. Call this before the first estimate in a session.")]
    fn bac_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::BAC_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(BAC_INSTRUCTIONS)]))
    }

    // --- Drink Catalog ---

    #[tool(description = "List all drinks in the catalog with serving volume, ABV, and grams of alcohol per serving")]
    fn list_drinks(&self) -> Result<CallToolResult, McpError> {
        to_json(&estimate::list_drinks())
    }

    #[tool(description = "Get one drink from the catalog by id")]
    fn get_drink(&self, Parameters(p): Parameters<GetDrinkParams>) -> Result<CallToolResult, McpError> {
        match estimate::get_drink(&p.id) {
            Some(drink) => to_json(&drink),
            None => to_json(&DrinkNotFound { error: "Drink not found", id: &p.id }),
        }
    }

    // --- Estimation ---

    #[tool(description = "Estimate blood alcohol concentration (BAC %) and risk tier (safe/caution/danger) from gender, body weight, drinks, and time since drinking started. Advisory only.")]
    fn estimate_bac(&self, Parameters(p): Parameters<EstimateBacParams>) -> Result<CallToolResult, McpError> {
        let request = EstimateRequest {
            gender: p.gender,
            body_weight: p.body_weight,
            weight_unit: p.weight_unit,
            drinks: p.drinks.into_iter().map(|d| DrinkSelection::new(d.drink, d.quantity)).collect(),
            elapsed_hours: p.elapsed_hours,
            drinking_started_at: p.drinking_started_at,
        };
        let result = estimate::estimate_bac(request).map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Classify a known BAC percentage into a risk tier with advisory text and hours until safe/sober")]
    fn classify_bac(&self, Parameters(p): Parameters<ClassifyBacParams>) -> Result<CallToolResult, McpError> {
        let result = estimate::classify_bac(p.bac_percent).map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

#[tool_handler]
impl ServerHandler for BacService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bacguard".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("BACGuard".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "BACGuard - advisory blood alcohol estimation to discourage drunk driving. \
                 Call bac_instructions first. \
                 Catalog: list_drinks/get_drink. \
                 Estimate: estimate_bac (gender, body_weight, drinks, elapsed_hours or drinking_started_at). \
                 Classify a known value: classify_bac. \
                 For caution or danger results, always suggest a designated driver or taxi."
                    .into(),
            ),
        }
    }
}
