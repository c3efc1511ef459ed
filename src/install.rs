//! Cursor install-config and deeplink generation.
//!
//! Produces the base64-encoded MCP server entry that Cursor's
//! `anysphere.cursor-deeplink` handler accepts, so users can register the
//! server with one click instead of editing settings by hand.

use base64::Engine;
use serde_json::{json, Value};

const DEEPLINK_BASE: &str = "cursor://anysphere.cursor-deeplink/mcp/install";

/// Build the MCP server entry Cursor expects: a stdio server launched via
/// `command`, with the API key passed through the environment.
pub fn install_config(command: &str, api_key: &str) -> Value {
    json!({
        "name": "orcho",
        "type": "stdio",
        "command": command,
        "args": [],
        "env": {
            "ORCHO_API_KEY": api_key,
        },
    })
}

/// Encode an install config into the Cursor deeplink URL.
pub fn deeplink(config: &Value) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(config.to_string());
    format!("{DEEPLINK_BASE}?name=orcho&config={encoded}")
}

/// Render the human-facing install blurb: raw base64 config, the deeplink,
/// and a ready-to-paste markdown link.
pub fn render_install_config(command: &str, api_key: &str) -> String {
    let config = install_config(command, api_key);
    let encoded = base64::engine::general_purpose::STANDARD.encode(config.to_string());
    let link = deeplink(&config);
    format!(
        "Base64 Config: {encoded}\n\nFull Deeplink: {link}\n\nMarkdown Link:\n\
         [Click here to automatically configure Cursor]({link})"
    )
}
