//! WASM bindings for meeting-finder.
//!
//! Exposes slot search to JavaScript via `wasm-bindgen`. Input and output
//! cross the boundary as JSON strings in the same document shape the `meetq`
//! CLI reads: `{"events": [...], "request": {...}}`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-finder-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/meeting_finder_wasm.wasm
//! ```

use meeting_finder::QueryInput;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON-in, JSON-out cores (plain Rust, testable off-wasm)
// ---------------------------------------------------------------------------

fn slots_json(input_json: &str) -> Result<String, String> {
    let input = QueryInput::from_json(input_json).map_err(|e| e.to_string())?;
    serde_json::to_string(&input.resolve().slots)
        .map_err(|e| format!("Serialization error: {}", e))
}

fn resolution_json(input_json: &str) -> Result<String, String> {
    let input = QueryInput::from_json(input_json).map_err(|e| e.to_string())?;
    serde_json::to_string(&input.resolve()).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every free slot that fits a meeting request.
///
/// `input_json` is a query document with `events` and `request`. Returns a
/// JSON array of `{start, end, duration}` objects in minutes from midnight.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(input_json: &str) -> Result<String, JsValue> {
    slots_json(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Like `findMeetingTimes`, but returns `{phase, slots}` where `phase` is
/// `"all_attendees"` or `"required_only"` (optional attendees were dropped).
#[wasm_bindgen(js_name = "resolveMeeting")]
pub fn resolve_meeting(input_json: &str) -> Result<String, JsValue> {
    resolution_json(input_json).map_err(|e| JsValue::from_str(&e))
}
