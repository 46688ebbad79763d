//! JSON glue between JavaScript values and the core option types.
//!
//! The wasm layer stringifies whatever object it receives with `JSON.stringify`
//! and hands the text to these functions.

use juke_pager_core::{PagerEventType, PagerOptions, PagerOptionsPatch, PagerResult};

/// `JSON.stringify(undefined)` yields `undefined`, an absent argument reaches
/// us as an empty string.
fn is_absent(json: &str) -> bool {
    matches!(json.trim(), "" | "null" | "undefined")
}

/// Parse constructor options; an absent argument means all defaults.
pub fn parse_options(json: &str) -> PagerResult<PagerOptions> {
    if is_absent(json) {
        return Ok(PagerOptions::default());
    }
    PagerOptions::from_json(json)
}

/// Parse a `refresh` argument; an absent argument is an empty patch.
pub fn parse_patch(json: &str) -> PagerResult<PagerOptionsPatch> {
    if is_absent(json) {
        return Ok(PagerOptionsPatch::default());
    }
    PagerOptionsPatch::from_json(json)
}

/// Parse an event name passed to `on` / `off` / `once` / `trigger`.
pub fn parse_event_type(name: &str) -> PagerResult<PagerEventType> {
    name.trim().parse()
}
