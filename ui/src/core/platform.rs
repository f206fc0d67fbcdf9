//! Host page glue: reading the data the server embedded alongside the app.
//!
//! On the web the server renders `window.frontendData` (and optionally
//! `window.reportConfig`) into the page. Native builds read the same JSON
//! from `$SALESREPORT_PAGE_DIR/<name>.json`, which keeps `dx serve` usable
//! without a backend.

use serde_json::Value;
use tracing::warn;

use super::config::ReportConfig;
use super::error::ReportError;
use crate::report::Snapshot;

pub const SNAPSHOT_GLOBAL: &str = "frontendData";
pub const CONFIG_GLOBAL: &str = "reportConfig";

/// Load the embedded snapshot. Absence is reported, never panicked on.
pub fn load_snapshot() -> Result<Snapshot, ReportError> {
    let value = read_page_global(SNAPSHOT_GLOBAL)?.ok_or(ReportError::MissingSnapshot)?;
    Snapshot::from_value(value)
}

/// Page configuration, falling back to defaults on any problem.
pub fn load_config() -> ReportConfig {
    match read_page_global(CONFIG_GLOBAL) {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!(%err, "ignoring malformed report config");
            ReportConfig::default()
        }),
        Ok(None) => ReportConfig::default(),
        Err(err) => {
            warn!(%err, "report config unavailable; using defaults");
            ReportConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn read_page_global(name: &str) -> Result<Option<Value>, ReportError> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or_else(|| ReportError::Host("window unavailable".into()))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|_| ReportError::Host(format!("unable to read window.{name}")))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let json = js_sys::JSON::stringify(&value)
        .map_err(|_| ReportError::Host(format!("window.{name} is not serialisable")))?;
    let raw: String = json.into();
    Ok(Some(serde_json::from_str(&raw)?))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_page_global(name: &str) -> Result<Option<Value>, ReportError> {
    let Some(dir) = std::env::var_os("SALESREPORT_PAGE_DIR") else {
        return Ok(None);
    };
    let path = std::path::Path::new(&dir).join(format!("{name}.json"));
    match std::fs::read_to_string(&path) {
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ReportError::Host(format!("{}: {err}", path.display()))),
    }
}
