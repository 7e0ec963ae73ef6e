//! Machine catalog model and loading.
//!
//! The catalog is a read-only JSON document fetched once per session:
//!
//! ```json
//! { "series": [ { "seriesName": "Infinity", "machines": [ { "machineName": "Leg Press", "totalStackWeight": 100 } ] } ] }
//! ```
//!
//! Fetching goes through the [`CatalogSource`] seam so the browser transport
//! can be swapped for in-memory text in tests.

use futures::future::LocalBoxFuture;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Treat `None`, zero and NaN as absent.
pub(crate) fn truthy(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_stack_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_of_stacks: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_of_plates: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulley_ratio: Option<f64>,
}

impl MachineRecord {
    pub fn new(machine_name: &str, total_stack_weight: f64) -> Self {
        Self {
            machine_name: Some(machine_name.to_string()),
            total_stack_weight: Some(total_stack_weight),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.machine_name.as_deref()
    }

    /// Stack weight, or `None` when it is absent or zero.
    pub fn stack_weight(&self) -> Option<f64> {
        truthy(self.total_stack_weight)
    }

    // A zero divisor counts as absent and falls back to 1.
    pub fn stacks(&self) -> f64 {
        truthy(self.num_of_stacks).unwrap_or(1.0)
    }

    pub fn plates(&self) -> f64 {
        truthy(self.num_of_plates).unwrap_or(1.0)
    }

    pub fn pulley(&self) -> f64 {
        truthy(self.pulley_ratio).unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub series_name: String,
    pub machines: Vec<MachineRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub series: Vec<Series>,
}

impl Catalog {
    /// All machines across all series, in catalog order, tagged with their series name.
    pub fn machines(&self) -> impl Iterator<Item = (&str, &MachineRecord)> {
        self.series.iter().flat_map(|s| {
            s.machines
                .iter()
                .map(move |m| (s.series_name.as_str(), m))
        })
    }

    pub fn machine_count(&self) -> usize {
        self.series.iter().map(|s| s.machines.len()).sum()
    }
}

// Custom error type for catalog loading
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    Transport(String),
    Status(u16),
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(msg) => write!(f, "Failed to fetch machine catalog: {}", msg),
            LoadError::Status(code) => {
                write!(f, "Machine catalog request failed with HTTP status {}", code)
            }
            LoadError::Parse(msg) => write!(f, "Machine catalog is not valid: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Somewhere a catalog document can be fetched from.
pub trait CatalogSource {
    fn fetch(&self) -> LocalBoxFuture<'_, Result<String, LoadError>>;
}

/// Fetches the catalog over HTTP with the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    pub url: String,
}

impl HttpCatalogSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self) -> LocalBoxFuture<'_, Result<String, LoadError>> {
        Box::pin(async move {
            let window = gloo_utils::window();
            let resp_value = JsFuture::from(window.fetch_with_str(&self.url))
                .await
                .map_err(|e| LoadError::Transport(js_error_message(&e)))?;
            let resp: Response = resp_value
                .dyn_into()
                .map_err(|e| LoadError::Transport(js_error_message(&e)))?;

            if !resp.ok() {
                return Err(LoadError::Status(resp.status()));
            }

            let text_promise = resp
                .text()
                .map_err(|e| LoadError::Transport(js_error_message(&e)))?;
            let text = JsFuture::from(text_promise)
                .await
                .map_err(|e| LoadError::Transport(js_error_message(&e)))?;
            text.as_string()
                .ok_or_else(|| LoadError::Transport("response body is not text".to_string()))
        })
    }
}

/// Serves a catalog document held in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    body: Result<String, LoadError>,
}

impl StaticCatalogSource {
    pub fn new(body: &str) -> Self {
        Self {
            body: Ok(body.to_string()),
        }
    }

    /// A source whose fetch always fails with `err`.
    pub fn failing(err: LoadError) -> Self {
        Self { body: Err(err) }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn fetch(&self) -> LocalBoxFuture<'_, Result<String, LoadError>> {
        let body = self.body.clone();
        Box::pin(async move { body })
    }
}

pub fn parse_catalog(text: &str) -> Result<Catalog, LoadError> {
    let catalog: Catalog = serde_json::from_str(text)?;
    debug!(
        "Parsed catalog: {} series, {} machines",
        catalog.series.len(),
        catalog.machine_count()
    );
    Ok(catalog)
}

/// Fetch and parse the catalog from `source`. No retries.
pub async fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Catalog, LoadError> {
    let text = source.fetch().await?;
    let catalog = parse_catalog(&text)?;
    info!(
        "Loaded machine catalog with {} series and {} machines",
        catalog.series.len(),
        catalog.machine_count()
    );
    Ok(catalog)
}
