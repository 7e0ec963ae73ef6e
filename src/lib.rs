//! Gym machine plate weight calculator.
//!
//! Loads a catalog of weight-stack machines, derives the weight of a single
//! plate on each machine, and keeps plate count and total weight consistent
//! while the user edits either one. The Yew front end lives in the binary;
//! this library holds the engine plus a few `wasm_bindgen` exports for plain
//! JavaScript pages.

use log::error;
use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod config;
pub mod conversion;
pub mod debounce;
pub mod logging;
pub mod selection;
pub mod session;
pub mod table;
pub mod utils;

pub use catalog::{Catalog, LoadError, MachineRecord, Series};
pub use session::{Session, SessionAction};
pub use table::RowViewModel;

/// Plate weight for a single machine record passed from JavaScript.
///
/// Returns `undefined` when the record has no stack weight or cannot be read.
#[wasm_bindgen(js_name = plateWeight)]
pub fn plate_weight(record_js: JsValue) -> Option<f64> {
    match serde_wasm_bindgen::from_value::<MachineRecord>(record_js) {
        Ok(record) => conversion::plate_weight_of(&record),
        Err(e) => {
            error!("Failed to deserialize machine record: {}", e);
            None
        }
    }
}

/// Filtered, sorted table rows for a catalog passed from JavaScript.
///
/// An unreadable catalog is logged and yields an empty array.
#[wasm_bindgen(js_name = machineTable)]
pub fn machine_table(catalog_js: JsValue, search: Option<String>) -> JsValue {
    let catalog = match serde_wasm_bindgen::from_value::<Catalog>(catalog_js) {
        Ok(c) => Some(c),
        Err(e) => {
            error!("Failed to deserialize catalog: {}", e);
            None
        }
    };
    let rows = table::render(catalog.as_ref(), search.as_deref());
    serde_wasm_bindgen::to_value(&rows).unwrap_or(JsValue::NULL)
}

/// Display glyph for a series name, or the name itself when it has none.
#[wasm_bindgen(js_name = seriesGlyph)]
pub fn series_glyph(series_name: &str) -> String {
    table::series_glyph(series_name)
}
