//! Browser tests for the timer-backed debouncer, the JS exports and the
//! `localeCompare` ordering. Run with `wasm-pack test --headless`.
#![cfg(target_arch = "wasm32")]

use drax_calculator::catalog::parse_catalog;
use drax_calculator::debounce::{Debouncer, GlooScheduler};
use drax_calculator::table::locale_cmp;
use drax_calculator::{machine_table, plate_weight, series_glyph, MachineRecord};
use gloo_timers::future::TimeoutFuture;
use std::cmp::Ordering;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn debouncer_delivers_last_value_after_idle() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut debouncer = Debouncer::new(GlooScheduler, 30, move |v: String| {
        sink.borrow_mut().push(v)
    });

    debouncer.input("p".to_string());
    debouncer.input("pr".to_string());
    debouncer.input("press".to_string());
    assert!(debouncer.is_loading());

    TimeoutFuture::new(100).await;
    assert_eq!(*seen.borrow(), vec!["press".to_string()]);
    assert!(!debouncer.is_loading());
}

#[wasm_bindgen_test]
async fn dropping_debouncer_cancels_delivery() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut debouncer = Debouncer::new(GlooScheduler, 30, move |v: u32| {
        sink.borrow_mut().push(v)
    });
    debouncer.input(7);
    drop(debouncer);

    TimeoutFuture::new(100).await;
    assert!(seen.borrow().is_empty());
}

const CATALOG: &str = r#"{ "series": [
    { "seriesName": "Infinity", "machines": [
        { "machineName": "Leg Press", "totalStackWeight": 150, "numOfPlates": 15 },
        { "machineName": "Lat Pulldown", "totalStackWeight": 100, "numOfPlates": 20 }
    ]},
    { "seriesName": "Alpha", "machines": [
        { "machineName": "Lateral Raise", "totalStackWeight": 60, "numOfPlates": 12, "pulleyRatio": 2 }
    ]}
]}"#;

#[wasm_bindgen_test]
fn machine_table_export_filters_and_labels_rows() {
    let catalog = parse_catalog(CATALOG).unwrap();
    let catalog_js = serde_wasm_bindgen::to_value(&catalog).unwrap();

    let rows = machine_table(catalog_js, Some("lat".to_string()));
    let rows: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(rows).unwrap();

    let summary: Vec<(&str, &str, &str)> = rows
        .iter()
        .map(|r| {
            (
                r["seriesGlyph"].as_str().unwrap(),
                r["machineName"].as_str().unwrap(),
                r["plateWeightLabel"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![("∞", "Lat Pulldown", "5kg"), ("α", "Lateral Raise", "2.5kg")]
    );
    assert!(rows[0].get("record").is_none());
}

#[wasm_bindgen_test]
fn machine_table_export_with_unreadable_catalog_is_empty() {
    let rows = machine_table(wasm_bindgen::JsValue::from_str("not a catalog"), None);
    let rows: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(rows).unwrap();
    assert!(rows.is_empty());
}

#[wasm_bindgen_test]
fn plate_weight_export_reads_js_record() {
    let mut record = MachineRecord::new("Cable Crossover", 180.0);
    record.num_of_stacks = Some(2.0);
    record.num_of_plates = Some(18.0);
    record.pulley_ratio = Some(2.0);
    let record_js = serde_wasm_bindgen::to_value(&record).unwrap();
    assert_eq!(plate_weight(record_js), Some(2.5));

    let nameless = serde_wasm_bindgen::to_value(&MachineRecord::default()).unwrap();
    assert_eq!(plate_weight(nameless), None);
}

#[wasm_bindgen_test]
fn series_glyph_export_maps_known_series() {
    assert_eq!(series_glyph("Infinity"), "∞");
    assert_eq!(series_glyph("Alpha"), "α");
    assert_eq!(series_glyph("Beta"), "Beta");
}

#[wasm_bindgen_test]
fn locale_cmp_uses_browser_collation() {
    assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
    assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
    assert_eq!(locale_cmp("Leg Press", "Leg Press"), Ordering::Equal);
}
