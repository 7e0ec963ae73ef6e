//! Filtered, sorted view of the machine catalog.

use crate::catalog::{Catalog, MachineRecord};
use crate::config::SERIES_GLYPHS;
use crate::conversion::plate_weight_of;
use crate::utils::plate_weight_label;
use log::{debug, error};
use serde::Serialize;
use std::cmp::Ordering;

/// Search box state. An empty string means no filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    term: String,
}

impl FilterState {
    pub fn set(&mut self, term: &str) {
        self.term = term.to_string();
    }

    pub fn clear(&mut self) {
        self.term.clear();
    }

    pub fn term(&self) -> Option<&str> {
        if self.term.is_empty() {
            None
        } else {
            Some(&self.term)
        }
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowViewModel {
    pub series_name: String,
    pub series_glyph: String,
    pub machine_name: String,
    pub plate_weight: f64,
    pub plate_weight_label: String,
    /// Payload handed back to the selection context when the row's button is pressed.
    #[serde(skip)]
    pub record: MachineRecord,
}

impl RowViewModel {
    pub fn select_label(&self) -> String {
        format!("Set plate weight calculator to {}", self.machine_name)
    }
}

/// Short glyph for a series name: `∞` for Infinity, `α` for Alpha,
/// otherwise the first character uppercased.
pub fn series_glyph(series_name: &str) -> String {
    if let Some((_, glyph)) = SERIES_GLYPHS.iter().find(|(name, _)| *name == series_name) {
        return glyph.to_string();
    }
    series_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

// Base letter for the common Latin-1 accented lowercase letters.
#[cfg(not(target_arch = "wasm32"))]
fn fold_char(c: char) -> char {
    match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lower(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Locale-aware ordering of display names, using the browser's `localeCompare`.
///
/// Names the collator considers equal fall back to code point order so the
/// order is total.
#[cfg(target_arch = "wasm32")]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
        .then_with(|| a.cmp(b))
}

/// Locale-style ordering of display names.
///
/// Compares letters ignoring accents and case first, then accents, then case
/// (lowercase first), and finally by code point so the order is total.
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    lower(a)
        .map(fold_char)
        .cmp(lower(b).map(fold_char))
        .then_with(|| lower(a).cmp(lower(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn matches_term(record: &MachineRecord, term: Option<&str>) -> bool {
    match term {
        None => true,
        Some(term) => record
            .name()
            .map(|name| name.to_lowercase().contains(&term.to_lowercase()))
            .unwrap_or(false),
    }
}

/// Sort named entries by name. Entries without a name keep their positions.
fn sort_by_name(entries: &mut [(&str, &MachineRecord)]) {
    let slots: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, (_, m))| m.name().is_some())
        .map(|(i, _)| i)
        .collect();
    let mut named: Vec<(&str, &MachineRecord)> = slots.iter().map(|&i| entries[i]).collect();
    named.sort_by(|(_, a), (_, b)| match (a.name(), b.name()) {
        (Some(a), Some(b)) => locale_cmp(a, b),
        _ => Ordering::Equal,
    });
    for (slot, entry) in slots.into_iter().zip(named) {
        entries[slot] = entry;
    }
}

/// Rows for the machine table.
///
/// Machines without a stack weight never appear. With a search term only
/// machines whose name contains it (case-insensitively) are kept. Rows are
/// sorted by machine name.
///
/// Without a loaded catalog this logs an error and returns no rows.
pub fn render(catalog: Option<&Catalog>, search_term: Option<&str>) -> Vec<RowViewModel> {
    let Some(catalog) = catalog else {
        error!("Machine catalog not loaded, cannot populate the plate weight table");
        return Vec::new();
    };
    let term = search_term.filter(|t| !t.is_empty());

    let mut entries: Vec<(&str, &MachineRecord)> = catalog
        .machines()
        .filter(|(_, m)| m.stack_weight().is_some())
        .filter(|(_, m)| matches_term(m, term))
        .collect();
    sort_by_name(&mut entries);

    let rows: Vec<RowViewModel> = entries
        .into_iter()
        .filter_map(|(series_name, record)| {
            let plate_weight = plate_weight_of(record)?;
            Some(RowViewModel {
                series_name: series_name.to_string(),
                series_glyph: series_glyph(series_name),
                machine_name: record.name().unwrap_or_default().to_string(),
                plate_weight,
                plate_weight_label: plate_weight_label(plate_weight),
                record: record.clone(),
            })
        })
        .collect();

    debug!(
        "Rendered {} of {} machines (search: {:?})",
        rows.len(),
        catalog.machine_count(),
        term
    );
    rows
}
