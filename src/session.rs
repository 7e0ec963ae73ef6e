//! Per-page session state.
//!
//! Owns the loaded catalog, the search filter and the calculator selection.
//! The UI renders a projection of this and feeds user actions back in as
//! [`SessionAction`]s.

use crate::catalog::{Catalog, LoadError, MachineRecord};
use crate::selection::SelectionContext;
use crate::table::{render, FilterState, RowViewModel};
use crate::utils::parse_field;
use log::error;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    catalog: Option<Rc<Catalog>>,
    load_error: Option<LoadError>,
    filter: FilterState,
    selection: SelectionContext,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of the startup fetch. A failure leaves the catalog unset.
    pub fn on_loaded(&mut self, result: Result<Catalog, LoadError>) {
        match result {
            Ok(catalog) => {
                self.catalog = Some(Rc::new(catalog));
                self.load_error = None;
            }
            Err(err) => {
                error!("{}", err);
                self.catalog = None;
                self.load_error = Some(err);
            }
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_deref()
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    /// Table rows for the current filter. Reports an error when called
    /// before a catalog has loaded.
    pub fn rows(&self) -> Vec<RowViewModel> {
        render(self.catalog.as_deref(), self.filter.term())
    }

    /// Table rows for the page. Empty while the fetch is in flight or after it
    /// failed; the failure itself is reported once by [`Session::on_loaded`].
    pub fn table_rows(&self) -> Rc<Vec<RowViewModel>> {
        if self.is_loaded() {
            Rc::new(self.rows())
        } else {
            Rc::new(Vec::new())
        }
    }

    pub fn search(&mut self, term: &str) {
        self.filter.set(term);
    }

    pub fn clear_search(&mut self) {
        self.filter.clear();
    }

    pub fn search_term(&self) -> Option<&str> {
        self.filter.term()
    }

    pub fn select_machine(&mut self, record: &MachineRecord) {
        self.selection.select_machine(record);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Raw plate count text from the input field.
    pub fn edit_plate_count(&mut self, text: &str) {
        self.selection.edit_plate_count(parse_field(text));
    }

    /// Raw total weight text from the input field.
    pub fn edit_total_weight(&mut self, text: &str) {
        self.selection.edit_total_weight(parse_field(text));
    }

    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }
}

/// User and loader events that change the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Loaded(Result<Catalog, LoadError>),
    Search(String),
    ClearSearch,
    Select(MachineRecord),
    ClearSelection,
    EditPlateCount(String),
    EditTotalWeight(String),
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Loaded(result) => next.on_loaded(result),
            SessionAction::Search(term) => next.search(&term),
            SessionAction::ClearSearch => next.clear_search(),
            SessionAction::Select(record) => next.select_machine(&record),
            SessionAction::ClearSelection => next.clear_selection(),
            SessionAction::EditPlateCount(text) => next.edit_plate_count(&text),
            SessionAction::EditTotalWeight(text) => next.edit_total_weight(&text),
        }
        Rc::new(next)
    }
}
