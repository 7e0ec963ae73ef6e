//! Calculator state for the currently selected machine.
//!
//! The plate weight is derived once from the selected machine. Plate count and
//! total weight are the two editable fields; editing one recomputes the other
//! through the plate weight and never touches the plate weight itself.

use crate::catalog::MachineRecord;
use crate::conversion::{plate_count_from_total, plate_weight_of, total_from_plate_count};
use log::{debug, warn};

/// The machine driving the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveMachine {
    pub record: MachineRecord,
    pub plate_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionContext {
    active: Option<ActiveMachine>,
    plate_count: Option<f64>,
    total_weight: Option<f64>,
}

impl SelectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `record` the calculator subject. Both editable fields are cleared.
    ///
    /// Records without a stack weight have no plate weight and are rejected;
    /// the table never offers them.
    pub fn select_machine(&mut self, record: &MachineRecord) -> bool {
        let Some(plate_weight) = plate_weight_of(record) else {
            warn!(
                "Ignoring selection of '{}': no total stack weight",
                record.name().unwrap_or_default()
            );
            return false;
        };
        debug!(
            "Selected '{}' with plate weight {}",
            record.name().unwrap_or_default(),
            plate_weight
        );
        self.active = Some(ActiveMachine {
            record: record.clone(),
            plate_weight,
        });
        self.plate_count = None;
        self.total_weight = None;
        true
    }

    pub fn clear(&mut self) {
        debug!("Cleared machine selection");
        self.active = None;
        self.plate_count = None;
        self.total_weight = None;
    }

    /// User typed a plate count. Updates the total weight.
    pub fn edit_plate_count(&mut self, plate_count: Option<f64>) {
        let Some(active) = &self.active else {
            warn!("Plate count edited with no machine selected");
            return;
        };
        self.plate_count = plate_count;
        self.total_weight = total_from_plate_count(active.plate_weight, plate_count);
    }

    /// User typed a total weight. Updates the plate count.
    pub fn edit_total_weight(&mut self, total_weight: Option<f64>) {
        let Some(active) = &self.active else {
            warn!("Total weight edited with no machine selected");
            return;
        };
        self.total_weight = total_weight;
        self.plate_count = plate_count_from_total(active.plate_weight, total_weight);
    }

    pub fn active_machine(&self) -> Option<&ActiveMachine> {
        self.active.as_ref()
    }

    pub fn plate_weight(&self) -> Option<f64> {
        self.active.as_ref().map(|a| a.plate_weight)
    }

    pub fn plate_count(&self) -> Option<f64> {
        self.plate_count
    }

    pub fn total_weight(&self) -> Option<f64> {
        self.total_weight
    }

    /// Plate count and total weight inputs are enabled only with a machine selected.
    pub fn is_editable(&self) -> bool {
        self.active.is_some()
    }

    pub fn can_clear(&self) -> bool {
        self.active.is_some()
    }

    pub fn machine_label(&self) -> Option<&str> {
        self.active.as_ref().and_then(|a| a.record.name())
    }
}
