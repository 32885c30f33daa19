use serde::Serialize;

use super::{
    category::Category,
    record::{sanitize_amount, CostRecord, RecordUpdate},
};
use crate::errors::EstimateError;

/// One [`CostRecord`] per [`Category`], all present from construction.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CostLedger {
    woodworking: CostRecord,
    laser: CostRecord,
    print3d: CostRecord,
}

impl CostLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, category: Category) -> &CostRecord {
        match category {
            Category::Woodworking => &self.woodworking,
            Category::Laser => &self.laser,
            Category::Print3d => &self.print3d,
        }
    }

    fn record_mut(&mut self, category: Category) -> &mut CostRecord {
        match category {
            Category::Woodworking => &mut self.woodworking,
            Category::Laser => &mut self.laser,
            Category::Print3d => &mut self.print3d,
        }
    }

    /// Looks a record up by its textual category key.
    pub fn record_by_key(&self, key: &str) -> Result<&CostRecord, EstimateError> {
        let category: Category = key.parse()?;
        Ok(self.record(category))
    }

    pub fn update_record(&mut self, category: Category, update: RecordUpdate) {
        update.apply_to(self.record_mut(category));
        tracing::debug!(%category, ?update, "record updated");
    }

    /// Adds tracked hours to the category. Negative or non-finite deltas add
    /// nothing.
    pub fn add_labor_hours(&mut self, category: Category, hours: f64) {
        let delta = sanitize_amount(hours);
        let record = self.record_mut(category);
        record.labor_hours += delta;
        tracing::debug!(%category, delta, total_hours = record.labor_hours, "labor hours added");
    }

    pub fn total(&self, category: Category) -> f64 {
        self.record(category).total()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CostRecord)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.record(category)))
    }

    /// Sum of every category's total.
    pub fn grand_total(&self) -> f64 {
        self.iter().map(|(_, record)| record.total()).sum()
    }
}
