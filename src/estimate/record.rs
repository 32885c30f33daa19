use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::errors::EstimateError;

/// Raw cost inputs for one category. The total is derived on demand and
/// never stored.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct CostRecord {
    pub material_cost: f64,
    pub labor_hours: f64,
    pub hourly_rate: f64,
}

impl CostRecord {
    pub fn labor_cost(&self) -> f64 {
        self.labor_hours * self.hourly_rate
    }

    pub fn total(&self) -> f64 {
        self.material_cost + self.labor_cost()
    }

    pub fn get(&self, field: CostField) -> f64 {
        match field {
            CostField::MaterialCost => self.material_cost,
            CostField::LaborHours => self.labor_hours,
            CostField::HourlyRate => self.hourly_rate,
        }
    }
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecordUpdate {
    pub material_cost: Option<f64>,
    pub labor_hours: Option<f64>,
    pub hourly_rate: Option<f64>,
}

impl RecordUpdate {
    pub fn field(field: CostField, value: f64) -> Self {
        let mut update = Self::default();
        match field {
            CostField::MaterialCost => update.material_cost = Some(value),
            CostField::LaborHours => update.labor_hours = Some(value),
            CostField::HourlyRate => update.hourly_rate = Some(value),
        }
        update
    }

    pub(crate) fn apply_to(self, record: &mut CostRecord) {
        if let Some(value) = self.material_cost {
            record.material_cost = sanitize_amount(value);
        }
        if let Some(value) = self.labor_hours {
            record.labor_hours = sanitize_amount(value);
        }
        if let Some(value) = self.hourly_rate {
            record.hourly_rate = sanitize_amount(value);
        }
    }
}

/// Editable fields of a [`CostRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostField {
    MaterialCost,
    LaborHours,
    HourlyRate,
}

impl CostField {
    pub const ALL: [CostField; 3] = [
        CostField::MaterialCost,
        CostField::LaborHours,
        CostField::HourlyRate,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CostField::MaterialCost => "materials",
            CostField::LaborHours => "hours",
            CostField::HourlyRate => "rate",
        }
    }
}

impl fmt::Display for CostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CostField {
    type Err = EstimateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "materials" | "material" | "material_cost" | "materiali" => {
                Ok(CostField::MaterialCost)
            }
            "hours" | "labor_hours" | "labour_hours" | "orelavoro" => Ok(CostField::LaborHours),
            "rate" | "hourly_rate" | "costoorario" => Ok(CostField::HourlyRate),
            _ => Err(EstimateError::InvalidField(input.trim().to_string())),
        }
    }
}

/// Clamps a numeric input to a usable amount: NaN, infinities and negatives
/// become 0.
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses user-entered text into an amount. Anything unparsable becomes 0.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) => sanitize_amount(value),
        Err(_) => {
            tracing::debug!(input = raw, "non-numeric amount coerced to 0");
            0.0
        }
    }
}
