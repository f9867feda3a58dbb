//! Cart Lines

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single ingredient quantity contributed by one recipe in a shopping cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Ingredient name
    pub ingredient_name: String,

    /// Unit the amount is measured in
    pub measurement_unit: String,

    /// Quantity required by the recipe
    pub amount: Decimal,
}

impl CartLineItem {
    /// Creates a new cart line item.
    pub fn new(
        ingredient_name: impl Into<String>,
        measurement_unit: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            measurement_unit: measurement_unit.into(),
            amount,
        }
    }
}

/// Summed quantity for one ingredient and unit across the whole cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedLine {
    /// Ingredient name
    pub ingredient_name: String,

    /// Unit the total is measured in
    pub measurement_unit: String,

    /// Sum of every contributing amount
    pub total_amount: Decimal,
}

impl AggregatedLine {
    /// Creates a new aggregated line.
    pub fn new(
        ingredient_name: impl Into<String>,
        measurement_unit: impl Into<String>,
        total_amount: Decimal,
    ) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            measurement_unit: measurement_unit.into(),
            total_amount,
        }
    }

    /// Receipt text for this line at the given 1-based position.
    #[must_use]
    pub fn receipt_text(&self, position: usize) -> String {
        format!("{position}. {self}.")
    }
}

impl fmt::Display for AggregatedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} – {} {}",
            self.ingredient_name,
            self.total_amount.normalize(),
            self.measurement_unit
        )
    }
}
