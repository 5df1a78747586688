use serde::{Deserialize, Serialize};

use crate::ShoppingListError;

/// One ingredient quantity drawn from a recipe in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub quantity: i64,
}

impl LineItem {
    pub fn new(
        ingredient_name: impl Into<String>,
        measurement_unit: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            ingredient_name: ingredient_name.into(),
            measurement_unit: measurement_unit.into(),
            quantity,
        }
    }
}

/// Line item as it comes out of the storage query, before validation.
///
/// `total` is the quantity already summed per ingredient by the query.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RawLineItem {
    pub name: Option<String>,
    pub measurement_unit: Option<String>,
    pub total: Option<i64>,
}

impl RawLineItem {
    pub fn new(name: &str, measurement_unit: &str, total: i64) -> Self {
        Self {
            name: Some(name.to_owned()),
            measurement_unit: Some(measurement_unit.to_owned()),
            total: Some(total),
        }
    }

    /// Converts the record into a [`LineItem`].
    ///
    /// `index` is the record position in its batch and is only used to
    /// report which record broke the contract.
    pub fn validate(self, index: usize) -> Result<LineItem, ShoppingListError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ShoppingListError::MalformedLineItem { index, field: "name" }),
        };

        let Some(measurement_unit) = self.measurement_unit else {
            return Err(ShoppingListError::MalformedLineItem {
                index,
                field: "measurement unit",
            });
        };

        let Some(quantity) = self.total else {
            return Err(ShoppingListError::MalformedLineItem {
                index,
                field: "quantity",
            });
        };

        Ok(LineItem {
            ingredient_name: name,
            measurement_unit,
            quantity,
        })
    }
}
