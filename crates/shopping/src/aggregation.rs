use indexmap::IndexMap;
use serde::Serialize;

use crate::{LineItem, RawLineItem, ShoppingListError};

/// Aggregated ingredient as printed on the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedEntry {
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub total_quantity: i64,
}

impl AggregatedEntry {
    /// Formats the entry as a numbered shopping list line, e.g. `2. Salt - 10, g`
    pub fn to_line(&self, number: usize) -> String {
        format!(
            "{}. {} - {}, {}",
            number, self.ingredient_name, self.total_quantity, self.measurement_unit
        )
    }
}

impl From<LineItem> for AggregatedEntry {
    fn from(item: LineItem) -> Self {
        Self {
            ingredient_name: item.ingredient_name,
            measurement_unit: item.measurement_unit,
            total_quantity: item.quantity,
        }
    }
}

/// Ingredients keyed by name, iterated in order of first appearance
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    entries: IndexMap<String, AggregatedEntry>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, ingredient_name: &str) -> Option<&AggregatedEntry> {
        self.entries.get(ingredient_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AggregatedEntry> {
        self.entries.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Inserts the item unless an entry with the same name already exists.
    ///
    /// Returns `false` when the item was dropped. Quantities are never summed
    /// here and the unit of the first item wins.
    pub fn insert(&mut self, item: LineItem) -> bool {
        if let Some(existing) = self.entries.get(&item.ingredient_name) {
            tracing::debug!(
                ingredient = %item.ingredient_name,
                kept_quantity = existing.total_quantity,
                kept_unit = %existing.measurement_unit,
                dropped_quantity = item.quantity,
                dropped_unit = %item.measurement_unit,
                "duplicate ingredient dropped, first occurrence wins"
            );
            return false;
        }

        self.entries
            .insert(item.ingredient_name.clone(), AggregatedEntry::from(item));

        true
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a AggregatedEntry;
    type IntoIter = indexmap::map::Values<'a, String, AggregatedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<LineItem> for ShoppingList {
    fn from_iter<T: IntoIterator<Item = LineItem>>(iter: T) -> Self {
        let mut list = ShoppingList::new();
        for item in iter {
            list.insert(item);
        }
        list
    }
}

/// Collapses line items into one entry per ingredient name.
///
/// Callers are expected to hand over quantities already summed per
/// ingredient. When a name shows up more than once anyway, only the first
/// occurrence is kept (quantity and unit alike).
pub fn aggregate<I>(items: I) -> ShoppingList
where
    I: IntoIterator<Item = LineItem>,
{
    items.into_iter().collect()
}

/// Validates raw storage records and aggregates them.
///
/// A single malformed record rejects the whole batch.
pub fn aggregate_records<I>(records: I) -> Result<ShoppingList, ShoppingListError>
where
    I: IntoIterator<Item = RawLineItem>,
{
    let items = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(aggregate(items))
}
