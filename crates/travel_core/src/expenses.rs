//! Expense tracker: an insertion-ordered list of line items with a derived total.
//!
//! Validation happens once, in `add`. Everything else trusts the list.

use crate::error::ExpenseError;
use crate::storage::DownloadSink;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info, warn};

pub const RESET_CONFIRM_MESSAGE: &str = "Clear all expenses?";
pub const CURRENCY_SYMBOL: &str = "₹";

/// One line item. Serialized as `{"item": ..., "amt": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub item: String,
    #[serde(rename = "amt", serialize_with = "serialize_amount")]
    pub amount: f64,
}

/// Whole amounts go out as JSON integers (`250`, not `250.0`).
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if amount.fract() == 0.0 && amount.abs() < MAX_EXACT {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

/// Result of a successful `add`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Added {
    pub index: usize,
    /// True only for the first successful add of this tracker.
    pub celebrate: bool,
}

/// A rendered export, ready for a download sink.
#[derive(Clone, Debug, PartialEq)]
pub struct TripExport {
    pub filename: String,
    pub json: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseTracker {
    records: Vec<ExpenseRecord>,
    celebrated: bool,
}

impl ExpenseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: &str, amount_text: &str) -> Result<Added, ExpenseError> {
        let item = item.trim();
        if item.is_empty() {
            return Err(ExpenseError::EmptyItem);
        }
        let amount = parse_amount(amount_text)?;

        self.records.push(ExpenseRecord {
            item: item.to_string(),
            amount,
        });
        let index = self.records.len() - 1;
        let celebrate = !self.celebrated;
        self.celebrated = true;
        debug!(item, amount, index, "expense added");
        Ok(Added { index, celebrate })
    }

    /// Remove the record at `index`. Out of range is a no-op.
    pub fn delete(&mut self, index: usize) -> Option<ExpenseRecord> {
        if index >= self.records.len() {
            warn!(index, len = self.records.len(), "delete index out of range, ignored");
            return None;
        }
        let removed = self.records.remove(index);
        debug!(index, item = %removed.item, "expense deleted");
        Some(removed)
    }

    /// Clear everything when `confirmed`. Returns whether the list was cleared.
    /// The first-add celebration is not re-armed.
    pub fn reset(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        let dropped = self.records.len();
        self.records.clear();
        info!(dropped, "expenses reset");
        true
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_celebrated(&self) -> bool {
        self.celebrated
    }

    /// Sum of all amounts; `0.0` (never `-0.0`) when the list is empty.
    pub fn total(&self) -> f64 {
        self.records.iter().fold(0.0, |acc, r| acc + r.amount)
    }

    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total())
    }

    pub fn export(&self, filename: &str) -> Result<TripExport, ExpenseError> {
        if self.records.is_empty() {
            return Err(ExpenseError::NothingToExport);
        }
        let json = serde_json::to_string_pretty(&self.records)?;
        Ok(TripExport {
            filename: filename.to_string(),
            json,
        })
    }

    pub fn save_to(&self, sink: &dyn DownloadSink, filename: &str) -> Result<TripExport, ExpenseError> {
        let export = self.export(filename)?;
        sink.offer(&export.filename, export.json.as_bytes())?;
        info!(filename = %export.filename, records = self.records.len(), "trip exported");
        Ok(export)
    }
}

fn parse_amount(text: &str) -> Result<f64, ExpenseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ExpenseError::MissingAmount);
    }
    let amount: f64 = text
        .parse()
        .map_err(|_| ExpenseError::InvalidAmount(text.to_string()))?;
    if !amount.is_finite() {
        return Err(ExpenseError::InvalidAmount(text.to_string()));
    }
    if amount <= 0.0 {
        return Err(ExpenseError::NonPositiveAmount(amount));
    }
    Ok(amount)
}

/// Per-line display, e.g. `₹120.50`.
pub fn format_amount(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

/// Read back an exported trip file.
pub fn parse_export(json: &str) -> Result<Vec<ExpenseRecord>, ExpenseError> {
    serde_json::from_str(json).map_err(ExpenseError::Parse)
}
