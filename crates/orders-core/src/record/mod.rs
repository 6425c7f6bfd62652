//! Raw export rows and the validated [`OrderRecord`] built from them.

mod category;
mod normalize;

use chrono::NaiveDate;
use rust_decimal::Decimal;

pub use category::Category;
pub use normalize::{
    IngestStats, MAX_AMOUNT_UNITS, NormalizedBatch, normalize_row, normalize_rows, parse_amount,
    parse_order_date,
};

/// One untyped line item as handed over by a file reader. Cells that were
/// absent in the source are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub order_date: Option<String>,
    pub product_name: Option<String>,
    pub total_owed: Option<String>,
    pub class_label: Option<String>,
}

impl RawRow {
    /// Row with every cell present.
    pub fn new(
        order_date: impl Into<String>,
        product_name: impl Into<String>,
        total_owed: impl Into<String>,
        class_label: impl Into<String>,
    ) -> Self {
        Self {
            order_date: Some(order_date.into()),
            product_name: Some(product_name.into()),
            total_owed: Some(total_owed.into()),
            class_label: Some(class_label.into()),
        }
    }
}

/// A normalized line item. Only the normalizer constructs these, so `amount`
/// is always a finite, non-negative decimal and `category` is always mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    order_date: NaiveDate,
    product_name: String,
    amount: Decimal,
    category: Category,
}

impl OrderRecord {
    pub(crate) fn new(
        order_date: NaiveDate,
        product_name: String,
        amount: Decimal,
        category: Category,
    ) -> Self {
        Self {
            order_date,
            product_name,
            amount,
            category,
        }
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
