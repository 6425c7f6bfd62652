//! Record normalizer: raw text cells → typed [`OrderRecord`], or a [`RowRejection`].

use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use super::{Category, OrderRecord, RawRow};
use crate::error::{RejectionKind, RowRejection};

static DATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("date token pattern is valid"));

const CURRENCY_SYMBOLS: &[char] = &[
    '₹', '$', '€', '£', '¥', '₩', '₽', '₺', '₫', '₱', '₦', '¢',
];

/// Grouping separators besides whitespace, which is always dropped.
const GROUPING_SEPARATORS: &[char] = &[',', '\'', '_'];

/// Largest accepted line-item amount (10^15 currency units). With every
/// record at or below this, sums stay within `Decimal::MAX` for any batch
/// under ~7.9 * 10^13 rows, so aggregation never overflows.
pub const MAX_AMOUNT_UNITS: u64 = 1_000_000_000_000_000;

/// Parse amount text such as `₹1,200.00` into a non-negative decimal.
///
/// Currency symbols, grouping separators and whitespace are stripped first, so
/// `₹1,200.00`, `1200.00` and `$ 1,200.00` all parse to the same value.
/// Negative amounts and amounts above [`MAX_AMOUNT_UNITS`] are rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal, RowRejection> {
    let cleaned: String = raw
        .chars()
        .filter(|c| {
            !CURRENCY_SYMBOLS.contains(c) && !GROUPING_SEPARATORS.contains(c) && !c.is_whitespace()
        })
        .collect();
    if cleaned.is_empty() {
        return Err(RowRejection::malformed_amount(raw));
    }
    let amount = Decimal::from_str(&cleaned).map_err(|_| RowRejection::malformed_amount(raw))?;
    if amount.is_zero() {
        // Folds "-0" into plain zero.
        return Ok(Decimal::ZERO);
    }
    if amount.is_sign_negative() || amount > Decimal::from(MAX_AMOUNT_UNITS) {
        return Err(RowRejection::malformed_amount(raw));
    }
    Ok(amount)
}

/// Extract the leading `YYYY-MM-DD` token (anything after it, such as a
/// time of day, is ignored) and validate it as a calendar date.
pub fn parse_order_date(raw: &str) -> Result<NaiveDate, RowRejection> {
    let token = DATE_TOKEN
        .find(raw.trim_start())
        .ok_or_else(|| RowRejection::malformed_date(raw))?;
    NaiveDate::parse_from_str(token.as_str(), "%Y-%m-%d")
        .map_err(|_| RowRejection::malformed_date(raw))
}

/// Normalize one raw row. Checks run amount, date, category, product name;
/// the first failure is reported.
pub fn normalize_row(row: &RawRow) -> Result<OrderRecord, RowRejection> {
    let amount = parse_amount(row.total_owed.as_deref().unwrap_or_default())?;
    let order_date = parse_order_date(row.order_date.as_deref().unwrap_or_default())?;
    let code = row
        .class_label
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_uppercase();
    let category = Category::from_code(&code)?;
    let product_name = row
        .product_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| RowRejection::unparseable("missing product name"))?;
    Ok(OrderRecord::new(
        order_date,
        product_name.to_string(),
        amount,
        category,
    ))
}

/// Row counts for one normalization pass. Every rejected row lands in exactly
/// one rejection counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub rows_read: usize,
    pub rows_accepted: usize,
    pub malformed_amount: usize,
    pub malformed_date: usize,
    pub unknown_category: usize,
    pub unparseable: usize,
}

impl IngestStats {
    pub fn rows_rejected(&self) -> usize {
        self.malformed_amount + self.malformed_date + self.unknown_category + self.unparseable
    }

    fn record_rejection(&mut self, kind: RejectionKind) {
        match kind {
            RejectionKind::MalformedAmount => self.malformed_amount += 1,
            RejectionKind::MalformedDate => self.malformed_date += 1,
            RejectionKind::UnknownCategory => self.unknown_category += 1,
            RejectionKind::Unparseable => self.unparseable += 1,
        }
    }
}

/// Surviving records, in input order, plus the counts of what was dropped.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub records: Vec<OrderRecord>,
    pub stats: IngestStats,
}

/// Normalize a whole batch. Rejections are logged and counted, never fatal.
pub fn normalize_rows<I>(rows: I) -> NormalizedBatch
where
    I: IntoIterator<Item = RawRow>,
{
    let mut batch = NormalizedBatch::default();
    for (index, row) in rows.into_iter().enumerate() {
        batch.stats.rows_read += 1;
        match normalize_row(&row) {
            Ok(record) => {
                batch.stats.rows_accepted += 1;
                batch.records.push(record);
            }
            Err(rejection) => {
                debug!(row = index, reason = %rejection, "row rejected");
                batch.stats.record_rejection(rejection.kind());
            }
        }
    }
    info!(
        rows_read = batch.stats.rows_read,
        rows_accepted = batch.stats.rows_accepted,
        rows_rejected = batch.stats.rows_rejected(),
        "normalized order rows"
    );
    batch
}
