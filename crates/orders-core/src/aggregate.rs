//! Aggregation passes over the normalized record set.
//!
//! Each pass is an independent pure reduction over `&[OrderRecord]`; none of
//! them can fail and all of them accept an empty slice. Ties are broken by an
//! explicit total order so results never depend on scan order:
//!
//! - busiest date: highest count, then earliest date;
//! - category totals: highest total, then category name ascending;
//! - top products: highest total, then product name ascending.
//!
//! Plain decimal addition is safe here: the normalizer caps each amount at
//! [`MAX_AMOUNT_UNITS`](crate::record::MAX_AMOUNT_UNITS).

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::record::{Category, OrderRecord};

/// Maximum number of ranked products kept per category.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Date with the most line items, and how many it had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusiestDate {
    pub date: NaiveDate,
    pub order_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRankingEntry {
    pub category: Category,
    pub product_name: String,
    pub total_amount: Decimal,
    pub most_recent_order_date: NaiveDate,
}

/// Spending for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub total_amount: Decimal,
}

impl MonthlyTotal {
    /// `YYYY-MM`.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

pub fn grand_total(records: &[OrderRecord]) -> Decimal {
    records.iter().map(OrderRecord::amount).sum()
}

/// `None` only for an empty record set.
pub fn busiest_date(records: &[OrderRecord]) -> Option<BusiestDate> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.order_date()).or_insert(0) += 1;
    }
    // Ascending date scan with a strict comparison keeps the earliest date on ties.
    let mut best: Option<BusiestDate> = None;
    for (date, count) in counts {
        if best.is_none_or(|b| count > b.order_count) {
            best = Some(BusiestDate {
                date,
                order_count: count,
            });
        }
    }
    best
}

pub fn category_totals(records: &[OrderRecord]) -> Vec<CategoryTotal> {
    let mut by_category: BTreeMap<Category, Decimal> = BTreeMap::new();
    for record in records {
        *by_category
            .entry(record.category())
            .or_insert(Decimal::ZERO) += record.amount();
    }
    let mut totals: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, total_amount)| CategoryTotal {
            category,
            total_amount,
        })
        .collect();
    totals.sort_by(|a, b| {
        b.total_amount
            .cmp(&a.total_amount)
            .then_with(|| a.category.name().cmp(b.category.name()))
    });
    totals
}

/// Per category: products grouped by name with summed amount and latest
/// order date, ranked and cut to [`TOP_PRODUCTS_LIMIT`]. Only categories with
/// at least one record get a key.
pub fn top_products(records: &[OrderRecord]) -> BTreeMap<Category, Vec<ProductRankingEntry>> {
    let mut grouped: BTreeMap<Category, HashMap<&str, (Decimal, NaiveDate)>> = BTreeMap::new();
    for record in records {
        let products = grouped.entry(record.category()).or_default();
        products
            .entry(record.product_name())
            .and_modify(|(total, latest)| {
                *total += record.amount();
                *latest = (*latest).max(record.order_date());
            })
            .or_insert((record.amount(), record.order_date()));
    }

    grouped
        .into_iter()
        .map(|(category, products)| {
            let mut ranked: Vec<ProductRankingEntry> = products
                .into_iter()
                .map(|(name, (total_amount, latest))| ProductRankingEntry {
                    category,
                    product_name: name.to_string(),
                    total_amount,
                    most_recent_order_date: latest,
                })
                .collect();
            ranked.sort_by(|a, b| {
                b.total_amount
                    .cmp(&a.total_amount)
                    .then_with(|| a.product_name.cmp(&b.product_name))
            });
            ranked.truncate(TOP_PRODUCTS_LIMIT);
            (category, ranked)
        })
        .collect()
}

/// Totals per calendar month, ascending by month.
pub fn monthly_totals(records: &[OrderRecord]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
    for record in records {
        let date = record.order_date();
        *by_month
            .entry((date.year(), date.month()))
            .or_insert(Decimal::ZERO) += record.amount();
    }
    by_month
        .into_iter()
        .map(|((year, month), total_amount)| MonthlyTotal {
            year,
            month,
            total_amount,
        })
        .collect()
}
