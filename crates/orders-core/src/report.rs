//! Report builder: assembles the aggregation passes into one immutable
//! [`ReportSnapshot`]. Values stay numeric; display formatting is left to
//! whoever renders the snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::aggregate::{self, BusiestDate, CategoryTotal, MonthlyTotal, ProductRankingEntry};
use crate::record::{Category, IngestStats, OrderRecord, RawRow, normalize_rows};

/// Complete set of computed aggregates for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSnapshot {
    grand_total: Decimal,
    busiest_date: Option<BusiestDate>,
    category_totals: Vec<CategoryTotal>,
    top_products: BTreeMap<Category, Vec<ProductRankingEntry>>,
    monthly_totals: Vec<MonthlyTotal>,
    ingest: IngestStats,
}

impl ReportSnapshot {
    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    /// `None` when no record survived normalization.
    pub fn busiest_date(&self) -> Option<NaiveDate> {
        self.busiest_date.map(|b| b.date)
    }

    /// Line items on [`busiest_date`](Self::busiest_date); zero when there is none.
    pub fn busiest_date_order_count(&self) -> usize {
        self.busiest_date.map_or(0, |b| b.order_count)
    }

    /// Descending by total.
    pub fn category_totals(&self) -> &[CategoryTotal] {
        &self.category_totals
    }

    pub fn top_products(&self) -> &BTreeMap<Category, Vec<ProductRankingEntry>> {
        &self.top_products
    }

    /// Ranked products for one category; empty when the category had no records.
    pub fn top_products_for(&self, category: Category) -> &[ProductRankingEntry] {
        self.top_products
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ascending by month.
    pub fn monthly_totals(&self) -> &[MonthlyTotal] {
        &self.monthly_totals
    }

    pub fn ingest(&self) -> &IngestStats {
        &self.ingest
    }

    pub fn is_empty(&self) -> bool {
        self.busiest_date.is_none()
    }
}

/// Run every aggregation pass over `records` and assemble the snapshot.
pub fn build_report(records: &[OrderRecord], ingest: IngestStats) -> ReportSnapshot {
    ReportSnapshot {
        grand_total: aggregate::grand_total(records),
        busiest_date: aggregate::busiest_date(records),
        category_totals: aggregate::category_totals(records),
        top_products: aggregate::top_products(records),
        monthly_totals: aggregate::monthly_totals(records),
        ingest,
    }
}

/// Normalize `rows` and build the report in one synchronous pass.
pub fn run_pipeline<I>(rows: I) -> ReportSnapshot
where
    I: IntoIterator<Item = RawRow>,
{
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("order_report", run_id = %run_id);
    let _guard = span.enter();

    let batch = normalize_rows(rows);
    let report = build_report(&batch.records, batch.stats);
    info!(
        grand_total = %report.grand_total(),
        categories = report.category_totals().len(),
        busiest_date = ?report.busiest_date(),
        "report built"
    );
    report
}
