//! Order-history pipeline: raw export rows in, one [`ReportSnapshot`] out.
//!
//! ```text
//!   [RawRow]* --> normalize (amount, date, class label) --> Category mapping
//!             --> aggregate (grand total, busiest date, category totals,
//!                            top products, monthly totals)
//!             --> ReportSnapshot
//! ```
//!
//! Everything here is synchronous and pure apart from emitting `tracing`
//! events; installing a subscriber is left to the binary. Reading the export
//! from disk and formatting the snapshot for display live outside this crate.

pub mod aggregate;
pub mod error;
pub mod record;
pub mod report;

pub use aggregate::{
    BusiestDate, CategoryTotal, MonthlyTotal, ProductRankingEntry, TOP_PRODUCTS_LIMIT,
};
pub use error::{RejectionKind, RowRejection};
pub use record::{Category, IngestStats, NormalizedBatch, OrderRecord, RawRow};
pub use report::{ReportSnapshot, build_report, run_pipeline};
