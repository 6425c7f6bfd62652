//! Order export reader: delimited text on disk → ordered [`RawRow`]s.

use std::io::Cursor;
use std::path::Path;

use orders_core::RawRow;
use polars::prelude::*;
use tracing::debug;

use crate::config::ColumnMapping;
use crate::error::DashboardError;

/// Read the export at `path`. Rows come back in file order with every cell as
/// raw text; interpreting the text is the pipeline's job.
pub fn read_order_rows(path: &Path, columns: &ColumnMapping) -> Result<Vec<RawRow>, DashboardError> {
    if !path.exists() {
        return Err(DashboardError::FileNotFound(path.display().to_string()));
    }
    let content =
        std::fs::read(path).map_err(|e| DashboardError::Io(format!("{}: {}", path.display(), e)))?;
    let rows = parse_order_rows(&content, columns)?;
    debug!(path = %path.display(), rows = rows.len(), "read order export");
    Ok(rows)
}

/// Parse CSV bytes (header row required). Schema inference is off so amounts
/// like `₹1,200.00` and dates with a time suffix reach the pipeline untouched.
pub fn parse_order_rows(
    content: &[u8],
    columns: &ColumnMapping,
) -> Result<Vec<RawRow>, DashboardError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(content))
        .finish()?;

    let order_dates = text_column(&df, &columns.date_col)?;
    let product_names = text_column(&df, &columns.product_col)?;
    let amounts = text_column(&df, &columns.amount_col)?;
    let class_labels = text_column(&df, &columns.class_col)?;

    let rows = order_dates
        .into_iter()
        .zip(product_names)
        .zip(amounts)
        .zip(class_labels)
        .map(|(((order_date, product_name), total_owed), class_label)| RawRow {
            order_date,
            product_name,
            total_owed,
            class_label,
        })
        .collect();
    Ok(rows)
}

/// Cells of `name` as text; empty cells come back as `None`.
fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, DashboardError> {
    let has = df
        .get_column_names()
        .iter()
        .any(|c| <_ as AsRef<str>>::as_ref(c) == name);
    if !has {
        return Err(DashboardError::MissingColumn(name.to_string()));
    }
    let values = df.column(name)?.str()?;
    Ok(values
        .into_iter()
        .map(|v| v.filter(|s| !s.is_empty()).map(String::from))
        .collect())
}
