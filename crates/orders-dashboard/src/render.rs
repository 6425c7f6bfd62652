//! Presentation of a [`ReportSnapshot`]: console dashboard text or JSON.
//! All currency formatting happens here.

use orders_core::{ReportSnapshot, TOP_PRODUCTS_LIMIT};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::DashboardError;

const PRODUCT_COL_WIDTH: usize = 40;

/// `₹1,234,567.89`: symbol, thousands separators, two decimals.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{grouped}.{frac_part}")
}

/// Cut long product names to the table width, marking the cut with `…`.
fn fit_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let mut cut: String = name.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

pub fn render_text(report: &ReportSnapshot, symbol: &str) -> String {
    let money = |amount: Decimal| format_currency(amount, symbol);
    let mut out = String::new();

    push_line(&mut out, "Order Dashboard");
    push_line(&mut out, "===============");
    push_line(
        &mut out,
        format!("Total Owed:        {}", money(report.grand_total())),
    );
    match report.busiest_date() {
        Some(date) => push_line(
            &mut out,
            format!(
                "Top Purchase Date: {} ({} orders)",
                date,
                report.busiest_date_order_count()
            ),
        ),
        None => push_line(&mut out, "Top Purchase Date: n/a"),
    }

    push_line(&mut out, "\nTotal Owed per Category");
    if report.category_totals().is_empty() {
        push_line(&mut out, "  (no orders)");
    }
    for total in report.category_totals() {
        push_line(
            &mut out,
            format!(
                "  {:<14} {:>16}",
                total.category.name(),
                money(total.total_amount)
            ),
        );
    }

    push_line(&mut out, "\nMonthly Spending");
    if report.monthly_totals().is_empty() {
        push_line(&mut out, "  (no orders)");
    }
    for month in report.monthly_totals() {
        push_line(
            &mut out,
            format!("  {:<14} {:>16}", month.label(), money(month.total_amount)),
        );
    }

    push_line(
        &mut out,
        format!("\nTop {} Items per Category", TOP_PRODUCTS_LIMIT),
    );
    // Same order as the category totals above.
    for total in report.category_totals() {
        push_line(&mut out, format!("[{}]", total.category.name()));
        push_line(
            &mut out,
            format!(
                "  {:<width$} {:>16}   {}",
                "Product Name",
                "Total Owed",
                "Last Order Date",
                width = PRODUCT_COL_WIDTH
            ),
        );
        for entry in report.top_products_for(total.category) {
            push_line(
                &mut out,
                format!(
                    "  {:<width$} {:>16}   {}",
                    fit_name(&entry.product_name, PRODUCT_COL_WIDTH),
                    money(entry.total_amount),
                    entry.most_recent_order_date,
                    width = PRODUCT_COL_WIDTH
                ),
            );
        }
    }

    let ingest = report.ingest();
    out.push_str(&format!(
        "\nRows: {} read, {} used, {} dropped (malformed amount {}, malformed date {}, unknown category {}, unparseable {})",
        ingest.rows_read,
        ingest.rows_accepted,
        ingest.rows_rejected(),
        ingest.malformed_amount,
        ingest.malformed_date,
        ingest.unknown_category,
        ingest.unparseable
    ));
    out
}

pub fn render_json(report: &ReportSnapshot) -> Result<String, DashboardError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use orders_core::{RawRow, run_pipeline};

    use super::*;

    fn d(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn currency_groups_thousands_and_pads_cents() {
        assert_eq!(format_currency(d("1500"), "₹"), "₹1,500.00");
        assert_eq!(format_currency(d("1234567.891"), "₹"), "₹1,234,567.89");
        assert_eq!(format_currency(d("999.995"), "$"), "$1,000.00");
        assert_eq!(format_currency(d("100"), ""), "100.00");
        assert_eq!(format_currency(Decimal::ZERO, "₹"), "₹0.00");
        assert_eq!(format_currency(d("0.5"), "₹"), "₹0.50");
    }

    #[test]
    fn long_names_are_cut_with_ellipsis() {
        assert_eq!(fit_name("Mug", 10), "Mug");
        let cut = fit_name("Stainless Steel Insulated Water Bottle", 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn text_dashboard_shows_headline_and_tables() {
        let report = run_pipeline(vec![
            RawRow::new("2024-07-01", "Mug", "₹1,200.00", "k"),
            RawRow::new("2024-07-01", "Mug", "₹300.00", "K"),
            RawRow::new("2024-07-02", "Shirt", "abc", "d"),
        ]);
        let text = render_text(&report, "₹");
        assert!(text.contains("Total Owed:        ₹1,500.00"), "{text}");
        assert!(text.contains("Top Purchase Date: 2024-07-01 (2 orders)"));
        assert!(text.contains("[Kitchen]"));
        assert!(text.contains("2024-07"));
        assert!(!text.contains("[Dress]"));
        assert!(text.contains("3 read, 2 used, 1 dropped (malformed amount 1"));
    }

    #[test]
    fn text_dashboard_handles_empty_report() {
        let report = run_pipeline(Vec::new());
        let text = render_text(&report, "₹");
        assert!(text.contains("Total Owed:        ₹0.00"));
        assert!(text.contains("Top Purchase Date: n/a"));
        assert!(text.contains("(no orders)"));
    }

    #[test]
    fn text_dashboard_lines_are_newline_separated() {
        let report = run_pipeline(vec![RawRow::new("2024-07-01", "Mug", "₹5.00", "K")]);
        let text = render_text(&report, "₹");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Order Dashboard");
        assert_eq!(lines[1], "===============");
        assert_eq!(lines[2], "Total Owed:        ₹5.00");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Total Owed per Category");
        assert!(text.ends_with("unparseable 0)"));
    }

    #[test]
    fn json_output_round_trips_through_serde_json() {
        let report = run_pipeline(vec![RawRow::new("2024-07-01", "Mug", "₹1,200.00", "K")]);
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["category_totals"][0]["category"], "Kitchen");
        assert_eq!(value["ingest"]["rows_accepted"], 1);
    }
}
