//! Order-history dashboard: read an export, run the report pipeline, print
//! the result as a console dashboard or JSON.

mod config;
mod error;
mod logging;
mod reader;
mod render;

use clap::Parser;

use crate::config::{Cli, OutputFormat};
use crate::error::DashboardError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_dotenv();
    let cli = Cli::parse();
    logging::init_logging(&cli.log_config());
    let output = run(&cli)?;
    println!("{}", output);
    Ok(())
}

fn run(cli: &Cli) -> Result<String, DashboardError> {
    let rows = reader::read_order_rows(&cli.input, &cli.columns())?;
    let report = orders_core::run_pipeline(rows);
    match cli.format {
        OutputFormat::Text => Ok(render::render_text(&report, &cli.currency_symbol)),
        OutputFormat::Json => render::render_json(&report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_input_path;

    fn cli_for_sample(format: &str) -> Cli {
        let input = default_input_path();
        Cli::try_parse_from([
            "orders-dashboard",
            input.to_str().unwrap(),
            "--format",
            format,
        ])
        .unwrap()
    }

    #[test]
    fn sample_export_json_report() {
        let json = run(&cli_for_sample("json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["grand_total"].as_f64(), Some(18965.5));
        // 2024-06-03 and 2024-07-01 both have three line items; the earlier date wins.
        assert_eq!(value["busiest_date"]["date"], "2024-06-03");
        assert_eq!(value["busiest_date"]["order_count"], 3);

        let categories: Vec<&str> = value["category_totals"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["category"].as_str().unwrap())
            .collect();
        assert_eq!(
            categories,
            ["Kitchen", "Dress", "Accessories", "Home", "Groceries"]
        );
        assert_eq!(value["category_totals"][0]["total_amount"].as_f64(), Some(7946.0));

        let kitchen = value["top_products"]["Kitchen"].as_array().unwrap();
        assert_eq!(kitchen[0]["product_name"], "Prestige Pressure Cooker 3L");
        assert_eq!(kitchen[0]["total_amount"].as_f64(), Some(3798.0));
        assert_eq!(kitchen[0]["most_recent_order_date"], "2024-09-05");
        assert_eq!(kitchen[2]["product_name"], "Steel Water Bottle");
        assert_eq!(kitchen[2]["most_recent_order_date"], "2024-07-01");

        let accessories = value["top_products"]["Accessories"].as_array().unwrap();
        assert_eq!(accessories[0]["product_name"], "Leather Wallet");
        assert_eq!(accessories[0]["most_recent_order_date"], "2025-01-06");

        assert_eq!(value["monthly_totals"].as_array().unwrap().len(), 8);
        assert_eq!(value["monthly_totals"][0]["total_amount"].as_f64(), Some(4142.5));

        let ingest = &value["ingest"];
        assert_eq!(ingest["rows_read"], 20);
        assert_eq!(ingest["rows_accepted"], 16);
        assert_eq!(ingest["malformed_amount"], 1);
        assert_eq!(ingest["malformed_date"], 1);
        assert_eq!(ingest["unknown_category"], 1);
        assert_eq!(ingest["unparseable"], 1);
    }

    #[test]
    fn sample_export_text_report() {
        let text = run(&cli_for_sample("text")).unwrap();
        assert!(text.contains("Total Owed:        ₹18,965.50"), "{text}");
        assert!(text.contains("Top Purchase Date: 2024-06-03 (3 orders)"));
        assert!(text.contains("₹7,946.00"));
    }

    #[test]
    fn missing_input_propagates_error() {
        let cli = Cli::try_parse_from(["orders-dashboard", "/nonexistent/orders.csv"]).unwrap();
        assert!(matches!(run(&cli), Err(DashboardError::FileNotFound(_))));
    }
}
