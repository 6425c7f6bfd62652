//! CLI and environment configuration for the dashboard.

use std::path::{Path, PathBuf};

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};

/// Load `.env` from the crate directory, then from the working directory.
/// Missing files are fine.
pub fn load_dotenv() {
    let _ = dotenvy::from_path(Path::new(env!("CARGO_MANIFEST_DIR")).join(".env"));
    dotenvy::dotenv().ok();
}

/// Bundled sample export.
pub fn default_input_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("sample_orders.csv")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Summarize an order-history export: total owed, busiest purchase date,
/// spending per category and month, and the top 10 products per category.
#[derive(Debug, Parser)]
#[command(name = "orders-dashboard", version)]
pub struct Cli {
    /// Order export (CSV with a header row).
    #[arg(env = "ORDERS_INPUT", default_value_os_t = default_input_path())]
    pub input: PathBuf,

    #[arg(long, env = "ORDERS_DATE_COL", default_value = "Order Date")]
    pub date_col: String,

    #[arg(long, env = "ORDERS_PRODUCT_COL", default_value = "Product Name")]
    pub product_col: String,

    #[arg(long, env = "ORDERS_AMOUNT_COL", default_value = "Total Owed")]
    pub amount_col: String,

    #[arg(long, env = "ORDERS_CLASS_COL", default_value = "Class_Label")]
    pub class_col: String,

    #[arg(long, value_enum, env = "ORDERS_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Symbol prefixed to amounts in text output.
    #[arg(long, env = "ORDERS_CURRENCY_SYMBOL", default_value = "₹")]
    pub currency_symbol: String,

    /// Enable logging (true/false, yes/no, on/off, 1/0).
    #[arg(
        long,
        env = "ORDERS_LOGGING",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub logging: bool,

    /// Log filter such as `info` or `orders_core=debug`. Falls back to `RUST_LOG`, then `warn`.
    #[arg(long, env = "ORDERS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Write JSON-lines logs to this file instead of stderr.
    #[arg(long, env = "ORDERS_JSON_LOG_PATH")]
    pub json_log_path: Option<PathBuf>,
}

impl Cli {
    pub fn columns(&self) -> ColumnMapping {
        ColumnMapping {
            date_col: self.date_col.clone(),
            product_col: self.product_col.clone(),
            amount_col: self.amount_col.clone(),
            class_col: self.class_col.clone(),
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            enabled: self.logging,
            level: self.log_level.clone(),
            json_log_path: self.json_log_path.clone(),
        }
    }
}

/// Where and how verbosely the dashboard logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub enabled: bool,
    pub level: Option<String>,
    pub json_log_path: Option<PathBuf>,
}

/// Header names of the four columns the pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date_col: String,
    pub product_col: String,
    pub amount_col: String,
    pub class_col: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_col: "Order Date".into(),
            product_col: "Product Name".into(),
            amount_col: "Total Owed".into(),
            class_col: "Class_Label".into(),
        }
    }
}
