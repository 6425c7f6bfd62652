//! Row-level rejection taxonomy. Every variant is non-fatal: the offending row
//! is dropped from the working set and counted in [`IngestStats`](crate::IngestStats).

use serde::Serialize;

/// Why a raw row never became an [`OrderRecord`](crate::OrderRecord).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowRejection {
    /// Amount text was empty, non-numeric after stripping, or negative.
    #[error("malformed amount: {raw:?}")]
    MalformedAmount { raw: String },
    /// Date text had no leading `YYYY-MM-DD` token, or the token is not a calendar date.
    #[error("malformed date: {raw:?}")]
    MalformedDate { raw: String },
    /// Class label is not one of the recognized single-letter codes.
    #[error("unknown category code: {code:?}")]
    UnknownCategory { code: String },
    /// Row shape could not be interpreted at all (e.g. no product name).
    #[error("unparseable row: {reason}")]
    Unparseable { reason: String },
}

impl RowRejection {
    pub fn malformed_amount(raw: impl Into<String>) -> Self {
        Self::MalformedAmount { raw: raw.into() }
    }

    pub fn malformed_date(raw: impl Into<String>) -> Self {
        Self::MalformedDate { raw: raw.into() }
    }

    pub fn unknown_category(code: impl Into<String>) -> Self {
        Self::UnknownCategory { code: code.into() }
    }

    pub fn unparseable(reason: impl Into<String>) -> Self {
        Self::Unparseable {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::MalformedAmount { .. } => RejectionKind::MalformedAmount,
            Self::MalformedDate { .. } => RejectionKind::MalformedDate,
            Self::UnknownCategory { .. } => RejectionKind::UnknownCategory,
            Self::Unparseable { .. } => RejectionKind::Unparseable,
        }
    }
}

/// Fieldless mirror of [`RowRejection`], used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    MalformedAmount,
    MalformedDate,
    UnknownCategory,
    Unparseable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            RowRejection::malformed_amount("abc").kind(),
            RejectionKind::MalformedAmount
        );
        assert_eq!(
            RowRejection::malformed_date("yesterday").kind(),
            RejectionKind::MalformedDate
        );
        assert_eq!(
            RowRejection::unknown_category("Z").kind(),
            RejectionKind::UnknownCategory
        );
        assert_eq!(
            RowRejection::unparseable("missing product name").kind(),
            RejectionKind::Unparseable
        );
    }

    #[test]
    fn display_includes_offending_text() {
        let err = RowRejection::malformed_amount("₹12x");
        assert!(err.to_string().contains("₹12x"), "got: {}", err);
        let err = RowRejection::unknown_category("Q");
        assert_eq!(err.to_string(), "unknown category code: \"Q\"");
    }
}
