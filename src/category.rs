use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::forms as form_tables;
use crate::errors::FormTableError;
use crate::forms::FormCode;

pub use crate::constants::categories::{ALL_CATEGORIES, PERIODIC_CATEGORIES};

/// Filing categories covered by the keep list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingCategory {
    /// Annual reports (10-K family).
    AnnualReport,
    /// Amendments to annual reports.
    AnnualReportAmendment,
    /// Annual transition reports and their amendments.
    AnnualTransitionReport,
    /// Quarterly reports (10-Q family).
    QuarterlyReport,
    /// Amendments to quarterly reports.
    QuarterlyReportAmendment,
    /// Quarterly transition reports and their amendments.
    QuarterlyTransitionReport,
    /// Current reports (8-K family).
    CurrentReport,
    /// Registration statements (S-1 family).
    RegistrationStatement,
    /// Definitive proxy statements.
    ProxyStatement,
}

impl FilingCategory {
    /// Form codes declared for this category, in authoring order.
    pub const fn forms(self) -> &'static [FormCode] {
        match self {
            Self::AnnualReport => &form_tables::ANNUAL_REPORTS,
            Self::AnnualReportAmendment => &form_tables::ANNUAL_REPORT_AMENDMENTS,
            Self::AnnualTransitionReport => &form_tables::ANNUAL_TRANSITION_REPORTS,
            Self::QuarterlyReport => &form_tables::QUARTERLY_REPORTS,
            Self::QuarterlyReportAmendment => &form_tables::QUARTERLY_REPORT_AMENDMENTS,
            Self::QuarterlyTransitionReport => &form_tables::QUARTERLY_TRANSITION_REPORTS,
            Self::CurrentReport => &form_tables::CURRENT_REPORTS,
            Self::RegistrationStatement => &form_tables::REGISTRATION_STATEMENTS,
            Self::ProxyStatement => &form_tables::PROXY_STATEMENTS,
        }
    }

    /// Stable snake_case name matching the serialized representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnnualReport => "annual_report",
            Self::AnnualReportAmendment => "annual_report_amendment",
            Self::AnnualTransitionReport => "annual_transition_report",
            Self::QuarterlyReport => "quarterly_report",
            Self::QuarterlyReportAmendment => "quarterly_report_amendment",
            Self::QuarterlyTransitionReport => "quarterly_transition_report",
            Self::CurrentReport => "current_report",
            Self::RegistrationStatement => "registration_statement",
            Self::ProxyStatement => "proxy_statement",
        }
    }

    /// Whether this category belongs to the periodic (10-K/10-Q) block.
    pub fn is_periodic(self) -> bool {
        PERIODIC_CATEGORIES.contains(&self)
    }
}

impl fmt::Display for FilingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilingCategory {
    type Err = FormTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CATEGORIES
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| FormTableError::UnknownCategory(s.to_string()))
    }
}
