use crate::category::FilingCategory;
use crate::forms::FormCode;

/// Form-code tables, one block per filing category, in authoring order.
pub mod forms {
    use super::FormCode;

    /// Annual reports (10-K family, including small-business variants).
    pub const ANNUAL_REPORTS: [FormCode; 5] = [
        FormCode::new("10-K"),
        FormCode::new("10-K405"),
        FormCode::new("10KSB"),
        FormCode::new("10-KSB"),
        FormCode::new("10KSB40"),
    ];
    /// Amendments to annual reports.
    pub const ANNUAL_REPORT_AMENDMENTS: [FormCode; 5] = [
        FormCode::new("10-K/A"),
        FormCode::new("10-K405/A"),
        FormCode::new("10KSB/A"),
        FormCode::new("10-KSB/A"),
        FormCode::new("10KSB40/A"),
    ];
    /// Annual transition reports and their amendments.
    pub const ANNUAL_TRANSITION_REPORTS: [FormCode; 4] = [
        FormCode::new("10-KT"),
        FormCode::new("10KT405"),
        FormCode::new("10-KT/A"),
        FormCode::new("10KT405/A"),
    ];
    /// Quarterly reports (10-Q family, including small-business variants).
    pub const QUARTERLY_REPORTS: [FormCode; 3] = [
        FormCode::new("10-Q"),
        FormCode::new("10QSB"),
        FormCode::new("10-QSB"),
    ];
    /// Amendments to quarterly reports.
    pub const QUARTERLY_REPORT_AMENDMENTS: [FormCode; 3] = [
        FormCode::new("10-Q/A"),
        FormCode::new("10QSB/A"),
        FormCode::new("10-QSB/A"),
    ];
    /// Quarterly transition reports and their amendments.
    pub const QUARTERLY_TRANSITION_REPORTS: [FormCode; 2] =
        [FormCode::new("10-QT"), FormCode::new("10-QT/A")];
    /// Current reports (8-K family, including successor-issuer variants).
    pub const CURRENT_REPORTS: [FormCode; 4] = [
        FormCode::new("8-K"),
        FormCode::new("8-K/A"),
        FormCode::new("8-K12B"),
        FormCode::new("8-K12G3"),
    ];
    /// Registration statements (S-1 family).
    pub const REGISTRATION_STATEMENTS: [FormCode; 2] =
        [FormCode::new("S-1"), FormCode::new("S-1/A")];
    /// Definitive proxy statements.
    pub const PROXY_STATEMENTS: [FormCode; 1] = [FormCode::new("DEF 14A")];
}

/// Constants used by category iteration and keep-list assembly.
pub mod categories {
    use super::FilingCategory;

    /// Canonical category order used to assemble the combined keep list.
    pub const ALL_CATEGORIES: [FilingCategory; 9] = [
        FilingCategory::AnnualReport,
        FilingCategory::AnnualReportAmendment,
        FilingCategory::AnnualTransitionReport,
        FilingCategory::QuarterlyReport,
        FilingCategory::QuarterlyReportAmendment,
        FilingCategory::QuarterlyTransitionReport,
        FilingCategory::CurrentReport,
        FilingCategory::RegistrationStatement,
        FilingCategory::ProxyStatement,
    ];

    /// Categories making up the periodic (10-K/10-Q family) block.
    pub const PERIODIC_CATEGORIES: [FilingCategory; 6] = [
        FilingCategory::AnnualReport,
        FilingCategory::AnnualReportAmendment,
        FilingCategory::AnnualTransitionReport,
        FilingCategory::QuarterlyReport,
        FilingCategory::QuarterlyReportAmendment,
        FilingCategory::QuarterlyTransitionReport,
    ];
}

/// Constants used by keep-list filtering and logging.
pub mod keep {
    /// Log message used when unlisted form codes are dropped.
    pub const SKIP_UNLISTED_MSG: &str = "skipping form code not on keep list";
}
