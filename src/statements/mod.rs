//! Financial statements and report downloads.

mod model;

pub use model::IncomeStatement;

use crate::core::{Endpoint, FmpClient, FmpError, QueryParams, validate_choice};

/// Reporting periods accepted by statement endpoints.
pub const PERIODS: &[&str] = &["annual", "quarter"];

/// Periods accepted by the report export, which also takes individual quarters.
pub const REPORT_PERIODS: &[&str] = &["FY", "Q1", "Q2", "Q3", "Q4"];

/// A builder for income statements of a single symbol.
pub struct IncomeStatementBuilder<'a> {
    client: &'a FmpClient,
    symbol: String,
    period: Option<String>,
    limit: Option<u32>,
}

impl<'a> IncomeStatementBuilder<'a> {
    pub fn new(client: &'a FmpClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            period: None,
            limit: None,
        }
    }

    /// `annual` or `quarter`. The API defaults to annual when unset.
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Maximum number of periods to return.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[tracing::instrument(skip(self), err(level = "warn"), fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Result<Vec<IncomeStatement>, FmpError> {
        if let Some(p) = &self.period {
            validate_choice("period", p, PERIODS)?;
        }
        let params = QueryParams::new()
            .push("symbol", &self.symbol)
            .push_opt("period", self.period)
            .push_opt("limit", self.limit);
        self.client
            .get_json(&Endpoint::new("income-statement"), params)
            .await?
            .into_records()
    }
}

/// Download the financial report for `symbol` as an XLSX workbook.
///
/// Best effort: `None` when the download fails for any reason, including an unknown `period`.
#[tracing::instrument(skip(client))]
pub async fn financial_reports_xlsx(
    client: &FmpClient,
    symbol: &str,
    year: i32,
    period: &str,
) -> Option<Vec<u8>> {
    if let Err(e) = validate_choice("period", period, REPORT_PERIODS) {
        tracing::error!(error = %e, "report download skipped");
        return None;
    }
    let params = QueryParams::new()
        .push("symbol", symbol)
        .push("year", year)
        .push("period", period);
    client.get_binary("financial-reports-xlsx", params).await
}
