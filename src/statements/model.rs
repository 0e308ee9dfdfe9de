use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One period of an income statement. Amounts are in `reported_currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    pub date: NaiveDate,
    pub symbol: String,
    pub reported_currency: Option<String>,
    pub cik: Option<String>,
    pub filing_date: Option<String>,
    pub accepted_date: Option<String>,
    pub fiscal_year: Option<String>,
    pub period: Option<String>,
    pub revenue: Option<f64>,
    pub cost_of_revenue: Option<f64>,
    pub gross_profit: Option<f64>,
    pub research_and_development_expenses: Option<f64>,
    pub selling_general_and_administrative_expenses: Option<f64>,
    pub operating_expenses: Option<f64>,
    pub operating_income: Option<f64>,
    pub interest_expense: Option<f64>,
    pub ebitda: Option<f64>,
    pub ebit: Option<f64>,
    pub income_before_tax: Option<f64>,
    pub income_tax_expense: Option<f64>,
    pub net_income: Option<f64>,
    pub eps: Option<f64>,
    pub eps_diluted: Option<f64>,
    pub weighted_average_shs_out: Option<f64>,
    pub weighted_average_shs_out_dil: Option<f64>,
}
