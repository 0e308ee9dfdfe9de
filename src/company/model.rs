use serde::{Deserialize, Serialize};

/// Company profile from `profile`. Every field except the symbol is optional upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub symbol: String,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub beta: Option<f64>,
    pub last_dividend: Option<f64>,
    pub range: Option<String>,
    pub change: Option<f64>,
    pub change_percentage: Option<f64>,
    pub volume: Option<u64>,
    pub average_volume: Option<u64>,
    pub company_name: Option<String>,
    pub currency: Option<String>,
    pub cik: Option<String>,
    pub isin: Option<String>,
    pub cusip: Option<String>,
    pub exchange_full_name: Option<String>,
    pub exchange: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub ceo: Option<String>,
    pub sector: Option<String>,
    pub country: Option<String>,
    pub full_time_employees: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub image: Option<String>,
    pub ipo_date: Option<String>,
    pub default_image: Option<bool>,
    pub is_etf: Option<bool>,
    pub is_actively_trading: Option<bool>,
    pub is_adr: Option<bool>,
    pub is_fund: Option<bool>,
}
