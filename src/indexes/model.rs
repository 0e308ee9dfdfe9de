use serde::{Deserialize, Serialize};

/// A current member of an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexConstituent {
    pub symbol: String,
    pub name: String,
    pub sector: Option<String>,
    pub sub_sector: Option<String>,
    pub head_quarter: Option<String>,
    pub date_first_added: Option<String>,
    pub cik: Option<String>,
    pub founded: Option<String>,
}
