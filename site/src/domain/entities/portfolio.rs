//! Portfolio item domain entity

use serde::{Deserialize, Serialize};

/// A portfolio project row from the CMS
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image: Option<String>,
    /// Where the work was shot, e.g. "Tokyo, Japan"
    pub place: String,
    /// Year or full date the work was completed
    pub date: String,
    pub featured: bool,
}
