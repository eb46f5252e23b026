use serde::Deserialize;

/// One record of the spreadsheet export. Field names follow the sheet
/// headers exactly; the `_Points` columns are weighted scores computed
/// upstream in the sheet itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Row {
    #[serde(rename = "Entity")]
    pub entity: String,
    #[serde(rename = "Function")]
    pub function: String,
    #[serde(rename = "Applied")]
    pub applied: u32,
    #[serde(rename = "Approved")]
    pub approved: u32,
    #[serde(rename = "Unique_LCs")]
    pub unique_lcs: u32,
    #[serde(rename = "APP_Points")]
    pub app_points: f64,
    #[serde(rename = "APD_Points")]
    pub apd_points: f64,
    #[serde(rename = "Unique_LCs_Points")]
    pub unique_lcs_points: f64,
}
