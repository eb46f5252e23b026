use serde::Serialize;

use crate::model::row::Row;

/// Running point sums for one entity; `total` always equals the sum of the
/// three constituents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EntitySummary {
    pub app_points: f64,
    pub apd_points: f64,
    pub unique_lcs_points: f64,
    pub total: f64,
}

impl EntitySummary {
    pub fn add_row(&mut self, row: &Row) {
        self.app_points += row.app_points;
        self.apd_points += row.apd_points;
        self.unique_lcs_points += row.unique_lcs_points;
        self.total += row.app_points + row.apd_points + row.unique_lcs_points;
    }

    pub fn merge(&mut self, other: &EntitySummary) {
        self.app_points += other.app_points;
        self.apd_points += other.apd_points;
        self.unique_lcs_points += other.unique_lcs_points;
        self.total += other.total;
    }
}
