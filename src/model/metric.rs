use crate::model::row::Row;

/// Selector over the six numeric columns, so one aggregation routine can
/// serve every per-field total instead of one near-identical function per
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Applied,
    Approved,
    UniqueLcs,
    AppPoints,
    ApdPoints,
    UniqueLcsPoints,
}

impl Metric {
    pub const fn column(self) -> &'static str {
        match self {
            Metric::Applied => "Applied",
            Metric::Approved => "Approved",
            Metric::UniqueLcs => "Unique_LCs",
            Metric::AppPoints => "APP_Points",
            Metric::ApdPoints => "APD_Points",
            Metric::UniqueLcsPoints => "Unique_LCs_Points",
        }
    }

    pub fn value(self, row: &Row) -> f64 {
        match self {
            Metric::Applied => row.applied as f64,
            Metric::Approved => row.approved as f64,
            Metric::UniqueLcs => row.unique_lcs as f64,
            Metric::AppPoints => row.app_points,
            Metric::ApdPoints => row.apd_points,
            Metric::UniqueLcsPoints => row.unique_lcs_points,
        }
    }
}
