use crate::report::{LeaderboardData, format_points};

pub fn render_leaderboard_text(data: &LeaderboardData) -> String {
    let mut out = String::new();

    out.push_str("Exchange Marathon Leaderboard\n");
    out.push_str("=============================\n\n");

    out.push_str("1. Total points by entity\n");
    out.push_str(&format!(
        "{:<5} {:<16} {:>10} {:>10} {:>10} {:>10}\n",
        "rank", "entity", "APP", "APD", "ULC_pts", "total"
    ));
    for entry in &data.entries {
        out.push_str(&format!(
            "{:<5} {:<16} {:>10} {:>10} {:>10} {:>10}\n",
            entry.rank,
            entry.entity,
            format_points(entry.app_points),
            format_points(entry.apd_points),
            format_points(entry.unique_lcs_points),
            format_points(entry.total)
        ));
    }
    out.push_str(&format!(
        "{:<5} {:<16} {:>10} {:>10} {:>10} {:>10}\n",
        "",
        "TOTAL",
        format_points(data.overall.app_points),
        format_points(data.overall.apd_points),
        format_points(data.overall.unique_lcs_points),
        format_points(data.overall.total)
    ));
    out.push('\n');

    out.push_str("2. Activity counts by entity\n");
    out.push_str(&format!(
        "{:<16} {:>10} {:>10} {:>10}\n",
        "entity", "applied", "approved", "unique_LCs"
    ));
    for entry in &data.entries {
        out.push_str(&format!(
            "{:<16} {:>10} {:>10} {:>10}\n",
            entry.entity, entry.applied, entry.approved, entry.unique_lcs
        ));
    }

    if let Some(breakdowns) = &data.breakdowns {
        out.push('\n');
        out.push_str("3. Function breakdown by entity\n");
        for breakdown in breakdowns {
            out.push_str(&format!("{}\n", breakdown.entity));
            for f in &breakdown.functions {
                out.push_str(&format!(
                    "  {}: applied={}, approved={}, unique_LCs={}\n",
                    f.function, f.applied, f.approved, f.unique_lcs
                ));
            }
        }
    }

    if let Some(function_totals) = &data.function_totals {
        out.push('\n');
        out.push_str("4. Entity comparison by function\n");
        for totals in function_totals {
            out.push_str(&format!("{}\n", totals.function));
            for e in &totals.entities {
                out.push_str(&format!(
                    "  {}: applied={}, approved={}, unique_LCs={}\n",
                    e.entity, e.applied, e.approved, e.unique_lcs
                ));
            }
        }
    }

    out
}
