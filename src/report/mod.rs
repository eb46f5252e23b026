pub mod json;
pub mod text;

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::aggregate::{
    entities, functions, sum_field_by_entity, sum_field_by_entity_and_function,
    sum_field_by_function, summarize_by_entity,
};
use crate::model::metric::Metric;
use crate::model::row::Row;
use crate::model::summary::EntitySummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Entity,
    Function,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityEntry {
    pub entity: String,
    pub rank: usize,
    pub applied: u64,
    pub approved: u64,
    pub unique_lcs: u64,
    pub app_points: f64,
    pub apd_points: f64,
    pub unique_lcs_points: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionEntry {
    pub function: String,
    pub applied: u64,
    pub approved: u64,
    pub unique_lcs: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityBreakdown {
    pub entity: String,
    pub functions: Vec<FunctionEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionTotalsEntry {
    pub entity: String,
    pub applied: u64,
    pub approved: u64,
    pub unique_lcs: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionTotals {
    pub function: String,
    pub entities: Vec<FunctionTotalsEntry>,
}

#[derive(Debug, Clone)]
pub struct LeaderboardData {
    pub tool_name: String,
    pub tool_version: String,
    pub n_rows: usize,
    pub entries: Vec<EntityEntry>,
    pub overall: EntitySummary,
    pub breakdowns: Option<Vec<EntityBreakdown>>,
    pub function_totals: Option<Vec<FunctionTotals>>,
}

/// Builds the full report payload from the parsed rows. Ranking orders by
/// total points descending; ties fall back to entity name so repeated runs
/// over the same export produce identical output.
pub fn build_leaderboard(rows: &[Row], mode: ReportMode) -> LeaderboardData {
    let summaries = summarize_by_entity(rows);
    let applied = sum_field_by_entity(rows, Metric::Applied);
    let approved = sum_field_by_entity(rows, Metric::Approved);
    let unique_lcs = sum_field_by_entity(rows, Metric::UniqueLcs);

    let mut overall = EntitySummary::default();
    for summary in summaries.values() {
        overall.merge(summary);
    }

    let mut entries: Vec<EntityEntry> = summaries
        .iter()
        .map(|(entity, summary)| EntityEntry {
            entity: entity.clone(),
            rank: 0,
            applied: applied.get(entity).copied().unwrap_or(0.0) as u64,
            approved: approved.get(entity).copied().unwrap_or(0.0) as u64,
            unique_lcs: unique_lcs.get(entity).copied().unwrap_or(0.0) as u64,
            app_points: summary.app_points,
            apd_points: summary.apd_points,
            unique_lcs_points: summary.unique_lcs_points,
            total: summary.total,
        })
        .collect();
    entries.sort_by(|a, b| {
        match b
            .total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
        {
            std::cmp::Ordering::Equal => a.entity.cmp(&b.entity),
            other => other,
        }
    });
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }

    let (breakdowns, function_totals) = match mode {
        ReportMode::Entity => (None, None),
        ReportMode::Function => (
            Some(build_breakdowns(rows)),
            Some(build_function_totals(rows)),
        ),
    };

    LeaderboardData {
        tool_name: "xm-leaderboard".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        n_rows: rows.len(),
        entries,
        overall,
        breakdowns,
        function_totals,
    }
}

/// Per-function count sums inside each entity, in first-seen entity order;
/// functions sorted by name inside each entity.
fn build_breakdowns(rows: &[Row]) -> Vec<EntityBreakdown> {
    let mut out = Vec::new();
    for entity in entities(rows) {
        let applied = sum_field_by_function(rows, &entity, Metric::Applied);
        let approved = sum_field_by_function(rows, &entity, Metric::Approved);
        let unique_lcs = sum_field_by_function(rows, &entity, Metric::UniqueLcs);

        let mut function_names: Vec<String> = applied.keys().cloned().collect();
        function_names.sort();

        let function_entries = function_names
            .into_iter()
            .map(|function| {
                let applied = applied.get(&function).copied().unwrap_or(0.0) as u64;
                let approved = approved.get(&function).copied().unwrap_or(0.0) as u64;
                let unique_lcs = unique_lcs.get(&function).copied().unwrap_or(0.0) as u64;
                FunctionEntry {
                    function,
                    applied,
                    approved,
                    unique_lcs,
                }
            })
            .collect();

        out.push(EntityBreakdown {
            entity,
            functions: function_entries,
        });
    }
    out
}

/// The reverse cut: per-entity count sums inside each function, for
/// entity-vs-entity comparison within one programme.
fn build_function_totals(rows: &[Row]) -> Vec<FunctionTotals> {
    let mut out = Vec::new();
    for function in functions(rows) {
        let applied = sum_field_by_entity_and_function(rows, Metric::Applied, &function);
        let approved = sum_field_by_entity_and_function(rows, Metric::Approved, &function);
        let unique_lcs = sum_field_by_entity_and_function(rows, Metric::UniqueLcs, &function);

        let mut entity_names: Vec<String> = applied.keys().cloned().collect();
        entity_names.sort();

        let entity_entries = entity_names
            .into_iter()
            .map(|entity| {
                let applied = applied.get(&entity).copied().unwrap_or(0.0) as u64;
                let approved = approved.get(&entity).copied().unwrap_or(0.0) as u64;
                let unique_lcs = unique_lcs.get(&entity).copied().unwrap_or(0.0) as u64;
                FunctionTotalsEntry {
                    entity,
                    applied,
                    approved,
                    unique_lcs,
                }
            })
            .collect();

        out.push(FunctionTotals {
            function,
            entities: entity_entries,
        });
    }
    out
}

pub fn write_reports(data: &LeaderboardData, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let json_path = out_dir.join("leaderboard.json");
    fs::write(&json_path, json::render_leaderboard_json(data)?)?;

    let text_path = out_dir.join("leaderboard.txt");
    fs::write(&text_path, text::render_leaderboard_text(data))?;

    tracing::info!(
        "reports written: {}, {}",
        json_path.display(),
        text_path.display()
    );
    Ok(())
}

pub fn format_points(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
