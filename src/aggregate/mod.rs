use std::collections::{HashMap, HashSet};

use crate::model::metric::Metric;
use crate::model::row::Row;
use crate::model::summary::EntitySummary;

/// Point sums per entity in one linear pass. Every distinct `Entity` value
/// gets its own bucket, the empty string included.
pub fn summarize_by_entity(rows: &[Row]) -> HashMap<String, EntitySummary> {
    let mut summaries: HashMap<String, EntitySummary> = HashMap::new();
    for row in rows {
        summaries
            .entry(row.entity.clone())
            .or_default()
            .add_row(row);
    }
    summaries
}

pub fn sum_field_by_entity(rows: &[Row], metric: Metric) -> HashMap<String, f64> {
    let mut sums: HashMap<String, f64> = HashMap::new();
    for row in rows {
        *sums.entry(row.entity.clone()).or_insert(0.0) += metric.value(row);
    }
    sums
}

/// Same, restricted to rows whose `Function` matches; a function absent
/// from the data yields an empty map.
pub fn sum_field_by_entity_and_function(
    rows: &[Row],
    metric: Metric,
    function: &str,
) -> HashMap<String, f64> {
    let mut sums: HashMap<String, f64> = HashMap::new();
    for row in rows {
        if row.function != function {
            continue;
        }
        *sums.entry(row.entity.clone()).or_insert(0.0) += metric.value(row);
    }
    sums
}

/// Per-function sums inside a single entity; feeds the per-entity breakdown
/// section of the report.
pub fn sum_field_by_function(rows: &[Row], entity: &str, metric: Metric) -> HashMap<String, f64> {
    let mut sums: HashMap<String, f64> = HashMap::new();
    for row in rows {
        if row.entity != entity {
            continue;
        }
        *sums.entry(row.function.clone()).or_insert(0.0) += metric.value(row);
    }
    sums
}

/// Distinct entities in first-seen order.
pub fn entities(rows: &[Row]) -> Vec<String> {
    distinct(rows, |row| row.entity.as_str())
}

/// Distinct functions in first-seen order.
pub fn functions(rows: &[Row]) -> Vec<String> {
    distinct(rows, |row| row.function.as_str())
}

fn distinct<'a>(rows: &'a [Row], key: impl Fn(&'a Row) -> &'a str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for row in rows {
        let value = key(row);
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/tests.rs"]
mod tests;
