use serde::Serialize;

use crate::model::summary::EntitySummary;
use crate::report::{EntityBreakdown, EntityEntry, FunctionTotals, LeaderboardData};

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct InputMeta {
    n_rows: usize,
    n_entities: usize,
}

/// Wire shape consumed by the rendering front end.
#[derive(Debug, Serialize)]
struct LeaderboardJson<'a> {
    tool: ToolMeta<'a>,
    input: InputMeta,
    overall: &'a EntitySummary,
    entities: &'a [EntityEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdowns: Option<&'a [EntityBreakdown]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    function_totals: Option<&'a [FunctionTotals]>,
}

pub fn render_leaderboard_json(data: &LeaderboardData) -> Result<String, serde_json::Error> {
    let doc = LeaderboardJson {
        tool: ToolMeta {
            name: &data.tool_name,
            version: &data.tool_version,
        },
        input: InputMeta {
            n_rows: data.n_rows,
            n_entities: data.entries.len(),
        },
        overall: &data.overall,
        entities: &data.entries,
        breakdowns: data.breakdowns.as_deref(),
        function_totals: data.function_totals.as_deref(),
    };
    serde_json::to_string_pretty(&doc)
}
