use serde::Serialize;

use crate::domain::{CostBreakdown, CostEstimate};

pub const CURRENCY_NOTE: &str = "Please note that all the price is in USD$";

#[derive(Debug, Serialize)]
pub struct CostRow {
    pub measure: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct CostReport {
    pub estimate: CostEstimate,
    /// Absent when usage counters were not reported.
    pub table: Option<Vec<CostRow>>,
    pub note: &'static str,
}

impl CostReport {
    pub fn new(estimate: CostEstimate) -> Self {
        Self {
            table: estimate.breakdown().map(rows),
            estimate,
            note: CURRENCY_NOTE,
        }
    }
}

fn rows(b: &CostBreakdown) -> Vec<CostRow> {
    vec![
        CostRow {
            measure: "Estimated cost",
            value: format!("{:.6}", b.cost),
        },
        CostRow {
            measure: "Total Tokens",
            value: b.total_tokens.to_string(),
        },
        CostRow {
            measure: "Input Prompt Cost",
            value: format!("{:.6}", b.prompt_cost),
        },
        CostRow {
            measure: "Prompt Tokens",
            value: b.prompt_tokens.to_string(),
        },
        CostRow {
            measure: "Completion Cost",
            value: format!("{:.6}", b.completion_cost),
        },
        CostRow {
            measure: "Completion Tokens",
            value: b.completion_tokens.to_string(),
        },
    ]
}
