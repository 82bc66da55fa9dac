use crate::domain::{CompletionResponse, CostBreakdown, CostEstimate, CostPerToken};

/// Prices a completion from its usage counters at a flat per-token rate.
pub fn estimate_cost(response: &CompletionResponse, rate: CostPerToken) -> CostEstimate {
    let Some(usage) = response.usage else {
        return CostEstimate::Unavailable;
    };

    let per_token = rate.value();
    CostEstimate::Estimated(CostBreakdown {
        cost: f64::from(usage.total_tokens) * per_token,
        total_tokens: usage.total_tokens,
        prompt_cost: f64::from(usage.prompt_tokens) * per_token,
        prompt_tokens: usage.prompt_tokens,
        completion_cost: f64::from(usage.completion_tokens) * per_token,
        completion_tokens: usage.completion_tokens,
    })
}
