use serde::Serialize;

/// Dollar rate applied to every token, prompt and completion alike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CostPerToken(f64);

impl CostPerToken {
    /// $0.02 per 1000 tokens.
    pub const DEFAULT: f64 = 0.00002;

    pub fn new(rate: f64) -> Option<Self> {
        (rate.is_finite() && rate > 0.0).then_some(Self(rate))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for CostPerToken {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub cost: f64,
    pub total_tokens: u32,
    pub prompt_cost: f64,
    pub prompt_tokens: u32,
    pub completion_cost: f64,
    pub completion_tokens: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CostEstimate {
    Estimated(CostBreakdown),
    /// The response carried no usage counters.
    Unavailable,
}

impl CostEstimate {
    /// Total cost in dollars; the unavailable sentinel reads as zero.
    pub fn value(&self) -> f64 {
        match self {
            Self::Estimated(breakdown) => breakdown.cost,
            Self::Unavailable => 0.0,
        }
    }

    pub fn breakdown(&self) -> Option<&CostBreakdown> {
        match self {
            Self::Estimated(breakdown) => Some(breakdown),
            Self::Unavailable => None,
        }
    }
}
