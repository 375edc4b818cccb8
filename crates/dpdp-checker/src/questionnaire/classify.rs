use super::error::DivisionGuardError;
use serde::{Deserialize, Serialize};
use std::fmt;

const LOW_RISK_FLOOR: f64 = 80.0;
const MEDIUM_RISK_FLOOR: f64 = 50.0;

/// Risk classification derived from the compliance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Thresholds use inclusive lower bounds: 80 and above is low, 50 and above is medium.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= LOW_RISK_FLOOR {
            Self::Low
        } else if percentage >= MEDIUM_RISK_FLOOR {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk (Mostly Compliant)",
            Self::Medium => "Medium Risk (Partially Compliant)",
            Self::High => "High Risk (Non-Compliant)",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrounded outcome of a completed questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceResult {
    pub total: f64,
    pub question_count: usize,
    pub percentage: f64,
    pub tier: RiskTier,
}

pub fn classify(total: f64, question_count: usize) -> Result<ComplianceResult, DivisionGuardError> {
    if question_count == 0 {
        return Err(DivisionGuardError);
    }

    let percentage = total / question_count as f64 * 100.0;
    Ok(ComplianceResult {
        total,
        question_count,
        percentage,
        tier: RiskTier::from_percentage(percentage),
    })
}

/// Rounds half away from zero to two decimal places.
pub fn round_percentage(percentage: f64) -> f64 {
    (percentage * 100.0).round() / 100.0
}
