//! Debt-to-income thresholds and affordability tiers

use serde::{Deserialize, Serialize};

/// Max housing DTI (percent) for a comfortable purchase
pub const COMFORTABLE_HOUSING_DTI: f64 = 28.0;

/// Max total DTI (percent) for a comfortable purchase
pub const COMFORTABLE_TOTAL_DTI: f64 = 36.0;

/// Max housing DTI (percent) for a stretch purchase
pub const STRETCH_HOUSING_DTI: f64 = 33.0;

/// Max total DTI (percent) for a stretch purchase
pub const STRETCH_TOTAL_DTI: f64 = 43.0;

/// Affordability tier, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AffordabilityTier {
    Comfortable,
    Stretch,
    Difficult,
}

impl AffordabilityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            AffordabilityTier::Comfortable => "Comfortable",
            AffordabilityTier::Stretch => "Stretch",
            AffordabilityTier::Difficult => "Difficult",
        }
    }

    /// One-line summary shown next to the tier
    pub fn summary(&self) -> &'static str {
        match self {
            AffordabilityTier::Comfortable => {
                "This looks manageable based on your current scenario."
            }
            AffordabilityTier::Stretch => {
                "This is a stretch but may be possible with careful budgeting."
            }
            AffordabilityTier::Difficult => {
                "This may be difficult to afford with your current numbers."
            }
        }
    }
}

impl AffordabilityTier {
    /// Practical next steps for a buyer in this tier
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            AffordabilityTier::Comfortable => &[
                "Your housing costs are within recommended guidelines.",
                "You have room in your budget for savings and unexpected expenses.",
                "Consider getting pre-approved to lock in your rate.",
            ],
            AffordabilityTier::Stretch => &[
                "This is possible but leaves less room for unexpected costs.",
                "Consider building a larger emergency fund before buying.",
                "A slightly lower home price could move you into a comfortable range.",
            ],
            AffordabilityTier::Difficult => &[
                "Consider a lower price range or wait until income increases.",
                "A larger down payment could reduce monthly costs significantly.",
                "Make sure you're accounting for all expenses accurately.",
                "This is just a scenario; adjusting one input can change the picture.",
            ],
        }
    }
}

impl std::fmt::Display for AffordabilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grade of a single DTI ratio against its own limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatioStatus {
    /// At or under the recommended limit
    Recommended,
    /// Over recommended, at or under the stretch limit
    Stretch,
    High,
}

impl RatioStatus {
    fn grade(value: f64, recommended: f64, max_stretch: f64) -> Self {
        if value <= recommended {
            RatioStatus::Recommended
        } else if value <= max_stretch {
            RatioStatus::Stretch
        } else {
            RatioStatus::High
        }
    }
}

/// Lending ratio limits used to classify a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityThresholds {
    pub comfortable_housing_dti: f64,
    pub comfortable_total_dti: f64,
    pub stretch_housing_dti: f64,
    pub stretch_total_dti: f64,
}

impl Default for AffordabilityThresholds {
    fn default() -> Self {
        Self {
            comfortable_housing_dti: COMFORTABLE_HOUSING_DTI,
            comfortable_total_dti: COMFORTABLE_TOTAL_DTI,
            stretch_housing_dti: STRETCH_HOUSING_DTI,
            stretch_total_dti: STRETCH_TOTAL_DTI,
        }
    }
}

impl AffordabilityThresholds {
    /// Classify a pair of DTI percentages. Limits are inclusive.
    pub fn classify(&self, housing_dti: f64, total_dti: f64) -> AffordabilityTier {
        if housing_dti <= self.comfortable_housing_dti && total_dti <= self.comfortable_total_dti {
            AffordabilityTier::Comfortable
        } else if housing_dti <= self.stretch_housing_dti && total_dti <= self.stretch_total_dti {
            AffordabilityTier::Stretch
        } else {
            AffordabilityTier::Difficult
        }
    }

    /// Whether a housing DTI alone stays within the comfortable limit
    pub fn housing_is_comfortable(&self, housing_dti: f64) -> bool {
        housing_dti <= self.comfortable_housing_dti
    }

    /// Housing DTI graded against the housing limits alone
    pub fn housing_status(&self, housing_dti: f64) -> RatioStatus {
        RatioStatus::grade(housing_dti, self.comfortable_housing_dti, self.stretch_housing_dti)
    }

    /// Total DTI graded against the total limits alone
    pub fn total_status(&self, total_dti: f64) -> RatioStatus {
        RatioStatus::grade(total_dti, self.comfortable_total_dti, self.stretch_total_dti)
    }

    /// Comfortable limits must not exceed the stretch limits they sit under
    pub fn is_ordered(&self) -> bool {
        self.comfortable_housing_dti <= self.stretch_housing_dti
            && self.comfortable_total_dti <= self.stretch_total_dti
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        let t = AffordabilityThresholds::default();
        assert_eq!(t.classify(28.0, 36.0), AffordabilityTier::Comfortable);
        assert_eq!(t.classify(28.01, 36.0), AffordabilityTier::Stretch);
        assert_eq!(t.classify(33.0, 43.0), AffordabilityTier::Stretch);
        assert_eq!(t.classify(33.0, 43.01), AffordabilityTier::Difficult);
    }

    #[test]
    fn test_either_ratio_can_push_down_a_tier() {
        let t = AffordabilityThresholds::default();
        // Low housing ratio but heavy other debts
        assert_eq!(t.classify(20.0, 40.0), AffordabilityTier::Stretch);
        assert_eq!(t.classify(20.0, 50.0), AffordabilityTier::Difficult);
        // Housing alone is too high
        assert_eq!(t.classify(40.26, 45.86), AffordabilityTier::Difficult);
    }

    #[test]
    fn test_each_ratio_graded_on_its_own() {
        let t = AffordabilityThresholds::default();
        assert_eq!(t.housing_status(28.0), RatioStatus::Recommended);
        assert_eq!(t.housing_status(30.5), RatioStatus::Stretch);
        assert_eq!(t.housing_status(33.0), RatioStatus::Stretch);
        assert_eq!(t.housing_status(40.26), RatioStatus::High);

        // 30% is fine for total debt but a stretch for housing
        assert_eq!(t.total_status(30.0), RatioStatus::Recommended);
        assert_eq!(t.total_status(43.0), RatioStatus::Stretch);
        assert_eq!(t.total_status(45.86), RatioStatus::High);
    }

    #[test]
    fn test_suggestions_per_tier() {
        assert_eq!(AffordabilityTier::Comfortable.suggestions().len(), 3);
        assert_eq!(AffordabilityTier::Stretch.suggestions().len(), 3);
        assert_eq!(AffordabilityTier::Difficult.suggestions().len(), 4);
        assert!(AffordabilityTier::Difficult.suggestions()[1].contains("down payment"));
    }

    #[test]
    fn test_tier_ordering() {
        assert!(AffordabilityTier::Comfortable < AffordabilityTier::Stretch);
        assert!(AffordabilityTier::Stretch < AffordabilityTier::Difficult);
        assert_eq!(AffordabilityTier::Stretch.to_string(), "Stretch");
    }
}
