//! Lending policy assumptions: escrow rates, PMI terms and DTI thresholds

mod affordability;
mod escrow;
pub mod loader;

pub use affordability::{
    AffordabilityThresholds, AffordabilityTier, RatioStatus, COMFORTABLE_HOUSING_DTI,
    COMFORTABLE_TOTAL_DTI, STRETCH_HOUSING_DTI, STRETCH_TOTAL_DTI,
};
pub use escrow::{
    EscrowRates, PmiCancellation, HOMEOWNERS_INSURANCE_RATE, PMI_APPROXIMATE_MONTHS,
    PMI_CANCELLATION_LTV, PMI_DOWN_PAYMENT_THRESHOLD, PMI_RATE, PROPERTY_TAX_RATE,
};
pub use loader::{AssumptionsError, LoadedAssumptions};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Names accepted in lending_policy.csv
const KNOWN_NAMES: &[&str] = &[
    "property_tax_rate",
    "insurance_rate",
    "pmi_rate",
    "pmi_down_payment_threshold",
    "comfortable_housing_dti",
    "comfortable_total_dti",
    "stretch_housing_dti",
    "stretch_total_dti",
    "pmi_cancellation",
    "pmi_cancellation_ltv",
    "pmi_cancellation_months",
];

/// Container for all lending policy assumptions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Assumptions {
    pub escrow: EscrowRates,
    pub affordability: AffordabilityThresholds,
    pub pmi_cancellation: PmiCancellation,
}

impl Assumptions {
    /// Standard US lending policy values
    pub fn standard() -> Self {
        Self::default()
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, AssumptionsError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionsError> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Self::from_loaded(&loaded)
    }

    /// Overlay loaded values on the standard assumptions
    pub fn from_loaded(loaded: &LoadedAssumptions) -> Result<Self, AssumptionsError> {
        if let Some(unknown) = loaded
            .lending_policy
            .keys()
            .find(|name| !KNOWN_NAMES.contains(&name.as_str()))
        {
            return Err(AssumptionsError::UnknownName(unknown.clone()));
        }

        let mut assumptions = Self::standard();

        let escrow = &mut assumptions.escrow;
        override_number(loaded, "property_tax_rate", &mut escrow.property_tax_rate)?;
        override_number(loaded, "insurance_rate", &mut escrow.insurance_rate)?;
        override_number(loaded, "pmi_rate", &mut escrow.pmi_rate)?;
        override_number(loaded, "pmi_down_payment_threshold", &mut escrow.pmi_down_payment_threshold)?;

        let dti = &mut assumptions.affordability;
        override_number(loaded, "comfortable_housing_dti", &mut dti.comfortable_housing_dti)?;
        override_number(loaded, "comfortable_total_dti", &mut dti.comfortable_total_dti)?;
        override_number(loaded, "stretch_housing_dti", &mut dti.stretch_housing_dti)?;
        override_number(loaded, "stretch_total_dti", &mut dti.stretch_total_dti)?;
        check_dti_order(dti)?;

        assumptions.pmi_cancellation = pmi_cancellation_from_loaded(loaded)?;

        log::debug!("Loaded lending assumptions: {:?}", assumptions);
        Ok(assumptions)
    }
}

fn override_number(
    loaded: &LoadedAssumptions,
    name: &str,
    target: &mut f64,
) -> Result<(), AssumptionsError> {
    if let Some(value) = loaded.number(name)? {
        *target = value;
    }
    Ok(())
}

/// A stretch limit below its comfortable limit would leave the Stretch tier unreachable
fn check_dti_order(dti: &AffordabilityThresholds) -> Result<(), AssumptionsError> {
    if dti.is_ordered() {
        return Ok(());
    }

    let (name, value) = if dti.comfortable_housing_dti > dti.stretch_housing_dti {
        ("stretch_housing_dti", dti.stretch_housing_dti)
    } else {
        ("stretch_total_dti", dti.stretch_total_dti)
    };
    Err(AssumptionsError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn pmi_cancellation_from_loaded(
    loaded: &LoadedAssumptions,
) -> Result<PmiCancellation, AssumptionsError> {
    let ltv = loaded.number("pmi_cancellation_ltv")?.unwrap_or(PMI_CANCELLATION_LTV);
    let months = loaded
        .number("pmi_cancellation_months")?
        .unwrap_or(PMI_APPROXIMATE_MONTHS as f64);

    match loaded.text("pmi_cancellation").unwrap_or("equity_threshold") {
        "equity_threshold" => Ok(PmiCancellation::EquityThreshold {
            max_loan_to_value: ltv,
        }),
        "fixed_months" => Ok(PmiCancellation::FixedMonths {
            months: months.round() as u32,
        }),
        "never" => Ok(PmiCancellation::Never),
        other => Err(AssumptionsError::InvalidValue {
            name: "pmi_cancellation".to_string(),
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(pairs: &[(&str, &str)]) -> LoadedAssumptions {
        LoadedAssumptions {
            lending_policy: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_default_file_matches_standard() {
        let from_file = Assumptions::from_csv().expect("Failed to load assumptions");
        assert_eq!(from_file, Assumptions::standard());
    }

    #[test]
    fn test_overrides_apply_on_top_of_standard() {
        let a = Assumptions::from_loaded(&loaded(&[
            ("property_tax_rate", "0.02"),
            ("stretch_total_dti", "45"),
            ("pmi_cancellation", "fixed_months"),
        ]))
        .unwrap();

        assert_eq!(a.escrow.property_tax_rate, 0.02);
        assert_eq!(a.escrow.insurance_rate, HOMEOWNERS_INSURANCE_RATE);
        assert_eq!(a.affordability.stretch_total_dti, 45.0);
        assert_eq!(a.pmi_cancellation, PmiCancellation::FixedMonths { months: 132 });
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = Assumptions::from_loaded(&loaded(&[("flood_insurance", "0.01")])).unwrap_err();
        assert!(matches!(err, AssumptionsError::UnknownName(name) if name == "flood_insurance"));
    }

    #[test]
    fn test_stretch_below_comfortable_rejected() {
        let err = Assumptions::from_loaded(&loaded(&[("stretch_housing_dti", "25")])).unwrap_err();
        assert!(matches!(
            err,
            AssumptionsError::InvalidValue { ref name, .. } if name == "stretch_housing_dti"
        ));

        let err = Assumptions::from_loaded(&loaded(&[
            ("comfortable_total_dti", "40"),
            ("stretch_total_dti", "38"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            AssumptionsError::InvalidValue { ref name, .. } if name == "stretch_total_dti"
        ));

        // Equal limits are allowed
        assert!(Assumptions::from_loaded(&loaded(&[("stretch_housing_dti", "28")])).is_ok());
    }

    #[test]
    fn test_bad_cancellation_mode_rejected() {
        let err = Assumptions::from_loaded(&loaded(&[("pmi_cancellation", "sometimes")])).unwrap_err();
        assert!(matches!(err, AssumptionsError::InvalidValue { .. }));
    }
}
