//! Per-user saved mortgage settings
//!
//! The record a settings store keeps for a user. Storage itself lives outside this
//! crate; here we only define the shape and how it overlays a scenario.

use super::{is_supported_term, Scenario};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Saved settings for one user. Every value is optional; missing values keep the
/// scenario's current value.
///
/// Stores hand NUMERIC columns back as strings ("410000.00"), so every value field
/// accepts either a JSON number or a numeric string. Extra columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedSettings {
    #[serde(default, deserialize_with = "id_text")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub loan_term: Option<u32>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub home_price: Option<f64>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub down_payment_percent: Option<f64>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub interest_rate: Option<f64>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub annual_income: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue<T> {
    Number(T),
    Text(String),
}

/// A number, a numeric string, or null. Blank strings read as null.
fn number_or_text<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<RawValue<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawValue::Number(value)) => Ok(Some(value)),
        Some(RawValue::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawValue::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid number {text:?}: {e}"))),
    }
}

/// User ids arrive as integers from the table and as strings from the route
fn id_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawValue<u64>>::deserialize(deserializer)?.map(|raw| match raw {
        RawValue::Number(id) => id.to_string(),
        RawValue::Text(text) => text,
    }))
}

impl SavedSettings {
    /// Capture the persisted fields of a scenario
    pub fn from_scenario(user_id: impl Into<String>, scenario: &Scenario) -> Self {
        Self {
            user_id: Some(user_id.into()),
            loan_term: Some(scenario.loan_term_years),
            home_price: Some(scenario.home_price),
            down_payment_percent: Some(scenario.down_payment_percent),
            interest_rate: Some(scenario.interest_rate),
            annual_income: Some(scenario.annual_income),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Overlay the saved values on a scenario.
    ///
    /// The term is restored only if it is one of the supported terms. Numeric values
    /// are restored only when present and non-zero.
    pub fn apply_to(&self, scenario: &Scenario) -> Scenario {
        let mut restored = *scenario;

        match self.loan_term {
            Some(term) if is_supported_term(term) => restored.loan_term_years = term,
            Some(term) => log::warn!("Ignoring saved loan term of {} years", term),
            None => {}
        }

        restore(&mut restored.home_price, self.home_price);
        restore(&mut restored.down_payment_percent, self.down_payment_percent);
        restore(&mut restored.interest_rate, self.interest_rate);
        restore(&mut restored.annual_income, self.annual_income);

        restored
    }
}

fn restore(target: &mut f64, saved: Option<f64>) {
    if let Some(value) = saved.filter(|v| *v != 0.0 && v.is_finite()) {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_saved() {
        // A store with no row for the user answers with the term only
        let json = r#"{"user_id":"1","loan_term":30,"home_price":null,
            "down_payment_percent":null,"interest_rate":null,"annual_income":null}"#;
        let settings = SavedSettings::from_json(json).unwrap();

        let base = Scenario::default();
        assert_eq!(settings.apply_to(&base), base);
    }

    #[test]
    fn test_store_row_with_text_numbers() {
        let json = r#"{"id":1,"user_id":7,"loan_term":15,"home_price":"410000.00",
            "down_payment_percent":"12.50","interest_rate":"5.875","annual_income":"98000.00",
            "created_at":"2025-01-04T10:00:00Z","updated_at":"2025-01-05T18:22:41Z"}"#;
        let settings = SavedSettings::from_json(json).unwrap();

        assert_eq!(settings.user_id.as_deref(), Some("7"));
        assert_eq!(settings.home_price, Some(410_000.0));
        assert_eq!(settings.down_payment_percent, Some(12.5));

        let restored = settings.apply_to(&Scenario::default());
        assert_eq!(restored.loan_term_years, 15);
        assert_eq!(restored.home_price, 410_000.0);
        assert_eq!(restored.interest_rate, 5.875);
        assert_eq!(restored.annual_income, 98_000.0);
    }

    #[test]
    fn test_text_term_and_blank_values() {
        let json = r#"{"user_id":"7","loan_term":"20","home_price":"","interest_rate":6.25}"#;
        let settings = SavedSettings::from_json(json).unwrap();
        assert_eq!(settings.loan_term, Some(20));
        assert_eq!(settings.home_price, None);
        assert_eq!(settings.interest_rate, Some(6.25));
    }

    #[test]
    fn test_non_numeric_text_rejected() {
        let json = r#"{"user_id":"7","home_price":"lots"}"#;
        assert!(SavedSettings::from_json(json).is_err());
    }

    #[test]
    fn test_saved_values_overlay_scenario() {
        let settings = SavedSettings {
            loan_term: Some(15),
            home_price: Some(410_000.0),
            interest_rate: Some(5.875),
            ..Default::default()
        };

        let restored = settings.apply_to(&Scenario::default());
        assert_eq!(restored.loan_term_years, 15);
        assert_eq!(restored.home_price, 410_000.0);
        assert_eq!(restored.interest_rate, 5.875);
        // Untouched fields survive
        assert_eq!(restored.down_payment_percent, 10.0);
        assert_eq!(restored.monthly_utilities, 200.0);
    }

    #[test]
    fn test_unsupported_term_and_zero_values_ignored() {
        let settings = SavedSettings {
            loan_term: Some(25),
            down_payment_percent: Some(0.0),
            ..Default::default()
        };

        let restored = settings.apply_to(&Scenario::default());
        assert_eq!(restored.loan_term_years, 30);
        assert_eq!(restored.down_payment_percent, 10.0);
    }

    #[test]
    fn test_from_scenario_restores_same_scenario() {
        let scenario = Scenario::new(515_000.0, 160_000.0, 22.0, 6.25, 20);
        let settings = SavedSettings::from_scenario("42", &scenario);
        let json = serde_json::to_string(&settings).unwrap();

        let restored = SavedSettings::from_json(&json).unwrap().apply_to(&Scenario::default());
        assert_eq!(restored.home_price, 515_000.0);
        assert_eq!(restored.loan_term_years, 20);
        assert_eq!(restored.down_payment_percent, 22.0);
    }
}
