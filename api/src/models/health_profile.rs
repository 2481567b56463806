use derive_more::{Display, From};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

const DEFAULT_USER_ID: &str = "default";

#[derive(Debug, Display, From, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Id used for clients that never identified themselves.
    pub fn anonymous() -> Self {
        Self(String::from(DEFAULT_USER_ID))
    }

    /// Blank ids are treated as anonymous.
    pub fn from_optional(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.trim().is_empty() => Self(id.trim().to_string()),
            _ => Self::anonymous(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    #[serde(default = "UserId::anonymous", deserialize_with = "normalized_user_id")]
    pub user_id: UserId,
    #[serde(default, deserialize_with = "lenient_number")]
    #[validate(range(min = 1, max = 130))]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Kilograms.
    #[serde(default, deserialize_with = "lenient_number")]
    #[validate(range(exclusive_min = 0.0))]
    pub weight: Option<f32>,
    /// Centimeters.
    #[serde(default, deserialize_with = "lenient_number")]
    #[validate(range(exclusive_min = 0.0))]
    pub height: Option<f32>,
    #[serde(default)]
    pub health_conditions: Option<String>,
    #[serde(default)]
    pub dietary_preferences: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
}

impl HealthProfile {
    /// A profile with nothing filled in, used when the user never saved one.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            age: None,
            gender: None,
            weight: None,
            height: None,
            health_conditions: None,
            dietary_preferences: None,
            allergies: None,
        }
    }
}

fn normalized_user_id<'de, D>(deserializer: D) -> Result<UserId, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(UserId::from_optional)
}

// Form inputs arrive as strings just as often as numbers; empty inputs mean "not provided".
fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr + serde::de::DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("`{text}` is not a valid number"))),
        Some(other) => serde_json::from_value(other)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_sent_as_strings() {
        let profile: HealthProfile = serde_json::from_str(
            r#"{"userId": "u-1", "age": "34", "weight": 71.5, "height": "", "allergies": "peanuts"}"#,
        )
        .unwrap();

        assert_eq!(profile.user_id, UserId::from(String::from("u-1")));
        assert_eq!(profile.age, Some(34));
        assert_eq!(profile.weight, Some(71.5));
        assert_eq!(profile.height, None);
        assert_eq!(profile.allergies.as_deref(), Some("peanuts"));
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn missing_user_id_is_anonymous() {
        let profile: HealthProfile = serde_json::from_str("{}").unwrap();

        assert_eq!(profile.user_id, UserId::anonymous());
        assert_eq!(profile, HealthProfile::empty(UserId::anonymous()));
    }

    #[test]
    fn saved_user_id_is_normalized() {
        let padded: HealthProfile = serde_json::from_str(r#"{"userId": " u-1 "}"#).unwrap();
        let blank: HealthProfile = serde_json::from_str(r#"{"userId": ""}"#).unwrap();
        let null: HealthProfile = serde_json::from_str(r#"{"userId": null}"#).unwrap();

        assert_eq!(padded.user_id, UserId::from(String::from("u-1")));
        assert_eq!(blank.user_id, UserId::anonymous());
        assert_eq!(null.user_id, UserId::anonymous());
    }

    #[test]
    fn rejects_non_numeric_age() {
        let result = serde_json::from_str::<HealthProfile>(r#"{"age": "old"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_values_fail_validation() {
        let profile: HealthProfile =
            serde_json::from_str(r#"{"age": 0, "weight": -3, "height": 180}"#).unwrap();

        let errors = profile.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("weight"));
        assert!(!fields.contains_key("height"));
    }

    #[test]
    fn blank_user_id_falls_back_to_anonymous() {
        assert_eq!(UserId::from_optional(Some(String::from("  "))), UserId::anonymous());
        assert_eq!(UserId::from_optional(None), UserId::anonymous());
        assert_eq!(
            UserId::from_optional(Some(String::from(" u-7 "))).to_string(),
            "u-7"
        );
    }
}
