use serde::{Deserialize, Serialize};
use std::fmt;

/// A date as it arrives in a request body: either a date string or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Millis(i64),
    Text(String),
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Millis(ms) => write!(f, "{}", ms),
            DateInput::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[serde(default)]
    pub birth_date: Option<DateInput>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRequest {
    #[serde(default)]
    pub date_one: Option<DateInput>,
    #[serde(default)]
    pub date_two: Option<DateInput>,
}

// 欄位順序即 JSON 輸出順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeResult {
    pub years: i64,
    pub seconds: i64,
    pub hours: i64,
    pub minutes: i64,
    pub days: i64,
    pub weeks: i64,
    pub months: i64,
    pub centuries: i64,
    pub decades: i64,
    pub day_of_week: String,
    pub zodiac_sign: String,
    pub generation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub compatibility: f64,
    pub sign_one: String,
    pub sign_two: String,
}
