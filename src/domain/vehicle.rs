// src/domain/vehicle.rs
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Attributes the backend decoded from a VIN.
///
/// Only `year`, `make`, `model` and `series` drive the filters; everything
/// else the decoder returned is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VinRecord {
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub series: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VinRecord {
    pub fn year(&self) -> Option<i32> {
        self.year.filter(|y| *y != 0)
    }

    pub fn make(&self) -> Option<&str> {
        non_empty(&self.make)
    }

    pub fn model(&self) -> Option<&str> {
        non_empty(&self.model)
    }

    pub fn series(&self) -> Option<&str> {
        non_empty(&self.series)
    }

    /// "2020 Honda Civic EX", skipping whatever is missing.
    pub fn description(&self) -> String {
        let year = self.year().map(|y| y.to_string());
        [year.as_deref(), self.make(), self.model(), self.series()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Leading-integer parse: optional sign, then digits, trailing junk ignored.
/// `"2020"` -> 2020, `" 12.7km"` -> 12, `"abc"` -> None.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let n: i64 = digits.parse().ok()?;
    Some(if negative { -n } else { n })
}

/// Years arrive as numbers from some decoders and as strings from others.
pub(crate) fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    let year = match value {
        Some(Value::Number(n)) => n.as_f64().map(|f| f.trunc() as i64),
        Some(Value::String(s)) => parse_leading_int(&s),
        _ => None,
    };

    Ok(year.and_then(|y| i32::try_from(y).ok()))
}
