// src/controller/input.rs
use crate::domain::vehicle::parse_leading_int;

/// Raw control values from a submitted form, keyed by the inputs' `name`s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub vin: Option<String>,
    pub year: Option<String>,
    pub odometer: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub trim: Option<String>,
    pub province: Option<String>,
    pub sale_date: Option<String>,
}

impl FormInput {
    /// Later duplicates of a field overwrite earlier ones; unknown names are
    /// ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut input = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "vin" => &mut input.vin,
                "year" => &mut input.year,
                "odometer" => &mut input.odometer,
                "make" => &mut input.make,
                "model" => &mut input.model,
                "trim" => &mut input.trim,
                "province" => &mut input.province,
                "saleDate" => &mut input.sale_date,
                _ => continue,
            };
            *slot = Some(value.into());
        }

        input
    }

    /// Parse an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(body).into_owned())
    }

    pub fn year_value(&self) -> Option<i64> {
        self.year.as_deref().and_then(parse_leading_int)
    }

    pub fn odometer_value(&self) -> Option<i64> {
        self.odometer.as_deref().and_then(parse_leading_int)
    }
}
