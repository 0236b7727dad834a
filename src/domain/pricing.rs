// src/domain/pricing.rs
use crate::domain::format::{currency, kilometres, round_half_up};
use crate::domain::vehicle::{lenient_year, parse_leading_int};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Wholesale valuation for one region, as returned by the pricing endpoint.
///
/// Every field tolerates `null` or an odd type, so one ragged card never
/// sinks the whole list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PricingCard {
    #[serde(default, deserialize_with = "lenient_text")]
    pub province: String,
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub make: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub vin: String,
    #[serde(default, deserialize_with = "lenient_mileage")]
    pub mileage: i64,
    #[serde(default, deserialize_with = "lenient_price")]
    pub adjusted_whole_clean: Option<f64>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub publish_date: Option<String>,
}

/// `null` reads as empty; numbers and booleans as their JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    })
}

/// Whole kilometres; fractions are truncated, anything unreadable is 0.
fn lenient_mileage<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => parse_leading_int(&s).unwrap_or(0),
        _ => 0,
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

impl PricingCard {
    /// "2020 Honda Civic"
    pub fn vehicle_description(&self) -> String {
        let year = self.year.map(|y| y.to_string()).unwrap_or_default();
        format!("{} {} {}", year, self.make, self.model)
            .trim()
            .to_string()
    }

    pub fn publish_date_or_placeholder(&self) -> &str {
        self.publish_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("N/A")
    }

    /// A missing price is shown as zero on the card.
    pub fn wholesale_price(&self) -> f64 {
        self.adjusted_whole_clean.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Ontario,
    Quebec,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Ontario, Region::Quebec];

    /// The `province` string the backend uses for this region.
    pub fn label(self) -> &'static str {
        match self {
            Region::Ontario => "Ontario",
            Region::Quebec => "Quebec",
        }
    }

    /// DOM id of the region's card container.
    pub fn container_id(self) -> &'static str {
        match self {
            Region::Ontario => "ontarioPricingCard",
            Region::Quebec => "quebecPricingCard",
        }
    }

    /// First card for this region in list order; later duplicates are ignored.
    pub fn find(self, cards: &[PricingCard]) -> Option<&PricingCard> {
        cards.iter().find(|c| c.province == self.label())
    }
}

/// Lowest / average / highest of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl Spread {
    /// Zero, NaN and missing values are skipped. `None` when nothing is left.
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let kept: Vec<f64> = values
            .into_iter()
            .flatten()
            .filter(|v| *v != 0.0 && !v.is_nan())
            .collect();

        if kept.is_empty() {
            return None;
        }

        let min = kept.iter().copied().fold(f64::INFINITY, f64::min);
        let max = kept.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = kept.iter().sum::<f64>() / kept.len() as f64;

        Some(Self { min, mean, max })
    }
}

/// Three display strings for one metric row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub lowest: String,
    pub average: String,
    pub highest: String,
}

impl SummaryRow {
    fn placeholder() -> Self {
        Self {
            lowest: "--".to_string(),
            average: "--".to_string(),
            highest: "--".to_string(),
        }
    }
}

/// Everything the results panel shows. Survives failed lookups untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub prices: SummaryRow,
    pub kms: SummaryRow,
    pub ontario: Option<PricingCard>,
    pub quebec: Option<PricingCard>,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self {
            prices: SummaryRow::placeholder(),
            kms: SummaryRow::placeholder(),
            ontario: None,
            quebec: None,
        }
    }
}

impl ResultsView {
    /// Fold a fresh card list into the panel.
    ///
    /// Summary rows are only overwritten when their metric had data. Region
    /// containers are always emptied and refilled.
    pub fn apply(&mut self, cards: &[PricingCard]) {
        if let Some(p) = Spread::of(cards.iter().map(|c| c.adjusted_whole_clean)) {
            self.prices = SummaryRow {
                lowest: currency(p.min),
                average: currency(p.mean),
                highest: currency(p.max),
            };
        }

        if let Some(k) = Spread::of(cards.iter().map(|c| Some(c.mileage as f64))) {
            self.kms = SummaryRow {
                lowest: kilometres(k.min as i64),
                average: kilometres(round_half_up(k.mean)),
                highest: kilometres(k.max as i64),
            };
        }

        self.ontario = Region::Ontario.find(cards).cloned();
        self.quebec = Region::Quebec.find(cards).cloned();
    }

    pub fn card_for(&self, region: Region) -> Option<&PricingCard> {
        match region {
            Region::Ontario => self.ontario.as_ref(),
            Region::Quebec => self.quebec.as_ref(),
        }
    }
}
