// src/domain/filters.rs
use crate::domain::format::thousands;
use crate::domain::vehicle::VinRecord;

pub const YEAR_MIN: i32 = 1980;
pub const YEAR_MAX: i32 = 2026;
pub const DEFAULT_YEAR: i32 = 2024;

pub const ODOMETER_MIN: i64 = 0;
pub const ODOMETER_MAX: i64 = 200_000;
pub const ODOMETER_STEP: i64 = 1_000;
pub const DEFAULT_ODOMETER: i64 = 100_000;

pub const DEFAULT_SALE_DATE: &str = "90";

const MAKES: &[&str] = &[
    "Acura",
    "Audi",
    "BMW",
    "Buick",
    "Cadillac",
    "Chevrolet",
    "Chrysler",
    "Dodge",
    "Ford",
    "GMC",
    "Hyundai",
    "Jeep",
    "Kia",
    "Lexus",
    "Mazda",
    "Mercedes-Benz",
    "Nissan",
    "Ram",
    "Subaru",
    "Tesla",
    "Toyota",
    "Volkswagen",
    "Volvo",
];

const PROVINCES: &[&str] = &[
    "Alberta",
    "British Columbia",
    "Manitoba",
    "New Brunswick",
    "Newfoundland and Labrador",
    "Nova Scotia",
    "Ontario",
    "Prince Edward Island",
    "Quebec",
    "Saskatchewan",
];

const SALE_WINDOWS: &[(&str, &str)] = &[
    ("30", "Last 30 days"),
    ("60", "Last 60 days"),
    ("90", "Last 90 days"),
    ("180", "Last 6 months"),
    ("365", "Last 12 months"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// What happened when a decoded value was pushed into a select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Matched,
    Added,
    Rejected,
}

/// A dropdown: a known option list, the current selection, and whether
/// values outside the list may be appended.
///
/// The first option is always the empty-valued placeholder ("All Makes").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: String,
    allow_novel: bool,
}

impl SelectControl {
    pub fn new(placeholder: &str, known: &[(&str, &str)], allow_novel: bool) -> Self {
        let mut options = Vec::with_capacity(known.len() + 1);
        options.push(SelectOption::new("", placeholder));
        options.extend(known.iter().map(|(v, l)| SelectOption::new(*v, *l)));

        Self {
            options,
            selected: String::new(),
            allow_novel,
        }
    }

    /// Options whose value and label are the same text.
    pub fn from_values(placeholder: &str, values: &[&str], allow_novel: bool) -> Self {
        let pairs: Vec<(&str, &str)> = values.iter().map(|v| (*v, *v)).collect();
        Self::new(placeholder, &pairs, allow_novel)
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn allows_novel(&self) -> bool {
        self.allow_novel
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected == value
    }

    /// Exact-value selection, as a submitted form sets it. A value that is
    /// not an option leaves nothing selected.
    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o.value == value) {
            self.selected = value.to_string();
            true
        } else {
            self.selected.clear();
            false
        }
    }

    /// Case-insensitive match against the existing options; the first hit
    /// wins and keeps its own spelling. Without a hit the decoded text
    /// becomes a new option when novel values are allowed.
    pub fn select_or_extend(&mut self, decoded: &str) -> Selection {
        let wanted = decoded.to_lowercase();

        if let Some(opt) = self
            .options
            .iter()
            .find(|o| o.value.to_lowercase() == wanted)
        {
            self.selected = opt.value.clone();
            return Selection::Matched;
        }

        if !self.allow_novel {
            return Selection::Rejected;
        }

        self.options.push(SelectOption::new(decoded, decoded));
        self.selected = decoded.to_string();
        Selection::Added
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

/// Every control on the filter panel, plus the display labels next to the
/// two sliders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub vin: String,

    pub year: i32,
    pub year_min_label: String,
    pub year_max_label: String,

    pub odometer: i64,
    pub odometer_min_label: String,
    pub odometer_max_label: String,

    pub make: SelectControl,
    pub model: SelectControl,
    pub trim: SelectControl,
    pub province: SelectControl,
    pub sale_date: SelectControl,
}

impl Default for FilterState {
    fn default() -> Self {
        let mut state = Self {
            vin: String::new(),
            year: DEFAULT_YEAR,
            year_min_label: String::new(),
            year_max_label: String::new(),
            odometer: DEFAULT_ODOMETER,
            odometer_min_label: String::new(),
            odometer_max_label: String::new(),
            make: SelectControl::from_values("All Makes", MAKES, true),
            model: SelectControl::from_values("All Models", &[], true),
            trim: SelectControl::from_values("All Trims", &[], true),
            province: SelectControl::from_values("All Provinces", PROVINCES, false),
            sale_date: SelectControl::new("Any time", SALE_WINDOWS, false),
        };
        state.reset();
        state
    }
}

impl FilterState {
    /// Back to the hard-coded defaults.
    ///
    /// The labels are reset to the slider bounds, not to the reset values
    /// (year reads 1980/2026 while the slider sits at 2024). Options that a
    /// decode appended stay in their lists.
    pub fn reset(&mut self) {
        self.vin.clear();
        self.year = DEFAULT_YEAR;
        self.odometer = DEFAULT_ODOMETER;

        self.make.clear_selection();
        self.model.clear_selection();
        self.trim.clear_selection();
        self.province.clear_selection();
        self.sale_date.select(DEFAULT_SALE_DATE);

        self.year_min_label = YEAR_MIN.to_string();
        self.year_max_label = YEAR_MAX.to_string();
        self.odometer_min_label = ODOMETER_MIN.to_string();
        self.odometer_max_label = ODOMETER_MAX.to_string();
    }

    /// Slider value only; labels keep whatever they last showed.
    pub fn set_year_value(&mut self, year: i64) {
        self.year = clamp_year(year);
    }

    pub fn set_odometer_value(&mut self, km: i64) {
        self.odometer = km.clamp(ODOMETER_MIN, ODOMETER_MAX);
    }

    /// The year filter is one slider; both labels mirror it.
    pub fn slide_year(&mut self, year: i64) {
        self.year = clamp_year(year);
        self.year_min_label = self.year.to_string();
        self.year_max_label = self.year.to_string();
    }

    pub fn slide_odometer(&mut self, km: i64) {
        self.odometer = km.clamp(ODOMETER_MIN, ODOMETER_MAX);
        self.odometer_min_label = "0".to_string();
        self.odometer_max_label = thousands(self.odometer);
    }

    /// Copy decoded attributes onto the filters. Absent attributes leave
    /// their filter alone.
    pub fn populate_from_vin(&mut self, record: &VinRecord) {
        if let Some(year) = record.year() {
            self.year = clamp_year(i64::from(year));
            self.year_min_label = year.to_string();
            self.year_max_label = year.to_string();
        }

        if let Some(make) = record.make() {
            self.make.select_or_extend(make);
        }
        if let Some(model) = record.model() {
            self.model.select_or_extend(model);
        }
        if let Some(series) = record.series() {
            self.trim.select_or_extend(series);
        }
    }
}

fn clamp_year(year: i64) -> i32 {
    // clamp first so the narrowing cast cannot wrap
    year.clamp(i64::from(YEAR_MIN), i64::from(YEAR_MAX)) as i32
}
