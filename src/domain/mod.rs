pub mod filters;
pub mod format;
pub mod pricing;
pub mod vehicle;
pub mod vin;

pub use filters::{FilterState, SelectControl};
pub use pricing::{PricingCard, Region, ResultsView};
pub use vehicle::VinRecord;
