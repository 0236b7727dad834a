mod store;
mod token;

pub use store::{SessionLimits, SessionStore};
