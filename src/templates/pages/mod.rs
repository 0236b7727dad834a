pub mod home;

pub use home::form_page;
