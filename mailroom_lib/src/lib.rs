pub mod donors;
pub mod errors;
pub mod formatters;
pub mod letters;
pub mod reports;
