pub mod date;
pub mod money;
pub mod path;
pub mod table;

// Re-exports for the most used helpers
pub use money::{format_thousands, number_in_words};
