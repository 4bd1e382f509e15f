pub mod indicators;
pub mod number_format;
