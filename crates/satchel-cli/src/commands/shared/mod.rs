pub mod confirm;
pub mod parse;
