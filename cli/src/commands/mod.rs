pub mod options;
pub mod parse;
