//! JSON transport: checkout request parsing and validation, outcome and capability output.

pub mod capabilities;
pub mod outcome_writer;
pub mod request_reader;
