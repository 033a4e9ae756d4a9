//! journalyze - Journal with sentiment and keyword analysis
//!
//! A command-line journaling application that stores dated free-text
//! entries in a CSV file and derives sentiment polarity and keyword
//! signals from entry content.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalyzeError;
