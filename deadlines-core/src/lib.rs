//! Core of the deadlines tool.
//!
//! - `model` and `date` describe the conference dataset
//! - `schedule` and `time_format` pick the next deadline and describe it
//! - `views`, `template` and `site` turn the dataset into markup
//! - `loader` and `deadlines_config` read the dataset and settings

pub mod date;
pub mod deadlines_config;
pub mod error;
pub mod loader;
pub mod model;
pub mod schedule;
pub mod site;
pub mod template;
pub mod time_format;
pub mod views;

pub use error::{DeadlinesError, DeadlinesResult};
pub use model::{Conference, Dataset, Deadline, Person};
