//! Dataset types: conferences, their deadlines, and the people following them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::date::CalendarDate;

/// The whole document: `{ "conferences": [...], "humans": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub conferences: Vec<Conference>,

    #[serde(default)]
    pub humans: Vec<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conference {
    pub name: String,
    pub acronym: String,

    #[serde(default)]
    pub location: Vec<String>,

    #[serde(default)]
    pub url: String,

    /// Start and end day. Equal for single-day events.
    pub dates: (CalendarDate, CalendarDate),

    #[serde(default)]
    pub deadlines: Vec<Deadline>,

    /// Names referencing `Person::name`.
    #[serde(default)]
    pub interested: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    pub title: String,
    pub date: CalendarDate,
}

/// A person who can be listed as interested in a conference.
///
/// Only `name` is interpreted; every other field is carried through to the
/// templates untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,

    #[serde(flatten)]
    pub profile: Map<String, Value>,
}
