use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Response Envelope ============

/// Top-level body returned by the user generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Generated users, in the order the service returned them.
    pub results: Vec<User>,
    /// Metadata about the generation request.
    pub info: ApiInfo,
}

/// Metadata describing the request that produced a page of users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Seed the service used; reusing it reproduces the same users.
    pub seed: String,
    /// Number of users in this page.
    pub results: i64,
    /// 1-based page index.
    pub page: i64,
    /// Service version string (e.g. "1.4").
    pub version: String,
}

// ============ User Record ============

/// One synthetic user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub gender: String,
    pub name: Name,
    pub location: Location,
    pub email: String,
    pub login: Login,
    /// Date of birth.
    pub dob: DateOfBirth,
    /// Registration date.
    pub registered: Registration,
    pub phone: String,
    pub cell: String,
    /// National identification document.
    pub id: Identification,
    pub picture: Picture,
    /// Nationality code (e.g. "BR", "US").
    pub nat: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

impl Name {
    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
    pub coordinates: Coordinates,
    pub timezone: Timezone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Street {
    pub number: i64,
    pub name: String,
}

/// Postal code. Numeric for some locales, text for others (e.g. "EC1A 1BB").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(i64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{}", n),
            Postcode::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Coordinates as sent by the service (decimal strings, not numbers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timezone {
    /// UTC offset, e.g. "-3:30".
    pub offset: String,
    pub description: String,
}

/// Sample credentials generated by the service. Not real secrets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Login {
    pub uuid: String,
    pub username: String,
    pub password: String,
    pub salt: String,
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
}

/// Date of birth with the age derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateOfBirth {
    /// ISO-8601 timestamp, kept as received.
    pub date: String,
    pub age: i64,
}

impl DateOfBirth {
    /// Parses `date` as RFC 3339. Returns `None` if the service sent something else.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        parse_iso_date(&self.date)
    }
}

/// Registration date with the number of years since registering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// ISO-8601 timestamp, kept as received.
    pub date: String,
    pub age: i64,
}

impl Registration {
    /// Parses `date` as RFC 3339. Returns `None` if the service sent something else.
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        parse_iso_date(&self.date)
    }
}

fn parse_iso_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// National ID. Some nationalities have no value for their scheme, sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    pub name: String,
    pub value: Option<String>,
}

/// Portrait URLs in three sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}
