//! Named field formats checked by the request validator.

use regex::Regex;
use std::sync::LazyLock;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+@[a-zA-Z_-]+?(?:\.[a-zA-Z]{2,6})+$").unwrap());
static SALARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$[1-9][0-9]{0,6}(?:\.[0-9]{1,2})?$").unwrap());
static HOUR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MEMBERSHIPS: [&str; 3] = ["Classic", "Only Classes", "Black"];

/// Format a string field must match once its length has been accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Letters and whitespace only.
    Name,
    /// ASCII digits `0-9` only.
    Digits,
    Email,
    /// At least one lowercase letter, one uppercase letter and one digit.
    Password,
    /// Dollar amount such as `$85000.43`.
    Salary,
    Weekday,
    /// 24-hour `HH:MM`.
    Hour,
    /// Calendar date as `YYYY-MM-DD`.
    Date,
    Membership,
}

impl Pattern {
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Name => NAME_REGEX.is_match(value),
            Self::Digits => DIGITS_REGEX.is_match(value),
            Self::Email => EMAIL_REGEX.is_match(value),
            // The regex crate has no lookahead, so each class is checked on its own.
            Self::Password => {
                value.chars().any(|c| c.is_ascii_lowercase())
                    && value.chars().any(|c| c.is_ascii_uppercase())
                    && value.chars().any(|c| c.is_ascii_digit())
            }
            Self::Salary => SALARY_REGEX.is_match(value),
            Self::Weekday => WEEKDAYS.contains(&value),
            Self::Hour => HOUR_REGEX.is_match(value),
            Self::Date => DATE_REGEX.is_match(value),
            Self::Membership => MEMBERSHIPS.contains(&value),
        }
    }

    /// Human readable description used as the rejection reason.
    pub fn description(self) -> &'static str {
        match self {
            Self::Name => "must contain only letters and spaces",
            Self::Digits => "must contain only digits",
            Self::Email => "must be a valid email address",
            Self::Password => {
                "must contain at least one lowercase letter, one uppercase letter and one digit"
            }
            Self::Salary => "must be a dollar amount such as $85000.43",
            Self::Weekday => "must be a day of the week, e.g. Monday",
            Self::Hour => "must be a 24-hour time formatted as HH:MM",
            Self::Date => "must be a date formatted as YYYY-MM-DD",
            Self::Membership => "must be one of Classic, Only Classes or Black",
        }
    }
}
