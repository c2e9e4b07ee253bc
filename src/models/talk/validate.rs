use std::fmt;

use super::types::Talk;

/// Talk fields that carry a required-ness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkField {
    Title,
    Summary,
    Timezone,
}

impl TalkField {
    pub fn label(self) -> &'static str {
        match self {
            TalkField::Title => "Title",
            TalkField::Summary => "Summary",
            TalkField::Timezone => "Time zone",
        }
    }
}

/// One reason a candidate talk cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalkValidationError {
    MissingField(TalkField),
    InvalidTimezone(String),
}

impl fmt::Display for TalkValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TalkValidationError::MissingField(field) => write!(f, "{} is required", field.label()),
            TalkValidationError::InvalidTimezone(tz) => {
                write!(f, "{} \"{tz}\" is not recognized", TalkField::Timezone.label())
            }
        }
    }
}

/// Validate a candidate talk against the recognized time zones.
///
/// Every rule runs; failures come back in field order (title, summary,
/// time zone). An empty result means the talk may be stored.
pub fn validate_talk(talk: &Talk, time_zones: &[String]) -> Vec<TalkValidationError> {
    let mut errors = vec![];

    if talk.title.trim().is_empty() {
        errors.push(TalkValidationError::MissingField(TalkField::Title));
    }
    if talk.summary.trim().is_empty() {
        errors.push(TalkValidationError::MissingField(TalkField::Summary));
    }

    if talk.timezone.trim().is_empty() {
        errors.push(TalkValidationError::MissingField(TalkField::Timezone));
    } else if !time_zones.iter().any(|tz| *tz == talk.timezone) {
        errors.push(TalkValidationError::InvalidTimezone(talk.timezone.clone()));
    }

    errors
}

/// Human readable messages, order preserved.
pub fn error_messages(errors: &[TalkValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}
