// src/analyze/personal.rs
//! Contact-field heuristics: name, email, phone, location, LinkedIn.

use crate::analyze::FieldExtractor;
use crate::types::PersonalInfo;
use crate::utils::collapse_whitespace;

/// Two-letter US state abbreviations, matched as plain substrings.
/// Known limitation: a code like "IN" also matches inside unrelated words;
/// the behavior is kept as-is.
const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

const MAJOR_CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
];

impl FieldExtractor {
    pub(crate) fn personal_info(&self, text: &str) -> PersonalInfo {
        let name = text
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .and_then(|l| self.clean_name(l));

        let email = self.email_re.find(text).map(|m| m.as_str().to_string());
        let phone = self.phone_re.find(text).map(|m| m.as_str().to_string());
        let linkedin = self.linkedin_re.find(text).map(|m| m.as_str().to_string());

        PersonalInfo {
            name,
            email,
            phone,
            location: extract_location(text),
            linkedin,
        }
    }

    /// Clean the candidate name line: digits go, anything that is not a
    /// letter, space, hyphen or apostrophe becomes a space, whitespace
    /// collapses. A result that still looks like an email or a phone
    /// number is discarded rather than misreported.
    fn clean_name(&self, line: &str) -> Option<String> {
        let no_digits: String = line.chars().filter(|c| !c.is_ascii_digit()).collect();
        let kept: String = no_digits
            .chars()
            .map(|c| {
                if c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'' {
                    c
                } else {
                    ' '
                }
            })
            .collect();
        let name = collapse_whitespace(&kept);

        if name.is_empty() || name.contains('@') || self.phone_like_re.is_match(&name) {
            None
        } else {
            Some(name)
        }
    }
}

/// First line containing a state abbreviation; failing that, first line
/// containing a major-city name.
fn extract_location(text: &str) -> Option<String> {
    for line in text.lines() {
        let clean = line.trim();
        if US_STATES.iter().any(|s| clean.contains(s)) {
            return Some(clean.to_string());
        }
    }
    for line in text.lines() {
        let clean = line.trim();
        if MAJOR_CITIES.iter().any(|c| clean.contains(c)) {
            return Some(clean.to_string());
        }
    }
    None
}
