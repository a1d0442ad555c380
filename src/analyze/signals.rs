// src/analyze/signals.rs
//! Auxiliary scans: competency keywords and a years-of-experience estimate.

use chrono::{Datelike, Utc};

use crate::analyze::FieldExtractor;

/// Fixed competency vocabulary for keyword tagging.
const COMMON_KEYWORDS: &[&str] = &[
    "leadership",
    "management",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
    "data analysis",
    "customer service",
    "sales",
    "marketing",
    "development",
    "programming",
    "design",
    "research",
    "analytical",
    "strategic",
    "planning",
    "coordination",
    "training",
    "mentoring",
    "budgeting",
    "forecasting",
    "reporting",
    "presentation",
];

const MAX_ESTIMATED_YEARS: i32 = 50;

impl FieldExtractor {
    /// Which vocabulary entries appear anywhere in the text.
    pub fn keyword_hits(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        COMMON_KEYWORDS
            .iter()
            .filter(|k| lower.contains(*k))
            .map(|k| k.to_string())
            .collect()
    }

    /// Estimate years of experience.
    ///
    /// An explicit "N years of experience" phrase wins outright. Otherwise
    /// the estimate is the sum of `end - start` over every
    /// `YYYY-YYYY|present` range in the text, capped at 50 years, with
    /// "present"/"current" standing for the current calendar year.
    pub fn years_of_experience(&self, text: &str) -> u32 {
        if let Some(caps) = self.years_re.captures(text) {
            if let Ok(years) = caps[1].parse::<u32>() {
                return years;
            }
        }

        let current_year = Utc::now().year();
        let mut total: i32 = 0;
        let mut any = false;

        for caps in self.range_re.captures_iter(text) {
            let start: i32 = match caps[1].parse() {
                Ok(y) => y,
                Err(_) => continue,
            };
            let end_token = caps[2].to_lowercase();
            let end = if end_token == "present" || end_token == "current" {
                current_year
            } else {
                match end_token.parse() {
                    Ok(y) => y,
                    Err(_) => continue,
                }
            };
            total += (end - start).max(0);
            any = true;
        }

        if any {
            total.min(MAX_ESTIMATED_YEARS) as u32
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::FieldExtractor;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new()
    }

    #[test]
    fn test_keyword_hits() {
        let hits = extractor().keyword_hits(
            "Led project management and data analysis efforts; strong Communication.",
        );
        assert!(hits.contains(&"project management".to_string()));
        assert!(hits.contains(&"data analysis".to_string()));
        assert!(hits.contains(&"communication".to_string()));
        assert!(!hits.contains(&"budgeting".to_string()));
    }

    #[test]
    fn test_explicit_years_phrase_wins() {
        let e = extractor();
        assert_eq!(e.years_of_experience("8 years of experience in SRE"), 8);
        assert_eq!(e.years_of_experience("12 yrs experience shipping"), 12);
        // The explicit phrase takes precedence over any date ranges
        assert_eq!(
            e.years_of_experience("3 years of experience\n2010-2020 Acme"),
            3
        );
    }

    #[test]
    fn test_date_range_fallback_sums_ranges() {
        let text = "Acme 2010-2014\nGlobex 2015-2020";
        assert_eq!(extractor().years_of_experience(text), 9);
    }

    #[test]
    fn test_present_means_current_year() {
        let current = Utc::now().year();
        let text = format!("Acme {}-present", current - 4);
        assert_eq!(extractor().years_of_experience(&text), 4);

        let text = format!("Acme {} - Current", current - 2);
        assert_eq!(extractor().years_of_experience(&text), 2);
    }

    #[test]
    fn test_reversed_range_contributes_zero() {
        assert_eq!(extractor().years_of_experience("typo 2020-2010"), 0);
    }

    #[test]
    fn test_sum_is_capped_at_fifty() {
        let text = "1950-1990 first career\n1960-2000 second career";
        assert_eq!(extractor().years_of_experience(text), 50);
    }

    #[test]
    fn test_no_signal_is_zero() {
        assert_eq!(extractor().years_of_experience("no dates here"), 0);
    }
}
