// src/analyze/sections.rs
//! Section boundary and presence heuristics.
//!
//! Two deliberately independent mechanisms live here. Body extraction runs
//! a boundary scan with per-section synonym lists; presence identification
//! runs a plain existence scan with shorter lists. They can disagree on
//! whether a section "exists", and both results are reported.

use crate::types::{SectionName, SectionRecord};

pub(crate) const SUMMARY_KEYWORDS: &[&str] = &[
    "summary",
    "objective",
    "profile",
    "overview",
    "professional summary",
    "career summary",
    "executive summary",
    "career objective",
    "professional profile",
];

pub(crate) const EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "work",
    "employment",
    "career",
    "professional experience",
    "work experience",
    "work history",
    "professional background",
];

pub(crate) const EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "academic",
    "university",
    "college",
    "school",
    "academic background",
    "educational background",
    "qualifications",
];

pub(crate) const SKILLS_KEYWORDS: &[&str] = &[
    "skills",
    "technical",
    "competencies",
    "abilities",
    "expertise",
    "technical skills",
    "core competencies",
    "key skills",
    "skill set",
];

/// Master list used to find where the current section ends: the first later
/// line matching any of these (that is not one of the current section's own
/// keywords) closes the section.
const MAJOR_SECTION_KEYWORDS: &[&str] = &[
    "experience",
    "work",
    "employment",
    "education",
    "academic",
    "skills",
    "technical",
    "competencies",
    "summary",
    "objective",
    "profile",
    "projects",
    "certifications",
    "awards",
    "interests",
    "references",
    "activities",
    "leadership",
    "volunteer",
];

/// Shorter per-taxonomy lists for the presence scan.
fn presence_keywords(name: SectionName) -> &'static [&'static str] {
    match name {
        SectionName::Summary => &["summary", "objective", "profile", "overview"],
        SectionName::Experience => &["experience", "work", "employment", "career"],
        SectionName::Education => &["education", "academic", "university", "college"],
        SectionName::Skills => &["skills", "technical", "competencies", "abilities"],
        SectionName::Projects => &["projects", "portfolio", "work samples"],
        SectionName::Certifications => &["certifications", "certificates", "licenses"],
        SectionName::Awards => &["awards", "honors", "recognition"],
        SectionName::Leadership => &["leadership", "activities", "volunteer"],
        SectionName::References => &["references", "referees"],
    }
}

/// A line matches a keyword if the trimmed, lower-cased line equals it,
/// contains it as a substring, or contains it as a whole word.
fn line_matches_keyword(line: &str, keyword: &str) -> bool {
    line == keyword || line.contains(keyword) || matches_whole_word(line, keyword)
}

fn matches_whole_word(line: &str, keyword: &str) -> bool {
    line.match_indices(keyword).any(|(idx, _)| {
        let bytes = line.as_bytes();
        let before_ok = idx == 0 || !is_word_byte(bytes[idx - 1]);
        let end = idx + keyword.len();
        let after_ok = end >= bytes.len() || !is_word_byte(bytes[end]);
        before_ok && after_ok
    })
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Extract the body of the section announced by `keywords`.
///
/// The first matching line starts the section. Scanning resumes on the
/// next line: the first line that matches a master-list keyword without
/// containing any current-section keyword ends it (exclusive); otherwise
/// the section runs to the end of the text. The header line is dropped
/// only when it contains one of the section's own keywords.
pub(crate) fn extract_section(text: &str, keywords: &[&str]) -> String {
    let lines: Vec<&str> = text.lines().collect();

    let start = lines.iter().position(|raw| {
        let line = raw.trim().to_lowercase();
        keywords.iter().any(|k| line_matches_keyword(&line, k))
    });
    let Some(start) = start else {
        return String::new();
    };

    let mut end = lines.len();
    for (i, raw) in lines.iter().enumerate().skip(start + 1) {
        let line = raw.trim().to_lowercase();
        if keywords.iter().any(|k| line.contains(k)) {
            continue;
        }
        if MAJOR_SECTION_KEYWORDS
            .iter()
            .any(|s| line == *s || line.contains(s))
        {
            end = i;
            break;
        }
    }

    let section = &lines[start..end];
    let header = section[0].trim().to_lowercase();
    let body = if keywords.iter().any(|k| header.contains(k)) {
        &section[1..]
    } else {
        section
    };

    body.join("\n").trim().to_string()
}

/// Existence scan over all nine taxonomy entries, reported in canonical
/// order regardless of where (or whether) each section appears in the
/// document.
pub(crate) fn identify_sections(text: &str) -> Vec<SectionRecord> {
    let lines: Vec<String> = text
        .lines()
        .map(|l| l.trim().to_lowercase())
        .collect();

    SectionName::ALL
        .iter()
        .map(|&name| {
            let matched: Vec<String> = presence_keywords(name)
                .iter()
                .filter(|&&k| lines.iter().any(|line| line == k || line.contains(k)))
                .map(|&k| k.to_string())
                .collect();
            SectionRecord {
                name,
                present: !matched.is_empty(),
                matched_keywords: matched,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "John Smith\n\
        Experience\n\
        Built distributed systems at Acme\n\
        Led a team of four\n\
        Education\n\
        BS Computer Science, State University\n\
        Skills\n\
        Rust, SQL";

    #[test]
    fn test_section_ends_at_next_header() {
        let body = extract_section(SAMPLE, EXPERIENCE_KEYWORDS);
        assert!(body.contains("Built distributed systems at Acme"));
        assert!(body.contains("Led a team of four"));
        assert!(!body.contains("Education"));
        assert!(!body.contains("BS Computer Science"));
    }

    #[test]
    fn test_header_line_is_stripped() {
        let body = extract_section(SAMPLE, EXPERIENCE_KEYWORDS);
        assert!(!body.starts_with("Experience"));
    }

    #[test]
    fn test_last_section_runs_to_end() {
        let body = extract_section(SAMPLE, SKILLS_KEYWORDS);
        assert_eq!(body, "Rust, SQL");
    }

    #[test]
    fn test_absent_section_is_empty() {
        let body = extract_section("just a single line", SUMMARY_KEYWORDS);
        assert_eq!(body, "");
    }

    #[test]
    fn test_lines_with_current_keyword_do_not_close_section() {
        let text = "Experience\n\
            Work on search infrastructure\n\
            More work on storage\n\
            Education\n\
            BS";
        // "work" is an experience keyword, so those lines stay inside even
        // though "work" is also on the master list
        let body = extract_section(text, EXPERIENCE_KEYWORDS);
        assert!(body.contains("search infrastructure"));
        assert!(body.contains("More work on storage"));
        assert!(!body.contains("BS"));
    }

    #[test]
    fn test_presence_scan_reports_all_nine_in_order() {
        let records = identify_sections(SAMPLE);
        assert_eq!(records.len(), 9);
        assert_eq!(records[0].name, SectionName::Summary);
        assert_eq!(records[8].name, SectionName::References);
    }

    #[test]
    fn test_presence_flags() {
        let records = identify_sections(SAMPLE);
        let get = |name: SectionName| records.iter().find(|r| r.name == name).unwrap();

        assert!(get(SectionName::Experience).present);
        assert!(get(SectionName::Education).present);
        assert!(get(SectionName::Skills).present);
        assert!(!get(SectionName::References).present);
        assert!(get(SectionName::Experience)
            .matched_keywords
            .contains(&"experience".to_string()));
    }

    #[test]
    fn test_presence_and_body_scans_can_disagree() {
        // "career" marks Experience present, but it is also a body-scan
        // keyword whose header line gets stripped, leaving an empty body
        // when nothing follows.
        let text = "career";
        let records = identify_sections(text);
        let experience = records
            .iter()
            .find(|r| r.name == SectionName::Experience)
            .unwrap();
        assert!(experience.present);
        assert_eq!(extract_section(text, EXPERIENCE_KEYWORDS), "");
    }

    #[test]
    fn test_substring_matching_is_intentionally_loose() {
        // "coursework" contains "work": the presence scan accepts it.
        let records = identify_sections("Relevant coursework listed below");
        let experience = records
            .iter()
            .find(|r| r.name == SectionName::Experience)
            .unwrap();
        assert!(experience.present);
    }

    #[test]
    fn test_whole_word_matching() {
        assert!(matches_whole_word("work history", "work"));
        assert!(!matches_whole_word("network history", "work"));
        assert!(matches_whole_word("skills: rust", "skills"));
    }
}
