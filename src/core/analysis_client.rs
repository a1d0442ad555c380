// src/core/analysis_client.rs
//! HTTP client for the external AI completion service.
//!
//! The service is a plain chat-completions endpoint: it gets the raw
//! résumé text wrapped in an ATS-analyst prompt and is asked to reply with
//! a JSON document matching [`AtsAnalysis`]. Replies are free text that
//! may wrap the JSON in prose, so parsing extracts the first embedded
//! object. When the service is unreachable or replies garbage, callers
//! fall back to [`AnalysisClient::fallback_analysis`].

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::types::{
    AtsAnalysis, AtsCompatibility, CategoryFeedback, CategoryScores, KeywordFeedback, ResumeData,
    SectionImprovements, SectionName,
};

const CHAT_COMPLETIONS_ENDPOINT: &str = "/v1/chat/completions";
const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.3;

pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl AnalysisClient {
    pub fn new(base_url: String, model: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            model,
        })
    }

    /// Ask the service for an ATS analysis of the parsed résumé.
    pub async fn analyze(&self, data: &ResumeData) -> Result<AtsAnalysis> {
        let url = format!("{}{}", self.base_url, CHAT_COMPLETIONS_ENDPOINT);
        let prompt = build_analysis_prompt(data);

        let payload = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        info!("Calling analysis service: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("Failed to call analysis service")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Analysis service returned status {}: {}", status, error_text);
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse completion response")?;

        let content = completion
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .unwrap_or_default();

        debug!("Analysis reply: {} chars", content.len());

        parse_analysis_response(content)
    }
}

/// ATS-analyst prompt with the résumé text and the reply contract inlined.
pub fn build_analysis_prompt(data: &ResumeData) -> String {
    format!(
        r#"You are an expert ATS (Applicant Tracking System) analyzer and career strategist. Analyze this resume and provide comprehensive feedback.

Resume Data:
{raw_text}

Please provide detailed analysis in the following JSON format:
{{
    "atsScore": number (0-100),
    "categories": {{
        "content": {{"score": number, "feedback": ["specific feedback points"], "suggestions": ["actionable suggestions"]}},
        "formatting": {{"score": number, "feedback": ["formatting issues"], "suggestions": ["formatting improvements"]}},
        "keywords": {{"score": number, "found": ["keywords found"], "missing": ["important keywords missing"], "suggestions": ["keyword additions"]}},
        "structure": {{"score": number, "feedback": ["structure issues"], "suggestions": ["structure improvements"]}},
        "tone": {{"score": number, "feedback": ["tone analysis"], "suggestions": ["tone improvements"]}}
    }},
    "strengths": ["key strengths identified"],
    "weaknesses": ["key weaknesses identified"],
    "improvements": {{
        "summary": ["summary improvements"],
        "experience": ["experience improvements"],
        "education": ["education improvements"],
        "skills": ["skills improvements"]
    }},
    "atsCompatibility": {{"score": number, "issues": ["ATS compatibility issues"], "fixes": ["how to fix ATS issues"]}}
}}

Focus on:
1. ATS readability and parsing
2. Keyword optimization for common job roles
3. Professional tone and language
4. Quantifiable achievements
5. Structure and formatting best practices
6. Action verb usage
7. Content completeness

Be specific, actionable, and professional in your feedback."#,
        raw_text = data.raw_text
    )
}

/// Pull the first embedded JSON object (first `{{` to last `}}`) out of a
/// free-text reply and deserialize it.
pub fn parse_analysis_response(text: &str) -> Result<AtsAnalysis> {
    let start = text.find('{');
    let end = text.rfind('}');

    match (start, end) {
        (Some(s), Some(e)) if e > s => serde_json::from_str(&text[s..=e])
            .context("Failed to parse analysis JSON from service reply"),
        _ => anyhow::bail!("No JSON object found in analysis reply"),
    }
}

/// Structure-based local analysis, used when the service is unavailable
/// or its reply cannot be parsed. Scores key off which canonical sections
/// the extractor found.
pub fn fallback_analysis(data: &ResumeData) -> AtsAnalysis {
    let has = |name: SectionName| {
        data.sections
            .iter()
            .any(|record| record.name == name && record.present)
    };

    let has_summary = has(SectionName::Summary);
    let has_experience = has(SectionName::Experience);
    let has_education = has(SectionName::Education);
    let has_skills = has(SectionName::Skills);

    let ats_score: u8 = if has_skills && has_summary && has_experience && has_education {
        85
    } else if has_experience && has_education {
        75
    } else {
        70
    };

    AtsAnalysis {
        ats_score,
        categories: CategoryScores {
            content: CategoryFeedback {
                score: if has_experience { 80 } else { 60 },
                feedback: vec![if has_experience {
                    "Good experience section".to_string()
                } else {
                    "Experience section missing".to_string()
                }],
                suggestions: vec![if has_experience {
                    "Add more details to experience".to_string()
                } else {
                    "Add experience section".to_string()
                }],
            },
            formatting: CategoryFeedback {
                score: 85,
                feedback: vec!["Standard formatting detected".to_string()],
                suggestions: vec![
                    "Use consistent fonts".to_string(),
                    "Ensure proper spacing".to_string(),
                ],
            },
            keywords: KeywordFeedback {
                score: if has_skills { 75 } else { 50 },
                found: if has_skills {
                    vec!["Basic skills detected".to_string()]
                } else {
                    vec![]
                },
                missing: vec![if has_skills {
                    "More specific keywords".to_string()
                } else {
                    "Skills section missing".to_string()
                }],
                suggestions: vec![if has_skills {
                    "Add industry-specific keywords".to_string()
                } else {
                    "Create skills section".to_string()
                }],
            },
            structure: CategoryFeedback {
                score: if has_experience && has_education { 90 } else { 70 },
                feedback: vec!["Basic structure present".to_string()],
                suggestions: vec![
                    "Add professional summary".to_string(),
                    "Organize sections logically".to_string(),
                ],
            },
            tone: CategoryFeedback {
                score: 75,
                feedback: vec!["Professional tone detected".to_string()],
                suggestions: vec![
                    "Use more active language".to_string(),
                    "Strengthen achievement statements".to_string(),
                ],
            },
        },
        strengths: vec![
            "Professional presentation".to_string(),
            "Clear contact information".to_string(),
        ],
        weaknesses: vec![if has_skills {
            "Could improve keyword usage".to_string()
        } else {
            "Missing skills section".to_string()
        }],
        improvements: SectionImprovements {
            summary: vec![if has_summary {
                "Make it more concise".to_string()
            } else {
                "Add professional summary".to_string()
            }],
            experience: vec![
                "Quantify achievements".to_string(),
                "Use action verbs".to_string(),
            ],
            education: vec![
                "Add graduation date".to_string(),
                "Include relevant coursework".to_string(),
            ],
            skills: vec![if has_skills {
                "Expand skills section".to_string()
            } else {
                "Create dedicated skills section".to_string()
            }],
        },
        ats_compatibility: AtsCompatibility {
            score: ats_score,
            issues: vec!["Limited keyword optimization".to_string()],
            fixes: vec![
                "Add more industry-specific terms".to_string(),
                "Improve section headers".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::FieldExtractor;

    #[test]
    fn test_prompt_embeds_resume_text() {
        let data = FieldExtractor::new().extract("Jane Doe\nExperience\nBuilt things");
        let prompt = build_analysis_prompt(&data);
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("atsScore"));
        assert!(prompt.contains("Applicant Tracking System"));
    }

    #[test]
    fn test_parse_reply_with_surrounding_prose() {
        let reply = r#"Here is the analysis you asked for:
{
    "atsScore": 82,
    "categories": {
        "content": {"score": 80},
        "formatting": {"score": 85},
        "keywords": {"score": 70, "found": [], "missing": [], "suggestions": []},
        "structure": {"score": 90},
        "tone": {"score": 75}
    },
    "strengths": ["clear layout"],
    "weaknesses": [],
    "improvements": {"summary": [], "experience": [], "education": [], "skills": []},
    "atsCompatibility": {"score": 82, "issues": [], "fixes": []}
}
Hope this helps!"#;

        let analysis = parse_analysis_response(reply).unwrap();
        assert_eq!(analysis.ats_score, 82);
        assert_eq!(analysis.categories.structure.score, 90);
        assert_eq!(analysis.strengths, vec!["clear layout".to_string()]);
    }

    #[test]
    fn test_parse_reply_without_json_fails() {
        assert!(parse_analysis_response("I cannot analyze this resume.").is_err());
    }

    #[test]
    fn test_fallback_score_tiers() {
        let extractor = FieldExtractor::new();

        let full = extractor.extract(
            "Jane\nSummary\ntext\nExperience\nwork text\nEducation\ndegree\nSkills\nrust",
        );
        assert_eq!(fallback_analysis(&full).ats_score, 85);

        let partial = extractor.extract("Jane\nExperience\nwork text\nEducation\ndegree");
        assert_eq!(fallback_analysis(&partial).ats_score, 75);

        let bare = extractor.extract("Jane\nnothing recognizable here at all");
        assert_eq!(fallback_analysis(&bare).ats_score, 70);
    }

    #[test]
    fn test_fallback_category_scores_track_sections() {
        let extractor = FieldExtractor::new();
        let bare = extractor.extract("Jane\nplain line");
        let analysis = fallback_analysis(&bare);

        assert_eq!(analysis.categories.content.score, 60);
        assert_eq!(analysis.categories.keywords.score, 50);
        assert_eq!(analysis.categories.structure.score, 70);
        assert_eq!(analysis.ats_compatibility.score, 70);
    }
}
