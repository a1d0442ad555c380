// src/types/analysis.rs
//! ATS analysis record returned by the AI completion service.
//!
//! Field names serialize in camelCase to match the JSON contract embedded
//! in the analysis prompt, so a well-formed service reply deserializes
//! directly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    pub ats_score: u8,
    pub categories: CategoryScores,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    pub improvements: SectionImprovements,
    pub ats_compatibility: AtsCompatibility,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScores {
    pub content: CategoryFeedback,
    pub formatting: CategoryFeedback,
    pub keywords: KeywordFeedback,
    pub structure: CategoryFeedback,
    pub tone: CategoryFeedback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryFeedback {
    pub score: u8,
    #[serde(default)]
    pub feedback: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordFeedback {
    pub score: u8,
    #[serde(default)]
    pub found: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionImprovements {
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsCompatibility {
    pub score: u8,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub fixes: Vec<String>,
}
