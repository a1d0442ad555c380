// src/types/mod.rs
//! Shared data types for the parsing pipeline and its consumers

pub mod analysis;
pub mod resume_data;
pub mod upload;

pub use analysis::{
    AtsAnalysis, AtsCompatibility, CategoryFeedback, CategoryScores, KeywordFeedback,
    SectionImprovements,
};
pub use resume_data::{
    PersonalInfo, ResumeData, ResumeMetadata, SectionName, SectionRecord, SupportedFormat,
};
pub use upload::UploadedFile;
