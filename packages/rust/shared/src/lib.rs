//! Shared types, error model, and configuration for the curriculum tools.
//!
//! This crate is the foundation depended on by the other curriculum crates.
//! It provides:
//! - [`CurriculumError`] — the unified error type
//! - Domain types ([`QualificationKey`], [`SubjectKey`], [`ContentEntry`])
//! - Configuration ([`AppConfig`], [`SiteConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ExportConfig, SiteConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from, parse_config,
};
pub use error::{CurriculumError, Result};
pub use types::{
    Assessment, AssessmentCard, CURRENT_SCHEMA_VERSION, ContentColumn, ContentEntry,
    CourseContent, Differentiator, Differentiators, ExamBoardCard, ExamBoards, Hero, KeyBadge,
    Overview, OverviewCard, Qualification, QualificationKey, Seo, Subject, SubjectKey, Success,
    Testimonial,
};
