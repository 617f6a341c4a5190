//! SmartCV data accessor
//!
//! Loads a résumé from a YAML file once and exposes one typed accessor per CV
//! section. Absent sections come back empty instead of failing, so the renderer
//! can treat every document the same way.
//!
//! # Example
//!
//! ```
//! use smartcv_data::CvData;
//!
//! let cv = CvData::from_yaml_str("cv:\n  skills:\n    - skill: Rust\n").unwrap();
//! assert_eq!(cv.skills(), vec!["Rust"]);
//! assert!(cv.work_experience().is_empty());
//! ```

pub mod model;
pub mod scalar;

pub use model::{
    CvSections, Education, Hobby, PersonalInfo, PersonalProject, ProjectRef, ResumeDocument,
    Skill, SocialLink, WorkExperience,
};

use std::path::{Path, PathBuf};

/// Failure to obtain a document from disk or from YAML text.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CV document: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
}

/// A loaded CV document with read-only section accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvData {
    document: ResumeDocument,
}

impl CvData {
    /// Read and parse the YAML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cv = Self::from_yaml_str(&source)?;
        log::debug!("loaded CV document from {}", path.display());
        Ok(cv)
    }

    /// Parse YAML text that is already in memory.
    pub fn from_yaml_str(source: &str) -> Result<Self, LoadError> {
        // An empty file parses as null; go through Value so it becomes an empty document.
        let value: serde_yaml::Value = serde_yaml::from_str(source)?;
        let document = if value.is_null() {
            ResumeDocument::default()
        } else {
            serde_yaml::from_value(value)?
        };
        Ok(Self { document })
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.document.cv.personal_info
    }

    pub fn work_experience(&self) -> &[WorkExperience] {
        &self.document.cv.work_experience
    }

    pub fn education(&self) -> &[Education] {
        &self.document.cv.education
    }

    pub fn personal_projects(&self) -> &[PersonalProject] {
        &self.document.cv.personal_projects
    }

    /// Skill names in input order. Entries without a `skill` value are dropped.
    pub fn skills(&self) -> Vec<&str> {
        self.document
            .cv
            .skills
            .iter()
            .filter_map(|s| s.skill.as_deref())
            .collect()
    }

    /// Hobby names in input order, read from the `hobbie` key.
    pub fn hobbies(&self) -> Vec<&str> {
        self.document
            .cv
            .hobbies
            .iter()
            .filter_map(|h| h.hobbie.as_deref())
            .collect()
    }

    pub fn social_links(&self) -> Vec<&str> {
        self.document
            .cv
            .social_links
            .iter()
            .filter_map(|l| l.url.as_deref())
            .collect()
    }
}
