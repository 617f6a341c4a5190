//! Document model for a SmartCV YAML file.
//!
//! Every section is optional. A missing key and an explicit `null` both decode
//! to the section's empty default, so accessors never have to branch on shape.

use crate::scalar::{nullable, nullable_seq, optional_text};
use serde::Deserialize;

/// Root of a CV file: everything lives under the `cv` key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResumeDocument {
    #[serde(default, deserialize_with = "nullable")]
    pub cv: CvSections,
}

/// The named sections below `cv`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CvSections {
    #[serde(default, deserialize_with = "nullable")]
    pub personal_info: PersonalInfo,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub personal_projects: Vec<PersonalProject>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub skills: Vec<Skill>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub hobbies: Vec<Hobby>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub social_links: Vec<SocialLink>,
}

/// Identity and contact details shown in the profile header.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PersonalInfo {
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub job: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub photo_url: Option<String>,
}

/// One position in the work experience section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkExperience {
    #[serde(default, deserialize_with = "optional_text")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub employment_dates_start: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub employment_dates_end: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub job_description: Option<String>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub projects: Vec<ProjectRef>,
}

/// A client project nested under a work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectRef {
    #[serde(default, deserialize_with = "optional_text")]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub client: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub project_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "optional_text")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub university_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub attendance_dates_start: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub attendance_dates_end: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub study_description: Option<String>,
}

/// An entry of the personal projects section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PersonalProject {
    #[serde(default, deserialize_with = "optional_text")]
    pub project_title: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub project_description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub project_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "optional_text")]
    pub skill: Option<String>,
}

/// A hobby. The key is spelled `hobbie` in existing CV files and must stay so.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Hobby {
    #[serde(default, deserialize_with = "optional_text")]
    pub hobbie: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "optional_text")]
    pub url: Option<String>,
}
