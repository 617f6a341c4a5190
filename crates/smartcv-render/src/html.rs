//! HTML section builders.
//!
//! Each builder appends one section of the CV to a [`Page`]. Sections must be
//! emitted in document order: preamble, profile, sidebar, experience,
//! education, projects, social links, closing. The sidebar opens the
//! `main-content` element and [`closing`] closes it.

use crate::escape::Escaping;
use smartcv_data::{Education, PersonalInfo, PersonalProject, WorkExperience};
use std::borrow::Cow;

pub const TITLE: &str = "SmartCVBuilder Generation";

pub const DEFAULT_JOB_TITLE: &str = "Job Title";
pub const DEFAULT_COMPANY_NAME: &str = "Company Name";
pub const DEFAULT_START_DATE: &str = "Start Date";
pub const DEFAULT_END_DATE: &str = "End Date";
pub const DEFAULT_JOB_DESCRIPTION: &str = "Description of the role.";
pub const DEFAULT_PROJECT_NAME: &str = "Project Name";
pub const DEFAULT_CLIENT: &str = "Client";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "Description of the project.";
pub const DEFAULT_DEGREE: &str = "Degree";
pub const DEFAULT_UNIVERSITY_NAME: &str = "University Name";
pub const DEFAULT_STUDY_DESCRIPTION: &str = "Description of studies.";
pub const DEFAULT_PROJECT_TITLE: &str = "Project Title";

/// Markup accumulated by a single render call.
#[derive(Debug, Clone, Default)]
pub struct Page {
    html: String,
    escaping: Escaping,
}

impl Page {
    pub fn new(escaping: Escaping) -> Self {
        Self {
            html: String::new(),
            escaping,
        }
    }

    /// Append one indented line of markup.
    pub fn line(&mut self, depth: usize, markup: &str) {
        self.html.push_str(&"  ".repeat(depth));
        self.html.push_str(markup);
        self.html.push('\n');
    }

    /// A field value prepared for interpolation.
    pub fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        self.escaping.apply(value)
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

/// Doctype, head and the opening `<body>`.
pub fn preamble(page: &mut Page, encoding: &str, css_path: &str) {
    let css = page.text(css_path).into_owned();
    page.line(0, "<!DOCTYPE html>");
    page.line(0, "<html lang=\"en\">");
    page.line(0, "<head>");
    page.line(1, &format!("<meta charset=\"{encoding}\">"));
    page.line(
        1,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
    );
    page.line(1, &format!("<title>{TITLE}</title>"));
    page.line(1, &format!("<link rel=\"stylesheet\" href=\"{css}\">"));
    page.line(0, "</head>");
    page.line(0, "<body>");
}

/// Contact segment of the profile line: mailto link and phone, `" | "`-joined.
pub fn contact_line(page: &Page, info: &PersonalInfo) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(email) = present(&info.email) {
        let email = page.text(email);
        parts.push(format!("<a href=\"mailto:{email}\">{email}</a>"));
    }
    if let Some(phone) = present(&info.phone_number) {
        parts.push(page.text(phone).into_owned());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" | "))
    }
}

/// Opens the wrapping `<section>` and writes the header with photo, name, job and contacts.
pub fn profile(page: &mut Page, info: &PersonalInfo) {
    let name = page.text(info.name.as_deref().unwrap_or_default()).into_owned();
    let job = page.text(info.job.as_deref().unwrap_or_default()).into_owned();
    let contact = contact_line(page, info);

    page.line(0, "<section>");
    page.line(1, "<header>");
    page.line(2, "<div class=\"profile\">");
    if let Some(photo) = present(&info.photo_url) {
        let photo = page.text(photo).into_owned();
        page.line(3, "<div class=\"profile-photo\">");
        page.line(
            4,
            &format!("<img src=\"{photo}\" alt=\"{name}\" class=\"profile-picture\">"),
        );
        page.line(3, "</div>");
    }
    page.line(3, "<div class=\"profile-info\">");
    page.line(4, &format!("<h1>{name}</h1>"));
    match contact {
        Some(contact) => page.line(4, &format!("<p>{job} | {contact}</p>")),
        None => page.line(4, &format!("<p>{job}</p>")),
    }
    page.line(3, "</div>");
    page.line(2, "</div>");
    page.line(1, "</header>");
}

/// Opens the two-column container, writes the sidebar and opens `main-content`.
pub fn sidebar(page: &mut Page, skills: &[&str], hobbies: &[&str]) {
    page.line(1, "<div class=\"container\">");
    page.line(2, "<aside class=\"sidebar\">");
    item_list(page, "skills", "Skills", skills);
    item_list(page, "hobbies", "Hobbies", hobbies);
    page.line(2, "</aside>");
    page.line(2, "<main class=\"main-content\">");
}

/// A headed `<ul>`, skipped entirely when no entry has text.
fn item_list(page: &mut Page, class: &str, heading: &str, entries: &[&str]) {
    let items: Vec<&str> = entries.iter().copied().filter(|e| !e.is_empty()).collect();
    if items.is_empty() {
        return;
    }
    page.line(3, &format!("<section class=\"{class}\">"));
    page.line(4, &format!("<h2>{heading}</h2>"));
    page.line(4, "<ul>");
    for item in items {
        let item = page.text(item).into_owned();
        page.line(5, &format!("<li>{item}</li>"));
    }
    page.line(4, "</ul>");
    page.line(3, "</section>");
}

pub fn work_experience(page: &mut Page, jobs: &[WorkExperience]) {
    page.line(3, "<section class=\"experience\">");
    page.line(4, "<h2>Experience</h2>");
    for job in jobs {
        let title = page.text(or_default(&job.job_title, DEFAULT_JOB_TITLE)).into_owned();
        let company = page
            .text(or_default(&job.company_name, DEFAULT_COMPANY_NAME))
            .into_owned();
        let start = page
            .text(or_default(&job.employment_dates_start, DEFAULT_START_DATE))
            .into_owned();
        let end = page
            .text(or_default(&job.employment_dates_end, DEFAULT_END_DATE))
            .into_owned();
        let description = page
            .text(or_default(&job.job_description, DEFAULT_JOB_DESCRIPTION))
            .into_owned();

        page.line(4, "<article>");
        page.line(
            5,
            &format!("<h3>{title} - <span class=\"company\">{company}</span></h3>"),
        );
        page.line(5, &format!("<p class=\"subdetails\">{start} - {end}</p>"));
        page.line(5, &format!("<p>{description}</p>"));
        for project in &job.projects {
            let name = page
                .text(or_default(&project.project_name, DEFAULT_PROJECT_NAME))
                .into_owned();
            let client = page.text(or_default(&project.client, DEFAULT_CLIENT)).into_owned();
            let description = page
                .text(or_default(
                    &project.project_description,
                    DEFAULT_PROJECT_DESCRIPTION,
                ))
                .into_owned();
            page.line(5, "<div class=\"project\">");
            page.line(6, &format!("<h4>{name}</h4>"));
            page.line(6, &format!("<p><strong>Client:</strong> {client}</p>"));
            page.line(6, &format!("<p>{description}</p>"));
            page.line(5, "</div>");
        }
        page.line(4, "</article>");
    }
    page.line(3, "</section>");
}

pub fn education(page: &mut Page, entries: &[Education]) {
    page.line(3, "<section class=\"education\">");
    page.line(4, "<h2>Education</h2>");
    for entry in entries {
        let degree = page.text(or_default(&entry.degree, DEFAULT_DEGREE)).into_owned();
        let university = page
            .text(or_default(&entry.university_name, DEFAULT_UNIVERSITY_NAME))
            .into_owned();
        let start = page
            .text(or_default(&entry.attendance_dates_start, DEFAULT_START_DATE))
            .into_owned();
        let end = page
            .text(or_default(&entry.attendance_dates_end, DEFAULT_END_DATE))
            .into_owned();
        let description = page
            .text(or_default(&entry.study_description, DEFAULT_STUDY_DESCRIPTION))
            .into_owned();

        page.line(4, "<article>");
        page.line(5, &format!("<h3>{degree}</h3>"));
        page.line(
            5,
            &format!("<p class=\"subdetails\">{university} - {start} - {end}</p>"),
        );
        page.line(5, &format!("<p>{description}</p>"));
        page.line(4, "</article>");
    }
    page.line(3, "</section>");
}

pub fn personal_projects(page: &mut Page, projects: &[PersonalProject]) {
    page.line(3, "<section class=\"projects-achievements\">");
    page.line(4, "<h2>Projects &amp; Achievements</h2>");
    for project in projects {
        let title = page
            .text(or_default(&project.project_title, DEFAULT_PROJECT_TITLE))
            .into_owned();
        let description = page
            .text(or_default(
                &project.project_description,
                DEFAULT_PROJECT_DESCRIPTION,
            ))
            .into_owned();

        page.line(4, "<article>");
        page.line(5, &format!("<h3>{title}</h3>"));
        page.line(5, &format!("<p>{description}</p>"));
        if let Some(link) = present(&project.project_link) {
            let link = page.text(link).into_owned();
            page.line(5, &format!("<p><a href=\"{link}\">View Project</a></p>"));
        }
        page.line(4, "</article>");
    }
    page.line(3, "</section>");
}

/// Social links are loaded but not part of the layout yet; writes nothing.
pub fn social_links(_page: &mut Page, links: &[&str]) {
    log::debug!("skipping {} social link(s): section has no markup", links.len());
}

/// Closes `main-content`, the container, the profile section, body and html.
pub fn closing(page: &mut Page) {
    page.line(2, "</main>");
    page.line(1, "</div>");
    page.line(0, "</section>");
    page.line(0, "</body>");
    page.line(0, "</html>");
}
