//! SmartCV HTML renderer
//!
//! Turns a loaded [`CvData`] into a single static HTML page and writes it as
//! `CV_<name>.html`. Assembly is pure string building over a [`Page`] owned by
//! the call, so repeated renders in one process never share output.
//!
//! ```text
//! CvData → render_to_string() → String
//!        → render()           → <output_dir>/CV_<name>.html
//! ```

pub mod config;
pub mod escape;
pub mod html;

pub use config::{PageConfig, PdfOptions, RenderOptions};
pub use escape::Escaping;
pub use html::Page;

use smartcv_data::{CvData, PersonalInfo};
use std::path::{Path, PathBuf};

/// Rendering or writing failure.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("missing required field `{field}` in personal_info")]
    MissingField { field: &'static str },

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File name for a CV: `CV_` + name with spaces replaced by `_` + `.html`.
pub fn output_file_name(info: &PersonalInfo) -> Result<String, RenderError> {
    let name = info
        .name
        .as_deref()
        .ok_or(RenderError::MissingField { field: "name" })?;
    Ok(format!("CV_{}.html", name.replace(' ', "_")))
}

/// Assemble the complete page without touching the file system.
pub fn render_to_string(cv: &CvData, css_path: &str, options: &RenderOptions) -> String {
    let mut page = Page::new(options.escaping);

    html::preamble(&mut page, &options.page.encoding, css_path);
    html::profile(&mut page, cv.personal_info());
    html::sidebar(&mut page, &cv.skills(), &cv.hobbies());
    html::work_experience(&mut page, cv.work_experience());
    html::education(&mut page, cv.education());
    html::personal_projects(&mut page, cv.personal_projects());
    html::social_links(&mut page, &cv.social_links());
    html::closing(&mut page);

    log::debug!(
        "rendered {} job(s), {} education entr(ies), {} project(s)",
        cv.work_experience().len(),
        cv.education().len(),
        cv.personal_projects().len()
    );

    page.into_string()
}

/// Render `cv` and write it into `output_dir`, replacing any existing file.
///
/// The directory must already exist. Returns the path of the written file.
pub fn render(
    cv: &CvData,
    css_path: &str,
    output_dir: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<PathBuf, RenderError> {
    let file_name = output_file_name(cv.personal_info())?;
    let path = output_dir.as_ref().join(file_name);

    let html = render_to_string(cv, css_path, options);
    std::fs::write(&path, html).map_err(|source| RenderError::Io {
        path: path.clone(),
        source,
    })?;

    log::info!("wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cv(source: &str) -> CvData {
        CvData::from_yaml_str(source).unwrap()
    }

    const MINIMAL: &str = "cv:\n  personal_info:\n    name: A B\n    job: Engineer\n";

    // =========================================================================
    // File naming
    // =========================================================================

    #[test]
    fn test_file_name_replaces_spaces() {
        let info = PersonalInfo {
            name: Some("Jane Doe".into()),
            ..PersonalInfo::default()
        };
        assert_eq!(output_file_name(&info).unwrap(), "CV_Jane_Doe.html");
    }

    #[test]
    fn test_file_name_every_space() {
        let info = PersonalInfo {
            name: Some("Jean  Paul Sartre".into()),
            ..PersonalInfo::default()
        };
        assert_eq!(output_file_name(&info).unwrap(), "CV_Jean__Paul_Sartre.html");
    }

    #[test]
    fn test_file_name_requires_name() {
        let err = output_file_name(&PersonalInfo::default()).unwrap_err();
        assert!(matches!(err, RenderError::MissingField { field: "name" }));
    }

    // =========================================================================
    // Full documents
    // =========================================================================

    #[test]
    fn test_minimal_document() {
        let html = render_to_string(&cv(MINIMAL), "template.css", &RenderOptions::default());
        let expected = "\
<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
  <title>SmartCVBuilder Generation</title>
  <link rel=\"stylesheet\" href=\"template.css\">
</head>
<body>
<section>
  <header>
    <div class=\"profile\">
      <div class=\"profile-info\">
        <h1>A B</h1>
        <p>Engineer</p>
      </div>
    </div>
  </header>
  <div class=\"container\">
    <aside class=\"sidebar\">
    </aside>
    <main class=\"main-content\">
      <section class=\"experience\">
        <h2>Experience</h2>
      </section>
      <section class=\"education\">
        <h2>Education</h2>
      </section>
      <section class=\"projects-achievements\">
        <h2>Projects &amp; Achievements</h2>
      </section>
    </main>
  </div>
</section>
</body>
</html>
";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_section_order() {
        let source = "\
cv:
  personal_info:
    name: Jane Doe
    job: Engineer
  personal_projects:
    - project_title: P
  education:
    - degree: D
  work_experience:
    - job_title: J
  hobbies:
    - hobbie: H
  skills:
    - skill: S
";
        let html = render_to_string(&cv(source), "s.css", &RenderOptions::default());
        let markers = [
            "<link rel=\"stylesheet\"",
            "<h1>Jane Doe</h1>",
            "<aside class=\"sidebar\">",
            "<li>S</li>",
            "<li>H</li>",
            "<main class=\"main-content\">",
            "<h2>Experience</h2>",
            "<h2>Education</h2>",
            "<h2>Projects &amp; Achievements</h2>",
            "</main>",
            "</html>",
        ];
        let positions: Vec<usize> = markers.iter().map(|m| html.find(m).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_null_skill_and_blank_skill_filtered() {
        let source = "\
cv:
  personal_info:
    name: A
  skills:
    - skill: Go
    - skill: \"\"
    - skill:
    - skill: Rust
";
        let html = render_to_string(&cv(source), "s.css", &RenderOptions::default());
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("<li>Go</li>"));
        assert!(html.contains("<li>Rust</li>"));
        assert!(!html.contains("<h2>Hobbies</h2>"));
    }

    #[test]
    fn test_social_links_not_rendered() {
        let source = "cv:\n  personal_info:\n    name: A\n  social_links:\n    - url: https://example.com/me\n";
        let html = render_to_string(&cv(source), "s.css", &RenderOptions::default());
        assert!(!html.contains("example.com/me"));
    }

    #[test]
    fn test_raw_mode_keeps_markup_in_values() {
        let source = "cv:\n  personal_info:\n    name: A\n    job: <em>Lead</em>\n";
        let escaped = render_to_string(&cv(source), "s.css", &RenderOptions::default());
        let raw = render_to_string(
            &cv(source),
            "s.css",
            &RenderOptions::with_escaping(Escaping::Raw),
        );
        assert!(escaped.contains("<p>&lt;em&gt;Lead&lt;/em&gt;</p>"));
        assert!(raw.contains("<p><em>Lead</em></p>"));
    }

    #[test]
    fn test_css_path_used_verbatim() {
        let html = render_to_string(
            &cv(MINIMAL),
            "../styles/does-not-exist.css",
            &RenderOptions::default(),
        );
        assert!(html.contains("href=\"../styles/does-not-exist.css\""));
    }

    // =========================================================================
    // Writing
    // =========================================================================

    #[test]
    fn test_render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = render(&cv(MINIMAL), "template.css", dir.path(), &RenderOptions::default())
            .unwrap();
        assert_eq!(path, dir.path().join("CV_A_B.html"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            render_to_string(&cv(MINIMAL), "template.css", &RenderOptions::default())
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let doc = cv(MINIMAL);
        let opts = RenderOptions::default();
        let first = render(&doc, "t.css", dir.path(), &opts).unwrap();
        let first_bytes = std::fs::read(&first).unwrap();
        let second = render(&doc, "t.css", dir.path(), &opts).unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), first_bytes);
    }

    #[test]
    fn test_render_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("CV_A_B.html");
        std::fs::write(&target, "stale").unwrap();
        render(&cv(MINIMAL), "t.css", dir.path(), &RenderOptions::default()).unwrap();
        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_render_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = render(&cv(MINIMAL), "t.css", &missing, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
        assert!(!missing.exists());
    }

    #[test]
    fn test_render_missing_name_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = render(
            &cv("cv:\n  personal_info:\n    job: Engineer\n"),
            "t.css",
            dir.path(),
            &RenderOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::MissingField { field: "name" }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
