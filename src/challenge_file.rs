//! Challenge file generator.
//!
//! Renders a fixed header (recruit, challenge, language, difficulty, date,
//! mission briefing) followed by a per-language boilerplate body and writes it
//! to `{output_dir}/{sanitized_title}_{YYYYMMDD_HHMMSS}{ext}`.
//!
//! Two calls for the same title within the same second resolve to the same
//! path; the later write replaces the earlier file.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::{info, instrument};

use crate::resources::{Category, ResourceStore};
use crate::util::{render_template, sanitize_file_stem};

pub const HEADER_TITLE: &str = "TUX CODE BOOT CAMP - CHALLENGE FILE";
pub const BRIEFING_MARKER: &str = "MISSION BRIEFING:";

const FALLBACK_EXTENSION: &str = ".txt";
const FALLBACK_COMMENT: &str = "#";
const FALLBACK_BRIEFING: &str = "Complete the coding challenge";
const RULE_WIDTH: usize = 70;

#[derive(Clone, Copy, Debug)]
pub struct ChallengeRequest<'a> {
  pub language: &'a str,
  pub title: &'a str,
  pub description: &'a str,
  pub difficulty: &'a str,
  pub learner: &'a str,
}

/// Extension and line-comment marker for one language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageStyle {
  pub extension: String,
  pub comment: String,
}

#[derive(Clone, Debug)]
pub struct ChallengeFileGenerator {
  output_dir: PathBuf,
  resources: Arc<ResourceStore>,
}

impl ChallengeFileGenerator {
  pub fn new(output_dir: impl Into<PathBuf>, resources: Arc<ResourceStore>) -> Self {
    Self { output_dir: output_dir.into(), resources }
  }

  pub fn output_dir(&self) -> &Path {
    &self.output_dir
  }

  pub fn create(&self, req: &ChallengeRequest<'_>) -> io::Result<PathBuf> {
    self.create_at(req, Local::now())
  }

  /// Same as `create` with an explicit clock reading.
  #[instrument(level = "info", skip(self, req, now), fields(language = %req.language, title = %req.title))]
  pub fn create_at(&self, req: &ChallengeRequest<'_>, now: DateTime<Local>) -> io::Result<PathBuf> {
    std::fs::create_dir_all(&self.output_dir)?;
    let path = self.output_dir.join(self.file_name(req.title, req.language, now));
    let content = self.render(req, now)?;
    std::fs::write(&path, content)?;
    info!(target: "challenge", path = %path.display(), "Challenge file written");
    Ok(path)
  }

  pub fn file_name(&self, title: &str, language: &str, now: DateTime<Local>) -> String {
    format!(
      "{}_{}{}",
      sanitize_file_stem(title),
      now.format("%Y%m%d_%H%M%S"),
      self.style(language).extension
    )
  }

  /// Unknown languages get `.txt` and `#`.
  pub fn style(&self, language: &str) -> LanguageStyle {
    let entry = self.language_entry(language);
    let field = |name: &str, fallback: &str| {
      entry
        .and_then(|e| e.get(name))
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
    };
    LanguageStyle {
      extension: field("extension", FALLBACK_EXTENSION),
      comment: field("comment", FALLBACK_COMMENT),
    }
  }

  pub fn render(&self, req: &ChallengeRequest<'_>, now: DateTime<Local>) -> io::Result<String> {
    let style = self.style(req.language);
    let mut out = header(&style.comment, req, now);
    out.push_str(&self.body(req.language, &style.comment)?);
    Ok(out)
  }

  fn body(&self, language: &str, comment: &str) -> io::Result<String> {
    if let Some(body) = self.language_entry(language).and_then(|e| e.get("body")).and_then(Value::as_str) {
      return Ok(body.to_string());
    }
    let generic = self
      .resources
      .text(Category::Templates, "generic")
      .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    render_template(generic, &[("comment", comment)]).map_err(|missing| {
      io::Error::new(
        io::ErrorKind::InvalidData,
        format!("generic code template uses unknown placeholder '{missing}'"),
      )
    })
  }

  fn language_entry(&self, language: &str) -> Option<&Value> {
    self
      .resources
      .document(Category::Templates)
      .get("languages")
      .and_then(|l| l.get(language))
  }
}

fn header(c: &str, req: &ChallengeRequest<'_>, now: DateTime<Local>) -> String {
  let rule = "=".repeat(RULE_WIDTH);
  let date = now.format("%Y-%m-%d %H:%M:%S");
  let ChallengeRequest { language, title, description, difficulty, learner } = *req;
  format!(
    "{c}{rule}\n\
     {c} {HEADER_TITLE}\n\
     {c} {rule}\n\
     {c} Recruit: {learner}\n\
     {c} Challenge: {title}\n\
     {c} Language: {language}\n\
     {c} Difficulty: {difficulty}\n\
     {c} Date: {date}\n\
     {c} {rule}\n\
     {c}\n\
     {c} {BRIEFING_MARKER}\n\
     {c} {description}\n\
     {c}\n\
     {c} YOUR ORDERS:\n\
     {c} 1. Read the mission briefing carefully\n\
     {c} 2. Complete the function implementation below\n\
     {c} 3. Test your code thoroughly\n\
     {c} 4. Report back to Sergeant Tux when complete!\n\
     {c}\n\
     {c} REMEMBER: Comments are your BATTLE PLAN! Use them!\n\
     {c} {rule}\n\n"
  )
}

/// Pull the challenge description back out of a submitted file: the line after
/// `MISSION BRIEFING:` with its comment marker removed.
pub fn mission_briefing(code: &str) -> String {
  const MARKERS: [&str; 6] = ["//", "#", ";", "BTW", "NOTE", "("];

  let mut lines = code.lines();
  while let Some(line) = lines.next() {
    if !line.contains(BRIEFING_MARKER) {
      continue;
    }
    if let Some(next) = lines.next() {
      let mut desc = next.trim();
      if let Some(stripped) = MARKERS.iter().find_map(|m| desc.strip_prefix(m)) {
        desc = stripped.trim();
      }
      if !desc.is_empty() {
        return desc.to_string();
      }
    }
    break;
  }
  FALLBACK_BRIEFING.to_string()
}
