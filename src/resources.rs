//! Resource store: every user-facing string and all reference data, loaded once.
//!
//! Five JSON documents, one per category. Lookups walk a dot-separated key path
//! (`get(Category::Tux, "emotions.proud")`). Loaded either from a directory at
//! startup (missing file = fatal) or from the built-in copies in `seeds`.

use std::path::Path;

use serde_json::Value;
use tracing::{info, instrument};

use crate::error::ResourceError;
use crate::seeds;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
  Ui,
  Tux,
  Languages,
  Challenges,
  Templates,
}

impl Category {
  pub const ALL: [Category; 5] = [
    Category::Ui,
    Category::Tux,
    Category::Languages,
    Category::Challenges,
    Category::Templates,
  ];

  pub fn file_name(self) -> &'static str {
    match self {
      Category::Ui => "ui_strings.json",
      Category::Tux => "tux_personality.json",
      Category::Languages => "language_data.json",
      Category::Challenges => "challenge_templates.json",
      Category::Templates => "code_templates.json",
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Category::Ui => "ui",
      Category::Tux => "tux",
      Category::Languages => "languages",
      Category::Challenges => "challenges",
      Category::Templates => "templates",
    }
  }

  fn index(self) -> usize {
    self as usize
  }
}

#[derive(Clone, Debug)]
pub struct ResourceStore {
  docs: [Value; 5],
}

impl ResourceStore {
  pub fn builtin() -> Self {
    Self {
      docs: [
        seeds::ui_strings(),
        seeds::tux_personality(),
        seeds::language_data(),
        seeds::challenge_templates(),
        seeds::code_templates(),
      ],
    }
  }

  /// Read all five documents from `dir`. Any missing or malformed file aborts.
  #[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
  pub fn load_dir(dir: &Path) -> Result<Self, ResourceError> {
    let mut docs: [Value; 5] = Default::default();
    for cat in Category::ALL {
      let path = dir.join(cat.file_name());
      let shown = path.display().to_string();
      if !path.exists() {
        return Err(ResourceError::MissingFile { path: shown });
      }
      let raw = std::fs::read_to_string(&path).map_err(|source| ResourceError::Io { path: shown.clone(), source })?;
      docs[cat.index()] = serde_json::from_str(&raw).map_err(|source| ResourceError::Parse { path: shown, source })?;
    }
    info!(target: "tux_bootcamp", "Loaded resource files");
    Ok(Self { docs })
  }

  /// Whole document for a category.
  pub fn document(&self, cat: Category) -> &Value {
    &self.docs[cat.index()]
  }

  /// Walk `key` (dot-separated) inside the category document.
  pub fn get(&self, cat: Category, key: &str) -> Result<&Value, ResourceError> {
    let mut node = self.document(cat);
    for part in key.split('.') {
      node = node.get(part).ok_or_else(|| ResourceError::MissingKey {
        category: cat.name().into(),
        key: key.into(),
      })?;
    }
    Ok(node)
  }

  pub fn text(&self, cat: Category, key: &str) -> Result<&str, ResourceError> {
    self
      .get(cat, key)?
      .as_str()
      .ok_or_else(|| wrong_shape(cat, key, "string"))
  }

  /// A list of strings (phrase bucket, URL list, ...).
  pub fn list(&self, cat: Category, key: &str) -> Result<Vec<&str>, ResourceError> {
    let arr = self
      .get(cat, key)?
      .as_array()
      .ok_or_else(|| wrong_shape(cat, key, "array of strings"))?;
    arr
      .iter()
      .map(|v| v.as_str().ok_or_else(|| wrong_shape(cat, key, "array of strings")))
      .collect()
  }
}

fn wrong_shape(cat: Category, key: &str, expected: &'static str) -> ResourceError {
  ResourceError::WrongShape { category: cat.name().into(), key: key.into(), expected }
}
