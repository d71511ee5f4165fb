//! Content store: typed language entries and their challenge lists.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::domain::{Challenge, LanguageEntry};
use crate::error::ResourceError;
use crate::resources::{Category, ResourceStore};

#[derive(Clone, Debug, Default)]
pub struct ContentStore {
  languages: BTreeMap<String, LanguageEntry>,
}

impl ContentStore {
  /// Join `language_data` with `challenge_templates` into typed entries.
  pub fn from_resources(res: &ResourceStore) -> Result<Self, ResourceError> {
    let langs: BTreeMap<String, LanguageEntry> =
      serde_json::from_value(res.document(Category::Languages).clone()).map_err(|source| ResourceError::Parse {
        path: Category::Languages.file_name().into(),
        source,
      })?;
    let mut challenges: BTreeMap<String, Vec<Challenge>> =
      serde_json::from_value(res.document(Category::Challenges).clone()).map_err(|source| ResourceError::Parse {
        path: Category::Challenges.file_name().into(),
        source,
      })?;

    let mut languages = BTreeMap::new();
    for (name, mut entry) in langs {
      entry.name = name.clone();
      entry.challenges = challenges.remove(&name).unwrap_or_default();
      languages.insert(name, entry);
    }
    for orphan in challenges.keys() {
      info!(target: "challenge", language = %orphan, "Challenges listed for a language with no language data; ignored");
    }

    Ok(Self { languages })
  }

  pub fn language(&self, name: &str) -> Option<&LanguageEntry> {
    self.languages.get(name)
  }

  /// All language names, sorted.
  pub fn language_names(&self) -> Vec<&str> {
    self.languages.keys().map(String::as_str).collect()
  }

  pub fn languages(&self) -> impl Iterator<Item = &LanguageEntry> {
    self.languages.values()
  }

  pub fn challenges(&self, name: &str) -> &[Challenge] {
    self.languages.get(name).map(|l| l.challenges.as_slice()).unwrap_or(&[])
  }

  pub fn has_challenges(&self, name: &str) -> bool {
    !self.challenges(name).is_empty()
  }

  /// Uniform pick with replacement; repeats across calls are expected.
  pub fn random_challenge<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Option<&Challenge> {
    self.challenges(name).choose(rng)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn builtin_content_has_thirteen_languages_with_three_challenges() {
    let store = ContentStore::from_resources(&ResourceStore::builtin()).unwrap();
    let names = store.language_names();
    assert_eq!(names.len(), 13);
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    for name in names {
      assert_eq!(store.challenges(name).len(), 3, "{name}");
      assert_eq!(store.language(name).unwrap().name, name);
    }
  }

  #[test]
  fn unknown_language_has_no_challenges() {
    let store = ContentStore::from_resources(&ResourceStore::builtin()).unwrap();
    assert!(store.language("COBOL").is_none());
    assert!(!store.has_challenges("COBOL"));
    let mut rng = StdRng::seed_from_u64(7);
    assert!(store.random_challenge("COBOL", &mut rng).is_none());
  }

  #[test]
  fn random_challenge_comes_from_the_language() {
    let store = ContentStore::from_resources(&ResourceStore::builtin()).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
      let c = store.random_challenge("Rust", &mut rng).unwrap();
      assert!(store.challenges("Rust").contains(c));
    }
  }
}
