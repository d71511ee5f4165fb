//! Application state shared by every session: configuration, resource documents,
//! the content store, the challenge file generator and the grading client.
//!
//! Everything here is read-only after startup. Per-learner state lives in
//! `session::Session`, one per WebSocket connection.
//!
//! Resource documents come from `app.resources_dir` when configured (a missing
//! or broken file is fatal), otherwise from the built-in seeds.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::challenge_file::ChallengeFileGenerator;
use crate::config::{load_config_from_env, AppConfig};
use crate::content::ContentStore;
use crate::error::StartupError;
use crate::grading::{AnthropicAnalyzer, CodeAnalyzer, OfflineAnalyzer};
use crate::resources::ResourceStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub resources: Arc<ResourceStore>,
    pub content: Arc<ContentStore>,
    pub files: ChallengeFileGenerator,
    pub analyzer: Arc<dyn CodeAnalyzer>,
}

impl AppState {
    /// Build state from env: load config, resources, content, grading client.
    pub fn from_env() -> Result<Self, StartupError> {
        let config = load_config_from_env();
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self::from_config(config, api_key)
    }

    #[instrument(level = "info", skip_all)]
    pub fn from_config(config: AppConfig, api_key: Option<String>) -> Result<Self, StartupError> {
        let resources = match &config.app.resources_dir {
            Some(dir) => ResourceStore::load_dir(dir)?,
            None => {
                info!(target: "tux_bootcamp", "No resources_dir configured; using built-in content");
                ResourceStore::builtin()
            }
        };
        let resources = Arc::new(resources);
        let content = ContentStore::from_resources(&resources)?;

        // Inventory summary per language.
        info!(target: "challenge", languages = ?content.language_names(), "Content loaded");
        for lang in content.languages() {
            info!(target: "challenge", language = %lang.name, difficulty = %lang.difficulty, challenges = lang.challenges.len(), "Startup language inventory");
            if lang.challenges.is_empty() {
                warn!(target: "challenge", language = %lang.name, "Language has no challenges");
            }
        }

        let analyzer: Arc<dyn CodeAnalyzer> = match api_key {
            Some(key) => {
                let a = AnthropicAnalyzer::new(&config.grading, &config.prompts, key)?;
                info!(target: "tux_bootcamp", base_url = %a.base_url, model = %a.model, "Grading enabled.");
                Arc::new(a)
            }
            None => {
                warn!(target: "tux_bootcamp", "Grading disabled (no ANTHROPIC_API_KEY). Submissions will come back unreviewed.");
                Arc::new(OfflineAnalyzer)
            }
        };

        let files = ChallengeFileGenerator::new(config.app.output_dir.clone(), resources.clone());
        info!(target: "tux_bootcamp", output_dir = %files.output_dir().display(), "Challenge files directory");

        Ok(Self {
            config,
            resources,
            content: Arc::new(content),
            files,
            analyzer,
        })
    }

    /// Swap the grading client for a stub.
    #[cfg(test)]
    pub fn with_analyzer(mut self, analyzer: Arc<dyn CodeAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Category;

    #[test]
    fn defaults_use_builtin_content_and_offline_grading() {
        let state = AppState::from_config(AppConfig::default(), None).unwrap();
        assert_eq!(state.content.language_names().len(), 13);
        assert!(state.resources.text(Category::Tux, "intro_speech").is_ok());
    }

    #[test]
    fn missing_resources_dir_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cfg = AppConfig::default();
        cfg.app.resources_dir = Some(tmp.path().join("nope"));
        let err = AppState::from_config(cfg, None).err().unwrap();
        assert!(matches!(err, StartupError::Resource(_)));
    }
}
