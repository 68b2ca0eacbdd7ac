// src/app.rs

use crate::config::Config;
use crate::content::seed::{self, ContentBundle};
use crate::content::store::{ContentStore, MemoryStore};
use color_eyre::eyre::Result;
use std::sync::Arc;
use tracing::info;

/// State shared by every request handler.
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>) -> SharedState {
        Arc::new(Self { store })
    }

    /// Builds the store and provisions it the way the configuration asks.
    ///
    /// A content bundle wins over the built-in quiz; `--no-seed` leaves the store empty.
    /// Resource overrides from the command line are applied last.
    pub fn from_config(config: &Config) -> Result<SharedState> {
        let store = Arc::new(MemoryStore::new());

        let bundle = match &config.content {
            Some(path) => {
                info!(path = %path.display(), "Loading content bundle.");
                Some(ContentBundle::from_file(path)?)
            }
            None if config.no_seed => None,
            None => Some(ContentBundle { quiz: seed::builtin_quiz(), ..Default::default() }),
        };
        if let Some(bundle) = bundle {
            seed::apply(store.as_ref(), bundle);
        }

        if let Some(resource) = config.resource_override(store.resource()) {
            info!(title = %resource.title, "Featured resource overridden.");
            store.set_resource(resource);
        }

        Ok(Self::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_config_seeds_builtin_quiz() {
        let config = Config::try_parse_from(["shieldhub"]).unwrap();
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.store.quiz_questions().len(), seed::builtin_quiz().len());
    }

    #[test]
    fn no_seed_leaves_store_empty() {
        let config = Config::try_parse_from(["shieldhub", "--no-seed"]).unwrap();
        let state = AppState::from_config(&config).unwrap();
        assert!(state.store.quiz_questions().is_empty());
        assert!(state.store.list_articles().is_empty());
    }

    #[test]
    fn missing_bundle_is_an_error() {
        let config =
            Config::try_parse_from(["shieldhub", "--content", "/nonexistent/shieldhub.json"]).unwrap();
        assert!(AppState::from_config(&config).is_err());
    }
}
