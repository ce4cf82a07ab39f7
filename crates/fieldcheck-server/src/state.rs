use fieldcheck_core::config::Config;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
///
/// The config is read once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_config() {
        let state = AppState::new(Config::default());
        let other = state.clone();
        assert!(Arc::ptr_eq(&state.config, &other.config));
    }
}
