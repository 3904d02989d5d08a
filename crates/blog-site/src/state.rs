//! Shared application state.
//!
//! Handlers are pure; the only thing they share is the immutable static
//! asset root, so the state is a cheap clone around an `Arc`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::SiteConfig;

#[derive(Clone)]
pub struct SiteState {
    static_root: Arc<PathBuf>,
}

impl SiteState {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            static_root: Arc::new(config.static_dir.clone()),
        }
    }

    pub fn static_root(&self) -> &Path {
        &self.static_root
    }
}
