use std::sync::Arc;
use std::time::Instant;

use crate::application::BlogService;

#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<BlogService>,
    pub started_at: Instant,
    pub environment: String,
}

impl AppState {
    pub fn new(blog: Arc<BlogService>, environment: impl Into<String>) -> Self {
        Self {
            blog,
            started_at: Instant::now(),
            environment: environment.into(),
        }
    }
}
