use std::sync::Arc;

use super::scorer::ArticleScorer;

#[derive(Clone)]
pub struct HandlerState {
    pub scorer: Arc<dyn ArticleScorer>,
}

impl HandlerState {
    pub fn new(scorer: Arc<dyn ArticleScorer>) -> Self {
        Self { scorer }
    }
}

impl std::fmt::Debug for HandlerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerState")
            .field("scorer", &self.scorer.name())
            .finish()
    }
}
