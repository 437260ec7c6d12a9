use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum_macros::Display)]
pub enum SessionStatus {
    #[default]
    Idle,
    Active,
    Finished,
}

/// State for one practice attempt. Owned by the controller.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub reference_text: String,
    pub typed_text: String,
    /// Recomputed from scratch on every edit
    pub mistake_count: usize,
    pub status: SessionStatus,
    pub started_at: Option<Instant>,
}

impl Session {
    pub fn reference_len(&self) -> usize {
        self.reference_text.chars().count()
    }

    pub fn typed_len(&self) -> usize {
        self.typed_text.chars().count()
    }

    /// Complete once the typed length reaches the reference length, right or wrong.
    /// Overlong input counts as complete.
    pub fn is_complete(&self) -> bool {
        self.typed_len() >= self.reference_len()
    }
}
