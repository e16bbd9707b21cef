//! Profile editing session.
//!
//! The draft mirrors the editable profile fields. The editor pairs it with
//! an [`AvatarPool`] that lives as long as the editor does, so reopening the
//! form with fresh data keeps walking the same shuffled cycle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::avatar::{AvatarPool, AvatarRef, RandomShuffle, Shuffle};

/// Editable profile fields. Every field defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub full_name: String,
    pub bio: String,
    pub native_language: String,
    pub location: String,
    pub profile_pic: String,
}

pub struct ProfileEditor<S = RandomShuffle<rand::rngs::StdRng>> {
    draft: ProfileDraft,
    pool: AvatarPool<S>,
}

impl<S: Shuffle> ProfileEditor<S> {
    pub fn new(draft: ProfileDraft, pool: AvatarPool<S>) -> Self {
        Self { draft, pool }
    }

    /// Replace the preview with the next avatar from the pool.
    pub fn randomize_avatar(&mut self) -> AvatarRef {
        let next = self.pool.pick_next(&self.draft.profile_pic);
        debug!(avatar = %next, "random profile picture selected");
        self.draft.profile_pic = next.as_str().to_owned();
        next
    }

    /// Load new field values without touching the avatar pool.
    pub fn reset(&mut self, draft: ProfileDraft) {
        self.draft = draft;
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    pub fn pool(&self) -> &AvatarPool<S> {
        &self.pool
    }

    pub fn into_draft(self) -> ProfileDraft {
        self.draft
    }
}
