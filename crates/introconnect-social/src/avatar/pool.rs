use std::collections::VecDeque;

use rand::rngs::StdRng;
use tracing::debug;

use super::catalog::{AvatarCatalog, AvatarRef};
use super::shuffle::{RandomShuffle, Shuffle};

/// Shuffled working set of preset avatars for one editing session.
///
/// Every catalog entry comes up once per cycle; when the set runs dry it is
/// refilled with a fresh shuffle. The pool is owned by the session that
/// created it and dropped with it.
#[derive(Debug, Clone)]
pub struct AvatarPool<S = RandomShuffle<StdRng>> {
    catalog: AvatarCatalog,
    remaining: VecDeque<AvatarRef>,
    current: Option<AvatarRef>,
    shuffler: S,
}

impl AvatarPool {
    /// Pool shuffled with OS entropy.
    pub fn with_entropy(catalog: AvatarCatalog) -> Self {
        Self::new(catalog, RandomShuffle::from_entropy())
    }

    /// Pool with a reproducible shuffle order.
    pub fn seeded(catalog: AvatarCatalog, seed: u64) -> Self {
        Self::new(catalog, RandomShuffle::seeded(seed))
    }
}

impl<S: Shuffle> AvatarPool<S> {
    /// Create a pool whose remaining set is a shuffled copy of `catalog`.
    pub fn new(catalog: AvatarCatalog, mut shuffler: S) -> Self {
        let remaining = shuffled(&catalog, &mut shuffler);
        Self {
            catalog,
            remaining,
            current: None,
            shuffler,
        }
    }

    /// Hand out the next avatar, avoiding `current_preview` when possible.
    ///
    /// If the head of the pool equals the preview and another entry is
    /// available, the second entry is returned and both are removed; the
    /// skipped head is not requeued.
    pub fn pick_next(&mut self, current_preview: &str) -> AvatarRef {
        if self.remaining.is_empty() {
            self.refill();
        }

        let skip_head = self.remaining.len() > 1
            && self
                .remaining
                .front()
                .is_some_and(|head| head == current_preview);
        if skip_head {
            debug!(avatar = current_preview, "skipping avatar already in preview");
            self.remaining.pop_front();
        }

        // A refill always yields the whole catalog, so the fallback is never taken.
        let next = match self.remaining.pop_front() {
            Some(next) => next,
            None => self.catalog.first().clone(),
        };
        self.current = Some(next.clone());
        next
    }

    /// The avatar most recently handed out, if any.
    pub fn current(&self) -> Option<&AvatarRef> {
        self.current.as_ref()
    }

    /// Entries left before the next reshuffle, in hand-out order.
    pub fn remaining(&self) -> impl Iterator<Item = &AvatarRef> {
        self.remaining.iter()
    }

    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    pub fn catalog(&self) -> &AvatarCatalog {
        &self.catalog
    }

    fn refill(&mut self) {
        self.remaining = shuffled(&self.catalog, &mut self.shuffler);
        debug!(size = self.remaining.len(), "avatar pool refilled");
    }
}

fn shuffled<S: Shuffle>(catalog: &AvatarCatalog, shuffler: &mut S) -> VecDeque<AvatarRef> {
    let mut entries = catalog.entries().to_vec();
    shuffler.shuffle(&mut entries);
    entries.into()
}
