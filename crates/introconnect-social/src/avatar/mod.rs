//! Preset avatar selection.
//!
//! The profile editor offers a "random avatar" button. Instead of drawing
//! independently each time (and repeating quickly), it walks a shuffled
//! copy of the preset catalog, reshuffling once every entry has been shown.

mod catalog;
mod pool;
mod shuffle;

pub use catalog::{AvatarCatalog, AvatarRef, PRESET_AVATARS};
pub use pool::AvatarPool;
pub use shuffle::{fisher_yates, RandomShuffle, Shuffle};

#[cfg(test)]
pub(crate) use shuffle::InOrder;
