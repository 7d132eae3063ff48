//! somnus-roster
//!
//! Name matching and report ordering. Display names are reduced to
//! tone-free pinyin keys so a user's sort list matches extracted names
//! regardless of spacing or homophone spelling.

pub mod order;
pub mod phonetic;

pub use order::{NameOrder, reorder_by_names};
pub use phonetic::PhoneticKey;
