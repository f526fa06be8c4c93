//! The reviewer resolution engine.
//!
//! Everything here is side-effect-free decision logic over an immutable
//! config/pull-request snapshot, except the author-based resolver, which
//! needs team-membership lookups and therefore suspends.

mod author;
mod fallback;
mod files;
mod gate;
mod groups;

pub use author::identify_reviewers_by_author;
pub use fallback::{fetch_default_reviewers, randomly_pick_reviewers};
pub use files::identify_reviewers_by_changed_files;
pub use gate::should_request_review;
pub use groups::{expand_groups, fetch_other_group_members};
