//! # lm-goal
//!
//! Life-goal tracking for lifemeter.
//!
//! Goals form an ordered, append-only list. Each entry starts incomplete and
//! can only have its completion flag flipped; nothing is ever removed.
//!
//! ## Key components
//!
//! - [`GoalTracker`] — the goal list plus the pending-input buffer
//! - [`LifeGoal`] — one goal record
//! - [`GoalNotice`] — the transient notice raised whenever a goal is added
//! - [`LifeEvent`] / [`EventDispatcher`] — events emitted on goal mutations
//!   and fanned out to [`NotificationSink`]s

pub mod error;
pub mod events;
pub mod notice;
pub mod tracker;

pub use error::GoalError;
pub use events::{EventDispatcher, LifeEvent, NotificationSink, TracingSink};
pub use notice::{GoalNotice, DEFAULT_NOTICE_SECS, NOTICE_MESSAGE};
pub use tracker::{GoalTracker, LifeGoal};
