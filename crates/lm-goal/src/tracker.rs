// tracker.rs — GoalTracker: the ordered life-goal list.
//
// States: empty → has N goals (N ≥ 1). There is no terminal state and no
// removal; the list only grows, and existing entries only have their
// `completed` flag flipped. Positions are therefore stable identifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::notice::GoalNotice;

/// One life goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeGoal {
    /// Text as entered. Only the emptiness check trims it.
    pub text: String,
    pub completed: bool,
}

impl LifeGoal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GoalTracker {
    goals: Vec<LifeGoal>,
    /// Text typed but not yet submitted.
    draft: String,
    notice: GoalNotice,
}

impl GoalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notice(notice: GoalNotice) -> Self {
        Self {
            notice,
            ..Self::default()
        }
    }

    pub fn goals(&self) -> &[LifeGoal] {
        &self.goals
    }

    pub fn get(&self, index: usize) -> Option<&LifeGoal> {
        self.goals.get(index)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|g| g.completed).count()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submit the pending draft as a new goal.
    pub fn submit_draft(&mut self, now: DateTime<Utc>) -> Option<usize> {
        let text = std::mem::take(&mut self.draft);
        let added = self.add_goal_at(text.clone(), now);
        if added.is_none() {
            // Rejected drafts stay in the buffer.
            self.draft = text;
        }
        added
    }

    /// Append a goal now. See [`GoalTracker::add_goal_at`].
    pub fn add_goal(&mut self, text: impl Into<String>) -> Option<usize> {
        self.add_goal_at(text, Utc::now())
    }

    /// Append an incomplete goal, clear the draft and raise the notice.
    ///
    /// Blank (empty or whitespace-only) text is ignored and `None` is
    /// returned. Otherwise returns the new goal's index.
    pub fn add_goal_at(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> Option<usize> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        let index = self.goals.len();
        tracing::debug!(index, text = %text, "goal added");
        self.goals.push(LifeGoal::new(text));
        self.draft.clear();
        self.notice.raise(now);
        Some(index)
    }

    /// Flip completion of the goal at `index` and return its new state.
    /// An index past the end changes nothing and returns `None`.
    pub fn toggle_goal(&mut self, index: usize) -> Option<bool> {
        let len = self.goals.len();
        let Some(goal) = self.goals.get_mut(index) else {
            tracing::warn!(index, len, "toggle ignored: no goal at index");
            return None;
        };
        goal.completed = !goal.completed;
        tracing::debug!(index, completed = goal.completed, "goal toggled");
        Some(goal.completed)
    }

    pub fn notice(&self) -> &GoalNotice {
        &self.notice
    }

    pub fn notice_visible(&self, now: DateTime<Utc>) -> bool {
        self.notice.is_visible(now)
    }

    /// Advance the notice clock; clears the notice once it has expired.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        self.notice.clear_expired(now)
    }
}
