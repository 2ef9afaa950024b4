// notice.rs — The transient "goal added" notice.
//
// Adding a goal raises the notice; it stays visible for a fixed duration and
// is then cleared by whoever drives the clock (`clear_expired`). A raise
// while the notice is already showing moves the deadline forward, so a late
// clear from an earlier raise never hides a newer one.

use chrono::{DateTime, Duration, Utc};

pub const NOTICE_MESSAGE: &str = "You probably won't make it, sorry. 😢";

pub const DEFAULT_NOTICE_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct GoalNotice {
    duration: Duration,
    visible_until: Option<DateTime<Utc>>,
}

impl GoalNotice {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            visible_until: None,
        }
    }

    pub fn from_secs(secs: u64) -> Self {
        let secs = i64::try_from(secs).unwrap_or(i64::MAX);
        Self::new(Duration::try_seconds(secs).unwrap_or(Duration::MAX))
    }

    pub fn message(&self) -> &'static str {
        NOTICE_MESSAGE
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show the notice from `now` for the configured duration.
    pub fn raise(&mut self, now: DateTime<Utc>) {
        let until = now
            .checked_add_signed(self.duration)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.visible_until = Some(until);
    }

    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.visible_until.is_some_and(|until| now < until)
    }

    /// Drop the flag once its deadline has passed. Returns true if it was
    /// cleared by this call.
    pub fn clear_expired(&mut self, now: DateTime<Utc>) -> bool {
        match self.visible_until {
            Some(until) if now >= until => {
                self.visible_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn visible_until(&self) -> Option<DateTime<Utc>> {
        self.visible_until
    }
}

impl Default for GoalNotice {
    fn default() -> Self {
        Self::from_secs(DEFAULT_NOTICE_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_raised() {
        let notice = GoalNotice::default();
        assert!(!notice.is_visible(Utc::now()));
        assert!(notice.visible_until().is_none());
    }

    #[test]
    fn visible_for_the_configured_duration() {
        let mut notice = GoalNotice::default();
        let t0 = Utc::now();
        notice.raise(t0);

        assert!(notice.is_visible(t0));
        assert!(notice.is_visible(t0 + Duration::milliseconds(2_999)));
        assert!(!notice.is_visible(t0 + Duration::seconds(3)));
    }

    #[test]
    fn clear_expired_is_one_shot() {
        let mut notice = GoalNotice::from_secs(3);
        let t0 = Utc::now();
        notice.raise(t0);

        assert!(!notice.clear_expired(t0 + Duration::seconds(1)));
        assert!(notice.clear_expired(t0 + Duration::seconds(3)));
        assert!(!notice.clear_expired(t0 + Duration::seconds(4)));
        assert!(notice.visible_until().is_none());
    }

    #[test]
    fn raising_again_extends_the_window() {
        let mut notice = GoalNotice::default();
        let t0 = Utc::now();
        notice.raise(t0);
        notice.raise(t0 + Duration::seconds(2));

        // The first raise's deadline has passed, the second has not.
        assert!(!notice.clear_expired(t0 + Duration::seconds(3)));
        assert!(notice.is_visible(t0 + Duration::seconds(4)));
        assert!(notice.clear_expired(t0 + Duration::seconds(5)));
    }

    #[test]
    fn zero_duration_never_shows() {
        let mut notice = GoalNotice::from_secs(0);
        let t0 = Utc::now();
        notice.raise(t0);
        assert!(!notice.is_visible(t0));
    }

    #[test]
    fn message_is_fixed() {
        assert_eq!(GoalNotice::default().message(), NOTICE_MESSAGE);
    }
}
