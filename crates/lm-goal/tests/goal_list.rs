// goal_list.rs — Goal list scenarios across tracker, notice and events.

use chrono::{Duration, Utc};
use lm_goal::{EventDispatcher, GoalTracker, LifeEvent, LifeGoal};

#[test]
fn add_two_goals_then_complete_the_first() {
    let mut tracker = GoalTracker::new();
    tracker.add_goal("Learn piano");
    tracker.add_goal("Travel");
    tracker.toggle_goal(0);

    assert_eq!(
        tracker.goals(),
        &[
            LifeGoal {
                text: "Learn piano".into(),
                completed: true,
            },
            LifeGoal {
                text: "Travel".into(),
                completed: false,
            },
        ]
    );
}

#[test]
fn list_only_grows() {
    let mut tracker = GoalTracker::new();
    let mut last_len = 0;
    for text in ["a", "", "b", "  ", "a"] {
        tracker.add_goal(text);
        assert!(tracker.len() >= last_len);
        last_len = tracker.len();
    }
    for i in 0..5 {
        tracker.toggle_goal(i);
    }
    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.completed_count(), 3);
}

#[test]
fn stale_clear_after_second_add_is_benign() {
    let mut tracker = GoalTracker::new();
    let t0 = Utc::now();
    tracker.add_goal_at("Learn piano", t0);
    tracker.add_goal_at("Travel", t0 + Duration::seconds(2));

    // The first add's window ends here; the second keeps the notice up.
    tracker.tick(t0 + Duration::seconds(3));
    assert!(tracker.notice_visible(t0 + Duration::seconds(3)));

    tracker.tick(t0 + Duration::seconds(5));
    assert!(!tracker.notice_visible(t0 + Duration::seconds(5)));
    // Clearing again is harmless.
    assert!(!tracker.tick(t0 + Duration::seconds(6)));
}

#[test]
fn events_follow_mutations() {
    let mut tracker = GoalTracker::new();
    let dispatcher = EventDispatcher::with_tracing();

    let index = tracker.add_goal("Write a book").unwrap();
    dispatcher.dispatch(&LifeEvent::goal_added(index, &tracker.goals()[index].text));

    let completed = tracker.toggle_goal(index).unwrap();
    let event = LifeEvent::goal_toggled(index, completed);
    dispatcher.dispatch(&event);

    assert!(matches!(
        event,
        LifeEvent::GoalToggled {
            index: 0,
            completed: true,
            ..
        }
    ));
}
