// events.rs — Event model and notification dispatch.
//
// Every goal mutation produces a `LifeEvent`. Sinks subscribe to them;
// the always-on `TracingSink` writes each one to the structured log.
// Dispatch is synchronous and a failing sink never blocks the others.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GoalError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum LifeEvent {
    /// A goal was appended to the list.
    GoalAdded {
        index: usize,
        text: String,
        timestamp: DateTime<Utc>,
    },

    /// A goal's completion flag was flipped.
    GoalToggled {
        index: usize,
        completed: bool,
        timestamp: DateTime<Utc>,
    },
}

impl LifeEvent {
    pub fn event_type(&self) -> &str {
        match self {
            LifeEvent::GoalAdded { .. } => "goal_added",
            LifeEvent::GoalToggled { .. } => "goal_toggled",
        }
    }

    pub fn goal_added(index: usize, text: &str) -> Self {
        LifeEvent::GoalAdded {
            index,
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn goal_toggled(index: usize, completed: bool) -> Self {
        LifeEvent::GoalToggled {
            index,
            completed,
            timestamp: Utc::now(),
        }
    }
}

/// Receives life events.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged but don't stop dispatch.
    fn send(&self, event: &LifeEvent) -> Result<(), GoalError>;
}

/// Writes each event as JSON to the `tracing` log.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn send(&self, event: &LifeEvent) -> Result<(), GoalError> {
        let json = serde_json::to_string(event)?;
        tracing::info!(event_type = event.event_type(), event = %json, "life event");
        Ok(())
    }
}

/// Dispatches events to multiple sinks.
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// A dispatcher with the tracing sink already attached.
    pub fn with_tracing() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.add_sink(Box::new(TracingSink));
        dispatcher
    }

    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn dispatch(&self, event: &LifeEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
