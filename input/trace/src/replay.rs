use crate::parser::{Command, Trace};
use doomweb_common::event::KeyTransition;
use doomweb_gamepad::{GamepadTranslator, PollOutcome};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplayEvent {
    Connected(u32),
    Disconnected(u32),
    /// A disconnect for a pad that is not the active one.
    IgnoredDisconnect(u32),
    Transition(KeyTransition),
    /// A cycle ran with no pad tracked.
    Idle,
    /// A cycle ran but the tracked pad could not be read.
    Unavailable,
}

impl std::fmt::Display for ReplayEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayEvent::Connected(index) => write!(f, "connected gamepad {index}"),
            ReplayEvent::Disconnected(index) => write!(f, "disconnected gamepad {index}"),
            ReplayEvent::IgnoredDisconnect(index) => {
                write!(f, "ignored disconnect of gamepad {index}")
            }
            ReplayEvent::Transition(transition) => write!(f, "{transition}"),
            ReplayEvent::Idle => write!(f, "idle"),
            ReplayEvent::Unavailable => write!(f, "unavailable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayEntry {
    /// Trace line that produced the event
    pub line: usize,
    pub event: ReplayEvent,
}

/// Feed a trace through a fresh translator, one poll cycle per `frame` or
/// `lost` step.
pub fn replay(trace: &Trace) -> Vec<ReplayEntry> {
    let mut translator = GamepadTranslator::new();
    let mut entries = Vec::new();

    for step in &trace.steps {
        let mut transitions: Vec<KeyTransition> = Vec::new();
        let status = match &step.command {
            Command::Connect(index) => {
                translator.connect(*index, &mut transitions);
                Some(ReplayEvent::Connected(*index))
            }
            Command::Disconnect(index) => {
                if translator.disconnect(*index, &mut transitions) {
                    Some(ReplayEvent::Disconnected(*index))
                } else {
                    Some(ReplayEvent::IgnoredDisconnect(*index))
                }
            }
            Command::Frame(snapshot) => cycle_status(translator.poll(Some(snapshot), &mut transitions)),
            Command::Lost => cycle_status(translator.poll(None, &mut transitions)),
        };

        let line = step.line;
        entries.extend(transitions.into_iter().map(|transition| ReplayEntry {
            line,
            event: ReplayEvent::Transition(transition),
        }));
        if let Some(event) = status {
            entries.push(ReplayEntry { line, event });
        }
    }

    entries
}

fn cycle_status(outcome: PollOutcome) -> Option<ReplayEvent> {
    match outcome {
        PollOutcome::Idle => Some(ReplayEvent::Idle),
        PollOutcome::Unavailable => Some(ReplayEvent::Unavailable),
        PollOutcome::Polled(_) => None,
    }
}

/// Render entries as `line: event`, one per line.
pub fn render(entries: &[ReplayEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}: {}", entry.line, entry.event))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use doomweb_common::keys::LogicalKey;

    fn events(source: &str) -> Vec<ReplayEvent> {
        replay(&parse(source).unwrap())
            .into_iter()
            .map(|e| e.event)
            .collect()
    }

    #[test]
    fn test_frames_before_connect_are_idle() {
        assert_eq!(
            events("frame south\nlost"),
            vec![ReplayEvent::Idle, ReplayEvent::Idle]
        );
    }

    #[test]
    fn test_release_precedes_disconnect() {
        assert_eq!(
            events("connect 2\nframe rt\ndisconnect 2"),
            vec![
                ReplayEvent::Connected(2),
                ReplayEvent::Transition(KeyTransition::down(LogicalKey::Fire)),
                ReplayEvent::Transition(KeyTransition::up(LogicalKey::Fire)),
                ReplayEvent::Disconnected(2),
            ]
        );
    }

    #[test]
    fn test_entries_carry_source_lines() {
        let entries = replay(&parse("connect 0\n\n# held\nframe start").unwrap());
        let lines: Vec<_> = entries.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 4]);
    }
}
