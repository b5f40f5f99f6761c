use crate::keys::LogicalKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    Down,
    Up,
}

impl TransitionKind {
    /// DOM event type for this transition.
    pub fn event_type(self) -> &'static str {
        match self {
            TransitionKind::Down => "keydown",
            TransitionKind::Up => "keyup",
        }
    }

    /// Transition that moves a key into `pressed`.
    pub fn entering(pressed: bool) -> Self {
        if pressed {
            TransitionKind::Down
        } else {
            TransitionKind::Up
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionKind::Down => write!(f, "down"),
            TransitionKind::Up => write!(f, "up"),
        }
    }
}

/// A synthesized key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyTransition {
    pub kind: TransitionKind,
    pub key: LogicalKey,
}

impl KeyTransition {
    pub fn down(key: LogicalKey) -> Self {
        Self {
            kind: TransitionKind::Down,
            key,
        }
    }

    pub fn up(key: LogicalKey) -> Self {
        Self {
            kind: TransitionKind::Up,
            key,
        }
    }
}

impl std::fmt::Display for KeyTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.key)
    }
}

/// Destination for synthesized key transitions.
///
/// Delivery is fire-and-forget: a sink that can no longer reach its target
/// drops the transition silently.
pub trait KeySink {
    fn emit(&mut self, transition: KeyTransition);
}

impl KeySink for Vec<KeyTransition> {
    fn emit(&mut self, transition: KeyTransition) {
        self.push(transition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_types() {
        assert_eq!(TransitionKind::Down.event_type(), "keydown");
        assert_eq!(TransitionKind::Up.event_type(), "keyup");
        assert_eq!(TransitionKind::entering(true), TransitionKind::Down);
        assert_eq!(TransitionKind::entering(false), TransitionKind::Up);
    }

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<KeyTransition> = Vec::new();
        sink.emit(KeyTransition::down(LogicalKey::Fire));
        sink.emit(KeyTransition::up(LogicalKey::Fire));
        assert_eq!(
            sink,
            vec![
                KeyTransition::down(LogicalKey::Fire),
                KeyTransition::up(LogicalKey::Fire),
            ]
        );
        assert_eq!(sink[0].to_string(), "down fire (Control/17)");
    }
}
