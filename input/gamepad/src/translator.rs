use crate::action::{ACTIONS, LogicalAction};
use crate::edge::EdgeState;
use crate::snapshot::InputSnapshot;
use doomweb_common::event::{KeySink, KeyTransition, TransitionKind};
use log::debug;

/// Result of one poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No pad is tracked.
    Idle,
    /// A pad is tracked but did not resolve this frame. The handle is kept.
    Unavailable,
    /// The table was evaluated against a snapshot.
    Polled(CycleReport),
}

/// Transitions emitted during one evaluated cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub downs: usize,
    pub ups: usize,
}

impl CycleReport {
    fn record(&mut self, kind: TransitionKind) {
        match kind {
            TransitionKind::Down => self.downs += 1,
            TransitionKind::Up => self.ups += 1,
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.downs == 0 && self.ups == 0
    }
}

/// Tracks a single pad and turns its samples into edge-triggered key transitions.
pub struct GamepadTranslator {
    actions: &'static [LogicalAction],
    edges: EdgeState,
    active: Option<u32>,
}

impl Default for GamepadTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl GamepadTranslator {
    pub fn new() -> Self {
        Self {
            actions: ACTIONS,
            edges: EdgeState::new(ACTIONS.len()),
            active: None,
        }
    }

    pub fn active(&self) -> Option<u32> {
        self.active
    }

    pub fn is_pressed(&self, slot: usize) -> bool {
        self.edges.is_pressed(slot)
    }

    /// Track the pad at `index`, replacing any other. Keys still held by the
    /// replaced pad are released first.
    pub fn connect(&mut self, index: u32, sink: &mut impl KeySink) {
        if self.active == Some(index) {
            return;
        }
        if let Some(previous) = self.active {
            debug!("gamepad {index} replaces gamepad {previous}");
            self.release_all(sink);
        }
        self.active = Some(index);
    }

    /// Stop tracking the pad at `index` if it is the active one. Returns whether
    /// the handle was cleared.
    pub fn disconnect(&mut self, index: u32, sink: &mut impl KeySink) -> bool {
        if self.active != Some(index) {
            return false;
        }
        self.release_all(sink);
        self.active = None;
        true
    }

    /// Run one cycle. `source` is the active pad's state for this frame, or
    /// `None` when it could not be read.
    pub fn poll(&mut self, source: Option<&InputSnapshot>, sink: &mut impl KeySink) -> PollOutcome {
        if self.active.is_none() {
            return PollOutcome::Idle;
        }
        let Some(snapshot) = source else {
            return PollOutcome::Unavailable;
        };

        let mut report = CycleReport::default();
        for (slot, action) in self.actions.iter().enumerate() {
            let asserted = (action.predicate)(snapshot);
            if let Some(kind) = self.edges.update(slot, asserted) {
                sink.emit(KeyTransition {
                    kind,
                    key: action.key,
                });
                report.record(kind);
            }
        }
        PollOutcome::Polled(report)
    }

    /// Emit key-up for every action still held and reset the edge table. The
    /// handle is kept.
    pub fn release_all(&mut self, sink: &mut impl KeySink) {
        for slot in self.edges.release_all() {
            sink.emit(KeyTransition::up(self.actions[slot].key));
        }
    }
}
