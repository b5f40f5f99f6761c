use crate::snapshot::InputSnapshot;
use crate::translator::{GamepadTranslator, PollOutcome};
use doomweb_common::event::{KeySink, KeyTransition};
use std::cell::RefCell;

/// A translator reachable from several event callbacks at once.
///
/// Transitions are buffered while the translator is borrowed and only handed
/// to the sink afterwards, so a sink whose delivery re-enters (a listener
/// asking for [`SharedTranslator::active`], say) never meets a live borrow.
#[derive(Default)]
pub struct SharedTranslator {
    inner: RefCell<GamepadTranslator>,
}

impl SharedTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<u32> {
        self.inner.borrow().active()
    }

    pub fn connect(&self, index: u32, sink: &mut impl KeySink) {
        self.deliver(sink, |translator, pending| translator.connect(index, pending));
    }

    pub fn disconnect(&self, index: u32, sink: &mut impl KeySink) -> bool {
        self.deliver(sink, |translator, pending| {
            translator.disconnect(index, pending)
        })
    }

    /// Run one cycle, reading the active pad through `read`. `read` runs
    /// before the translator is borrowed.
    pub fn poll_with(
        &self,
        read: impl FnOnce(u32) -> Option<InputSnapshot>,
        sink: &mut impl KeySink,
    ) -> PollOutcome {
        let snapshot = self.active().and_then(read);
        self.deliver(sink, |translator, pending| {
            translator.poll(snapshot.as_ref(), pending)
        })
    }

    pub fn release_all(&self, sink: &mut impl KeySink) {
        self.deliver(sink, |translator, pending| translator.release_all(pending));
    }

    fn deliver<R>(
        &self,
        sink: &mut impl KeySink,
        f: impl FnOnce(&mut GamepadTranslator, &mut Vec<KeyTransition>) -> R,
    ) -> R {
        let mut pending: Vec<KeyTransition> = Vec::new();
        let result = {
            let mut translator = self.inner.borrow_mut();
            f(&mut *translator, &mut pending)
        };
        for transition in pending {
            sink.emit(transition);
        }
        result
    }
}
