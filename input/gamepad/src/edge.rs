use doomweb_common::event::TransitionKind;

/// Last observed assertion of every action, indexed by table row.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeState {
    slots: Vec<bool>,
}

impl EdgeState {
    /// All slots start released.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_pressed(&self, slot: usize) -> bool {
        self.slots.get(slot).copied().unwrap_or(false)
    }

    /// Record `asserted` for `slot` and report the edge crossed, if any.
    pub fn update(&mut self, slot: usize, asserted: bool) -> Option<TransitionKind> {
        let previous = std::mem::replace(&mut self.slots[slot], asserted);
        (previous != asserted).then(|| TransitionKind::entering(asserted))
    }

    /// Release every slot, returning the ones that were pressed.
    pub fn release_all(&mut self) -> Vec<usize> {
        let held = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, pressed)| **pressed)
            .map(|(slot, _)| slot)
            .collect();
        self.slots.fill(false);
        held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_reports_edges_only() {
        let mut edges = EdgeState::new(2);
        assert_eq!(edges.update(0, false), None);
        assert_eq!(edges.update(0, true), Some(TransitionKind::Down));
        assert_eq!(edges.update(0, true), None);
        assert!(edges.is_pressed(0));
        assert_eq!(edges.update(0, false), Some(TransitionKind::Up));
        assert!(!edges.is_pressed(0));
    }

    #[test]
    fn test_release_all() {
        let mut edges = EdgeState::new(3);
        edges.update(0, true);
        edges.update(2, true);
        assert_eq!(edges.release_all(), vec![0, 2]);
        assert!((0..edges.len()).all(|slot| !edges.is_pressed(slot)));
        assert!(edges.release_all().is_empty());
    }
}
