use crate::layout::{DEADZONE, axis, button};
use crate::snapshot::InputSnapshot;
use doomweb_common::keys::LogicalKey;

/// Whether an action is asserted in a snapshot. Must be pure.
pub type Predicate = fn(&InputSnapshot) -> bool;

/// One row of the mapping table.
pub struct LogicalAction {
    pub predicate: Predicate,
    pub key: LogicalKey,
    /// Physical input, as shown by `doomweb keymap`
    pub input: &'static str,
}

fn negative(snap: &InputSnapshot, index: usize) -> bool {
    snap.axis(index) < -DEADZONE
}

fn positive(snap: &InputSnapshot, index: usize) -> bool {
    snap.axis(index) > DEADZONE
}

/// The mapping table. Row order is the edge-state index; rows with identical
/// predicates emit both keys together.
pub static ACTIONS: &[LogicalAction] = &[
    LogicalAction {
        predicate: |s| s.pressed(button::DPAD_UP) || negative(s, axis::LEFT_Y),
        key: LogicalKey::Forward,
        input: "up | ly < -0.3",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::DPAD_DOWN) || positive(s, axis::LEFT_Y),
        key: LogicalKey::Backward,
        input: "down | ly > 0.3",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::DPAD_LEFT) || negative(s, axis::LEFT_X),
        key: LogicalKey::StrafeLeft,
        input: "left | lx < -0.3",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::DPAD_RIGHT) || positive(s, axis::LEFT_X),
        key: LogicalKey::StrafeRight,
        input: "right | lx > 0.3",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::DPAD_UP) || negative(s, axis::RIGHT_Y),
        key: LogicalKey::MenuUp,
        input: "up | ry < -0.3",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::DPAD_DOWN) || positive(s, axis::RIGHT_Y),
        key: LogicalKey::MenuDown,
        input: "down | ry > 0.3",
    },
    LogicalAction {
        predicate: |s| negative(s, axis::RIGHT_X),
        key: LogicalKey::TurnLeft,
        input: "rx < -0.3",
    },
    LogicalAction {
        predicate: |s| positive(s, axis::RIGHT_X),
        key: LogicalKey::TurnRight,
        input: "rx > 0.3",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::RIGHT_TRIGGER) || s.pressed(button::RIGHT_BUMPER),
        key: LogicalKey::Fire,
        input: "rt | rb",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::SOUTH) || s.pressed(button::WEST),
        key: LogicalKey::Use,
        input: "south | west",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::SOUTH) || s.pressed(button::WEST),
        key: LogicalKey::Confirm,
        input: "south | west",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::EAST) || s.pressed(button::NORTH),
        key: LogicalKey::Run,
        input: "east | north",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::START),
        key: LogicalKey::Cancel,
        input: "start",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::SELECT),
        key: LogicalKey::Map,
        input: "select",
    },
    LogicalAction {
        predicate: |s| s.pressed(button::LEFT_BUMPER) || s.pressed(button::LEFT_TRIGGER),
        key: LogicalKey::PrevWeapon,
        input: "lb | lt",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn asserted(snap: &InputSnapshot) -> Vec<LogicalKey> {
        ACTIONS
            .iter()
            .filter(|a| (a.predicate)(snap))
            .map(|a| a.key)
            .collect()
    }

    #[test]
    fn test_table_order() {
        let keys: Vec<_> = ACTIONS.iter().map(|a| a.key).collect();
        assert_eq!(
            keys,
            vec![
                LogicalKey::Forward,
                LogicalKey::Backward,
                LogicalKey::StrafeLeft,
                LogicalKey::StrafeRight,
                LogicalKey::MenuUp,
                LogicalKey::MenuDown,
                LogicalKey::TurnLeft,
                LogicalKey::TurnRight,
                LogicalKey::Fire,
                LogicalKey::Use,
                LogicalKey::Confirm,
                LogicalKey::Run,
                LogicalKey::Cancel,
                LogicalKey::Map,
                LogicalKey::PrevWeapon,
            ]
        );
    }

    #[test]
    fn test_neutral_asserts_nothing() {
        assert!(asserted(&InputSnapshot::neutral()).is_empty());
    }

    #[test]
    fn test_deadzone_boundary() {
        for index in [axis::LEFT_X, axis::LEFT_Y, axis::RIGHT_X, axis::RIGHT_Y] {
            let at = InputSnapshot::neutral().with_axis(index, 0.30);
            assert!(asserted(&at).is_empty(), "axis {index} at +0.30");
            let at_neg = InputSnapshot::neutral().with_axis(index, -0.30);
            assert!(asserted(&at_neg).is_empty(), "axis {index} at -0.30");
        }
        let pos = InputSnapshot::neutral().with_axis(axis::LEFT_Y, 0.31);
        assert_eq!(asserted(&pos), vec![LogicalKey::Backward]);
        let neg = InputSnapshot::neutral().with_axis(axis::LEFT_Y, -0.31);
        assert_eq!(asserted(&neg), vec![LogicalKey::Forward]);
        let turn = InputSnapshot::neutral().with_axis(axis::RIGHT_X, -0.31);
        assert_eq!(asserted(&turn), vec![LogicalKey::TurnLeft]);
    }

    #[test]
    fn test_dpad_drives_movement_and_menu() {
        let up = InputSnapshot::neutral().with_button(button::DPAD_UP);
        assert_eq!(asserted(&up), vec![LogicalKey::Forward, LogicalKey::MenuUp]);
        let ry = InputSnapshot::neutral().with_axis(axis::RIGHT_Y, 0.8);
        assert_eq!(asserted(&ry), vec![LogicalKey::MenuDown]);
    }

    #[test]
    fn test_face_buttons() {
        let south = InputSnapshot::neutral().with_button(button::SOUTH);
        assert_eq!(asserted(&south), vec![LogicalKey::Use, LogicalKey::Confirm]);
        let west = InputSnapshot::neutral().with_button(button::WEST);
        assert_eq!(asserted(&west), vec![LogicalKey::Use, LogicalKey::Confirm]);
        let north = InputSnapshot::neutral().with_button(button::NORTH);
        assert_eq!(asserted(&north), vec![LogicalKey::Run]);
        let lt = InputSnapshot::neutral().with_button(button::LEFT_TRIGGER);
        assert_eq!(asserted(&lt), vec![LogicalKey::PrevWeapon]);
        let home = InputSnapshot::neutral().with_button(button::HOME);
        assert!(asserted(&home).is_empty());
    }
}
