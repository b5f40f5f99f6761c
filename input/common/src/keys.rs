use serde::{Deserialize, Serialize};

/// A key the game runtime's input decoder understands.
///
/// Several logical keys share a wire key (movement and menu navigation both
/// ride the arrow keys); they stay distinct here so each table row keeps its
/// own identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalKey {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    MenuUp,
    MenuDown,
    TurnLeft,
    TurnRight,
    Fire,
    Use,
    Confirm,
    Run,
    Cancel,
    Map,
    PrevWeapon,
    Strafe,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 16] = [
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
        LogicalKey::Strafe,
    ];

    /// Value of `KeyboardEvent.key`.
    pub fn key_name(self) -> &'static str {
        match self {
            LogicalKey::Forward | LogicalKey::MenuUp => "ArrowUp",
            LogicalKey::Backward | LogicalKey::MenuDown => "ArrowDown",
            LogicalKey::TurnLeft => "ArrowLeft",
            LogicalKey::TurnRight => "ArrowRight",
            LogicalKey::StrafeLeft => ",",
            LogicalKey::StrafeRight => ".",
            LogicalKey::Fire => "Control",
            LogicalKey::Use => " ",
            LogicalKey::Confirm => "Enter",
            LogicalKey::Run => "Shift",
            LogicalKey::Cancel => "Escape",
            LogicalKey::Map => "Tab",
            LogicalKey::PrevWeapon => "[",
            LogicalKey::Strafe => "Alt",
        }
    }

    /// Value of `KeyboardEvent.code`. The runtime only inspects `key` and the
    /// legacy code, so this mirrors the key name.
    pub fn code(self) -> &'static str {
        self.key_name()
    }

    /// Historical `keyCode` / `which` value.
    pub fn legacy_code(self) -> u32 {
        match self {
            LogicalKey::Forward | LogicalKey::MenuUp => 38,
            LogicalKey::Backward | LogicalKey::MenuDown => 40,
            LogicalKey::TurnLeft => 37,
            LogicalKey::TurnRight => 39,
            LogicalKey::StrafeLeft => 188,
            LogicalKey::StrafeRight => 190,
            LogicalKey::Fire => 17,
            LogicalKey::Use => 32,
            LogicalKey::Confirm => 13,
            LogicalKey::Run => 16,
            LogicalKey::Cancel => 27,
            LogicalKey::Map => 9,
            LogicalKey::PrevWeapon => 219,
            LogicalKey::Strafe => 18,
        }
    }

    /// Human-readable action name.
    pub fn label(self) -> &'static str {
        match self {
            LogicalKey::Forward => "forward",
            LogicalKey::Backward => "backward",
            LogicalKey::StrafeLeft => "strafe-left",
            LogicalKey::StrafeRight => "strafe-right",
            LogicalKey::MenuUp => "menu-up",
            LogicalKey::MenuDown => "menu-down",
            LogicalKey::TurnLeft => "turn-left",
            LogicalKey::TurnRight => "turn-right",
            LogicalKey::Fire => "fire",
            LogicalKey::Use => "use",
            LogicalKey::Confirm => "confirm",
            LogicalKey::Run => "run",
            LogicalKey::Cancel => "cancel",
            LogicalKey::Map => "map",
            LogicalKey::PrevWeapon => "previous-weapon",
            LogicalKey::Strafe => "strafe",
        }
    }
}

impl std::fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self.key_name() {
            " " => "Space",
            other => other,
        };
        write!(f, "{} ({}/{})", self.label(), name, self.legacy_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_legacy_codes_follow_key_names() {
        // Any two keys sharing a wire name must share a legacy code.
        for a in LogicalKey::ALL {
            for b in LogicalKey::ALL {
                if a.key_name() == b.key_name() {
                    assert_eq!(a.legacy_code(), b.legacy_code(), "{a:?} vs {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<_> = LogicalKey::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), LogicalKey::ALL.len());
    }

    #[test]
    fn test_display_spells_out_space() {
        assert_eq!(LogicalKey::Use.to_string(), "use (Space/32)");
        assert_eq!(LogicalKey::Forward.to_string(), "forward (ArrowUp/38)");
    }
}
