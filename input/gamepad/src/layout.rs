//! W3C "standard" gamepad layout indices.

/// Analog magnitude an axis must strictly exceed to count as asserted.
pub const DEADZONE: f64 = 0.3;

pub mod button {
    pub const SOUTH: usize = 0;
    pub const EAST: usize = 1;
    pub const WEST: usize = 2;
    pub const NORTH: usize = 3;
    pub const LEFT_BUMPER: usize = 4;
    pub const RIGHT_BUMPER: usize = 5;
    pub const LEFT_TRIGGER: usize = 6;
    pub const RIGHT_TRIGGER: usize = 7;
    pub const SELECT: usize = 8;
    pub const START: usize = 9;
    pub const LEFT_STICK: usize = 10;
    pub const RIGHT_STICK: usize = 11;
    pub const DPAD_UP: usize = 12;
    pub const DPAD_DOWN: usize = 13;
    pub const DPAD_LEFT: usize = 14;
    pub const DPAD_RIGHT: usize = 15;
    pub const HOME: usize = 16;

    pub const COUNT: usize = 17;
}

pub mod axis {
    pub const LEFT_X: usize = 0;
    pub const LEFT_Y: usize = 1;
    pub const RIGHT_X: usize = 2;
    pub const RIGHT_Y: usize = 3;

    pub const COUNT: usize = 4;
}

static BUTTON_NAMES: [&str; button::COUNT] = [
    "south", "east", "west", "north", "lb", "rb", "lt", "rt", "select", "start", "ls", "rs", "up",
    "down", "left", "right", "home",
];

static AXIS_NAMES: [&str; axis::COUNT] = ["lx", "ly", "rx", "ry"];

/// Look up a button index by its short name (`south`, `lb`, `up`, ...).
pub fn button_by_name(name: &str) -> Option<usize> {
    BUTTON_NAMES.iter().position(|n| *n == name)
}

/// Look up an axis index by its short name (`lx`, `ly`, `rx`, `ry`).
pub fn axis_by_name(name: &str) -> Option<usize> {
    AXIS_NAMES.iter().position(|n| *n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_resolve_to_indices() {
        assert_eq!(button_by_name("south"), Some(button::SOUTH));
        assert_eq!(button_by_name("up"), Some(button::DPAD_UP));
        assert_eq!(button_by_name("rt"), Some(button::RIGHT_TRIGGER));
        assert_eq!(axis_by_name("ry"), Some(axis::RIGHT_Y));
        assert_eq!(button_by_name("turbo"), None);
        assert_eq!(axis_by_name("lz"), None);
    }
}
