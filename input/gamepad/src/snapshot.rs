/// Button and axis state of one pad, read once per poll cycle.
///
/// Indices past the end of either array read as released / centered, so pads
/// reporting fewer controls than the standard layout still evaluate cleanly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    buttons: Vec<bool>,
    axes: Vec<f64>,
}

impl InputSnapshot {
    pub fn new(buttons: Vec<bool>, axes: Vec<f64>) -> Self {
        Self { buttons, axes }
    }

    /// A snapshot with nothing pressed and every stick centered.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn with_button(mut self, index: usize) -> Self {
        self.press(index);
        self
    }

    pub fn with_axis(mut self, index: usize, value: f64) -> Self {
        self.set_axis(index, value);
        self
    }

    pub fn press(&mut self, index: usize) {
        if self.buttons.len() <= index {
            self.buttons.resize(index + 1, false);
        }
        self.buttons[index] = true;
    }

    pub fn set_axis(&mut self, index: usize, value: f64) {
        if self.axes.len() <= index {
            self.axes.resize(index + 1, 0.0);
        }
        self.axes[index] = value;
    }

    pub fn pressed(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }

    pub fn axis(&self, index: usize) -> f64 {
        self.axes.get(index).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{axis, button};

    #[test]
    fn test_out_of_range_reads_neutral() {
        let snap = InputSnapshot::new(vec![true], vec![0.5]);
        assert!(snap.pressed(button::SOUTH));
        assert!(!snap.pressed(button::HOME));
        assert_eq!(snap.axis(axis::LEFT_X), 0.5);
        assert_eq!(snap.axis(axis::RIGHT_Y), 0.0);
    }

    #[test]
    fn test_builders_grow_arrays() {
        let snap = InputSnapshot::neutral()
            .with_button(button::DPAD_UP)
            .with_axis(axis::RIGHT_Y, -1.0);
        assert!(snap.pressed(button::DPAD_UP));
        assert!(!snap.pressed(button::SOUTH));
        assert_eq!(snap.axis(axis::RIGHT_Y), -1.0);
    }
}
