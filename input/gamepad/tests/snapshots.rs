use doomweb_common::event::KeyTransition;
use doomweb_gamepad::layout::{axis, button};
use doomweb_gamepad::{GamepadTranslator, InputSnapshot};

fn session(frames: &[InputSnapshot]) -> Vec<KeyTransition> {
    let mut emitted: Vec<KeyTransition> = Vec::new();
    let mut translator = GamepadTranslator::new();
    translator.connect(0, &mut emitted);
    for frame in frames {
        translator.poll(Some(frame), &mut emitted);
    }
    emitted
}

#[test]
fn test_south_press_emits_use_and_confirm() {
    let pressed = InputSnapshot::neutral().with_button(button::SOUTH);
    let emitted = session(&[pressed.clone(), pressed, InputSnapshot::neutral()]);
    insta::assert_yaml_snapshot!(emitted);
}

#[test]
fn test_left_stick_forward() {
    let pushed = InputSnapshot::neutral().with_axis(axis::LEFT_Y, -0.5);
    let centered = InputSnapshot::neutral().with_axis(axis::LEFT_Y, 0.0);
    let emitted = session(&[pushed.clone(), pushed, centered]);
    insta::assert_yaml_snapshot!(emitted);
}

#[test]
fn test_dpad_up_drives_movement_and_menu() {
    let up = InputSnapshot::neutral().with_button(button::DPAD_UP);
    let emitted = session(&[up, InputSnapshot::neutral()]);
    insta::assert_yaml_snapshot!(emitted);
}
