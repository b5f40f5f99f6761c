use doomweb_trace::{parse, render, replay};

fn transcript(source: &str) -> String {
    let trace = parse(source).expect("trace should parse");
    render(&replay(&trace))
}

#[test]
fn test_stick_and_button_session() {
    let out = transcript(
        "connect 0
frame ly=-0.5
frame ly=-0.5
frame ly=0
frame south
lost
frame south
frame
disconnect 0
frame south
",
    );
    insta::assert_snapshot!(out, @r"
    1: connected gamepad 0
    2: down forward (ArrowUp/38)
    4: up forward (ArrowUp/38)
    5: down use (Space/32)
    5: down confirm (Enter/13)
    6: unavailable
    8: up use (Space/32)
    8: up confirm (Enter/13)
    9: disconnected gamepad 0
    10: idle
    ");
}

#[test]
fn test_second_pad_takes_over() {
    let out = transcript(
        "connect 0
frame up
connect 1
frame up
disconnect 0
disconnect 1
",
    );
    insta::assert_snapshot!(out, @r"
    1: connected gamepad 0
    2: down forward (ArrowUp/38)
    2: down menu-up (ArrowUp/38)
    3: up forward (ArrowUp/38)
    3: up menu-up (ArrowUp/38)
    3: connected gamepad 1
    4: down forward (ArrowUp/38)
    4: down menu-up (ArrowUp/38)
    5: ignored disconnect of gamepad 0
    6: up forward (ArrowUp/38)
    6: up menu-up (ArrowUp/38)
    6: disconnected gamepad 1
    ");
}

#[test]
fn test_deadzone_edges() {
    let out = transcript(
        "connect 0
frame lx=0.3 rx=-0.3
frame lx=0.31
frame lx=-0.31 ry=0.31
",
    );
    insta::assert_snapshot!(out, @r"
    1: connected gamepad 0
    3: down strafe-right (./190)
    4: down strafe-left (,/188)
    4: up strafe-right (./190)
    4: down menu-down (ArrowDown/40)
    ");
}
