//! Integration tests for panel-input, driven through the simulated board.

use panel_input::sim::SimBoard;
use panel_input::{
    AnalogConfig, AnalogSmoother, ButtonClassifier, ButtonConfig, ButtonEvent, DigitalInput,
    Gesture, PinId, QuadratureDecoder, SwitchConfig, SwitchDebouncer,
};

const BUTTON: PinId = PinId(3);
const SWITCH: PinId = PinId(4);
const ENC_A: PinId = PinId(5);
const ENC_B: PinId = PinId(6);
const POT: PinId = PinId(7);

/// Button with every gesture enabled and the default timings.
fn full_button(board: &mut SimBoard) -> ButtonClassifier {
    let config = ButtonConfig::default()
        .with_double_click()
        .with_long_press()
        .with_repeat();
    ButtonClassifier::new(board, BUTTON, config)
}

/// Poll the button once per millisecond over `range`, applying `script`
/// (time, pressed) before each poll. Returns every event with its time.
fn run_button(
    button: &mut ButtonClassifier,
    board: &mut SimBoard,
    range: core::ops::Range<u32>,
    script: &[(u32, bool)],
) -> Vec<(u32, ButtonEvent)> {
    let mut clock = SimBoard::new();
    let mut events = Vec::new();
    for t in range {
        clock.set_time(t);
        for &(at, pressed) in script {
            if at == t {
                // Active-low: pressed pulls the pin to ground.
                board.set_level(BUTTON, !pressed);
            }
        }
        if let Some(event) = button.poll(board, &mut clock) {
            events.push((t, event));
        }
    }
    events
}

// ═══════════════════════════════════════════════════════════════════════════
// ButtonClassifier
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn click_waits_out_the_double_click_window() {
    let mut board = SimBoard::new();
    let mut clock = SimBoard::new();
    let mut button = full_button(&mut board);

    let mut poll_at = |board: &mut SimBoard, t: u32| {
        clock.set_time(t);
        button.poll(board, &mut clock)
    };

    board.set_level(BUTTON, false);
    assert_eq!(poll_at(&mut board, 0), None);
    assert_eq!(poll_at(&mut board, 30), None);

    board.set_level(BUTTON, true);
    assert_eq!(poll_at(&mut board, 100), None);
    // Released and debounced, but a second press could still follow.
    assert_eq!(poll_at(&mut board, 126), None);

    let event = poll_at(&mut board, 400).expect("single click");
    assert_eq!(event.gesture, Gesture::Single);
    assert_eq!(event.held_ms, 100);
}

#[test]
fn click_reported_as_soon_as_window_closes() {
    let mut board = SimBoard::new();
    let mut button = full_button(&mut board);

    let events = run_button(&mut button, &mut board, 0..1000, &[(0, true), (100, false)]);

    assert_eq!(events.len(), 1);
    let (t, event) = events[0];
    assert_eq!(t, 351);
    assert_eq!(event.gesture, Gesture::Single);
    assert_eq!(event.held_ms, 100);
}

#[test]
fn two_quick_clicks_make_a_double() {
    let mut board = SimBoard::new();
    let mut button = full_button(&mut board);

    let script = [(0, true), (80, false), (160, true), (240, false)];
    let events = run_button(&mut button, &mut board, 0..1000, &script);

    assert_eq!(events.len(), 1);
    let (t, event) = events[0];
    assert_eq!(t, 266);
    assert_eq!(event.gesture, Gesture::Double);
    assert_eq!(event.held_ms, 80);
}

#[test]
fn slow_second_click_makes_two_singles() {
    let mut board = SimBoard::new();
    let mut button = full_button(&mut board);

    let script = [(0, true), (80, false), (500, true), (580, false)];
    let events = run_button(&mut button, &mut board, 0..1500, &script);

    let gestures: Vec<Gesture> = events.iter().map(|(_, e)| e.gesture).collect();
    assert_eq!(gestures, [Gesture::Single, Gesture::Single]);
}

#[test]
fn hold_gives_long_press_then_repeats() {
    let mut board = SimBoard::new();
    let mut button = full_button(&mut board);

    let events = run_button(&mut button, &mut board, 0..2500, &[(0, true), (1700, false)]);

    let expected = [
        (1001, Gesture::LongPress, 1001),
        (1334, Gesture::Repeat, 333),
        (1667, Gesture::Repeat, 333),
    ];
    assert_eq!(events.len(), expected.len());
    for (&(t, event), &(at, gesture, held)) in events.iter().zip(expected.iter()) {
        assert_eq!(t, at);
        assert_eq!(event.gesture, gesture);
        assert_eq!(event.held_ms, held);
    }
}

#[test]
fn contact_bounce_counts_as_one_click() {
    let mut board = SimBoard::new();
    let mut button = full_button(&mut board);

    // Chatter for 6 ms on press and on release.
    let script = [
        (0, true),
        (2, false),
        (3, true),
        (6, false),
        (7, true),
        (100, false),
        (101, true),
        (104, false),
    ];
    let events = run_button(&mut button, &mut board, 0..1000, &script);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].1.gesture, Gesture::Single);
    assert_eq!(events[0].1.held_ms, 93);
}

// ═══════════════════════════════════════════════════════════════════════════
// SwitchDebouncer
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn switch_reports_once_past_threshold() {
    let mut board = SimBoard::new();
    let mut clock = SimBoard::new();
    let mut switch = SwitchDebouncer::new(&mut board, &mut clock, SWITCH);
    assert!(!switch.value());

    board.set_level(SWITCH, false);
    let mut changes = Vec::new();
    for t in [0, 10, 20, 30, 40] {
        clock.set_time(t);
        changes.push(switch.poll(&mut board, &mut clock));
    }

    assert_eq!(changes, [false, false, false, true, false]);
    assert!(switch.value());
}

#[test]
fn switch_ignores_chatter_shorter_than_threshold() {
    let mut board = SimBoard::new();
    let mut clock = SimBoard::new();
    let mut switch = SwitchDebouncer::with_config(
        &mut board,
        &mut clock,
        SWITCH,
        SwitchConfig {
            stable_ms: 10,
            ..SwitchConfig::default()
        },
    );

    let mut reported = 0;
    for t in 0..200u32 {
        clock.set_time(t);
        // Toggle every 5 ms, faster than the 10 ms threshold.
        if t % 5 == 0 {
            let level = board.level(SWITCH);
            board.set_level(SWITCH, !level);
        }
        if switch.poll(&mut board, &mut clock) {
            reported += 1;
        }
    }

    assert_eq!(reported, 0);
    assert!(!switch.value());
}

// ═══════════════════════════════════════════════════════════════════════════
// QuadratureDecoder
// ═══════════════════════════════════════════════════════════════════════════

static KNOB: QuadratureDecoder = QuadratureDecoder::new(ENC_A, ENC_B);

fn knob_edge(io: &mut dyn DigitalInput) {
    KNOB.on_pin_transition(io);
}

/// One forward detent, phase B leading.
const FORWARD: [(PinId, bool); 4] = [(ENC_B, true), (ENC_A, true), (ENC_B, false), (ENC_A, false)];

#[test]
fn encoder_turns_both_ways_through_interrupts() {
    let mut board = SimBoard::new();
    board.set_levels(&[(ENC_A, false), (ENC_B, false)]);
    KNOB.attach(&mut board, knob_edge);
    KNOB.take_steps();

    for _ in 0..3 {
        for &(pin, level) in &FORWARD {
            board.set_level(pin, level);
        }
    }
    assert_eq!(KNOB.take_steps(), 12);
    assert_eq!(KNOB.take_steps(), 0);

    // Same detent in reverse order.
    for &(pin, level) in FORWARD.iter().rev() {
        board.set_level(pin, !level);
    }
    assert_eq!(KNOB.take_steps(), -4);

    // Rocking back and forth on one edge nets nothing.
    for _ in 0..10 {
        board.set_level(ENC_B, true);
        board.set_level(ENC_B, false);
    }
    assert_eq!(KNOB.peek_steps(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// AnalogSmoother
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn pot_follows_a_slow_sweep() {
    let mut board = SimBoard::new();
    let mut pot = AnalogSmoother::new(&mut board, POT, 0, 100);

    let mut last = pot.value();
    for raw in (0..=1023u16).step_by(4) {
        board.set_analog(POT, raw);
        pot.poll(&mut board);
        // Output never runs backwards on a rising input.
        assert!(pot.value() >= last);
        last = pot.value();
    }
    board.set_analog(POT, 1023);
    for _ in 0..100 {
        pot.poll(&mut board);
    }

    assert_eq!(pot.value(), 100);
}

#[test]
fn pot_on_a_12_bit_converter() {
    let mut board = SimBoard::new();
    let config = AnalogConfig::new(-100, 100).with_input_max(4095);
    let mut pot = AnalogSmoother::with_config(&mut board, POT, config);

    board.set_analog(POT, 0);
    for _ in 0..200 {
        pot.poll(&mut board);
    }
    assert_eq!(pot.value(), -100);
}
