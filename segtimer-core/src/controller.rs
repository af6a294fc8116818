//! Timer controller coordinating the state machine, countdown and relay
//!
//! The controller is the central brain that:
//! - Turns encoder and button input into state machine events
//! - Keeps the countdown against the millisecond clock
//! - Writes the relay on every state transition
//! - Decides what the display shows
//!
//! It is advanced by [`TimerController::tick`] once per main-loop
//! iteration and takes at most one transition per tick.

use crate::config::TimerConfig;
use crate::display::{text, DisplayContent, Text};
use crate::state::{Event, State};
use crate::timer::{MessageHold, Remaining, SecondTicker, SetPoint};
use crate::traits::{ButtonEvent, EncoderStep, Input, RelayOutput};

/// Countdown timer driving a relay
pub struct TimerController<R> {
    config: TimerConfig,
    relay: R,
    state: State,
    /// Dialed duration, only edited in Idle
    set_point: SetPoint,
    /// Authoritative countdown value
    remaining: Remaining,
    /// Baseline for one-second decrements
    ticker: SecondTicker,
    /// Pending message; suspends evaluation until it expires
    hold: Option<MessageHold>,
}

impl<R: RelayOutput> TimerController<R> {
    /// Create a controller in `Init` with the relay released
    pub fn new(relay: R, config: TimerConfig) -> Self {
        let mut ctrl = Self {
            config,
            relay,
            state: State::Init,
            set_point: SetPoint::ZERO,
            remaining: Remaining::ZERO,
            ticker: SecondTicker::new(0),
            hold: None,
        };
        ctrl.enter(State::Init, Event::Reset, 0);
        ctrl
    }

    /// Show the startup message before the first evaluation
    pub fn power_on(&mut self, now_ms: u32) {
        let message = self.config.startup_text.clone();
        let duration = self.config.startup_hold_ms;
        self.begin_hold(message, duration, now_ms);
    }

    /// Advance the timer by one loop iteration
    ///
    /// Returns the event that caused a transition, if any. Input arriving
    /// while a message hold is pending is discarded.
    pub fn tick(&mut self, now_ms: u32, input: Input) -> Option<Event> {
        if let Some(hold) = &self.hold {
            if !hold.is_expired(now_ms) {
                return None;
            }
            self.hold = None;
        }

        let event = self.evaluate(now_ms, input)?;
        let next = self.state.transition(event);
        if next != self.state {
            self.enter(next, event, now_ms);
        }
        Some(event)
    }

    /// Drop any hold and go straight to Idle with the relay released
    ///
    /// Recovery path for a controller found in an inconsistent situation;
    /// the normal lifecycle never needs it.
    pub fn force_idle(&mut self) {
        self.hold = None;
        self.remaining = self.set_point.to_remaining(self.config.step_seconds);
        self.state = State::Idle;
        self.relay.set_energized(self.state.relay_energized());
    }

    /// Decide which event, if any, the current state produces
    fn evaluate(&mut self, now_ms: u32, input: Input) -> Option<Event> {
        match self.state {
            State::Init => Some(Event::Loaded),
            State::Idle => self.evaluate_idle(input),
            State::Armed => Some(Event::Engaged),
            State::Running => self.evaluate_running(now_ms, input),
            State::Paused => match input.button {
                ButtonEvent::Press => Some(Event::Resume),
                ButtonEvent::LongPress => Some(Event::Abort),
                ButtonEvent::None => None,
            },
            State::Ended => Some(Event::Reset),
        }
    }

    fn evaluate_idle(&mut self, input: Input) -> Option<Event> {
        if self.state.accepts_adjustment() {
            let max = self.config.max_set_point();
            match input.encoder {
                EncoderStep::Clockwise => {
                    self.set_point = self.set_point.step_up(max);
                    return Some(Event::Adjusted);
                }
                EncoderStep::CounterClockwise => {
                    self.set_point = self.set_point.step_down();
                    return Some(Event::Adjusted);
                }
                EncoderStep::None => {}
            }
        }

        match input.button {
            // Zero-length runs are ignored
            ButtonEvent::Press if !self.set_point.is_zero() => Some(Event::Start),
            _ => None,
        }
    }

    fn evaluate_running(&mut self, now_ms: u32, input: Input) -> Option<Event> {
        if self.ticker.poll(now_ms) {
            match self.remaining.decrement() {
                Some(next) => {
                    self.remaining = next;
                    if next.is_zero() {
                        return Some(Event::Expired);
                    }
                }
                None => return Some(Event::Expired),
            }
        }

        match input.button {
            ButtonEvent::Press => Some(Event::Pause),
            _ => None,
        }
    }

    /// Switch state and run its entry action
    fn enter(&mut self, next: State, event: Event, now_ms: u32) {
        self.state = next;
        self.relay.set_energized(next.relay_energized());

        match next {
            State::Init => {
                self.remaining = self.set_point.to_remaining(self.config.step_seconds);
            }
            State::Armed => self.ticker.rebase(now_ms),
            State::Running => {
                // Paused time is neither counted nor credited back
                if event == Event::Resume {
                    self.ticker.rebase(now_ms);
                }
            }
            State::Paused => {
                let message = self.config.pause_text.clone();
                let duration = self.config.pause_hold_ms;
                self.begin_hold(message, duration, now_ms);
            }
            State::Ended => {
                let message = self.config.end_text.clone();
                let duration = self.config.end_hold_ms;
                self.begin_hold(message, duration, now_ms);
            }
            State::Idle => {}
        }
    }

    fn begin_hold(&mut self, message: Text, duration_ms: u32, now_ms: u32) {
        self.hold = if duration_ms > 0 {
            Some(MessageHold::new(message, now_ms, duration_ms))
        } else {
            None
        };
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the dialed set-point
    pub fn set_point(&self) -> SetPoint {
        self.set_point
    }

    /// Get the countdown value
    pub fn remaining(&self) -> Remaining {
        self.remaining
    }

    /// Check if the relay is energized
    pub fn relay_energized(&self) -> bool {
        self.relay.is_energized()
    }

    /// Get the active configuration
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Get the relay driver
    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Message hold that is still pending at `now_ms`
    pub fn pending_message(&self, now_ms: u32) -> Option<&MessageHold> {
        self.hold.as_ref().filter(|hold| !hold.is_expired(now_ms))
    }

    /// Content the display should show at `now_ms`
    pub fn display_content(&self, now_ms: u32) -> DisplayContent {
        match self.pending_message(now_ms) {
            Some(hold) => DisplayContent::Message {
                text: text(hold.text()),
                hold_ms: hold.remaining_ms(now_ms),
            },
            None => DisplayContent::countdown(self.remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Relay that records every level change
    #[derive(Default)]
    struct RecordingRelay {
        on: bool,
        writes: u32,
        switched_on: u32,
        switched_off: u32,
    }

    impl RelayOutput for RecordingRelay {
        fn set_energized(&mut self, on: bool) {
            self.writes += 1;
            if on && !self.on {
                self.switched_on += 1;
            }
            if !on && self.on {
                self.switched_off += 1;
            }
            self.on = on;
        }

        fn is_energized(&self) -> bool {
            self.on
        }
    }

    /// Config without message holds so tests step state by state
    fn no_holds() -> TimerConfig {
        TimerConfig {
            startup_hold_ms: 0,
            pause_hold_ms: 0,
            end_hold_ms: 0,
            ..Default::default()
        }
    }

    fn make_ctrl() -> TimerController<RecordingRelay> {
        TimerController::new(RecordingRelay::default(), no_holds())
    }

    /// Controller in Idle with the given set-point
    fn idle_with(steps: u16) -> TimerController<RecordingRelay> {
        let mut ctrl = make_ctrl();
        ctrl.tick(0, Input::NONE);
        for _ in 0..steps {
            ctrl.tick(0, Input::turn(EncoderStep::Clockwise));
            ctrl.tick(0, Input::NONE);
        }
        assert_eq!(ctrl.state(), State::Idle);
        ctrl
    }

    /// Run ticks every `step_ms` until `until_ms`, checking the relay invariant
    fn run_until(
        ctrl: &mut TimerController<RecordingRelay>,
        from_ms: u32,
        until_ms: u32,
        step_ms: u32,
    ) {
        let mut now = from_ms;
        while now <= until_ms {
            ctrl.tick(now, Input::NONE);
            assert_eq!(ctrl.relay_energized(), ctrl.state().relay_energized());
            now += step_ms;
        }
    }

    #[test]
    fn test_starts_in_init_with_relay_off() {
        let ctrl = make_ctrl();
        assert_eq!(ctrl.state(), State::Init);
        assert!(!ctrl.relay_energized());
        assert_eq!(ctrl.remaining(), Remaining::ZERO);
    }

    #[test]
    fn test_init_goes_to_idle() {
        let mut ctrl = make_ctrl();
        assert_eq!(ctrl.tick(0, Input::NONE), Some(Event::Loaded));
        assert_eq!(ctrl.state(), State::Idle);
    }

    #[test]
    fn test_encoder_adjusts_and_reloads() {
        let mut ctrl = idle_with(0);

        assert_eq!(
            ctrl.tick(10, Input::turn(EncoderStep::Clockwise)),
            Some(Event::Adjusted)
        );
        assert_eq!(ctrl.state(), State::Init);
        assert_eq!(ctrl.set_point().steps(), 1);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 5));

        ctrl.tick(20, Input::NONE);
        assert_eq!(ctrl.state(), State::Idle);

        ctrl.tick(30, Input::turn(EncoderStep::CounterClockwise));
        ctrl.tick(40, Input::NONE);
        assert_eq!(ctrl.set_point(), SetPoint::ZERO);
        assert_eq!(ctrl.remaining(), Remaining::ZERO);
    }

    #[test]
    fn test_counter_clockwise_at_zero_stays_zero() {
        let mut ctrl = idle_with(0);
        ctrl.tick(0, Input::turn(EncoderStep::CounterClockwise));
        assert_eq!(ctrl.set_point(), SetPoint::ZERO);
    }

    #[test]
    fn test_zero_set_point_cannot_arm() {
        let mut ctrl = idle_with(0);
        for t in 0..10 {
            assert_eq!(ctrl.tick(t, Input::press()), None);
            assert_eq!(ctrl.state(), State::Idle);
        }
        assert!(!ctrl.relay_energized());
    }

    #[test]
    fn test_press_arms_then_runs() {
        let mut ctrl = idle_with(2);

        assert_eq!(ctrl.tick(100, Input::press()), Some(Event::Start));
        assert_eq!(ctrl.state(), State::Armed);
        assert!(ctrl.relay_energized());

        assert_eq!(ctrl.tick(110, Input::NONE), Some(Event::Engaged));
        assert_eq!(ctrl.state(), State::Running);
        assert!(ctrl.relay_energized());
    }

    #[test]
    fn test_encoder_ignored_while_running() {
        let mut ctrl = idle_with(2);
        ctrl.tick(0, Input::press());
        ctrl.tick(0, Input::NONE);

        ctrl.tick(10, Input::turn(EncoderStep::Clockwise));
        assert_eq!(ctrl.set_point().steps(), 2);
        assert_eq!(ctrl.state(), State::Running);
    }

    #[test]
    fn test_five_second_run_ends_once() {
        let mut ctrl = idle_with(1);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 5));

        ctrl.tick(0, Input::press());
        run_until(&mut ctrl, 0, 4990, 10);
        assert_eq!(ctrl.state(), State::Running);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 1));

        ctrl.tick(5000, Input::NONE);
        assert_eq!(ctrl.state(), State::Ended);
        assert!(!ctrl.relay_energized());

        // Back to the dialed value afterwards
        run_until(&mut ctrl, 5010, 6000, 10);
        assert_eq!(ctrl.state(), State::Idle);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 5));

        assert_eq!(ctrl.relay().switched_on, 1);
        assert_eq!(ctrl.relay().switched_off, 1);
    }

    #[test]
    fn test_pause_excluded_from_countdown() {
        let mut ctrl = make_ctrl();
        ctrl.tick(0, Input::NONE);
        // 3 seconds needs a 1 s step
        ctrl.config.step_seconds = 1;
        for _ in 0..3 {
            ctrl.tick(0, Input::turn(EncoderStep::Clockwise));
            ctrl.tick(0, Input::NONE);
        }
        assert_eq!(ctrl.remaining(), Remaining::new(0, 3));

        ctrl.tick(0, Input::press());
        ctrl.tick(0, Input::NONE);
        assert_eq!(ctrl.state(), State::Running);

        ctrl.tick(1000, Input::NONE);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 2));

        assert_eq!(ctrl.tick(1200, Input::press()), Some(Event::Pause));
        assert_eq!(ctrl.state(), State::Paused);
        assert!(ctrl.relay_energized());

        // A long wait while paused changes nothing
        run_until(&mut ctrl, 1300, 60_000, 100);
        assert_eq!(ctrl.state(), State::Paused);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 2));

        assert_eq!(ctrl.tick(60_000, Input::press()), Some(Event::Resume));
        assert_eq!(ctrl.state(), State::Running);

        ctrl.tick(60_999, Input::NONE);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 2));
        ctrl.tick(61_000, Input::NONE);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 1));
        ctrl.tick(62_000, Input::NONE);
        assert_eq!(ctrl.state(), State::Ended);
        assert!(!ctrl.relay_energized());
    }

    #[test]
    fn test_immediate_pause_resume_keeps_remaining() {
        let mut ctrl = idle_with(3);
        ctrl.tick(0, Input::press());
        ctrl.tick(0, Input::NONE);
        let before = ctrl.remaining();

        ctrl.tick(500, Input::press());
        ctrl.tick(500, Input::press());
        assert_eq!(ctrl.state(), State::Running);
        assert_eq!(ctrl.remaining(), before);
    }

    #[test]
    fn test_long_press_aborts_from_paused() {
        let mut ctrl = idle_with(3);
        ctrl.tick(0, Input::press());
        ctrl.tick(0, Input::NONE);
        ctrl.tick(100, Input::press());
        assert_eq!(ctrl.state(), State::Paused);

        assert_eq!(ctrl.tick(200, Input::long_press()), Some(Event::Abort));
        assert_eq!(ctrl.state(), State::Ended);
        assert!(!ctrl.relay_energized());
    }

    #[test]
    fn test_long_press_ignored_outside_paused() {
        let mut ctrl = idle_with(3);
        assert_eq!(ctrl.tick(0, Input::long_press()), None);
        assert_eq!(ctrl.state(), State::Idle);

        ctrl.tick(0, Input::press());
        ctrl.tick(0, Input::NONE);
        assert_eq!(ctrl.tick(10, Input::long_press()), None);
        assert_eq!(ctrl.state(), State::Running);
        assert!(ctrl.relay_energized());
    }

    #[test]
    fn test_running_at_zero_ends_without_underflow() {
        let mut ctrl = idle_with(1);
        ctrl.tick(0, Input::press());
        ctrl.tick(0, Input::NONE);
        ctrl.remaining = Remaining::ZERO;

        ctrl.tick(999, Input::NONE);
        assert_eq!(ctrl.state(), State::Running);

        assert_eq!(ctrl.tick(1000, Input::NONE), Some(Event::Expired));
        assert_eq!(ctrl.state(), State::Ended);
        assert_eq!(ctrl.remaining(), Remaining::ZERO);
    }

    #[test]
    fn test_minute_borrow_while_running() {
        let mut ctrl = idle_with(12);
        assert_eq!(ctrl.remaining(), Remaining::new(1, 0));
        ctrl.tick(0, Input::press());
        ctrl.tick(0, Input::NONE);
        ctrl.tick(1000, Input::NONE);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 59));
    }

    #[test]
    fn test_countdown_across_clock_rollover() {
        let start = u32::MAX - 1500;
        let mut ctrl = idle_with(1);
        ctrl.tick(start, Input::press());
        ctrl.tick(start, Input::NONE);

        ctrl.tick(start.wrapping_add(1000), Input::NONE);
        ctrl.tick(start.wrapping_add(2000), Input::NONE);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 3));
    }

    #[test]
    fn test_startup_message_holds_evaluation() {
        let mut ctrl = TimerController::new(RecordingRelay::default(), TimerConfig::default());
        ctrl.power_on(0);

        assert_eq!(
            ctrl.display_content(0),
            DisplayContent::Message {
                text: text("HI"),
                hold_ms: 1000,
            }
        );
        assert_eq!(ctrl.tick(500, Input::NONE), None);
        assert_eq!(ctrl.state(), State::Init);

        assert_eq!(ctrl.tick(1000, Input::NONE), Some(Event::Loaded));
        assert_eq!(ctrl.state(), State::Idle);
        assert!(!ctrl.display_content(1000).is_message());
    }

    #[test]
    fn test_input_during_hold_is_discarded() {
        let mut ctrl = TimerController::new(RecordingRelay::default(), TimerConfig::default());
        ctrl.power_on(0);
        ctrl.tick(0, Input::turn(EncoderStep::Clockwise));
        ctrl.tick(1000, Input::NONE);
        assert_eq!(ctrl.set_point(), SetPoint::ZERO);
    }

    #[test]
    fn test_pause_message_then_frozen_time() {
        let config = TimerConfig {
            startup_hold_ms: 0,
            ..Default::default()
        };
        let mut ctrl = TimerController::new(RecordingRelay::default(), config);
        ctrl.tick(0, Input::NONE);
        for _ in 0..2 {
            ctrl.tick(0, Input::turn(EncoderStep::Clockwise));
            ctrl.tick(0, Input::NONE);
        }
        ctrl.tick(0, Input::press());
        ctrl.tick(0, Input::NONE);
        ctrl.tick(100, Input::press());
        assert_eq!(ctrl.state(), State::Paused);

        match ctrl.display_content(100) {
            DisplayContent::Message { text, .. } => assert_eq!(text.as_str(), "PAUS"),
            other => panic!("expected pause message, got {:?}", other),
        }

        // Presses during the pause message are dropped
        assert_eq!(ctrl.tick(600, Input::press()), None);
        assert_eq!(ctrl.state(), State::Paused);

        assert_eq!(
            ctrl.display_content(1100),
            DisplayContent::countdown(Remaining::new(0, 10))
        );
        assert_eq!(ctrl.tick(1100, Input::press()), Some(Event::Resume));
    }

    #[test]
    fn test_end_message_then_init() {
        let config = TimerConfig {
            startup_hold_ms: 0,
            ..Default::default()
        };
        let mut ctrl = TimerController::new(RecordingRelay::default(), config);
        ctrl.tick(0, Input::NONE);
        ctrl.tick(0, Input::turn(EncoderStep::Clockwise));
        ctrl.tick(0, Input::NONE);
        ctrl.tick(0, Input::press());
        ctrl.tick(0, Input::NONE);
        for t in 1..=5 {
            ctrl.tick(t * 1000, Input::NONE);
        }
        assert_eq!(ctrl.state(), State::Ended);
        assert!(!ctrl.relay_energized());
        assert!(ctrl.display_content(5000).is_message());

        assert_eq!(ctrl.tick(6999, Input::NONE), None);
        assert_eq!(ctrl.tick(7000, Input::NONE), Some(Event::Reset));
        assert_eq!(ctrl.state(), State::Init);
        assert_eq!(ctrl.remaining(), Remaining::new(0, 5));
    }

    #[test]
    fn test_force_idle_releases_relay() {
        let mut ctrl = idle_with(4);
        ctrl.tick(0, Input::press());
        ctrl.tick(0, Input::NONE);
        ctrl.tick(1000, Input::NONE);
        assert!(ctrl.relay_energized());

        ctrl.force_idle();
        assert_eq!(ctrl.state(), State::Idle);
        assert!(!ctrl.relay_energized());
        assert_eq!(ctrl.remaining(), Remaining::new(0, 20));
    }

    #[test]
    fn test_display_shows_set_point_in_idle() {
        let ctrl = idle_with(25);
        assert_eq!(
            ctrl.display_content(0),
            DisplayContent::Digits {
                value: 205,
                decimal_point: Some(1),
            }
        );
    }

    #[test]
    fn test_encoder_spam_saturates_at_max() {
        let config = TimerConfig {
            step_seconds: 60,
            ..no_holds()
        };
        let mut ctrl = TimerController::new(RecordingRelay::default(), config);
        assert_eq!(ctrl.config().max_set_point(), 99);
        ctrl.tick(0, Input::NONE);

        for t in 0..250 {
            ctrl.tick(t, Input::turn(EncoderStep::Clockwise));
            ctrl.tick(t, Input::NONE);
            assert!(ctrl.set_point().steps() <= 99);
        }

        assert_eq!(ctrl.state(), State::Idle);
        assert_eq!(ctrl.set_point().steps(), 99);
        assert_eq!(ctrl.remaining(), Remaining::new(99, 0));
        assert_eq!(
            ctrl.display_content(250),
            DisplayContent::Digits {
                value: 9900,
                decimal_point: Some(1),
            }
        );
    }

    fn arb_input() -> impl Strategy<Value = Input> {
        let encoder = prop_oneof![
            Just(EncoderStep::None),
            Just(EncoderStep::Clockwise),
            Just(EncoderStep::CounterClockwise),
        ];
        let button = prop_oneof![
            4 => Just(ButtonEvent::None),
            1 => Just(ButtonEvent::Press),
            1 => Just(ButtonEvent::LongPress),
        ];
        (encoder, button).prop_map(|(encoder, button)| Input { encoder, button })
    }

    proptest! {
        #[test]
        fn prop_relay_tracks_state(
            inputs in proptest::collection::vec((arb_input(), 0u32..1500), 1..400)
        ) {
            let mut ctrl = TimerController::new(RecordingRelay::default(), TimerConfig::default());
            ctrl.power_on(0);
            let mut now = 0u32;
            for (input, dt) in inputs {
                now = now.wrapping_add(dt);
                let before = ctrl.set_point();
                let state_before = ctrl.state();
                ctrl.tick(now, input);

                prop_assert_eq!(ctrl.relay_energized(), ctrl.state().relay_energized());
                prop_assert!(ctrl.set_point().steps() <= ctrl.config().max_set_point());
                if state_before != State::Idle {
                    prop_assert_eq!(ctrl.set_point(), before);
                }
            }
        }

        #[test]
        fn prop_zero_set_point_never_arms(
            presses in proptest::collection::vec(any::<bool>(), 1..100)
        ) {
            let mut ctrl = idle_with(0);
            for (t, long) in presses.into_iter().enumerate() {
                let input = if long { Input::long_press() } else { Input::press() };
                ctrl.tick(t as u32 * 10, input);
                prop_assert_eq!(ctrl.state(), State::Idle);
            }
        }
    }
}
