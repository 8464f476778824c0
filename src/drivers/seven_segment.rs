//! Two-digit multiplexed seven-segment display.
//!
//! Both digits share the segment lines; each digit has its own active-low
//! enable. A frame is painted right digit first, then the left digit if it
//! has anything to show, with only one digit lit at any instant.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use crate::dice::{DieIndex, DisplayMode};

/// Segment bit for the decimal point.
pub const DECIMAL_POINT: u8 = 0b1000_0000;

/// Segment patterns, `.gfedcba`.
static PATTERNS: [u8; 13] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0100_0110, // T
    0b0111_0110, // H
    0b0100_0000, // -
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// Decimal digit; only the ones place is used
    Digit(u8),
    Tails,
    Heads,
    Minus,
}

impl Glyph {
    pub fn segments(self) -> u8 {
        match self {
            Glyph::Digit(d) => PATTERNS[(d % 10) as usize],
            Glyph::Tails => PATTERNS[10],
            Glyph::Heads => PATTERNS[11],
            Glyph::Minus => PATTERNS[12],
        }
    }
}

/// Segment patterns for one multiplex pass. `None` leaves that digit dark.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub right: Option<u8>,
    pub left: Option<u8>,
}

impl Frame {
    /// One or two decimal digits; the tens digit is lit only for values >= 10.
    /// Values of 100 and above keep their last two digits ("00" for 100).
    fn number(value: u8, wipe: u8) -> Self {
        let tens = value / 10;
        Self {
            right: Some(wipe ^ Glyph::Digit(value % 10).segments()),
            left: (tens > 0).then(|| wipe ^ Glyph::Digit(tens % 10).segments()),
        }
    }
}

/// Work out what to paint. Rules apply in order:
/// 1. `ShowDieType`: the face count, decimal point lit as the mode marker.
/// 2. Coin die: `H` for heads, `T` over `-` for tails (value 1).
/// 3. Roll button held: a lone `-` on the right digit.
/// 4. The value as one or two digits.
pub fn compose(value: u8, die: DieIndex, mode: DisplayMode, roll_held: bool) -> Frame {
    match mode {
        DisplayMode::ShowDieType => Frame::number(die.faces(), DECIMAL_POINT),
        DisplayMode::ShowValue if die.is_coin() => {
            if value == 1 {
                Frame {
                    right: Some(Glyph::Tails.segments()),
                    left: Some(Glyph::Minus.segments()),
                }
            } else {
                Frame {
                    right: Some(Glyph::Heads.segments()),
                    left: None,
                }
            }
        }
        DisplayMode::ShowValue if roll_held => Frame {
            right: Some(Glyph::Minus.segments()),
            left: None,
        },
        DisplayMode::ShowValue => Frame::number(value, 0x00),
    }
}

/// The eight shared segment lines, written as one byte.
pub trait SegmentBus {
    fn write(&mut self, pattern: u8);
}

/// Drives a [`Frame`] onto the shared segment lines one digit at a time.
pub struct Multiplexer<S, O> {
    segments: S,
    left: O,
    right: O,
    hold_ms: u16,
}

impl<S, O> Multiplexer<S, O>
where
    S: SegmentBus,
    O: OutputPin,
{
    pub fn new(segments: S, left: O, right: O, hold_ms: u16) -> Self {
        Self {
            segments,
            left,
            right,
            hold_ms,
        }
    }

    /// Turn both digits off. The segment lines are left as they are.
    pub fn blank(&mut self) -> Result<(), O::Error> {
        self.left.set_high()?;
        self.right.set_high()
    }

    /// Paint one frame. Blocks for one hold time per lit digit; both digits
    /// are dark again on return so each gets exactly one hold time.
    pub fn scan<D: DelayMs<u16>>(&mut self, frame: &Frame, delay: &mut D) -> Result<(), O::Error> {
        if let Some(pattern) = frame.right {
            self.blank()?;
            self.segments.write(pattern);
            self.right.set_low()?;
            delay.delay_ms(self.hold_ms);
        }
        if let Some(pattern) = frame.left {
            self.blank()?;
            self.segments.write(pattern);
            self.left.set_low()?;
            delay.delay_ms(self.hold_ms);
        }
        self.blank()
    }

    /// Compose and paint in one go.
    pub fn render<D: DelayMs<u16>>(
        &mut self,
        value: u8,
        die: DieIndex,
        mode: DisplayMode,
        roll_held: bool,
        delay: &mut D,
    ) -> Result<(), O::Error> {
        let frame = compose(value, die, mode, roll_held);
        self.scan(&frame, delay)
    }

    /// Give back the segment bus and digit lines.
    pub fn release(self) -> (S, O, O) {
        (self.segments, self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::delay::MockNoop;
    use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction};

    fn die(faces: u8) -> DieIndex {
        (0..8)
            .filter_map(DieIndex::new)
            .find(|d| d.faces() == faces)
            .unwrap()
    }

    fn digit(d: u8) -> u8 {
        Glyph::Digit(d).segments()
    }

    #[derive(Default)]
    struct Recorder(Vec<u8>);

    impl SegmentBus for Recorder {
        fn write(&mut self, pattern: u8) {
            self.0.push(pattern);
        }
    }

    #[test]
    fn coin_tails_spells_t_over_minus() {
        let frame = compose(1, die(2), DisplayMode::ShowValue, false);
        assert_eq!(frame.right, Some(Glyph::Tails.segments()));
        assert_eq!(frame.left, Some(Glyph::Minus.segments()));
    }

    #[test]
    fn coin_heads_is_a_single_glyph() {
        for value in [2, 6] {
            let frame = compose(value, die(2), DisplayMode::ShowValue, false);
            assert_eq!(frame.right, Some(Glyph::Heads.segments()));
            assert_eq!(frame.left, None);
        }
    }

    #[test]
    fn coin_wins_over_held_roll_button() {
        let frame = compose(1, die(2), DisplayMode::ShowValue, true);
        assert_eq!(frame.right, Some(Glyph::Tails.segments()));
        assert_eq!(frame.left, Some(Glyph::Minus.segments()));
    }

    #[test]
    fn held_roll_button_shows_lone_minus() {
        let frame = compose(42, die(100), DisplayMode::ShowValue, true);
        assert_eq!(frame.right, Some(Glyph::Minus.segments()));
        assert_eq!(frame.left, None);
    }

    #[test]
    fn single_digit_value_leaves_left_dark() {
        let frame = compose(7, die(8), DisplayMode::ShowValue, false);
        assert_eq!(frame, Frame { right: Some(digit(7)), left: None });
    }

    #[test]
    fn two_digit_value() {
        let frame = compose(42, die(100), DisplayMode::ShowValue, false);
        assert_eq!(frame, Frame { right: Some(digit(2)), left: Some(digit(4)) });
    }

    #[test]
    fn die_type_carries_decimal_point() {
        let frame = compose(3, die(6), DisplayMode::ShowDieType, false);
        assert_eq!(frame.right, Some(DECIMAL_POINT | digit(6)));
        assert_eq!(frame.left, None);

        // held roll button is ignored on the die-type screen
        let held = compose(3, die(6), DisplayMode::ShowDieType, true);
        assert_eq!(held, frame);
    }

    #[test]
    fn hundred_shows_as_double_zero() {
        let frame = compose(0, die(100), DisplayMode::ShowDieType, false);
        assert_eq!(frame.right, Some(DECIMAL_POINT | digit(0)));
        assert_eq!(frame.left, Some(DECIMAL_POINT | digit(0)));

        let rolled = compose(100, die(100), DisplayMode::ShowValue, false);
        assert_eq!(rolled, Frame { right: Some(digit(0)), left: Some(digit(0)) });
    }

    #[test]
    fn glyphs_never_use_the_decimal_point() {
        let glyphs = (0..10)
            .map(Glyph::Digit)
            .chain([Glyph::Tails, Glyph::Heads, Glyph::Minus]);
        for glyph in glyphs {
            assert_eq!(glyph.segments() & DECIMAL_POINT, 0, "{glyph:?}");
        }
    }

    #[test]
    fn scan_lights_right_digit_only() {
        let left = PinMock::new(&[
            Transaction::set(State::High),
            Transaction::set(State::High),
        ]);
        let right = PinMock::new(&[
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ]);
        let mut display = Multiplexer::new(Recorder::default(), left, right, 10);
        let frame = Frame { right: Some(digit(7)), left: None };
        display.scan(&frame, &mut MockNoop::new()).unwrap();

        let (segments, mut left, mut right) = display.release();
        assert_eq!(segments.0, [digit(7)]);
        left.done();
        right.done();
    }

    #[test]
    fn scan_blanks_between_digits() {
        let left = PinMock::new(&[
            Transaction::set(State::High),
            Transaction::set(State::High),
            Transaction::set(State::Low),
            // dark after the frame
            Transaction::set(State::High),
        ]);
        let right = PinMock::new(&[
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::High),
        ]);
        let mut display = Multiplexer::new(Recorder::default(), left, right, 10);
        display
            .render(42, die(100), DisplayMode::ShowValue, false, &mut MockNoop::new())
            .unwrap();

        let (segments, mut left, mut right) = display.release();
        assert_eq!(segments.0, [digit(2), digit(4)]);
        left.done();
        right.done();
    }

    #[test]
    fn blank_turns_both_digits_off() {
        let left = PinMock::new(&[Transaction::set(State::High)]);
        let right = PinMock::new(&[Transaction::set(State::High)]);
        let mut display = Multiplexer::new(Recorder::default(), left, right, 10);
        display.blank().unwrap();

        let (segments, mut left, mut right) = display.release();
        assert!(segments.0.is_empty());
        left.done();
        right.done();
    }
}
