pub mod button;
pub mod console;
pub mod seven_segment;

pub use button::{Debouncer, Event, Latch, Level};
pub use console::{Console, Silent};
pub use seven_segment::{compose, Frame, Glyph, Multiplexer, SegmentBus};
