use core::convert::Infallible;

use ufmt::{uWrite, uwrite};

/// Line-oriented debug console over any `ufmt` writer.
pub struct Console<W> {
    out: W,
}

impl<W: uWrite> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_str(&mut self, s: &str) {
        self.out.write_str(s).ok();
    }

    pub fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    // Print formatted debug info
    pub fn debug(&mut self, msg: &str, val: u8) {
        uwrite!(self.out, "[DBG] {}: {}\r\n", msg, val).ok();
    }

    pub fn inner(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Discards everything. The board's USART pins drive the digit enables,
/// so there is nowhere to send log output on hardware.
#[derive(Default)]
pub struct Silent;

impl uWrite for Silent {
    type Error = Infallible;

    fn write_str(&mut self, _s: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Console<Silent> {
    pub fn silent() -> Self {
        Self::new(Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Capture(String);

    impl uWrite for Capture {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn lines_are_crlf_terminated() {
        let mut console = Console::new(Capture::default());
        console.write_line("e-die ready");
        console.debug("roll", 17);
        assert_eq!(console.into_inner().0, "e-die ready\r\n[DBG] roll: 17\r\n");
    }
}
