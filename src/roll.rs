//! Value selection from the free-running Timer1 count.
//!
//! The counter advances every 8 us and wraps every 0.5088 s, so the instant a
//! person presses the roll button lands on an effectively unpredictable
//! count. This is fine for a board game and nothing else: it is NOT a
//! cryptographic source.

use core::convert::Infallible;

use crate::dice::DieIndex;

/// A hardware counter that increments continuously and wraps at a fixed period.
pub trait FreeRunningCounter {
    /// Current count.
    fn count(&self) -> u16;

    /// Completes once per counter period. Returns `WouldBlock` until the
    /// period flag is set, then clears the flag and returns `Ok`.
    fn poll_period(&mut self) -> nb::Result<(), Infallible>;
}

/// Reduce a counter sample to a face value in `1..=faces`.
#[inline]
pub fn face_from_count(count: u16, faces: u8) -> u8 {
    debug_assert!(faces > 0);
    (count % u16::from(faces)) as u8 + 1
}

/// Roll the active die by sampling the counter.
pub fn roll<C: FreeRunningCounter>(counter: &C, die: DieIndex) -> u8 {
    face_from_count(counter.count(), die.faces())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COUNTER_PERIOD;
    use crate::dice::DIE_TYPES;

    fn histogram(period: u32, faces: u8) -> Vec<u32> {
        let mut counts = vec![0u32; faces as usize];
        for count in 0..period {
            let value = face_from_count(count as u16, faces);
            counts[value as usize - 1] += 1;
        }
        counts
    }

    fn skew(counts: &[u32]) -> u32 {
        let max = counts.iter().max().unwrap();
        let min = counts.iter().min().unwrap();
        max - min
    }

    #[test]
    fn every_sample_lands_in_range() {
        for &faces in DIE_TYPES.iter() {
            for count in (0..=u16::MAX).step_by(7) {
                let value = face_from_count(count, faces);
                assert!((1..=faces).contains(&value), "d{faces} gave {value}");
            }
        }
    }

    #[test]
    fn configured_period_is_unbiased_for_every_die() {
        for &faces in DIE_TYPES.iter() {
            let counts = histogram(COUNTER_PERIOD, faces);
            assert_eq!(skew(&counts), 0, "d{faces}");
            assert_eq!(counts[0], COUNTER_PERIOD / u32::from(faces));
        }
    }

    #[test]
    fn non_dividing_period_skews_by_at_most_one_count() {
        // One extra tick, as if the counter ran 0..=63600
        let period = COUNTER_PERIOD + 1;
        for &faces in DIE_TYPES.iter() {
            let counts = histogram(period, faces);
            let bound = if period % u32::from(faces) == 0 { 0 } else { 1 };
            assert!(skew(&counts) <= bound, "d{faces}");
        }
        // The extra tick lands on the lowest face
        let counts = histogram(period, 6);
        assert_eq!(counts[0], counts[1] + 1);
    }

    struct Fixed(u16);

    impl FreeRunningCounter for Fixed {
        fn count(&self) -> u16 {
            self.0
        }

        fn poll_period(&mut self) -> nb::Result<(), Infallible> {
            Err(nb::Error::WouldBlock)
        }
    }

    #[test]
    fn roll_uses_active_face_count() {
        let d20 = DieIndex::new(5).unwrap();
        assert_eq!(roll(&Fixed(0), d20), 1);
        assert_eq!(roll(&Fixed(19), d20), 20);
        assert_eq!(roll(&Fixed(20), d20), 1);
        let d100 = DieIndex::new(6).unwrap();
        assert_eq!(roll(&Fixed(63_599), d100), 100);
    }
}
