//! Supported die types and the display mode selector.

/// Face counts, in the order the cycle button steps through them.
pub const DIE_TYPES: [u8; 8] = [4, 6, 8, 10, 12, 20, 100, 2];

/// Index into [`DIE_TYPES`], always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DieIndex(u8);

impl DieIndex {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(DIE_TYPES.len() as u8 - 1);

    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < DIE_TYPES.len() {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn faces(self) -> u8 {
        DIE_TYPES[self.0 as usize]
    }

    /// The two-sided die is shown as heads/tails instead of a number.
    #[inline]
    pub const fn is_coin(self) -> bool {
        self.faces() == 2
    }

    /// Next die type, wrapping from the last entry back to the first.
    pub const fn next(self) -> Self {
        if self.0 >= Self::LAST.0 {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }
}

/// What the display is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Face count of the active die, with the decimal point lit
    ShowDieType,
    /// Last rolled value
    ShowValue,
}
