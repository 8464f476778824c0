//! Pin-level failures surfaced by the control loop.
//!
//! The board's GPIO is infallible, so on hardware `E` is
//! [`core::convert::Infallible`] and none of these can be constructed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// A button line could not be sampled
    Input(E),
    /// A digit-enable line could not be driven
    Output(E),
}

pub type Result<T, E> = core::result::Result<T, Error<E>>;
