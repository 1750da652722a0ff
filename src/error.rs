use thiserror::Error;

/// Errors raised when building color sequences or looking up
/// palettes.  Interpolation itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("a color sequence needs at least one color")]
    Empty,
    #[error("sub-range of {len} colors at {start} does not fit in a \
             sequence of {parent} colors")]
    SubRange { start: usize, len: usize, parent: usize },
    #[error("unknown palette “{0}”")]
    UnknownPalette(String),
}
