use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Fewer than 3 points were supplied to an algorithm that requires a
  /// non-degenerate point set.
  InsufficientPoints,
  /// The input file could not be parsed.
  MalformedInput(String),
  /// The input or hull was degenerate (zero area) where a predicate assumed
  /// otherwise.
  GeometryDegeneracy,
  /// A PlanarGraphState invariant did not hold where it was assumed to.
  InvariantViolation(String),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::InsufficientPoints => write!(f, "at least 3 points are required"),
      Error::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
      Error::GeometryDegeneracy => write!(f, "degenerate geometry (zero-area hull or polygon)"),
      Error::InvariantViolation(msg) => write!(f, "planar graph invariant violated: {}", msg),
    }
  }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Error {
    Error::MalformedInput(e.to_string())
  }
}

pub type Result<T> = std::result::Result<T, Error>;
