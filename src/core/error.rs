use rust_i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    OutOfBounds { x: u32, y: u32 },
    InvalidDimension { width: u32, height: u32 },
    InvalidDiameter { diameter: u32 },
    SnapshotSizeMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::OutOfBounds { x, y } => write!(f, "{}", t!("error.out_of_bounds", x = x, y = y)),
            CoreError::InvalidDimension { width, height } => write!(f, "{}", t!("error.invalid_dimension", width = width, height = height)),
            CoreError::InvalidDiameter { diameter } => write!(f, "{}", t!("error.invalid_diameter", diameter = diameter)),
            CoreError::SnapshotSizeMismatch { expected, actual } => write!(f, "{}", t!("error.snapshot_size_mismatch", expected = expected, actual = actual)),
        }
    }
}

impl std::error::Error for CoreError {}
pub type Result<T> = std::result::Result<T, CoreError>;
