use thiserror::Error;

/// Problems with a [`DungeonMapSpec`](crate::DungeonMapSpec) caught before generation starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("grid of {width}x{height} is too large to address")]
    TooLarge { width: usize, height: usize },

    #[error("room sizes must be at least 1, got min {min} max {max}")]
    ZeroRoomSize { min: u32, max: u32 },

    #[error("min room size {min} exceeds max room size {max}")]
    InvertedRoomSize { min: u32, max: u32 },

    #[error("bad RON map spec: {0}")]
    Ron(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(transparent)]
    InvalidSpec(#[from] SpecError),

    #[error("no room could be placed in {attempts} attempts")]
    NoRoomsPlaced { attempts: usize },
}
