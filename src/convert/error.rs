use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// A track mode outside 0..=2 cannot come from the parser's defaults, so
    /// hitting one means the sheet model was corrupted after parsing.
    #[error("track {track} has unknown mode {mode}; this is a bug, please report it")]
    InvalidTrackMode { track: usize, mode: i32 },
}

pub type ConvertResult<T> = Result<T, ConvertError>;
