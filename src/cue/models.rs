use std::fmt;

/// Structure representation of a CUE sheet, covering the full field order
/// the serializer knows how to emit. The CCD mapping only ever fills a
/// subset (one BINARY file, no performer/title credits, no gaps), but the
/// model stays complete so the serializer is a faithful rendering of the
/// format rather than of one producer.
#[derive(Debug, Clone, Default)]
pub struct CueSheet {
    pub catalog: Option<String>,
    pub cd_text_file: Option<String>,
    pub performer: Option<String>,
    pub songwriter: Option<String>,
    pub title: Option<String>,
    pub files: Vec<CueFile>,
}

#[derive(Debug, Clone)]
pub struct CueFile {
    pub filename: String,
    pub file_type: FileType,
    /// Number the first track is announced with; tracks are contiguous from
    /// here on.
    pub first_track: u8,
    pub tracks: Vec<CueTrack>,
}

#[derive(Debug, Clone, Default)]
pub struct CueTrack {
    pub data_type: DataType,
    pub flags: Option<String>,
    pub isrc: Option<String>,
    pub performer: Option<String>,
    pub songwriter: Option<String>,
    pub title: Option<String>,
    pub pregap: Option<Msf>,
    /// INDEX entries by slot number; `None` slots were never supplied and
    /// are omitted from the output.
    pub indices: Vec<Option<Msf>>,
    pub postgap: Option<Msf>,
}

/// Minutes:Seconds:Frames position, 75 frames per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Msf {
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

impl fmt::Display for Msf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.minutes, self.seconds, self.frames)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Binary,
    Motorola,
    Aiff,
    Wave,
    Mp3,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Binary => "BINARY",
            FileType::Motorola => "MOTOROLA",
            FileType::Aiff => "AIFF",
            FileType::Wave => "WAVE",
            FileType::Mp3 => "MP3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    #[default]
    Audio2352,
    Cdg2448,
    Mode1_2048,
    Mode1_2352,
    Mode2_2336,
    Mode2_2352,
    Cdi2336,
    Cdi2352,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Audio2352 => "AUDIO",
            DataType::Cdg2448 => "CDG",
            DataType::Mode1_2048 => "MODE1/2048",
            DataType::Mode1_2352 => "MODE1/2352",
            DataType::Mode2_2336 => "MODE2/2336",
            DataType::Mode2_2352 => "MODE2/2352",
            DataType::Cdi2336 => "CDI/2336",
            DataType::Cdi2352 => "CDI/2352",
        }
    }
}
