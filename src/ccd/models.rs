use crate::cdt::CdtRecord;

/// Structure representation of a parsed CCD sheet.
///
/// Built incrementally by [`parse_ccd`](crate::ccd::parse_ccd) and read-only
/// afterwards. The declared-count fields inside [`DiscSection`] and
/// [`CdTextSection`] are reconciled against the entries actually observed
/// before the sheet is handed out, so `disc.sessions`, `disc.toc_entries` and
/// `cd_text.entries` always match the corresponding array lengths.
#[derive(Debug, Clone, Default)]
pub struct CcdSheet {
    pub clone_cd: CloneCdSection,
    pub disc: DiscSection,
    pub cd_text: CdTextSection,
    pub sessions: Vec<SessionSection>,
    pub entries: Vec<TocEntry>,
    pub tracks: Vec<TrackSection>,
}

/// `[CloneCD]` section. Not used by the CUE mapping.
#[derive(Debug, Clone)]
pub struct CloneCdSection {
    pub version: i32,
}

impl Default for CloneCdSection {
    fn default() -> Self {
        // Version 3 is by far the most common sheet version in the wild.
        Self { version: 3 }
    }
}

/// `[Disc]` section.
#[derive(Debug, Clone, Default)]
pub struct DiscSection {
    /// Number of `[Entry N]` (TOC) sections.
    pub toc_entries: i32,
    /// Number of `[Session N]` sections.
    pub sessions: i32,
    pub data_tracks_scrambled: i32,
    /// Size of the CDT file in bytes minus the terminating null. Stored for
    /// completeness, never read back; the CDT size is deduced from the
    /// records themselves.
    pub cd_text_length: i32,
    /// Media Catalog Number, up to 13 alphanumeric characters.
    pub catalog: Option<String>,
}

/// `[CDText]` section: a declared record count plus the raw 16-byte records.
#[derive(Debug, Clone, Default)]
pub struct CdTextSection {
    pub entries: i32,
    pub records: Vec<CdtRecord>,
}

/// `[Session N]` section. Not used by the CUE mapping.
#[derive(Debug, Clone, Default)]
pub struct SessionSection {
    pub pre_gap_mode: i32,
    pub pre_gap_sub_c: i32,
}

/// `[Entry N]` section, mirroring one TOC record. Not used by the CUE
/// mapping but parsed so the sheet representation stays complete.
#[derive(Debug, Clone, Default)]
pub struct TocEntry {
    pub session: i32,
    pub point: u32,
    pub adr: u32,
    pub control: u32,
    pub track_no: i32,
    pub a_min: i32,
    pub a_sec: i32,
    pub a_frame: i32,
    pub a_lba: i32,
    pub zero: i32,
    pub p_min: i32,
    pub p_sec: i32,
    pub p_frame: i32,
    pub p_lba: i32,
}

/// `[TRACK N]` section.
#[derive(Debug, Clone)]
pub struct TrackSection {
    /// Track mode: 0 = AUDIO, 1 = MODE1/2352, 2 = MODE2/2352.
    pub mode: i32,
    /// Subcode flags (DCP, 4CH, PRE, SCMS), space separated.
    pub flags: Option<String>,
    /// International Standard Recording Code, 12 characters.
    pub isrc: Option<String>,
    /// INDEX entries in frames. Slots 0 and 1 always exist; -1 marks an
    /// index the sheet never supplied.
    pub indices: Vec<i32>,
}

pub const INDEX_UNSET: i32 = -1;

impl Default for TrackSection {
    fn default() -> Self {
        Self {
            mode: 0,
            flags: None,
            isrc: None,
            indices: vec![INDEX_UNSET, INDEX_UNSET],
        }
    }
}

impl TrackSection {
    /// Record an `INDEX n` value: 0 and 1 overwrite their fixed slots, any
    /// other number appends a new slot. Index numbers are not validated
    /// beyond that, matching how permissive CCD sheets are in practice.
    pub fn set_index(&mut self, number: i32, frames: i32) {
        match number {
            0 | 1 => self.indices[number as usize] = frames,
            _ => self.indices.push(frames),
        }
    }
}
