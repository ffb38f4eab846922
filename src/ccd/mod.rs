use crate::ccd::error::CcdResult;
use crate::ccd::models::{CcdSheet, SessionSection, TocEntry, TrackSection};
use crate::cdt::{CdtRecord, RECORD_SIZE};
use std::io::{BufRead, Cursor};
use std::path::{Path, PathBuf};

pub mod error;
pub mod models;

pub struct CcdParser {
    ccd_path: PathBuf,
}

impl CcdParser {
    pub fn new(ccd_path: impl AsRef<Path>) -> Self {
        Self {
            ccd_path: ccd_path.as_ref().to_path_buf(),
        }
    }

    pub async fn parse(&self) -> CcdResult<CcdSheet> {
        let data = tokio::fs::read(&self.ccd_path).await?;
        parse_ccd(Cursor::new(data))
    }
}

/// Section headers recognized in a CCD sheet. Headers only drive the
/// observed-entry counters; fields are identified by their key name alone,
/// so a sheet with reordered or duplicated section bodies still parses
/// deterministically.
enum SectionHeader {
    CloneCd,
    Disc,
    CdText,
    Session,
    Entry,
    Track,
    Unknown,
}

/// Parse a CCD sheet into a [`CcdSheet`].
///
/// Best effort by design: a malformed sheet is never rejected. Lines that
/// match no known key are ignored and unparseable values leave the field at
/// its default, so the only failure mode is an unreadable stream. Declared
/// counts (`Sessions`, `TocEntries`, `Entries`) cap how many sections of
/// their kind are taken; surplus sections are dropped and shortfalls shrink
/// the count to what was actually observed.
pub fn parse_ccd(mut reader: impl BufRead) -> CcdResult<CcdSheet> {
    let mut ccd = CcdSheet::default();

    let mut raw = Vec::new();
    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        // A stray non-UTF-8 byte must not kill the whole conversion.
        let line = String::from_utf8_lossy(&raw);
        let line = line.trim();

        if let Some(header) = parse_section_header(line) {
            match header {
                SectionHeader::Session => {
                    if ccd.disc.sessions > 0 && ccd.sessions.len() < ccd.disc.sessions as usize {
                        ccd.sessions.push(SessionSection::default());
                    }
                }
                SectionHeader::Entry => {
                    if ccd.disc.toc_entries > 0 && ccd.entries.len() < ccd.disc.toc_entries as usize
                    {
                        ccd.entries.push(TocEntry::default());
                    }
                }
                SectionHeader::Track => {
                    // Track sections carry no declared count; the array grows
                    // as headers appear.
                    ccd.tracks.push(TrackSection::default());
                }
                _ => {}
            }
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        apply_field(&mut ccd, key, value);
    }

    // Reconcile the declared counts with what the stream actually held; the
    // finished sheet never reports more entries than it carries.
    ccd.disc.sessions = ccd.sessions.len() as i32;
    ccd.disc.toc_entries = ccd.entries.len() as i32;
    ccd.cd_text.entries = ccd.cd_text.records.len() as i32;

    Ok(ccd)
}

/// Route one `key = value` line into the sheet. Keys are unique across all
/// CCD sections, so no section bookkeeping is needed here; array fields land
/// in the most recently opened section of their kind.
fn apply_field(ccd: &mut CcdSheet, key: &str, value: &str) {
    match key {
        "Version" => assign_int(&mut ccd.clone_cd.version, value),
        "DataTracksScrambled" => assign_int(&mut ccd.disc.data_tracks_scrambled, value),
        "CDTextLength" => assign_int(&mut ccd.disc.cd_text_length, value),
        "CATALOG" => {
            if let Some(catalog) = parse_alnum(value, 13) {
                ccd.disc.catalog = Some(catalog);
            }
        }

        // The first positive count wins and is authoritative from then on.
        "Sessions" => {
            if let Some(sessions) = parse_int(value)
                && sessions > 0
                && ccd.disc.sessions == 0
            {
                ccd.disc.sessions = sessions;
                ccd.sessions.reserve(sessions as usize);
            }
        }
        "TocEntries" => {
            if let Some(toc_entries) = parse_int(value)
                && toc_entries > 0
                && ccd.disc.toc_entries == 0
            {
                ccd.disc.toc_entries = toc_entries;
                ccd.entries.reserve(toc_entries as usize);
            }
        }
        "Entries" => {
            if let Some(entries) = parse_int(value)
                && entries > 0
                && ccd.cd_text.entries == 0
            {
                ccd.cd_text.entries = entries;
                ccd.cd_text.records.reserve(entries as usize);
            }
        }

        "PreGapMode" => {
            if let Some(session) = ccd.sessions.last_mut() {
                assign_int(&mut session.pre_gap_mode, value);
            }
        }
        "PreGapSubC" => {
            if let Some(session) = ccd.sessions.last_mut() {
                assign_int(&mut session.pre_gap_sub_c, value);
            }
        }

        "MODE" => {
            if let Some(track) = ccd.tracks.last_mut() {
                assign_int(&mut track.mode, value);
            }
        }
        "FLAGS" => {
            if let Some(track) = ccd.tracks.last_mut()
                && let Some(flags) = parse_flags(value)
            {
                track.flags = Some(flags);
            }
        }
        "ISRC" => {
            if let Some(track) = ccd.tracks.last_mut()
                && let Some(isrc) = parse_alnum(value, 12)
            {
                track.isrc = Some(isrc);
            }
        }

        _ => {
            if let Some(entry) = ccd.entries.last_mut()
                && apply_toc_field(entry, key, value)
            {
                return;
            }
            if let Some(rest) = key.strip_prefix("INDEX") {
                if let Ok(number) = rest.trim().parse::<i32>()
                    && let Some(track) = ccd.tracks.last_mut()
                    && let Some(frames) = parse_int(value)
                {
                    track.set_index(number, frames);
                }
            } else if let Some(rest) = key.strip_prefix("Entry") {
                // CD-Text data line: `Entry N = <16 hex byte pairs>`. The
                // line both claims the next record slot (while the declared
                // count allows it) and fills the current one.
                if rest.trim().parse::<i32>().is_ok() && ccd.cd_text.entries > 0 {
                    if ccd.cd_text.records.len() < ccd.cd_text.entries as usize {
                        ccd.cd_text.records.push(CdtRecord::default());
                    }
                    if let Some(record) = ccd.cd_text.records.last_mut() {
                        *record = parse_cdtext_record(value);
                    }
                }
            }
        }
    }
}

fn apply_toc_field(entry: &mut TocEntry, key: &str, value: &str) -> bool {
    match key {
        "Session" => assign_int(&mut entry.session, value),
        "Point" => assign_hex(&mut entry.point, value),
        "ADR" => assign_hex(&mut entry.adr, value),
        "Control" => assign_hex(&mut entry.control, value),
        "TrackNo" => assign_int(&mut entry.track_no, value),
        "AMin" => assign_int(&mut entry.a_min, value),
        "ASec" => assign_int(&mut entry.a_sec, value),
        "AFrame" => assign_int(&mut entry.a_frame, value),
        "ALBA" => assign_int(&mut entry.a_lba, value),
        "Zero" => assign_int(&mut entry.zero, value),
        "PMin" => assign_int(&mut entry.p_min, value),
        "PSec" => assign_int(&mut entry.p_sec, value),
        "PFrame" => assign_int(&mut entry.p_frame, value),
        "PLBA" => assign_int(&mut entry.p_lba, value),
        _ => return false,
    }
    true
}

fn parse_section_header(line: &str) -> Option<SectionHeader> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    let name_end = inner
        .find(|c: char| c.is_whitespace() || c.is_ascii_digit())
        .unwrap_or(inner.len());
    let (name, rest) = inner.split_at(name_end);
    let number = rest.trim().parse::<i32>();

    Some(match (name, number.is_ok()) {
        ("CloneCD", false) => SectionHeader::CloneCd,
        ("Disc", false) => SectionHeader::Disc,
        ("CDText", false) => SectionHeader::CdText,
        ("Session", true) => SectionHeader::Session,
        ("Entry", true) => SectionHeader::Entry,
        ("TRACK", true) => SectionHeader::Track,
        _ => SectionHeader::Unknown,
    })
}

fn parse_int(value: &str) -> Option<i32> {
    value.parse().ok()
}

fn assign_int(field: &mut i32, value: &str) {
    if let Some(parsed) = parse_int(value) {
        *field = parsed;
    }
}

fn assign_hex(field: &mut u32, value: &str) {
    if let Ok(parsed) = u32::from_str_radix(value, 16) {
        *field = parsed;
    }
}

/// Leading run of ASCII alphanumerics, capped at `max` characters. Empty
/// runs count as "not supplied".
fn parse_alnum(value: &str, max: usize) -> Option<String> {
    let run: String = value
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .take(max)
        .collect();
    (!run.is_empty()).then_some(run)
}

/// FLAGS values are space-separated alphanumeric tokens; anything past the
/// first foreign character is cut off and trailing whitespace is trimmed.
fn parse_flags(value: &str) -> Option<String> {
    let end = value
        .find(|c: char| !c.is_ascii_alphanumeric() && c != ' ')
        .unwrap_or(value.len());
    let flags = value[..end].trim_end();
    (!flags.is_empty()).then(|| flags.to_string())
}

/// Parse up to 16 two-digit hex byte pairs into a CD-Text record. Parsing
/// stops at the first bad token, leaving the remaining bytes zero.
fn parse_cdtext_record(value: &str) -> CdtRecord {
    let mut bytes = [0u8; RECORD_SIZE];
    for (slot, token) in bytes.iter_mut().zip(value.split_whitespace()) {
        match u8::from_str_radix(token, 16) {
            Ok(byte) => *slot = byte,
            Err(_) => break,
        }
    }
    CdtRecord::from_bytes(&bytes)
}
