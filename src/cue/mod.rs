use crate::cue::error::CueResult;
use crate::cue::models::CueSheet;
use std::io::Write;

pub mod error;
pub mod models;

/// Render a CUE sheet as text.
///
/// Fields come out in the fixed order CUE readers expect: sheet-level
/// CATALOG, CDTEXTFILE, PERFORMER, SONGWRITER and TITLE, then per file the
/// FILE line and its tracks, each track followed by FLAGS, ISRC, the credit
/// lines, PREGAP, every supplied INDEX in ascending slot order and POSTGAP.
/// Absent optional fields are omitted entirely, never emitted blank. The
/// 80-character limit CUE documents for quoted strings is the caller's
/// business; nothing is truncated here.
pub fn write_cue(cue: &CueSheet, writer: &mut impl Write) -> CueResult<()> {
    if let Some(catalog) = &cue.catalog {
        writeln!(writer, "CATALOG {catalog}")?;
    }
    if let Some(cd_text_file) = &cue.cd_text_file {
        writeln!(writer, "CDTEXTFILE \"{cd_text_file}\"")?;
    }
    if let Some(performer) = &cue.performer {
        writeln!(writer, "PERFORMER \"{performer}\"")?;
    }
    if let Some(songwriter) = &cue.songwriter {
        writeln!(writer, "SONGWRITER \"{songwriter}\"")?;
    }
    if let Some(title) = &cue.title {
        writeln!(writer, "TITLE \"{title}\"")?;
    }

    for file in &cue.files {
        writeln!(writer, "FILE \"{}\" {}", file.filename, file.file_type.as_str())?;

        for (offset, track) in file.tracks.iter().enumerate() {
            let number = file.first_track as usize + offset;
            writeln!(writer, "  TRACK {} {}", number, track.data_type.as_str())?;

            if let Some(flags) = &track.flags {
                writeln!(writer, "    FLAGS {flags}")?;
            }
            if let Some(isrc) = &track.isrc {
                writeln!(writer, "    ISRC {isrc}")?;
            }
            if let Some(performer) = &track.performer {
                writeln!(writer, "    PERFORMER \"{performer}\"")?;
            }
            if let Some(songwriter) = &track.songwriter {
                writeln!(writer, "    SONGWRITER \"{songwriter}\"")?;
            }
            if let Some(title) = &track.title {
                writeln!(writer, "    TITLE \"{title}\"")?;
            }
            if let Some(pregap) = track.pregap {
                writeln!(writer, "    PREGAP {pregap}")?;
            }
            for (slot, index) in track.indices.iter().enumerate() {
                if let Some(position) = index {
                    writeln!(writer, "    INDEX {slot:02} {position}")?;
                }
            }
            if let Some(postgap) = track.postgap {
                writeln!(writer, "    POSTGAP {postgap}")?;
            }
        }
    }

    Ok(())
}
