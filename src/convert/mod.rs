use crate::ccd::models::{CcdSheet, INDEX_UNSET};
use crate::cdt::CdtFile;
use crate::convert::error::{ConvertError, ConvertResult};
use crate::cue::models::{CueFile, CueSheet, CueTrack, DataType, FileType, Msf};

pub mod error;

const FRAMES_PER_SECOND: i32 = 75;
const SECONDS_PER_MINUTE: i32 = 60;
const FRAMES_PER_MINUTE: i32 = FRAMES_PER_SECOND * SECONDS_PER_MINUTE;

/// Convert a frame count, the unit CCD INDEX entries use, to the
/// Minutes:Seconds:Frames form CUE INDEX entries use.
pub fn frames2msf(frames: i32) -> Msf {
    debug_assert!(frames >= 0);
    Msf {
        minutes: (frames / FRAMES_PER_MINUTE) as u8,
        seconds: ((frames % FRAMES_PER_MINUTE) / FRAMES_PER_SECOND) as u8,
        frames: ((frames % FRAMES_PER_MINUTE) % FRAMES_PER_SECOND) as u8,
    }
}

/// Map a reconciled CCD sheet to a CUE sheet.
///
/// The mapping is lossy and total: the TOC and session sections have no CUE
/// counterpart and are skipped, everything else converts for any sheet the
/// parser can produce. `img_name` lands in the single BINARY FILE entry and
/// `cdt_name` in CDTEXTFILE, which is only emitted when the sheet actually
/// carries CD-Text records.
pub fn ccd2cue(ccd: &CcdSheet, img_name: &str, cdt_name: &str) -> ConvertResult<CueSheet> {
    let mut cue = CueSheet {
        catalog: ccd.disc.catalog.clone(),
        ..Default::default()
    };

    if !ccd.cd_text.records.is_empty() {
        cue.cd_text_file = Some(cdt_name.to_string());
    }

    let mut file = CueFile {
        filename: img_name.to_string(),
        file_type: FileType::Binary,
        first_track: 1,
        tracks: Vec::with_capacity(ccd.tracks.len()),
    };

    for (offset, track) in ccd.tracks.iter().enumerate() {
        let data_type = match track.mode {
            0 => DataType::Audio2352,
            1 => DataType::Mode1_2352,
            2 => DataType::Mode2_2352,
            mode => {
                return Err(ConvertError::InvalidTrackMode {
                    track: offset + 1,
                    mode,
                });
            }
        };

        file.tracks.push(CueTrack {
            data_type,
            flags: track.flags.clone(),
            isrc: track.isrc.clone(),
            indices: track
                .indices
                .iter()
                .map(|&frames| (frames != INDEX_UNSET).then(|| frames2msf(frames)))
                .collect(),
            ..Default::default()
        });
    }

    cue.files.push(file);
    Ok(cue)
}

/// Map a reconciled CCD sheet to a CDT file: every CD-Text record in sheet
/// order, each with its checksum attached. A sheet without CD-Text yields a
/// valid empty file.
pub fn ccd2cdt(ccd: &CcdSheet) -> CdtFile {
    CdtFile::from_records(ccd.cd_text.records.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ccd::models::TrackSection;
    use crate::cdt::CdtRecord;

    #[test]
    fn frames2msf_splits_on_frame_and_minute_boundaries() {
        assert_eq!(
            frames2msf(0),
            Msf {
                minutes: 0,
                seconds: 0,
                frames: 0
            }
        );
        // 4649 = 1 * 4500 + 2 * 75 + 74
        assert_eq!(
            frames2msf(4649),
            Msf {
                minutes: 1,
                seconds: 2,
                frames: 74
            }
        );
        assert_eq!(
            frames2msf(74),
            Msf {
                minutes: 0,
                seconds: 0,
                frames: 74
            }
        );
        assert_eq!(
            frames2msf(75),
            Msf {
                minutes: 0,
                seconds: 1,
                frames: 0
            }
        );
    }

    #[test]
    fn empty_sheet_still_yields_one_binary_file_entry() {
        let cue = ccd2cue(&CcdSheet::default(), "disc.img", "disc.cdt").unwrap();

        assert_eq!(cue.files.len(), 1);
        assert_eq!(cue.files[0].filename, "disc.img");
        assert_eq!(cue.files[0].file_type, FileType::Binary);
        assert_eq!(cue.files[0].first_track, 1);
        assert!(cue.files[0].tracks.is_empty());
        assert_eq!(cue.cd_text_file, None);
        assert_eq!(cue.catalog, None);
    }

    #[test]
    fn track_modes_map_to_their_cue_data_types() {
        let mut ccd = CcdSheet::default();
        for mode in 0..3 {
            ccd.tracks.push(TrackSection {
                mode,
                ..Default::default()
            });
        }

        let cue = ccd2cue(&ccd, "disc.img", "disc.cdt").unwrap();
        let types: Vec<_> = cue.files[0].tracks.iter().map(|t| t.data_type).collect();
        assert_eq!(
            types,
            vec![
                DataType::Audio2352,
                DataType::Mode1_2352,
                DataType::Mode2_2352
            ]
        );
    }

    #[test]
    fn unknown_track_mode_is_an_invariant_violation() {
        let mut ccd = CcdSheet::default();
        ccd.tracks.push(TrackSection {
            mode: 7,
            ..Default::default()
        });

        let err = ccd2cue(&ccd, "disc.img", "disc.cdt").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::InvalidTrackMode { track: 1, mode: 7 }
        ));
    }

    #[test]
    fn unset_indices_stay_unset_and_frames_convert() {
        let mut ccd = CcdSheet::default();
        let mut track = TrackSection::default();
        track.set_index(1, 4649);
        track.set_index(2, 9000);
        ccd.tracks.push(track);

        let cue = ccd2cue(&ccd, "disc.img", "disc.cdt").unwrap();
        let indices = &cue.files[0].tracks[0].indices;
        assert_eq!(indices[0], None);
        assert_eq!(
            indices[1],
            Some(Msf {
                minutes: 1,
                seconds: 2,
                frames: 74
            })
        );
        assert_eq!(
            indices[2],
            Some(Msf {
                minutes: 2,
                seconds: 0,
                frames: 0
            })
        );
    }

    #[test]
    fn catalog_flags_and_isrc_are_copied_when_present() {
        let mut ccd = CcdSheet::default();
        ccd.disc.catalog = Some("1234567890123".to_string());
        ccd.tracks.push(TrackSection {
            flags: Some("DCP 4CH".to_string()),
            isrc: Some("USABC1234567".to_string()),
            ..Default::default()
        });

        let cue = ccd2cue(&ccd, "disc.img", "disc.cdt").unwrap();
        assert_eq!(cue.catalog.as_deref(), Some("1234567890123"));
        let track = &cue.files[0].tracks[0];
        assert_eq!(track.flags.as_deref(), Some("DCP 4CH"));
        assert_eq!(track.isrc.as_deref(), Some("USABC1234567"));
    }

    #[test]
    fn cd_text_presence_controls_the_cdtextfile_entry() {
        let mut ccd = CcdSheet::default();
        let cue = ccd2cue(&ccd, "disc.img", "disc.cdt").unwrap();
        assert_eq!(cue.cd_text_file, None);

        ccd.cd_text.records.push(CdtRecord::default());
        ccd.cd_text.entries = 1;
        let cue = ccd2cue(&ccd, "disc.img", "disc.cdt").unwrap();
        assert_eq!(cue.cd_text_file.as_deref(), Some("disc.cdt"));
    }

    #[test]
    fn ccd2cdt_of_an_empty_sheet_is_empty_not_an_error() {
        let cdt = ccd2cdt(&CcdSheet::default());
        assert!(cdt.entries.is_empty());
    }

    #[test]
    fn ccd2cdt_preserves_record_order_and_attaches_checksums() {
        let mut ccd = CcdSheet::default();
        let first = CdtRecord::from_bytes(b"\x80\x00\x00\x00DISC TITLE\x00\x00");
        let second = CdtRecord::from_bytes(b"\x81\x01\x01\x00TRACK ONE\x00\x00\x00");
        ccd.cd_text.records.extend([first, second]);
        ccd.cd_text.entries = 2;

        let cdt = ccd2cdt(&ccd);
        assert_eq!(cdt.entries.len(), 2);
        assert_eq!(cdt.entries[0].record, first);
        assert_eq!(cdt.entries[1].record, second);
        assert_eq!(cdt.entries[0].crc, crate::cdt::crc16(&first.to_bytes()));
    }
}
