use crate::cdt::error::CdtResult;
use byteorder::{BigEndian, WriteBytesExt};
use crc::{CRC_16_GSM, Crc};
use std::io::Write;

pub mod error;

/// Size of one raw CD-Text pack: a 4-byte header plus 12 bytes of text.
pub const RECORD_SIZE: usize = 16;

// CRC-16/CCITT (poly 0x1021, zero init) with the result complemented, the
// checksum CD-Text packs carry on disc. The catalog calls this CRC-16/GSM.
const CDTEXT_CRC: Crc<u16> = Crc::<u16>::new(&CRC_16_GSM);

/// Checksum over one raw CD-Text pack.
pub fn crc16(payload: &[u8]) -> u16 {
    CDTEXT_CRC.checksum(payload)
}

/// One raw CD-Text pack as it appears in a CCD sheet's `[CDText]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CdtRecord {
    pub pack_type: u8,
    pub track: u8,
    pub sequence: u8,
    pub block: u8,
    pub text: [u8; 12],
}

impl CdtRecord {
    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Self {
        let mut text = [0u8; 12];
        text.copy_from_slice(&bytes[4..]);
        Self {
            pack_type: bytes[0],
            track: bytes[1],
            sequence: bytes[2],
            block: bytes[3],
            text,
        }
    }

    pub fn to_bytes(self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[0] = self.pack_type;
        bytes[1] = self.track;
        bytes[2] = self.sequence;
        bytes[3] = self.block;
        bytes[4..].copy_from_slice(&self.text);
        bytes
    }
}

/// A record plus the checksum computed over its 16 payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdtEntry {
    pub record: CdtRecord,
    pub crc: u16,
}

/// In-memory form of a CDT file: checksummed records in sheet order.
#[derive(Debug, Clone, Default)]
pub struct CdtFile {
    pub entries: Vec<CdtEntry>,
}

impl CdtFile {
    pub fn from_records(records: impl IntoIterator<Item = CdtRecord>) -> Self {
        Self {
            entries: records
                .into_iter()
                .map(|record| CdtEntry {
                    crc: crc16(&record.to_bytes()),
                    record,
                })
                .collect(),
        }
    }
}

/// Serialize a CDT file: each record's 16 payload bytes followed by its
/// checksum, high byte first, then a single terminating null byte.
pub fn write_cdt(cdt: &CdtFile, writer: &mut impl Write) -> CdtResult<()> {
    for entry in &cdt.entries {
        writer.write_all(&entry.record.to_bytes())?;
        writer.write_u16::<BigEndian>(entry.crc)?;
    }
    writer.write_u8(0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc16_of_zero_payload_is_the_complement_of_zero() {
        // Zero bytes never set the accumulator's top bit, so only the final
        // complement remains.
        assert_eq!(crc16(&[0u8; RECORD_SIZE]), 0xffff);
    }

    #[test]
    fn crc16_is_deterministic_and_bit_sensitive() {
        let payload = *b"\x80\x00\x00\x00DISC TITLE\x00\x00";
        let crc = crc16(&payload);
        assert_eq!(crc, crc16(&payload));

        let mut flipped = payload;
        flipped[7] ^= 0x01;
        assert_ne!(crc, crc16(&flipped));
    }

    #[test]
    fn record_byte_layout_round_trips() {
        let bytes: [u8; RECORD_SIZE] = *b"\x81\x01\x02\x00TRACK ONE\x00\x00\x00";
        let record = CdtRecord::from_bytes(&bytes);

        assert_eq!(record.pack_type, 0x81);
        assert_eq!(record.track, 0x01);
        assert_eq!(record.sequence, 0x02);
        assert_eq!(&record.text[..9], b"TRACK ONE");
        assert_eq!(record.to_bytes(), bytes);
    }

    #[test]
    fn empty_file_serializes_to_a_single_null_byte() {
        let mut out = Vec::new();
        write_cdt(&CdtFile::default(), &mut out).unwrap();
        assert_eq!(out, vec![0]);
    }

    #[test]
    fn records_serialize_with_big_endian_checksum_trailers() {
        let record = CdtRecord::from_bytes(b"\x80\x00\x00\x00DISC TITLE\x00\x00");
        let cdt = CdtFile::from_records([record]);

        let mut out = Vec::new();
        write_cdt(&cdt, &mut out).unwrap();

        // 16 payload bytes, 2 checksum bytes, terminator.
        assert_eq!(out.len(), RECORD_SIZE + 2 + 1);
        assert_eq!(&out[..RECORD_SIZE], &record.to_bytes());
        let crc = crc16(&record.to_bytes());
        assert_eq!(out[RECORD_SIZE], (crc >> 8) as u8);
        assert_eq!(out[RECORD_SIZE + 1], (crc & 0xff) as u8);
        assert_eq!(out[RECORD_SIZE + 2], 0);
    }
}
