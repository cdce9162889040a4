//! iNES header parsing and attribute derivation.
//!
//! The 16-byte [iNES](https://www.nesdev.org/wiki/INES) header: magic "NES\x1A", PRG/CHR bank
//! counts, two control bytes, PRG RAM bank count, 7 reserved bytes. Fields are decoded at fixed
//! byte offsets out of a buffered read; in-memory struct layout and host byte order are never
//! relied on.

use std::io::Read;

use crate::cartridge::{Error, Mirroring};

/// Header length in bytes.
pub const HEADER_SIZE: usize = 16;

/// Magic at the start of every iNES file: "NES" followed by the MS-DOS EOF byte.
pub const MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

/// Decoded iNES header. Reserved bytes 9-15 are consumed but not kept; any value is accepted
/// there.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    /// PRG ROM size in 16 KiB banks.
    pub prg_banks: u8,
    /// CHR ROM size in 8 KiB banks; 0 means the board has 8 KiB CHR RAM instead.
    pub chr_banks: u8,
    /// Control byte 1: bit 0 mirroring base, bit 1 battery, bit 2 trainer, bit 3 four-screen,
    /// bits 4-7 mapper low nibble.
    pub ctrl1: u8,
    /// Control byte 2: bits 4-7 mapper high nibble; low nibble unused here.
    pub ctrl2: u8,
    /// PRG RAM size in 8 KiB banks. Decoded but not interpreted here.
    pub ram_banks: u8,
}

impl Header {
    /// Read the 16-byte header from the start of `reader`.
    ///
    /// Consumes exactly [`HEADER_SIZE`] bytes, also when the magic check fails (the full buffer
    /// is read before validation). A read failure or short read surfaces as [`Error::Io`].
    pub fn read<R: Read>(reader: &mut R) -> Result<Self, Error> {
        let mut buf = [0u8; HEADER_SIZE];
        reader.read_exact(&mut buf)?;

        if buf[0..4] != MAGIC {
            log::error!("first 4 bytes do not match the iNES magic");
            return Err(Error::InvalidMagic);
        }

        Ok(Self {
            prg_banks: buf[4],
            chr_banks: buf[5],
            ctrl1: buf[6],
            ctrl2: buf[7],
            ram_banks: buf[8],
        })
    }
}

/// Cartridge configuration packed into the two header control bytes.
#[derive(Debug, Clone, Copy)]
pub struct Attributes {
    /// Mapper number: low nibble from control byte 1, high nibble from control byte 2.
    pub mapper: u8,
    /// Nametable mirroring code.
    pub mirroring: Mirroring,
    /// Board has battery-backed save RAM.
    pub battery_backed: bool,
    /// A 512-byte trainer block precedes PRG ROM in the stream.
    pub trainer_present: bool,
}

impl Attributes {
    /// Derive attributes from the header control bytes. Pure bit arithmetic; cannot fail.
    pub fn from_header(header: &Header) -> Self {
        Self {
            mapper: (header.ctrl1 >> 4) | ((header.ctrl2 >> 4) << 4),
            mirroring: Mirroring::from_control(header.ctrl1),
            battery_backed: (header.ctrl1 >> 1) & 1 == 1,
            trainer_present: (header.ctrl1 >> 2) & 1 == 1,
        }
    }
}
