//! NES cartridge loading from iNES format (.nes files).
//!
//! Implements the region layout of the [iNES](https://www.nesdev.org/wiki/INES) format: after
//! the 16-byte header come an optional 512-byte trainer, PRG ROM in 16 KiB banks, then CHR ROM
//! in 8 KiB banks. A cartridge with no CHR ROM gets an 8 KiB zeroed CHR RAM region instead. The
//! decoded [Mapper](https://www.nesdev.org/wiki/Mapper) number is carried as-is for the
//! emulator's mapper implementations to interpret.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::cartridge::header::{Attributes, Header};
use crate::cartridge::{Error, Mirroring};

/// PRG ROM bank size: 16 KiB.
pub const PRG_BANK_SIZE: usize = 16384;
/// CHR ROM bank size: 8 KiB.
pub const CHR_BANK_SIZE: usize = 8192;
/// PRG (save/work) RAM size: one 8 KiB bank.
pub const PRG_RAM_SIZE: usize = 8192;
/// Trainer block size, when control byte 1 flags one.
const TRAINER_SIZE: usize = 512;

/// Decoded cartridge: PRG/CHR data plus the attributes a mapper implementation needs.
///
/// Built once by a successful [`Cartridge::read`]; never mutated afterwards.
#[derive(Debug)]
pub struct Cartridge {
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
    prg_ram: Vec<u8>,
    mapper: u8,
    mirroring: Mirroring,
    battery_backed: bool,
}

impl Cartridge {
    /// Assemble a cartridge from extracted regions and derived attributes.
    ///
    /// Allocates the zeroed 8 KiB PRG RAM bank; performs no validation and no mapper
    /// interpretation.
    pub fn new(prg_rom: Vec<u8>, chr_rom: Vec<u8>, attributes: &Attributes) -> Self {
        Self {
            prg_rom,
            chr_rom,
            prg_ram: vec![0; PRG_RAM_SIZE],
            mapper: attributes.mapper,
            mirroring: attributes.mirroring,
            battery_backed: attributes.battery_backed,
        }
    }

    /// Load a cartridge from an iNES file at `path`.
    ///
    /// The file handle lives for the duration of this call only and is dropped on every exit
    /// path, success or failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        log::info!("loading cartridge from {}", path.display());
        let file = File::open(path)?;
        Self::read(&mut BufReader::new(file))
    }

    /// Decode a cartridge from a byte stream positioned at the start of the header.
    ///
    /// Reads the header, the optional trainer, PRG ROM, then CHR ROM, in that order. Any stage
    /// failure aborts the decode; nothing partial is ever returned.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self, Error> {
        let header = Header::read(reader)?;
        let attributes = Attributes::from_header(&header);

        log::debug!(
            "mapper {}, {} PRG banks, {} CHR banks, mirroring {:?}",
            attributes.mapper,
            header.prg_banks,
            header.chr_banks,
            attributes.mirroring,
        );

        // Trainer: legacy 512-byte block before PRG ROM. Consumed so PRG starts at the right
        // stream offset, then dropped.
        if attributes.trainer_present {
            read_region(reader, TRAINER_SIZE, Error::TruncatedTrainer)?;
        }

        let prg_rom = read_region(
            reader,
            header.prg_banks as usize * PRG_BANK_SIZE,
            Error::TruncatedPrgRom,
        )?;

        // No CHR ROM means the board has 8 KiB CHR RAM; nothing more to read from the stream.
        let chr_rom = if header.chr_banks != 0 {
            read_region(
                reader,
                header.chr_banks as usize * CHR_BANK_SIZE,
                Error::TruncatedChrRom,
            )?
        } else {
            vec![0; CHR_BANK_SIZE]
        };

        Ok(Self::new(prg_rom, chr_rom, &attributes))
    }

    /// PRG ROM contents. Length is a whole number of 16 KiB banks.
    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    /// CHR ROM contents, or the zeroed 8 KiB CHR RAM region when the header declares no CHR.
    pub fn chr_rom(&self) -> &[u8] {
        &self.chr_rom
    }

    /// PRG (save/work) RAM, zero-initialized. Persisting it for battery boards is the caller's
    /// concern.
    pub fn prg_ram(&self) -> &[u8] {
        &self.prg_ram
    }

    /// iNES mapper number. 0 = NROM, 1 = MMC1, 4 = MMC3, etc.
    pub fn mapper(&self) -> u8 {
        self.mapper
    }

    /// Nametable mirroring wired by the board.
    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    /// Board has battery-backed save RAM.
    pub fn battery_backed(&self) -> bool {
        self.battery_backed
    }
}

/// Read exactly `len` bytes into a fresh buffer.
///
/// A stream that ends early yields `truncated` and the partial buffer is dropped; any other
/// read failure surfaces as [`Error::Io`].
fn read_region<R: Read>(reader: &mut R, len: usize, truncated: Error) -> Result<Vec<u8>, Error> {
    let mut buf = vec![0; len];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(buf),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            log::warn!("{truncated}");
            Err(truncated)
        }
        Err(err) => Err(Error::Io(err)),
    }
}
