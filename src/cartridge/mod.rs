//! NES cartridge decoding from iNES format (.nes files).
//!
//! - **header**: 16-byte [iNES](https://www.nesdev.org/wiki/INES) header parsing and
//!   control-byte attribute derivation.
//! - **cartridge**: trainer skip, PRG/CHR region extraction, and the decoded
//!   [`Cartridge`](cartridge::Cartridge).

use std::io;

use thiserror::Error;

pub mod cartridge;
pub mod header;


/// Nametable mirroring wired by the board, kept as the raw 2-bit header code.
///
/// Bit 0 is the solder-pad base (0 = horizontal, 1 = vertical); bit 1 is the four-screen VRAM
/// flag from control byte 1 bit 3, which adds a second bit to the code instead of replacing the
/// base. All four states stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mirroring {
    Horizontal = 0,
    Vertical = 1,
    FourScreenHorizontal = 2,
    FourScreenVertical = 3,
}

impl Mirroring {
    /// Decode the mirroring code from control byte 1 (bit 0 base, bit 3 four-screen).
    pub fn from_control(ctrl1: u8) -> Self {
        match (ctrl1 & 1) | (((ctrl1 >> 3) & 1) << 1) {
            0 => Mirroring::Horizontal,
            1 => Mirroring::Vertical,
            2 => Mirroring::FourScreenHorizontal,
            _ => Mirroring::FourScreenVertical,
        }
    }

    /// Raw 2-bit mirroring code.
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Decode errors, one per pipeline stage.
///
/// Any failure aborts the whole decode; a partial cartridge is never returned.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying open/read failure, including a header shorter than 16 bytes.
    #[error("i/o error reading cartridge: {0}")]
    Io(#[from] io::Error),
    /// First four header bytes are not "NES\x1A".
    #[error("invalid iNES file: missing NES\\x1A magic")]
    InvalidMagic,
    /// Stream ended inside the 512-byte trainer block.
    #[error("truncated trainer: fewer than 512 bytes after header")]
    TruncatedTrainer,
    /// Stream ended inside the PRG ROM region declared by the header.
    #[error("truncated PRG ROM: stream shorter than declared bank count")]
    TruncatedPrgRom,
    /// Stream ended inside the CHR ROM region declared by the header.
    #[error("truncated CHR ROM: stream shorter than declared bank count")]
    TruncatedChrRom,
}
