//! Ines: iNES (.nes) cartridge loading for NES emulators.
//!
//! Implements the [iNES](https://www.nesdev.org/wiki/INES) container format as documented on the
//! [NESdev Wiki](https://www.nesdev.org/wiki/NES_reference_guide): a 16-byte header (magic
//! "NES\x1A", PRG/CHR ROM sizes in 16/8 KiB banks, control bytes packing mapper number,
//! nametable mirroring, battery and trainer flags), an optional 512-byte trainer, PRG ROM, then
//! CHR ROM.
//!
//! ## Modules (NESdev references)
//!
//! - **cartridge** – [iNES](https://www.nesdev.org/wiki/INES) decoding: header parsing,
//!   control-byte attributes ([Mapper](https://www.nesdev.org/wiki/Mapper) number,
//!   [Mirroring](https://www.nesdev.org/wiki/Mirroring), battery), PRG/CHR region extraction
//!
//! Bank switching is out of scope: the mapper number is decoded and carried on the cartridge,
//! but interpreting it is the emulator's mapper implementation's job.

pub mod cartridge;
