//! A MOS 6502 core as wired into the NES: the instruction set (documented and
//! the stable undocumented opcodes), the 64KB address space with the video
//! registers mapped in, and iNES cartridge loading.

pub mod config;
pub mod cpu;
pub mod ppu;
pub mod rom;
