mod ppu_registers;
mod register_file;
mod video_registers;

#[cfg(test)]
mod tests;

pub use ppu_registers::PPURegister;
pub use register_file::PpuRegisterFile;
pub use video_registers::{DetachedVideo, VideoRegisters};

pub const OAM_SIZE: usize = 256;
pub const PPU_MEMORY_SIZE: usize = 1 << 14; /* 16kb */

type OAM = [u8; OAM_SIZE];
type VRAM = [u8; PPU_MEMORY_SIZE];
