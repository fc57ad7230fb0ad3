/* the 6502 core: registers, memory, decode table, and the execution loop */
mod addressing_mode;
mod core_memory;
mod cpu;
mod fault;
mod instruction;
mod opcode_table;
mod registers;
mod status_flag;
mod trace;

#[cfg(test)]
mod tests;

pub use addressing_mode::{AddressingMode, Operand};
pub use core_memory::{CoreMemory, PRG_BANK_SIZE, PRG_ROM_MIRROR_START, PRG_ROM_START, TRAINER_START};
pub use cpu::{CpuState, RunOutcome, StepOutcome, CPU};
pub use fault::CpuFault;
pub use instruction::{Instruction, RealizedInstruction};
pub use opcode_table::{decode, Decoded, OPCODE_TABLE};
pub use registers::{Registers, RESET_STACK_POINTER, STACK_PAGE};
pub use status_flag::{status_for_push, status_from_pull, StatusFlag, REAL_FLAGS};
pub use trace::ExecutionTrace;

pub const MEMORY_SIZE: usize = 1 << 16;

pub const RESET_VECTOR: u16 = 0xfffc;
pub const BREAK_VECTOR: u16 = 0xfffe;

pub const BRK_OPCODE: u8 = 0x00;

/**
 * Converts a pair of bytes into a u16 to look up an address in memory.
 * The 6502 is little-endian, so this expects the low-order byte first.
 * addr(0xCD, 0xAB) returns 0xABCD.
 */
pub fn addr(lo_byte: u8, hi_byte: u8) -> u16 {
    ((hi_byte as u16) << 8) | (lo_byte as u16)
}

/**
 * Zero-page address operations take a single-byte and result in an
 * address on the first page of memory, which has addresses that begin
 * with 0x00. If this is passed in 0xAB, it returns 0x00AB. In effect this
 * is just a cast, but wrapping it as a function makes the goal clearer.
 */
pub fn zero_page_addr(b1: u8) -> u16 {
    b1 as u16
}
