use crate::cpu::StatusFlag;

pub const STACK_PAGE: u16 = 0x0100;

/* stack pointer after reset; the real chip does three dummy pushes from 0x00 */
pub const RESET_STACK_POINTER: u8 = 0xfd;

/// The 6502's programmer-visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    pub accumulator: u8,
    pub index_x: u8,
    pub index_y: u8,
    pub s_register: u8,
    pub program_counter: u16,
    pub status: u8,
}

impl Registers {
    pub fn flag(&self, flag: StatusFlag) -> bool {
        flag.is_set_in(self.status)
    }

    /* address the next push will write to; SP then moves down, wrapping inside page 1 */
    pub fn push_address(&mut self) -> u16 {
        let addr = STACK_PAGE | self.s_register as u16;
        self.s_register = self.s_register.wrapping_sub(1);
        addr
    }

    /* SP moves up first, then the pull reads from the new top */
    pub fn pull_address(&mut self) -> u16 {
        self.s_register = self.s_register.wrapping_add(1);
        STACK_PAGE | self.s_register as u16
    }
}
