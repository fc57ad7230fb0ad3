use crate::cpu::{addr, zero_page_addr, CPU};

/* the addressing modes are fixed by the hardware; nothing is ever added at runtime */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /* no operand, or the accumulator for the shifts and rotates */
    Implied,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect, /* (zp,X) */
    IndirectIndexed, /* (zp),Y */
}

/* where an instruction's operand lives once its addressing mode has been resolved */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Accumulator,
    Memory(u16),
}

impl Operand {
    pub fn read(&self, cpu: &CPU) -> u8 {
        match self {
            Operand::Accumulator => cpu.registers.accumulator,
            Operand::Memory(address) => cpu.read_mem(*address),
        }
    }

    pub fn write(&self, cpu: &mut CPU, new_val: u8) {
        match self {
            Operand::Accumulator => cpu.registers.accumulator = new_val,
            Operand::Memory(address) => cpu.write_mem(*address, new_val),
        }
    }
}

impl AddressingMode {
    /* behavior based on: https://www.nesdev.org/obelisk-6502-guide/addressing.html */
    /* reads the operand bytes at the program counter and moves past them */
    pub fn resolve_address(&self, cpu: &mut CPU) -> u16 {
        match self {
            AddressingMode::Implied => panic!("Implied mode should never be resolved to an address"),
            AddressingMode::Immediate => {
                /* the operand is the byte right here */
                let address = cpu.registers.program_counter;
                cpu.advance_pc(1);
                address
            }
            AddressingMode::ZeroPage => zero_page_addr(cpu.fetch_byte()),
            AddressingMode::ZeroPageX => {
                zero_page_addr(cpu.fetch_byte().wrapping_add(cpu.registers.index_x))
            }
            AddressingMode::ZeroPageY => {
                zero_page_addr(cpu.fetch_byte().wrapping_add(cpu.registers.index_y))
            }
            AddressingMode::Absolute => cpu.fetch_word(),
            AddressingMode::AbsoluteX => cpu.fetch_word().wrapping_add(cpu.registers.index_x as u16),
            AddressingMode::AbsoluteY => cpu.fetch_word().wrapping_add(cpu.registers.index_y as u16),
            AddressingMode::Indirect => {
                /* only used for JMP. this implements a bug where this mode does not
                 * correctly handle crossing page boundaries: a pointer at 0x??ff takes
                 * its high byte from 0x??00 rather than the next page
                 */
                let pointer = cpu.fetch_word();
                let hi_byte_addr = if pointer & 0xff == 0xff {
                    pointer & 0xff00
                } else {
                    pointer.wrapping_add(1)
                };
                addr(cpu.read_mem(pointer), cpu.read_mem(hi_byte_addr))
            }
            AddressingMode::IndexedIndirect => {
                let zp = cpu.fetch_byte().wrapping_add(cpu.registers.index_x);
                cpu.memory.read16_zero_page_wrapped(zp)
            }
            AddressingMode::IndirectIndexed => {
                let zp = cpu.fetch_byte();
                cpu.memory
                    .read16_zero_page_wrapped(zp)
                    .wrapping_add(cpu.registers.index_y as u16)
            }
        }
    }

    pub fn resolve(&self, cpu: &mut CPU) -> Operand {
        match self {
            AddressingMode::Implied => Operand::Accumulator,
            _ => Operand::Memory(self.resolve_address(cpu)),
        }
    }

    pub fn deref(&self, cpu: &mut CPU) -> u8 {
        let operand = self.resolve(cpu);
        operand.read(cpu)
    }

    /* how many bytes follow the opcode */
    pub fn operand_bytes(&self) -> u16 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
