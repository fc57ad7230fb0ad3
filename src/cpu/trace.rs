use crate::cpu::{decode, AddressingMode, Instruction, CPU};
use std::fmt;

/**
 * A snapshot of the CPU taken just before an instruction runs. Its Display
 * output follows the layout of the widely circulated nestest log, minus the
 * memory annotations and cycle counts, so the two can be diffed column by
 * column.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionTrace {
    pub pc: u16,
    pub opcode: u8,
    pub operands: [Option<u8>; 2],
    /* None when the opcode can't be executed */
    pub mnemonic: Option<Instruction>,
    pub undocumented: bool,
    pub addr_mode: Option<AddressingMode>,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub status: u8,
    pub sp: u8,
}

impl ExecutionTrace {
    pub fn capture(cpu: &CPU) -> ExecutionTrace {
        let registers = cpu.registers();
        let pc = registers.program_counter;
        let opcode = cpu.read_mem(pc);
        let decoded = decode(opcode);
        let realized = decoded.realized();

        let operand_count = realized.map_or(0, |r| r.addr_mode.operand_bytes());
        let mut operands = [None; 2];
        for (offset, slot) in (1..=operand_count).zip(operands.iter_mut()) {
            *slot = Some(cpu.read_mem(pc.wrapping_add(offset)));
        }

        ExecutionTrace {
            pc,
            opcode,
            operands,
            mnemonic: realized.map(|r| r.instruction),
            undocumented: decoded.is_undocumented(),
            addr_mode: realized.map(|r| r.addr_mode),
            a: registers.accumulator,
            x: registers.index_x,
            y: registers.index_y,
            status: registers.status,
            sp: registers.s_register,
        }
    }

    fn operand_text(&self, instruction: Instruction, addr_mode: AddressingMode) -> String {
        let lo = self.operands[0].unwrap_or(0);
        let hi = self.operands[1].unwrap_or(0);
        let word = ((hi as u16) << 8) | lo as u16;

        match addr_mode {
            AddressingMode::Implied if instruction.takes_accumulator() => "A".to_string(),
            AddressingMode::Implied => String::new(),
            AddressingMode::Immediate if instruction.is_branch() => {
                let target = self.pc.wrapping_add(2).wrapping_add_signed(lo as i8 as i16);
                format!("${target:04X}")
            }
            AddressingMode::Immediate => format!("#${lo:02X}"),
            AddressingMode::ZeroPage => format!("${lo:02X}"),
            AddressingMode::ZeroPageX => format!("${lo:02X},X"),
            AddressingMode::ZeroPageY => format!("${lo:02X},Y"),
            AddressingMode::Absolute => format!("${word:04X}"),
            AddressingMode::AbsoluteX => format!("${word:04X},X"),
            AddressingMode::AbsoluteY => format!("${word:04X},Y"),
            AddressingMode::Indirect => format!("(${word:04X})"),
            AddressingMode::IndexedIndirect => format!("(${lo:02X},X)"),
            AddressingMode::IndirectIndexed => format!("(${lo:02X}),Y"),
        }
    }
}

impl fmt::Display for ExecutionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = std::iter::once(self.opcode)
            .chain(self.operands.iter().flatten().copied())
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");

        let assembly = match (self.mnemonic, self.addr_mode) {
            (Some(instruction), Some(addr_mode)) => {
                let operand = self.operand_text(instruction, addr_mode);
                if operand.is_empty() {
                    format!("{instruction:?}")
                } else {
                    format!("{instruction:?} {operand}")
                }
            }
            _ => "???".to_string(),
        };
        let marker = if self.undocumented { '*' } else { ' ' };

        write!(
            f,
            "{:04X}  {:<8} {}{:<32}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            self.pc, bytes, marker, assembly, self.a, self.x, self.y, self.status, self.sp
        )
    }
}
