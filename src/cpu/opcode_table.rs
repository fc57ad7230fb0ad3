use crate::cpu::instruction::Instruction::*;
use crate::cpu::AddressingMode::*;
use crate::cpu::{AddressingMode, Instruction, RealizedInstruction};

/* what a single opcode byte means to this CPU */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Official(RealizedInstruction),
    /* not in the datasheet, but stable and reproducible on real hardware */
    Undocumented(RealizedInstruction),
    /* depends on the chip and on analog effects; nothing reliable to emulate */
    Unstable,
    /* locks up the processor, or otherwise isn't emulated */
    Unimplemented,
}

impl Decoded {
    pub fn realized(&self) -> Option<RealizedInstruction> {
        match self {
            Decoded::Official(realized) | Decoded::Undocumented(realized) => Some(*realized),
            Decoded::Unstable | Decoded::Unimplemented => None,
        }
    }

    pub fn is_undocumented(&self) -> bool {
        matches!(self, Decoded::Undocumented(_))
    }
}

const fn op(instruction: Instruction, addr_mode: AddressingMode) -> Decoded {
    Decoded::Official(RealizedInstruction {
        instruction,
        addr_mode,
    })
}

const fn undoc(instruction: Instruction, addr_mode: AddressingMode) -> Decoded {
    Decoded::Undocumented(RealizedInstruction {
        instruction,
        addr_mode,
    })
}

/* opcodes taken from https://www.nesdev.org/obelisk-6502-guide/reference.html
 * and https://www.nesdev.org/wiki/CPU_unofficial_opcodes */
const fn decode_opcode(opcode: u8) -> Decoded {
    match opcode {
        0x69 => op(ADC, Immediate),
        0x65 => op(ADC, ZeroPage),
        0x75 => op(ADC, ZeroPageX),
        0x6d => op(ADC, Absolute),
        0x7d => op(ADC, AbsoluteX),
        0x79 => op(ADC, AbsoluteY),
        0x61 => op(ADC, IndexedIndirect),
        0x71 => op(ADC, IndirectIndexed),

        0x29 => op(AND, Immediate),
        0x25 => op(AND, ZeroPage),
        0x35 => op(AND, ZeroPageX),
        0x2d => op(AND, Absolute),
        0x3d => op(AND, AbsoluteX),
        0x39 => op(AND, AbsoluteY),
        0x21 => op(AND, IndexedIndirect),
        0x31 => op(AND, IndirectIndexed),

        0x0a => op(ASL, Implied),
        0x06 => op(ASL, ZeroPage),
        0x16 => op(ASL, ZeroPageX),
        0x0e => op(ASL, Absolute),
        0x1e => op(ASL, AbsoluteX),

        /* branches read their displacement like an immediate */
        0x90 => op(BCC, Immediate),
        0xb0 => op(BCS, Immediate),
        0xf0 => op(BEQ, Immediate),
        0x30 => op(BMI, Immediate),
        0xd0 => op(BNE, Immediate),
        0x10 => op(BPL, Immediate),
        0x50 => op(BVC, Immediate),
        0x70 => op(BVS, Immediate),

        0x24 => op(BIT, ZeroPage),
        0x2c => op(BIT, Absolute),

        0x00 => op(BRK, Implied),

        0x18 => op(CLC, Implied),
        0xd8 => op(CLD, Implied),
        0x58 => op(CLI, Implied),
        0xb8 => op(CLV, Implied),

        0xc9 => op(CMP, Immediate),
        0xc5 => op(CMP, ZeroPage),
        0xd5 => op(CMP, ZeroPageX),
        0xcd => op(CMP, Absolute),
        0xdd => op(CMP, AbsoluteX),
        0xd9 => op(CMP, AbsoluteY),
        0xc1 => op(CMP, IndexedIndirect),
        0xd1 => op(CMP, IndirectIndexed),

        0xe0 => op(CPX, Immediate),
        0xe4 => op(CPX, ZeroPage),
        0xec => op(CPX, Absolute),

        0xc0 => op(CPY, Immediate),
        0xc4 => op(CPY, ZeroPage),
        0xcc => op(CPY, Absolute),

        0xc6 => op(DEC, ZeroPage),
        0xd6 => op(DEC, ZeroPageX),
        0xce => op(DEC, Absolute),
        0xde => op(DEC, AbsoluteX),

        0xca => op(DEX, Implied),
        0x88 => op(DEY, Implied),

        0x49 => op(EOR, Immediate),
        0x45 => op(EOR, ZeroPage),
        0x55 => op(EOR, ZeroPageX),
        0x4d => op(EOR, Absolute),
        0x5d => op(EOR, AbsoluteX),
        0x59 => op(EOR, AbsoluteY),
        0x41 => op(EOR, IndexedIndirect),
        0x51 => op(EOR, IndirectIndexed),

        0xe6 => op(INC, ZeroPage),
        0xf6 => op(INC, ZeroPageX),
        0xee => op(INC, Absolute),
        0xfe => op(INC, AbsoluteX),

        0xe8 => op(INX, Implied),
        0xc8 => op(INY, Implied),

        0x4c => op(JMP, Absolute),
        0x6c => op(JMP, Indirect),

        0x20 => op(JSR, Absolute),

        0xa9 => op(LDA, Immediate),
        0xa5 => op(LDA, ZeroPage),
        0xb5 => op(LDA, ZeroPageX),
        0xad => op(LDA, Absolute),
        0xbd => op(LDA, AbsoluteX),
        0xb9 => op(LDA, AbsoluteY),
        0xa1 => op(LDA, IndexedIndirect),
        0xb1 => op(LDA, IndirectIndexed),

        0xa2 => op(LDX, Immediate),
        0xa6 => op(LDX, ZeroPage),
        0xb6 => op(LDX, ZeroPageY),
        0xae => op(LDX, Absolute),
        0xbe => op(LDX, AbsoluteY),

        0xa0 => op(LDY, Immediate),
        0xa4 => op(LDY, ZeroPage),
        0xb4 => op(LDY, ZeroPageX),
        0xac => op(LDY, Absolute),
        0xbc => op(LDY, AbsoluteX),

        0x4a => op(LSR, Implied),
        0x46 => op(LSR, ZeroPage),
        0x56 => op(LSR, ZeroPageX),
        0x4e => op(LSR, Absolute),
        0x5e => op(LSR, AbsoluteX),

        0xea => op(NOP, Implied),

        0x09 => op(ORA, Immediate),
        0x05 => op(ORA, ZeroPage),
        0x15 => op(ORA, ZeroPageX),
        0x0d => op(ORA, Absolute),
        0x1d => op(ORA, AbsoluteX),
        0x19 => op(ORA, AbsoluteY),
        0x01 => op(ORA, IndexedIndirect),
        0x11 => op(ORA, IndirectIndexed),

        0x48 => op(PHA, Implied),
        0x08 => op(PHP, Implied),
        0x68 => op(PLA, Implied),
        0x28 => op(PLP, Implied),

        0x2a => op(ROL, Implied),
        0x26 => op(ROL, ZeroPage),
        0x36 => op(ROL, ZeroPageX),
        0x2e => op(ROL, Absolute),
        0x3e => op(ROL, AbsoluteX),

        0x6a => op(ROR, Implied),
        0x66 => op(ROR, ZeroPage),
        0x76 => op(ROR, ZeroPageX),
        0x6e => op(ROR, Absolute),
        0x7e => op(ROR, AbsoluteX),

        0x40 => op(RTI, Implied),
        0x60 => op(RTS, Implied),

        0xe9 => op(SBC, Immediate),
        0xe5 => op(SBC, ZeroPage),
        0xf5 => op(SBC, ZeroPageX),
        0xed => op(SBC, Absolute),
        0xfd => op(SBC, AbsoluteX),
        0xf9 => op(SBC, AbsoluteY),
        0xe1 => op(SBC, IndexedIndirect),
        0xf1 => op(SBC, IndirectIndexed),

        0x38 => op(SEC, Implied),
        0xf8 => op(SED, Implied),
        0x78 => op(SEI, Implied),

        0x85 => op(STA, ZeroPage),
        0x95 => op(STA, ZeroPageX),
        0x8d => op(STA, Absolute),
        0x9d => op(STA, AbsoluteX),
        0x99 => op(STA, AbsoluteY),
        0x81 => op(STA, IndexedIndirect),
        0x91 => op(STA, IndirectIndexed),

        0x86 => op(STX, ZeroPage),
        0x96 => op(STX, ZeroPageY),
        0x8e => op(STX, Absolute),

        0x84 => op(STY, ZeroPage),
        0x94 => op(STY, ZeroPageX),
        0x8c => op(STY, Absolute),

        0xaa => op(TAX, Implied),
        0xa8 => op(TAY, Implied),
        0xba => op(TSX, Implied),
        0x8a => op(TXA, Implied),
        0x9a => op(TXS, Implied),
        0x98 => op(TYA, Implied),

        /* ---- undocumented ---- */
        0x1a | 0x3a | 0x5a | 0x7a | 0xda | 0xfa => undoc(NOP, Implied),
        0x80 | 0x82 | 0x89 | 0xc2 | 0xe2 => undoc(NOP, Immediate),
        0x04 | 0x44 | 0x64 => undoc(NOP, ZeroPage),
        0x14 | 0x34 | 0x54 | 0x74 | 0xd4 | 0xf4 => undoc(NOP, ZeroPageX),
        0x0c => undoc(NOP, Absolute),
        0x1c | 0x3c | 0x5c | 0x7c | 0xdc | 0xfc => undoc(NOP, AbsoluteX),

        0xa7 => undoc(LAX, ZeroPage),
        0xb7 => undoc(LAX, ZeroPageY),
        0xaf => undoc(LAX, Absolute),
        0xbf => undoc(LAX, AbsoluteY),
        0xa3 => undoc(LAX, IndexedIndirect),
        0xb3 => undoc(LAX, IndirectIndexed),

        0x87 => undoc(SAX, ZeroPage),
        0x97 => undoc(SAX, ZeroPageY),
        0x8f => undoc(SAX, Absolute),
        0x83 => undoc(SAX, IndexedIndirect),

        0xeb => undoc(SBC, Immediate),

        0x07 => undoc(SLO, ZeroPage),
        0x17 => undoc(SLO, ZeroPageX),
        0x0f => undoc(SLO, Absolute),
        0x1f => undoc(SLO, AbsoluteX),
        0x1b => undoc(SLO, AbsoluteY),
        0x03 => undoc(SLO, IndexedIndirect),
        0x13 => undoc(SLO, IndirectIndexed),

        0x27 => undoc(RLA, ZeroPage),
        0x37 => undoc(RLA, ZeroPageX),
        0x2f => undoc(RLA, Absolute),
        0x3f => undoc(RLA, AbsoluteX),
        0x3b => undoc(RLA, AbsoluteY),
        0x23 => undoc(RLA, IndexedIndirect),
        0x33 => undoc(RLA, IndirectIndexed),

        0x47 => undoc(SRE, ZeroPage),
        0x57 => undoc(SRE, ZeroPageX),
        0x4f => undoc(SRE, Absolute),
        0x5f => undoc(SRE, AbsoluteX),
        0x5b => undoc(SRE, AbsoluteY),
        0x43 => undoc(SRE, IndexedIndirect),
        0x53 => undoc(SRE, IndirectIndexed),

        0x67 => undoc(RRA, ZeroPage),
        0x77 => undoc(RRA, ZeroPageX),
        0x6f => undoc(RRA, Absolute),
        0x7f => undoc(RRA, AbsoluteX),
        0x7b => undoc(RRA, AbsoluteY),
        0x63 => undoc(RRA, IndexedIndirect),
        0x73 => undoc(RRA, IndirectIndexed),

        0xc7 => undoc(DCP, ZeroPage),
        0xd7 => undoc(DCP, ZeroPageX),
        0xcf => undoc(DCP, Absolute),
        0xdf => undoc(DCP, AbsoluteX),
        0xdb => undoc(DCP, AbsoluteY),
        0xc3 => undoc(DCP, IndexedIndirect),
        0xd3 => undoc(DCP, IndirectIndexed),

        0xe7 => undoc(ISC, ZeroPage),
        0xf7 => undoc(ISC, ZeroPageX),
        0xef => undoc(ISC, Absolute),
        0xff => undoc(ISC, AbsoluteX),
        0xfb => undoc(ISC, AbsoluteY),
        0xe3 => undoc(ISC, IndexedIndirect),
        0xf3 => undoc(ISC, IndirectIndexed),

        0x0b | 0x2b => undoc(ANC, Immediate),
        0x4b => undoc(ALR, Immediate),
        0x6b => undoc(ARR, Immediate),
        0xcb => undoc(AXS, Immediate),
        0xbb => undoc(LAS, AbsoluteY),

        /* SHA: the stored value depends on the high byte of the target address */
        0x93 | 0x9f => Decoded::Unstable,

        /* the JAM opcodes, plus XAA, LXA, TAS, SHY and SHX */
        _ => Decoded::Unimplemented,
    }
}

const fn build_table() -> [Decoded; 256] {
    let mut table = [Decoded::Unimplemented; 256];
    let mut opcode = 0;
    while opcode < 256 {
        table[opcode] = decode_opcode(opcode as u8);
        opcode += 1;
    }
    table
}

pub static OPCODE_TABLE: [Decoded; 256] = build_table();

pub fn decode(opcode: u8) -> Decoded {
    OPCODE_TABLE[opcode as usize]
}
