use crate::cpu::status_flag::{status_for_push, status_from_pull};
use crate::cpu::{AddressingMode, Operand, StatusFlag, CPU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /* load/store opcodes */
    LDA, /* loads fixed value into A; can set zero flag */
    LDX, /* loads value at address into X; can set zero flag */
    LDY, /* loads fixed value into Y; can set zero flag */
    STA, /* store value from A into address */
    STX, /* stores value from X into address */
    STY, /* stores value from Y into address */

    /* transfer opcodes */
    TAX, /* transfer value from A into X; can set zero flag */
    TAY, /* transfer value from A into Y; can set zero flag */
    TSX, /* transfer value from Stack Pointer to X; can set zero flag */
    TXS, /* Transfer X to Stack Pointer */
    TXA, /* transfer value from X into A; can set zero flag */
    TYA, /* transfer value from Y into A; can set zero flag */

    /* comparisons */
    CMP, /* Compare A */
    CPX, /* Compare X */
    CPY, /* Compare Y */

    /* branch codes */
    BCC, /* Branch if Carry Clear */
    BCS, /* Branch if Carry Set */
    BEQ, /* Branch if Equal */
    BMI, /* Branch if Minus */
    BNE, /* Branch if Not Equal */
    BPL, /* Branch if Plus */
    BVC, /* Branch if Overflow Clear */
    BVS, /* Branch if Overflow Set */

    /* increment/decrement locations */
    DEC, /* Decrement Memory */
    DEX, /* Decrement X */
    DEY, /* Decrement Y */
    INC, /* Increment Memory */
    INX, /* Increment X */
    INY, /* Increment Y */

    /* bitwise operators */
    AND, /* Bitwise AND */
    ASL, /* Arithmetic Shift Left */
    BIT, /* Bit Test */
    EOR, /* Bitwise XOR */
    LSR, /* Logical Shift Right */
    ORA, /* Bitwise OR */

    /* arithmetic */
    ADC, /* Add With Carry */
    SBC, /* Subtract With Carry */

    /* rotates */
    ROL, /* Rotate Left */
    ROR, /* Rotate Right */

    /* clear & set flags */
    CLC, /* Clear Carry */
    CLD, /* Clear Decimal */
    CLI, /* Clear Interrupt Disable */
    CLV, /* Clear Overflow */
    SEC, /* Set Carry Flag */
    SED, /* Set Decimal Flag */
    SEI, /* Set Interrupt Disable */

    /* stack operations */
    PHA, /* Push A */
    PHP, /* Push Processor Status */
    PLA, /* Pull A */
    PLP, /* Pull Processor Status */

    /* jumps */
    JMP, /* Jump */
    JSR, /* Jump to Subroutine */
    RTS, /* Return from Subroutine */
    RTI, /* Return from Interrupt */

    /* others */
    BRK, /* Break (software IRQ) */
    NOP, /* No-op */

    /* undocumented: two primitives back to back on the same operand */
    LAX, /* LDA + LDX */
    SAX, /* store A & X */
    SLO, /* ASL, then ORA */
    RLA, /* ROL, then AND */
    SRE, /* LSR, then EOR */
    RRA, /* ROR, then ADC */
    DCP, /* DEC, then CMP */
    ISC, /* INC, then SBC */
    ANC, /* AND, then carry from bit 7 */
    ALR, /* AND, then LSR A */
    ARR, /* AND, then ROR A with odd carry/overflow */
    AXS, /* X = (A & X) - operand, no borrow into carry */
    LAS, /* A, X, SP = operand & SP */
}

impl Instruction {
    pub fn apply(&self, cpu: &mut CPU, addr_mode: &AddressingMode) {
        match self {
            Instruction::ADC => {
                let val = addr_mode.deref(cpu);
                add_with_carry_and_update(cpu, val);
            }
            Instruction::AND => {
                let mem_val = addr_mode.deref(cpu);
                cpu.registers.accumulator &= mem_val;
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
            }
            Instruction::ASL => {
                let operand = addr_mode.resolve(cpu);
                shift_left(cpu, operand);
            }
            Instruction::BCC => branch(cpu, StatusFlag::Carry, false),
            Instruction::BCS => branch(cpu, StatusFlag::Carry, true),
            Instruction::BEQ => branch(cpu, StatusFlag::Zero, true),
            Instruction::BIT => {
                let mem = addr_mode.deref(cpu);
                let val = cpu.registers.accumulator & mem;
                cpu.update_flag(StatusFlag::Zero, val == 0);
                /* these come straight from memory, not from the AND */
                cpu.update_flag(StatusFlag::Overflow, mem & 0x40 != 0);
                cpu.update_flag(StatusFlag::Negative, mem & 0x80 != 0);
            }
            Instruction::BMI => branch(cpu, StatusFlag::Negative, true),
            Instruction::BNE => branch(cpu, StatusFlag::Zero, false),
            Instruction::BPL => branch(cpu, StatusFlag::Negative, false),
            Instruction::BRK => cpu.break_interrupt(),
            Instruction::BVC => branch(cpu, StatusFlag::Overflow, false),
            Instruction::BVS => branch(cpu, StatusFlag::Overflow, true),
            Instruction::CLC => cpu.update_flag(StatusFlag::Carry, false),
            Instruction::CLD => cpu.update_flag(StatusFlag::Decimal, false),
            Instruction::CLI => cpu.update_flag(StatusFlag::InterruptDisable, false),
            Instruction::CLV => cpu.update_flag(StatusFlag::Overflow, false),
            Instruction::CMP => {
                let mem_val = addr_mode.deref(cpu);
                let register = cpu.registers.accumulator;
                compare(cpu, register, mem_val);
            }
            Instruction::CPX => {
                let mem_val = addr_mode.deref(cpu);
                let register = cpu.registers.index_x;
                compare(cpu, register, mem_val);
            }
            Instruction::CPY => {
                let mem_val = addr_mode.deref(cpu);
                let register = cpu.registers.index_y;
                compare(cpu, register, mem_val);
            }
            Instruction::DEC => {
                let operand = addr_mode.resolve(cpu);
                decrement(cpu, operand);
            }
            Instruction::DEX => {
                cpu.registers.index_x = cpu.registers.index_x.wrapping_sub(1);
                cpu.update_zero_neg_flags(cpu.registers.index_x);
            }
            Instruction::DEY => {
                cpu.registers.index_y = cpu.registers.index_y.wrapping_sub(1);
                cpu.update_zero_neg_flags(cpu.registers.index_y);
            }
            Instruction::EOR => {
                let mem_val = addr_mode.deref(cpu);
                cpu.registers.accumulator ^= mem_val;
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
            }
            Instruction::INC => {
                let operand = addr_mode.resolve(cpu);
                increment(cpu, operand);
            }
            Instruction::INX => {
                cpu.registers.index_x = cpu.registers.index_x.wrapping_add(1);
                cpu.update_zero_neg_flags(cpu.registers.index_x);
            }
            Instruction::INY => {
                cpu.registers.index_y = cpu.registers.index_y.wrapping_add(1);
                cpu.update_zero_neg_flags(cpu.registers.index_y);
            }
            Instruction::JMP => {
                cpu.registers.program_counter = addr_mode.resolve_address(cpu);
            }
            Instruction::JSR => {
                let target = addr_mode.resolve_address(cpu);
                /* the pushed return address is the last byte of the JSR itself */
                cpu.push_memory_loc(cpu.registers.program_counter.wrapping_sub(1));
                cpu.registers.program_counter = target;
            }
            Instruction::LDA => {
                cpu.registers.accumulator = addr_mode.deref(cpu);
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
            }
            Instruction::LDX => {
                cpu.registers.index_x = addr_mode.deref(cpu);
                cpu.update_zero_neg_flags(cpu.registers.index_x);
            }
            Instruction::LDY => {
                cpu.registers.index_y = addr_mode.deref(cpu);
                cpu.update_zero_neg_flags(cpu.registers.index_y);
            }
            Instruction::LSR => {
                let operand = addr_mode.resolve(cpu);
                shift_right(cpu, operand);
            }
            Instruction::NOP => {
                /* the undocumented NOPs still have operand bytes to skip */
                if *addr_mode != AddressingMode::Implied {
                    addr_mode.resolve_address(cpu);
                }
            }
            Instruction::ORA => {
                cpu.registers.accumulator |= addr_mode.deref(cpu);
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
            }
            Instruction::PHA => {
                cpu.push(cpu.registers.accumulator);
            }
            Instruction::PHP => {
                /* pushes status onto the stack, with bits 4 and 5 on */
                cpu.push(status_for_push(cpu.registers.status));
            }
            Instruction::PLA => {
                cpu.registers.accumulator = cpu.pop();
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
            }
            Instruction::PLP => {
                let val = cpu.pop();
                cpu.registers.status = status_from_pull(val);
            }
            Instruction::ROL => {
                let operand = addr_mode.resolve(cpu);
                rotate_left(cpu, operand);
            }
            Instruction::ROR => {
                let operand = addr_mode.resolve(cpu);
                rotate_right(cpu, operand);
            }
            Instruction::RTI => {
                let val = cpu.pop();
                cpu.registers.status = status_from_pull(val);
                cpu.registers.program_counter = cpu.pop_memory_loc();
            }
            Instruction::RTS => {
                cpu.registers.program_counter = cpu.pop_memory_loc().wrapping_add(1);
            }
            Instruction::SBC => {
                let val = addr_mode.deref(cpu);
                add_with_carry_and_update(cpu, !val);
            }
            Instruction::SEC => cpu.update_flag(StatusFlag::Carry, true),
            Instruction::SED => cpu.update_flag(StatusFlag::Decimal, true),
            Instruction::SEI => cpu.update_flag(StatusFlag::InterruptDisable, true),
            Instruction::STA => {
                let address = addr_mode.resolve_address(cpu);
                cpu.write_mem(address, cpu.registers.accumulator);
            }
            Instruction::STX => {
                let address = addr_mode.resolve_address(cpu);
                cpu.write_mem(address, cpu.registers.index_x);
            }
            Instruction::STY => {
                let address = addr_mode.resolve_address(cpu);
                cpu.write_mem(address, cpu.registers.index_y);
            }
            Instruction::TAX => {
                cpu.registers.index_x = cpu.registers.accumulator;
                cpu.update_zero_neg_flags(cpu.registers.index_x);
            }
            Instruction::TAY => {
                cpu.registers.index_y = cpu.registers.accumulator;
                cpu.update_zero_neg_flags(cpu.registers.index_y);
            }
            Instruction::TSX => {
                cpu.registers.index_x = cpu.registers.s_register;
                cpu.update_zero_neg_flags(cpu.registers.index_x);
            }
            Instruction::TXA => {
                cpu.registers.accumulator = cpu.registers.index_x;
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
            }
            Instruction::TXS => {
                /* doesn't update flags */
                cpu.registers.s_register = cpu.registers.index_x;
            }
            Instruction::TYA => {
                cpu.registers.accumulator = cpu.registers.index_y;
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
            }

            Instruction::LAX => {
                let val = addr_mode.deref(cpu);
                cpu.registers.accumulator = val;
                cpu.registers.index_x = val;
                cpu.update_zero_neg_flags(val);
            }
            Instruction::SAX => {
                let address = addr_mode.resolve_address(cpu);
                cpu.write_mem(address, cpu.registers.accumulator & cpu.registers.index_x);
            }
            Instruction::SLO => {
                let operand = addr_mode.resolve(cpu);
                let shifted = shift_left(cpu, operand);
                cpu.registers.accumulator |= shifted;
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
            }
            Instruction::RLA => {
                let operand = addr_mode.resolve(cpu);
                let rotated = rotate_left(cpu, operand);
                cpu.registers.accumulator &= rotated;
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
            }
            Instruction::SRE => {
                let operand = addr_mode.resolve(cpu);
                let shifted = shift_right(cpu, operand);
                cpu.registers.accumulator ^= shifted;
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
            }
            Instruction::RRA => {
                let operand = addr_mode.resolve(cpu);
                /* the carry out of the rotate feeds the add */
                let rotated = rotate_right(cpu, operand);
                add_with_carry_and_update(cpu, rotated);
            }
            Instruction::DCP => {
                let operand = addr_mode.resolve(cpu);
                let decremented = decrement(cpu, operand);
                let accumulator = cpu.registers.accumulator;
                compare(cpu, accumulator, decremented);
            }
            Instruction::ISC => {
                let operand = addr_mode.resolve(cpu);
                let incremented = increment(cpu, operand);
                add_with_carry_and_update(cpu, !incremented);
            }
            Instruction::ANC => {
                cpu.registers.accumulator &= addr_mode.deref(cpu);
                cpu.update_zero_neg_flags(cpu.registers.accumulator);
                cpu.update_flag(StatusFlag::Carry, cpu.registers.accumulator & 0x80 != 0);
            }
            Instruction::ALR => {
                cpu.registers.accumulator &= addr_mode.deref(cpu);
                shift_right(cpu, Operand::Accumulator);
            }
            Instruction::ARR => {
                cpu.registers.accumulator &= addr_mode.deref(cpu);
                let result = rotate_right(cpu, Operand::Accumulator);
                /* bit 6 -> carry, bit 6 xor bit 5 -> overflow */
                let bit6 = result & 0x40 != 0;
                let bit5 = result & 0x20 != 0;
                cpu.update_flag(StatusFlag::Carry, bit6);
                cpu.update_flag(StatusFlag::Overflow, bit6 != bit5);
            }
            Instruction::AXS => {
                let mem_val = addr_mode.deref(cpu);
                let masked = cpu.registers.accumulator & cpu.registers.index_x;
                cpu.registers.index_x = masked.wrapping_sub(mem_val);
                cpu.update_flag(StatusFlag::Carry, masked >= mem_val);
                cpu.update_zero_neg_flags(cpu.registers.index_x);
            }
            Instruction::LAS => {
                let val = addr_mode.deref(cpu) & cpu.registers.s_register;
                cpu.registers.accumulator = val;
                cpu.registers.index_x = val;
                cpu.registers.s_register = val;
                cpu.update_zero_neg_flags(val);
            }
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(
            self,
            Instruction::BCC
                | Instruction::BCS
                | Instruction::BEQ
                | Instruction::BMI
                | Instruction::BNE
                | Instruction::BPL
                | Instruction::BVC
                | Instruction::BVS
        )
    }

    /* the instructions that treat Implied mode as "the accumulator" */
    pub fn takes_accumulator(&self) -> bool {
        matches!(
            self,
            Instruction::ASL | Instruction::LSR | Instruction::ROL | Instruction::ROR
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealizedInstruction {
    pub instruction: Instruction,
    pub addr_mode: AddressingMode,
}

impl RealizedInstruction {
    pub fn apply(&self, cpu: &mut CPU) {
        self.instruction.apply(cpu, &self.addr_mode);
    }
}

/* the branch offset is the byte at the program counter; it's consumed whether or not we branch */
fn branch(cpu: &mut CPU, flag: StatusFlag, is_positive: bool) {
    let offset_addr = AddressingMode::Immediate.resolve_address(cpu);
    let offset = cpu.memory.read_signed(offset_addr);
    if is_positive == cpu.flag(flag) {
        cpu.registers.program_counter = cpu
            .registers
            .program_counter
            .wrapping_add_signed(offset as i16);
    }
}

fn compare(cpu: &mut CPU, compare_val: u8, mem_val: u8) {
    cpu.update_flag(StatusFlag::Carry, compare_val >= mem_val);
    cpu.update_zero_neg_flags(compare_val.wrapping_sub(mem_val));
}

fn increment(cpu: &mut CPU, operand: Operand) -> u8 {
    let new_val = operand.read(cpu).wrapping_add(1);
    operand.write(cpu, new_val);
    cpu.update_zero_neg_flags(new_val);
    new_val
}

fn decrement(cpu: &mut CPU, operand: Operand) -> u8 {
    let new_val = operand.read(cpu).wrapping_sub(1);
    operand.write(cpu, new_val);
    cpu.update_zero_neg_flags(new_val);
    new_val
}

/* the shifts and rotates hand back what they wrote, for the combined opcodes */

fn shift_left(cpu: &mut CPU, operand: Operand) -> u8 {
    let old_val = operand.read(cpu);
    let result = old_val << 1;
    operand.write(cpu, result);
    cpu.update_flag(StatusFlag::Carry, old_val & 0x80 != 0);
    cpu.update_zero_neg_flags(result);
    result
}

fn shift_right(cpu: &mut CPU, operand: Operand) -> u8 {
    let old_val = operand.read(cpu);
    let result = old_val >> 1;
    operand.write(cpu, result);
    cpu.update_flag(StatusFlag::Carry, old_val & 0x01 != 0);
    cpu.update_zero_neg_flags(result);
    result
}

fn rotate_left(cpu: &mut CPU, operand: Operand) -> u8 {
    let old_val = operand.read(cpu);
    let result = (old_val << 1) | StatusFlag::Carry.as_num(cpu.registers.status);
    operand.write(cpu, result);
    cpu.update_flag(StatusFlag::Carry, old_val & 0x80 != 0);
    cpu.update_zero_neg_flags(result);
    result
}

fn rotate_right(cpu: &mut CPU, operand: Operand) -> u8 {
    let old_val = operand.read(cpu);
    let result = (StatusFlag::Carry.as_num(cpu.registers.status) << 7) | (old_val >> 1);
    operand.write(cpu, result);
    cpu.update_flag(StatusFlag::Carry, old_val & 0x01 != 0);
    cpu.update_zero_neg_flags(result);
    result
}

/* SBC is this with the operand complemented */
fn add_with_carry_and_update(cpu: &mut CPU, mem_val: u8) {
    let carry = cpu.flag(StatusFlag::Carry);
    let (result, carry, overflow) = add_with_carry_impl(cpu.registers.accumulator, mem_val, carry);

    cpu.registers.accumulator = result;
    cpu.update_zero_neg_flags(result);
    cpu.update_flag(StatusFlag::Carry, carry);
    cpu.update_flag(StatusFlag::Overflow, overflow);
}

/* returns (result, carry out, signed overflow) */
pub(crate) fn add_with_carry_impl(a: u8, b: u8, carry: bool) -> (u8, bool, bool) {
    let sum = a as u16 + b as u16 + carry as u16;
    let result = sum as u8;
    let overflow = (a ^ result) & (b ^ result) & 0x80 != 0;

    (result, sum > 0xff, overflow)
}
