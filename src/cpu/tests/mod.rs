use crate::config::CpuConfig;
use crate::cpu::{CoreMemory, CPU, RESET_VECTOR};

mod addressing_mode_tests;

const PROGRAM_START: u16 = 0x8000;

/* where single-instruction tests put their operand bytes */
const OPERAND_START: u16 = 0x0400;

fn memory_for_testing() -> CoreMemory {
    CoreMemory::detached()
}

fn cpu_for_testing() -> CPU {
    CPU::new(memory_for_testing(), CpuConfig::halt_on_brk())
}

/* loads the program at 0x8000, points the reset vector at it, and resets */
fn cpu_with_program(program: &[u8], config: CpuConfig) -> CPU {
    let mut memory = memory_for_testing();
    memory.load(PROGRAM_START, program);
    memory.write16(RESET_VECTOR, PROGRAM_START);

    let mut cpu = CPU::new(memory, config);
    cpu.reset_interrupt();
    cpu
}

fn run_program(program: &[u8]) -> CPU {
    let mut cpu = cpu_with_program(program, CpuConfig::halt_on_brk());
    cpu.run().unwrap();
    cpu
}

/* puts operand bytes at OPERAND_START and points the program counter at them */
fn with_operands(cpu: &mut CPU, operands: &[u8]) {
    cpu.memory_mut().load(OPERAND_START, operands);
    cpu.registers_mut().program_counter = OPERAND_START;
}
