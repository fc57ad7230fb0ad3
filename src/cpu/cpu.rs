use crate::config::{BrkBehavior, CpuConfig};
use crate::cpu::{
    addr, decode, status_for_push, CoreMemory, CpuFault, Decoded, ExecutionTrace, Registers,
    StatusFlag, BREAK_VECTOR, BRK_OPCODE, RESET_STACK_POINTER, RESET_VECTOR,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuState {
    /* registers initialized, nothing executed yet */
    Reset,
    Running,
    /* reached the halt sentinel; terminal until the next reset */
    Halted,
    /* hit an opcode we can't execute; terminal until the next reset */
    Faulted(CpuFault),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Executed,
    Halted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Halted,
    StepLimitReached,
}

pub struct CPU {
    pub(crate) registers: Registers,
    pub(crate) memory: CoreMemory,
    config: CpuConfig,
    state: CpuState,
    trace: Option<Vec<ExecutionTrace>>,
}

impl CPU {
    /* registers stay zeroed until reset_interrupt pulls in the reset vector */
    pub fn new(memory: CoreMemory, config: CpuConfig) -> CPU {
        CPU {
            registers: Registers::default(),
            memory,
            config,
            state: CpuState::Reset,
            trace: None,
        }
    }

    /**
     * Puts the registers into their power-on state and points the program
     * counter at the address stored in the reset vector. Memory is left
     * alone, so anything loaded before the reset is still there afterwards.
     */
    pub fn reset_interrupt(&mut self) {
        self.registers = Registers {
            accumulator: 0,
            index_x: 0,
            index_y: 0,
            s_register: RESET_STACK_POINTER,
            program_counter: self.memory.read16(RESET_VECTOR),
            status: self.config.reset_status,
        };
        self.state = CpuState::Reset;

        log::info!(
            "Reset: PC=0x{:04x} status=0x{:02x}",
            self.registers.program_counter,
            self.registers.status
        );
    }

    /* fetches, decodes and executes the instruction at the program counter */
    pub fn step(&mut self) -> Result<StepOutcome, CpuFault> {
        match self.state {
            CpuState::Halted => return Ok(StepOutcome::Halted),
            CpuState::Faulted(fault) => return Err(fault),
            CpuState::Reset | CpuState::Running => self.state = CpuState::Running,
        }

        if self.trace.is_some() || log::log_enabled!(log::Level::Trace) {
            let entry = ExecutionTrace::capture(self);
            log::trace!("{entry}");
            if let Some(trace) = self.trace.as_mut() {
                trace.push(entry);
            }
        }

        let opcode_pc = self.registers.program_counter;
        let opcode = self.fetch_byte();

        if opcode == BRK_OPCODE && self.config.brk_behavior == BrkBehavior::Halt {
            log::debug!("Halted at 0x{opcode_pc:04x}");
            self.state = CpuState::Halted;
            return Ok(StepOutcome::Halted);
        }

        match decode(opcode) {
            Decoded::Official(operation) | Decoded::Undocumented(operation) => {
                operation.apply(self);
                Ok(StepOutcome::Executed)
            }
            Decoded::Unstable => Err(self.fault(CpuFault::UnstableOpcode {
                opcode,
                pc: opcode_pc,
            })),
            Decoded::Unimplemented => Err(self.fault(CpuFault::UnimplementedOpcode {
                opcode,
                pc: opcode_pc,
            })),
        }
    }

    /**
     * Runs until the halt sentinel. With BRK configured as a real interrupt
     * there is no sentinel, so this only comes back on a fault; use
     * `run_for` to bound it.
     */
    pub fn run(&mut self) -> Result<(), CpuFault> {
        while self.step()? == StepOutcome::Executed {}
        Ok(())
    }

    pub fn run_for(&mut self, max_steps: usize) -> Result<RunOutcome, CpuFault> {
        for _ in 0..max_steps {
            if self.step()? == StepOutcome::Halted {
                return Ok(RunOutcome::Halted);
            }
        }
        Ok(RunOutcome::StepLimitReached)
    }

    fn fault(&mut self, fault: CpuFault) -> CpuFault {
        log::error!("CPU fault: {fault}");
        self.state = CpuState::Faulted(fault);
        fault
    }

    pub fn accumulator(&self) -> u8 {
        self.registers.accumulator
    }

    pub fn index_x(&self) -> u8 {
        self.registers.index_x
    }

    pub fn index_y(&self) -> u8 {
        self.registers.index_y
    }

    pub fn stack_pointer(&self) -> u8 {
        self.registers.s_register
    }

    pub fn program_counter(&self) -> u16 {
        self.registers.program_counter
    }

    pub fn status(&self) -> u8 {
        self.registers.status
    }

    pub fn flag(&self, flag: StatusFlag) -> bool {
        self.registers.flag(flag)
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn memory(&self) -> &CoreMemory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut CoreMemory {
        &mut self.memory
    }

    /* turning recording off throws away anything not yet taken */
    pub fn record_trace(&mut self, enabled: bool) {
        self.trace = if enabled { Some(Vec::new()) } else { None };
    }

    pub fn take_trace(&mut self) -> Vec<ExecutionTrace> {
        self.trace.as_mut().map(std::mem::take).unwrap_or_default()
    }

    /* what the next step would record, without running it */
    pub fn peek_trace(&self) -> ExecutionTrace {
        ExecutionTrace::capture(self)
    }

    pub(crate) fn advance_pc(&mut self, count: u16) {
        self.registers.program_counter = self.registers.program_counter.wrapping_add(count);
    }

    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.read_mem(self.registers.program_counter);
        self.advance_pc(1);
        value
    }

    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte();
        let hi = self.fetch_byte();
        addr(lo, hi)
    }

    pub fn update_flag(&mut self, flag: StatusFlag, new_val: bool) {
        self.registers.status = flag.update(self.registers.status, new_val);
    }

    pub fn update_zero_neg_flags(&mut self, new_val: u8) {
        self.update_flag(StatusFlag::Zero, new_val == 0);
        self.update_flag(StatusFlag::Negative, new_val & 0x80 != 0);
    }

    pub fn push(&mut self, data: u8) {
        let address = self.registers.push_address();
        self.write_mem(address, data);
    }

    /* high byte first, so the low byte ends up at the lower address */
    pub fn push_memory_loc(&mut self, mem_loc: u16) {
        self.push((mem_loc >> 8) as u8);
        self.push((mem_loc & 0xff) as u8);
    }

    pub fn pop(&mut self) -> u8 {
        let address = self.registers.pull_address();
        self.read_mem(address)
    }

    pub fn pop_memory_loc(&mut self) -> u16 {
        let lower = self.pop();
        let upper = self.pop();

        addr(lower, upper)
    }

    /* BRK is a two-byte instruction; the byte after the opcode is skipped on return */
    pub(crate) fn break_interrupt(&mut self) {
        self.push_memory_loc(self.registers.program_counter.wrapping_add(1));
        self.push(status_for_push(self.registers.status));
        self.update_flag(StatusFlag::InterruptDisable, true);
        self.registers.program_counter = self.memory.read16(BREAK_VECTOR);
    }

    pub fn write_mem(&mut self, addr: u16, data: u8) {
        self.memory.write(addr, data);
    }

    pub fn read_mem(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }
}
