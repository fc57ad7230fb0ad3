use std::fmt;

/// Fatal conditions that stop the fetch-decode-execute loop.
///
/// Execution is deterministic, so there's nothing to retry: the same program
/// from the same state faults at the same place every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuFault {
    UnimplementedOpcode { opcode: u8, pc: u16 },

    /* behaves differently from chip to chip (and run to run), so there's nothing to emulate */
    UnstableOpcode { opcode: u8, pc: u16 },
}

impl CpuFault {
    pub fn opcode(&self) -> u8 {
        match self {
            CpuFault::UnimplementedOpcode { opcode, .. } | CpuFault::UnstableOpcode { opcode, .. } => {
                *opcode
            }
        }
    }

    pub fn pc(&self) -> u16 {
        match self {
            CpuFault::UnimplementedOpcode { pc, .. } | CpuFault::UnstableOpcode { pc, .. } => *pc,
        }
    }
}

impl fmt::Display for CpuFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuFault::UnimplementedOpcode { opcode, pc } => {
                write!(f, "unimplemented opcode 0x{opcode:02X} at 0x{pc:04X}")
            }
            CpuFault::UnstableOpcode { opcode, pc } => {
                write!(f, "unstable opcode 0x{opcode:02X} at 0x{pc:04X}")
            }
        }
    }
}

impl std::error::Error for CpuFault {}
