/* reset status values seen across test suites and hardware documentation */

/* I flag set, plus bits 4 and 5; what the 2A03 actually comes up with */
pub const RESET_STATUS_HARDWARE: u8 = 0x34;
/* what nestest.log expects on its first line */
pub const RESET_STATUS_NESTEST: u8 = 0x24;
pub const RESET_STATUS_CLEARED: u8 = 0x00;

/// What the CPU does when it fetches opcode $00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrkBehavior {
    /// Stop the run loop; handy for running short byte programs in tests.
    Halt,
    /// Hardware BRK: push PC and status, then jump through $FFFE.
    Interrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    pub brk_behavior: BrkBehavior,
    pub reset_status: u8,
}

impl Default for CpuConfig {
    fn default() -> Self {
        CpuConfig {
            brk_behavior: BrkBehavior::Interrupt,
            reset_status: RESET_STATUS_HARDWARE,
        }
    }
}

impl CpuConfig {
    pub fn halt_on_brk() -> CpuConfig {
        CpuConfig {
            brk_behavior: BrkBehavior::Halt,
            ..CpuConfig::default()
        }
    }

    pub fn with_reset_status(self, reset_status: u8) -> CpuConfig {
        CpuConfig {
            reset_status,
            ..self
        }
    }

    pub fn with_brk_behavior(self, brk_behavior: BrkBehavior) -> CpuConfig {
        CpuConfig {
            brk_behavior,
            ..self
        }
    }
}
