/* NV-B DIZC */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Carry,
    Zero,
    InterruptDisable,
    Decimal,
    /* "No CPU effect; see: the B flag" */
    Break,
    /* "No CPU effect; always pushed as 1" */
    Unused,
    Overflow,
    Negative,
}

/* bits 4 and 5 only exist on the stack copy of the status register */
pub const STACK_ONLY_BITS: u8 = 0x30;

/* what bits 4 and 5 read as after PLP/RTI: bit 5 set, bit 4 clear */
pub const RESTORED_STACK_ONLY_BITS: u8 = 0x20;

/* the six bits that are real flags */
pub const REAL_FLAGS: u8 = !STACK_ONLY_BITS;

impl StatusFlag {
    pub fn bit(&self) -> u8 {
        match self {
            StatusFlag::Carry => 0,
            StatusFlag::Zero => 1,
            StatusFlag::InterruptDisable => 2,
            StatusFlag::Decimal => 3,
            StatusFlag::Break => 4,
            StatusFlag::Unused => 5,
            StatusFlag::Overflow => 6,
            StatusFlag::Negative => 7,
        }
    }

    pub fn mask(&self) -> u8 {
        1 << self.bit()
    }

    pub fn is_set_in(&self, status: u8) -> bool {
        status & self.mask() != 0
    }

    pub fn update(&self, status: u8, new_val: bool) -> u8 {
        if new_val {
            status | self.mask()
        } else {
            status & !self.mask()
        }
    }

    /* 0 or 1, for folding the carry into arithmetic */
    pub fn as_num(&self, status: u8) -> u8 {
        (status >> self.bit()) & 1
    }
}

/* status as it is written to the stack by PHP and BRK */
pub fn status_for_push(status: u8) -> u8 {
    status | STACK_ONLY_BITS
}

/* status as it is restored from the stack by PLP and RTI */
pub fn status_from_pull(pulled: u8) -> u8 {
    (pulled & REAL_FLAGS) | RESTORED_STACK_ONLY_BITS
}
