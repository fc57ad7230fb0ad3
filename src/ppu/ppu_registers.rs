/* the memory-mapped video registers the CPU forwards writes to */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PPURegister {
    PPUCTRL,
    PPUMASK,
    OAMADDR,
    OAMDATA,
    PPUSCROLL,
    PPUADDR,
    PPUDATA,
    OAMDMA,
}

impl PPURegister {
    pub const ALL: [PPURegister; 8] = [
        PPURegister::PPUCTRL,
        PPURegister::PPUMASK,
        PPURegister::OAMADDR,
        PPURegister::OAMDATA,
        PPURegister::PPUSCROLL,
        PPURegister::PPUADDR,
        PPURegister::PPUDATA,
        PPURegister::OAMDMA,
    ];

    pub fn address(&self) -> u16 {
        match self {
            PPURegister::PPUCTRL => 0x2000,
            PPURegister::PPUMASK => 0x2001,
            PPURegister::OAMADDR => 0x2003,
            PPURegister::OAMDATA => 0x2004,
            PPURegister::PPUSCROLL => 0x2005,
            PPURegister::PPUADDR => 0x2006,
            PPURegister::PPUDATA => 0x2007,
            PPURegister::OAMDMA => 0x4014,
        }
    }

    /* PPUSTATUS (0x2002) isn't here: it's read-only, so writes to it are plain memory */
    pub fn from_addr(addr: u16) -> Option<PPURegister> {
        match addr {
            0x2000 => Some(PPURegister::PPUCTRL),
            0x2001 => Some(PPURegister::PPUMASK),
            0x2003 => Some(PPURegister::OAMADDR),
            0x2004 => Some(PPURegister::OAMDATA),
            0x2005 => Some(PPURegister::PPUSCROLL),
            0x2006 => Some(PPURegister::PPUADDR),
            0x2007 => Some(PPURegister::PPUDATA),
            0x4014 => Some(PPURegister::OAMDMA),
            _ => None,
        }
    }

    /* OAMDATA and PPUDATA can be read back; the rest can only be written */
    pub fn is_write_only(&self) -> bool {
        !matches!(self, PPURegister::OAMDATA | PPURegister::PPUDATA)
    }
}
