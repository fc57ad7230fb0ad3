use crate::ppu::PPURegister;

/// The CPU's view of the video chip: one setter per memory-mapped register.
///
/// `CoreMemory` forwards writes to these instead of storing them, so the
/// emulated program can drive whatever sits behind this trait (a real
/// renderer, a register file, or a recording fake in tests).
pub trait VideoRegisters {
    fn set_control(&mut self, value: u8);
    fn set_mask(&mut self, value: u8);
    fn set_oam_address(&mut self, value: u8);
    fn set_oam_data(&mut self, value: u8);
    fn set_scroll(&mut self, value: u8);
    fn set_address(&mut self, value: u8);
    fn set_data(&mut self, value: u8);
    fn set_oam_dma(&mut self, page: u8);

    fn write_register(&mut self, register: PPURegister, value: u8) {
        match register {
            PPURegister::PPUCTRL => self.set_control(value),
            PPURegister::PPUMASK => self.set_mask(value),
            PPURegister::OAMADDR => self.set_oam_address(value),
            PPURegister::OAMDATA => self.set_oam_data(value),
            PPURegister::PPUSCROLL => self.set_scroll(value),
            PPURegister::PPUADDR => self.set_address(value),
            PPURegister::PPUDATA => self.set_data(value),
            PPURegister::OAMDMA => self.set_oam_dma(value),
        }
    }
}

/* for a CPU with nothing plugged into the video registers; writes vanish */
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedVideo;

impl VideoRegisters for DetachedVideo {
    fn set_control(&mut self, _value: u8) {}
    fn set_mask(&mut self, _value: u8) {}
    fn set_oam_address(&mut self, _value: u8) {}
    fn set_oam_data(&mut self, _value: u8) {}
    fn set_scroll(&mut self, _value: u8) {}
    fn set_address(&mut self, _value: u8) {}
    fn set_data(&mut self, _value: u8) {}
    fn set_oam_dma(&mut self, _page: u8) {}
}
