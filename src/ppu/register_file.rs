use crate::ppu::{VideoRegisters, OAM, OAM_SIZE, PPU_MEMORY_SIZE, VRAM};

/* the PPU address space is 14 bits wide; everything above mirrors down */
const VRAM_ADDRESS_MASK: u16 = 0x3fff;

/* PPUCTRL bit 2 picks a +32 (next row) increment after each PPUDATA access */
const CTRL_INCREMENT_32: u8 = 0x04;

/**
 * A register-level stand-in for the video chip. It keeps the state the CPU
 * can influence through the eight mapped registers (including the shared
 * first/second write latch behind PPUADDR and PPUSCROLL) without doing any
 * rendering.
 */
pub struct PpuRegisterFile {
    ppu_ctrl: u8,
    ppu_mask: u8,
    oam_addr: u8,
    scroll_x: u8,
    scroll_y: u8,
    vram_addr: u16,
    first_write: bool, /* for dual-write mapped registers */
    last_dma_page: Option<u8>,
    vram: Box<VRAM>,
    oam: Box<OAM>,
}

impl Default for PpuRegisterFile {
    fn default() -> Self {
        PpuRegisterFile::new()
    }
}

impl PpuRegisterFile {
    pub fn new() -> PpuRegisterFile {
        PpuRegisterFile {
            ppu_ctrl: 0,
            ppu_mask: 0,
            oam_addr: 0,
            scroll_x: 0,
            scroll_y: 0,
            vram_addr: 0,
            first_write: true,
            last_dma_page: None,
            vram: Box::new([0; PPU_MEMORY_SIZE]),
            oam: Box::new([0; OAM_SIZE]),
        }
    }

    /* pattern tables live at the bottom of VRAM; a loader can seed them from CHR data */
    pub fn load_chr(&mut self, chr_data: &[u8]) {
        let len = chr_data.len().min(0x2000);
        self.vram[..len].copy_from_slice(&chr_data[..len]);
    }

    pub fn control(&self) -> u8 {
        self.ppu_ctrl
    }

    pub fn mask(&self) -> u8 {
        self.ppu_mask
    }

    pub fn oam_address(&self) -> u8 {
        self.oam_addr
    }

    pub fn scroll(&self) -> (u8, u8) {
        (self.scroll_x, self.scroll_y)
    }

    pub fn vram_address(&self) -> u16 {
        self.vram_addr
    }

    pub fn last_dma_page(&self) -> Option<u8> {
        self.last_dma_page
    }

    pub fn vram(&self, address: u16) -> u8 {
        self.vram[(address & VRAM_ADDRESS_MASK) as usize]
    }

    pub fn oam(&self, index: u8) -> u8 {
        self.oam[index as usize]
    }

    fn advance_vram_addr(&mut self) {
        let increase = if self.ppu_ctrl & CTRL_INCREMENT_32 != 0 { 32 } else { 1 };
        self.vram_addr = self.vram_addr.wrapping_add(increase) & VRAM_ADDRESS_MASK;
    }
}

impl VideoRegisters for PpuRegisterFile {
    fn set_control(&mut self, value: u8) {
        self.ppu_ctrl = value;
    }

    fn set_mask(&mut self, value: u8) {
        self.ppu_mask = value;
    }

    fn set_oam_address(&mut self, value: u8) {
        self.oam_addr = value;
    }

    fn set_oam_data(&mut self, value: u8) {
        self.oam[self.oam_addr as usize] = value;
        self.oam_addr = self.oam_addr.wrapping_add(1);
    }

    fn set_scroll(&mut self, value: u8) {
        if self.first_write {
            self.scroll_x = value;
        } else {
            self.scroll_y = value;
        }
        self.first_write = !self.first_write;
    }

    fn set_address(&mut self, value: u8) {
        /* writes high byte first */
        self.vram_addr = if self.first_write {
            (self.vram_addr & 0x00ff) | (((value as u16) << 8) & VRAM_ADDRESS_MASK)
        } else {
            (self.vram_addr & 0xff00) | value as u16
        };
        self.first_write = !self.first_write;
    }

    fn set_data(&mut self, value: u8) {
        self.vram[self.vram_addr as usize] = value;
        self.advance_vram_addr();
    }

    fn set_oam_dma(&mut self, page: u8) {
        self.last_dma_page = Some(page);
    }
}
