use crate::cpu::{addr, MEMORY_SIZE};
use crate::ppu::{DetachedVideo, PPURegister, VideoRegisters};
use crate::rom::RomError;
use std::cell::RefCell;
use std::rc::Rc;

pub const PRG_ROM_START: u16 = 0x8000;
pub const PRG_ROM_MIRROR_START: u16 = 0xc000;
pub const PRG_BANK_SIZE: usize = 1 << 14; /* 16kb */
pub const TRAINER_START: u16 = 0x7000;

/**
 * The CPU's 64KB address space. Almost all of it is plain memory; the eight
 * video registers are routed to whatever implements `VideoRegisters` instead.
 */
pub struct CoreMemory {
    memory: Box<[u8; MEMORY_SIZE]>,
    video: Rc<RefCell<dyn VideoRegisters>>,
}

impl CoreMemory {
    pub fn new(video: Rc<RefCell<dyn VideoRegisters>>) -> CoreMemory {
        CoreMemory {
            memory: Box::new([0; MEMORY_SIZE]),
            video,
        }
    }

    /* memory with nothing behind the video registers */
    pub fn detached() -> CoreMemory {
        CoreMemory::new(Rc::new(RefCell::new(DetachedVideo)))
    }

    pub fn read(&self, address: u16) -> u8 {
        if let Some(register) = PPURegister::from_addr(address) {
            if register.is_write_only() {
                log::warn!("Read from write-only video register {register:?} (0x{address:04x})");
            }
        }
        self.memory[address as usize]
    }

    /* the 6502 is little-endian, so the low-order byte comes first */
    pub fn read16(&self, address: u16) -> u16 {
        addr(self.read(address), self.read(address.wrapping_add(1)))
    }

    /**
     * Reads a pointer out of the zero page. Both bytes come from the zero page,
     * so a pointer at 0xff takes its high byte from 0x00 rather than 0x100.
     */
    pub fn read16_zero_page_wrapped(&self, address: u8) -> u16 {
        addr(
            self.read(address as u16),
            self.read(address.wrapping_add(1) as u16),
        )
    }

    pub fn read_signed(&self, address: u16) -> i8 {
        self.read(address) as i8
    }

    pub fn write(&mut self, address: u16, value: u8) {
        match PPURegister::from_addr(address) {
            Some(register) => self.video.borrow_mut().write_register(register, value),
            None => self.memory[address as usize] = value,
        }
    }

    pub fn write16(&mut self, address: u16, value: u16) {
        self.write(address, (value & 0xff) as u8);
        self.write(address.wrapping_add(1), (value >> 8) as u8);
    }

    /* NB: this does not go through the video registers! */
    pub fn load(&mut self, address: u16, data: &[u8]) {
        let start = address as usize;
        let end = (start + data.len()).min(MEMORY_SIZE);
        self.memory[start..end].copy_from_slice(&data[..end - start]);
    }

    /**
     * Places cartridge PRG data at 0x8000. A single 16kb bank is mirrored into
     * 0xc000 as well, so the vectors at the top of memory come from the end of
     * that bank. A trainer, if the cartridge has one, goes to 0x7000.
     */
    pub fn insert_disk(&mut self, prg_data: &[u8], trainer: Option<&[u8]>) -> Result<(), RomError> {
        match prg_data.len() {
            PRG_BANK_SIZE => {
                self.load(PRG_ROM_START, prg_data);
                self.load(PRG_ROM_MIRROR_START, prg_data);
                log::info!("Inserted 16kb PRG, mirrored at 0x{PRG_ROM_MIRROR_START:04x}");
            }
            size if size == 2 * PRG_BANK_SIZE => {
                self.load(PRG_ROM_START, prg_data);
                log::info!("Inserted 32kb PRG");
            }
            size => return Err(RomError::UnsupportedPrgSize(size)),
        }

        if let Some(trainer) = trainer {
            self.load(TRAINER_START, trainer);
            log::info!("Loaded {} byte trainer at 0x{TRAINER_START:04x}", trainer.len());
        }

        Ok(())
    }

    pub fn video(&self) -> Rc<RefCell<dyn VideoRegisters>> {
        self.video.clone()
    }
}
