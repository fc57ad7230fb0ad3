use crate::ppu::{PPURegister, PpuRegisterFile, VideoRegisters};

#[test]
fn test_register_addresses_round_trip() {
    for register in PPURegister::ALL {
        assert_eq!(PPURegister::from_addr(register.address()), Some(register));
    }
    /* PPUSTATUS and the mirrors aren't forwarded */
    assert_eq!(PPURegister::from_addr(0x2002), None);
    assert_eq!(PPURegister::from_addr(0x2008), None);
    assert_eq!(PPURegister::from_addr(0x4015), None);
}

#[test]
fn test_write_only_registers() {
    assert!(PPURegister::PPUCTRL.is_write_only());
    assert!(PPURegister::PPUMASK.is_write_only());
    assert!(PPURegister::OAMADDR.is_write_only());
    assert!(PPURegister::PPUSCROLL.is_write_only());
    assert!(PPURegister::PPUADDR.is_write_only());
    assert!(PPURegister::OAMDMA.is_write_only());
    assert!(!PPURegister::OAMDATA.is_write_only());
    assert!(!PPURegister::PPUDATA.is_write_only());
}

#[test]
fn test_address_latch_writes_high_then_low() {
    let mut ppu = PpuRegisterFile::new();

    ppu.set_address(0x40);
    ppu.set_address(0x02);
    ppu.set_data(0x18);

    ppu.set_address(0x21);
    ppu.set_address(0x14);
    ppu.set_data(0x21);

    /* the top two bits of the high byte fall outside the 14 bit space */
    assert_eq!(ppu.vram(0x0002), 0x18);
    assert_eq!(ppu.vram(0x2114), 0x21);
    assert_eq!(ppu.vram_address(), 0x2115);
}

#[test]
fn test_data_writes_increment_by_32_when_ctrl_says_so() {
    let mut ppu = PpuRegisterFile::new();
    ppu.set_control(0x04);

    ppu.set_address(0x20);
    ppu.set_address(0x00);
    ppu.set_data(0xaa);
    ppu.set_data(0xbb);

    assert_eq!(ppu.vram(0x2000), 0xaa);
    assert_eq!(ppu.vram(0x2020), 0xbb);
    assert_eq!(ppu.vram_address(), 0x2040);
}

#[test]
fn test_scroll_shares_the_write_latch() {
    let mut ppu = PpuRegisterFile::new();

    ppu.set_scroll(0x10);
    ppu.set_scroll(0x20);
    assert_eq!(ppu.scroll(), (0x10, 0x20));

    /* a single scroll write leaves the latch on the low half of PPUADDR */
    ppu.set_scroll(0x30);
    ppu.set_address(0x55);
    assert_eq!(ppu.vram_address() & 0xff, 0x55);
}

#[test]
fn test_oam_data_advances_oam_address() {
    let mut ppu = PpuRegisterFile::new();

    ppu.set_oam_address(0xfe);
    ppu.set_oam_data(0x01);
    ppu.set_oam_data(0x02);
    ppu.set_oam_data(0x03);

    assert_eq!(ppu.oam(0xfe), 0x01);
    assert_eq!(ppu.oam(0xff), 0x02);
    assert_eq!(ppu.oam(0x00), 0x03);
    assert_eq!(ppu.oam_address(), 0x01);
}

#[test]
fn test_write_register_dispatches_to_setters() {
    let mut ppu = PpuRegisterFile::new();

    ppu.write_register(PPURegister::PPUCTRL, 0x80);
    ppu.write_register(PPURegister::PPUMASK, 0x1e);
    ppu.write_register(PPURegister::OAMDMA, 0x02);

    assert_eq!(ppu.control(), 0x80);
    assert_eq!(ppu.mask(), 0x1e);
    assert_eq!(ppu.last_dma_page(), Some(0x02));
}

#[test]
fn test_chr_seeds_pattern_tables() {
    let mut ppu = PpuRegisterFile::new();
    let chr: Vec<u8> = (0..0x2000).map(|i| (i % 251) as u8).collect();
    ppu.load_chr(&chr);

    assert_eq!(ppu.vram(0x0000), 0);
    assert_eq!(ppu.vram(0x1fff), (0x1fff % 251) as u8);
    assert_eq!(ppu.vram(0x2000), 0);
}
