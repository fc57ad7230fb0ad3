use crate::cpu::tests::{cpu_for_testing, with_operands, OPERAND_START};
use crate::cpu::AddressingMode::{
    Absolute, AbsoluteX, AbsoluteY, Immediate, Implied, IndexedIndirect, IndirectIndexed, Indirect,
    ZeroPage, ZeroPageX, ZeroPageY,
};
use crate::cpu::{AddressingMode, Operand};

#[test]
fn test_addressing_modes() {
    let cpu = &mut cpu_for_testing();

    cpu.write_mem(0x0010, 0x20);

    /* we can read memory through an addressing mode */
    with_operands(cpu, &[0x10, 0x00]);
    assert_eq!(Absolute.deref(cpu), 0x20);

    /* we can read the accumulator through an addressing mode */
    cpu.registers.accumulator = 0xaa;
    assert_eq!(Implied.deref(cpu), 0xaa);

    /* Immediate is the operand byte itself */
    with_operands(cpu, &[0x42]);
    assert_eq!(Immediate.resolve_address(cpu), OPERAND_START);

    /* Absolute */
    with_operands(cpu, &[0xab, 0xcd]);
    assert_eq!(Absolute.resolve_address(cpu), 0xcdab);

    /* AbsoluteX */
    cpu.registers.index_x = 0x05;
    with_operands(cpu, &[0xab, 0xcd]);
    assert_eq!(AbsoluteX.resolve_address(cpu), 0xcdb0);

    /* AbsoluteY */
    cpu.registers.index_y = 0x10;
    with_operands(cpu, &[0xab, 0xcd]);
    assert_eq!(AbsoluteY.resolve_address(cpu), 0xcdbb);

    /* ZeroPage */
    with_operands(cpu, &[0xab, 0xcd]);
    assert_eq!(ZeroPage.resolve_address(cpu), 0x00ab);

    /* ZeroPageX */
    cpu.registers.index_x = 0x1;
    with_operands(cpu, &[0xab]);
    assert_eq!(ZeroPageX.resolve_address(cpu), 0x00ac);
    /* wrapping case */
    cpu.registers.index_x = 0xff;
    with_operands(cpu, &[0xab]);
    assert_eq!(ZeroPageX.resolve_address(cpu), 0x00aa);

    /* ZeroPageY */
    cpu.registers.index_y = 0x1;
    with_operands(cpu, &[0xab]);
    assert_eq!(ZeroPageY.resolve_address(cpu), 0x00ac);
    cpu.registers.index_y = 0xff;
    with_operands(cpu, &[0xab]);
    assert_eq!(ZeroPageY.resolve_address(cpu), 0x00aa);

    /* AbsoluteX wraps around the top of memory */
    cpu.registers.index_x = 0x02;
    with_operands(cpu, &[0xff, 0xff]);
    assert_eq!(AbsoluteX.resolve_address(cpu), 0x0001);
}

#[test]
fn test_zero_page_x_stays_in_zero_page() {
    let cpu = &mut cpu_for_testing();
    cpu.registers.index_x = 2;

    with_operands(cpu, &[0xff]);
    assert_eq!(ZeroPageX.resolve_address(cpu), 0x0001);
}

#[test]
fn test_indexed_indirect() {
    let cpu = &mut cpu_for_testing();

    cpu.registers.index_x = 0x10;
    cpu.write_mem(0x0030, 0xcd);
    cpu.write_mem(0x0031, 0xab);
    with_operands(cpu, &[0x20]);
    assert_eq!(IndexedIndirect.resolve_address(cpu), 0xabcd);

    /* when the pointer wraps over a page boundary, it goes back to the beginning, alas */
    cpu.write_mem(0x00ff, 0x11);
    cpu.write_mem(0x0100, 0x22);
    cpu.write_mem(0x0000, 0x33);
    cpu.registers.index_x = 0x50;
    with_operands(cpu, &[0xaf]);
    assert_eq!(IndexedIndirect.resolve_address(cpu), 0x3311);
}

#[test]
fn test_indirect_indexed() {
    let cpu = &mut cpu_for_testing();

    cpu.registers.index_y = 0x20;
    cpu.write_mem(0x0040, 0xbb);
    cpu.write_mem(0x0041, 0xaa);
    with_operands(cpu, &[0x40]);
    assert_eq!(IndirectIndexed.resolve_address(cpu), 0xaadb);

    /* also an issue with wrapping at the edge of the zero page */
    cpu.registers.index_y = 0x30;
    cpu.write_mem(0x00ff, 0x10);
    cpu.write_mem(0x0100, 0x99);
    cpu.write_mem(0x0000, 0x20);
    with_operands(cpu, &[0xff]);
    assert_eq!(IndirectIndexed.resolve_address(cpu), 0x2040);

    /* adding Y carries into the high byte, and past the top of memory */
    cpu.registers.index_y = 0x02;
    cpu.write_mem(0x0050, 0xff);
    cpu.write_mem(0x0051, 0xff);
    with_operands(cpu, &[0x50]);
    assert_eq!(IndirectIndexed.resolve_address(cpu), 0x0001);
}

#[test]
fn test_indirect_page_bug() {
    let cpu = &mut cpu_for_testing();

    /* normal case */
    cpu.write_mem(0x0120, 0x34);
    cpu.write_mem(0x0121, 0x12);
    with_operands(cpu, &[0x20, 0x01]);
    assert_eq!(Indirect.resolve_address(cpu), 0x1234);

    /* pointer at 0x02ff takes its high byte from 0x0200, not 0x0300 */
    cpu.write_mem(0x02ff, 0x78);
    cpu.write_mem(0x0300, 0x99);
    cpu.write_mem(0x0200, 0x56);
    with_operands(cpu, &[0xff, 0x02]);
    assert_eq!(Indirect.resolve_address(cpu), 0x5678);
}

#[test]
fn test_resolution_advances_past_operands() {
    let modes = [
        Immediate,
        ZeroPage,
        ZeroPageX,
        ZeroPageY,
        Absolute,
        AbsoluteX,
        AbsoluteY,
        Indirect,
        IndexedIndirect,
        IndirectIndexed,
    ];

    for mode in modes {
        let cpu = &mut cpu_for_testing();
        with_operands(cpu, &[0x10, 0x20]);
        mode.resolve_address(cpu);
        assert_eq!(
            cpu.program_counter(),
            OPERAND_START + mode.operand_bytes(),
            "{mode:?}"
        );
    }
}

#[test]
fn test_implied_resolves_to_accumulator() {
    let cpu = &mut cpu_for_testing();
    with_operands(cpu, &[0x10, 0x20]);

    assert_eq!(Implied.resolve(cpu), Operand::Accumulator);
    assert_eq!(cpu.program_counter(), OPERAND_START);

    Operand::Accumulator.write(cpu, 0x5a);
    assert_eq!(cpu.accumulator(), 0x5a);

    assert_eq!(AddressingMode::ZeroPage.resolve(cpu), Operand::Memory(0x0010));
}

#[test]
#[should_panic(expected = "Implied mode should never be resolved to an address")]
fn test_implied_has_no_address() {
    let cpu = &mut cpu_for_testing();
    Implied.resolve_address(cpu);
}
