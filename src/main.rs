use clap::Parser;
use nescore::config::{BrkBehavior, CpuConfig};
use nescore::cpu::{CoreMemory, RunOutcome, CPU, RESET_VECTOR};
use nescore::ppu::PpuRegisterFile;
use nescore::rom::Rom;
use std::cell::RefCell;
use std::error::Error;
use std::num::ParseIntError;
use std::process::exit;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = CommandLineArgs::parse();

    let rom = Rom::parse_file(&args.rom)?;

    let video = Rc::new(RefCell::new(PpuRegisterFile::new()));
    video.borrow_mut().load_chr(&rom.chr_data);

    let mut memory = CoreMemory::new(video.clone());
    memory.insert_disk(&rom.prg_data, rom.trainer.as_deref())?;
    if let Some(entry) = args.entry {
        /* nestest's automation mode starts at 0xc000 instead of following the vector */
        memory.write16(RESET_VECTOR, entry);
    }

    let brk_behavior = if args.halt_on_brk {
        BrkBehavior::Halt
    } else {
        BrkBehavior::Interrupt
    };
    let config = CpuConfig::default()
        .with_brk_behavior(brk_behavior)
        .with_reset_status(args.reset_status);

    let mut cpu = CPU::new(memory, config);
    cpu.record_trace(args.trace);
    cpu.reset_interrupt();

    let result = match args.max_steps {
        Some(max_steps) => cpu.run_for(max_steps),
        None => cpu.run().map(|()| RunOutcome::Halted),
    };

    if args.trace {
        for line in cpu.take_trace() {
            println!("{line}");
        }
    }

    let registers = cpu.registers();
    println!(
        "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} PC:{:04X}",
        registers.accumulator,
        registers.index_x,
        registers.index_y,
        registers.status,
        registers.s_register,
        registers.program_counter
    );

    match result {
        Ok(RunOutcome::Halted) => println!("halted"),
        Ok(RunOutcome::StepLimitReached) => {
            println!("stopped after {} steps", args.max_steps.unwrap_or_default())
        }
        Err(fault) => {
            eprintln!("fault: {fault}");
            exit(1);
        }
    }

    Ok(())
}

fn parse_hex_u8(value: &str) -> Result<u8, ParseIntError> {
    u8::from_str_radix(value.trim_start_matches("0x").trim_start_matches('$'), 16)
}

fn parse_hex_u16(value: &str) -> Result<u16, ParseIntError> {
    u16::from_str_radix(value.trim_start_matches("0x").trim_start_matches('$'), 16)
}

#[derive(Parser, Debug)]
#[command(version, about = "Runs a 6502 program from an iNES cartridge", long_about = None)]
struct CommandLineArgs {
    /// rom file
    rom: String,

    /// treat opcode $00 as "stop" instead of a software interrupt
    #[arg(long)]
    halt_on_brk: bool,

    /// status register value after reset, in hex
    #[arg(long, value_parser = parse_hex_u8, default_value = "34")]
    reset_status: u8,

    /// start here instead of at the reset vector, in hex
    #[arg(long, value_parser = parse_hex_u16)]
    entry: Option<u16>,

    /// stop after this many instructions
    #[arg(long)]
    max_steps: Option<usize>,

    /// print every instruction executed
    #[arg(long)]
    trace: bool,
}
