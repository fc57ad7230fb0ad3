use std::path::Path;
use std::{fmt, fs, io};

pub const HEADER_SIZE: usize = 16;
pub const TRAINER_SIZE: usize = 512;
pub const PRG_UNIT: usize = 1 << 14; /* 16k */
pub const CHR_UNIT: usize = 1 << 13; /* 8k */

const SIGNATURE: &[u8; 4] = b"NES\x1A";
const TRAINER_FLAG: u8 = 1 << 2;

#[derive(Debug)]
pub enum RomError {
    Io(io::Error),
    BadSignature([u8; 4]),
    Truncated { expected: usize, actual: usize },
    UnsupportedPrgSize(usize),
}

impl fmt::Display for RomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomError::Io(err) => write!(f, "could not read ROM: {err}"),
            RomError::BadSignature(signature) => write!(
                f,
                "the ROM's header must start with NES<EOF>; however, it was: {signature:02X?}"
            ),
            RomError::Truncated { expected, actual } => write!(
                f,
                "the ROM is truncated: expected {expected} bytes, found {actual}"
            ),
            RomError::UnsupportedPrgSize(size) => write!(
                f,
                "unsupported PRG size of {size} bytes (must be 16kb or 32kb)"
            ),
        }
    }
}

impl std::error::Error for RomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RomError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RomError {
    fn from(err: io::Error) -> Self {
        RomError::Io(err)
    }
}

impl RomError {
    /* the file was read fine, but its contents are wrong */
    pub fn is_malformed(&self) -> bool {
        !matches!(self, RomError::Io(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rom {
    pub prg_data: Vec<u8>,
    pub chr_data: Vec<u8>,
    pub trainer: Option<Vec<u8>>,
    pub byte_6_flags: u8,
    pub byte_7_flags: u8,
}

impl Rom {
    pub fn parse_file<P: AsRef<Path>>(file_ref: P) -> Result<Rom, RomError> {
        log::info!("Attempting to parse {}", file_ref.as_ref().display());
        let rom_data = fs::read(file_ref)?;
        Rom::read_rom_data(&rom_data)
    }

    /* iNES layout: 16 byte header, optional 512 byte trainer, PRG banks, CHR banks */
    pub fn read_rom_data(rom_data: &[u8]) -> Result<Rom, RomError> {
        if rom_data.len() < HEADER_SIZE {
            return Err(RomError::Truncated {
                expected: HEADER_SIZE,
                actual: rom_data.len(),
            });
        }

        let signature = [rom_data[0], rom_data[1], rom_data[2], rom_data[3]];
        if &signature != SIGNATURE {
            return Err(RomError::BadSignature(signature));
        }

        /* PRG ROM is in 16k increments, CHR ROM is in 8k (and can be zero) */
        let prg_rom_size = rom_data[4] as usize * PRG_UNIT;
        let chr_rom_size = rom_data[5] as usize * CHR_UNIT;
        let byte_6_flags = rom_data[6];
        let byte_7_flags = rom_data[7];

        let trainer_size = if byte_6_flags & TRAINER_FLAG != 0 {
            TRAINER_SIZE
        } else {
            0
        };

        let prg_rom_start = HEADER_SIZE + trainer_size;
        let chr_rom_start = prg_rom_start + prg_rom_size;
        let expected = chr_rom_start + chr_rom_size;
        if rom_data.len() < expected {
            return Err(RomError::Truncated {
                expected,
                actual: rom_data.len(),
            });
        }

        let rom = Rom {
            prg_data: rom_data[prg_rom_start..chr_rom_start].to_vec(),
            chr_data: rom_data[chr_rom_start..expected].to_vec(),
            trainer: (trainer_size > 0).then(|| rom_data[HEADER_SIZE..prg_rom_start].to_vec()),
            byte_6_flags,
            byte_7_flags,
        };

        log::info!(
            "Rom flags: {:#04x} {:#04x}; PRG size: {}; CHR size: {}; trainer: {}",
            rom.byte_6_flags,
            rom.byte_7_flags,
            rom.prg_data.len(),
            rom.chr_data.len(),
            rom.has_trainer()
        );

        Ok(rom)
    }

    pub fn has_trainer(&self) -> bool {
        self.trainer.is_some()
    }

    pub fn prg_banks(&self) -> usize {
        self.prg_data.len() / PRG_UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(prg_banks: u8, chr_banks: u8, flags_6: u8) -> Vec<u8> {
        let mut data = vec![b'N', b'E', b'S', 0x1a, prg_banks, chr_banks, flags_6, 0];
        data.resize(HEADER_SIZE, 0);
        if flags_6 & TRAINER_FLAG != 0 {
            data.extend(std::iter::repeat(0x77).take(TRAINER_SIZE));
        }
        data.extend(std::iter::repeat(0xaa).take(prg_banks as usize * PRG_UNIT));
        data.extend(std::iter::repeat(0xcc).take(chr_banks as usize * CHR_UNIT));
        data
    }

    #[test]
    fn test_parses_sections() {
        let rom = Rom::read_rom_data(&image(2, 1, 0)).unwrap();

        assert_eq!(rom.prg_data.len(), 2 * PRG_UNIT);
        assert_eq!(rom.chr_data.len(), CHR_UNIT);
        assert_eq!(rom.prg_banks(), 2);
        assert!(rom.prg_data.iter().all(|&b| b == 0xaa));
        assert!(rom.chr_data.iter().all(|&b| b == 0xcc));
        assert!(!rom.has_trainer());
    }

    #[test]
    fn test_trainer_comes_before_prg() {
        let rom = Rom::read_rom_data(&image(1, 0, TRAINER_FLAG)).unwrap();

        let trainer = rom.trainer.as_ref().unwrap();
        assert_eq!(trainer.len(), TRAINER_SIZE);
        assert!(trainer.iter().all(|&b| b == 0x77));
        assert!(rom.prg_data.iter().all(|&b| b == 0xaa));
        assert!(rom.chr_data.is_empty());
    }

    #[test]
    fn test_bad_signature() {
        let mut data = image(1, 0, 0);
        data[3] = 0x00;

        let err = Rom::read_rom_data(&data).unwrap_err();
        assert!(matches!(err, RomError::BadSignature([b'N', b'E', b'S', 0x00])));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_short_header() {
        let err = Rom::read_rom_data(b"NES\x1a").unwrap_err();
        assert!(matches!(err, RomError::Truncated { expected: 16, actual: 4 }));
    }

    #[test]
    fn test_truncated_body() {
        let mut data = image(2, 1, 0);
        data.truncate(HEADER_SIZE + PRG_UNIT);

        match Rom::read_rom_data(&data) {
            Err(RomError::Truncated { expected, actual }) => {
                assert_eq!(expected, HEADER_SIZE + 2 * PRG_UNIT + CHR_UNIT);
                assert_eq!(actual, HEADER_SIZE + PRG_UNIT);
            }
            other => panic!("expected truncation, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_not_malformed() {
        let err = Rom::parse_file("/nonexistent/definitely/not/here.nes").unwrap_err();
        assert!(matches!(err, RomError::Io(_)));
        assert!(!err.is_malformed());
    }
}
