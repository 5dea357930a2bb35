//! Board identity check.
//!
//! The RP2040 exposes its identity in `SYSINFO.CHIP_ID`:
//! manufacturer in bits 0..12, part in bits 12..28, revision in bits 28..32.

const MANUFACTURER_MASK: u32 = 0xFFF;
const PART_SHIFT: u32 = 12;
const PART_MASK: u32 = 0xFFFF;
const REVISION_SHIFT: u32 = 28;

const RP2040_MANUFACTURER: u16 = 0x927;
const RP2040_PART: u16 = 0x0002;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Platform {
    Rp2040B0,
    Rp2040B1,
    Rp2040B2,
    Unknown {
        manufacturer: u16,
        part: u16,
        revision: u8,
    },
}

impl Platform {
    /// Decodes a raw `CHIP_ID` register value
    pub const fn from_chip_id(raw: u32) -> Self {
        let manufacturer = (raw & MANUFACTURER_MASK) as u16;
        let part = ((raw >> PART_SHIFT) & PART_MASK) as u16;
        let revision = (raw >> REVISION_SHIFT) as u8;

        if manufacturer != RP2040_MANUFACTURER || part != RP2040_PART {
            return Platform::Unknown {
                manufacturer,
                part,
                revision,
            };
        }

        match revision {
            1 => Platform::Rp2040B0,
            2 => Platform::Rp2040B1,
            3 => Platform::Rp2040B2,
            _ => Platform::Unknown {
                manufacturer,
                part,
                revision,
            },
        }
    }

    pub const fn is_supported(&self) -> bool {
        !matches!(self, Platform::Unknown { .. })
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Platform::Rp2040B0 => "RP2040 B0",
            Platform::Rp2040B1 => "RP2040 B1",
            Platform::Rp2040B2 => "RP2040 B2",
            Platform::Unknown { .. } => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip_id(manufacturer: u32, part: u32, revision: u32) -> u32 {
        manufacturer | (part << 12) | (revision << 28)
    }

    #[test]
    fn rp2040_revisions_are_supported() {
        assert_eq!(Platform::from_chip_id(chip_id(0x927, 2, 1)), Platform::Rp2040B0);
        assert_eq!(Platform::from_chip_id(chip_id(0x927, 2, 2)), Platform::Rp2040B1);
        assert_eq!(Platform::from_chip_id(chip_id(0x927, 2, 3)), Platform::Rp2040B2);
        assert_eq!(Platform::from_chip_id(0x3000_2927), Platform::Rp2040B2);
        assert!(Platform::from_chip_id(0x3000_2927).is_supported());
    }

    #[test]
    fn unknown_revision_is_rejected() {
        let platform = Platform::from_chip_id(chip_id(0x927, 2, 4));
        assert_eq!(
            platform,
            Platform::Unknown {
                manufacturer: 0x927,
                part: 2,
                revision: 4
            }
        );
        assert!(!platform.is_supported());
        assert_eq!(platform.name(), "unknown");
    }

    #[test]
    fn other_parts_are_rejected() {
        assert!(!Platform::from_chip_id(chip_id(0x927, 4, 2)).is_supported());
        assert!(!Platform::from_chip_id(chip_id(0x493, 2, 1)).is_supported());
        assert!(!Platform::from_chip_id(0).is_supported());
    }
}
