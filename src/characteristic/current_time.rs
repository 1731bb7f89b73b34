use crate::{
    common::{
        codec::{from_u16, from_u8},
        time::Calendar,
    },
    Writer,
};

/// Current Time characteristic payload.
///
/// Layout: year (LE16), month (1-12), day, hour, minute, second,
/// day-of-week (1 = Monday to 7 = Sunday), fractions256. The fractions byte
/// is always 0 (not set) and the optional timezone/DST trailer bytes are
/// never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrentTime {
    pub calendar: Calendar,
    /// Reserved for a "honor device time offset" policy. Accepted for
    /// interface compatibility with callers but never branched on; a future
    /// revision is expected to use it to append the timezone/DST trailer.
    pub honor_device_time_offset: bool,
}

impl CurrentTime {
    pub const LEN: usize = 9; // bytes

    pub fn new(calendar: Calendar, honor_device_time_offset: bool) -> Self {
        Self {
            calendar,
            honor_device_time_offset,
        }
    }

    pub fn encode(&self, writer: &mut Writer) {
        let cal = &self.calendar;
        writer.extend_from_slice(&from_u16(cal.year as u32));
        writer.push(cal.month.to_wire());
        writer.push(from_u8(cal.day as u32));
        writer.push(from_u8(cal.hour as u32));
        writer.push(from_u8(cal.min as u32));
        writer.push(from_u8(cal.sec as u32));
        writer.push(cal.wday.to_wire());
        writer.push(0); // fractions256 (not set)
    }

    /// The payload as a fixed array. Always exactly [`Self::LEN`] bytes.
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut buf = [0; Self::LEN];
        let mut writer = Writer::new(&mut buf);
        self.encode(&mut writer);
        buf
    }
}

/// Truncated current time payload used by devices that only take the fields
/// up to (and including) the minutes: year (LE16), month, day, hour, minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortTime {
    pub calendar: Calendar,
    /// See [`CurrentTime::honor_device_time_offset`].
    pub honor_device_time_offset: bool,
}

impl ShortTime {
    pub const LEN: usize = 6; // bytes

    pub fn new(calendar: Calendar, honor_device_time_offset: bool) -> Self {
        Self {
            calendar,
            honor_device_time_offset,
        }
    }

    pub fn encode(&self, writer: &mut Writer) {
        let cal = &self.calendar;
        writer.extend_from_slice(&from_u16(cal.year as u32));
        writer.push(cal.month.to_wire());
        writer.push(from_u8(cal.day as u32));
        writer.push(from_u8(cal.hour as u32));
        writer.push(from_u8(cal.min as u32));
    }

    /// The payload as a fixed array. Always exactly [`Self::LEN`] bytes.
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut buf = [0; Self::LEN];
        let mut writer = Writer::new(&mut buf);
        self.encode(&mut writer);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::time::{Month, Weekday, ZoneInfo};

    // 2023-03-15 14:30:45, a wednesday, in a zone with inactive DST
    fn calendar() -> Calendar {
        Calendar {
            year: 2023,
            month: Month::March,
            day: 15,
            hour: 14,
            min: 30,
            sec: 45,
            wday: Weekday::Wednesday,
            zone: ZoneInfo {
                raw_offset_ms: 3_600_000,
                dst_savings_ms: 3_600_000,
                dst_active: false,
            },
        }
    }

    #[test]
    fn current_time_layout() {
        let payload = CurrentTime::new(calendar(), false);
        assert_eq!(
            payload.to_bytes(),
            [0xE7, 0x07, 0x03, 0x0F, 0x0E, 0x1E, 0x2D, 0x03, 0x00]
        );
    }

    #[test]
    fn short_time_layout() {
        let payload = ShortTime::new(calendar(), false);
        assert_eq!(payload.to_bytes(), [0xE7, 0x07, 0x03, 0x0F, 0x0E, 0x1E]);
    }

    #[test]
    fn honor_device_time_offset_has_no_effect() {
        let with = CurrentTime::new(calendar(), true).to_bytes();
        let without = CurrentTime::new(calendar(), false).to_bytes();
        assert_eq!(with, without);
    }

    #[test]
    fn encode_into_larger_buffer() {
        let mut buf = [0xAA; 16];
        let mut writer = Writer::new(&mut buf);
        CurrentTime::new(calendar(), false).encode(&mut writer);
        assert_eq!(writer.index, CurrentTime::LEN);
        assert_eq!(writer.to_bytes()[0..2], [0xE7, 0x07]);
    }
}
