use log::debug;

use crate::{
    common::time::{
        ZoneInfo, DST_OFFSET_UNKNOWN, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, QUARTER_HOURS_PER_HOUR,
        QUARTER_HOUR_MINUTES,
    },
    Writer,
};

/// Local Time Information characteristic payload.
///
/// Layout: time zone (sint8, units of 15 minutes), DST offset (uint8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalTimeInfo {
    pub zone: ZoneInfo,
}

impl LocalTimeInfo {
    pub const LEN: usize = 2; // bytes

    pub fn new(zone: ZoneInfo) -> Self {
        Self { zone }
    }

    pub fn encode(&self, writer: &mut Writer) {
        writer.push(time_zone_code(self.zone.raw_offset_ms) as u8);
        writer.push(dst_offset_code(&self.zone));
    }

    /// The payload as a fixed array. Always exactly [`Self::LEN`] bytes.
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut buf = [0; Self::LEN];
        let mut writer = Writer::new(&mut buf);
        self.encode(&mut writer);
        buf
    }
}

/// Time Zone field: signed count of quarter-hour units from UTC, -48 to +56
/// (-12:00 to +14:00).
///
/// Raw offsets are expected to be whole hours here; the division truncates
/// toward zero. No clamping is done, so offsets outside the protocol range
/// wrap through the 8-bit cast.
pub fn time_zone_code(raw_offset_ms: i32) -> i8 {
    let offset_hours = raw_offset_ms / MILLIS_PER_HOUR;
    (offset_hours * QUARTER_HOURS_PER_HOUR) as i8
}

/// DST Offset field: a code for the DST savings currently in effect.
///
/// Returns 0 both for zones that never observe DST and for zones where DST
/// is simply not active at this instant; the characteristic does not
/// distinguish the two. Savings amounts without an assigned code encode as
/// [`DST_OFFSET_UNKNOWN`].
pub fn dst_offset_code(zone: &ZoneInfo) -> u8 {
    if zone.dst_savings_ms == 0 {
        return 0;
    }
    if !zone.dst_active {
        return 0;
    }
    match zone.dst_savings_ms / MILLIS_PER_MINUTE {
        30 => 2,
        60 => 4,
        120 => 8,
        minutes => {
            debug!("no DST offset code for {} minutes of savings", minutes);
            DST_OFFSET_UNKNOWN
        }
    }
}

/// Minute-granular alternate of [`time_zone_code`] used by some fitness
/// tracker families: whole hours count 4 units each, leftover minutes add
/// one unit per 15, and the sign is reapplied at the end.
///
/// The two codecs agree on whole-hour offsets but not on others (+05:45
/// maps to 23 here and to 20 via [`time_zone_code`]), so this stays a
/// separate codec.
pub fn quarter_hour_offset(raw_offset_ms: i32) -> i8 {
    let offset_minutes = raw_offset_ms / 1000 / 60;
    let sign = if offset_minutes < 0 { -1 } else { 1 };
    let offset_minutes = offset_minutes.abs();
    let offset_hours = offset_minutes / 60;
    (sign * (offset_minutes % 60 / QUARTER_HOUR_MINUTES + offset_hours * QUARTER_HOURS_PER_HOUR))
        as i8
}
