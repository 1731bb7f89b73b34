use crate::common::error::Error;

pub const MILLIS_PER_MINUTE: i32 = 60 * 1000;
pub const MILLIS_PER_HOUR: i32 = 60 * MILLIS_PER_MINUTE;

/// Timezone offset fields count in units of 15 minutes.
pub const QUARTER_HOUR_MINUTES: i32 = 15;
pub const QUARTER_HOURS_PER_HOUR: i32 = 4;

/// DST Offset field value for savings amounts with no assigned code.
pub const DST_OFFSET_UNKNOWN: u8 = 255;

/// A wall-clock instant together with its timezone, as read from the
/// platform calendar. This library only ever reads it; producing one is the
/// caller's job.
// NOTE: Copy is derived for usage convenience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calendar {
    pub year: u16,
    pub month: Month,
    pub day: u8,
    pub hour: u8, // 0 to 23
    pub min: u8,
    pub sec: u8,
    pub wday: Weekday,
    pub zone: ZoneInfo,
}

/// Raw timezone values at one instant. `raw_offset_ms` is the standard
/// (non-DST) offset from UTC; `dst_savings_ms` is the additional offset
/// applied while DST is in effect, 0 for zones that never observe DST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneInfo {
    pub raw_offset_ms: i32,
    pub dst_savings_ms: i32,
    pub dst_active: bool,
}

/// Calendar month using the platform calendar's 0-indexed convention.
/// The wire format is 1-indexed; [`Month::to_wire`] owns that conversion so
/// no bare `+ 1` appears at the encoding sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Month {
    January = 0,
    February = 1,
    March = 2,
    April = 3,
    May = 4,
    June = 5,
    July = 6,
    August = 7,
    September = 8,
    October = 9,
    November = 10,
    December = 11,
}

impl Month {
    /// The 1-indexed month byte (January = 1 to December = 12).
    pub fn to_wire(self) -> u8 {
        self as u8 + 1
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

    /// Converts from the 0-indexed calendar convention (January = 0).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::January),
            1 => Ok(Self::February),
            2 => Ok(Self::March),
            3 => Ok(Self::April),
            4 => Ok(Self::May),
            5 => Ok(Self::June),
            6 => Ok(Self::July),
            7 => Ok(Self::August),
            8 => Ok(Self::September),
            9 => Ok(Self::October),
            10 => Ok(Self::November),
            11 => Ok(Self::December),
            _ => Err(Error::InvalidVariant(("Month", value as u32))),
        }
    }
}

/// Day of week using the platform calendar's Sunday-first convention
/// (Sunday = 1 to Saturday = 7). The wire format is ISO-8601 style with
/// Monday = 1 and Sunday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// The wire day-of-week byte. Sunday is the single special case (it
    /// moves from first to last); every other day shifts down by one.
    pub fn to_wire(self) -> u8 {
        match self {
            Self::Sunday => 7,
            day => day as u8 - 1,
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = Error;

    /// Converts from the Sunday-first calendar convention (Sunday = 1).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Sunday),
            2 => Ok(Self::Monday),
            3 => Ok(Self::Tuesday),
            4 => Ok(Self::Wednesday),
            5 => Ok(Self::Thursday),
            6 => Ok(Self::Friday),
            7 => Ok(Self::Saturday),
            _ => Err(Error::InvalidVariant(("Weekday", value as u32))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_wire_values_are_one_indexed() {
        assert_eq!(Month::January.to_wire(), 1);
        assert_eq!(Month::March.to_wire(), 3);
        assert_eq!(Month::December.to_wire(), 12);
    }

    #[test]
    fn weekday_wire_values() {
        // sunday moves to the end, everything else shifts down by one
        assert_eq!(Weekday::Sunday.to_wire(), 7);
        assert_eq!(Weekday::Monday.to_wire(), 1);
        assert_eq!(Weekday::Wednesday.to_wire(), 3);
        assert_eq!(Weekday::Saturday.to_wire(), 6);
    }

    #[test]
    fn month_from_calendar_index() {
        assert!(matches!(Month::try_from(0), Ok(Month::January)));
        assert!(matches!(Month::try_from(11), Ok(Month::December)));
        assert!(Month::try_from(12).is_err());
    }

    #[test]
    fn weekday_from_calendar_value() {
        assert!(matches!(Weekday::try_from(1), Ok(Weekday::Sunday)));
        assert!(matches!(Weekday::try_from(7), Ok(Weekday::Saturday)));
        assert!(Weekday::try_from(0).is_err());
        assert!(Weekday::try_from(8).is_err());
    }
}
