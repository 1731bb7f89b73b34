use chrono::{Datelike, Local, Timelike};
use gatt_time::{
    characteristic::{CurrentTime, ShortTime},
    common::{
        error::Error,
        time::{Calendar, Month, Weekday, ZoneInfo},
    },
};

fn main() -> Result<(), Error> {
    simple_logger::init().unwrap();

    let now = Local::now();
    let calendar = Calendar {
        year: now.year() as u16,
        month: Month::try_from(now.month0() as u8)?,
        day: now.day() as u8,
        hour: now.hour() as u8,
        min: now.minute() as u8,
        sec: now.second() as u8,
        wday: Weekday::try_from(now.weekday().num_days_from_sunday() as u8 + 1)?,
        // chrono only exposes the combined UTC offset, which is close enough
        // for a demo; real callers read raw offset and DST savings from the
        // platform timezone database
        zone: ZoneInfo {
            raw_offset_ms: now.offset().local_minus_utc() * 1000,
            dst_savings_ms: 0,
            dst_active: false,
        },
    };

    let payload = CurrentTime::new(calendar, false);
    println!("current time: {:02x?}", payload.to_bytes());

    let payload = ShortTime::new(calendar, false);
    println!("short time:   {:02x?}", payload.to_bytes());

    Ok(())
}
