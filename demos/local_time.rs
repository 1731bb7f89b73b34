use gatt_time::{
    characteristic::{local_time::quarter_hour_offset, CurrentTime, LocalTimeInfo},
    common::{
        codec::join,
        time::{Calendar, Month, Weekday, ZoneInfo, MILLIS_PER_HOUR, MILLIS_PER_MINUTE},
    },
};

fn main() {
    simple_logger::init().unwrap();

    // central europe in summer
    let zone = ZoneInfo {
        raw_offset_ms: MILLIS_PER_HOUR,
        dst_savings_ms: 60 * MILLIS_PER_MINUTE,
        dst_active: true,
    };
    let local_time = LocalTimeInfo::new(zone);
    println!("local time info: {:02x?}", local_time.to_bytes());

    // some devices take current time and local time info as one packet
    let calendar = Calendar {
        year: 2023,
        month: Month::March,
        day: 15,
        hour: 14,
        min: 30,
        sec: 45,
        wday: Weekday::Wednesday,
        zone,
    };
    let current_time = CurrentTime::new(calendar, false);
    let packet = join(&current_time.to_bytes(), &local_time.to_bytes());
    println!("combined:        {:02x?}", packet);

    // the minute-granular variant disagrees with the 2A0F encoding for
    // zones that are not a whole number of hours from UTC
    let kathmandu = 5 * MILLIS_PER_HOUR + 45 * MILLIS_PER_MINUTE;
    println!("UTC+05:45 quarter hours: {}", quarter_hour_offset(kathmandu));
}
