use std::io::{self, Write};

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Seconds between 1601-01-01 and 1970-01-01.
pub const FILETIME_EPOCH_DELTA_SECS: i64 = 11_644_473_600;

/// FILETIME resolution is 100ns.
pub const FILETIME_TICKS_PER_SEC: u64 = 10_000_000;

/// First year a DOS date can hold.
const DOS_EPOCH_YEAR: i32 = 1980;

/// Convert a timestamp into a FILETIME tick count (100ns intervals since
/// 1601-01-01). Sub-second precision is dropped; anything before 1601
/// saturates to 0.
pub fn to_filetime<Tz: TimeZone>(t: &DateTime<Tz>) -> u64 {
    let secs = t.timestamp().saturating_add(FILETIME_EPOCH_DELTA_SECS);
    u64::try_from(secs)
        .unwrap_or(0)
        .saturating_mul(FILETIME_TICKS_PER_SEC)
}

/// Inverse of [`to_filetime`], back to Unix seconds.
pub fn filetime_to_unix(ticks: u64) -> i64 {
    (ticks / FILETIME_TICKS_PER_SEC) as i64 - FILETIME_EPOCH_DELTA_SECS
}

/// Packed DOS date and time words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DosDateTime {
    pub date: u16,
    pub time: u16,
}

/// OR `value` into `target` as a `count`-bit field starting `start` bits
/// below the MSB of a 16-bit word.
#[inline]
fn put_bits(target: u16, value: u16, start: u32, count: u32) -> u16 {
    let mask = (1u16 << count) - 1;
    target | ((value & mask) << (16 - start - count))
}

#[inline]
fn get_bits(source: u16, start: u32, count: u32) -> u16 {
    let mask = (1u16 << count) - 1;
    (source >> (16 - start - count)) & mask
}

/// Pack the calendar fields of `t` into DOS date/time words. Seconds are
/// stored as-is (no halving); years clamp to 1980..=2107.
pub fn to_dos_datetime<T: Datelike + Timelike>(t: &T) -> DosDateTime {
    let year = (t.year() - DOS_EPOCH_YEAR).clamp(0, 0x7F) as u16;

    let mut date = 0;
    date = put_bits(date, year, 0, 7);
    date = put_bits(date, t.month() as u16, 7, 4);
    date = put_bits(date, t.day() as u16, 11, 5);

    let mut time = 0;
    time = put_bits(time, t.hour() as u16, 0, 5);
    time = put_bits(time, t.minute() as u16, 5, 6);
    time = put_bits(time, t.second() as u16, 11, 5);

    DosDateTime { date, time }
}

impl DosDateTime {
    pub fn year(&self) -> i32 {
        DOS_EPOCH_YEAR + get_bits(self.date, 0, 7) as i32
    }

    pub fn month(&self) -> u32 {
        get_bits(self.date, 7, 4) as u32
    }

    pub fn day(&self) -> u32 {
        get_bits(self.date, 11, 5) as u32
    }

    pub fn hour(&self) -> u32 {
        get_bits(self.time, 0, 5) as u32
    }

    pub fn minute(&self) -> u32 {
        get_bits(self.time, 5, 6) as u32
    }

    pub fn second(&self) -> u32 {
        get_bits(self.time, 11, 5) as u32
    }

    /// Date word first, then time word, both little-endian.
    pub fn to_le_bytes(self) -> [u8; 4] {
        let [d0, d1] = self.date.to_le_bytes();
        let [t0, t1] = self.time.to_le_bytes();
        [d0, d1, t0, t1]
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_le_bytes())
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
