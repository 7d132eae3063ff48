//! Field normalization: free survey text to typed values.
//!
//! Parsers never fail loudly. Anything they cannot read becomes `None`, and
//! the component calculator decides what a missing value is worth (see
//! [`crate::policy`]).

use jiff::SignedDuration;
use jiff::civil::Time;
use somnus_core::models::record::RawRecord;
use tracing::warn;

use crate::policy::RATING_MAX;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Unit assumed for a bare number in a duration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Hours,
    Minutes,
}

/// How a raw field should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ClockTime,
    Duration(DurationUnit),
    Rating,
}

/// A normalized field, or the explicit missing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Clock(Time),
    Duration(SignedDuration),
    Rating(u8),
    Missing,
}

/// Normalize one raw field according to its kind.
pub fn normalize_field(text: &str, kind: FieldKind) -> FieldValue {
    let value = match kind {
        FieldKind::ClockTime => parse_clock(text).map(FieldValue::Clock),
        FieldKind::Duration(unit) => parse_duration(text, unit).map(FieldValue::Duration),
        FieldKind::Rating => parse_rating(text, RATING_MAX).map(FieldValue::Rating),
    };
    value.unwrap_or(FieldValue::Missing)
}

/// Fold full-width digits and punctuation to ASCII, lowercase, and drop all
/// whitespace.
fn fold(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
            '：' => ':',
            '．' => '.',
            _ => c,
        })
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn strip_affixes(mut s: &str, prefixes: &[&str], suffixes: &[&str]) -> String {
    for prefix in prefixes {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest;
        }
    }
    for suffix in suffixes {
        if let Some(rest) = s.strip_suffix(suffix) {
            s = rest;
        }
    }
    s.to_string()
}

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn decimal(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Morning,
    Noon,
    Afternoon,
    Night,
}

const MERIDIEM_PREFIXES: [(&str, Meridiem); 10] = [
    ("凌晨", Meridiem::Morning),
    ("早上", Meridiem::Morning),
    ("早晨", Meridiem::Morning),
    ("上午", Meridiem::Morning),
    ("中午", Meridiem::Noon),
    ("下午", Meridiem::Afternoon),
    ("傍晚", Meridiem::Afternoon),
    ("晚上", Meridiem::Night),
    ("夜里", Meridiem::Night),
    ("夜间", Meridiem::Night),
];

const MERIDIEM_SUFFIXES: [(&str, Meridiem); 4] = [
    ("a.m.", Meridiem::Morning),
    ("p.m.", Meridiem::Afternoon),
    ("am", Meridiem::Morning),
    ("pm", Meridiem::Afternoon),
];

impl Meridiem {
    fn to_24h(self, hour: u32) -> u32 {
        match (self, hour) {
            (_, h) if h > 12 => h,
            (Meridiem::Morning, 12) => 0,
            (Meridiem::Morning, h) => h,
            (Meridiem::Noon, h) if h >= 11 => h,
            (Meridiem::Noon, h) => h + 12,
            (Meridiem::Afternoon, 12) => 12,
            (Meridiem::Afternoon, h) => h + 12,
            // "晚上12点" is midnight; small hours at night are past midnight.
            (Meridiem::Night, 12) => 0,
            (Meridiem::Night, h) if h <= 5 => h,
            (Meridiem::Night, h) => h + 12,
        }
    }
}

/// Parse a clock-of-day answer such as `23:30`, `2330`, `11:30pm`,
/// `晚上11点半` or `凌晨1点`.
pub fn parse_clock(text: &str) -> Option<Time> {
    let folded = fold(text);
    let mut s = strip_affixes(&folded, &["约", "大约", "大概"], &["左右", "前后", "钟"]);

    let mut meridiem = None;
    for (prefix, m) in MERIDIEM_PREFIXES {
        if let Some(rest) = s.strip_prefix(prefix) {
            meridiem = Some(m);
            s = rest.to_string();
            break;
        }
    }
    if meridiem.is_none() {
        for (suffix, m) in MERIDIEM_SUFFIXES {
            if let Some(rest) = s.strip_suffix(suffix) {
                meridiem = Some(m);
                s = rest.to_string();
                break;
            }
        }
    }

    let s = s
        .replace("点半", ":30")
        .replace("时半", ":30")
        .replace(['点', '时'], ":")
        .replace('分', "");

    let (mut hour, minute) = match s.split_once(':') {
        Some((h, m)) if h.len() <= 2 && m.len() <= 2 => {
            (digits(h)?, if m.is_empty() { 0 } else { digits(m)? })
        }
        Some(_) => return None,
        // "23.30" is a clock time; "23.3" is a decimal that lost its
        // trailing zero and cannot be told apart from 23:03.
        None if s.contains('.') => match s.split_once('.') {
            Some((h, m)) if h.len() <= 2 && m.len() == 2 => (digits(h)?, digits(m)?),
            _ => return None,
        },
        None if !s.bytes().all(|b| b.is_ascii_digit()) => return None,
        None => match s.len() {
            1 | 2 => (digits(&s)?, 0),
            3 | 4 => {
                let (h, m) = s.split_at(s.len() - 2);
                (digits(h)?, digits(m)?)
            }
            _ => return None,
        },
    };

    if let Some(m) = meridiem {
        hour = m.to_24h(hour);
    }
    if hour == 24 && minute == 0 {
        hour = 0;
    }
    if hour > 23 || minute > 59 {
        return None;
    }
    Time::new(hour as i8, minute as i8, 0, 0).ok()
}

const DURATION_UNITS: [(&str, &str); 12] = [
    ("个小时", "h"),
    ("小时", "h"),
    ("hours", "h"),
    ("hour", "h"),
    ("hrs", "h"),
    ("hr", "h"),
    ("分钟", "m"),
    ("minutes", "m"),
    ("minute", "m"),
    ("mins", "m"),
    ("min", "m"),
    ("分", "m"),
];

/// Parse a duration answer such as `7.5`, `7h30m`, `45min`, `7小时30分钟`,
/// `半小时` or `7:30`. Bare numbers use `default_unit`. The result is
/// bounded to `[0, 24h]`.
pub fn parse_duration(text: &str, default_unit: DurationUnit) -> Option<SignedDuration> {
    let folded = fold(text);
    let mut s = strip_affixes(
        &folded,
        &["约", "大约", "大概", "about", "~", "≈"],
        &["左右", "上下"],
    );
    for (from, to) in DURATION_UNITS {
        s = s.replace(from, to);
    }
    let s = s.replace("半h", "0.5h").replace("h半", "h30m");

    let minutes = if let Some((h, m)) = s.split_once(':') {
        let m = digits(m).filter(|m| *m < 60)?;
        f64::from(digits(h)?) * 60.0 + f64::from(m)
    } else {
        let (hours, rest) = match s.split_once('h') {
            Some((h, rest)) => (Some(decimal(h)?), rest),
            None => (None, s.as_str()),
        };
        let (rest, minute_marked) = match rest.strip_suffix('m') {
            Some(r) => (r, true),
            None => (rest, false),
        };
        match (hours, rest.is_empty()) {
            (Some(h), true) if !minute_marked => h * 60.0,
            (Some(h), false) => h * 60.0 + decimal(rest)?,
            (None, false) => {
                let n = decimal(rest)?;
                match (minute_marked, default_unit) {
                    (true, _) | (false, DurationUnit::Minutes) => n,
                    (false, DurationUnit::Hours) => n * 60.0,
                }
            }
            _ => return None,
        }
    };

    if !(0.0..=(MINUTES_PER_DAY as f64)).contains(&minutes) {
        return None;
    }
    Some(SignedDuration::from_secs_f64(minutes * 60.0))
}

/// Parse an ordinal rating: the integers `0..=max`, optionally followed by
/// `分`. Anything else is missing.
pub fn parse_rating(text: &str, max: u8) -> Option<u8> {
    let folded = fold(text);
    let s = folded.strip_suffix('分').unwrap_or(&folded);
    digits(s)
        .filter(|v| *v <= u32::from(max))
        .map(|v| v as u8)
}

/// A day-long timeline starting at a reference hour in the evening.
///
/// Bed and wake times are placed on the timeline so that a bed time after
/// midnight still sorts after an evening reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    start: Time,
}

fn minute_of_day(t: Time) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

impl Timeline {
    pub fn new(reference_hour: u8) -> Self {
        let start = Time::new((reference_hour % 24) as i8, 0, 0, 0).unwrap_or(Time::midnight());
        Self { start }
    }

    /// Offset of `t` from the reference hour, in `[0, 24h)`.
    pub fn position(&self, t: Time) -> SignedDuration {
        let mins = (minute_of_day(t) - minute_of_day(self.start)).rem_euclid(MINUTES_PER_DAY);
        SignedDuration::from_secs(mins * 60)
    }

    /// Time from `bed` to `wake` measured along the timeline.
    ///
    /// Both times are placed on the same reference day, so a bed time
    /// before midnight and a wake time after it span midnight naturally.
    /// A wake time at or before the bed time on the timeline gives zero or a
    /// negative span, which callers treat as an empty night.
    pub fn time_in_bed(&self, bed: Time, wake: Time) -> SignedDuration {
        self.position(wake) - self.position(bed)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(12)
    }
}

/// The typed projection of a [`RawRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub bed_time: Option<Time>,
    pub wake_time: Option<Time>,
    pub sleep_latency: Option<SignedDuration>,
    pub sleep_duration: Option<SignedDuration>,
    pub trouble_falling_asleep: Option<u8>,
    /// Q5b–Q5i keyed by field name.
    pub disturbances: [(&'static str, Option<u8>); 8],
    pub sleep_quality: Option<u8>,
    pub medication: Option<u8>,
    pub daytime_sleepiness: Option<u8>,
    pub daytime_enthusiasm: Option<u8>,
}

fn read<T>(record_id: &str, field: &str, raw: &str, parsed: Option<T>) -> Option<T> {
    if parsed.is_none() && !raw.trim().is_empty() {
        warn!(record_id, field, value = raw, "unreadable survey field treated as missing");
    }
    parsed
}

impl NormalizedFields {
    pub fn from_record(record: &RawRecord) -> Self {
        let id = record.id.as_str();
        let rating = |field: &str, raw: &str| read(id, field, raw, parse_rating(raw, RATING_MAX));

        Self {
            bed_time: read(id, "bed_time", &record.bed_time, parse_clock(&record.bed_time)),
            wake_time: read(id, "wake_time", &record.wake_time, parse_clock(&record.wake_time)),
            sleep_latency: read(
                id,
                "sleep_latency",
                &record.sleep_latency,
                parse_duration(&record.sleep_latency, DurationUnit::Minutes),
            ),
            sleep_duration: read(
                id,
                "sleep_duration",
                &record.sleep_duration,
                parse_duration(&record.sleep_duration, DurationUnit::Hours),
            ),
            trouble_falling_asleep: rating("trouble_falling_asleep", &record.trouble_falling_asleep),
            disturbances: record
                .disturbance_items()
                .map(|(field, raw)| (field, rating(field, raw))),
            sleep_quality: rating("sleep_quality", &record.sleep_quality),
            medication: rating("medication", &record.medication),
            daytime_sleepiness: rating("daytime_sleepiness", &record.daytime_sleepiness),
            daytime_enthusiasm: rating("daytime_enthusiasm", &record.daytime_enthusiasm),
        }
    }

    /// Names of the survey fields that normalized to missing, in survey order.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        let mut note = |field: &str, present: bool| {
            if !present {
                missing.push(field.to_string());
            }
        };

        note("bed_time", self.bed_time.is_some());
        note("sleep_latency", self.sleep_latency.is_some());
        note("wake_time", self.wake_time.is_some());
        note("sleep_duration", self.sleep_duration.is_some());
        note("trouble_falling_asleep", self.trouble_falling_asleep.is_some());
        for (field, value) in &self.disturbances {
            note(field, value.is_some());
        }
        note("sleep_quality", self.sleep_quality.is_some());
        note("medication", self.medication.is_some());
        note("daytime_sleepiness", self.daytime_sleepiness.is_some());
        note("daytime_enthusiasm", self.daytime_enthusiasm.is_some());
        missing
    }
}
