use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One subject's unprocessed survey answers, exactly as the extractor
/// returned them.
///
/// Every field is free text. Numbers and `null` coming from the extractor
/// are folded into text on the way in; nothing here is guaranteed to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub age: String,

    /// Q1: usual bed time.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub bed_time: String,
    /// Q2: minutes taken to fall asleep.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub sleep_latency: String,
    /// Q3: usual getting-up time.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub wake_time: String,
    /// Q4: hours of actual sleep per night.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub sleep_duration: String,

    /// Q5a: cannot get to sleep within 30 minutes.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub trouble_falling_asleep: String,
    /// Q5b: wake up in the middle of the night or early morning.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub night_waking: String,
    /// Q5c: have to get up to use the bathroom.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub bathroom: String,
    /// Q5d: cannot breathe comfortably.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub breathing: String,
    /// Q5e: cough or snore loudly.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub cough_snore: String,
    /// Q5f: feel too cold.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub too_cold: String,
    /// Q5g: feel too hot.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub too_hot: String,
    /// Q5h: had bad dreams.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub bad_dreams: String,
    /// Q5i: had pain.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub pain: String,

    /// Q6: subjective sleep quality, 0 (very good) to 3 (very bad).
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub sleep_quality: String,
    /// Q7: how often sleep medication was taken.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub medication: String,
    /// Q8: trouble staying awake during daytime activities.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub daytime_sleepiness: String,
    /// Q9: problem keeping up enthusiasm to get things done.
    #[serde(default, deserialize_with = "crate::loose::text")]
    pub daytime_enthusiasm: String,
}

impl RawRecord {
    /// The eight disturbance items (Q5b–Q5i) summed into the sleep
    /// disturbances component. Q5a is excluded; it feeds sleep latency.
    pub fn disturbance_items(&self) -> [(&'static str, &str); 8] {
        [
            ("night_waking", &self.night_waking),
            ("bathroom", &self.bathroom),
            ("breathing", &self.breathing),
            ("cough_snore", &self.cough_snore),
            ("too_cold", &self.too_cold),
            ("too_hot", &self.too_hot),
            ("bad_dreams", &self.bad_dreams),
            ("pain", &self.pain),
        ]
    }
}
