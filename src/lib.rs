use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// When a performer can make a performance slot.
///
/// The set is closed, an input file using any other label fails to parse.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Availability {
    Free,
    Maybe,
    Busy,
}

/// Performance slot identifier, a string or an integer in the input.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(untagged)]
pub enum SlotId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::Number(n) => write!(f, "{n}"),
            SlotId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One availability claim in a submission.
#[derive(Clone, Debug, Deserialize)]
pub struct Performance {
    pub id: SlotId,
    pub availability: Availability,
}

/// A performer's availability submission, one per performer.
#[derive(Clone, Debug, Deserialize)]
pub struct Submission {
    pub name: String,
    pub performances: Vec<Performance>,
}

/// A lineup record, only the performer groups matter here.
///
/// Lineup files carry plenty of presentation fields (date, location and so
/// on) that get ignored when decoding.
#[derive(Clone, Debug, Deserialize)]
pub struct Lineup {
    pub performers: IndexMap<String, Vec<String>>,
}

/// Names grouped under the fixed availability categories for one slot.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Buckets {
    #[serde(rename = "Free")]
    pub free: Vec<String>,
    #[serde(rename = "Maybe")]
    pub maybe: Vec<String>,
    #[serde(rename = "Busy")]
    pub busy: Vec<String>,
}

impl Buckets {
    pub fn bucket_mut(&mut self, availability: Availability) -> &mut Vec<String> {
        match availability {
            Availability::Free => &mut self.free,
            Availability::Maybe => &mut self.maybe,
            Availability::Busy => &mut self.busy,
        }
    }
}

/// Group submitted names into availability buckets per slot.
///
/// Slots show up in the result in the order they are first seen and every
/// slot gets all three buckets, empty ones included. Names keep their input
/// order within a bucket.
pub fn group_submissions(submissions: &[Submission]) -> IndexMap<String, Buckets> {
    let mut grouped: IndexMap<String, Buckets> = IndexMap::new();

    for submission in submissions {
        for performance in &submission.performances {
            grouped
                .entry(performance.id.to_string())
                .or_default()
                .bucket_mut(performance.availability)
                .push(submission.name.clone());
        }
    }

    grouped
}

/// Count performer appearances across every performer group of every lineup
/// in every source, into one running total per name.
pub fn tally_performers<'a>(
    sources: impl IntoIterator<Item = &'a [Lineup]>,
) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for lineups in sources {
        for lineup in lineups {
            for group in lineup.performers.values() {
                for name in group {
                    *counts.entry(name.clone()).or_default() += 1;
                }
            }
        }
    }

    counts
}

/// Order a tally by count, highest first. The sort is stable so names with
/// equal counts stay in first-encounter order.
pub fn sorted_tally(counts: IndexMap<String, usize>) -> Vec<(String, usize)> {
    counts.into_iter().sorted_by(|a, b| b.1.cmp(&a.1)).collect()
}

pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {path:?}"))?;
    serde_json::from_str(&content).with_context(|| format!("invalid JSON in {path:?}"))
}

pub fn save_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_json_string(value)?)
        .with_context(|| format!("failed to write {path:?}"))
}

/// Encode with a 4-space indent, matching the hand-edited files in data/.
/// serde_json leaves non-ASCII characters unescaped.
pub fn to_json_string(value: &impl Serialize) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(String::from_utf8(buf)?)
}
