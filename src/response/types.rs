//! Decomposed response types.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error_handling::{DecodeError, MalformedHeaderLine};

/// Value of one header within a hop.
///
/// A header seen once is `Single`. The second occurrence of the same name promotes
/// it to `Multiple`, keeping arrival order, so a `Multiple` always holds at least
/// two values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Single(String),
    Multiple(Vec<String>),
}

impl HeaderValue {
    /// Appends a repeated occurrence, promoting a `Single` to `Multiple`.
    pub fn push(&mut self, value: String) {
        match self {
            HeaderValue::Single(first) => {
                let first = std::mem::take(first);
                *self = HeaderValue::Multiple(vec![first, value]);
            }
            HeaderValue::Multiple(values) => values.push(value),
        }
    }

    /// First value received for this header.
    pub fn first(&self) -> &str {
        match self {
            HeaderValue::Single(value) => value,
            HeaderValue::Multiple(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// All values in arrival order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            HeaderValue::Single(value) => vec![value.as_str()],
            HeaderValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, HeaderValue::Multiple(_))
    }
}

/// Headers of one hop, in first-seen order. Names are compared exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields(Vec<(String, HeaderValue)>);

impl HeaderFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an occurrence of `name`, folding repeats into a list.
    pub fn append(&mut self, name: &str, value: String) {
        match self.0.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => existing.push(value),
            None => self.0.push((name.to_string(), HeaderValue::Single(value))),
        }
    }

    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for HeaderFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One response in a redirect chain: status line plus its headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderHop {
    /// e.g. `HTTP/1.1`
    pub protocol: String,
    /// Everything after the first space of the status line, e.g. `200 OK`
    #[serde(rename = "status-code")]
    pub status_code: String,
    pub headers: HeaderFields,
}

impl HeaderHop {
    /// Looks up a header of this hop by exact name.
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }
}

/// The header block of a response, split per hop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedHeaders {
    /// Decoded header text, all hops included
    pub raw: String,
    /// Hops in arrival order, indexed from 0
    pub hops: Vec<HeaderHop>,
    /// Number of hops
    pub parts: usize,
    /// Lines that were skipped because they had no colon
    pub malformed: Vec<MalformedHeaderLine>,
}

impl ParsedHeaders {
    pub fn hop(&self, index: usize) -> Option<&HeaderHop> {
        self.hops.get(index)
    }

    /// The last hop, i.e. the response that produced the body.
    pub fn final_hop(&self) -> Option<&HeaderHop> {
        self.hops.last()
    }
}

/// The decoded body and the HTML fragments found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedBody {
    pub raw: String,
    pub title: Option<String>,
    pub head: Option<String>,
    pub body: Option<String>,
}

/// Status of the exchange after redirects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    #[serde(rename = "http-code")]
    pub http_code: u16,
    /// Effective URL after redirects
    pub url: String,
    /// Bare host of `url`, if it looks like one
    pub zone: Option<String>,
}

/// Everything extracted from one completed exchange.
///
/// The header and body sections decode independently: either may carry a
/// `DecodeError` while the other holds its parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    pub status: StatusInfo,
    #[serde(serialize_with = "serialize_section")]
    pub header: Result<ParsedHeaders, DecodeError>,
    #[serde(serialize_with = "serialize_section")]
    pub data: Result<ParsedBody, DecodeError>,
}

/// Serializes a section as its value, or as `{"error": ...}` when it failed to decode.
fn serialize_section<T, S>(section: &Result<T, DecodeError>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match section {
        Ok(value) => value.serialize(serializer),
        Err(error) => {
            let mut map = serializer.serialize_map(Some(2))?;
            map.serialize_entry("error", error)?;
            map.serialize_entry("message", &error.to_string())?;
            map.end()
        }
    }
}
