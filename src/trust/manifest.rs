//! Dapp manifest structure and its canonical signing form
//!
//! A site publishes its manifest at `/.well-known/dapp_file`. The deployer of
//! the referenced contract signs the manifest with the `signature` field left
//! out, so verification has to rebuild exactly the bytes that were signed:
//! compact JSON, fields in declaration order, and the string and timestamp
//! conventions of the signing tool (see [`DappManifest::signing_bytes`]).

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::io;

/// A signed declaration binding a domain to a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DappManifest {
    /// Human-readable dapp name
    pub name: String,

    /// Domain the manifest was issued for
    pub domain: String,

    /// Contract the manifest was issued for (hex, any casing)
    #[serde(rename = "contract")]
    pub contract_address: String,

    /// When the manifest was signed; the original offset is kept for re-serialization
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<FixedOffset>,

    /// Hex-encoded recoverable signature over the other fields (excluded from signing)
    #[serde(
        default,
        deserialize_with = "deserialize_signature",
        skip_serializing_if = "String::is_empty"
    )]
    pub signature: String,
}

/// The fields covered by the signature, in signing order
#[derive(Serialize)]
struct SigningView<'a> {
    name: &'a str,
    domain: &'a str,
    contract: &'a str,
    timestamp: String,
}

impl DappManifest {
    /// Decode a manifest from the raw `dapp_file` body
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Whether the manifest carries a signature at all
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Build the exact bytes the deployer signed
    ///
    /// Compact JSON of `name`, `domain`, `contract` and `timestamp` in that
    /// order, with no `signature` key. Strings escape `<`, `>`, `&`, U+2028
    /// and U+2029 in addition to the usual JSON escapes, and the timestamp is
    /// RFC 3339 with trailing fractional zeros trimmed and `Z` for UTC.
    pub fn signing_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        let view = SigningView {
            name: &self.name,
            domain: &self.domain,
            contract: &self.contract_address,
            timestamp: format_timestamp(&self.timestamp),
        };

        let mut bytes = Vec::with_capacity(128);
        let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, HtmlSafeFormatter);
        view.serialize(&mut serializer)?;
        Ok(bytes)
    }
}

/// Request-side facts a manifest is checked against
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerificationContext {
    /// Host the client asked about, already normalized
    pub requested_host: String,

    /// Contract the client asked about, if any
    pub requested_contract: Option<String>,

    /// Deployer of the contract as resolved by the block explorer; empty when there is none
    pub claimed_deployer: String,
}

impl VerificationContext {
    pub fn for_host(host: impl Into<String>, deployer: impl Into<String>) -> Self {
        VerificationContext {
            requested_host: host.into(),
            requested_contract: None,
            claimed_deployer: deployer.into(),
        }
    }

    pub fn for_contract(
        host: impl Into<String>,
        contract: impl Into<String>,
        deployer: impl Into<String>,
    ) -> Self {
        VerificationContext {
            requested_host: host.into(),
            requested_contract: Some(contract.into()),
            claimed_deployer: deployer.into(),
        }
    }
}

/// Format a timestamp as RFC 3339 with nanosecond precision, trailing zeros trimmed
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    let mut formatted = timestamp.format("%Y-%m-%dT%H:%M:%S").to_string();

    // chrono encodes a leap second as nanos >= 1e9
    let nanos = timestamp.nanosecond() % 1_000_000_000;
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        formatted.push('.');
        formatted.push_str(fraction.trim_end_matches('0'));
    }

    if timestamp.offset().local_minus_utc() == 0 {
        formatted.push('Z');
    } else {
        formatted.push_str(&timestamp.format("%:z").to_string());
    }

    formatted
}

fn serialize_timestamp<S>(
    timestamp: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(timestamp))
}

fn deserialize_signature<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Compact JSON formatter that also escapes HTML-sensitive characters
struct HtmlSafeFormatter;

impl serde_json::ser::Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if matches!(ch, '<' | '>' | '&' | '\u{2028}' | '\u{2029}') {
                writer.write_all(fragment[start..index].as_bytes())?;
                write!(writer, "\\u{:04x}", ch as u32)?;
                start = index + ch.len_utf8();
            }
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
