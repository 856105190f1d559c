//! Decoding of the router's attached-device list.
//!
//! The router reports its devices as a single string of the form
//! `<count>@<device>@<device>@...`, where every device is eight
//! `;`-separated positional fields:
//!
//! | Index | Field                 |
//! |-------|-----------------------|
//! | 0     | reserved              |
//! | 1     | IP address            |
//! | 2     | host name             |
//! | 3     | MAC address           |
//! | 4     | connection type       |
//! | 5     | signal strength       |
//! | 6     | link rate             |
//! | 7     | reserved              |

use std::net::IpAddr;
use std::num::ParseIntError;

use macaddr::MacAddr;
use thiserror::Error;

use super::AttachedDevice;

/// Number of characters taken by the leading device count and its separator.
const COUNT_PREFIX_LEN: usize = 2;

const DEVICE_SEPARATOR: char = '@';
const FIELD_SEPARATOR: char = ';';
const FIELD_COUNT: usize = 8;

const IP_FIELD: usize = 1;
const NAME_FIELD: usize = 2;
const MAC_FIELD: usize = 3;
const TYPE_FIELD: usize = 4;
const SIGNAL_FIELD: usize = 5;
const LINK_RATE_FIELD: usize = 6;

/// Error type for device list decoding.
///
/// Any of these aborts the whole decode; no partial snapshot is returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A device record did not have exactly eight fields.
    #[error("Malformed device record {record:?}: expected 8 fields, found {fields}")]
    MalformedRecord {
        /// The offending record text
        record: String,
        /// Number of fields actually found
        fields: usize,
    },

    /// The hardware address field could not be parsed.
    #[error("Invalid MAC address {value:?}: {source}")]
    InvalidAddress {
        /// The offending field value
        value: String,
        /// Underlying parse error
        #[source]
        source: macaddr::ParseError,
    },

    /// A numeric field held something other than an integer or nothing.
    #[error("Invalid {field} value {value:?}: {source}")]
    InvalidNumber {
        /// Name of the numeric field
        field: &'static str,
        /// The offending field value
        value: String,
        /// Underlying parse error
        #[source]
        source: ParseIntError,
    },
}

/// Decodes the router's attached-device list into device records.
///
/// The first two characters (device count and separator) are skipped
/// unconditionally. Records are returned in the order the router listed them.
///
/// The IP address is best-effort: a missing or unparsable address yields
/// `ip: None`. The signal and link-rate fields default to 0 when empty.
///
/// # Errors
///
/// Returns [`DecodeError`] when:
/// - The input is too short to hold the count prefix, or a record does not
///   have exactly eight fields ([`DecodeError::MalformedRecord`])
/// - A MAC address does not parse ([`DecodeError::InvalidAddress`])
/// - Signal or link rate is non-empty and not an integer ([`DecodeError::InvalidNumber`])
pub fn decode_devices(devices: &str) -> Result<Vec<AttachedDevice>, DecodeError> {
    let records = devices
        .get(COUNT_PREFIX_LEN..)
        .ok_or_else(|| DecodeError::MalformedRecord {
            record: devices.to_string(),
            fields: 0,
        })?;

    // The router answers "0@" when nothing is attached. That decodes to an
    // empty list, not a MalformedRecord, so a network with no devices does
    // not fail every poll.
    if records.is_empty() {
        return Ok(Vec::new());
    }

    records.split(DEVICE_SEPARATOR).map(decode_record).collect()
}

/// Decodes one `;`-separated device record.
fn decode_record(record: &str) -> Result<AttachedDevice, DecodeError> {
    let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();

    if fields.len() != FIELD_COUNT {
        return Err(DecodeError::MalformedRecord {
            record: record.to_string(),
            fields: fields.len(),
        });
    }

    let mac_field = fields[MAC_FIELD];
    let mac = mac_field
        .parse::<MacAddr>()
        .map_err(|source| DecodeError::InvalidAddress {
            value: mac_field.to_string(),
            source,
        })?;

    let signal = parse_optional_int("signal", fields[SIGNAL_FIELD])?;
    let link_rate = parse_optional_int("link rate", fields[LINK_RATE_FIELD])?;

    Ok(AttachedDevice {
        ip: fields[IP_FIELD].parse::<IpAddr>().ok(),
        name: fields[NAME_FIELD].to_string(),
        mac,
        kind: fields[TYPE_FIELD].to_string(),
        link_rate,
        signal,
    })
}

/// Parses an integer field where an empty value means 0.
fn parse_optional_int(field: &'static str, value: &str) -> Result<i32, DecodeError> {
    if value.is_empty() {
        return Ok(0);
    }

    value
        .parse::<i32>()
        .map_err(|source| DecodeError::InvalidNumber {
            field,
            value: value.to_string(),
            source,
        })
}
