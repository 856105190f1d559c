//! SOAP request templates and response envelope decoding.
//!
//! The router speaks a small, fixed subset of SOAP: every request is one of
//! the [`SoapAction`] templates POSTed to the same endpoint, and every
//! response carries a numeric `ResponseCode` in its body.

use std::fmt;

use handlebars::Handlebars;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Serialize;

use super::{EnvelopeError, RouterError};

const AUTHENTICATE_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
<SOAP-ENV:Header>
<SessionID xsi:type="xsd:string"
  xmlns:xsi="http://www.w3.org/1999/XMLSchema-instance">{{session_id}}</SessionID>
</SOAP-ENV:Header>
<SOAP-ENV:Body>
<Authenticate>
  <NewUsername>{{username}}</NewUsername>
  <NewPassword>{{password}}</NewPassword>
</Authenticate>
</SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

const GET_ATTACH_DEVICE_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>
<SOAP-ENV:Envelope xmlns:SOAPSDK1="http://www.w3.org/2001/XMLSchema"
  xmlns:SOAPSDK2="http://www.w3.org/2001/XMLSchema-instance"
  xmlns:SOAPSDK3="http://schemas.xmlsoap.org/soap/encoding/"
  xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
<SOAP-ENV:Header>
<SessionID>{{session_id}}</SessionID>
</SOAP-ENV:Header>
<SOAP-ENV:Body>
<M1:GetAttachDevice xmlns:M1="urn:NETGEAR-ROUTER:service:DeviceInfo:1">
</M1:GetAttachDevice>
</SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

/// The remote operations the router exposes to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoapAction {
    /// Validates the session credentials.
    Authenticate,
    /// Lists the devices currently attached to the router.
    GetAttachDevice,
}

impl SoapAction {
    /// Returns the value sent in the `SOAPAction` header.
    #[must_use]
    pub const fn urn(self) -> &'static str {
        match self {
            Self::Authenticate => "urn:NETGEAR-ROUTER:service:ParentalControl:1#Authenticate",
            Self::GetAttachDevice => "urn:NETGEAR-ROUTER:service:DeviceInfo:1#GetAttachDevice",
        }
    }

    /// Returns the request body template for this action.
    const fn template(self) -> &'static str {
        match self {
            Self::Authenticate => AUTHENTICATE_TEMPLATE,
            Self::GetAttachDevice => GET_ATTACH_DEVICE_TEMPLATE,
        }
    }
}

impl fmt::Display for SoapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticate => write!(f, "Authenticate"),
            Self::GetAttachDevice => write!(f, "GetAttachDevice"),
        }
    }
}

/// Values substituted into a request template.
///
/// Handlebars escapes every value, so credentials containing `<` or `&`
/// still produce well-formed XML.
#[derive(Debug, Serialize)]
pub(crate) struct TemplateData<'a> {
    pub session_id: &'a str,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
}

/// Renders the request body for `action`.
pub(crate) fn render_request(
    action: SoapAction,
    data: &TemplateData<'_>,
) -> Result<String, RouterError> {
    Handlebars::new()
        .render_template(action.template(), data)
        .map_err(|e| RouterError::Template(e.to_string()))
}

/// The parts of a response envelope this crate reads.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Envelope {
    /// `Body/ResponseCode`; zero means success.
    pub response_code: i64,
    /// `Body/GetAttachDeviceResponse/NewAttachDevice`, if present.
    pub attached_devices: Option<String>,
}

const RESPONSE_CODE_PATH: &[&str] = &["Body", "ResponseCode"];
const ATTACHED_DEVICES_PATH: &[&str] = &["Body", "GetAttachDeviceResponse", "NewAttachDevice"];

/// Decodes a response envelope.
///
/// Elements are matched by local name, so whatever namespace prefixes the
/// router firmware uses are ignored.
pub(crate) fn parse_envelope(body: &str) -> Result<Envelope, EnvelopeError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut response_code: Option<String> = None;
    let mut attached_devices: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                path.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                // An element with no text still counts as present
                if ends_with(&path, ATTACHED_DEVICES_PATH) {
                    attached_devices.get_or_insert_with(String::new);
                }
            }
            Event::Empty(e) => {
                path.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                if ends_with(&path, ATTACHED_DEVICES_PATH) {
                    attached_devices.get_or_insert_with(String::new);
                }
                path.pop();
            }
            Event::End(_) => {
                path.pop();
            }
            Event::Text(t) => {
                let text = t.unescape()?;
                collect_text(&path, &text, &mut response_code, &mut attached_devices);
            }
            Event::CData(c) => {
                let text = String::from_utf8_lossy(&c);
                collect_text(&path, &text, &mut response_code, &mut attached_devices);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let code_text = response_code.ok_or(EnvelopeError::MissingElement("ResponseCode"))?;
    let response_code = code_text
        .trim()
        .parse::<i64>()
        .map_err(|_| EnvelopeError::InvalidResponseCode { value: code_text })?;

    Ok(Envelope {
        response_code,
        attached_devices,
    })
}

fn collect_text(
    path: &[String],
    text: &str,
    response_code: &mut Option<String>,
    attached_devices: &mut Option<String>,
) {
    if ends_with(path, RESPONSE_CODE_PATH) {
        response_code.get_or_insert_with(String::new).push_str(text);
    } else if ends_with(path, ATTACHED_DEVICES_PATH) {
        attached_devices.get_or_insert_with(String::new).push_str(text);
    }
}

fn ends_with(path: &[String], tail: &[&str]) -> bool {
    path.len() >= tail.len()
        && path[path.len() - tail.len()..]
            .iter()
            .zip(tail)
            .all(|(open, want)| open == want)
}

#[cfg(test)]
#[path = "soap_tests.rs"]
mod tests;
