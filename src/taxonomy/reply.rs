//! Construction of [`Fault`]s from server reply documents.
//!
//! Replies arrive as decoded JSON-like documents. The adapter keeps every
//! field it does not understand so newer server fields survive a round trip
//! through an older driver.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::Error;
use crate::taxonomy::FaultKind;
use crate::taxonomy::fault::{Fault, FaultCode};

/// Fallback message when a failure reply carries no message field at all.
const MISSING_MESSAGE: &str = "n/a";

impl Fault {
    /// Builds a fault from a server reply document.
    ///
    /// The message is the first present of `message`, `errmsg`, `$err`, else
    /// `"n/a"`. `errorLabels` seeds the label set. Every other field except
    /// `errorLabels`/`errmsg`/`message` is copied onto the fault: `code`,
    /// `codeName` and `topologyVersion` land in their dedicated fields, the
    /// rest stays reachable through [`Fault::get`].
    pub fn from_reply(kind: FaultKind, reply: &Map<String, Value>) -> Self {
        let message = reply
            .get("message")
            .or_else(|| reply.get("errmsg"))
            .or_else(|| reply.get("$err"))
            .and_then(Value::as_str);
        if message.is_none() {
            trace!(kind = kind.name(), "failure reply without a message field");
        }
        let mut fault = Self::new(kind, message.unwrap_or(MISSING_MESSAGE));

        if let Some(labels) = reply.get("errorLabels").and_then(Value::as_array) {
            for label in labels.iter().filter_map(Value::as_str) {
                fault.add_label(label);
            }
        }

        for (field, value) in reply {
            match field.as_str() {
                "errorLabels" | "errmsg" | "message" => {}
                "code" if value.as_i64().is_some() => {
                    fault.code = value.as_i64().map(FaultCode::Number);
                }
                "codeName" if value.as_str().is_some() => {
                    fault.code_name = value.as_str().map(String::from);
                }
                "topologyVersion" => fault.topology_version = Some(value.clone()),
                _ => {
                    fault.extra.insert(field.clone(), value.clone());
                }
            }
        }

        fault
    }

    /// Fallible entry point for a decoded reply that has not been shape-checked
    /// yet. Errors when the value is not a document.
    pub fn from_reply_value(kind: FaultKind, value: &Value) -> Result<Self, Error> {
        let reply = value.as_object().ok_or_else(|| Error::MalformedReply {
            reason: format!("expected a reply document, got {value}"),
        })?;
        Ok(Self::from_reply(kind, reply))
    }

    /// Builds a write-concern fault: the write applied, but the requested
    /// acknowledgment level was not met.
    ///
    /// `errorLabels` from the raw reply are hoisted onto the fault before the
    /// generic reply path runs. The fault additionally carries a sanitized
    /// copy of the reply describing the successful write; the raw reply is
    /// never mutated and the fault itself retains the raw `code`.
    pub fn write_concern(reply: &Map<String, Value>) -> Self {
        let mut fault = Self::from_reply(FaultKind::WriteConcern, reply);
        fault.sanitized_result = Some(sanitize_write_result(reply));
        fault
    }
}

/// Shallow-copies a failed acknowledgment reply into the result of the write
/// that actually applied: `ok` forced to `1`, the failure fields removed.
pub(crate) fn sanitize_write_result(reply: &Map<String, Value>) -> Map<String, Value> {
    let mut result = reply.clone();
    result.insert("ok".to_string(), Value::from(1));
    result.remove("errmsg");
    result.remove("code");
    result.remove("codeName");
    debug!(
        code = reply.get("code").and_then(serde_json::Value::as_i64),
        "sanitized write-concern reply"
    );
    result
}
