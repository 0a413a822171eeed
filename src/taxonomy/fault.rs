use std::collections::HashSet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::taxonomy::{FaultCategory, FaultKind};

/// A fault code as reported by its origin: numeric for server-origin faults,
/// symbolic for the subset of driver-origin faults that carry one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FaultCode {
    Number(i64),
    Name(String),
}

impl FaultCode {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Name(_) => None,
        }
    }
}

/// Insertion-ordered string set backing a fault's labels.
///
/// Membership is O(1); iteration yields labels in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl LabelSet {
    /// Adds a label. Idempotent: re-adding an existing label is a no-op and
    /// returns `false`.
    pub fn insert(&mut self, label: &str) -> bool {
        if self.index.contains(label) {
            return false;
        }
        self.index.insert(label.to_string());
        self.order.push(label.to_string());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// A single fault raised by the driver or reported by a server.
///
/// The kind, message, code, cause, and reason are fixed at construction.
/// Labels, the topology version, and (for write-concern faults) the sanitized
/// result may be updated afterwards by the owner, following a
/// single-writer-then-freeze discipline: once the fault is handed to a
/// retry or pool-reset decision point it must be treated as read-only.
#[derive(Debug, Clone)]
pub struct Fault {
    kind: FaultKind,
    message: String,
    pub(crate) code: Option<FaultCode>,
    pub(crate) code_name: Option<String>,
    pub(crate) labels: LabelSet,
    pub(crate) topology_version: Option<Value>,
    cause: Option<Box<Fault>>,
    reason: Option<Value>,
    pub(crate) sanitized_result: Option<Map<String, Value>>,
    pub(crate) extra: Map<String, Value>,
}

impl Fault {
    /// A driver-origin fault with no code.
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            code_name: None,
            labels: LabelSet::default(),
            topology_version: None,
            cause: None,
            reason: None,
            sanitized_result: None,
            extra: Map::new(),
        }
    }

    /// A driver-origin fault carrying an explicit code.
    pub fn with_code(kind: FaultKind, message: impl Into<String>, code: FaultCode) -> Self {
        let mut fault = Self::new(kind, message);
        fault.code = Some(code);
        fault
    }

    /// Wraps an underlying fault. The cause's message is copied onto the new
    /// fault; its labels and code are not.
    pub fn from_cause(kind: FaultKind, cause: Fault) -> Self {
        let mut fault = Self::new(kind, cause.message.clone());
        fault.cause = Some(Box::new(cause));
        fault
    }

    /// Attaches a topology-description snapshot. Consumed at construction
    /// time only; the reason never changes afterwards.
    pub fn with_reason(mut self, reason: Value) -> Self {
        self.reason = Some(reason);
        self
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// The kind's immutable display name, e.g. `"NetworkTimeoutError"`.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn category(&self) -> FaultCategory {
        self.kind.category()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<&FaultCode> {
        self.code.as_ref()
    }

    /// The numeric code, if this fault carries one. Symbolic driver codes
    /// yield `None`; classification only ever consults numeric codes.
    pub fn numeric_code(&self) -> Option<i64> {
        self.code.as_ref().and_then(FaultCode::as_number)
    }

    pub fn code_name(&self) -> Option<&str> {
        self.code_name.as_deref()
    }

    /// Adds a label. Idempotent.
    pub fn add_label(&mut self, label: &str) {
        self.labels.insert(label);
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Current labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter()
    }

    pub fn topology_version(&self) -> Option<&Value> {
        self.topology_version.as_ref()
    }

    /// Replaces the topology version when a fresher one arrives. The token is
    /// opaque to this crate.
    pub fn set_topology_version(&mut self, version: Value) {
        self.topology_version = Some(version);
    }

    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_deref()
    }

    pub fn reason(&self) -> Option<&Value> {
        self.reason.as_ref()
    }

    /// The sanitized write result. Present only on write-concern faults.
    pub fn sanitized_result(&self) -> Option<&Map<String, Value>> {
        self.sanitized_result.as_ref()
    }

    /// Looks up a reply field preserved verbatim at construction. Unknown
    /// server fields stay reachable here for forward compatibility.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.message)
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
