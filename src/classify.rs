//! The classification engine: pure predicates over [`Fault`]s.
//!
//! Verdicts are advisory; nothing here mutates a fault or performs I/O.
//! Numeric server codes always beat free-text message heuristics, and a
//! recovering classification beats a not-master classification. Ambiguous
//! input resolves to the safe side: not retryable, not resumable,
//! unrecoverable.

use crate::codes;
use crate::taxonomy::FaultKind;
use crate::taxonomy::fault::Fault;

/// Servers at or above this wire version attach the
/// `ResumableChangeStreamError` label instead of relying on code tables.
const WIRE_VERSION_LABELED_RESUMABILITY: i32 = 9;

/// Label attached by newer servers to faults that permit resuming a change
/// stream.
pub const RESUMABLE_CHANGE_STREAM_LABEL: &str = "ResumableChangeStreamError";

/// Whether a failed write may be reissued.
///
/// Write-concern faults consult the code buried in the sanitized result
/// first, then the fault's own code, then `0`. All other faults consult the
/// fault's numeric code only. The write code set differs from the general
/// retryable set on purpose; see [`codes::RETRYABLE_WRITE_CODES`].
pub fn is_retryable_write_error(fault: &Fault) -> bool {
    if fault.kind() == FaultKind::WriteConcern {
        let code = fault
            .sanitized_result()
            .and_then(|result| result.get("code"))
            .and_then(serde_json::Value::as_i64)
            .or_else(|| fault.numeric_code())
            .unwrap_or(0);
        if codes::RETRYABLE_WRITE_CODES.contains(&code) {
            return true;
        }
    }
    fault
        .numeric_code()
        .is_some_and(|code| codes::RETRYABLE_WRITE_CODES.contains(&code))
}

/// Whether a failed general operation may be reissued.
pub fn is_retryable_error(fault: &Fault) -> bool {
    fault
        .numeric_code()
        .is_some_and(|code| codes::RETRYABLE_CODES.contains(&code))
        || fault.kind().is_network()
        || fault.message().contains("not master")
        || fault.message().contains("node is recovering")
}

/// Whether the originating node reported that it is shutting down.
pub fn is_node_shutting_down_error(fault: &Fault) -> bool {
    fault
        .numeric_code()
        .is_some_and(|code| codes::NODE_IS_SHUTTING_DOWN_CODES.contains(&code))
}

/// Whether the node is recovering and cannot serve yet.
///
/// A numeric code settles the question outright; the message is consulted
/// only when no code is present.
pub fn is_recovering_error(fault: &Fault) -> bool {
    if let Some(code) = fault.numeric_code() {
        return codes::RECOVERING_CODES.contains(&code);
    }
    fault.message().contains("not master or secondary")
        || fault.message().contains("node is recovering")
}

/// Whether the node reported that it is no longer the primary.
///
/// Mutually exclusive with [`is_recovering_error`]: when no code is present
/// and the message already classifies as recovering, this returns `false`.
pub fn is_not_master_error(fault: &Fault) -> bool {
    if let Some(code) = fault.numeric_code() {
        return codes::NOT_MASTER_CODES.contains(&code);
    }
    if is_recovering_error(fault) {
        return false;
    }
    fault.message().contains("not master")
}

/// Whether the topology manager must invalidate the node's cached
/// connections.
///
/// An absent fault is unrecoverable by definition: when the caller cannot
/// even produce a fault to classify, the pool is reset rather than trusted.
pub fn is_sdam_unrecoverable_error(fault: Option<&Fault>) -> bool {
    let Some(fault) = fault else {
        return true;
    };
    fault.kind() == FaultKind::Parse || is_recovering_error(fault) || is_not_master_error(fault)
}

/// Whether a network fault was specifically a timeout.
pub fn is_network_timeout_error(fault: &Fault) -> bool {
    fault.kind().is_network() && fault.message().contains("timed out")
}

/// Whether a fault on a cursor-continuation command permits transparently
/// reopening the cursor.
///
/// Network faults are always resumable. From wire version 9 on, resumability
/// is server-driven: a `CursorNotFound` code or the
/// `ResumableChangeStreamError` label. Older servers fall back to the
/// get-more code table.
///
/// Callers must only invoke this for faults raised by a continuation
/// command, never the command that established the cursor.
pub fn is_resumable_error(fault: &Fault, wire_version: Option<i32>) -> bool {
    if fault.kind().is_network() {
        return true;
    }
    if wire_version.is_some_and(|version| version >= WIRE_VERSION_LABELED_RESUMABILITY) {
        return fault.numeric_code() == Some(codes::CURSOR_NOT_FOUND)
            || fault.has_label(RESUMABLE_CHANGE_STREAM_LABEL);
    }
    fault
        .numeric_code()
        .is_some_and(|code| codes::GET_MORE_RESUMABLE_CODES.contains(&code))
}
