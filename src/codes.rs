//! Canonical server error codes and the derived sets the classification
//! engine performs membership tests against.
//!
//! The tables are fixed data: they are never extended at runtime and are safe
//! for unsynchronized concurrent reads.

pub const HOST_UNREACHABLE: i64 = 6;
pub const HOST_NOT_FOUND: i64 = 7;
pub const CURSOR_NOT_FOUND: i64 = 43;
pub const STALE_SHARD_VERSION: i64 = 63;
pub const WRITE_CONCERN_FAILED: i64 = 64;
pub const NETWORK_TIMEOUT: i64 = 89;
pub const SHUTDOWN_IN_PROGRESS: i64 = 91;
pub const FAILED_TO_SATISFY_READ_PREFERENCE: i64 = 133;
pub const STALE_EPOCH: i64 = 150;
pub const PRIMARY_STEPPED_DOWN: i64 = 189;
pub const RETRY_CHANGE_STREAM: i64 = 234;
pub const EXCEEDED_TIME_LIMIT: i64 = 262;
pub const SOCKET_EXCEPTION: i64 = 9001;
pub const LEGACY_NOT_PRIMARY: i64 = 10058;
pub const NOT_MASTER: i64 = 10107;
pub const INTERRUPTED_AT_SHUTDOWN: i64 = 11600;
pub const INTERRUPTED_DUE_TO_REPL_STATE_CHANGE: i64 = 11602;
pub const STALE_CONFIG: i64 = 13388;
pub const NOT_MASTER_NO_SLAVE_OK: i64 = 13435;
pub const NOT_MASTER_OR_SECONDARY: i64 = 13436;

/// Codes that make a general (read or command) operation eligible for retry.
pub const RETRYABLE_CODES: &[i64] = &[
    HOST_UNREACHABLE,
    HOST_NOT_FOUND,
    NETWORK_TIMEOUT,
    SHUTDOWN_IN_PROGRESS,
    PRIMARY_STEPPED_DOWN,
    SOCKET_EXCEPTION,
    NOT_MASTER,
    INTERRUPTED_AT_SHUTDOWN,
    INTERRUPTED_DUE_TO_REPL_STATE_CHANGE,
    NOT_MASTER_NO_SLAVE_OK,
    NOT_MASTER_OR_SECONDARY,
];

/// Codes that make a write eligible for retry.
///
/// This is the general retryable set plus `ExceededTimeLimit` (262). The write
/// set intentionally differs from [`RETRYABLE_CODES`]; the server applies
/// different retry-eligibility semantics to writes.
pub const RETRYABLE_WRITE_CODES: &[i64] = &[
    HOST_UNREACHABLE,
    HOST_NOT_FOUND,
    NETWORK_TIMEOUT,
    SHUTDOWN_IN_PROGRESS,
    PRIMARY_STEPPED_DOWN,
    EXCEEDED_TIME_LIMIT,
    SOCKET_EXCEPTION,
    NOT_MASTER,
    INTERRUPTED_AT_SHUTDOWN,
    INTERRUPTED_DUE_TO_REPL_STATE_CHANGE,
    NOT_MASTER_NO_SLAVE_OK,
    NOT_MASTER_OR_SECONDARY,
];

/// Codes a node reports while it is actively shutting down.
pub const NODE_IS_SHUTTING_DOWN_CODES: &[i64] = &[SHUTDOWN_IN_PROGRESS, INTERRUPTED_AT_SHUTDOWN];

/// Codes a node reports while it is recovering (stepping down, replaying the
/// replication log, or otherwise not yet able to serve).
pub const RECOVERING_CODES: &[i64] = &[
    SHUTDOWN_IN_PROGRESS,
    PRIMARY_STEPPED_DOWN,
    INTERRUPTED_AT_SHUTDOWN,
    INTERRUPTED_DUE_TO_REPL_STATE_CHANGE,
    NOT_MASTER_OR_SECONDARY,
];

/// Codes a node reports when it is no longer the primary.
pub const NOT_MASTER_CODES: &[i64] = &[LEGACY_NOT_PRIMARY, NOT_MASTER, NOT_MASTER_NO_SLAVE_OK];

/// Codes on a cursor-continuation reply that permit transparently resuming a
/// change stream (pre wire version 9; later servers label resumable errors).
pub const GET_MORE_RESUMABLE_CODES: &[i64] = &[
    HOST_UNREACHABLE,
    HOST_NOT_FOUND,
    CURSOR_NOT_FOUND,
    STALE_SHARD_VERSION,
    NETWORK_TIMEOUT,
    SHUTDOWN_IN_PROGRESS,
    FAILED_TO_SATISFY_READ_PREFERENCE,
    STALE_EPOCH,
    PRIMARY_STEPPED_DOWN,
    RETRY_CHANGE_STREAM,
    EXCEEDED_TIME_LIMIT,
    SOCKET_EXCEPTION,
    NOT_MASTER,
    INTERRUPTED_AT_SHUTDOWN,
    INTERRUPTED_DUE_TO_REPL_STATE_CHANGE,
    STALE_CONFIG,
    NOT_MASTER_NO_SLAVE_OK,
    NOT_MASTER_OR_SECONDARY,
];
