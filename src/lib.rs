#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod auth;
pub mod classify;
pub mod codes;
pub mod error;
pub mod taxonomy;

pub use auth::{AuthContext, Authenticator};
pub use classify::{
    RESUMABLE_CHANGE_STREAM_LABEL, is_network_timeout_error, is_node_shutting_down_error,
    is_not_master_error, is_recovering_error, is_resumable_error, is_retryable_error,
    is_retryable_write_error, is_sdam_unrecoverable_error,
};
pub use error::Error;
pub use taxonomy::fault::{Fault, FaultCode, LabelSet};
pub use taxonomy::{FaultCategory, FaultKind};
