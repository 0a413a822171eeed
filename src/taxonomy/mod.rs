pub mod fault;
pub mod reply;

use serde::Serialize;

/// Discriminant for every constructible fault.
///
/// Only leaf kinds appear here. The driver-runtime and API groupings are
/// abstract and exist solely as [`FaultCategory`] values, so a fault can never
/// be built with an abstract kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::EnumIter)]
pub enum FaultKind {
    Generic,
    Server,
    DriverGeneric,
    BatchReExecution,
    Uri,
    Compression,
    Decompression,
    NotConnected,
    Transaction,
    ExpiredSession,
    Kerberos,
    Cursor,
    TailableCursor,
    CursorInUse,
    CursorExhausted,
    Stream,
    ChangeStream,
    GridFsStream,
    GridFsChunk,
    ResourceClosed,
    ServerClosed,
    StreamClosed,
    TopologyClosed,
    Network,
    NetworkTimeout,
    Parse,
    InvalidArgument,
    Compatibility,
    MissingCredentials,
    MissingDependency,
    System,
    ServerSelection,
    WriteConcern,
}

/// Grouping of fault kinds for display and pattern-based handling.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum FaultCategory {
    Generic,
    Server,
    DriverGeneric,
    DriverRuntime,
    Api,
    System,
    WriteConcern,
}

impl FaultKind {
    /// The immutable display name surfaced to callers alongside the message.
    pub fn name(self) -> &'static str {
        match self {
            Self::Generic => "GenericError",
            Self::Server => "ServerError",
            Self::DriverGeneric => "DriverError",
            Self::BatchReExecution => "BatchReExecutionError",
            Self::Uri => "UriError",
            Self::Compression => "CompressionError",
            Self::Decompression => "DecompressionError",
            Self::NotConnected => "NotConnectedError",
            Self::Transaction => "TransactionError",
            Self::ExpiredSession => "ExpiredSessionError",
            Self::Kerberos => "KerberosError",
            Self::Cursor => "CursorError",
            Self::TailableCursor => "TailableCursorError",
            Self::CursorInUse => "CursorInUseError",
            Self::CursorExhausted => "CursorExhaustedError",
            Self::Stream => "StreamError",
            Self::ChangeStream => "ChangeStreamError",
            Self::GridFsStream => "GridFsStreamError",
            Self::GridFsChunk => "GridFsChunkError",
            Self::ResourceClosed => "ResourceClosedError",
            Self::ServerClosed => "ServerClosedError",
            Self::StreamClosed => "StreamClosedError",
            Self::TopologyClosed => "TopologyClosedError",
            Self::Network => "NetworkError",
            Self::NetworkTimeout => "NetworkTimeoutError",
            Self::Parse => "ParseError",
            Self::InvalidArgument => "InvalidArgumentError",
            Self::Compatibility => "CompatibilityError",
            Self::MissingCredentials => "MissingCredentialsError",
            Self::MissingDependency => "MissingDependencyError",
            Self::System => "SystemError",
            Self::ServerSelection => "ServerSelectionError",
            Self::WriteConcern => "WriteConcernError",
        }
    }

    pub fn category(self) -> FaultCategory {
        match self {
            Self::Generic => FaultCategory::Generic,
            Self::Server => FaultCategory::Server,
            Self::DriverGeneric => FaultCategory::DriverGeneric,
            Self::BatchReExecution
            | Self::Uri
            | Self::Compression
            | Self::Decompression
            | Self::NotConnected
            | Self::Transaction
            | Self::ExpiredSession
            | Self::Kerberos
            | Self::Cursor
            | Self::TailableCursor
            | Self::CursorInUse
            | Self::CursorExhausted
            | Self::Stream
            | Self::ChangeStream
            | Self::GridFsStream
            | Self::GridFsChunk
            | Self::ResourceClosed
            | Self::ServerClosed
            | Self::StreamClosed
            | Self::TopologyClosed
            | Self::Network
            | Self::NetworkTimeout
            | Self::Parse => FaultCategory::DriverRuntime,
            Self::InvalidArgument
            | Self::Compatibility
            | Self::MissingCredentials
            | Self::MissingDependency => FaultCategory::Api,
            Self::System | Self::ServerSelection => FaultCategory::System,
            Self::WriteConcern => FaultCategory::WriteConcern,
        }
    }

    /// Network faults include the timeout leaf; several predicates treat the
    /// two identically.
    pub fn is_network(self) -> bool {
        matches!(self, Self::Network | Self::NetworkTimeout)
    }
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{FaultCategory, FaultKind};
    use strum::IntoEnumIterator;

    #[test]
    fn every_kind_has_a_distinct_display_name() {
        let names: Vec<&str> = FaultKind::iter().map(FaultKind::name).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(name.ends_with("Error"), "{name} missing Error suffix");
            assert!(
                !names[i + 1..].contains(name),
                "duplicate display name {name}"
            );
        }
    }

    #[test]
    fn abstract_groupings_are_reachable_only_as_categories() {
        assert!(
            FaultKind::iter()
                .any(|k| k.category() == FaultCategory::DriverRuntime)
        );
        assert!(FaultKind::iter().any(|k| k.category() == FaultCategory::Api));
        assert_eq!(FaultKind::Kerberos.category(), FaultCategory::DriverRuntime);
        assert_eq!(FaultKind::MissingCredentials.category(), FaultCategory::Api);
    }

    #[test]
    fn network_check_covers_the_timeout_leaf() {
        assert!(FaultKind::Network.is_network());
        assert!(FaultKind::NetworkTimeout.is_network());
        assert!(!FaultKind::Server.is_network());
        assert!(!FaultKind::Parse.is_network());
    }

    #[test]
    fn category_display_strings_are_kebab_case() {
        assert_eq!(FaultCategory::DriverRuntime.to_string(), "driver-runtime");
        assert_eq!(FaultCategory::WriteConcern.as_ref(), "write-concern");
        assert_eq!(
            "driver-generic".parse::<FaultCategory>().ok(),
            Some(FaultCategory::DriverGeneric)
        );
    }
}
