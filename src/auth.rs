//! The authentication negotiation contract.
//!
//! Concrete mechanisms live outside this crate; they plug in through
//! [`Authenticator`] and report failures as taxonomy faults built with the
//! construction adapters.

use serde_json::{Map, Value};

use crate::error::Error;
use crate::taxonomy::FaultKind;
use crate::taxonomy::fault::Fault;

/// Connection-scoped state handed to an authenticator.
pub struct AuthContext {
    /// Credential document supplied by the caller, if any. Opaque to this
    /// crate; mechanisms interpret it.
    pub credential: Option<Map<String, Value>>,
}

impl AuthContext {
    pub fn new(credential: Option<Map<String, Value>>) -> Self {
        Self { credential }
    }

    /// The credential, or a `MissingCredentials` fault when none was given.
    pub fn require_credential(&self) -> Result<&Map<String, Value>, Fault> {
        self.credential.as_ref().ok_or_else(|| {
            Fault::new(
                FaultKind::MissingCredentials,
                "authentication requested without credentials",
            )
        })
    }
}

/// A pluggable authentication mechanism.
pub trait Authenticator {
    /// Folds mechanism-specific fields into the connection handshake
    /// document and returns the amended document.
    fn prepare(
        &self,
        handshake: Map<String, Value>,
        ctx: &AuthContext,
    ) -> Result<Map<String, Value>, Error>;

    /// Runs the mechanism's conversation. Failures surface as taxonomy
    /// faults.
    fn authenticate(&self, ctx: &AuthContext) -> Result<(), Fault>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_yield_the_dedicated_fault_kind() {
        let ctx = AuthContext::new(None);
        let fault = match ctx.require_credential() {
            Ok(_) => unreachable!("credential should be absent"),
            Err(fault) => fault,
        };
        assert_eq!(fault.kind(), FaultKind::MissingCredentials);
        assert!(fault.code().is_none());
    }

    #[test]
    fn present_credentials_pass_through() {
        let mut credential = Map::new();
        credential.insert("username".to_string(), serde_json::Value::from("app"));
        let ctx = AuthContext::new(Some(credential));
        assert!(ctx.require_credential().is_ok());
    }
}
