//! # Request Descriptors
//!
//! One generic [`Request<S>`] carries the query parameters of a single call.
//! The action it targets is fixed by the type parameter `S`, a zero-sized
//! marker implementing [`ActionSpec`]. Typed accessors for each action are
//! generated by the `rpc_action!` macro in the versioned submodules.
//!
//! ```rust
//! use axt_sdk::request::v20170731::DescribeTaskRequest;
//!
//! let mut request = DescribeTaskRequest::new();
//! request.set_page_size("10").set_instance_id("i-abc123");
//!
//! assert_eq!(request.action(), "DescribeTask");
//! assert_eq!(request.get_page_size(), Some("10"));
//! assert_eq!(request.get_task_id(), None);
//! ```
//!
//! Wire names are kept exactly as the remote service spells them. The two API
//! versions use different casing and that difference is part of the contract.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;

use crate::transport::RpcCall;

/// Service code shared by every action
pub const SERVICE_CODE: &str = "axt";

/// Query parameters in insertion order. Re-inserting a key keeps its slot.
pub type QueryParams = IndexMap<String, String>;

// ============================================================================
// METADATA
// ============================================================================

/// How a parameter's value is meant to be read by the remote service.
///
/// Values are always stored as the exact string the caller passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::String => write!(f, "string"),
            ParamKind::Integer => write!(f, "integer"),
        }
    }
}

/// A declared parameter: wire name plus kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn new(name: &'static str, kind: ParamKind) -> Self {
        Self { name, kind }
    }
}

/// Identity and parameter surface of one remote action
pub trait ActionSpec {
    const SERVICE: &'static str = SERVICE_CODE;
    const VERSION: &'static str;
    const ACTION: &'static str;
    const PARAMS: &'static [ParamSpec];
}

// ============================================================================
// REQUEST
// ============================================================================

/// A single call to the action described by `S`
pub struct Request<S: ActionSpec> {
    params: QueryParams,
    _action: PhantomData<S>,
}

impl<S: ActionSpec> Request<S> {
    /// Create an empty request. Only the identity is set.
    pub fn new() -> Self {
        Self {
            params: QueryParams::new(),
            _action: PhantomData,
        }
    }

    pub fn service(&self) -> &'static str {
        S::SERVICE
    }

    pub fn version(&self) -> &'static str {
        S::VERSION
    }

    pub fn action(&self) -> &'static str {
        S::ACTION
    }

    /// Parameters declared for this action, in declaration order
    pub fn declared_params(&self) -> &'static [ParamSpec] {
        S::PARAMS
    }

    /// Store a raw query parameter, replacing any previous value.
    ///
    /// The key is not checked against the declared parameters.
    pub fn add_query_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Value stored under `key`, if any
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn get_query_params(&self) -> &QueryParams {
        &self.params
    }

    /// Snapshot this request for a transport
    pub fn to_call(&self) -> RpcCall {
        RpcCall::new(S::SERVICE, S::VERSION, S::ACTION, self.params.clone())
    }
}

impl<S: ActionSpec> Default for Request<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActionSpec> Clone for Request<S> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            _action: PhantomData,
        }
    }
}

impl<S: ActionSpec> PartialEq for Request<S> {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl<S: ActionSpec> Eq for Request<S> {}

impl<S: ActionSpec> fmt::Debug for Request<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("service", &S::SERVICE)
            .field("version", &S::VERSION)
            .field("action", &S::ACTION)
            .field("params", &self.params)
            .finish()
    }
}

// ============================================================================
// ACCESSOR GENERATION
// ============================================================================

/// Declare an action: marker type, `ActionSpec` impl, request alias and one
/// getter/setter pair per wire parameter.
macro_rules! rpc_action {
    (
        $(#[$meta:meta])*
        $marker:ident => $alias:ident {
            version: $version:expr,
            action: $action:literal,
            params: [
                $( $wire:literal ($kind:ident) => $getter:ident / $setter:ident ),* $(,)?
            ] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $marker;

        impl crate::request::ActionSpec for $marker {
            const VERSION: &'static str = $version;
            const ACTION: &'static str = $action;
            const PARAMS: &'static [crate::request::ParamSpec] = &[
                $( crate::request::ParamSpec::new($wire, crate::request::ParamKind::$kind), )*
            ];
        }

        #[doc = concat!("Request for the `", $action, "` action")]
        pub type $alias = crate::request::Request<$marker>;

        impl crate::request::Request<$marker> {
            $(
                #[doc = concat!("Value of `", $wire, "`, or `None` if never set")]
                pub fn $getter(&self) -> Option<&str> {
                    self.query_param($wire)
                }

                #[doc = concat!("Set `", $wire, "`, replacing any previous value")]
                pub fn $setter(&mut self, value: impl Into<String>) -> &mut Self {
                    self.add_query_param($wire, value);
                    self
                }
            )*
        }
    };
}

pub mod v20170721;
pub mod v20170731;
