//! Action catalogue and untyped requests
//!
//! [`ACTIONS`] lists every action this crate knows about. [`DynamicRequest`]
//! is the untyped counterpart of `Request<S>`, used when the action is only
//! known at runtime (the CLI). Unlike the typed setters, it rejects names the
//! action does not declare.

use crate::error::{AxtError, Result};
use crate::request::{v20170721, v20170731, ActionSpec, ParamSpec, QueryParams};
use crate::transport::RpcCall;

/// Metadata of one action, detached from its marker type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub action: &'static str,
    pub params: &'static [ParamSpec],
}

impl ActionInfo {
    pub const fn of<S: ActionSpec>() -> Self {
        Self {
            service: S::SERVICE,
            version: S::VERSION,
            action: S::ACTION,
            params: S::PARAMS,
        }
    }

    pub fn param(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }
}

pub const ACTIONS: &[ActionInfo] = &[
    ActionInfo::of::<v20170721::DescribeInstanceManageCommand>(),
    ActionInfo::of::<v20170721::ModifyCommand>(),
    ActionInfo::of::<v20170721::ModifyInstanceManageCommand>(),
    ActionInfo::of::<v20170731::CreateCommand>(),
    ActionInfo::of::<v20170731::DescribeTask>(),
];

/// Distinct API versions, in table order
pub fn versions() -> Vec<&'static str> {
    let mut versions: Vec<&'static str> = Vec::new();
    for info in ACTIONS {
        if !versions.contains(&info.version) {
            versions.push(info.version);
        }
    }
    versions
}

/// Look up an action by exact name, optionally pinned to an API version
pub fn find(action: &str, version: Option<&str>) -> Result<&'static ActionInfo> {
    let mut candidates = ACTIONS.iter().filter(|info| info.action == action).peekable();

    if candidates.peek().is_none() {
        return Err(AxtError::UnknownAction {
            action: action.to_string(),
        });
    }

    match version {
        None => candidates.next().ok_or_else(|| AxtError::UnknownAction {
            action: action.to_string(),
        }),
        Some(version) => candidates
            .find(|info| info.version == version)
            .ok_or_else(|| AxtError::UnknownVersion {
                action: action.to_string(),
                version: version.to_string(),
            }),
    }
}

// ============================================================================
// DYNAMIC REQUEST
// ============================================================================

/// A request whose action is chosen at runtime
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRequest {
    info: &'static ActionInfo,
    params: QueryParams,
}

impl DynamicRequest {
    pub fn new(info: &'static ActionInfo) -> Self {
        Self {
            info,
            params: QueryParams::new(),
        }
    }

    /// Shorthand for [`find`] followed by [`DynamicRequest::new`]
    pub fn for_action(action: &str, version: Option<&str>) -> Result<Self> {
        find(action, version).map(Self::new)
    }

    pub fn info(&self) -> &'static ActionInfo {
        self.info
    }

    /// Set a declared parameter by its wire name
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self> {
        if self.info.param(name).is_none() {
            return Err(AxtError::UnknownParameter {
                action: self.info.action.to_string(),
                param: name.to_string(),
            });
        }
        self.params.insert(name.to_string(), value.into());
        Ok(self)
    }

    /// Parse `KEY=VALUE` and set it. The value may itself contain `=`.
    pub fn set_pair(&mut self, pair: &str) -> Result<&mut Self> {
        let (name, value) = pair.split_once('=').ok_or_else(|| AxtError::InvalidParam {
            input: pair.to_string(),
        })?;
        if name.is_empty() {
            return Err(AxtError::InvalidParam {
                input: pair.to_string(),
            });
        }
        self.set(name, value)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn get_query_params(&self) -> &QueryParams {
        &self.params
    }

    pub fn to_call(&self) -> RpcCall {
        RpcCall::new(
            self.info.service,
            self.info.version,
            self.info.action,
            self.params.clone(),
        )
    }
}
