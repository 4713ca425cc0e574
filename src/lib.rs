//! AXT SDK - typed request descriptors for the AXT command and task API

pub mod catalogue;
pub mod config;
pub mod error;
pub mod request;
pub mod transport;

pub use catalogue::{ActionInfo, DynamicRequest, ACTIONS};
pub use config::{ClientConfig, ResponseFormat};
pub use error::{AxtError, FixSuggestion, Result};
pub use request::v20170721::{
    DescribeInstanceManageCommandRequest, ModifyCommandRequest, ModifyInstanceManageCommandRequest,
};
pub use request::v20170731::{CreateCommandRequest, DescribeTaskRequest};
pub use request::{ActionSpec, ParamKind, ParamSpec, QueryParams, Request, SERVICE_CODE};
pub use transport::{Client, MockTransport, RpcCall, RpcResponse, Transport};
