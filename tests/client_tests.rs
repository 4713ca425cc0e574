//! # Client Tests
//!
//! Client + MockTransport: endpoint resolution, call snapshots, and mapping
//! of remote error bodies.

use axt_sdk::catalogue::DynamicRequest;
use axt_sdk::request::v20170721::ModifyInstanceManageCommandRequest;
use axt_sdk::request::v20170731::{CreateCommandRequest, DescribeTaskRequest};
use axt_sdk::{AxtError, Client, ClientConfig, MockTransport, ResponseFormat, RpcResponse};
use serde::Deserialize;
use serde_json::json;

fn mock_client(config: ClientConfig) -> Client<MockTransport> {
    Client::new(config, MockTransport::new()).unwrap()
}

#[tokio::test]
async fn test_call_records_snapshot_and_endpoint() {
    let client = mock_client(ClientConfig::new("cn-shanghai"));

    let mut request = DescribeTaskRequest::new();
    request
        .set_page_size("10")
        .set_page_number("1")
        .set_instance_id("i-abc123");

    let response = client.call(&request).await.unwrap();
    assert!(response.is_success());

    let recorded = client.transport().last_call().unwrap();
    assert_eq!(recorded.endpoint, "cn-shanghai.axt.aliyuncs.com");
    assert_eq!(recorded.call.action, "DescribeTask");
    assert_eq!(recorded.call.version, "2017-07-31");
    assert_eq!(recorded.call.params.len(), 3);
    assert_eq!(
        recorded.call.params.get("InstanceId").map(String::as_str),
        Some("i-abc123")
    );
}

#[tokio::test]
async fn test_request_is_not_consumed() {
    let client = mock_client(ClientConfig::default());

    let mut request = CreateCommandRequest::new();
    request.set_name("first");
    client.call(&request).await.unwrap();

    request.set_name("second");
    client.call(&request).await.unwrap();

    let calls = client.transport().get_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].call.params.get("Name").map(String::as_str), Some("first"));
    assert_eq!(calls[1].call.params.get("Name").map(String::as_str), Some("second"));
}

#[tokio::test]
async fn test_remote_error_is_mapped() {
    let client = mock_client(ClientConfig::default());
    client
        .transport()
        .queue_error(400, "InvalidParameter.CommandContend", "commandContend is required");

    let request = ModifyInstanceManageCommandRequest::new();
    let err = client.call(&request).await.unwrap_err();

    match err {
        AxtError::Remote {
            action,
            code,
            message,
            request_id,
        } => {
            assert_eq!(action, "ModifyInstanceManageCommand");
            assert_eq!(code, "InvalidParameter.CommandContend");
            assert_eq!(message, "commandContend is required");
            assert_eq!(request_id.as_deref(), Some("mock-request"));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_remote_error_without_code_uses_status() {
    let transport = MockTransport::with_responses(vec![RpcResponse::from_body(503, json!({}))]);
    let client = Client::new(ClientConfig::default(), transport).unwrap();

    let err = client.call(&DescribeTaskRequest::new()).await.unwrap_err();
    assert!(matches!(err, AxtError::Remote { ref code, .. } if code == "503"));
}

#[tokio::test]
async fn test_dynamic_call_through_vpc_endpoint() {
    let client = mock_client(ClientConfig::new("cn-beijing").vpc(true));

    let mut request = DynamicRequest::for_action("ModifyCommand", Some("2017-07-21")).unwrap();
    request.set("commandId", "c-1").unwrap();
    client.call_dynamic(&request).await.unwrap();

    let recorded = client.transport().last_call().unwrap();
    assert_eq!(recorded.endpoint, "cn-beijing.axt.aliyun.com");
    assert_eq!(
        recorded.call.query_string(),
        "Action=ModifyCommand&Version=2017-07-21&Format=JSON&commandId=c-1"
    );
}

#[tokio::test]
async fn test_parse_response_body() {
    #[derive(Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct CreateCommandResponse {
        request_id: String,
        command_id: String,
    }

    let client = mock_client(ClientConfig::default());
    client.transport().queue_response(RpcResponse::from_body(
        200,
        json!({"RequestId": "r-9", "CommandId": "c-9"}),
    ));

    let response = client.call(&CreateCommandRequest::new()).await.unwrap();
    let parsed: CreateCommandResponse = response.parse().unwrap();
    assert_eq!(parsed.request_id, "r-9");
    assert_eq!(parsed.command_id, "c-9");
}

#[test]
fn test_client_rejects_invalid_region() {
    let result = Client::new(ClientConfig::new("not a region"), MockTransport::new());
    assert!(matches!(result, Err(AxtError::InvalidRegion { .. })));
}

#[test]
fn test_client_accepts_multi_segment_regions() {
    for region in ["cn-shanghai-finance-1", "cn-hangzhou-finance", "cn-north-2-gov-1"] {
        let client = Client::new(ClientConfig::new(region), MockTransport::new());
        assert!(client.is_ok(), "{}", region);
    }
}

#[tokio::test]
async fn test_configured_format_reaches_the_wire() {
    let mut config = ClientConfig::default();
    config.format = ResponseFormat::Xml;
    let client = mock_client(config);

    let mut request = DescribeTaskRequest::new();
    request.set_task_id("t-1");
    client.call(&request).await.unwrap();

    let recorded = client.transport().last_call().unwrap();
    assert_eq!(recorded.call.format, Some(ResponseFormat::Xml));
    assert_eq!(
        recorded.call.query_string(),
        "Action=DescribeTask&Version=2017-07-31&Format=XML&TaskId=t-1"
    );
    // the request's own parameters are unaffected
    assert_eq!(request.get_query_params().len(), 1);
}
