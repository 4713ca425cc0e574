//! Actions of API version 2017-07-31 (upper-camel wire names)

pub const VERSION: &str = "2017-07-31";

rpc_action! {
    /// Create a command that can later be invoked on instances
    CreateCommand => CreateCommandRequest {
        version: VERSION,
        action: "CreateCommand",
        params: [
            "WorkingDir" (String) => get_working_dir / set_working_dir,
            "Description" (String) => get_description / set_description,
            "CommandContent" (String) => get_command_content / set_command_content,
            "Name" (String) => get_name / set_name,
            "Type" (String) => get_type / set_type,
            "TimeOut" (Integer) => get_time_out / set_time_out,
        ],
    }
}

rpc_action! {
    /// Page through command invocation tasks
    DescribeTask => DescribeTaskRequest {
        version: VERSION,
        action: "DescribeTask",
        params: [
            "PageSize" (Integer) => get_page_size / set_page_size,
            "Timed" (String) => get_timed / set_timed,
            "CommandId" (String) => get_command_id / set_command_id,
            "PageNumber" (Integer) => get_page_number / set_page_number,
            "TaskId" (String) => get_task_id / set_task_id,
            "ItemStatus" (String) => get_item_status / set_item_status,
            "CommandType" (String) => get_command_type / set_command_type,
            "TaskStatus" (String) => get_task_status / set_task_status,
            "CommandName" (String) => get_command_name / set_command_name,
            "InstanceId" (String) => get_instance_id / set_instance_id,
        ],
    }
}
