//! Actions of API version 2017-07-21 (lower-camel wire names)

pub const VERSION: &str = "2017-07-21";

rpc_action! {
    /// List instance management commands
    ///
    /// Older SDKs send this action as `DescribleInstanceManageCommand`. A
    /// service that only knows that spelling answers `DescribeInstanceManageCommand`
    /// with an invalid-action error; use `add_query_param` plus a custom
    /// transport if such a deployment has to be reached.
    DescribeInstanceManageCommand => DescribeInstanceManageCommandRequest {
        version: VERSION,
        action: "DescribeInstanceManageCommand",
        params: [
            "pageSize" (Integer) => get_page_size / set_page_size,
            "pageNumber" (Integer) => get_page_number / set_page_number,
            "description" (String) => get_description / set_description,
            "name" (String) => get_name / set_name,
            "InstanceManageCommandId" (String) => get_instance_manage_command_id / set_instance_manage_command_id,
            "type" (String) => get_type / set_type,
        ],
    }
}

rpc_action! {
    /// Update an existing command
    ModifyCommand => ModifyCommandRequest {
        version: VERSION,
        action: "ModifyCommand",
        params: [
            "commandId" (String) => get_command_id / set_command_id,
            "workingDir" (String) => get_working_dir / set_working_dir,
            "description" (String) => get_description / set_description,
            "commandContent" (String) => get_command_content / set_command_content,
            "name" (String) => get_name / set_name,
            "timeOut" (Integer) => get_time_out / set_time_out,
        ],
    }
}

rpc_action! {
    /// Update an instance management command
    ///
    /// The remote service expects the content under `commandContend`.
    ModifyInstanceManageCommand => ModifyInstanceManageCommandRequest {
        version: VERSION,
        action: "ModifyInstanceManageCommand",
        params: [
            "commandContend" (String) => get_command_contend / set_command_contend,
            "workingDir" (String) => get_working_dir / set_working_dir,
            "description" (String) => get_description / set_description,
            "name" (String) => get_name / set_name,
            "InstanceManageCommandId" (String) => get_instance_manage_command_id / set_instance_manage_command_id,
        ],
    }
}
