//! Process exit codes for the `folio` binary.

use folio_contact::PipelineStatus;

pub const SUCCESS: i32 = 0;
pub const REJECTED: i32 = 1; // Input or precondition problem the caller can fix
pub const CONFIG_ERROR: i32 = 2; // Missing/invalid configuration or setup failure
pub const DELIVERY_FAILED: i32 = 3; // Delivery endpoint fault

/// Exit code for the final status of a contact submission.
pub fn for_status(status: PipelineStatus) -> i32 {
    match status {
        PipelineStatus::Success | PipelineStatus::Idle => SUCCESS,
        PipelineStatus::CaptchaRequired
        | PipelineStatus::InvalidEmail
        | PipelineStatus::InvalidInput => REJECTED,
        PipelineStatus::Error | PipelineStatus::Sending => DELIVERY_FAILED,
    }
}
