//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the logging macros,
//! the error facility and test assertions.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Compilation inputs
pub const FIELD_NAME_PREFIX: &str = "name_prefix";
pub const FIELD_REMOVE_CONTAINER: &str = "remove_container";

// Collection sizes
pub const FIELD_DESCRIPTOR_COUNT: &str = "descriptor_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
