//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Evaluation fields
pub const FIELD_DECLARED_LEN: &str = "declared_len";
pub const FIELD_CANDIDATE_LEN: &str = "candidate_len";
pub const FIELD_CHANGED_LEN: &str = "changed_len";
pub const FIELD_VERDICT: &str = "verdict";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_EVALUATE: &str = "partial_change.evaluate";
pub const OP_EVALUATE_NEGATED: &str = "partial_change.evaluate_negated";
