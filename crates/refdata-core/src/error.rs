use crate::value::Value;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use ulid::Ulid;

///
/// ResponseCode
///
/// Numeric outcome codes surfaced to callers. Descriptions live in the
/// code-to-message table below; codes are stable, messages are not.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(i32)]
pub enum ResponseCode {
    Created = 1,
    NotCreated = 2,
    Updated = 3,
    NotUpdated = 4,
    Found = 5,
    NotFound = 6,
    Deleted = 7,
    NotDeleted = 8,
    ValidationFailed = 9,
    BlockedByRelationship = 10,
    InactiveRelationship = 11,
}

impl ResponseCode {
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Created),
            2 => Some(Self::NotCreated),
            3 => Some(Self::Updated),
            4 => Some(Self::NotUpdated),
            5 => Some(Self::Found),
            6 => Some(Self::NotFound),
            7 => Some(Self::Deleted),
            8 => Some(Self::NotDeleted),
            9 => Some(Self::ValidationFailed),
            10 => Some(Self::BlockedByRelationship),
            11 => Some(Self::InactiveRelationship),
            _ => None,
        }
    }
}

///
/// Message table
///
/// Format strings support positional `{0}`-style parameters. Unrecognized
/// numeric codes resolve to a default template rather than failing.
///

pub mod messages {
    pub const CREATED: &str = "{0} created successfully";
    pub const NOT_CREATED: &str = "{0} could not be created";
    pub const UPDATED: &str = "{0} updated successfully";
    pub const NOT_UPDATED: &str = "{0} could not be updated";
    pub const FOUND: &str = "{0} found successfully";
    pub const NOT_FOUND: &str = "{0} not found";
    pub const DELETED: &str = "{0} deleted successfully";
    pub const NOT_DELETED: &str = "{0} could not be deleted";
    pub const VALIDATION_FAILED: &str = "validation failed for {0}: {1}";
    pub const BLOCKED_BY_RELATIONSHIP: &str =
        "cannot be removed or deactivated: still referenced by the {0} module";
    pub const INACTIVE_RELATIONSHIP: &str = "cannot be activated: related {0} is inactive";
    pub const UNKNOWN_CODE: &str = "unrecognized response code";

    pub const STATUS_NOT_FOUND: &str = "status not found";
    pub const HIERARCHY_VIOLATION: &str =
        "a father entry must not declare a father_code and a child entry must declare one";
    pub const CODE_IN_USE: &str = "code is already in use";
    pub const NAME_IN_USE: &str = "name is already in use within the same father";
    pub const PARENT_NOT_FOUND: &str = "declared father {0} was not found";
    pub const INTEGRATION_MIN_PROCESSES: &str =
        "an integration requires at least {0} processes";
    pub const OBSERVATIONS_MAX_LENGTH: &str = "observations must not exceed {0} characters";
}

/// Template for a response code.
#[must_use]
pub const fn response_template(code: ResponseCode) -> &'static str {
    match code {
        ResponseCode::Created => messages::CREATED,
        ResponseCode::NotCreated => messages::NOT_CREATED,
        ResponseCode::Updated => messages::UPDATED,
        ResponseCode::NotUpdated => messages::NOT_UPDATED,
        ResponseCode::Found => messages::FOUND,
        ResponseCode::NotFound => messages::NOT_FOUND,
        ResponseCode::Deleted => messages::DELETED,
        ResponseCode::NotDeleted => messages::NOT_DELETED,
        ResponseCode::ValidationFailed => messages::VALIDATION_FAILED,
        ResponseCode::BlockedByRelationship => messages::BLOCKED_BY_RELATIONSHIP,
        ResponseCode::InactiveRelationship => messages::INACTIVE_RELATIONSHIP,
    }
}

/// Resolve and format the message for a raw numeric code.
///
/// Unknown codes fall back to the default template with the code appended,
/// so a stale caller never turns a lookup miss into a panic.
#[must_use]
pub fn response_message(code: i32, params: &[&str]) -> String {
    match ResponseCode::from_code(code) {
        Some(code) => format_message(response_template(code), params),
        None => format!("{} ({code})", messages::UNKNOWN_CODE),
    }
}

/// Substitute positional `{0}`, `{1}`, ... parameters into a template.
///
/// A single left-to-right pass: substituted parameter text is emitted
/// verbatim and never rescanned for placeholders. Missing parameters
/// leave their placeholder untouched; surplus parameters are ignored.
#[must_use]
pub fn format_message(template: &str, params: &[&str]) -> String {
    let mut message = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        message.push_str(&rest[..open]);
        let tail = &rest[open..];

        let Some(close) = tail.find('}') else {
            message.push_str(tail);
            return message;
        };

        let index = tail[1..close].parse::<usize>().ok();
        match index.and_then(|index| params.get(index)) {
            Some(param) => message.push_str(param),
            None => message.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    message.push_str(rest);
    message
}

///
/// ArgumentKind
///
/// Validation-failure taxonomy of the engines.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgumentKind {
    StatusNotFound,
    HierarchyViolation,
    CodeOrNameInUse,
    ParentNotFound,
    BlockedByRelationship,
    InactiveRelationship,
    FieldValidation,
}

///
/// ArgumentError
///
/// Structured validation failure: a numeric response code, a formatted
/// human-readable description, and an optional payload such as the
/// offending id. Surfaced to callers immediately; never retried locally.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
#[error("{description}")]
pub struct ArgumentError {
    pub kind: ArgumentKind,
    pub code: ResponseCode,
    pub description: String,
    pub data: Option<Value>,
}

impl ArgumentError {
    fn new(kind: ArgumentKind, code: ResponseCode, description: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            description: description.into(),
            data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// The referenced status id does not resolve.
    #[must_use]
    pub fn status_not_found(status_id: Ulid) -> Self {
        Self::new(
            ArgumentKind::StatusNotFound,
            ResponseCode::NotFound,
            messages::STATUS_NOT_FOUND,
        )
        .with_data(status_id)
    }

    /// The father/child XOR invariant does not hold.
    #[must_use]
    pub fn hierarchy_violation() -> Self {
        Self::new(
            ArgumentKind::HierarchyViolation,
            ResponseCode::ValidationFailed,
            messages::HIERARCHY_VIOLATION,
        )
    }

    /// Another entity already holds this code.
    #[must_use]
    pub fn code_in_use(code: impl Into<Value>) -> Self {
        Self::new(
            ArgumentKind::CodeOrNameInUse,
            ResponseCode::ValidationFailed,
            messages::CODE_IN_USE,
        )
        .with_data(code)
    }

    /// Another entity already holds this name in the same father scope.
    #[must_use]
    pub fn name_in_use(name: &str) -> Self {
        Self::new(
            ArgumentKind::CodeOrNameInUse,
            ResponseCode::ValidationFailed,
            messages::NAME_IN_USE,
        )
        .with_data(name)
    }

    /// The declared father does not exist.
    #[must_use]
    pub fn parent_not_found(father_code: i64) -> Self {
        Self::new(
            ArgumentKind::ParentNotFound,
            ResponseCode::NotFound,
            format_message(messages::PARENT_NOT_FOUND, &[&father_code.to_string()]),
        )
        .with_data(father_code)
    }

    /// A dependent module still references the entity.
    #[must_use]
    pub fn blocked_by_relationship(module: &str) -> Self {
        Self::new(
            ArgumentKind::BlockedByRelationship,
            ResponseCode::BlockedByRelationship,
            format_message(messages::BLOCKED_BY_RELATIONSHIP, &[module]),
        )
    }

    /// A related entity exists but is inactive.
    #[must_use]
    pub fn inactive_relationship(related: &str) -> Self {
        Self::new(
            ArgumentKind::InactiveRelationship,
            ResponseCode::InactiveRelationship,
            format_message(messages::INACTIVE_RELATIONSHIP, &[related]),
        )
    }

    /// A field-level rule failed (length limits, collection minimums).
    #[must_use]
    pub fn field_validation(description: impl Into<String>) -> Self {
        Self::new(
            ArgumentKind::FieldValidation,
            ResponseCode::ValidationFailed,
            description,
        )
    }
}

///
/// StoreError
///
/// Storage-layer failure reported by a repository or resolver. The engines
/// propagate these unchanged; they never reinterpret storage failures as
/// validation outcomes.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum StoreError {
    #[error("key not found: {key}")]
    NotFound { key: String },

    #[error("store corruption: {message}")]
    Corrupt { message: String },

    #[error("store unavailable: {message}")]
    Unavailable { message: String },
}

///
/// ServiceError
///
/// Everything an engine operation can surface: a validation failure of its
/// own, or a storage failure passed through.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum ServiceError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    #[must_use]
    pub const fn as_argument(&self) -> Option<&ArgumentError> {
        match self {
            Self::Argument(err) => Some(err),
            Self::Store(_) => None,
        }
    }

    #[must_use]
    pub fn is_kind(&self, kind: ArgumentKind) -> bool {
        matches!(self, Self::Argument(err) if err.kind == kind)
    }
}
