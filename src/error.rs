//! 错误类型：HTTP 服务层与调和核心各一枚
//!
//! 校验错误在任何远端调用之前就地拒绝；远端调用错误携带失败操作的
//! 上下文（技能 ID 与目标等级），由调用方决定是否整体重试。

use thiserror::Error;

use crate::reconcile::Operation;

/// HTTP 服务层错误（reqwest 传输错误 / 非 2xx 状态）
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Mock 与非 HTTP 传输注入失败用
    #[error("{0}")]
    Other(String),
}

/// 调和核心错误
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("Level out of range: {0} (expected 1..=100)")]
    LevelOutOfRange(u8),

    #[error("Skill {0} already present")]
    DuplicateSkill(i64),

    #[error("Catalog fetch failed: {source}")]
    CatalogFetch {
        #[source]
        source: ApiError,
    },

    /// 应用队列在该操作上中止；之前的操作已生效，之后的全部放弃
    #[error("Assignment call failed on {op}: {source}")]
    AssignmentCall {
        op: Operation,
        #[source]
        source: ApiError,
    },

    #[error("Invalid session state: expected {expected}, got {actual}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },
}
