//! Team Board 客户端 SDK
//!
//! 后端为状态的唯一权威，本 crate 负责类型化的 REST 调用与
//! 技能集编辑的本地状态。模块划分：
//! - **api**: REST 服务层（技能目录 / 用户 / 项目，reqwest JSON）
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **error**: 错误类型（HTTP 层与调和核心）
//! - **model**: 线上数据类型（serde，字段名与后端一致）
//! - **observability**: tracing 初始化
//! - **reconcile**: 技能集调和核心（快照 diff + 顺序应用）

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod observability;
pub mod reconcile;

pub use error::{ApiError, ReconcileError};
pub use reconcile::{diff, EditSession, Operation, SessionState, SkillAssigner, SkillSet};
