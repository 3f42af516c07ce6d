//! 技能集调和核心
//!
//! 两份不可变快照（服务端确认的 `original`、本地编辑的 `edited`）
//! 加一个纯函数 `diff`，代替手工维护 dirty 标记：
//!
//! 1. `diff` 算出最小操作序列（Add / Update / Remove），增改在前、删除在后
//! 2. `EditSession::commit` 严格按序逐个应用到远端 assign 原语上
//!
//! 远端只有 create-or-overwrite 一个原语（level=0 表示删除），
//! 所以 Update 展开为「先清零、再写入」两次顺序调用。

mod diff;
pub mod mock;
mod session;
mod set;

pub use diff::{diff, Operation};
pub use session::{EditSession, SessionState, SkillAssigner};
pub use set::{SkillSet, LEVEL_MAX, LEVEL_MIN};
