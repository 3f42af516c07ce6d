//! 技能目录与技能分配的线上类型

use serde::{Deserialize, Serialize};

/// 技能目录条目（GET /skills/ 的返回项）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillInfo {
    pub skill_id: i64,
    pub skill_name: String,
}

/// 创建技能请求体（POST /skills/）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCreate {
    pub skill_name: String,
}

/// 用户的一条技能分配记录（/blog/user/{id} 返回的 skills 项）
///
/// `level` 线上取值 1..=100；0 是删除哨兵，只出现在 assign 调用里，
/// 不会出现在任何查询结果中。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillAssignment {
    pub skill_id: i64,
    pub skill_name: String,
    pub level: u8,
}
