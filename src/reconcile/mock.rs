//! Mock 技能分配服务（测试用，不发 HTTP）
//!
//! 记录每次 assign 调用，可选在第 N 次调用注入失败，
//! 用于验证顺序、中止与重放语义。

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ApiError;

use super::SkillAssigner;

/// 录制型 mock：calls 按发生顺序保存 (user_id, skill_id, level)
#[derive(Debug, Default)]
pub struct MockAssigner {
    calls: Mutex<Vec<(i64, i64, u8)>>,
    fail_at: Mutex<Option<usize>>,
}

impl MockAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 第 `n` 次调用（从 0 计）返回错误，之前与之后的调用照常成功
    pub fn failing_at(n: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: Mutex::new(Some(n)),
        }
    }

    /// 清除注入的失败（重放测试用）
    pub fn clear_failure(&self) {
        *self.lock_fail() = None;
    }

    /// 已发生调用的快照
    pub fn calls(&self) -> Vec<(i64, i64, u8)> {
        self.lock_calls().clone()
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<(i64, i64, u8)>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_fail(&self) -> std::sync::MutexGuard<'_, Option<usize>> {
        self.fail_at.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SkillAssigner for MockAssigner {
    async fn assign(&self, user_id: i64, skill_id: i64, level: u8) -> Result<(), ApiError> {
        let seq = {
            let mut calls = self.lock_calls();
            let seq = calls.len();
            calls.push((user_id, skill_id, level));
            seq
        };
        if *self.lock_fail() == Some(seq) {
            return Err(ApiError::Other(format!(
                "injected failure at call {}",
                seq
            )));
        }
        Ok(())
    }
}
