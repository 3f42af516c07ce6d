//! 编辑会话：状态机 + 顺序应用
//!
//! 一次会话对应一轮「编辑-保存」：`start` 从服务端快照克隆出工作副本，
//! 本地编辑只动工作副本，`commit` 做 diff 并把操作严格按序打到远端。
//! 保存成功后会话即弃用，调用方重新拉取快照开新会话。

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ReconcileError};

use super::{diff, Operation, SkillSet};

/// 远端技能分配服务抽象：唯一原语 assign
///
/// 语义：level=0 删除（不存在时为空操作）；level 1..=100 创建或覆盖。
/// HTTP 实现见 api::PersonApi；测试用 mock 见本模块同级的 mock。
#[async_trait]
pub trait SkillAssigner: Send + Sync {
    async fn assign(&self, user_id: i64, skill_id: i64, level: u8) -> Result<(), ApiError>;
}

/// 会话状态。Applying 是唯一产生外部副作用的状态；
/// Failed 保留未应用的操作后缀（失败的那个在首位）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    Applying,
    Committed,
    Failed,
}

impl SessionState {
    fn name(self) -> &'static str {
        match self {
            SessionState::Editing => "Editing",
            SessionState::Applying => "Applying",
            SessionState::Committed => "Committed",
            SessionState::Failed => "Failed",
        }
    }
}

/// 一次技能集编辑会话
///
/// 同一用户同一时刻只允许一个会话在 Applying：状态机本身拒绝
/// Applying 期间的编辑与二次提交，宿主负责不并行创建多个会话。
pub struct EditSession {
    user_id: i64,
    original: SkillSet,
    edited: SkillSet,
    state: SessionState,
    pending: Vec<Operation>,
}

impl EditSession {
    /// 开启会话：`original` 为加载时服务端确认的快照，克隆为工作副本
    pub fn start(user_id: i64, original: SkillSet) -> Self {
        let edited = original.clone();
        Self {
            user_id,
            original,
            edited,
            state: SessionState::Editing,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn original(&self) -> &SkillSet {
        &self.original
    }

    pub fn edited(&self) -> &SkillSet {
        &self.edited
    }

    fn ensure_state(&self, expected: SessionState) -> Result<(), ReconcileError> {
        if self.state != expected {
            return Err(ReconcileError::InvalidState {
                expected: expected.name(),
                actual: self.state.name(),
            });
        }
        Ok(())
    }

    /// 严格新增（已存在时报 DuplicateSkill），只在 Editing 可用
    pub fn add(&mut self, skill_id: i64, level: u8) -> Result<(), ReconcileError> {
        self.ensure_state(SessionState::Editing)?;
        self.edited.add(skill_id, level)
    }

    /// 新增或改级，只在 Editing 可用
    pub fn add_or_update(&mut self, skill_id: i64, level: u8) -> Result<(), ReconcileError> {
        self.ensure_state(SessionState::Editing)?;
        self.edited.add_or_update(skill_id, level)
    }

    /// 移除一项；不存在时 Ok(false)
    pub fn remove(&mut self, skill_id: i64) -> Result<bool, ReconcileError> {
        self.ensure_state(SessionState::Editing)?;
        Ok(self.edited.remove(skill_id))
    }

    /// diff + 顺序应用
    ///
    /// 无变更时直接 Committed，不发任何远端调用。任一调用失败即中止：
    /// 已应用的保持生效，未应用的后缀存入会话，可用 `resume` 幂等重放。
    pub async fn commit(&mut self, assigner: &dyn SkillAssigner) -> Result<(), ReconcileError> {
        self.ensure_state(SessionState::Editing)?;

        let ops = diff(&self.original, &self.edited);
        if ops.is_empty() {
            info!("Skill set unchanged for user {}, nothing to apply", self.user_id);
            self.state = SessionState::Committed;
            return Ok(());
        }

        info!(
            "Applying {} skill set change(s) for user {}",
            ops.len(),
            self.user_id
        );
        self.apply_queue(assigner, ops).await
    }

    /// 失败后重放未应用的后缀（从失败的那个操作开始）
    ///
    /// assign 是 create-or-overwrite，整个操作重放是幂等的——
    /// Update 清零成功但写入失败留下的零级残留也会被重放修正。
    pub async fn resume(&mut self, assigner: &dyn SkillAssigner) -> Result<(), ReconcileError> {
        self.ensure_state(SessionState::Failed)?;

        let ops = std::mem::take(&mut self.pending);
        info!(
            "Resuming {} unapplied skill set change(s) for user {}",
            ops.len(),
            self.user_id
        );
        self.apply_queue(assigner, ops).await
    }

    async fn apply_queue(
        &mut self,
        assigner: &dyn SkillAssigner,
        ops: Vec<Operation>,
    ) -> Result<(), ReconcileError> {
        self.state = SessionState::Applying;

        for (idx, op) in ops.iter().enumerate() {
            debug!("Applying {} for user {}", op, self.user_id);
            if let Err(source) = self.apply_one(assigner, *op).await {
                warn!(
                    "Skill set apply halted for user {} at {} ({} change(s) abandoned): {}",
                    self.user_id,
                    op,
                    ops.len() - idx - 1,
                    source
                );
                self.pending = ops[idx..].to_vec();
                self.state = SessionState::Failed;
                return Err(ReconcileError::AssignmentCall { op: *op, source });
            }
        }

        info!("Skill set committed for user {}", self.user_id);
        self.state = SessionState::Committed;
        Ok(())
    }

    async fn apply_one(
        &self,
        assigner: &dyn SkillAssigner,
        op: Operation,
    ) -> Result<(), ApiError> {
        match op {
            Operation::Add { skill_id, level } => {
                assigner.assign(self.user_id, skill_id, level).await
            }
            // 远端只有 create-or-overwrite：先清零、再写入，两步必须顺序完成。
            // 乱序或只做一半会在远端留下零级残留。
            Operation::Update { skill_id, level } => {
                assigner.assign(self.user_id, skill_id, 0).await?;
                assigner.assign(self.user_id, skill_id, level).await
            }
            Operation::Remove { skill_id } => assigner.assign(self.user_id, skill_id, 0).await,
        }
    }
}
