//! 技能集：skill_id -> level 的映射，键唯一，迭代按 skill_id 有序

use std::collections::BTreeMap;

use crate::error::ReconcileError;
use crate::model::SkillAssignment;

/// 等级下界（0 是线上删除哨兵，不允许进入集合）
pub const LEVEL_MIN: u8 = 1;
/// 等级上界
pub const LEVEL_MAX: u8 = 100;

/// 一个用户的技能集快照
///
/// 删除表示为键的缺失，而不是 level=0。底层用 BTreeMap，
/// 保证 diff 输出顺序可复现。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    levels: BTreeMap<i64, u8>,
}

fn check_level(level: u8) -> Result<(), ReconcileError> {
    if !(LEVEL_MIN..=LEVEL_MAX).contains(&level) {
        return Err(ReconcileError::LevelOutOfRange(level));
    }
    Ok(())
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从服务端返回的分配记录构建（加载 original 用）
    ///
    /// 等级越界或 skill_id 重复都视为坏数据，就地拒绝。
    pub fn from_assignments(assignments: &[SkillAssignment]) -> Result<Self, ReconcileError> {
        let mut set = Self::new();
        for a in assignments {
            set.add(a.skill_id, a.level)?;
        }
        Ok(set)
    }

    /// 严格新增：skill_id 已存在时报 DuplicateSkill
    pub fn add(&mut self, skill_id: i64, level: u8) -> Result<(), ReconcileError> {
        check_level(level)?;
        if self.levels.contains_key(&skill_id) {
            return Err(ReconcileError::DuplicateSkill(skill_id));
        }
        self.levels.insert(skill_id, level);
        Ok(())
    }

    /// 新增或改级（upsert）
    pub fn add_or_update(&mut self, skill_id: i64, level: u8) -> Result<(), ReconcileError> {
        check_level(level)?;
        self.levels.insert(skill_id, level);
        Ok(())
    }

    /// 移除一项；本来就不存在时返回 false
    pub fn remove(&mut self, skill_id: i64) -> bool {
        self.levels.remove(&skill_id).is_some()
    }

    pub fn level(&self, skill_id: i64) -> Option<u8> {
        self.levels.get(&skill_id).copied()
    }

    pub fn contains(&self, skill_id: i64) -> bool {
        self.levels.contains_key(&skill_id)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// 按 skill_id 升序迭代 (skill_id, level)
    pub fn iter(&self) -> impl Iterator<Item = (i64, u8)> + '_ {
        self.levels.iter().map(|(&id, &level)| (id, level))
    }
}

impl FromIterator<(i64, u8)> for SkillSet {
    /// 测试与字面量构造用；不校验等级，调用方保证 1..=100
    fn from_iter<T: IntoIterator<Item = (i64, u8)>>(iter: T) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_out_of_range() {
        let mut set = SkillSet::new();
        assert!(matches!(
            set.add(1, 0),
            Err(ReconcileError::LevelOutOfRange(0))
        ));
        assert!(matches!(
            set.add_or_update(1, 101),
            Err(ReconcileError::LevelOutOfRange(101))
        ));
        assert!(set.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut set = SkillSet::new();
        set.add(1, 50).unwrap();
        assert!(matches!(
            set.add(1, 60),
            Err(ReconcileError::DuplicateSkill(1))
        ));
        assert_eq!(set.level(1), Some(50));
    }

    #[test]
    fn test_add_or_update_overwrites() {
        let mut set = SkillSet::new();
        set.add(1, 50).unwrap();
        set.add_or_update(1, 80).unwrap();
        assert_eq!(set.level(1), Some(80));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_is_key_absence() {
        let mut set = SkillSet::new();
        set.add(1, 50).unwrap();
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert!(!set.contains(1));
    }

    #[test]
    fn test_from_assignments_rejects_bad_server_data() {
        let rows = vec![
            SkillAssignment {
                skill_id: 1,
                skill_name: "Rust".to_string(),
                level: 50,
            },
            SkillAssignment {
                skill_id: 1,
                skill_name: "Rust".to_string(),
                level: 60,
            },
        ];
        assert!(matches!(
            SkillSet::from_assignments(&rows),
            Err(ReconcileError::DuplicateSkill(1))
        ));
    }
}
