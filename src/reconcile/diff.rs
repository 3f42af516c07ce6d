//! 纯 diff：比较两份快照，产出最小操作序列

use std::fmt;

use super::SkillSet;

/// 一次逻辑变更。Update 保留为独立变体：换到有真正更新端点的
/// 后端时只改 apply 策略，diff 不动。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add { skill_id: i64, level: u8 },
    Update { skill_id: i64, level: u8 },
    Remove { skill_id: i64 },
}

impl Operation {
    pub fn skill_id(&self) -> i64 {
        match *self {
            Operation::Add { skill_id, .. }
            | Operation::Update { skill_id, .. }
            | Operation::Remove { skill_id } => skill_id,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Operation::Add { skill_id, level } => write!(f, "Add(skill {}, level {})", skill_id, level),
            Operation::Update { skill_id, level } => {
                write!(f, "Update(skill {}, level {})", skill_id, level)
            }
            Operation::Remove { skill_id } => write!(f, "Remove(skill {})", skill_id),
        }
    }
}

/// 计算把远端从 `original` 变成 `edited` 所需的操作序列
///
/// - 只在 `edited` → Add；两边都有但等级不同 → Update；相同 → 无操作
/// - 只在 `original` → Remove
/// - 增改在前、删除在后：与远端调用顺序约定一致（见 session 的失败语义）
pub fn diff(original: &SkillSet, edited: &SkillSet) -> Vec<Operation> {
    let mut ops = Vec::new();

    for (skill_id, level) in edited.iter() {
        match original.level(skill_id) {
            None => ops.push(Operation::Add { skill_id, level }),
            Some(orig) if orig != level => ops.push(Operation::Update { skill_id, level }),
            Some(_) => {}
        }
    }

    for (skill_id, _) in original.iter() {
        if !edited.contains(skill_id) {
            ops.push(Operation::Remove { skill_id });
        }
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pairs: &[(i64, u8)]) -> SkillSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_diff_empty_iff_equal() {
        let a = set(&[(1, 50), (2, 30)]);
        let b = set(&[(1, 50), (2, 30)]);
        assert!(diff(&a, &b).is_empty());

        let c = set(&[(1, 50), (2, 31)]);
        assert!(!diff(&a, &c).is_empty());
    }

    #[test]
    fn test_add_only() {
        // 场景：original = {1:50}，edited = {1:50, 2:30}
        let original = set(&[(1, 50)]);
        let edited = set(&[(1, 50), (2, 30)]);
        assert_eq!(
            diff(&original, &edited),
            vec![Operation::Add {
                skill_id: 2,
                level: 30
            }]
        );
    }

    #[test]
    fn test_level_change_is_single_update() {
        // 等级变化产出唯一一个 Update，绝不是 Add+Remove 对
        let original = set(&[(1, 50)]);
        let edited = set(&[(1, 80)]);
        assert_eq!(
            diff(&original, &edited),
            vec![Operation::Update {
                skill_id: 1,
                level: 80
            }]
        );
    }

    #[test]
    fn test_remove_only() {
        let original = set(&[(1, 50), (2, 30)]);
        let edited = set(&[(2, 30)]);
        assert_eq!(diff(&original, &edited), vec![Operation::Remove { skill_id: 1 }]);
    }

    #[test]
    fn test_adds_and_updates_before_removes() {
        let original = set(&[(1, 50), (2, 30), (3, 70)]);
        let edited = set(&[(2, 99), (4, 10)]);
        let ops = diff(&original, &edited);

        let first_remove = ops
            .iter()
            .position(|op| matches!(op, Operation::Remove { .. }))
            .unwrap();
        assert!(ops[..first_remove]
            .iter()
            .all(|op| !matches!(op, Operation::Remove { .. })));
        assert!(ops[first_remove..]
            .iter()
            .all(|op| matches!(op, Operation::Remove { .. })));
        assert_eq!(ops.len(), 4);
    }

    #[test]
    fn test_diff_self_is_empty() {
        let edited = set(&[(1, 80), (5, 20)]);
        assert!(diff(&edited, &edited).is_empty());
    }
}
