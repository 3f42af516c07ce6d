//! 技能目录服务（/skills/）

use async_trait::async_trait;
use tracing::info;

use crate::error::{ApiError, ReconcileError};
use crate::model::{SkillCreate, SkillInfo};

use super::{paging_query, ApiClient};

/// 技能目录抽象：列出全局技能定义、按名字新建
///
/// 调和核心只依赖这两个操作；HTTP 实现之外可以用 mock 顶替。
#[async_trait]
pub trait SkillCatalog: Send + Sync {
    async fn list(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Vec<SkillInfo>, ApiError>;

    async fn create(&self, name: &str) -> Result<SkillInfo, ApiError>;
}

/// HTTP 实现
#[derive(Debug, Clone)]
pub struct SkillApi {
    api: ApiClient,
}

impl SkillApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get(&self, skill_id: i64) -> Result<SkillInfo, ApiError> {
        self.api
            .get_json(&format!("/skills/{}", skill_id), &[])
            .await
    }

    pub async fn update(&self, skill_id: i64, name: &str) -> Result<SkillInfo, ApiError> {
        self.api
            .put_json(
                &format!("/skills/{}", skill_id),
                &SkillCreate {
                    skill_name: name.to_string(),
                },
            )
            .await
    }

    pub async fn delete(&self, skill_id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/skills/{}", skill_id)).await
    }
}

#[async_trait]
impl SkillCatalog for SkillApi {
    async fn list(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Vec<SkillInfo>, ApiError> {
        self.api
            .get_json("/skills/", &paging_query(skip, limit))
            .await
    }

    async fn create(&self, name: &str) -> Result<SkillInfo, ApiError> {
        self.api
            .post_json(
                "/skills/",
                &SkillCreate {
                    skill_name: name.to_string(),
                },
            )
            .await
    }
}

/// 查找或新建：编辑集引用了目录里还没有的技能时用
///
/// 名字匹配不区分大小写；没有命中才新建，避免目录里堆同名条目。
pub async fn ensure_skill(
    catalog: &dyn SkillCatalog,
    name: &str,
) -> Result<SkillInfo, ReconcileError> {
    let listed = catalog
        .list(None, None)
        .await
        .map_err(|source| ReconcileError::CatalogFetch { source })?;

    if let Some(existing) = listed
        .iter()
        .find(|s| s.skill_name.eq_ignore_ascii_case(name))
    {
        return Ok(existing.clone());
    }

    let created = catalog
        .create(name)
        .await
        .map_err(|source| ReconcileError::CatalogFetch { source })?;
    info!("Created catalog skill {} ({})", created.skill_name, created.skill_id);
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// 内存目录：list 返回固定条目，create 追加并编号
    struct MemoryCatalog {
        entries: Mutex<Vec<SkillInfo>>,
        fail_list: bool,
    }

    #[async_trait]
    impl SkillCatalog for MemoryCatalog {
        async fn list(
            &self,
            _skip: Option<u32>,
            _limit: Option<u32>,
        ) -> Result<Vec<SkillInfo>, ApiError> {
            if self.fail_list {
                return Err(ApiError::Other("catalog down".to_string()));
            }
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn create(&self, name: &str) -> Result<SkillInfo, ApiError> {
            let mut entries = self.entries.lock().unwrap();
            let skill = SkillInfo {
                skill_id: entries.len() as i64 + 1,
                skill_name: name.to_string(),
            };
            entries.push(skill.clone());
            Ok(skill)
        }
    }

    fn catalog_with(names: &[&str]) -> MemoryCatalog {
        MemoryCatalog {
            entries: Mutex::new(
                names
                    .iter()
                    .enumerate()
                    .map(|(i, n)| SkillInfo {
                        skill_id: i as i64 + 1,
                        skill_name: n.to_string(),
                    })
                    .collect(),
            ),
            fail_list: false,
        }
    }

    #[tokio::test]
    async fn test_ensure_skill_matches_case_insensitive() {
        let catalog = catalog_with(&["Rust", "Python"]);
        let found = ensure_skill(&catalog, "rust").await.unwrap();
        assert_eq!(found.skill_id, 1);
        // 未新建
        assert_eq!(catalog.entries.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ensure_skill_creates_missing() {
        let catalog = catalog_with(&["Rust"]);
        let created = ensure_skill(&catalog, "Go").await.unwrap();
        assert_eq!(created.skill_name, "Go");
        assert_eq!(catalog.entries.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ensure_skill_surfaces_catalog_fetch_error() {
        let catalog = MemoryCatalog {
            entries: Mutex::new(Vec::new()),
            fail_list: true,
        };
        let err = ensure_skill(&catalog, "Rust").await.unwrap_err();
        assert!(matches!(err, ReconcileError::CatalogFetch { .. }));
    }
}
