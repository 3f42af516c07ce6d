//! 用户服务（/persons/ 与 /blog/user/）
//!
//! 技能分配端点 POST /persons/{uid}/skills/{sid}?level=N 是后端暴露的
//! 唯一分配原语：level=0 删除，1..=100 创建或覆盖。PersonApi 以此实现
//! 调和核心的 SkillAssigner。

use async_trait::async_trait;
use tracing::debug;

use crate::error::ApiError;
use crate::model::{EducationExperience, JobExperience, Person, PersonUpdate, PersonalInfoFull};
use crate::reconcile::SkillAssigner;

use super::{paging_query, ApiClient};

/// HTTP 用户服务
#[derive(Debug, Clone)]
pub struct PersonApi {
    api: ApiClient,
}

impl PersonApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Vec<Person>, ApiError> {
        self.api
            .get_json("/persons/", &paging_query(skip, limit))
            .await
    }

    pub async fn get(&self, user_id: i64) -> Result<Person, ApiError> {
        self.api
            .get_json(&format!("/persons/{}", user_id), &[])
            .await
    }

    /// 个人主页聚合：基本信息 + 技能分配 + 经历
    pub async fn full_info(&self, user_id: i64) -> Result<PersonalInfoFull, ApiError> {
        self.api
            .get_json(&format!("/blog/user/{}", user_id), &[])
            .await
    }

    pub async fn create(&self, person: &PersonUpdate) -> Result<Person, ApiError> {
        self.api.post_json("/persons/", person).await
    }

    pub async fn update(&self, user_id: i64, person: &PersonUpdate) -> Result<Person, ApiError> {
        self.api
            .put_json(&format!("/persons/{}", user_id), person)
            .await
    }

    pub async fn delete(&self, user_id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/persons/{}", user_id)).await
    }

    pub async fn education(&self, user_id: i64) -> Result<Vec<EducationExperience>, ApiError> {
        self.api
            .get_json(&format!("/persons/{}/education", user_id), &[])
            .await
    }

    pub async fn add_education(
        &self,
        user_id: i64,
        education: &EducationExperience,
    ) -> Result<EducationExperience, ApiError> {
        self.api
            .post_json(&format!("/persons/{}/education", user_id), education)
            .await
    }

    pub async fn jobs(&self, user_id: i64) -> Result<Vec<JobExperience>, ApiError> {
        self.api
            .get_json(&format!("/persons/{}/jobs", user_id), &[])
            .await
    }

    pub async fn add_job(
        &self,
        user_id: i64,
        job: &JobExperience,
    ) -> Result<JobExperience, ApiError> {
        self.api
            .post_json(&format!("/persons/{}/jobs", user_id), job)
            .await
    }
}

#[async_trait]
impl SkillAssigner for PersonApi {
    async fn assign(&self, user_id: i64, skill_id: i64, level: u8) -> Result<(), ApiError> {
        debug!("assign user {} skill {} level {}", user_id, skill_id, level);
        self.api
            .post_query(
                &format!("/persons/{}/skills/{}", user_id, skill_id),
                &[("level", level.to_string())],
            )
            .await
    }
}
