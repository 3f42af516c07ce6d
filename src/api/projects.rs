//! 项目服务（/projects/ 与 /blog/projects/）

use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::model::{
    Project, ProjectCreateRequest, ProjectInfoResponse, ProjectSearchParams, ProjectUpdate,
    ProjectComment,
};

use super::{paging_query, ApiClient};

/// 发表评论请求体；`re_comment_id` 指向被回复的评论（顶层评论为 None）
#[derive(Debug, Clone, Serialize)]
pub struct CommentCreate {
    pub comment_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_comment_id: Option<i64>,
}

/// HTTP 项目服务
#[derive(Debug, Clone)]
pub struct ProjectApi {
    api: ApiClient,
}

impl ProjectApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Vec<Project>, ApiError> {
        self.api
            .get_json("/projects/", &paging_query(skip, limit))
            .await
    }

    /// 关键字 / 创建者 / 草稿状态搜索
    pub async fn search(&self, params: &ProjectSearchParams) -> Result<Vec<Project>, ApiError> {
        self.api
            .get_json("/blog/projects/search", &params.to_query())
            .await
    }

    /// 项目详情聚合：协作需求 + 评论线程
    pub async fn get(&self, project_id: i64) -> Result<ProjectInfoResponse, ApiError> {
        self.api
            .get_json(&format!("/blog/projects/{}", project_id), &[])
            .await
    }

    pub async fn create(&self, project: &ProjectCreateRequest) -> Result<Project, ApiError> {
        let created: Project = self.api.post_json("/blog/projects/create", project).await?;
        info!(
            "Created project {} ({})",
            created.project_title, created.project_id
        );
        Ok(created)
    }

    pub async fn update(&self, project_id: i64, project: &ProjectUpdate) -> Result<Project, ApiError> {
        self.api
            .put_json(&format!("/projects/{}", project_id), project)
            .await
    }

    pub async fn delete(&self, project_id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/projects/{}", project_id)).await
    }

    pub async fn comments(
        &self,
        project_id: i64,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<ProjectComment>, ApiError> {
        self.api
            .get_json(
                &format!("/projects/{}/comments", project_id),
                &paging_query(skip, limit),
            )
            .await
    }

    /// 发表评论；user_id 走查询参数（后端约定）
    pub async fn add_comment(
        &self,
        project_id: i64,
        user_id: i64,
        comment: &CommentCreate,
    ) -> Result<ProjectComment, ApiError> {
        self.api
            .post_json_query(
                &format!("/projects/{}/comments", project_id),
                &[("user_id", user_id.to_string())],
                comment,
            )
            .await
    }

    /// 给项目挂协作需求：需要 headcount 名具备该技能的人
    pub async fn add_collaboration(
        &self,
        project_id: i64,
        skill_id: i64,
        headcount: u32,
    ) -> Result<(), ApiError> {
        self.api
            .post_query(
                &format!("/projects/{}/skills/{}", project_id, skill_id),
                &[("headcount", headcount.to_string())],
            )
            .await
    }
}
