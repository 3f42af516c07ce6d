//! 项目（project）相关线上类型

use serde::{Deserialize, Serialize};

/// 项目基本信息（/projects/ 返回项）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub project_id: i64,
    pub project_title: String,
    pub project_description: Option<String>,
    pub project_background_img_url: Option<String>,
    /// 0 = 已发布，1 = 草稿
    pub is_draft: i32,
    pub project_creator_id: Option<i64>,
    pub project_create_time: Option<String>,
}

/// 更新项目的请求体（字段全部可选，None 不序列化）
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_background_img_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<i32>,
}

/// 协作需求：项目需要 headcount 名具备某技能的人
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectCollaboration {
    pub skill_id: i64,
    pub headcount: u32,
}

/// 协作需求详情（项目详情返回项，含已报名人数）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectCollaborationResponse {
    pub skill_id: i64,
    pub skill_name: String,
    pub headcount: u32,
    pub applied_number: u32,
}

/// 项目评论，`re_list` 为嵌套回复（线程式）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectComment {
    pub comment_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub comment_time: String,
    pub comment_message: String,
    #[serde(default)]
    pub re_list: Vec<ProjectComment>,
}

/// 项目详情聚合（GET /blog/projects/{id}）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectInfoResponse {
    pub project_id: i64,
    pub project_title: String,
    pub project_creator_name: String,
    pub project_create_time: String,
    pub project_description: Option<String>,
    pub project_background_img_url: Option<String>,
    #[serde(default)]
    pub collaboration_list: Vec<ProjectCollaborationResponse>,
    #[serde(default)]
    pub comment_list: Vec<ProjectComment>,
}

/// 创建项目请求体（POST /blog/projects/create）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreateRequest {
    pub project_title: String,
    pub project_creator_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_background_img_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaboration_list: Option<Vec<ProjectCollaboration>>,
}

/// 项目搜索参数（GET /blog/projects/search）
#[derive(Debug, Clone, Default)]
pub struct ProjectSearchParams {
    pub keyword: Option<String>,
    pub creator_id: Option<i64>,
    pub is_draft: Option<i32>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ProjectSearchParams {
    /// 展开为查询参数键值对（None 项不出现）
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(ref keyword) = self.keyword {
            q.push(("keyword", keyword.clone()));
        }
        if let Some(creator_id) = self.creator_id {
            q.push(("creator_id", creator_id.to_string()));
        }
        if let Some(is_draft) = self.is_draft {
            q.push(("is_draft", is_draft.to_string()));
        }
        if let Some(skip) = self.skip {
            q.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            q.push(("limit", limit.to_string()));
        }
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_skip_none() {
        let params = ProjectSearchParams {
            keyword: Some("rust".to_string()),
            is_draft: Some(0),
            ..Default::default()
        };
        let q = params.to_query();
        assert_eq!(
            q,
            vec![("keyword", "rust".to_string()), ("is_draft", "0".to_string())]
        );
    }

    #[test]
    fn test_comment_thread_roundtrip() {
        let json = r#"{
            "comment_id": 1, "user_id": 7, "user_name": "阿黎",
            "comment_time": "2024-05-01T10:00:00", "comment_message": "有兴趣",
            "re_list": [{
                "comment_id": 2, "user_id": 8, "user_name": "Ben",
                "comment_time": "2024-05-01T11:00:00", "comment_message": "欢迎",
                "re_list": []
            }]
        }"#;
        let comment: ProjectComment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.re_list.len(), 1);
        assert_eq!(comment.re_list[0].user_name, "Ben");
    }
}
