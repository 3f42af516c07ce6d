//! 用户（person）相关线上类型

use serde::{Deserialize, Serialize};

use super::SkillAssignment;

/// 用户基本信息（/persons/ 返回项）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub user_id: i64,
    pub user_name: Option<String>,
    pub job_title: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub profile_url: Option<String>,
}

/// 创建 / 更新用户的请求体（字段全部可选，None 不序列化）
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

/// 教育经历
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EducationExperience {
    pub major: String,
    pub school: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub experience_description: Option<String>,
}

/// 工作经历
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobExperience {
    pub job_title: String,
    pub company: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub experience_description: Option<String>,
}

/// 个人主页聚合信息（GET /blog/user/{id}）：基本信息 + 技能 + 经历
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalInfoFull {
    pub user_id: i64,
    pub user_name: Option<String>,
    pub job_title: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub profile_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillAssignment>,
    #[serde(default)]
    pub job_experiences: Vec<JobExperience>,
    #[serde(default)]
    pub education_experiences: Vec<EducationExperience>,
}
