//! 数据模型：与后端 JSON 线上格式一一对应
//!
//! 字段名保持后端的 snake_case 原样，不做改名。时间戳保持线上字符串
//! （后端未约定格式，解析留给调用方）。

mod project;
mod skill;
mod user;

pub use project::{
    Project, ProjectCollaboration, ProjectCollaborationResponse, ProjectComment,
    ProjectCreateRequest, ProjectInfoResponse, ProjectSearchParams, ProjectUpdate,
};
pub use skill::{SkillAssignment, SkillCreate, SkillInfo};
pub use user::{
    EducationExperience, JobExperience, Person, PersonUpdate, PersonalInfoFull,
};
