use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldError;
use crate::models::common::serde_helpers::deserialize_optional_id;
use crate::utils::validate::{validate_max_marks, validate_name, validate_subject_date};

// 科目列表查询参数
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/subject.ts")]
pub struct SubjectListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[ts(optional)]
    pub class_id: Option<i64>,
}

// 创建科目请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub date: String,
    pub max_marks: i32,
    pub class_id: i64,
}

impl CreateSubjectRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_name(&self.name).map_err(|e| FieldError::new("name", e))?;
        validate_subject_date(&self.date).map_err(|e| FieldError::new("date", e))?;
        validate_max_marks(self.max_marks).map_err(|e| FieldError::new("maxMarks", e))?;
        Ok(())
    }
}

// 更新科目请求（部分更新）
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub max_marks: Option<i32>,
    pub class_id: Option<i64>,
}

impl UpdateSubjectRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(name) = &self.name {
            validate_name(name).map_err(|e| FieldError::new("name", e))?;
        }
        if let Some(date) = &self.date {
            validate_subject_date(date).map_err(|e| FieldError::new("date", e))?;
        }
        if let Some(max_marks) = self.max_marks {
            validate_max_marks(max_marks).map_err(|e| FieldError::new("maxMarks", e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject_request() -> CreateSubjectRequest {
        CreateSubjectRequest {
            name: "Initial Test".to_string(),
            date: "2024-07-15".to_string(),
            max_marks: 80,
            class_id: 1,
        }
    }

    #[test]
    fn test_valid_subject() {
        assert!(subject_request().validate().is_ok());
    }

    #[test]
    fn test_zero_max_marks_rejected() {
        let req = CreateSubjectRequest {
            max_marks: 0,
            ..subject_request()
        };
        assert_eq!(req.validate().unwrap_err().field, "maxMarks");
    }

    #[test]
    fn test_bad_date_rejected() {
        let req = CreateSubjectRequest {
            date: "yesterday".to_string(),
            ..subject_request()
        };
        assert_eq!(req.validate().unwrap_err().field, "date");
    }
}
