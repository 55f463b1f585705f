use serde::Deserialize;
use ts_rs::TS;

use crate::models::FieldError;
use crate::models::common::serde_helpers::deserialize_optional_id;
use crate::utils::validate::{validate_name, validate_roll_no};

// 学生列表查询参数
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/student.ts")]
pub struct StudentListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[ts(optional)]
    pub class_id: Option<i64>,
}

// 创建学生请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub roll_no: i32,
    pub name: String,
    pub class_id: i64,
}

impl CreateStudentRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_roll_no(self.roll_no).map_err(|e| FieldError::new("rollNo", e))?;
        validate_name(&self.name).map_err(|e| FieldError::new("name", e))?;
        Ok(())
    }
}

// 更新学生请求（部分更新）
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub roll_no: Option<i32>,
    pub name: Option<String>,
    pub class_id: Option<i64>,
}

impl UpdateStudentRequest {
    pub fn validate(&self) -> Result<(), FieldError> {
        if let Some(roll_no) = self.roll_no {
            validate_roll_no(roll_no).map_err(|e| FieldError::new("rollNo", e))?;
        }
        if let Some(name) = &self.name {
            validate_name(name).map_err(|e| FieldError::new("name", e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_student_first_error_wins() {
        let req = CreateStudentRequest {
            roll_no: 0,
            name: "".to_string(),
            class_id: 1,
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err.field, "rollNo");
    }

    #[test]
    fn test_create_student_deserializes_camel_case() {
        let req: CreateStudentRequest =
            serde_json::from_str(r#"{"rollNo": 1, "name": "A", "classId": 5}"#).unwrap();
        assert_eq!(req.roll_no, 1);
        assert_eq!(req.class_id, 5);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_student_only_checks_present_fields() {
        let req = UpdateStudentRequest {
            name: Some("Rahul Kumar".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_ok());

        let req = UpdateStudentRequest {
            name: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err().field, "name");
    }
}
