//! Admin-module CRUD endpoints: teachers, students, classes, rooms.
//!
//! DESIGN
//! ======
//! Every resource follows the same list/get/create/update/delete shape, so
//! the typed wrappers stay thin over the shared transport verbs. List
//! filtering, paging and sorting travel as query parameters; empty filters
//! are omitted from the URL.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde_json::Value;

use super::api::{delete_json, get_json, post_json, put_json, with_query};
use super::error::ApiError;
use super::types::{ClassList, ClassRecord, MessageData, Room, RoomList, StudentList, StudentRecord, TeacherList, TeacherRecord};

/// Query parameters shared by every list endpoint.
#[derive(Clone, Debug)]
pub struct ListParams {
    pub page: u64,
    pub limit: u64,
    pub search: String,
    pub status: String,
}

impl Default for ListParams {
    fn default() -> Self {
        Self { page: 1, limit: 20, search: String::new(), status: String::new() }
    }
}

impl ListParams {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("search", self.search.trim().to_owned()),
            ("status", self.status.clone()),
        ]
    }
}

pub async fn list_teachers(token: Option<&str>, params: &ListParams) -> Result<TeacherList, ApiError> {
    get_json(&with_query("/teachers", &params.to_query()), token).await
}

pub async fn create_teacher(token: Option<&str>, payload: &Value) -> Result<TeacherRecord, ApiError> {
    post_json("/teachers", token, payload).await
}

pub async fn update_teacher(token: Option<&str>, id: &str, payload: &Value) -> Result<TeacherRecord, ApiError> {
    put_json(&format!("/teachers/{id}"), token, payload).await
}

pub async fn delete_teacher(token: Option<&str>, id: &str) -> Result<MessageData, ApiError> {
    delete_json(&format!("/teachers/{id}"), token).await
}

pub async fn list_students(token: Option<&str>, params: &ListParams) -> Result<StudentList, ApiError> {
    get_json(&with_query("/students", &params.to_query()), token).await
}

pub async fn create_student(token: Option<&str>, payload: &Value) -> Result<StudentRecord, ApiError> {
    post_json("/students", token, payload).await
}

pub async fn update_student(token: Option<&str>, id: &str, payload: &Value) -> Result<StudentRecord, ApiError> {
    put_json(&format!("/students/{id}"), token, payload).await
}

pub async fn delete_student(token: Option<&str>, id: &str) -> Result<MessageData, ApiError> {
    delete_json(&format!("/students/{id}"), token).await
}

pub async fn list_classes(token: Option<&str>, params: &ListParams) -> Result<ClassList, ApiError> {
    get_json(&with_query("/classes", &params.to_query()), token).await
}

pub async fn create_class(token: Option<&str>, payload: &Value) -> Result<ClassRecord, ApiError> {
    post_json("/classes", token, payload).await
}

pub async fn update_class(token: Option<&str>, id: &str, payload: &Value) -> Result<ClassRecord, ApiError> {
    put_json(&format!("/classes/{id}"), token, payload).await
}

pub async fn delete_class(token: Option<&str>, id: &str) -> Result<MessageData, ApiError> {
    delete_json(&format!("/classes/{id}"), token).await
}

pub async fn list_rooms(token: Option<&str>, params: &ListParams) -> Result<RoomList, ApiError> {
    get_json(&with_query("/rooms", &params.to_query()), token).await
}

pub async fn create_room(token: Option<&str>, payload: &Value) -> Result<Room, ApiError> {
    post_json("/rooms", token, payload).await
}

pub async fn update_room(token: Option<&str>, id: &str, payload: &Value) -> Result<Room, ApiError> {
    put_json(&format!("/rooms/{id}"), token, payload).await
}

pub async fn delete_room(token: Option<&str>, id: &str) -> Result<MessageData, ApiError> {
    delete_json(&format!("/rooms/{id}"), token).await
}
