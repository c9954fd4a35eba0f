//! Task Endpoints

use async_trait::async_trait;

use super::{to_body, HttpApi, Method, TaskApi, Transport};
use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskPatch};

/// Decode a page of tasks; any non-array JSON body is an empty page
pub fn decode_task_page(body: &str) -> Result<Vec<Task>, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(ApiError::decode)?;
    if !value.is_array() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(ApiError::decode)
}

#[async_trait(?Send)]
impl<T: Transport> TaskApi for HttpApi<T> {
    async fn list_tasks(&self, skip: u32, limit: u32) -> Result<Vec<Task>, ApiError> {
        let path = format!("/tasks?skip={}&limit={}", skip, limit);
        let response = self.execute(self.authorized(Method::Get, &path, None)).await?;
        decode_task_page(&response.body)
    }

    async fn create_task(&self, title: &str) -> Result<Task, ApiError> {
        let body = to_body(&NewTask { title })?;
        let response = self.execute(self.authorized(Method::Post, "/tasks", body)).await?;
        serde_json::from_str(&response.body).map_err(ApiError::decode)
    }

    async fn update_task(&self, id: i64, completed: bool) -> Result<Task, ApiError> {
        let body = to_body(&TaskPatch { completed })?;
        let path = format!("/tasks/{}", id);
        let response = self.execute(self.authorized(Method::Patch, &path, body)).await?;
        serde_json::from_str(&response.body).map_err(ApiError::decode)
    }

    async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/tasks/{}", id);
        self.execute(self.authorized(Method::Delete, &path, None)).await?;
        Ok(())
    }
}
