//! Remote Task Service Bindings
//!
//! REST wrappers over the fixed external contract of the placeholder todo
//! service. Responses are only consulted for the list body, the create
//! echo's numeric id, and the success/failure of everything else.

use serde::Serialize;

use crate::models::RemoteTask;

const API_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// Page loads fetch only the first few remote records.
pub const FETCH_LIMIT: u32 = 5;

#[derive(Serialize)]
struct CreateTaskBody<'a> {
    title: &'a str,
    completed: bool,
}

#[derive(Serialize)]
struct UpdateTaskBody<'a> {
    id: u64,
    title: &'a str,
    completed: bool,
}

pub async fn list_tasks() -> Result<Vec<RemoteTask>, String> {
    let response = reqwest::Client::new()
        .get(format!("{API_URL}?_limit={FETCH_LIMIT}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("list tasks: {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn create_task(title: &str, completed: bool) -> Result<RemoteTask, String> {
    let response = reqwest::Client::new()
        .post(API_URL)
        .json(&CreateTaskBody { title, completed })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("create task: {}", response.status()));
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn update_task(remote_id: u64, title: &str, completed: bool) -> Result<(), String> {
    let response = reqwest::Client::new()
        .put(format!("{API_URL}/{remote_id}"))
        .json(&UpdateTaskBody {
            id: remote_id,
            title,
            completed,
        })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("update task: {}", response.status()));
    }
    Ok(())
}

pub async fn delete_task(remote_id: u64) -> Result<(), String> {
    let response = reqwest::Client::new()
        .delete(format!("{API_URL}/{remote_id}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("delete task: {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_body_shape() {
        let body = CreateTaskBody {
            title: "Buy milk",
            completed: false,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"title": "Buy milk", "completed": false})
        );
    }

    #[test]
    fn test_update_body_is_full_record() {
        let body = UpdateTaskBody {
            id: 7,
            title: "A",
            completed: true,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"id": 7, "title": "A", "completed": true})
        );
    }
}
