//! Stateless HTTP request builder and response parser for the todo resource.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each wire operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The collection lives at the base URL itself and items at `/{id}` — there
//! is no single-item GET; lookups happen client-side against the cached list.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Synchronous, stateless client for the todo collection resource.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. A `Transport` executes the round-trip between
/// `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update(&self, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialize(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/{}", self.base_url, input.id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{}", self.base_url, id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_produces_correct_request() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_produces_correct_request() {
        let input = CreateTodo {
            name: "buy milk".to_string(),
        };
        let req = client().build_create(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "buy milk");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_produces_correct_request() {
        let input = UpdateTodo {
            id: 7,
            name: "buy milk".to_string(),
            completed: true,
        };
        let req = client().build_update(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 7);
        assert_eq!(body["name"], "buy milk");
        assert_eq!(body["completed"], true);
    }

    #[test]
    fn build_delete_produces_correct_request() {
        let req = client().build_delete(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"id":1,"name":"buy milk","completed":false}]"#.to_string(),
        };
        let todos = client().parse_list(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].name, "buy milk");
        assert_eq!(todos[0].id, 1);
    }

    #[test]
    fn parse_create_success() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"id":1,"name":"new","completed":false}"#.to_string(),
        };
        let todo = client().parse_create(response).unwrap();
        assert_eq!(todo.name, "new");
    }

    #[test]
    fn parse_create_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_create(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"id":1,"name":"buy milk","completed":true}"#.to_string(),
        };
        let todo = client().parse_update(response).unwrap();
        assert!(todo.completed);
    }

    #[test]
    fn parse_update_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_update(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_success() {
        let response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(client().parse_delete(response).is_ok());
    }

    #[test]
    fn parse_delete_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_delete(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list();
        assert_eq!(req.path, "http://localhost:3000/");
    }

    #[test]
    fn parse_list_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialize(_)));
    }
}
