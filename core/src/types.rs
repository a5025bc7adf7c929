//! Domain DTOs for the todo collection resource.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client surface is not coupled to Axum internals. Integration tests
//! catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the server.
///
/// Identifiers are assigned by the server as a sequential counter; the
/// client never invents one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub name: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. The server assigns the id and
/// defaults `completed` to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub name: String,
}

/// Request payload for updating an existing todo. The full record is sent;
/// toggling flips `completed` and echoes the rest unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub id: u64,
    pub name: String,
    pub completed: bool,
}
