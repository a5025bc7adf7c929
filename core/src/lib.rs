//! Client library for the todo collection service.
//!
//! # Overview
//! The wire layer builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network (host-does-IO pattern); a `Transport`
//! implementation supplied by the host executes the actual round-trips.
//! On top of it, `TodoController` owns the client-side cache of the
//! collection and performs the five user-facing operations: load, add,
//! toggle, delete, batch-delete.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url` — and each wire
//!   operation is split into `build_*` / `parse_*`, so the I/O boundary is
//!   explicit.
//! - `TodoController` replaces its cache only with server-acknowledged
//!   state: every mutation awaits its response, then refetches the full
//!   collection. Derived views are computed on read.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use controller::{Notice, Prompter, TodoController};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{CreateTodo, Todo, UpdateTodo};
