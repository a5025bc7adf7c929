//! Stateful controller for the todo collection.
//!
//! # Design
//! `TodoController` owns the client-side cache of the remote collection plus
//! the pending input buffer, and drives the wire layer through a `Transport`.
//! Every mutation awaits the server's response before refetching the full
//! collection, so the cache is only ever replaced with acknowledged state.
//! Derived views (completed subsequence, total count) are computed on read
//! rather than stored.
//!
//! Each operation returns a `Notice` describing the user-visible outcome;
//! rendering (toast, terminal line) is up to the caller. Confirmation
//! prompts are injected via `Prompter` so the decision of *whether* to
//! prompt stays in the controller.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::http::Transport;
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// User-visible outcome of a controller operation.
///
/// Levels mirror the usual toast taxonomy: `Success` and `Error` for
/// settled operations, `Warn` for rejected preconditions, `Info` for
/// aborted or no-op outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
    Warn(String),
    Info(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) | Notice::Warn(m) | Notice::Info(m) => m,
        }
    }
}

/// Asks the user to confirm a destructive operation.
pub trait Prompter {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Owns the cached todo list and performs the five operations against the
/// remote collection resource.
pub struct TodoController<T: Transport> {
    client: TodoClient,
    transport: T,
    todos: Vec<Todo>,
    name: String,
}

impl<T: Transport> TodoController<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
            todos: Vec::new(),
            name: String::new(),
        }
    }

    /// The cached collection, in server order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Subsequence of the cache with `completed == true`, computed on read.
    pub fn completed(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(|t| t.completed)
    }

    pub fn total(&self) -> usize {
        self.todos.len()
    }

    /// Pending input buffer for the add form.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Fetch the entire collection and replace the cache.
    ///
    /// Failures are logged and swallowed; the stale cache persists so the
    /// user keeps whatever state was last acknowledged.
    pub fn load(&mut self) {
        let result = self
            .transport
            .execute(self.client.build_list())
            .and_then(|resp| self.client.parse_list(resp));
        match result {
            Ok(todos) => {
                debug!(count = todos.len(), "collection loaded");
                self.todos = todos;
            }
            Err(e) => warn!(error = %e, "failed to load todos, keeping cached state"),
        }
    }

    /// Create a todo from the input buffer.
    ///
    /// Empty or whitespace-only input is rejected before any network call.
    /// The buffer is cleared only after the server acknowledges the create.
    pub fn add(&mut self) -> Notice {
        if self.name.trim().is_empty() {
            return Notice::Error("Empty field submissions not allowed!".to_string());
        }
        let input = CreateTodo {
            name: self.name.trim().to_string(),
        };
        let result = self
            .client
            .build_create(&input)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.client.parse_create(resp));
        match result {
            Ok(created) => {
                debug!(id = created.id, "todo created");
                self.name.clear();
                self.load();
                Notice::Success("Todo successfully added.".to_string())
            }
            Err(e) => {
                warn!(error = %e, "create failed");
                Notice::Error(format!("Could not add todo: {e}"))
            }
        }
    }

    /// Flip the completion flag of the todo with the given id.
    ///
    /// The notice names the state the task just entered.
    pub fn toggle(&mut self, id: u64) -> Notice {
        let Some(todo) = self.todos.iter().find(|t| t.id == id) else {
            return Notice::Error(format!("No todo with id {id}."));
        };
        let input = UpdateTodo {
            id,
            name: todo.name.clone(),
            completed: !todo.completed,
        };
        let result = self
            .client
            .build_update(&input)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.client.parse_update(resp));
        match result {
            Ok(updated) => {
                self.load();
                let state = if updated.completed {
                    "completed"
                } else {
                    "uncompleted"
                };
                Notice::Success(format!("{} marked as {state}.", updated.name))
            }
            Err(e) => {
                warn!(error = %e, id, "toggle failed");
                Notice::Error(format!("Could not update todo: {e}"))
            }
        }
    }

    /// Delete a single todo after confirmation.
    pub fn delete(&mut self, id: u64, prompter: &mut dyn Prompter) -> Notice {
        if !prompter.confirm("Are you sure you want to delete this todo?") {
            return Notice::Info("Delete operation aborted.".to_string());
        }
        let result = self
            .transport
            .execute(self.client.build_delete(id))
            .and_then(|resp| self.client.parse_delete(resp));
        match result {
            Ok(()) => {
                self.load();
                Notice::Success("Todo successfully deleted.".to_string())
            }
            Err(e) => {
                warn!(error = %e, id, "delete failed");
                Notice::Error(format!("Could not delete todo: {e}"))
            }
        }
    }

    /// Delete every completed todo after a single confirmation.
    ///
    /// With nothing to delete no prompt is shown at all. Deletes run
    /// sequentially; failures are counted and reported after the single
    /// refetch.
    pub fn batch_delete(&mut self, prompter: &mut dyn Prompter) -> Notice {
        if self.todos.is_empty() {
            return Notice::Info("No todo added. Please add todos.".to_string());
        }
        let ids: Vec<u64> = self.completed().map(|t| t.id).collect();
        if ids.is_empty() {
            return Notice::Warn("Select at least one todo.".to_string());
        }
        if !prompter.confirm("Are you sure you want to delete all selected todos?") {
            return Notice::Info("Batch delete operation aborted.".to_string());
        }
        let mut failed = 0usize;
        for id in ids {
            let result = self
                .transport
                .execute(self.client.build_delete(id))
                .and_then(|resp| self.client.parse_delete(resp));
            if let Err(e) = result {
                warn!(error = %e, id, "batch delete failed for todo");
                failed += 1;
            }
        }
        self.load();
        if failed == 0 {
            Notice::Success("Todos successfully deleted.".to_string())
        } else {
            Notice::Error(format!("{failed} todo(s) could not be deleted."))
        }
    }
}
