//! Terminal front end for the todo service.
//!
//! Drives `TodoController` over real HTTP: add a task, toggle or delete one
//! by id, clear every completed task, and show the completed/total counter —
//! the same surface the single-page UI exposes.

mod transport;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use todolist_core::{Notice, Prompter, TodoController};
use tracing_subscriber::EnvFilter;

use crate::transport::UreqTransport;

#[derive(Parser)]
#[command(name = "todolist", about = "Todo list client")]
struct Cli {
    /// Base URL of the todo service.
    #[arg(long, env = "TODO_URL", default_value = "http://127.0.0.1:3000")]
    url: String,

    /// Answer yes to confirmation prompts.
    #[arg(long)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show all todos and the completed/total counter.
    List,
    /// Add a new todo.
    Add { name: String },
    /// Flip a todo's completion flag.
    Toggle { id: u64 },
    /// Delete a single todo.
    Delete { id: u64 },
    /// Delete every completed todo.
    ClearDone,
}

/// Reads a y/N answer from stdin.
struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}

struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

fn print_list(controller: &TodoController<UreqTransport>) {
    for todo in controller.todos() {
        let mark = if todo.completed { "x" } else { " " };
        println!("[{mark}] {:>3}  {}", todo.id, todo.name);
    }
    println!("{}/{}", controller.completed().count(), controller.total());
}

fn report(notice: &Notice) -> ExitCode {
    match notice {
        Notice::Success(m) => {
            println!("{m}");
            ExitCode::SUCCESS
        }
        Notice::Info(m) => {
            println!("{m}");
            ExitCode::SUCCESS
        }
        Notice::Warn(m) => {
            eprintln!("warning: {m}");
            ExitCode::SUCCESS
        }
        Notice::Error(m) => {
            eprintln!("error: {m}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut controller = TodoController::new(&cli.url, UreqTransport::new());
    controller.load();

    let mut stdin = StdinPrompter;
    let mut yes = AssumeYes;
    let prompter: &mut dyn Prompter = if cli.yes { &mut yes } else { &mut stdin };

    let notice = match cli.command {
        Command::List => {
            print_list(&controller);
            return ExitCode::SUCCESS;
        }
        Command::Add { name } => {
            controller.set_name(name);
            controller.add()
        }
        Command::Toggle { id } => controller.toggle(id),
        Command::Delete { id } => controller.delete(id, prompter),
        Command::ClearDone => controller.batch_delete(prompter),
    };

    let code = report(&notice);
    print_list(&controller);
    code
}
