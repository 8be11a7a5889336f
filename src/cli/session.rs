use std::io::{BufRead, Write};
use anyhow::Result;
use crate::cli::command::{Command, HELP_TEXT};
use crate::cli::console::Console;
use crate::cli::error::{parse_position, Position};
use crate::cli::output::Tone;
use crate::db::Store;
use crate::models::{DisplayMap, TaskName};

pub const WELCOME: &str = "Welcome to your To-Do List! Type 'help' for commands";
pub const FAREWELL: &str = "Thanks for using To-Do List! 👋";
const COMMAND_PROMPT: &str = "\n>>> ";

/// What the loop does after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Outcome of asking the user to pick a task from a fresh listing
enum Pick {
    Task { position: Position, id: i64 },
    Stop(Flow),
}

/// The interactive loop: reads commands and runs their handlers against the store
pub struct Session<R, W> {
    store: Store,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, console: Console<R, W>) -> Self {
        Self { store, console }
    }

    /// Ensure the schema exists and report the outcome
    ///
    /// A failure is reported but not returned as an error; the loop can
    /// still start and each storage operation will report its own failure.
    pub fn init_store(&mut self) -> Result<bool> {
        match self.store.ensure_schema() {
            Ok(()) => {
                self.console.say(Tone::Success, "Database initialized successfully. ✅")?;
                Ok(true)
            }
            Err(e) => {
                log::warn!("schema initialization failed for {}: {}", self.store.path().display(), e);
                self.console.say(Tone::Error, &format!("Error initializing database: {} ⛔", e))?;
                Ok(false)
            }
        }
    }

    /// Run until quit or end of input
    pub fn run(&mut self) -> Result<()> {
        log::info!("session started");
        self.console.clear_screen()?;
        self.console.say(Tone::Heading, WELCOME)?;

        loop {
            let flow = match self.console.ask(COMMAND_PROMPT)? {
                None => Flow::Quit,
                Some(token) => match Command::parse(&token) {
                    Some(command) => self.execute(command)?,
                    None => {
                        log::debug!("unknown command {:?}", token);
                        self.console.clear_screen()?;
                        self.console.say(Tone::Error, "Invalid command. Type 'help' for commands. ❓")?;
                        Flow::Continue
                    }
                },
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.console.clear_screen()?;
        self.console.say(Tone::Heading, FAREWELL)?;
        log::info!("session ended");
        Ok(())
    }

    /// Run one command's handler
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add => self.add(),
            Command::Remove => self.remove(),
            Command::List => self.list().map(|_| Flow::Continue),
            Command::Toggle => self.toggle(),
            Command::Quit => Ok(Flow::Quit),
            Command::Help => self.help(),
        }
    }

    fn add(&mut self) -> Result<Flow> {
        self.console.clear_screen()?;
        self.console.say(Tone::Heading, "Add a New Task")?;

        let Some(raw) = self.console.ask("Task name: ")? else {
            return Ok(Flow::Quit);
        };
        let name = match TaskName::parse(&raw) {
            Ok(name) => name,
            Err(e) => {
                self.console.say(Tone::Error, &format!("{} ❌", e))?;
                return Ok(Flow::Continue);
            }
        };

        let Some(completed) = self.console.ask_yes_no("Is task completed? (y/n): ")? else {
            return Ok(Flow::Quit);
        };

        match self.store.insert(&name, completed) {
            Ok(_) => self
                .console
                .say(Tone::Success, &format!("Task '{}' added successfully! ✨", name))?,
            Err(e) => self.console.say(Tone::Error, &format!("Error adding task: {} ⛔", e))?,
        }
        Ok(Flow::Continue)
    }

    /// Render the task list and return the mapping for what was shown
    ///
    /// Returns `None` when the store could not be read; the error has
    /// already been reported.
    pub fn list(&mut self) -> Result<Option<DisplayMap>> {
        self.console.clear_screen()?;

        let tasks = match self.store.list_all() {
            Ok(tasks) => tasks,
            Err(e) => {
                self.console.say(Tone::Error, &format!("Error listing tasks: {} ⛔", e))?;
                return Ok(None);
            }
        };

        if tasks.is_empty() {
            self.console.say(Tone::Info, "No tasks found. Add some tasks! 📝")?;
            return Ok(Some(DisplayMap::default()));
        }

        self.console.say(Tone::Heading, "--- Task List ---")?;
        for (i, task) in tasks.iter().enumerate() {
            let line = format!("{}. {} [{}]", i + 1, task.name, task.status_label());
            self.console.say(Tone::Info, &line)?;
        }
        self.console.say(Tone::Heading, "----------------")?;

        let map = DisplayMap::from_tasks(&tasks);
        log::debug!("listed {} tasks", map.len());
        Ok(Some(map))
    }

    /// Show a fresh list and read a task number from the user
    fn pick_task(&mut self, verb: &str) -> Result<Pick> {
        self.console.clear_screen()?;
        let Some(map) = self.list()? else {
            return Ok(Pick::Stop(Flow::Continue));
        };
        if map.is_empty() {
            self.console.say(Tone::Info, &format!("No tasks to {}. 🤷", verb))?;
            return Ok(Pick::Stop(Flow::Continue));
        }

        let Some(input) = self.console.ask(&format!("Enter task number to {}: ", verb))? else {
            return Ok(Pick::Stop(Flow::Quit));
        };
        let position = match parse_position(&input) {
            Ok(position) => position,
            Err(e) => {
                log::debug!("{}", e);
                self.console.say(Tone::Error, "Please enter a valid number. 🔢")?;
                return Ok(Pick::Stop(Flow::Continue));
            }
        };
        let id = match position {
            Position::Number(n) => map.resolve(n),
            Position::OutOfRange(_) => None,
        };
        match id {
            Some(id) => Ok(Pick::Task { position, id }),
            None => {
                self.console.say(Tone::Error, &format!("No task with number {}. 🤔", position))?;
                Ok(Pick::Stop(Flow::Continue))
            }
        }
    }

    fn remove(&mut self) -> Result<Flow> {
        let (position, id) = match self.pick_task("remove")? {
            Pick::Task { position, id } => (position, id),
            Pick::Stop(flow) => return Ok(flow),
        };

        let name = match self.store.get_name(id) {
            Ok(name) => name,
            Err(e) if e.is_not_found() => {
                self.console.say(Tone::Error, &format!("No task with number {}. 🤔", position))?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                self.console.say(Tone::Error, &format!("Error removing task: {} ⛔", e))?;
                return Ok(Flow::Continue);
            }
        };

        let Some(confirm) = self.console.ask(&format!("Delete '{}'? (y/n): ", name))? else {
            return Ok(Flow::Quit);
        };
        if confirm.trim().to_lowercase() != "y" {
            self.console.say(Tone::Info, "Deletion cancelled. 😊")?;
            return Ok(Flow::Continue);
        }

        match self.store.delete(id) {
            Ok(true) => self
                .console
                .say(Tone::Success, &format!("Task '{}' deleted successfully! 🗑️", name))?,
            Ok(false) => self.console.say(Tone::Error, "Failed to delete task. 🤔")?,
            Err(e) => self.console.say(Tone::Error, &format!("Error removing task: {} ⛔", e))?,
        }
        Ok(Flow::Continue)
    }

    fn toggle(&mut self) -> Result<Flow> {
        let id = match self.pick_task("toggle")? {
            Pick::Task { id, .. } => id,
            Pick::Stop(flow) => return Ok(flow),
        };

        let Some(completed) = self.console.ask_yes_no("Set as completed? (y/n): ")? else {
            return Ok(Flow::Quit);
        };

        match self.store.set_completed(id, completed) {
            Ok(true) => {
                let status = if completed { "completed" } else { "pending" };
                self.console.say(Tone::Success, &format!("Task set to {}! ✅🔄", status))?;
            }
            Ok(false) => self
                .console
                .say(Tone::Info, "Task status unchanged (already in that state). 🤷")?,
            Err(e) => self.console.say(Tone::Error, &format!("Error updating task: {} ⛔", e))?,
        }
        Ok(Flow::Continue)
    }

    fn help(&mut self) -> Result<Flow> {
        self.console.clear_screen()?;
        self.console.say(Tone::Heading, "Available Commands")?;
        self.console.print(HELP_TEXT)?;
        Ok(Flow::Continue)
    }
}
