// Command tokens accepted at the `>>>` prompt

/// A command the interactive loop can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    List,
    Toggle,
    Quit,
    Help,
}

/// Token table; short and long aliases map to the same command
pub const COMMAND_TABLE: &[(&str, Command)] = &[
    ("a", Command::Add),
    ("add", Command::Add),
    ("r", Command::Remove),
    ("remove", Command::Remove),
    ("l", Command::List),
    ("list", Command::List),
    ("t", Command::Toggle),
    ("toggle", Command::Toggle),
    ("q", Command::Quit),
    ("quit", Command::Quit),
    ("h", Command::Help),
    ("help", Command::Help),
];

pub const HELP_TEXT: &str = "
    add (a)     - Add a new task
    remove (r)  - Remove a task by number
    list (l)    - List all tasks
    toggle (t)  - Change task completion status
    quit (q)    - Exit the application
    help (h)    - Show this help
";

impl Command {
    /// Resolve a typed token, ignoring case and surrounding whitespace
    pub fn parse(token: &str) -> Option<Command> {
        let token = token.trim().to_lowercase();
        COMMAND_TABLE
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, command)| *command)
    }
}
