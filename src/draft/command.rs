use crate::error::AppError;

/// One line of input at the interactive draft prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftCommand {
    Add(String),
    Remove(String),
    Clear,
    Search(String),
    ResetSearch,
    Explain(String),
    Team,
    List,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <hero>        pick a hero (max 5)
  remove <hero>     drop a hero from the team
  clear             empty the team
  search <text>     filter candidates by name, role, attribute or position
  reset-search      remove the filter
  explain <hero>    show how a candidate's score is built
  team              show the current team
  list              show ranked candidates
  help              show this help
  quit              leave the draft";

impl DraftCommand {
    /// Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, AppError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let needs_arg = |cmd: fn(String) -> DraftCommand| {
            if rest.is_empty() {
                Err(AppError::InvalidCommand(format!("'{}' needs an argument", word)))
            } else {
                Ok(cmd(rest.to_string()))
            }
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "add" | "pick" => needs_arg(DraftCommand::Add)?,
            "remove" | "rm" => needs_arg(DraftCommand::Remove)?,
            "explain" => needs_arg(DraftCommand::Explain)?,
            "search" | "find" => {
                if rest.is_empty() {
                    DraftCommand::ResetSearch
                } else {
                    DraftCommand::Search(rest.to_string())
                }
            }
            "clear" => DraftCommand::Clear,
            "reset-search" => DraftCommand::ResetSearch,
            "team" => DraftCommand::Team,
            "list" | "ls" => DraftCommand::List,
            "help" | "?" => DraftCommand::Help,
            "quit" | "exit" | "q" => DraftCommand::Quit,
            other => {
                return Err(AppError::InvalidCommand(format!(
                    "unknown command '{}', type 'help'",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}
