use thiserror::Error;

pub const HELP: &str = "\
Commands:
  / <text>, search <text>   search symbols (empty text clears the search)
  toggle <n>                add or remove search result n
  rm <n> [<n>...]           remove watchlist rows
  refresh                   refresh watchlist quotes
  open                      open Yahoo! Finance in the browser
  help                      show this help
  quit                      exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    /// 1-based search result row
    Toggle(usize),
    /// 1-based watchlist rows
    Remove(Vec<usize>),
    Refresh,
    Open,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs at least one row number")]
    MissingRow(&'static str),

    #[error("invalid row number `{0}`")]
    InvalidRow(String),

    #[error("no row {0}")]
    NoSuchRow(usize),

    #[error("no search in progress")]
    NotSearching,

    #[error("command does not change the watchlist")]
    NotAnAction,
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    if let Some(query) = line.strip_prefix('/') {
        return Ok(Command::Search(query.trim().to_string()));
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim()))
        .unwrap_or((line, ""));

    match word.to_ascii_lowercase().as_str() {
        "search" => Ok(Command::Search(rest.to_string())),
        "toggle" => {
            let rows = parse_rows(rest, "toggle")?;
            match rows.as_slice() {
                [row] => Ok(Command::Toggle(*row)),
                _ => Err(CommandError::InvalidRow(rest.to_string())),
            }
        }
        "rm" => Ok(Command::Remove(parse_rows(rest, "rm")?)),
        "refresh" => Ok(Command::Refresh),
        "open" => Ok(Command::Open),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(word.to_string())),
    }
}

fn parse_rows(text: &str, command: &'static str) -> Result<Vec<usize>, CommandError> {
    let rows = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<usize>() {
            Ok(row) if row > 0 => Ok(row),
            _ => Err(CommandError::InvalidRow(part.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if rows.is_empty() {
        return Err(CommandError::MissingRow(command));
    }
    Ok(rows)
}
