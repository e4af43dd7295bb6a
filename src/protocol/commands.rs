//! Module `command`
//!
//! Defines the shell command parsing logic and related data structures
//! used to represent commands, their status and results.

/// Represents a shell command parsed from one input line.
///
/// Commands that require arguments store them as `String` variants.
#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Pwd,
    List,
    Cd(String),            // Change directory relative to the current folder
    CdAbsolute(String),    // Change directory from the root folder
    Mkdir(String),         // Create folder
    Rmdir(String),         // Delete folder and its subtree
    Touch(String, String), // Create file with optional content
    Write(String, String), // Replace file content
    Cat(String),           // Print file
    Rm(String),            // Delete file
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }
}

/// Splits a `name [content]` argument at the first whitespace after the name.
///
/// Everything after that single separator is content, kept verbatim.
fn split_name_and_content(rest: &str) -> (String, String) {
    let rest = rest.trim_start();
    match rest.split_once(char::is_whitespace) {
        Some((name, content)) => (name.to_string(), content.to_string()),
        None => (rest.to_string(), String::new()),
    }
}

/// Parses a raw input line into the `Command` enum.
///
/// Validates required arguments and returns `Unknown` if a known command is misused.
/// Arguments are trimmed, except file content which is taken as typed.
pub fn parse_command(raw: &str) -> Command {
    let line = raw.trim_start().trim_end_matches(['\r', '\n']);
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let cmd = cmd.to_ascii_uppercase();
    let arg = rest.trim();

    match cmd.as_str() {
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        "HELP" => Command::Help,
        "PWD" => Command::Pwd,
        "LIST" | "LS" => Command::List,
        "CD" if !arg.is_empty() => Command::Cd(arg.to_string()),
        "CDA" => Command::CdAbsolute(arg.to_string()),
        "MKDIR" if !arg.is_empty() => Command::Mkdir(arg.to_string()),
        "RMDIR" if !arg.is_empty() => Command::Rmdir(arg.to_string()),
        "TOUCH" if !arg.is_empty() => {
            let (name, content) = split_name_and_content(rest);
            Command::Touch(name, content)
        }
        "WRITE" if !arg.is_empty() => {
            let (name, content) = split_name_and_content(rest);
            Command::Write(name, content)
        }
        "CAT" if !arg.is_empty() => Command::Cat(arg.to_string()),
        "RM" if !arg.is_empty() => Command::Rm(arg.to_string()),
        _ => Command::Unknown(line.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("Q"), Command::Quit);
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("LIST"), Command::List);
        assert_eq!(parse_command("ls"), Command::List);
        assert_eq!(parse_command("PWD"), Command::Pwd);
        assert_eq!(parse_command("HELP"), Command::Help);
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(parse_command("CD aaa/bbb"), Command::Cd("aaa/bbb".to_string()));
        assert_eq!(
            parse_command("CDA aaa/bbb"),
            Command::CdAbsolute("aaa/bbb".to_string())
        );
        assert_eq!(parse_command("CDA"), Command::CdAbsolute(String::new()));
        assert_eq!(parse_command("MKDIR aaa"), Command::Mkdir("aaa".to_string()));
        assert_eq!(parse_command("RMDIR aaa"), Command::Rmdir("aaa".to_string()));
        assert_eq!(parse_command("CAT yoyo"), Command::Cat("yoyo".to_string()));
        assert_eq!(parse_command("RM yoyo"), Command::Rm("yoyo".to_string()));
    }

    #[test]
    fn test_parse_file_content() {
        assert_eq!(
            parse_command("TOUCH yoyo huhu"),
            Command::Touch("yoyo".to_string(), "huhu".to_string())
        );
        assert_eq!(
            parse_command("TOUCH empty.txt"),
            Command::Touch("empty.txt".to_string(), String::new())
        );
        assert_eq!(
            parse_command("WRITE note.md  two  words"),
            Command::Write("note.md".to_string(), " two  words".to_string())
        );
    }

    #[test]
    fn test_parse_content_keeps_whitespace() {
        assert_eq!(
            parse_command("TOUCH f   hi  \r\n"),
            Command::Touch("f".to_string(), "  hi  ".to_string())
        );
        assert_eq!(
            parse_command("WRITE   f\tindented\n"),
            Command::Write("f".to_string(), "indented".to_string())
        );
        assert_eq!(
            parse_command("TOUCH f "),
            Command::Touch("f".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_command("  QUIT  "), Command::Quit);
        assert_eq!(parse_command("PWD    "), Command::Pwd);
        assert_eq!(parse_command("MKDIR  docs  "), Command::Mkdir("docs".to_string()));
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(
            parse_command("INVALID"),
            Command::Unknown("INVALID".to_string())
        );
        assert_eq!(parse_command("CD"), Command::Unknown("CD".to_string()));
        assert_eq!(parse_command("MKDIR"), Command::Unknown("MKDIR".to_string()));
        assert_eq!(parse_command(""), Command::Unknown("".to_string()));
    }
}
