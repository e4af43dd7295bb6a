//! Command handlers module for the file tree shell.
//!
//! This module defines one handler per shell command. Handlers run the
//! matching `FileManager` operation, report failures through the error
//! handlers and turn every outcome into a `CommandResult`; no error escapes
//! to the caller.

use crate::error::FileTreeError;
use crate::error::handlers::handle_error;
use crate::manager::FileManager;
use crate::protocol::responses::{
    HELP_TEXT, format_error, format_file_view, format_folder_listing, format_working_directory,
};
use crate::protocol::{Command, CommandResult, CommandStatus};

/// Dispatches a parsed command to its corresponding handler.
///
/// # Arguments
///
/// * `manager` - Session the command runs against.
/// * `command` - Reference to the parsed command enum.
///
/// # Returns
///
/// * `CommandResult` - Result of the command execution, including status and message.
pub fn handle_command(manager: &mut FileManager<'_>, command: &Command) -> CommandResult {
    match command {
        Command::Quit => handle_cmd_quit(),
        Command::Help => CommandResult::success(HELP_TEXT),
        Command::Pwd => handle_cmd_pwd(manager),
        Command::List => handle_cmd_list(manager),
        Command::Cd(path) => handle_cmd_cd(manager, path, true),
        Command::CdAbsolute(path) => handle_cmd_cd(manager, path, false),
        Command::Mkdir(name) => handle_cmd_mkdir(manager, name),
        Command::Rmdir(name) => handle_cmd_rmdir(manager, name),
        Command::Touch(name, content) => handle_cmd_touch(manager, name, content),
        Command::Write(name, content) => handle_cmd_write(manager, name, content),
        Command::Cat(name) => handle_cmd_cat(manager, name),
        Command::Rm(name) => handle_cmd_rm(manager, name),
        Command::Unknown(raw) => handle_cmd_unknown(raw),
    }
}

/// Logs a failed operation and builds the failure response.
fn report_failure(context: &str, err: impl Into<FileTreeError>) -> CommandResult {
    let err = err.into();
    handle_error(context, &err);

    let reason = err.to_string();
    let message = format_error(context, &reason);
    CommandResult::failure(reason, message)
}

fn handle_cmd_quit() -> CommandResult {
    CommandResult {
        status: CommandStatus::Exit,
        message: Some("Goodbye".into()),
    }
}

fn handle_cmd_pwd(manager: &FileManager<'_>) -> CommandResult {
    let pwd = manager.working_directory();
    CommandResult::success(format_working_directory(&pwd.path))
}

fn handle_cmd_list(manager: &FileManager<'_>) -> CommandResult {
    match manager.current_folder_contents() {
        Ok(listing) => CommandResult::success(format_folder_listing(&listing)),
        Err(e) => report_failure("Error while listing folder", e),
    }
}

/// Handles CD and CDA: the session is left untouched when the path fails.
fn handle_cmd_cd(manager: &mut FileManager<'_>, path: &str, relative: bool) -> CommandResult {
    match manager.change_directory(path, relative) {
        Ok(cwd) => CommandResult::success(format_working_directory(&cwd.path)),
        Err(e) => report_failure("Couldn't change directory", e),
    }
}

fn handle_cmd_mkdir(manager: &mut FileManager<'_>, name: &str) -> CommandResult {
    match manager.create_folder(name) {
        Ok(created) => CommandResult::success(format!("Created folder {}", created.full_path)),
        Err(e) => report_failure("Error while creating folder", e),
    }
}

fn handle_cmd_rmdir(manager: &mut FileManager<'_>, name: &str) -> CommandResult {
    match manager.delete_folder(name) {
        Ok(deleted) => CommandResult::success(format!(
            "Deleted folder {} ({} folders, {} files removed)",
            deleted.full_path, deleted.removed_folders, deleted.removed_files
        )),
        Err(e) => report_failure("Error while deleting folder", e),
    }
}

fn handle_cmd_touch(manager: &mut FileManager<'_>, name: &str, content: &str) -> CommandResult {
    match manager.create_file(name, content) {
        Ok(created) => CommandResult::success(format!("Created file {}", created.full_path)),
        Err(e) => report_failure("Error while creating file", e),
    }
}

fn handle_cmd_write(manager: &mut FileManager<'_>, name: &str, content: &str) -> CommandResult {
    match manager.update_file(name, content) {
        Ok(updated) => CommandResult::success(format!(
            "Updated file {} ({} bytes)",
            updated.full_path, updated.size
        )),
        Err(e) => report_failure("Error while updating file", e),
    }
}

fn handle_cmd_cat(manager: &FileManager<'_>, name: &str) -> CommandResult {
    match manager.file_contents(name) {
        Ok(view) => CommandResult::success(format_file_view(&view)),
        Err(e) => report_failure("Error while printing file", e),
    }
}

fn handle_cmd_rm(manager: &mut FileManager<'_>, name: &str) -> CommandResult {
    match manager.delete_file(name) {
        Ok(deleted) => CommandResult::success(format!("Deleted file {}", deleted.full_path)),
        Err(e) => report_failure("Error while deleting file", e),
    }
}

fn handle_cmd_unknown(raw: &str) -> CommandResult {
    CommandResult::failure(
        "Unknown command",
        format!("Unknown command or missing argument: {} (try HELP)", raw),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::parse_command;
    use crate::storage::FileStorage;

    fn run(manager: &mut FileManager<'_>, line: &str) -> CommandResult {
        handle_command(manager, &parse_command(line))
    }

    #[test]
    fn test_failures_are_reported_not_raised() {
        let mut storage = FileStorage::new();
        let mut manager = FileManager::new(&mut storage);

        let result = run(&mut manager, "CD nowhere");
        assert!(matches!(result.status, CommandStatus::Failure(_)));
        assert_eq!(
            result.message.as_deref(),
            Some(
                "Couldn't change directory: Navigate error: Destination folder can't be found: nowhere"
            )
        );
        assert_eq!(manager.current_path(), "/");
    }

    #[test]
    fn test_mkdir_cd_pwd() {
        let mut storage = FileStorage::new();
        let mut manager = FileManager::new(&mut storage);

        assert!(run(&mut manager, "MKDIR aaa").is_success());
        assert!(run(&mut manager, "CD aaa").is_success());
        let pwd = run(&mut manager, "PWD");
        assert_eq!(pwd.message.as_deref(), Some("Current Working Directory: /aaa"));
    }

    #[test]
    fn test_quit_requests_exit() {
        let mut storage = FileStorage::new();
        let mut manager = FileManager::new(&mut storage);
        assert_eq!(run(&mut manager, "QUIT").status, CommandStatus::Exit);
    }

    #[test]
    fn test_unknown_command() {
        let mut storage = FileStorage::new();
        let mut manager = FileManager::new(&mut storage);
        let result = run(&mut manager, "FORMAT c:");
        assert_eq!(result.status, CommandStatus::Failure("Unknown command".into()));
    }
}
