//! Shell core functionality
//!
//! Reads command lines, dispatches them to the file manager and writes the
//! responses back, one command at a time.

use log::{info, warn};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::AppConfig;
use crate::manager::FileManager;
use crate::protocol::{CommandStatus, handle_command, parse_command};
use crate::utils::logging::log_command;
use crate::utils::validation::{is_valid_input, sanitize_input};

/// Interactive session driving one `FileManager`.
pub struct Shell<'a> {
    manager: FileManager<'a>,
    config: AppConfig,
}

impl<'a> Shell<'a> {
    pub fn new(manager: FileManager<'a>, config: &AppConfig) -> Self {
        Self {
            manager,
            config: config.clone(),
        }
    }

    pub fn manager(&self) -> &FileManager<'a> {
        &self.manager
    }

    /// Runs the read-dispatch-write loop until QUIT or end of input.
    ///
    /// - Writes the configured prompt before each line.
    /// - Rejects lines longer than `max_command_length`.
    /// - Skips blank lines and lines with control characters.
    pub async fn run<R, W>(&mut self, mut reader: R, mut writer: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();

        loop {
            writer.write_all(self.config.prompt.as_bytes()).await?;
            writer.flush().await?;

            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                info!("End of input, closing shell");
                break;
            }

            // Enforce command length limit
            if line.len() > self.config.max_command_length {
                warn!("Rejected command of {} bytes", line.len());
                writer.write_all(b"Command too long\n").await?;
                continue;
            }

            if !is_valid_input(&line) {
                continue;
            }

            if !self.execute(&line, &mut writer).await? {
                info!("Shell exit requested");
                break;
            }
        }

        writer.flush().await
    }

    /// Executes one command line and writes its response.
    ///
    /// Returns `false` once the command asks the shell to exit.
    pub async fn execute<W>(&mut self, line: &str, writer: &mut W) -> io::Result<bool>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let input = sanitize_input(line);
        log_command("shell", &input);

        let command = parse_command(&input);
        let result = handle_command(&mut self.manager, &command);

        if let Some(message) = &result.message {
            writer.write_all(message.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        writer.flush().await?;

        Ok(result.status != CommandStatus::Exit)
    }
}
