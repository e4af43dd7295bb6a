//! Demonstration script
//!
//! A fixed sequence of commands walking through navigation and every CRUD
//! operation, run through the regular shell dispatcher.

use tokio::io::{self, AsyncWrite, AsyncWriteExt};

use crate::shell::Shell;

/// Command lines executed by `run_demo`, in order
pub const DEMO_SCRIPT: &[&str] = &[
    "LIST",
    "MKDIR aaa",
    "LIST",
    "CD aaa",
    "LIST",
    "MKDIR bbb",
    "CDA aaa/bbb",
    "PWD",
    "CD ../..",
    "PWD",
    "LIST",
    "TOUCH yoyo huhu",
    "LIST",
    "CAT yoyo",
    "WRITE yoyo huuuuuuuuuuuuuuuuuuuuu",
    "CAT yoyo",
    "LIST",
    "RM yoyo",
    "LIST",
    "MKDIR ccc",
    "RMDIR ccc",
];

/// Runs the demo script, echoing each command before its response.
pub async fn run_demo<W>(shell: &mut Shell<'_>, writer: &mut W) -> io::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    for line in DEMO_SCRIPT {
        writer.write_all(format!("$ {}\n", line).as_bytes()).await?;
        if !shell.execute(line, writer).await? {
            break;
        }
    }
    writer.write_all(b"=====\n").await?;
    writer.flush().await
}
