//! Read-evaluate-print loop around a [`Game`].
//!
//! The loop is generic over its input and output so the binary can drive it
//! from stdin or a script file, and tests can drive it from byte buffers.

use anyhow::{Context, Result};
use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::GameConfig;
use crate::game::Game;
use crate::logutil::escape_log;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed the exit keyword.
    ExitKeyword,
    /// Input ran out.
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    /// Lines handed to the dispatcher (the exit keyword is not counted).
    pub commands: usize,
}

/// Options for one run of the loop.
#[derive(Debug, Clone)]
pub struct Shell {
    config: GameConfig,
    /// Write each input line back after the prompt, as a terminal would.
    echo_input: bool,
}

impl Shell {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            echo_input: false,
        }
    }

    pub fn with_echo(mut self, echo_input: bool) -> Self {
        self.echo_input = echo_input;
        self
    }

    /// Run until the exit keyword or end of input. Only I/O failures are errors;
    /// a line that is not valid UTF-8 is still handed to the game.
    pub async fn run<R, W>(&self, game: &mut Game, mut input: R, output: &mut W) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if self.config.show_intro {
            write_line(output, &game.look_around()).await?;
        }

        let mut commands = 0;
        let mut buf = Vec::new();
        loop {
            output.write_all(self.config.prompt.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .await
                .context("failed to read input")?;
            if read == 0 {
                info!("Session ended: end of input after {} commands", commands);
                return Ok(SessionSummary {
                    end: SessionEnd::EndOfInput,
                    commands,
                });
            }

            // Undecodable bytes become U+FFFD and reach the dispatcher as an unknown command.
            let line = String::from_utf8_lossy(&buf);
            let command = strip_line_ending(&line);
            if self.echo_input {
                write_line(output, command).await?;
            }

            if command == self.config.exit_keyword {
                write_line(output, &self.config.farewell).await?;
                info!("Session ended: exit keyword after {} commands", commands);
                return Ok(SessionSummary {
                    end: SessionEnd::ExitKeyword,
                    commands,
                });
            }

            let reply = game.process_command(command);
            commands += 1;
            debug!("Reply: {}", escape_log(&reply));
            write_line(output, &reply).await?;
        }
    }
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

/// Drop one trailing `\n` or `\r\n`; everything else is part of the command.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
