//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use lazypath_core::config::Config;
use lazypath_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("lazypath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths over weighted graphs.");
        println!();
        println!("Run `lazypath --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route(args) => commands::route::execute(ctx, args),
            Commands::Demo(args) => commands::demo::execute(ctx, args),
        }
    }
}
