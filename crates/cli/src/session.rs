//! Line-oriented interactive session.

use std::io::{BufRead, Write};

use anyhow::Context;

use prodcat_filter::CatalogView;

use crate::command::{Command, HELP};
use crate::render;

/// Drives a [`CatalogView`] from text commands and redraws after each one.
pub struct Session<R, W> {
    view: CatalogView,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(view: CatalogView, input: R, output: W) -> Self {
        Self {
            view,
            input,
            output,
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.draw()?;
        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read command")?;
            if read == 0 {
                tracing::debug!("input closed");
                return Ok(());
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Help) => writeln!(self.output, "{HELP}")?,
                Ok(command) => {
                    self.apply(command);
                    self.draw()?;
                }
                Err(err) => {
                    tracing::debug!(error = %err, "rejected command");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::SelectUser(user) => self.view.on_select_user(user),
            Command::Search(raw) => self.view.on_name_query_change(&raw),
            Command::SelectCategory(category) => self.view.on_select_category(category),
            Command::ClearSearch => self.view.on_clear_name_filter(),
            Command::ResetAll => self.view.on_reset_all_filters(),
            Command::Show | Command::Help | Command::Quit => {}
        }
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        writeln!(self.output)?;
        render::panel(&mut self.output, &self.view.panel()).context("failed to draw panel")?;
        writeln!(self.output)?;
        render::table(&mut self.output, &self.view.table()).context("failed to draw table")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
