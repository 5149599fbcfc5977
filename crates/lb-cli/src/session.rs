//! One interactive session: a `Sim` plus the stream its output goes to.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use lb_behavior::{TraceEvent, TraceSink};
use lb_core::{AgentId, SimConfig};
use lb_sim::{Sim, SimBuilder};

use crate::command::Command;

/// Whether the read loop should keep going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Writes each trace event as one line.  The first write error is kept and
/// reported after the tick.
struct LineSink<'w, W: Write> {
    out:   &'w mut W,
    error: Option<io::Error>,
}

impl<W: Write> TraceSink for LineSink<'_, W> {
    fn record(&mut self, event: TraceEvent) {
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "{event}") {
                self.error = Some(e);
            }
        }
    }
}

impl<'w, W: Write> LineSink<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out, error: None }
    }

    fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

pub struct Session<W: Write> {
    sim:  Sim,
    out:  W,
    echo: bool,
}

impl<W: Write> Session<W> {
    pub fn new(config: SimConfig, out: W) -> Self {
        let echo = config.echo_inputs;
        Self { sim: SimBuilder::new().config(config).build(), out, echo }
    }

    pub fn sim(&self) -> &Sim {
        &self.sim
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run commands from `input` until EOF or `quit`.
    ///
    /// Command failures are printed as `Error: ...` lines and never stop the
    /// loop; only I/O errors on `input` or the output stream do.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match self.execute(line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(self.out, "Error: {e:#}")?,
            }
        }
        self.out.flush()
    }

    /// Parse and run a single command line.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let command: Command = line.parse()?;
        debug!(?command, "executing");

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::LoadBoard(path) => self.load_board(&path)?,
            Command::LoadTrees(paths) => self.load_trees(&paths)?,
            Command::ListLadybugs => {
                let ids = self.sim.active_agents();
                if !ids.is_empty() {
                    let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
                    writeln!(self.out, "{}", ids.join(" "))?;
                }
            }
            Command::PrintBoard => {
                let board = self.sim.board().ok_or_else(|| anyhow!("no board loaded"))?;
                writeln!(self.out, "{board}")?;
            }
            Command::PrintPosition(agent) => {
                let pos = self.sim.position(agent)?;
                writeln!(self.out, "{pos}")?;
            }
            Command::ResetTree(agent) => {
                self.sim.reset_tree(agent)?;
                self.ok()?;
            }
            Command::JumpTo { agent, node } => {
                if !self.sim.jump_to_node(agent, &node)? {
                    return Err(anyhow!("node {node} not found in tree for ladybug {agent}"));
                }
                self.ok()?;
            }
            Command::Head(agent) => {
                let head = self.sim.head(agent)?.to_string();
                writeln!(self.out, "{head}")?;
            }
            Command::NextAction(agent) => self.next_action(agent)?,
            Command::AddSibling { agent, target, definition } => {
                self.sim.add_sibling(agent, target.as_deref(), &definition)?;
                self.ok()?;
            }
        }
        Ok(Flow::Continue)
    }

    fn ok(&mut self) -> io::Result<()> {
        writeln!(self.out, "OK")
    }

    fn read_lines(path: &Path) -> Result<Vec<String>> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("file not found or unreadable: {}", path.display()))?;
        Ok(raw.lines().map(str::to_string).collect())
    }

    fn echo_lines(&mut self, lines: &[String]) -> io::Result<()> {
        if self.echo {
            for line in lines {
                writeln!(self.out, "{line}")?;
            }
        }
        Ok(())
    }

    fn load_board(&mut self, path: &Path) -> Result<()> {
        let lines = Self::read_lines(path)?;
        self.sim.load_board(&lines)?;
        self.echo_lines(&lines)?;
        Ok(())
    }

    fn load_trees(&mut self, paths: &[PathBuf]) -> Result<()> {
        let sources = paths
            .iter()
            .map(|p| Self::read_lines(p))
            .collect::<Result<Vec<_>>>()?;
        for lines in &sources {
            self.echo_lines(lines)?;
        }
        let sources: Vec<String> = sources.iter().map(|lines| lines.join("\n")).collect();
        self.sim.load_tree_sources(&sources)?;
        Ok(())
    }

    fn next_action(&mut self, agent: Option<AgentId>) -> Result<()> {
        if self.sim.board().is_some() && self.sim.agents.is_empty() {
            return Err(anyhow!("no ladybugs on the board"));
        }
        let mut sink = LineSink::new(&mut self.out);
        match agent {
            Some(id) => {
                if self.sim.advance_agent(id, &mut sink)?.is_none() {
                    debug!(ladybug = %id, "no tree assigned; skipped");
                }
            }
            None => {
                self.sim.advance_all(&mut sink)?;
            }
        }
        sink.finish()?;
        Ok(())
    }
}
