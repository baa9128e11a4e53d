//! The interactive menu. Each round reads a molecule, solves it and prints the orbital
//! energies, until the user quits or input ends.

pub mod console;
pub mod custom;
pub mod input;

use crate::commands::solve;
use crate::config::AppConfig;
use crate::error::Result;
use crate::ui;
use console::Console;
use huckel::core::connectivity::{self, ConnectivityMode};
use huckel::core::models::connectivity::Connectivity;
use huckel::core::models::topology::BondSet;
use huckel::core::presets::registry::PresetRegistry;
use input::{CustomCommand, MenuCommand};
use std::io::{BufRead, Write};
use tracing::{info, warn};

const COUNT_PROMPT: &str = "Please enter number of carbons: ";

enum CustomOutcome {
    Done(Connectivity),
    Cancelled,
}

pub struct InteractiveSession<'a, R, W> {
    console: Console<R, W>,
    presets: &'a PresetRegistry,
    config: &'a AppConfig,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(reader: R, writer: W, presets: &'a PresetRegistry, config: &'a AppConfig) -> Self {
        Self {
            console: Console::new(reader, writer),
            presets,
            config,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.print(&ui::welcome())?;
            self.console.print(&ui::commands())?;

            let Some(connectivity) = self.read_connectivity()? else {
                info!("Interactive session finished.");
                return Ok(());
            };

            match solve::render(&connectivity, self.config) {
                Ok(report) => self.console.print(&report)?,
                Err(e) => {
                    warn!("Computation failed: {}", e);
                    self.console.println(&format!("Error: {e}"))?;
                }
            }

            if self.console.prompt("Press enter to continue...")?.is_none() {
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.console.into_writer()
    }

    /// `None` means the user quit or input ended.
    fn read_connectivity(&mut self) -> Result<Option<Connectivity>> {
        loop {
            let Some(line) = self.console.read_line()? else {
                return Ok(None);
            };
            match MenuCommand::parse(&line, self.presets) {
                Ok(MenuCommand::Linear) => return self.read_sized(ConnectivityMode::Linear),
                Ok(MenuCommand::Cyclic) => return self.read_sized(ConnectivityMode::Cyclic),
                Ok(MenuCommand::Presets) => {
                    self.console.print(&ui::presets(&self.presets.names()))?;
                }
                Ok(MenuCommand::Preset(name)) => match self.presets.get(&name) {
                    Some(connectivity) => return Ok(Some(connectivity)),
                    None => self.console.println("Invalid command")?,
                },
                Ok(MenuCommand::Custom) => match self.read_custom()? {
                    Some(CustomOutcome::Done(connectivity)) => return Ok(Some(connectivity)),
                    Some(CustomOutcome::Cancelled) => self.console.print(&ui::commands())?,
                    None => return Ok(None),
                },
                Ok(MenuCommand::Help) => self.console.print(&ui::commands())?,
                Ok(MenuCommand::Quit) => return Ok(None),
                Err(e) => self.console.println(&e.to_string())?,
            }
        }
    }

    /// Re-prompts until the size can be built.
    fn read_sized(&mut self, mode: ConnectivityMode) -> Result<Option<Connectivity>> {
        loop {
            let Some(n) = self.console.prompt_count(COUNT_PROMPT, mode.min_atoms())? else {
                return Ok(None);
            };
            match mode.build(n) {
                Ok(connectivity) => return Ok(Some(connectivity)),
                Err(e) => self.console.println(&e.to_string())?,
            }
        }
    }

    fn read_pair(&mut self) -> Result<Option<(usize, usize)>> {
        let Some(a) = self.console.prompt_count("Enter atom 1: ", 1)? else {
            return Ok(None);
        };
        let Some(b) = self.console.prompt_count("Enter atom 2: ", 1)? else {
            return Ok(None);
        };
        Ok(Some((a, b)))
    }

    /// The custom sub-session owns a fresh bond set for the molecule being entered.
    fn read_custom(&mut self) -> Result<Option<CustomOutcome>> {
        self.console.print(&ui::custom_instructions())?;
        let mut bonds = BondSet::new();

        loop {
            let Some(line) = self.console.read_line()? else {
                return Ok(None);
            };
            match CustomCommand::parse(&line) {
                Ok(CustomCommand::Add) => {
                    let Some((a, b)) = self.read_pair()? else {
                        return Ok(None);
                    };
                    let message = custom::add_bond(&mut bonds, a, b);
                    self.console.println(&message)?;
                }
                Ok(CustomCommand::Remove) => {
                    let Some((a, b)) = self.read_pair()? else {
                        return Ok(None);
                    };
                    let message = custom::remove_bond(&mut bonds, a, b);
                    self.console.println(&message)?;
                }
                Ok(CustomCommand::Bonds) => self.console.print(&ui::bonds(&bonds))?,
                Ok(CustomCommand::Done) => match connectivity::custom(&bonds) {
                    Ok(c) => return Ok(Some(CustomOutcome::Done(c))),
                    Err(e) => self.console.println(&e.to_string())?,
                },
                Ok(CustomCommand::Cancel) => return Ok(Some(CustomOutcome::Cancelled)),
                Err(_) => self.console.println("Invalid input")?,
            }
        }
    }
}
