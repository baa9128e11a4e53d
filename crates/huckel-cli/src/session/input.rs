use huckel::core::presets::registry::PresetRegistry;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input")]
    NotANumber,
    #[error("Value must be at least {min}")]
    BelowMinimum { min: usize },
    #[error("Invalid command")]
    UnknownCommand,
}

/// Validates one line of user input as an integer no smaller than `min`.
pub fn parse_atom_count(line: &str, min: usize) -> Result<usize, InputError> {
    let value: i64 = line.trim().parse().map_err(|_| InputError::NotANumber)?;
    match usize::try_from(value) {
        Ok(n) if n >= min => Ok(n),
        _ => Err(InputError::BelowMinimum { min }),
    }
}

fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Linear,
    Cyclic,
    Presets,
    Preset(String),
    Custom,
    Help,
    Quit,
}

impl MenuCommand {
    pub fn parse(line: &str, presets: &PresetRegistry) -> Result<Self, InputError> {
        let command = normalize(line);
        Ok(match command.as_str() {
            "linear" => Self::Linear,
            "cyclic" => Self::Cyclic,
            "presets" => Self::Presets,
            "custom" => Self::Custom,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            name if presets.contains(name) => Self::Preset(command.clone()),
            _ => return Err(InputError::UnknownCommand),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomCommand {
    Add,
    Remove,
    Bonds,
    Done,
    Cancel,
}

impl CustomCommand {
    pub fn parse(line: &str) -> Result<Self, InputError> {
        match normalize(line).as_str() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "bonds" => Ok(Self::Bonds),
            "done" => Ok(Self::Done),
            "cancel" => Ok(Self::Cancel),
            _ => Err(InputError::UnknownCommand),
        }
    }
}
