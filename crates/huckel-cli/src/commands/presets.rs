use crate::error::Result;
use crate::ui;
use huckel::core::presets::registry::PresetRegistry;
use std::io::Write;

pub fn run(presets: &PresetRegistry, out: &mut impl Write) -> Result<()> {
    out.write_all(ui::presets(&presets.names()).as_bytes())?;
    Ok(())
}
