use jot_core::presets::PRESETS;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn run(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&PRESETS, flags.format)
}
