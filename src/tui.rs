use anyhow::Result;

use crate::config::{CatalogConfig, LateLoadPolicy};

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub catalog: CatalogConfig,
    pub late_load: LateLoadPolicy,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
