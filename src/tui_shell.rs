use anyhow::Result;

use crate::tui::TuiRunOptions;

mod app;

mod input;
use input::Input;

mod view;
use view::{input_spans, render_view_chrome};

mod views;
use views::BooksView;

pub(crate) fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    app::run(opts)
}
