mod compare;
mod screen;

use compare::run_compare;
use screen::run_screen;

use anyhow::Result;

use crate::cli::{Cli, InputKind};
use crate::display::Context;

pub fn dispatch(cli: Cli, ctx: Context) -> Result<()> {
    match cli.type_input {
        InputKind::Smile => run_compare(&cli, ctx),
        InputKind::Sdf | InputKind::Txt => run_screen(&cli, ctx),
    }
}
