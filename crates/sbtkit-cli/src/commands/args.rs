//! install-args and bsp-args commands

use crate::context::Context;
use crate::error::Result;

/// Print the `bloopInstall` invocation, provisioning the workspace first
pub fn run_install_args(ctx: &Context, json: bool) -> Result<()> {
    let args = ctx.tool().install_args()?;
    print_args(&args, json)
}

/// Print the `bspConfig` invocation
pub fn run_bsp_args(ctx: &Context, json: bool) -> Result<()> {
    let args = ctx.tool().bsp_args()?;
    print_args(&args, json)
}

/// One argument per line, or a JSON array.
fn print_args(args: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(args)?);
    } else {
        for arg in args {
            println!("{arg}");
        }
    }
    Ok(())
}
