//! IoC Object Builder - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ioc types` | List registered types |
//! | `ioc check <files>...` | Check classes and references in object files |
//! | `ioc resolve [--singleton] <id> <files>...` | Build one object and print it |

use clap::Parser;
use ioc::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    run(Cli::parse())
}
