//! shortname: print paths relative to the working directory when they live below it

use anyhow::Result;

fn main() -> Result<()> {
    shortname::cli::run()
}
