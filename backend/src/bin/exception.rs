use anyhow::Result;
use course_demos::{logging, run_division_demo};
use log::info;
use std::io::{self, Write};

fn main() -> Result<()> {
    logging::init_or_default()?;
    info!("Starting division demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_division_demo(&mut out)?;
    out.flush()?;

    info!("Division demo finished");
    Ok(())
}
