use anyhow::Result;
use course_demos::{logging, run_account_demo, StderrChannel};
use log::info;
use std::io::{self, Write};

fn main() -> Result<()> {
    logging::init_or_default()?;
    info!("Starting account demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_account_demo(&mut out, StderrChannel)?;
    out.flush()?;

    info!("Account demo finished");
    Ok(())
}
