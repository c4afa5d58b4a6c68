use anyhow::Result;
use course_demos::logging;

fn main() -> Result<()> {
    let config = logging::init()?;
    println!("Logging at level {} (records go to stderr)", config.level);
    logging::emit_sample_records();
    Ok(())
}
