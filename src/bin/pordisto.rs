use anyhow::Result;
use pordisto::cli;

// Main function
fn main() -> Result<()> {
    let (action, globals) = cli::start()?;

    let message = action.execute(&globals)?;
    println!("{message}");

    Ok(())
}
