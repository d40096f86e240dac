use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("richfetch version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
