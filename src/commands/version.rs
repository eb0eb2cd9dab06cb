use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("sbc-platform version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
