use anyhow::Result;
use std::io::{self, Write};

pub fn execute() -> Result<()> {
    writeln!(io::stdout(), "🧪 SysPeek Version: {}", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
