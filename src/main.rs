use anyhow::Result;

fn main() -> Result<()> {
    let code = demo_basics::demo::run()?;
    std::process::exit(code);
}
