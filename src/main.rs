use anyhow::Result;

fn main() -> Result<()> {
    qodo_rules::cli::run()
}
