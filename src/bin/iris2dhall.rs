use std::env::args;

use anyhow::anyhow;
use iris_converter_lib::run_iris;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let source = args().nth(1).unwrap_or_else(|| String::from("iris.data"));
    run_iris(&source).map_err(|err| anyhow!("cannot convert {source}: {err}"))?;
    Ok(())
}
