//! Math command handlers

use anyhow::Result;

pub fn cmd_addition(a: i64, b: i64) -> Result<()> {
    println!("{}", docbench::mat::addition(a, b));
    Ok(())
}

pub fn cmd_subtraction(a: i64, b: i64) -> Result<()> {
    println!("{}", docbench::mat::subtraction(a, b));
    Ok(())
}
