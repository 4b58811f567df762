pub mod matches;
pub mod races;
pub mod seed;
pub mod serve;

/// Print a response envelope as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
