use anyhow::Result;
use deadlines_core::deadlines_config::DeadlinesConfig;
use owo_colors::OwoColorize;

pub fn run(config: &DeadlinesConfig) -> Result<()> {
    let config_path = DeadlinesConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Output:     {}", config.output_path().display());
    if let Some(templates) = config.templates_path() {
        println!("  Templates:  {}", templates.display());
    }

    println!();
    println!("{}", "Settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
