use env_logger::Env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = quartic_explorer::ExplorerConfig::default().with_env_overrides()?;
    let command = quartic_explorer::RunGuiCommand::new(config);

    if let Err(e) = command.execute() {
        log::error!("{e}");
        return Err(e.into());
    }

    Ok(())
}
