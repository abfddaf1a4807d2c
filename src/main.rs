fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up logging; RUST_LOG=debug shows input events and slow frames
    env_logger::init();

    let config = random_dots::load_config_from_env()?;
    random_dots::run_app_with(config)?;
    Ok(())
}
