use tasknest_core::shared::constants::DATA_DIR_ENV;
use tasknest_core::Config;

fn main() {
    let config = Config::from_env();
    let overridden = std::env::var(DATA_DIR_ENV).map(|v| !v.trim().is_empty()).unwrap_or(false);

    println!("TaskNest Core Storage Configuration:\n");
    println!("  {}: {}", DATA_DIR_ENV, if overridden { "set" } else { "(not set)" });
    println!("  Data directory: {}", config.data_dir().display());
    println!("  Shared task list: {}", config.tasks_file().display());
    println!("  User files: {}", config.users_dir().display());
    println!("  Default data directory: {}", Config::default_data_dir().display());
}
