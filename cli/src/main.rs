mod args;
mod global_settings;
mod menu;
mod report_view;
mod tables;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use crate::menu::Menu;
use anyhow::Result;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;
use mailroom_lib::donors::DonorStore;

fn main() -> Result<()> {
    let logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .build();
    let level = logger.filter();
    let progress = MultiProgress::new();
    LogWrapper::new(progress.clone(), logger).try_init()?;
    log::set_max_level(level);

    let args = build_cli().get_matches();
    if let Some(("completions", sub)) = args.subcommand() {
        if let Some(shell) = sub.get_one::<clap_complete_command::Shell>("shell")
        {
            shell.generate(&mut build_cli(), &mut std::io::stdout());
        }
        return Ok(());
    }

    let settings = GlobalSettings::new(&args, progress);
    let mut store = DonorStore::seeded();
    let stdin = std::io::stdin();
    Menu::new(&mut store, &settings, stdin.lock(), std::io::stdout()).run()
}
