use crate::global_settings::GlobalSettings;
use clap::{Arg, Command};

pub(crate) fn build_cli() -> Command {
    Command::new("mailroom")
        .version("0.1")
        .about("Keep track of donors and thank them")
        .args(GlobalSettings::cli())
        .subcommand(
            // Use    eval "$(mailroom completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}

#[cfg(test)]
mod test {
    use crate::args::build_cli;
    use crate::global_settings::GlobalSettings;
    use indicatif::{MultiProgress, ProgressDrawTarget};
    use mailroom_lib::letters::Acknowledge;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    fn hidden() -> MultiProgress {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    }

    #[test]
    fn test_cli() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = build_cli().try_get_matches_from(["mailroom"]).unwrap();
        assert!(args.subcommand().is_none());
        let settings = GlobalSettings::new(&args, hidden());
        assert!(settings.output_dir.is_none());
        assert_eq!(settings.acknowledge, Acknowledge::Remove);
        assert!(!settings.report.totals);
        assert_eq!(settings.format.display(dec!(1234.5)), "$1234.50");
        assert_eq!(
            settings.letters_directory().unwrap(),
            std::env::current_dir().unwrap()
        );
    }

    #[test]
    fn test_switches() {
        let args = build_cli()
            .try_get_matches_from([
                "mailroom",
                "--output-dir",
                "/tmp/letters",
                "--acknowledge",
                "keep",
                "--totals",
                "--currency",
                "EUR ",
                "--group-digits",
            ])
            .unwrap();
        let settings = GlobalSettings::new(&args, hidden());
        assert_eq!(settings.format.display(dec!(1234.5)), "EUR 1,234.50");
        assert_eq!(settings.output_dir, Some(PathBuf::from("/tmp/letters")));
        assert_eq!(settings.acknowledge, Acknowledge::Keep);
        assert!(settings.report.totals);

        assert!(build_cli()
            .try_get_matches_from(["mailroom", "--acknowledge", "never"])
            .is_err());
    }

    #[test]
    fn test_completions() {
        let args = build_cli()
            .try_get_matches_from(["mailroom", "completions", "bash"])
            .unwrap();
        assert!(matches!(args.subcommand(), Some(("completions", _))));
    }
}
