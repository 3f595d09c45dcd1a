use clap::{Arg, ArgMatches, arg, value_parser};
use indicatif::MultiProgress;
use mailroom_lib::formatters::{Formatter, Separators};
use mailroom_lib::letters::Acknowledge;
use std::path::PathBuf;

pub struct GlobalSettings {
    // Where to write letters.  When unset, this is the current directory at
    // the time letters are sent.
    pub output_dir: Option<PathBuf>,

    pub acknowledge: Acknowledge,
    pub report: crate::report_view::Settings,
    pub table: crate::tables::Settings,

    // How to display amounts
    pub format: Formatter,

    // Progress bars are drawn here, so that logs do not mess them up
    pub progress: MultiProgress,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            arg!(--"output-dir" <DIR> "Directory where letters are written")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
            arg!(--acknowledge <POLICY> "What to do with a donation once a letter was sent for it")
                .required(false)
                .value_parser(["remove", "keep"])
                .default_value("remove"),
            arg!(--totals "Show the grand total at the bottom of reports"),
            arg!(--currency <SYMBOL> "Symbol shown before amounts")
                .required(false)
                .default_value("$"),
            arg!(--"group-digits" "Separate thousands with a comma"),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches, progress: MultiProgress) -> Self {
        GlobalSettings {
            output_dir: args.get_one::<PathBuf>("output-dir").cloned(),
            acknowledge: match args
                .get_one::<String>("acknowledge")
                .map(String::as_str)
            {
                Some("keep") => Acknowledge::Keep,
                Some(_) | None => Acknowledge::Remove,
            },
            report: crate::report_view::Settings {
                totals: args.get_flag("totals"),
            },
            table: crate::tables::Settings::default(),
            format: Formatter {
                symbol: args
                    .get_one::<String>("currency")
                    .cloned()
                    .unwrap_or_else(|| "$".to_string()),
                separators: if args.get_flag("group-digits") {
                    Separators::Every3Digit(',')
                } else {
                    Separators::None
                },
            },
            progress,
        }
    }

    /// The directory receiving letters, computed when they are sent.
    pub fn letters_directory(&self) -> std::io::Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}
