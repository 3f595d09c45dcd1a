use crate::global_settings::GlobalSettings;
use crate::report_view::report_view;
use anyhow::Result;
use chrono::Local;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use mailroom_lib::donors::{DonorStore, parse_amount};
use mailroom_lib::errors::Error;
use mailroom_lib::letters::{thank_you_message, write_all};
use mailroom_lib::reports::{compute_rows, sort_rows};
use std::io::{BufRead, Write};

/// The actions offered to the user, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SendThankYou,
    CreateReport,
    SendLetters,
    Quit,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::SendThankYou,
        Action::CreateReport,
        Action::SendLetters,
        Action::Quit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Action::SendThankYou => "1",
            Action::CreateReport => "2",
            Action::SendLetters => "3",
            Action::Quit => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::SendThankYou => "Send a Thank You",
            Action::CreateReport => "Create a Report",
            Action::SendLetters => "Send letters to everyone",
            Action::Quit => "Quit",
        }
    }

    /// Exact match on the key, " 1" is not a valid choice
    pub fn from_key(key: &str) -> Option<Self> {
        Action::ALL.into_iter().find(|a| a.key() == key)
    }
}

/// Whether to keep reading the user's choices
#[derive(PartialEq, Eq)]
enum Next {
    Continue,
    Stop,
}

pub struct Menu<'a, R, W> {
    store: &'a mut DonorStore,
    settings: &'a GlobalSettings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        store: &'a mut DonorStore,
        settings: &'a GlobalSettings,
        input: R,
        output: W,
    ) -> Self {
        Menu {
            store,
            settings,
            input,
            output,
        }
    }

    fn menu_text() -> String {
        let mut text = String::new();
        for action in Action::ALL {
            text.push_str(&format!("{}) {}\n", action.key(), action.label()));
        }
        text.push_str("Select the number of the action to take: ");
        text
    }

    /// Show a prompt and read one line, without its line terminator.
    /// Returns None once the input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Read and execute actions until the user quits
    pub fn run(&mut self) -> Result<()> {
        loop {
            let next = match self.prompt(&Self::menu_text())? {
                None => Next::Stop,
                Some(choice) => match Action::from_key(&choice) {
                    None => {
                        writeln!(
                            self.output,
                            "{}",
                            style("Please enter only one of the listed options.")
                                .red()
                        )?;
                        Next::Continue
                    }
                    Some(Action::Quit) => Next::Stop,
                    Some(Action::SendThankYou) => self.send_thank_you()?,
                    Some(Action::CreateReport) => self.create_report()?,
                    Some(Action::SendLetters) => self.send_letters()?,
                },
            };
            if next == Next::Stop {
                writeln!(self.output, "Goodbye.")?;
                return Ok(());
            }
        }
    }

    fn list_donors(&mut self) -> Result<()> {
        for (name, donations) in self.store.all_donors() {
            writeln!(
                self.output,
                "{:<20}: [{}]",
                name,
                donations
                    .iter()
                    .map(|d| self.settings.format.display_number(*d))
                    .join(", ")
            )?;
        }
        Ok(())
    }

    fn send_thank_you(&mut self) -> Result<Next> {
        let name = loop {
            let Some(name) = self.prompt(
                "Who do you want to send the thank you to? \
                 Type 'list' for a list of all the donors. ",
            )?
            else {
                return Ok(Next::Stop);
            };
            if name == "list" {
                self.list_donors()?;
            } else {
                break name;
            }
        };

        let amount = loop {
            let Some(text) = self.prompt(
                "What donation amount do you want to thank them for? ",
            )?
            else {
                return Ok(Next::Stop);
            };
            match parse_amount(&text)
                .and_then(|a| self.store.record_donation(&name, a).map(|_| a))
            {
                Ok(amount) => break amount,
                Err(Error::NotANumber(_)) => {
                    writeln!(self.output, "Input must be a number.")?;
                }
                Err(Error::InvalidAmount(_)) => {
                    writeln!(self.output, "Number has to be positive.")?;
                }
                Err(e @ Error::TotalOverflow(_)) => {
                    writeln!(self.output, "{}", style(e).red())?;
                }
                Err(e @ Error::NoDonations(_)) => {
                    return Err(e.into());
                }
            }
        };

        writeln!(
            self.output,
            "{}",
            thank_you_message(&name, amount, &self.settings.format)
        )?;
        Ok(Next::Continue)
    }

    fn create_report(&mut self) -> Result<Next> {
        let rows = sort_rows(compute_rows(self.store));
        write!(
            self.output,
            "{}",
            report_view(
                &rows,
                &self.settings.format,
                &self.settings.table,
                &self.settings.report,
            )
        )?;
        Ok(Next::Continue)
    }

    fn send_letters(&mut self) -> Result<Next> {
        let dir = self.settings.letters_directory()?;
        let progress = self.settings.progress.add(
            ProgressBar::new(self.store.len() as u64)
                .with_style(ProgressStyle::with_template(
                    "[{pos:2}/{len:2}] {msg} {wide_bar}",
                )?)
                .with_message("writing letters"),
        );

        let summary = write_all(
            self.store,
            &dir,
            Local::now().date_naive(),
            self.settings.acknowledge,
            &self.settings.format,
            |current, max| {
                progress.set_length(max);
                progress.set_position(current);
            },
        );
        progress.finish_and_clear();
        self.settings.progress.remove(&progress);

        for name in &summary.skipped {
            writeln!(self.output, "No donation to thank {} for.", name)?;
        }
        for (name, err) in &summary.failed {
            writeln!(
                self.output,
                "{}",
                style(format!("Letter for {} not written: {:#}", name, err))
                    .red()
            )?;
        }
        writeln!(self.output, "Done")?;
        Ok(Next::Continue)
    }
}
