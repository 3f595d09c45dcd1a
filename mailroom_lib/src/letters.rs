use crate::donors::{DonorId, DonorStore};
use crate::errors::Error;
use crate::formatters::Formatter;
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// What happens to a donation once a letter was sent for it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Acknowledge {
    // The donation is removed from the donor's history, so that the next
    // batch of letters thanks for the previous donation.
    #[default]
    Remove,

    // History is left untouched; sending letters again produces the same
    // letters.
    Keep,
}

/// Outcome of a batch of letters
#[derive(Debug, Default)]
pub struct LetterSummary {
    pub written: Vec<PathBuf>,

    // Donors with no donation to thank for
    pub skipped: Vec<String>,

    // Donors for which the file could not be written
    pub failed: Vec<(String, anyhow::Error)>,
}

impl LetterSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The file name for a letter, e.g. "Toni_Orlando_2024_3_7.txt"
pub fn letter_filename(name: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}_{}.txt",
        name.replace(' ', "_"),
        date.year(),
        date.month(),
        date.day()
    )
}

pub fn render_letter(name: &str, amount: Decimal, format: &Formatter) -> String {
    format!(
        "Dear {},\n\
         \tThank you for your kind donation of {}.\n\
         \tIt will be put to very good use.\n\
         \t\tSincerely,\n\
         \t\t\t-The Team",
        name,
        format.display(amount),
    )
}

/// The short message shown after recording a donation
pub fn thank_you_message(
    name: &str,
    amount: Decimal,
    format: &Formatter,
) -> String {
    format!(
        "Dear {}, Thank you for your generous contribution of {} to our program.",
        name,
        format.display(amount),
    )
}

fn write_letter(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;
    let mut buf = BufWriter::new(file);
    buf.write_all(content.as_bytes())
        .and_then(|_| buf.flush())
        .with_context(|| format!("Cannot write {}", path.display()))?;
    Ok(())
}

/// Write one letter per donor into target_directory, thanking for their
/// most recent donation.
///
/// A failure to write one file does not stop the batch.  The history of a
/// donor is only modified (as per `policy`) once its letter was written.
/// A file already written for another donor in the same batch is not
/// overwritten, that donor is reported as failed instead.
/// `report_progress(current, max)` is called after each donor.
pub fn write_all(
    store: &mut DonorStore,
    target_directory: &Path,
    today: NaiveDate,
    policy: Acknowledge,
    format: &Formatter,
    report_progress: impl Fn(u64, u64),
) -> LetterSummary {
    let mut summary = LetterSummary::default();
    let donors: Vec<(DonorId, String, Option<Decimal>)> = store
        .iter_donors()
        .map(|(id, d)| (id, d.name.clone(), d.last_donation()))
        .collect();
    let max = donors.len() as u64;

    for (current, (id, name, last)) in donors.into_iter().enumerate() {
        match last {
            None => {
                log::warn!("{}", Error::NoDonations(name.clone()));
                summary.skipped.push(name);
            }
            Some(amount) => {
                let path =
                    target_directory.join(letter_filename(&name, today));

                // Two names can map to the same file ("A B" and "A_B")
                let result = if summary.written.contains(&path) {
                    Err(anyhow::anyhow!(
                        "{} was already written for another donor",
                        path.display()
                    ))
                } else {
                    write_letter(&path, &render_letter(&name, amount, format))
                };

                match result {
                    Ok(()) => {
                        log::info!("Wrote {}", path.display());
                        if policy == Acknowledge::Remove {
                            store.pop_last_donation(id);
                        }
                        summary.written.push(path);
                    }
                    Err(e) => {
                        log::error!("{:#}", e);
                        summary.failed.push((name, e));
                    }
                }
            }
        }
        report_progress(current as u64 + 1, max);
    }

    summary
}
