use crate::errors::Error;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, Default)]
pub struct DonorId(pub u32);

/// Someone who gave money to the program.
/// Donations are stored in the order they were entered, so the last one is
/// always the most recent.
#[derive(Debug, Clone, PartialEq)]
pub struct Donor {
    pub name: String,
    donations: Vec<Decimal>,
}

impl Donor {
    pub fn new(name: &str) -> Self {
        Donor {
            name: name.into(),
            donations: Vec::new(),
        }
    }

    pub fn donations(&self) -> &[Decimal] {
        &self.donations
    }

    pub fn last_donation(&self) -> Option<Decimal> {
        self.donations.last().copied()
    }

    pub fn has_donations(&self) -> bool {
        !self.donations.is_empty()
    }

    /// Sum of all donations, None if it does not fit in a Decimal
    pub fn total(&self) -> Option<Decimal> {
        checked_sum(self.donations.iter().copied())
    }
}

/// Add amounts, returning None on overflow instead of panicking.
pub fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, a| acc.checked_add(a))
}

/// Check that a donation amount can be recorded.
pub fn validate_amount(amount: Decimal) -> Result<Decimal, Error> {
    if amount <= Decimal::ZERO {
        Err(Error::InvalidAmount(amount))
    } else {
        Ok(amount)
    }
}

/// Parse a donation amount typed by the user, e.g. "42.50".
pub fn parse_amount(text: &str) -> Result<Decimal, Error> {
    let text = text.trim();
    let amount = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| Error::NotANumber(text.to_string()))?;
    validate_amount(amount)
}

/// The in-memory table of donors.
/// Names are exact keys: "amanda clark" and "Amanda Clark" are two
/// different donors.
#[derive(Default)]
pub struct DonorStore {
    donors: Vec<Donor>,
    by_name: HashMap<String, DonorId>,
}

impl DonorStore {
    /// The donors known when the program starts.
    pub fn seeded() -> Self {
        let mut store = DonorStore::default();
        for (name, donations) in [
            ("Toni Orlando", vec![dec!(150.00), dec!(200.00), dec!(100.00)]),
            ("Amanda Clark", vec![dec!(1800.00)]),
            ("Robin Hood", vec![dec!(1234.56), dec!(4500.34), dec!(765.28)]),
            ("Gina Travis", vec![dec!(523.10), dec!(75.00)]),
            ("Mark Johnson", vec![dec!(850.00), dec!(20.14)]),
        ] {
            let id = store.lookup_or_create(name);
            if let Some(donor) = store.get_mut(id) {
                donor.donations = donations;
            }
        }
        store
    }

    /// Return the donor with that exact name, creating it (with no
    /// donation yet) if needed.
    pub fn lookup_or_create(&mut self, name: &str) -> DonorId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }
        let id = DonorId(self.donors.len() as u32);
        self.donors.push(Donor::new(name));
        self.by_name.insert(name.to_string(), id);
        log::debug!("new donor {:?}", name);
        id
    }

    /// Append a donation to the named donor's history.  Nothing is changed
    /// when the amount is rejected, including when the donor's total would
    /// no longer fit in a Decimal.
    pub fn record_donation(
        &mut self,
        name: &str,
        amount: Decimal,
    ) -> Result<DonorId, Error> {
        let amount = validate_amount(amount)?;
        let previous = match self.find(name) {
            Some(donor) => donor.total(),
            None => Some(Decimal::ZERO),
        };
        if previous.and_then(|t| t.checked_add(amount)).is_none() {
            return Err(Error::TotalOverflow(name.to_string()));
        }
        let id = self.lookup_or_create(name);
        if let Some(donor) = self.get_mut(id) {
            donor.donations.push(amount);
        }
        log::debug!("recorded {} from {:?}", amount, name);
        Ok(id)
    }

    /// Remove and return the most recent donation of a donor.
    pub fn pop_last_donation(&mut self, id: DonorId) -> Option<Decimal> {
        self.get_mut(id).and_then(|d| d.donations.pop())
    }

    pub fn get(&self, id: DonorId) -> Option<&Donor> {
        self.donors.get(id.0 as usize)
    }

    fn get_mut(&mut self, id: DonorId) -> Option<&mut Donor> {
        self.donors.get_mut(id.0 as usize)
    }

    pub fn find(&self, name: &str) -> Option<&Donor> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    pub fn iter_donors(&self) -> impl Iterator<Item = (DonorId, &Donor)> {
        self.donors
            .iter()
            .enumerate()
            .map(|(idx, d)| (DonorId(idx as u32), d))
    }

    /// Every donor with its donations.
    pub fn all_donors(&self) -> impl Iterator<Item = (&str, &[Decimal])> {
        self.donors
            .iter()
            .map(|d| (d.name.as_str(), d.donations()))
    }

    pub fn len(&self) -> usize {
        self.donors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }
}
