use crate::donors::{checked_sum, DonorStore};
use crate::errors::Error;
use itertools::Itertools;
use rust_decimal::Decimal;

/// Summary of the donations of one donor
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal,
}

impl ReportRow {
    /// Aggregate a list of donations.  There is no meaningful average for
    /// an empty list, and the total must fit in a Decimal.
    pub fn new(name: &str, donations: &[Decimal]) -> Result<Self, Error> {
        if donations.is_empty() {
            return Err(Error::NoDonations(name.to_string()));
        }
        let total = checked_sum(donations.iter().copied())
            .ok_or_else(|| Error::TotalOverflow(name.to_string()))?;
        let count = donations.len();
        Ok(ReportRow {
            name: name.to_string(),
            total,
            count,
            average: total / Decimal::from(count),
        })
    }
}

/// One row per donor, in the store's enumeration order.
/// Donors for which no row can be computed are skipped.
pub fn compute_rows(store: &DonorStore) -> Vec<ReportRow> {
    store
        .all_donors()
        .filter_map(|(name, donations)| match ReportRow::new(name, donations) {
            Ok(row) => Some(row),
            Err(e) => {
                log::warn!("{}, not shown in report", e);
                None
            }
        })
        .collect()
}

/// Sort by total given, largest first.  Donors with the same total keep
/// their relative order.
pub fn sort_rows(rows: Vec<ReportRow>) -> Vec<ReportRow> {
    rows.into_iter()
        .sorted_by(|a, b| b.total.cmp(&a.total))
        .collect()
}

/// The sum of all rows, suitable for a footer.
/// None when the sum does not fit in a Decimal.
pub fn grand_total(rows: &[ReportRow]) -> Option<ReportRow> {
    let total = checked_sum(rows.iter().map(|r| r.total))?;
    let count: usize = rows.iter().map(|r| r.count).sum();
    Some(ReportRow {
        name: "Total".to_string(),
        total,
        count,
        average: if count == 0 {
            Decimal::ZERO
        } else {
            total / Decimal::from(count)
        },
    })
}

#[cfg(test)]
mod test {
    use crate::donors::DonorStore;
    use crate::errors::Error;
    use crate::reports::{compute_rows, grand_total, sort_rows, ReportRow};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compute_rows() {
        let store = DonorStore::seeded();
        let rows = compute_rows(&store);
        assert_eq!(rows.len(), 5);
        assert!(rows.contains(&ReportRow {
            name: "Amanda Clark".to_string(),
            total: dec!(1800.00),
            count: 1,
            average: dec!(1800.00),
        }));

        let toni = rows.iter().find(|r| r.name == "Toni Orlando").unwrap();
        assert_eq!(toni.total, dec!(450.00));
        assert_eq!(toni.count, 3);
        assert_eq!(toni.average, dec!(150));
    }

    #[test]
    fn test_rows_match_recorded() {
        let mut store = DonorStore::default();
        let amounts = [dec!(10.10), dec!(0.01), dec!(99.99), dec!(5)];
        for a in amounts {
            store.record_donation("Zoe Park", a).unwrap();
        }
        let rows = compute_rows(&store);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, dec!(115.10));
        assert_eq!(rows[0].count, amounts.len());
    }

    #[test]
    fn test_skip_empty_donor() {
        let mut store = DonorStore::seeded();
        store.lookup_or_create("Nobody Yet");
        let rows = compute_rows(&store);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.name != "Nobody Yet"));
    }

    #[test]
    fn test_sort_rows() {
        let mut store = DonorStore::default();
        store.record_donation("A", dec!(10)).unwrap();
        store.record_donation("B", dec!(30)).unwrap();
        store.record_donation("C", dec!(10)).unwrap();
        store.record_donation("D", dec!(20)).unwrap();
        store.record_donation("E", dec!(5)).unwrap();
        store.record_donation("E", dec!(5)).unwrap();

        let sorted = sort_rows(compute_rows(&store));
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "D", "A", "C", "E"]);

        let seeded = sort_rows(compute_rows(&DonorStore::seeded()));
        let names: Vec<&str> = seeded.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Robin Hood",
                "Amanda Clark",
                "Mark Johnson",
                "Gina Travis",
                "Toni Orlando"
            ]
        );
    }

    #[test]
    fn test_grand_total() {
        let rows = compute_rows(&DonorStore::seeded());
        let total = grand_total(&rows).unwrap();
        assert_eq!(total.total, dec!(10218.42));
        assert_eq!(total.count, 11);

        let empty = grand_total(&[]).unwrap();
        assert_eq!(empty.count, 0);
        assert_eq!(empty.average, dec!(0));
    }

    #[test]
    fn test_overflowing_total() {
        assert!(matches!(
            ReportRow::new("Big Spender", &[Decimal::MAX, dec!(1)]),
            Err(Error::TotalOverflow(_))
        ));
        assert!(matches!(
            ReportRow::new("Nobody Yet", &[]),
            Err(Error::NoDonations(_))
        ));

        // Each donor fits, but not their sum
        let mut store = DonorStore::seeded();
        store.record_donation("Big Spender", Decimal::MAX).unwrap();
        let rows = compute_rows(&store);
        assert_eq!(rows.len(), 6);
        assert!(grand_total(&rows).is_none());
    }
}
