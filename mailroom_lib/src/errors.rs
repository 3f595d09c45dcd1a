use rust_decimal::Decimal;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("donation amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    #[error("donations of '{0}' add up to more than can be represented")]
    TotalOverflow(String),

    #[error("donor '{0}' has no recorded donation")]
    NoDonations(String),
}
