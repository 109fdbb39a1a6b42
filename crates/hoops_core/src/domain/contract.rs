use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Money, ValidationError};

/// Immutable contract terms. Use [`Contract::builder`] for readability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    total_value: Money,
    years: u32,
    start_date: NaiveDate,
}

impl Contract {
    pub fn new(total_value: Money, years: i32, start_date: NaiveDate) -> Result<Self, ValidationError> {
        if years <= 0 {
            return Err(ValidationError::InvalidContractYears(years));
        }
        Ok(Self { total_value, years: years as u32, start_date })
    }

    pub fn builder() -> ContractBuilder {
        ContractBuilder::default()
    }

    pub fn total_value(&self) -> Money {
        self.total_value
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }
}

/// Stepwise contract configuration; validated in [`ContractBuilder::build`].
#[derive(Debug, Clone)]
pub struct ContractBuilder {
    total_value: Money,
    years: i32,
    start_date: Option<NaiveDate>,
}

impl Default for ContractBuilder {
    fn default() -> Self {
        Self { total_value: Money::zero(), years: 1, start_date: None }
    }
}

impl ContractBuilder {
    pub fn total_value(mut self, value: Money) -> Self {
        self.total_value = value;
        self
    }

    pub fn years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Start date defaults to today (UTC).
    pub fn build(self) -> Result<Contract, ValidationError> {
        let start_date = self.start_date.unwrap_or_else(|| Utc::now().date_naive());
        Contract::new(self.total_value, self.years, start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let contract = Contract::builder().build().unwrap();
        assert_eq!(contract.years(), 1);
        assert_eq!(contract.total_value(), Money::zero());
        assert_eq!(contract.start_date(), Utc::now().date_naive());
    }

    #[test]
    fn test_non_positive_years_rejected() {
        let err = Contract::builder().years(0).build().unwrap_err();
        assert_eq!(err, ValidationError::InvalidContractYears(0));

        let err = Contract::builder().years(-2).build().unwrap_err();
        assert_eq!(err, ValidationError::InvalidContractYears(-2));
    }

    #[test]
    fn test_builder_sets_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let contract = Contract::builder()
            .total_value(Money::of(30_000_000.0))
            .years(3)
            .start_date(date)
            .build()
            .unwrap();
        assert_eq!(contract.total_value(), Money::of(30_000_000.0));
        assert_eq!(contract.years(), 3);
        assert_eq!(contract.start_date(), date);
    }
}
