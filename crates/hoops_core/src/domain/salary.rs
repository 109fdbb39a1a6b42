//! Salary cap bookkeeping and salary strategies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Contract, Money, Player};
use crate::error::{LeagueError, Result};

/// Rating above which rookie-scale deals earn a bonus
const ROOKIE_BONUS_THRESHOLD: u32 = 70;
/// Bonus per rating point above the threshold
const ROOKIE_BONUS_PER_POINT: i64 = 10_000;

/// Per-team commitment ledger. `committed <= cap` after every successful commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCap {
    cap: Money,
    committed: Money,
}

impl SalaryCap {
    pub fn new(cap: Money) -> Self {
        Self { cap, committed: Money::zero() }
    }

    pub fn cap(&self) -> Money {
        self.cap
    }

    pub fn committed(&self) -> Money {
        self.committed
    }

    pub fn remaining(&self) -> Money {
        self.cap.minus(self.committed)
    }

    pub fn can_commit(&self, amount: Money) -> bool {
        self.cap.gte(&self.committed.plus(amount))
    }

    pub fn commit(&mut self, amount: Money) -> Result<()> {
        if !self.can_commit(amount) {
            return Err(LeagueError::CapExceeded {
                requested: amount,
                committed: self.committed,
                cap: self.cap,
            });
        }
        self.committed = self.committed.plus(amount);
        Ok(())
    }

    /// Never fails. Clamps at zero when `amount > committed`, which can hide a
    /// double uncommit.
    pub fn uncommit(&mut self, amount: Money) {
        self.committed = self.committed.minus(amount).floor_zero();
    }
}

/// Policy converting a contract into an annual salary figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SalaryStrategy {
    /// Straight-line: total value spread evenly over the contract years
    Standard,
    /// Standard salary plus a rating bonus, capped at `max_annual`
    RookieScale { max_annual: Money },
}

impl SalaryStrategy {
    pub fn annual_salary(&self, player: &Player, contract: &Contract) -> Money {
        match self {
            SalaryStrategy::Standard => standard_annual(contract),
            SalaryStrategy::RookieScale { max_annual } => {
                let above = player.overall_rating().saturating_sub(ROOKIE_BONUS_THRESHOLD);
                let bonus = Money::new(Decimal::from(above as i64 * ROOKIE_BONUS_PER_POINT));
                let with_bonus = standard_annual(contract).plus(bonus);
                std::cmp::min(*max_annual, with_bonus)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SalaryStrategy::Standard => "standard",
            SalaryStrategy::RookieScale { .. } => "rookie_scale",
        }
    }
}

fn standard_annual(contract: &Contract) -> Money {
    let total = contract.total_value();
    if total <= Money::zero() {
        return Money::zero();
    }
    let years = Decimal::from(contract.years().max(1));
    Money::new(total.amount() / years)
}
