use std::{
    fmt,
    ops::{Add, AddAssign, Div, Neg, Sub, SubAssign},
};

use fxhash::FxHashSet;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Identity of a participant within one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub i64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

impl Person {
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// An amount in major currency units, backed by exact decimal arithmetic.
///
/// Expenses arrive in integer minor units (cents) and are converted once at
/// construction; every derived value is rounded to 2 decimal places before
/// it leaves a service, so repeated additions cannot accumulate drift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

/// Running balances within this distance of zero count as settled.
const SETTLED_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// 9000 minor units -> 90.00 major units.
    pub fn from_minor_units(minor: i64) -> Self {
        Self(Decimal::new(minor, 2))
    }

    pub fn from_major_units(major: i64) -> Self {
        Self(Decimal::from(major))
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Rounds to 2 decimal places, half away from zero.
    pub fn round2(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Whether a running balance is close enough to zero to stop chasing it.
    pub fn is_settled(self) -> bool {
        self.0.abs() < SETTLED_EPSILON
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round2().0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Div<u32> for Money {
    type Output = Self;

    fn div(self, rhs: u32) -> Self::Output {
        Self(self.0 / Decimal::from(rhs))
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("an expense must have at least one participant")]
    NoParticipants,
}

/// One shared expense: a payer, a cost in minor units and the set of people
/// the cost is split equally between.
///
/// Construction normalizes the participant set: duplicate ids are dropped
/// and the payer is inserted if the caller left them out, matching what the
/// data-entry layer does before persisting. The services therefore never
/// see an expense whose payer is missing from its own split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    payer: PersonId,
    cost: Option<i64>,
    participants: Vec<PersonId>,
}

impl Expense {
    pub fn try_new(
        payer: PersonId,
        cost: Option<i64>,
        participant_ids: impl IntoIterator<Item = PersonId>,
    ) -> Result<Self, ExpenseError> {
        let mut seen = FxHashSet::default();
        let mut participants: Vec<PersonId> = participant_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        if participants.is_empty() {
            return Err(ExpenseError::NoParticipants);
        }
        if !participants.contains(&payer) {
            participants.push(payer);
        }

        Ok(Self {
            payer,
            cost,
            participants,
        })
    }

    pub fn payer(&self) -> PersonId {
        self.payer
    }

    /// Cost in major units. A missing cost counts as zero.
    pub fn cost_major(&self) -> Money {
        Money::from_minor_units(self.cost.unwrap_or(0))
    }

    pub fn participants(&self) -> &[PersonId] {
        &self.participants
    }

    pub fn includes(&self, id: PersonId) -> bool {
        self.participants.contains(&id)
    }

    /// The equal share each participant owes for this expense.
    pub fn equal_share(&self) -> Money {
        // try_new guarantees at least one participant
        self.cost_major() / self.participants.len() as u32
    }
}

/// A participant's net position: positive means they are owed money.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonBalance {
    pub id: PersonId,
    pub name: String,
    pub balance: Money,
}

/// One settlement payment. Keyed by id; display names are resolved at
/// presentation time so duplicate names cannot merge two ledgers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: PersonId,
    pub to: PersonId,
    pub amount: Money,
}
