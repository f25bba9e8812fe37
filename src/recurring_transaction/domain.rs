use serde::{Deserialize, Serialize};
use time::Date;

use crate::{DatabaseId, account::AccountId};

/// The database ID of a [RecurringTransaction].
pub type RecurringTransactionId = DatabaseId;

/// The integer stored for a [Frequency] was out of range.
#[derive(Debug, thiserror::Error)]
#[error("{0} is not a valid frequency code")]
pub struct FrequencyError(i64);

/// How often a recurring transaction happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// Every day.
    Daily,
    /// Every seven days.
    Weekly,
    /// Every fourteen days.
    Fortnightly,
    /// A calendar month of variable length.
    Monthly,
    /// A calendar quarter (Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec).
    Quarterly,
    /// Once a year on the same day.
    Yearly,
}

impl TryFrom<i64> for Frequency {
    type Error = FrequencyError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Frequency::Daily),
            1 => Ok(Frequency::Weekly),
            2 => Ok(Frequency::Fortnightly),
            3 => Ok(Frequency::Monthly),
            4 => Ok(Frequency::Quarterly),
            5 => Ok(Frequency::Yearly),
            _ => Err(FrequencyError(value)),
        }
    }
}

impl From<Frequency> for i64 {
    fn from(frequency: Frequency) -> Self {
        match frequency {
            Frequency::Daily => 0,
            Frequency::Weekly => 1,
            Frequency::Fortnightly => 2,
            Frequency::Monthly => 3,
            Frequency::Quarterly => 4,
            Frequency::Yearly => 5,
        }
    }
}

/// An income or expense that repeats on a regular basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransaction {
    /// The id for the recurring transaction.
    pub id: RecurringTransactionId,
    /// A free text description.
    pub description: String,
    /// The amount of each occurrence.
    pub amount: f64,
    /// How often it occurs.
    pub frequency: Frequency,
    /// The date of the first occurrence.
    pub start_date: Date,
    /// The date after which it stops, `None` if it recurs indefinitely.
    pub end_date: Option<Date>,
    /// The account it is charged to or paid into.
    pub account_id: AccountId,
}

/// The data needed to create a [RecurringTransaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewRecurringTransaction {
    /// A free text description, empty if omitted.
    #[serde(default)]
    pub description: String,
    /// The amount of each occurrence.
    pub amount: f64,
    /// How often it occurs.
    pub frequency: Frequency,
    /// The date of the first occurrence.
    pub start_date: Date,
    /// The date after which it stops.
    #[serde(default)]
    pub end_date: Option<Date>,
    /// The account it is charged to or paid into.
    pub account_id: AccountId,
}
