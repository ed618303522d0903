//! Share construction service
//!
//! Turns the members an expense is split between into [`Share`] records,
//! according to the expense's [`SplitType`]. Share amounts are left
//! unrounded; a three-way equal split of 100.00 yields three shares of
//! 33.333... so that the shares still add up to the expense total.

use serde::{Deserialize, Serialize};

use crate::error::{SplitError, SplitResult};
use crate::models::{MemberId, Share, SplitType, DEFAULT_TOLERANCE};

/// One member's requested part of an expense
///
/// `percentage` is read for percentage splits, `amount` for amount splits;
/// equal splits read neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRequest {
    #[serde(alias = "user_id")]
    pub member_id: MemberId,
    #[serde(default, alias = "share_percentage")]
    pub percentage: Option<f64>,
    #[serde(default, alias = "share_amount")]
    pub amount: Option<f64>,
}

impl ShareRequest {
    pub fn equal(member_id: MemberId) -> Self {
        Self {
            member_id,
            percentage: None,
            amount: None,
        }
    }

    pub fn percentage(member_id: MemberId, percentage: f64) -> Self {
        Self {
            member_id,
            percentage: Some(percentage),
            amount: None,
        }
    }

    pub fn amount(member_id: MemberId, amount: f64) -> Self {
        Self {
            member_id,
            percentage: None,
            amount: Some(amount),
        }
    }
}

/// Builds shares for an expense total
pub struct ShareBuilder;

impl ShareBuilder {
    /// Build shares of `total` for the requested members
    pub fn build(
        total: f64,
        split_type: SplitType,
        requests: &[ShareRequest],
    ) -> SplitResult<Vec<Share>> {
        if total < DEFAULT_TOLERANCE {
            return Err(SplitError::Validation(format!(
                "Expense amount must be at least 0.01, got {:.2}",
                total
            )));
        }
        if requests.is_empty() {
            return Err(SplitError::Validation(
                "An expense must be split between at least one member".into(),
            ));
        }

        match split_type {
            SplitType::Equal => Ok(Self::equal(total, requests)),
            SplitType::Percentage => Self::by_percentage(total, requests),
            SplitType::Amount => Self::by_amount(total, requests),
        }
    }

    fn equal(total: f64, requests: &[ShareRequest]) -> Vec<Share> {
        let count = requests.len() as f64;
        requests
            .iter()
            .map(|r| Share::new(r.member_id, 100.0 / count, total / count))
            .collect()
    }

    fn by_percentage(total: f64, requests: &[ShareRequest]) -> SplitResult<Vec<Share>> {
        let mut shares = Vec::with_capacity(requests.len());
        let mut total_percentage = 0.0;

        for request in requests {
            let percentage = request.percentage.ok_or_else(|| {
                SplitError::Validation(format!(
                    "Missing share percentage for member {}",
                    request.member_id
                ))
            })?;
            if percentage < DEFAULT_TOLERANCE || percentage > 100.0 {
                return Err(SplitError::Validation(format!(
                    "Share percentage must be between 0.01 and 100, got {:.2}",
                    percentage
                )));
            }

            total_percentage += percentage;
            shares.push(Share::new(
                request.member_id,
                percentage,
                percentage / 100.0 * total,
            ));
        }

        if (total_percentage - 100.0).abs() > DEFAULT_TOLERANCE {
            return Err(SplitError::Validation(format!(
                "Share percentages must total 100%, got {:.2}%",
                total_percentage
            )));
        }

        Ok(shares)
    }

    fn by_amount(total: f64, requests: &[ShareRequest]) -> SplitResult<Vec<Share>> {
        let mut shares = Vec::with_capacity(requests.len());
        let mut total_amount = 0.0;

        for request in requests {
            let amount = request.amount.ok_or_else(|| {
                SplitError::Validation(format!(
                    "Missing share amount for member {}",
                    request.member_id
                ))
            })?;
            if amount < DEFAULT_TOLERANCE {
                return Err(SplitError::Validation(format!(
                    "Share amount must be at least 0.01, got {:.2}",
                    amount
                )));
            }

            total_amount += amount;
            shares.push(Share::new(request.member_id, amount / total * 100.0, amount));
        }

        if (total_amount - total).abs() > DEFAULT_TOLERANCE {
            return Err(SplitError::Validation(format!(
                "Share amounts total {:.2} but the expense is {:.2}",
                total_amount, total
            )));
        }

        Ok(shares)
    }
}
