use crate::storage_types::SeedError;

/// Portion of `requested` that still fits under `target`.
///
/// Over-submission is capped rather than rejected; a negative request or a
/// full leg accepts nothing.
pub fn accepted_amount(requested: i128, target: i128, total: i128) -> i128 {
    let room = target.saturating_sub(total).max(0);
    requested.min(room).max(0)
}

/// Pool shares reserved for the depositors of one token leg.
pub fn leg_allocation(liquidity: i128) -> i128 {
    liquidity / 2
}

/// floor(allocation * contribution / leg_total)
pub fn leg_share(allocation: i128, contribution: i128, leg_total: i128) -> Result<i128, SeedError> {
    if contribution <= 0 || leg_total <= 0 {
        return Ok(0);
    }

    allocation
        .checked_mul(contribution)
        .map(|scaled| scaled / leg_total)
        .ok_or(SeedError::ArithmeticError)
}

/// Pool shares owed to a depositor across both legs.
///
/// Each leg is split pro-rata against its fixed total; the truncated
/// remainder stays with the coordinator.
pub fn claim_amount(
    liquidity: i128,
    balances: [i128; 2],
    leg_totals: [i128; 2],
) -> Result<i128, SeedError> {
    let allocation = leg_allocation(liquidity);

    let mut shares: i128 = 0;
    for (balance, leg_total) in balances.iter().zip(leg_totals.iter()) {
        let share = leg_share(allocation, *balance, *leg_total)?;
        shares = shares.checked_add(share).ok_or(SeedError::ArithmeticError)?;
    }

    Ok(shares)
}
