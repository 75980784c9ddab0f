#![no_std]


mod accounting;
mod amm;
mod events;
mod storage_types;
mod utils;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use amm::AmmRouterClient;
pub use storage_types::{CampaignConfig, CampaignPhase, SeedError, LEGS};

use storage_types::{DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT};

use soroban_sdk::{contract, contractimpl, log, panic_with_error, token, Address, Env, Vec};

#[contract]
pub struct SeedLiquidityContract;

#[contractimpl]
impl SeedLiquidityContract {
    /// Fix the campaign parameters and cache the pool the router will seed.
    ///
    /// The deadline is `now + duration`. Tokens must be distinct and both
    /// targets positive.
    pub fn __constructor(
        e: Env,
        router: Address,
        tokens: Vec<Address>,
        targets: Vec<i128>,
        duration: u64,
        unlock_delay: u64,
    ) {
        if tokens.len() != LEGS || targets.len() != LEGS || duration == 0 {
            panic_with_error!(&e, SeedError::InvalidConfig);
        }

        let token_a = tokens.get_unchecked(0);
        let token_b = tokens.get_unchecked(1);
        if token_a == token_b {
            panic_with_error!(&e, SeedError::InvalidConfig);
        }
        if targets.iter().any(|target| target <= 0) {
            panic_with_error!(&e, SeedError::InvalidConfig);
        }

        let deadline = e
            .ledger()
            .timestamp()
            .checked_add(duration)
            .unwrap_or_else(|| panic_with_error!(&e, SeedError::InvalidConfig));

        let pair = AmmRouterClient::new(&e, &router).pair_for(&token_a, &token_b);

        let config = CampaignConfig {
            router,
            tokens,
            targets,
            deadline,
            unlock_delay,
        };

        e.storage().instance().set(&DataKey::Config, &config);
        e.storage().instance().set(&DataKey::Pair, &pair);
        e.storage().instance().set(&DataKey::Total(0), &0i128);
        e.storage().instance().set(&DataKey::Total(1), &0i128);
        e.storage().instance().set(&DataKey::Provided, &false);
        e.storage().instance().set(&DataKey::Liquidity, &0i128);

        extend_instance(&e);

        log!(&e, "seed campaign configured", pair, deadline, unlock_delay);
    }

    /// Deposit up to `amounts[i]` of each token while the campaign is open.
    ///
    /// Each leg accepts at most its remaining room; only the accepted amount
    /// is pulled from the depositor's allowance.
    pub fn deposit(e: Env, depositor: Address, amounts: Vec<i128>) -> Result<(), SeedError> {
        depositor.require_auth();

        if amounts.len() != LEGS || amounts.iter().any(|amount| amount < 0) {
            return Err(SeedError::InvalidAmounts);
        }

        let config = load_config(&e);
        ensure_open(&e, &config)?;

        let mut accepted = [0i128; 2];
        for i in 0..LEGS {
            let target = config.targets.get_unchecked(i);
            accepted[i as usize] =
                accounting::accepted_amount(amounts.get_unchecked(i), target, read_total(&e, i));
        }

        if accepted.iter().all(|amount| *amount == 0) {
            return Err(SeedError::NothingToDeposit);
        }

        // Ledger first, token pulls after
        for i in 0..LEGS {
            let amount = accepted[i as usize];
            if amount == 0 {
                continue;
            }

            let total = read_total(&e, i)
                .checked_add(amount)
                .ok_or(SeedError::ArithmeticError)?;
            let balance = read_balance(&e, &depositor, i)
                .checked_add(amount)
                .ok_or(SeedError::ArithmeticError)?;

            write_total(&e, i, total);
            write_balance(&e, &depositor, i, balance);
        }

        let this = e.current_contract_address();
        for i in 0..LEGS {
            let amount = accepted[i as usize];
            if amount > 0 {
                let token_client = token::Client::new(&e, &config.tokens.get_unchecked(i));
                token_client.transfer_from(&this, &depositor, &this, &amount);
            }
        }

        extend_instance(&e);

        let total_a = read_total(&e, 0);
        let total_b = read_total(&e, 1);

        log!(&e, "deposit accepted", depositor, accepted[0], accepted[1]);

        events::emit_deposit(
            &e,
            events::DepositEvent {
                depositor,
                accepted_a: accepted[0],
                accepted_b: accepted[1],
                total_a,
                total_b,
            },
        );

        Ok(())
    }

    /// Seed the pool with exactly both targets. Callable by anyone, once.
    pub fn provide(e: Env) -> Result<(), SeedError> {
        let config = load_config(&e);

        if is_provided(&e) {
            return Err(SeedError::AlreadyProvided);
        }

        let target_a = config.targets.get_unchecked(0);
        let target_b = config.targets.get_unchecked(1);
        if read_total(&e, 0) != target_a || read_total(&e, 1) != target_b {
            return Err(SeedError::TargetsNotMet);
        }

        if utils::has_expired(&e, config.deadline) {
            return Err(SeedError::CampaignExpired);
        }

        // The flag is committed before the router can observe this contract
        let now = e.ledger().timestamp();
        e.storage().instance().set(&DataKey::Provided, &true);
        e.storage().instance().set(&DataKey::ProvidedAt, &now);

        let this = e.current_contract_address();
        let token_a = config.tokens.get_unchecked(0);
        let token_b = config.tokens.get_unchecked(1);
        let expiration_ledger = e.ledger().sequence();

        token::Client::new(&e, &token_a).approve(&this, &config.router, &target_a, &expiration_ledger);
        token::Client::new(&e, &token_b).approve(&this, &config.router, &target_b, &expiration_ledger);

        let (used_a, used_b, liquidity) = AmmRouterClient::new(&e, &config.router).add_liquidity(
            &token_a,
            &token_b,
            &target_a,
            &target_b,
            &target_a,
            &target_b,
            &this,
            &now,
        );

        if used_a != target_a || used_b != target_b || liquidity <= 0 {
            return Err(SeedError::IncompleteSeeding);
        }

        e.storage().instance().set(&DataKey::Liquidity, &liquidity);
        extend_instance(&e);

        let pair = read_pair(&e);

        log!(&e, "pool seeded", pair, liquidity);

        events::emit_provide(
            &e,
            events::ProvideEvent {
                pair,
                amount_a: used_a,
                amount_b: used_b,
                liquidity,
                provided_at: now,
            },
        );

        Ok(())
    }

    /// Transfer the depositor's pro-rata pool shares and retire the depositor.
    pub fn claim(e: Env, depositor: Address) -> Result<(), SeedError> {
        depositor.require_auth();

        let config = load_config(&e);
        let provided_at = read_provided_at(&e).ok_or(SeedError::NotProvided)?;

        if utils::is_claim_locked(&e, provided_at, config.unlock_delay) {
            return Err(SeedError::ClaimLocked);
        }

        let balances = read_balances(&e, &depositor);
        if balances.iter().all(|balance| *balance == 0) {
            return Err(SeedError::NothingToClaim);
        }

        let shares = accounting::claim_amount(read_liquidity(&e), balances, targets(&config))?;

        retire(&e, &depositor, balances)?;

        if shares > 0 {
            let pair = read_pair(&e);
            token::Client::new(&e, &pair).transfer(&e.current_contract_address(), &depositor, &shares);
        }

        extend_instance(&e);

        log!(&e, "pool shares claimed", depositor, shares);

        events::emit_claim(&e, events::ClaimEvent { depositor, shares });

        Ok(())
    }

    /// Refund everything the depositor put in once the campaign has expired
    /// without being seeded.
    pub fn bail(e: Env, depositor: Address) -> Result<(), SeedError> {
        depositor.require_auth();

        let config = load_config(&e);
        if is_provided(&e) || !utils::has_expired(&e, config.deadline) {
            return Err(SeedError::BailUnavailable);
        }

        let balances = read_balances(&e, &depositor);
        if balances.iter().all(|balance| *balance == 0) {
            return Err(SeedError::NothingToBail);
        }

        retire(&e, &depositor, balances)?;

        let this = e.current_contract_address();
        for i in 0..LEGS {
            let refund = balances[i as usize];
            if refund > 0 {
                let token_client = token::Client::new(&e, &config.tokens.get_unchecked(i));
                token_client.transfer(&this, &depositor, &refund);
            }
        }

        extend_instance(&e);

        log!(&e, "deposits refunded", depositor, balances[0], balances[1]);

        events::emit_bail(
            &e,
            events::BailEvent {
                depositor,
                refund_a: balances[0],
                refund_b: balances[1],
            },
        );

        Ok(())
    }

    /// View functions
    pub fn target(e: Env, index: u32) -> Result<i128, SeedError> {
        let index = leg_index(index)?;
        Ok(load_config(&e).targets.get_unchecked(index))
    }

    pub fn totals(e: Env, index: u32) -> Result<i128, SeedError> {
        let index = leg_index(index)?;
        Ok(read_total(&e, index))
    }

    pub fn balances(e: Env, depositor: Address, index: u32) -> Result<i128, SeedError> {
        let index = leg_index(index)?;
        Ok(read_balance(&e, &depositor, index))
    }

    /// Pool shares minted when the pool was seeded; zero before.
    pub fn liquidity(e: Env) -> i128 {
        read_liquidity(&e)
    }

    pub fn pair(e: Env) -> Address {
        read_pair(&e)
    }

    pub fn router(e: Env) -> Address {
        load_config(&e).router
    }

    pub fn tokens(e: Env) -> Vec<Address> {
        load_config(&e).tokens
    }

    pub fn deadline(e: Env) -> u64 {
        load_config(&e).deadline
    }

    pub fn unlock_delay(e: Env) -> u64 {
        load_config(&e).unlock_delay
    }

    pub fn provided(e: Env) -> bool {
        is_provided(&e)
    }

    pub fn provided_at(e: Env) -> Option<u64> {
        read_provided_at(&e)
    }

    pub fn unlock_time(e: Env) -> Option<u64> {
        let unlock_delay = load_config(&e).unlock_delay;
        read_provided_at(&e).map(|provided_at| utils::unlock_time(provided_at, unlock_delay))
    }

    pub fn phase(e: Env) -> CampaignPhase {
        let config = load_config(&e);
        utils::phase(&e, is_provided(&e), config.deadline)
    }

    /// Pool shares `depositor` would receive from a claim; zero before seeding.
    pub fn claimable(e: Env, depositor: Address) -> Result<i128, SeedError> {
        if !is_provided(&e) {
            return Ok(0);
        }

        let config = load_config(&e);
        accounting::claim_amount(
            read_liquidity(&e),
            read_balances(&e, &depositor),
            targets(&config),
        )
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn load_config(e: &Env) -> CampaignConfig {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(e, SeedError::InvalidConfig))
}

fn leg_index(index: u32) -> Result<u32, SeedError> {
    if index < LEGS {
        Ok(index)
    } else {
        Err(SeedError::InvalidIndex)
    }
}

fn targets(config: &CampaignConfig) -> [i128; 2] {
    [config.targets.get_unchecked(0), config.targets.get_unchecked(1)]
}

fn ensure_open(e: &Env, config: &CampaignConfig) -> Result<(), SeedError> {
    if is_provided(e) || utils::has_expired(e, config.deadline) {
        return Err(SeedError::CampaignExpired);
    }
    Ok(())
}

fn is_provided(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Provided).unwrap_or(false)
}

fn read_provided_at(e: &Env) -> Option<u64> {
    e.storage().instance().get(&DataKey::ProvidedAt)
}

fn read_liquidity(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::Liquidity).unwrap_or(0)
}

fn read_pair(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Pair)
        .unwrap_or_else(|| panic_with_error!(e, SeedError::InvalidConfig))
}

fn read_total(e: &Env, index: u32) -> i128 {
    e.storage().instance().get(&DataKey::Total(index)).unwrap_or(0)
}

fn write_total(e: &Env, index: u32, total: i128) {
    e.storage().instance().set(&DataKey::Total(index), &total);
}

fn read_balance(e: &Env, depositor: &Address, index: u32) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::Balance(depositor.clone(), index))
        .unwrap_or(0)
}

fn read_balances(e: &Env, depositor: &Address) -> [i128; 2] {
    [read_balance(e, depositor, 0), read_balance(e, depositor, 1)]
}

fn write_balance(e: &Env, depositor: &Address, index: u32, balance: i128) {
    let key = PersistentKey::Balance(depositor.clone(), index);
    e.storage().persistent().set(&key, &balance);
    extend_persistent(e, &key);
}

/// Zero the depositor's ledger entries and take them out of the leg totals.
fn retire(e: &Env, depositor: &Address, balances: [i128; 2]) -> Result<(), SeedError> {
    for i in 0..LEGS {
        let balance = balances[i as usize];
        if balance == 0 {
            continue;
        }

        let total = read_total(e, i)
            .checked_sub(balance)
            .ok_or(SeedError::ArithmeticError)?;
        write_total(e, i, total);
        e.storage()
            .persistent()
            .remove(&PersistentKey::Balance(depositor.clone(), i));
    }
    Ok(())
}
