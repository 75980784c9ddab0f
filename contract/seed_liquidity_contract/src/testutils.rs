//! Reference constant-product router for exercising seeding off-chain.
//!
//! Pool shares are a Stellar asset contract administered by the router.
//! The first mint for a pool is `sqrt(a * b) - MINIMUM_LIQUIDITY`, with
//! `MINIMUM_LIQUIDITY` minted to the router and never released.

use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

pub const MINIMUM_LIQUIDITY: i128 = 1_000;

#[derive(Clone)]
#[contracttype]
enum RouterKey {
    Pair(Address, Address), // (TokenA, TokenB) -> share token
    Pool(Address),          // share token -> PoolState
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct PoolState {
    pub token_a: Address,
    pub token_b: Address,
    pub reserve_a: i128,
    pub reserve_b: i128,
    pub total_shares: i128,
}

#[contract]
pub struct MockAmmRouter;

#[contractimpl]
impl MockAmmRouter {
    /// Register `share_token` as the pool for (`token_a`, `token_b`).
    /// The router must already be the share token's admin.
    pub fn create_pair(e: Env, token_a: Address, token_b: Address, share_token: Address) {
        let key = RouterKey::Pair(token_a.clone(), token_b.clone());
        if e.storage().instance().has(&key) {
            panic!("pair already exists");
        }

        let pool = PoolState {
            token_a,
            token_b,
            reserve_a: 0,
            reserve_b: 0,
            total_shares: 0,
        };

        e.storage().instance().set(&key, &share_token);
        e.storage().instance().set(&RouterKey::Pool(share_token), &pool);
    }

    pub fn pair_for(e: Env, token_a: Address, token_b: Address) -> Address {
        e.storage()
            .instance()
            .get(&RouterKey::Pair(token_a, token_b))
            .expect("pair not found")
    }

    pub fn pool(e: Env, share_token: Address) -> PoolState {
        e.storage()
            .instance()
            .get(&RouterKey::Pool(share_token))
            .expect("pool not found")
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        e: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128) {
        to.require_auth();

        if e.ledger().timestamp() > deadline {
            panic!("router: expired");
        }

        let share_token = Self::pair_for(e.clone(), token_a.clone(), token_b.clone());
        let mut pool = Self::pool(e.clone(), share_token.clone());

        let (amount_a, amount_b) = optimal_amounts(
            &pool,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
        );

        let router = e.current_contract_address();
        token::Client::new(&e, &token_a).transfer_from(&router, &to, &router, &amount_a);
        token::Client::new(&e, &token_b).transfer_from(&router, &to, &router, &amount_b);

        let share_admin = token::StellarAssetClient::new(&e, &share_token);
        let shares = if pool.total_shares == 0 {
            let minted = isqrt(amount_a * amount_b) - MINIMUM_LIQUIDITY;
            share_admin.mint(&router, &MINIMUM_LIQUIDITY);
            pool.total_shares = MINIMUM_LIQUIDITY;
            minted
        } else {
            let by_a = amount_a * pool.total_shares / pool.reserve_a;
            let by_b = amount_b * pool.total_shares / pool.reserve_b;
            by_a.min(by_b)
        };

        if shares <= 0 {
            panic!("router: insufficient liquidity minted");
        }

        share_admin.mint(&to, &shares);

        pool.reserve_a += amount_a;
        pool.reserve_b += amount_b;
        pool.total_shares += shares;
        e.storage().instance().set(&RouterKey::Pool(share_token), &pool);

        (amount_a, amount_b, shares)
    }
}

fn optimal_amounts(
    pool: &PoolState,
    amount_a_desired: i128,
    amount_b_desired: i128,
    amount_a_min: i128,
    amount_b_min: i128,
) -> (i128, i128) {
    if pool.reserve_a == 0 && pool.reserve_b == 0 {
        return (amount_a_desired, amount_b_desired);
    }

    let amount_b_optimal = amount_a_desired * pool.reserve_b / pool.reserve_a;
    if amount_b_optimal <= amount_b_desired {
        if amount_b_optimal < amount_b_min {
            panic!("router: insufficient b amount");
        }
        return (amount_a_desired, amount_b_optimal);
    }

    let amount_a_optimal = amount_b_desired * pool.reserve_a / pool.reserve_b;
    if amount_a_optimal < amount_a_min {
        panic!("router: insufficient a amount");
    }
    (amount_a_optimal, amount_b_desired)
}

pub fn isqrt(n: i128) -> i128 {
    if n <= 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
