use soroban_sdk::{contractclient, Address, Env};

/// Constant-product router the raised funds are seeded into.
///
/// `add_liquidity` pulls both legs from `to` through allowances granted to
/// the router and mints pool shares to `to`.
#[allow(dead_code)]
#[contractclient(name = "AmmRouterClient")]
pub trait AmmRouter {
    fn add_liquidity(
        env: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128);

    fn pair_for(env: Env, token_a: Address, token_b: Address) -> Address;
}
