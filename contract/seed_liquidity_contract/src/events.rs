use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct DepositEvent {
    pub depositor: Address,
    pub accepted_a: i128,
    pub accepted_b: i128,
    pub total_a: i128,
    pub total_b: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ProvideEvent {
    pub pair: Address,
    pub amount_a: i128,
    pub amount_b: i128,
    pub liquidity: i128,
    pub provided_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ClaimEvent {
    pub depositor: Address,
    pub shares: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct BailEvent {
    pub depositor: Address,
    pub refund_a: i128,
    pub refund_b: i128,
}

pub fn emit_deposit(env: &Env, event: DepositEvent) {
    env.events().publish(
        (Symbol::new(env, "seed"), Symbol::new(env, "deposit")),
        event,
    );
}

pub fn emit_provide(env: &Env, event: ProvideEvent) {
    env.events().publish(
        (Symbol::new(env, "seed"), Symbol::new(env, "provide")),
        event,
    );
}

pub fn emit_claim(env: &Env, event: ClaimEvent) {
    env.events().publish(
        (Symbol::new(env, "seed"), Symbol::new(env, "claim")),
        event,
    );
}

pub fn emit_bail(env: &Env, event: BailEvent) {
    env.events().publish(
        (Symbol::new(env, "seed"), Symbol::new(env, "bail")),
        event,
    );
}
