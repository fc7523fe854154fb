//! # Integration Tests
//!
//! Cross-subsystem flows driven through `LedgerHandle`.

pub mod event_flows;
pub mod registry_flows;

#[cfg(test)]
pub(crate) mod fixtures {
    use ledger_runtime::clock::ManualClock;
    use ledger_runtime::{GenesisConfig, LedgerConfig, LedgerHandle, LedgerRuntime};
    use shared_bus::InMemoryEventBus;
    use shared_types::{Address, Amount, Role};
    use std::sync::Arc;

    pub const ADMIN: Address = Address::new([0xA1; 20]);
    /// The deploying admin owns the registry and collects fees.
    pub const OWNER: Address = ADMIN;
    pub const REPORTER_1: Address = Address::new([0xB1; 20]);
    pub const REPORTER_2: Address = Address::new([0xB2; 20]);
    pub const INVESTIGATOR_1: Address = Address::new([0xC1; 20]);
    pub const INVESTIGATOR_2: Address = Address::new([0xC2; 20]);
    pub const STRANGER: Address = Address::new([0xEE; 20]);

    pub const GENESIS_TIME: u64 = 1_700_000_000;

    /// 0.01 in 18-decimal base units.
    pub fn fee() -> Amount {
        Amount::from(10_000_000_000_000_000u64)
    }

    /// 1.0 in 18-decimal base units.
    pub fn one_unit() -> Amount {
        Amount::from(1_000_000_000_000_000_000u64)
    }

    pub struct TestLedger {
        pub runtime: LedgerRuntime,
        pub handle: LedgerHandle,
        pub clock: Arc<ManualClock>,
        pub bus: Arc<InMemoryEventBus>,
    }

    /// Start a ledger with both reporters funded and nobody registered.
    pub fn start_ledger() -> TestLedger {
        let bus = Arc::new(InMemoryEventBus::new());
        start_ledger_on(Arc::clone(&bus))
    }

    pub fn start_ledger_on(bus: Arc<InMemoryEventBus>) -> TestLedger {
        let genesis = GenesisConfig {
            timestamp: Some(GENESIS_TIME),
            ..GenesisConfig::devnet(OWNER)
        }
        .with_allocation(REPORTER_1, one_unit())
        .with_allocation(REPORTER_2, one_unit());
        let config = LedgerConfig {
            genesis,
            ..Default::default()
        };

        let clock = Arc::new(ManualClock::new(GENESIS_TIME + 60));
        let runtime = LedgerRuntime::start_with(config, clock.clone(), Arc::clone(&bus))
            .expect("valid test config");
        let handle = runtime.handle();
        TestLedger {
            runtime,
            handle,
            clock,
            bus,
        }
    }

    /// Register the standard cast.
    pub async fn register_all(handle: &LedgerHandle) {
        let cast = [
            (ADMIN, "1990000000001", "Farhana Admin", Role::Admin),
            (REPORTER_1, "1990000000002", "Rahim Uddin", Role::Reporter),
            (REPORTER_2, "1990000000003", "Salma Begum", Role::Reporter),
            (INVESTIGATOR_1, "1990000000004", "Inspector Karim", Role::Investigator),
            (INVESTIGATOR_2, "1990000000005", "Inspector Nasrin", Role::Investigator),
        ];
        for (address, nid, name, role) in cast {
            handle
                .register(address, nid, name, role)
                .await
                .expect("registration succeeds");
        }
    }
}
