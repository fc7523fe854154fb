//! # Event Flow Tests
//!
//! Committed transactions fan out on the shared bus; rejected ones do not.
//!
//! ```text
//! LedgerExecutor ──commit──→ InMemoryEventBus ──→ audit subscriber (all)
//!                                            └──→ payments subscriber
//! ```

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use mpr_02_case_registry::NewCase;
    use mpr_03_appointment_ledger::BookingRequest;
    use shared_bus::{EventFilter, EventTopic, InMemoryEventBus, LedgerEvent};
    use shared_types::{CaseStatus, Division, Role};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    async fn next(sub: &mut shared_bus::Subscription) -> LedgerEvent {
        timeout(Duration::from_secs(1), sub.recv())
            .await
            .expect("event within a second")
            .expect("bus open")
    }

    #[tokio::test]
    async fn test_audit_trail_matches_journal() {
        let bus = Arc::new(InMemoryEventBus::new());
        let mut audit = bus.subscribe(EventFilter::all());
        let ledger = start_ledger_on(Arc::clone(&bus));
        let h = &ledger.handle;

        assert!(matches!(
            next(&mut audit).await,
            LedgerEvent::GenesisInitialized { owner: OWNER, funded_accounts: 2, .. }
        ));

        register_all(h).await;
        let draft = NewCase::new("Tuhin", 7, 115, "School uniform", Division::Chittagong, "018");
        h.add_case(REPORTER_2, draft).await.unwrap();
        h.assign_investigator(ADMIN, 1, INVESTIGATOR_2).await.unwrap();
        h.update_status(ADMIN, 1, CaseStatus::Found).await.unwrap();

        for _ in 0..5 {
            assert!(matches!(
                next(&mut audit).await,
                LedgerEvent::UserRegistered { .. }
            ));
        }
        assert_eq!(
            next(&mut audit).await,
            LedgerEvent::CaseReported {
                sequence: 6,
                case_id: 1,
                division: Division::Chittagong,
                reporter: REPORTER_2,
            }
        );
        assert_eq!(
            next(&mut audit).await,
            LedgerEvent::InvestigatorAssigned {
                sequence: 7,
                case_id: 1,
                investigator: INVESTIGATOR_2,
            }
        );
        assert_eq!(
            next(&mut audit).await,
            LedgerEvent::CaseStatusUpdated {
                sequence: 8,
                case_id: 1,
                status: CaseStatus::Found,
            }
        );

        // Every event's sequence points at the receipt that produced it.
        let receipt = h.receipt(8).unwrap();
        assert_eq!(receipt.command, "update_status");
        assert_eq!(receipt.caller, ADMIN);

        ledger.runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_rejections_publish_nothing() {
        let ledger = start_ledger();
        let h = &ledger.handle;
        register_all(h).await;
        let mut audit = h.subscribe(EventFilter::all());

        let _ = h
            .register(ADMIN, "dup", "dup", Role::Admin)
            .await
            .unwrap_err();
        let _ = h
            .update_status(ADMIN, 42, CaseStatus::Found)
            .await
            .unwrap_err();
        let draft = NewCase::new("Mitu", 30, 150, "Green scarf", Division::Rajshahi, "019");
        h.add_case(REPORTER_1, draft).await.unwrap();

        assert!(matches!(
            next(&mut audit).await,
            LedgerEvent::CaseReported { sequence: 6, case_id: 1, .. }
        ));
        assert!(audit.try_recv().unwrap().is_none());

        ledger.runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_payment_subscriber_sees_only_fees() {
        let ledger = start_ledger();
        let h = &ledger.handle;
        register_all(h).await;
        let mut payments = h.subscribe(EventFilter::topics(vec![EventTopic::Payments]));

        let draft = NewCase::new("Joy", 70, 165, "Walking stick", Division::Khulna, "015");
        h.add_case(REPORTER_1, draft).await.unwrap();
        let booking = BookingRequest {
            case_id: 1,
            investigator: INVESTIGATOR_1,
            scheduled_at: GENESIS_TIME + 7_200,
        };
        h.book_appointment(REPORTER_1, booking, fee()).await.unwrap();

        assert_eq!(
            next(&mut payments).await,
            LedgerEvent::FeeTransferred {
                sequence: 7,
                from: REPORTER_1,
                to: OWNER,
                amount: fee(),
            }
        );
        assert!(payments.try_recv().unwrap().is_none());

        ledger.runtime.shutdown().await;
    }
}
