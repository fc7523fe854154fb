//! # Registry Flow Tests
//!
//! The full lifecycle of a case across all three subsystems:
//!
//! ```text
//! Reporter ──register──→ Identity (1)
//! Reporter ──addCase───→ Cases (2) ──→ DivisionIndex
//! Admin ──assignInvestigator / updateStatus──→ Cases (2)
//! Reporter ──bookAppointment + fee──→ Appointments (3) ──→ owner balance
//! ```

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use ledger_runtime::LedgerError;
    use mpr_02_case_registry::domain::limits;
    use mpr_02_case_registry::NewCase;
    use mpr_03_appointment_ledger::BookingRequest;
    use rand::Rng;
    use shared_types::{Amount, CaseStatus, Division, ErrorKind, Role};

    fn jane_doe() -> NewCase {
        NewCase::new(
            "Jane Doe",
            16,
            160,
            "last seen at market",
            Division::Dhaka,
            "+8801700000000",
        )
    }

    // =========================================================================
    // END-TO-END SCENARIO
    // =========================================================================

    #[tokio::test]
    async fn test_reporter_admin_investigator_scenario() {
        let ledger = start_ledger();
        let h = &ledger.handle;
        h.register(REPORTER_1, "NID-A", "Reporter A", Role::Reporter)
            .await
            .unwrap();
        h.register(ADMIN, "NID-B", "Admin B", Role::Admin)
            .await
            .unwrap();
        h.register(INVESTIGATOR_1, "NID-C", "Investigator C", Role::Investigator)
            .await
            .unwrap();

        // Report
        let receipt = h.add_case(REPORTER_1, jane_doe()).await.unwrap();
        assert_eq!(receipt.output.case_id(), Some(1));
        let case = h.get_case(1).unwrap();
        assert_eq!(case.status, CaseStatus::Missing);
        assert!(case.is_unassigned());
        assert_eq!(case.reporter, REPORTER_1);

        // Assign, then assign again
        h.assign_investigator(ADMIN, 1, INVESTIGATOR_1).await.unwrap();
        assert_eq!(h.get_case(1).unwrap().investigator, Some(INVESTIGATOR_1));
        let err = h
            .assign_investigator(ADMIN, 1, INVESTIGATOR_1)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        // Book at exactly the fee
        let fee = h.appointment_fee();
        let receipt = h
            .book_appointment(
                REPORTER_1,
                BookingRequest {
                    case_id: 1,
                    investigator: INVESTIGATOR_1,
                    scheduled_at: GENESIS_TIME + 86_400,
                },
                fee,
            )
            .await
            .unwrap();
        assert_eq!(receipt.output.appointment_id(), Some(1));
        assert_eq!(h.balance_of(&ADMIN), fee);
        assert_eq!(h.balance_of(&REPORTER_1), one_unit() - fee);

        // Close, then close again
        h.update_status(ADMIN, 1, CaseStatus::Found).await.unwrap();
        let err = h
            .update_status(ADMIN, 1, CaseStatus::Found)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(h.get_case(1).unwrap().status, CaseStatus::Found);

        ledger.runtime.shutdown().await;
    }

    // =========================================================================
    // IDENTITY
    // =========================================================================

    #[tokio::test]
    async fn test_identity_queries() {
        let ledger = start_ledger();
        let h = &ledger.handle;
        register_all(h).await;

        let err = h
            .register(REPORTER_1, "X", "Again", Role::Admin)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyRegistered);
        assert!(h.is_reporter(&REPORTER_1));
        assert!(!h.is_admin(&REPORTER_1));

        assert_eq!(h.owner(), ADMIN);
        assert_eq!(h.get_user(&INVESTIGATOR_2).unwrap().name, "Inspector Nasrin");
        assert_eq!(
            h.get_user(&STRANGER).unwrap_err().kind(),
            ErrorKind::NotFound
        );

        let investigators: Vec<_> = h
            .list_investigators()
            .into_iter()
            .map(|i| i.address)
            .collect();
        assert_eq!(investigators, vec![INVESTIGATOR_1, INVESTIGATOR_2]);

        ledger.runtime.shutdown().await;
    }

    // =========================================================================
    // CASES
    // =========================================================================

    #[tokio::test]
    async fn test_add_case_authorization_and_bounds() {
        let ledger = start_ledger();
        let h = &ledger.handle;
        register_all(h).await;

        for caller in [ADMIN, INVESTIGATOR_1, STRANGER] {
            let err = h.add_case(caller, jane_doe()).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Unauthorized);
        }

        let mut too_old = jane_doe();
        too_old.age = limits::MAX_AGE + 1;
        let mut too_short = jane_doe();
        too_short.height = limits::MIN_HEIGHT_CM - 1;
        let mut bad_division = jane_doe();
        bad_division.division = 8;
        for draft in [too_old, too_short, bad_division] {
            let err = h.add_case(REPORTER_1, draft).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }

        assert_eq!(h.case_count(), 0);
        assert_eq!(
            h.get_case(1).unwrap_err(),
            LedgerError::Case(mpr_02_case_registry::CaseError::NotFound(1))
        );

        ledger.runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_assignment_requires_registered_investigator() {
        let ledger = start_ledger();
        let h = &ledger.handle;
        register_all(h).await;
        h.add_case(REPORTER_1, jane_doe()).await.unwrap();

        let err = h
            .assign_investigator(REPORTER_1, 1, INVESTIGATOR_1)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        let err = h
            .assign_investigator(ADMIN, 1, REPORTER_2)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = h
            .assign_investigator(ADMIN, 2, INVESTIGATOR_1)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(h.get_case(1).unwrap().is_unassigned());

        ledger.runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_found_case_cannot_be_assigned_or_reopened() {
        let ledger = start_ledger();
        let h = &ledger.handle;
        register_all(h).await;
        h.add_case(REPORTER_1, jane_doe()).await.unwrap();
        h.update_status(ADMIN, 1, CaseStatus::Found).await.unwrap();

        let err = h
            .assign_investigator(ADMIN, 1, INVESTIGATOR_1)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        let err = h
            .update_status(ADMIN, 1, CaseStatus::Missing)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        ledger.runtime.shutdown().await;
    }

    #[tokio::test]
    async fn test_division_index_matches_stored_cases() {
        let ledger = start_ledger();
        let h = &ledger.handle;
        register_all(h).await;

        let mut rng = rand::thread_rng();
        let mut expected: Vec<Vec<u64>> = vec![Vec::new(); Division::COUNT];
        for _ in 0..60 {
            let division = Division::ALL[rng.gen_range(0..Division::COUNT)];
            let reporter = if rng.gen_bool(0.5) { REPORTER_1 } else { REPORTER_2 };
            let mut draft = jane_doe();
            draft.division = division.code();
            let case_id = h
                .add_case(reporter, draft)
                .await
                .unwrap()
                .output
                .case_id()
                .unwrap();
            expected[division.index()].push(case_id);
        }

        for division in Division::ALL {
            let ids = h.filter_by_division(division);
            assert_eq!(ids, expected[division.index()]);
            for id in ids {
                assert_eq!(h.get_case(id).unwrap().division, division);
            }
        }

        for ascending in [true, false] {
            let ranking = h.rank_divisions(ascending);
            assert_eq!(ranking.divisions.len(), Division::COUNT);
            assert_eq!(ranking.counts.iter().sum::<u64>(), h.case_count());
            let sorted = ranking.counts.windows(2).all(|w| {
                if ascending {
                    w[0] <= w[1]
                } else {
                    w[0] >= w[1]
                }
            });
            assert!(sorted);
        }

        ledger.runtime.shutdown().await;
    }

    // =========================================================================
    // APPOINTMENTS
    // =========================================================================

    #[tokio::test]
    async fn test_booking_rules() {
        let ledger = start_ledger();
        let h = &ledger.handle;
        register_all(h).await;
        h.add_case(REPORTER_1, jane_doe()).await.unwrap();
        let request = |case_id| BookingRequest {
            case_id,
            investigator: INVESTIGATOR_2,
            scheduled_at: GENESIS_TIME + 3_600,
        };

        let err = h
            .book_appointment(INVESTIGATOR_1, request(1), fee())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        let err = h
            .book_appointment(REPORTER_1, request(9), fee())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = h
            .book_appointment(REPORTER_1, request(1), fee() - Amount::one())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientPayment);
        assert!(h.get_appointments_by_case(1).is_empty());
        assert!(h.balance_of(&OWNER).is_zero());

        // Any reporter may book on any existing case.
        h.book_appointment(REPORTER_2, request(1), fee())
            .await
            .unwrap();
        h.book_appointment(REPORTER_1, request(1), fee())
            .await
            .unwrap();

        let by_case = h.get_appointments_by_case(1);
        assert_eq!(
            by_case.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(by_case[0].reporter, REPORTER_2);
        assert_eq!(h.get_appointments(&INVESTIGATOR_2).len(), 2);
        assert!(h.get_appointments(&INVESTIGATOR_1).is_empty());
        assert_eq!(h.balance_of(&OWNER), fee() * Amount::from(2u8));

        ledger.runtime.shutdown().await;
    }
}
