//! End-to-end loan flows
//!
//! Drives the manager through whole borrow/return cycles with the test
//! doubles, then the desk front end with the real adapters.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::adapters::{LogNotifier, StaticUserDirectory};
    use crate::app::LoanManager;
    use crate::desk::Desk;
    use crate::domain::entities::{TitleId, UserId};
    use crate::test_utils::{
        seeded_manager, test_title, test_user, ManagerHarness, MockUserDirectory,
        RecordingNotifier, ACTIVE_USER,
    };

    /// Register, borrow, return: copies go 10 -> 9 -> 10 with one message per step
    #[test]
    fn borrow_and_return_round_trip() {
        let ManagerHarness {
            mut manager,
            notifier,
            users,
        } = seeded_manager();

        assert!(manager.borrow_book(&test_title(), &test_user()));
        assert_eq!(manager.available_copies(&test_title()), 9);
        notifier.assert_single(ACTIVE_USER, "You have borrowed the book: book1");

        notifier.clear();
        assert!(manager.return_book(&test_title(), &test_user()));
        assert_eq!(manager.available_copies(&test_title()), 10);
        assert_eq!(manager.borrower_of(&test_title()), None);
        notifier.assert_single(ACTIVE_USER, "You have returned the book: book1");

        // Returns never consult the directory
        assert_eq!(users.lookups(), vec![test_user()]);
    }

    /// A user deactivated mid-loan can still return, but cannot borrow again
    #[test]
    fn deactivated_user_can_return_but_not_borrow() {
        let ManagerHarness {
            mut manager,
            notifier,
            users,
        } = seeded_manager();
        assert!(manager.borrow_book(&test_title(), &test_user()));

        users.deactivate(&test_user());
        notifier.clear();

        assert!(manager.return_book(&test_title(), &test_user()));
        assert!(!manager.borrow_book(&test_title(), &test_user()));

        assert_eq!(
            notifier.sent(),
            vec![
                (test_user(), "You have returned the book: book1".to_string()),
                (test_user(), "Your account is not active.".to_string()),
            ]
        );
        assert_eq!(manager.available_copies(&test_title()), 10);
        assert_eq!(manager.loans().count(), 0);
    }

    /// Several titles on loan at once are tracked independently
    #[test]
    fn independent_titles() {
        let users = Arc::new(
            MockUserDirectory::new()
                .with_active_user("alice")
                .with_active_user("bob"),
        );
        let notifier = Arc::new(RecordingNotifier::new());
        let mut manager = LoanManager::new(users, notifier.clone());
        let dune = TitleId::from("dune");
        let emma = TitleId::from("emma");
        let alice = UserId::from("alice");
        let bob = UserId::from("bob");
        manager.add_book(dune.clone(), 1);
        manager.add_book(emma.clone(), 3);

        assert!(manager.borrow_book(&dune, &alice));
        assert!(manager.borrow_book(&emma, &bob));
        assert!(!manager.borrow_book(&dune, &bob));

        assert_eq!(manager.borrower_of(&dune), Some(&alice));
        assert_eq!(manager.borrower_of(&emma), Some(&bob));
        assert!(!manager.return_book(&dune, &bob));
        assert!(manager.return_book(&dune, &alice));

        let snapshot = manager.snapshot();
        assert_eq!(snapshot.copies_of(&dune), 1);
        assert_eq!(snapshot.copies_of(&emma), 2);
        assert_eq!(snapshot.loans.len(), 1);
        assert_eq!(notifier.count(), 3);
    }

    /// The same scenario through the desk with the production adapters
    #[test]
    fn desk_session() {
        let users = Arc::new(StaticUserDirectory::new([UserId::from("user_active")]));
        let mut desk = Desk::new(users, Arc::new(LogNotifier::new()));
        let script = "\
# seed
add book1 10
borrow book1 user_active
copies book1
borrow book1 user_inactive
return book1 user_active
copies book1
who book1
fee 15 premium
";
        let mut output = Vec::new();

        desk.run(script.as_bytes(), &mut output).unwrap();

        let lines: Vec<String> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(
            lines,
            vec![
                "added book1 (10 copies)",
                "borrowed",
                "notify user_active: You have borrowed the book: book1",
                "9",
                "rejected",
                "notify user_inactive: Your account is not active.",
                "returned",
                "notify user_active: You have returned the book: book1",
                "10",
                "none",
                "6.00",
            ]
        );
    }
}
