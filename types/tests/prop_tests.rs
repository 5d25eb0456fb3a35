use proptest::prelude::*;

use atrium_types::{Email, Timestamp};

proptest! {
    /// Email canonicalization is idempotent: re-parsing a parsed address
    /// yields the same canonical string.
    #[test]
    fn email_parse_idempotent(local in "[a-zA-Z0-9.]{1,16}", domain in "[a-zA-Z0-9.]{1,16}") {
        let raw = format!(" {local}@{domain} ");
        if let Ok(email) = Email::parse(&raw) {
            let reparsed = Email::parse(email.as_str()).unwrap();
            prop_assert_eq!(reparsed.as_str(), email.as_str());
        }
    }

    /// Email comparison ignores case.
    #[test]
    fn email_case_insensitive(local in "[a-z0-9]{1,16}", domain in "[a-z0-9]{1,16}") {
        let lower = Email::parse(&format!("{local}@{domain}.example")).unwrap();
        let upper = Email::parse(&format!("{}@{}.EXAMPLE", local.to_uppercase(), domain.to_uppercase())).unwrap();
        prop_assert_eq!(lower, upper);
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Timestamp elapsed_since: elapsed_since(now) = now - self (saturating).
    #[test]
    fn timestamp_elapsed_since(base in 0u64..1_000_000, offset in 0u64..1_000_000) {
        let t = Timestamp::new(base);
        let now = Timestamp::new(base + offset);
        prop_assert_eq!(t.elapsed_since(now), offset);
    }

    /// Timestamp elapsed_since saturates to 0 when now < self.
    #[test]
    fn timestamp_elapsed_since_saturates(
        base in 1u64..1_000_000,
        deficit in 1u64..1_000_000,
    ) {
        let later = Timestamp::new(base + deficit);
        let earlier = Timestamp::new(base);
        prop_assert_eq!(later.elapsed_since(earlier), 0);
    }

    /// Timestamp has_expired agrees with manual arithmetic.
    #[test]
    fn timestamp_has_expired_correct(
        start in 0u64..500_000,
        duration in 1u64..500_000,
        offset in 0u64..1_000_000,
    ) {
        let t = Timestamp::new(start);
        let now = Timestamp::new(start.saturating_add(offset));
        prop_assert_eq!(t.has_expired(duration, now), offset >= duration);
    }
}
