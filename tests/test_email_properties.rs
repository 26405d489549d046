//! Property tests for email normalization and validation.

use proptest::prelude::*;
use vcard2fritz::EmailField;

/// Whitespace noise as it shows up around vCard values.
fn noise() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r')], 0..6)
        .prop_map(|chars| chars.into_iter().collect())
}

fn valid_address() -> impl Strategy<Value = String> {
    (
        "[a-z0-9]{1,12}(\\.[a-z0-9_+-]{1,8}){0,2}",
        "[a-z0-9]{1,10}(-[a-z0-9]{1,5})?",
        "(com|org|net|de|info)",
    )
        .prop_map(|(local, host, tld)| format!("{}@{}.{}", local, host, tld))
}

/// Insert tabs at arbitrary positions of `address`.
fn with_tabs(address: &str, positions: &[usize]) -> String {
    let mut out = String::new();
    for (i, c) in address.chars().enumerate() {
        if positions.contains(&i) {
            out.push('\t');
        }
        out.push(c);
    }
    out
}

fn invalid_address() -> impl Strategy<Value = String> {
    prop_oneof![
        // missing '@'
        "[a-z]{1,10}\\.[a-z]{2,4}",
        // missing domain label
        "[a-z]{1,10}@",
        // single-label domain
        "[a-z]{1,10}@[a-z]{1,10}",
        // whitespace inside
        "[a-z]{1,5} [a-z]{1,5}@example\\.com",
        // doubled '@'
        "[a-z]{1,10}@@example\\.com",
    ]
}

proptest! {
    #[test]
    fn whitespace_only_input_clears_field(
        prior in prop_oneof![Just(String::new()), valid_address()],
        blank in noise(),
    ) {
        prop_assert_eq!(EmailField::normalize(&blank), "");

        let mut field = EmailField::with_address(&prior);
        prop_assert!(field.set_value(&blank).is_ok());
        prop_assert_eq!(field.value(), "");
    }

    #[test]
    fn padded_valid_address_is_normalized(
        address in valid_address(),
        lead in noise(),
        trail in noise(),
        tabs in proptest::collection::vec(0usize..40, 0..4),
    ) {
        let raw = format!("{}{}{}", lead, with_tabs(&address, &tabs), trail);

        let mut field = EmailField::new();
        prop_assert!(field.set_value(&raw).is_ok());
        prop_assert_eq!(field.value(), EmailField::normalize(&raw));
        prop_assert_eq!(field.value(), address.as_str());
        prop_assert!(EmailField::validate(field.value()));
    }

    #[test]
    fn invalid_address_leaves_value_unchanged(
        prior in prop_oneof![Just(String::new()), valid_address()],
        bad in invalid_address(),
    ) {
        let mut field = EmailField::with_address(&prior);
        let before = field.value().to_string();

        prop_assert!(field.set_value(&bad).is_err());
        prop_assert_eq!(field.value(), before.as_str());
    }

    #[test]
    fn reassigning_current_value_is_idempotent(
        raw in prop_oneof![valid_address(), invalid_address(), noise()],
    ) {
        let mut field = EmailField::with_address(&raw);
        let current = field.value().to_string();

        prop_assert!(field.set_value(&current).is_ok());
        prop_assert_eq!(field.value(), current.as_str());
    }

    #[test]
    fn fixed_attributes_never_change(
        first in prop_oneof![valid_address(), invalid_address()],
        second in prop_oneof![valid_address(), invalid_address(), noise()],
    ) {
        let mut field = EmailField::with_address(&first);
        let _ = field.set_value(&second);

        prop_assert_eq!(field.id(), 0);
        prop_assert_eq!(field.classifier().as_str(), "private");
        prop_assert_eq!(field.to_element().id, EmailField::new().id());
    }
}
