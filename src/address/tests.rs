use super::*;

#[test]
fn test_normalize_lowercases_and_trims() {
    let normalized = normalize_address("  Alice@Example.COM\n").unwrap();
    assert_eq!(normalized.as_str(), "alice@example.com");
    assert_eq!(normalized.domain(), "example.com");
}

#[test]
fn test_normalize_splits_on_first_at() {
    // Quoted local parts may legally contain '@'; the domain starts after the first one
    let normalized = normalize_address("a@b@example.org").unwrap();
    assert_eq!(normalized.domain(), "b@example.org");
}

#[test]
fn test_normalize_rejects_missing_at() {
    assert_eq!(
        normalize_address("alice.example.com"),
        Err(AvatarError::InvalidAddress("alice.example.com".to_string()))
    );
}

#[test]
fn test_normalize_rejects_empty_domain() {
    assert!(normalize_address("alice@").is_err());
    assert!(normalize_address("   ").is_err());
}

#[test]
fn test_normalize_is_case_and_whitespace_invariant() {
    let variants = ["bob@example.net", "BOB@EXAMPLE.NET", " Bob@Example.Net\t"];
    let normalized: Vec<NormalizedAddress> = variants
        .iter()
        .map(|v| normalize_address(v).unwrap())
        .collect();
    assert!(normalized.windows(2).all(|pair| pair[0] == pair[1]));
}
