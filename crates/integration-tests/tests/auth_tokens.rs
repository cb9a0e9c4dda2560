//! Integration tests for bearer token minting and verification.

use brewbox_api::middleware::JwtKeys;
use brewbox_core::UserId;

fn keys() -> JwtKeys {
    JwtKeys::new(b"f8Hq2Zr9Xm4Kp7Wn1Jd5Tb3Yg6Vc0Ls!")
}

#[test]
fn test_minted_token_verifies_to_the_same_user() {
    let user_id = UserId::generate();
    let token = keys().mint(user_id, 3600).expect("mints");

    let claims = keys().verify(&token).expect("verifies");
    assert_eq!(claims.sub, user_id);
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_expired_token_is_rejected() {
    let token = keys().mint(UserId::generate(), -60).expect("mints");
    assert!(keys().verify(&token).is_err());
}

#[test]
fn test_token_signed_with_other_secret_is_rejected() {
    let other = JwtKeys::new(b"Zq8Wd3Vf6Bh9Nk2Mx5Cr1Ty4Ug7Jp0Ls");
    let token = other.mint(UserId::generate(), 3600).expect("mints");

    assert!(keys().verify(&token).is_err());
}

#[test]
fn test_tampered_token_is_rejected() {
    let token = keys().mint(UserId::generate(), 3600).expect("mints");
    let mut tampered = token.clone();
    tampered.pop();

    assert!(keys().verify(&tampered).is_err());
}
