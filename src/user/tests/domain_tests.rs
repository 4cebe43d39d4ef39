//! Unit tests for user domain types.

use crate::user::domain::{EmailAddress, User, UserDomainError};
use eyre::ensure;
use rstest::rstest;

#[rstest]
fn email_is_trimmed_and_lowercased() -> eyre::Result<()> {
    let email = EmailAddress::new("  Alice.Smith@Example.COM ")?;
    ensure!(email.as_str() == "alice.smith@example.com");
    Ok(())
}

#[rstest]
fn normalized_emails_compare_equal() -> eyre::Result<()> {
    let first = EmailAddress::new("bob@example.com")?;
    let second = EmailAddress::new(" BOB@example.com")?;
    ensure!(first == second);
    Ok(())
}

#[rstest]
fn empty_email_is_rejected() {
    assert_eq!(
        EmailAddress::new("   "),
        Err(UserDomainError::EmptyEmail)
    );
}

#[rstest]
#[case("plainaddress")]
#[case("missing-domain@")]
#[case("@missing-local.com")]
#[case("two@@example.com")]
#[case("a@b@c.com")]
#[case("nodot@example")]
#[case("dot@.example.com")]
#[case("trailing@example.com.")]
#[case("double@example..com")]
#[case("spaced name@example.com")]
fn malformed_email_is_rejected(#[case] raw: &str) {
    assert_eq!(
        EmailAddress::new(raw),
        Err(UserDomainError::InvalidEmail(raw.to_owned()))
    );
}

#[rstest]
fn user_requires_display_name() -> eyre::Result<()> {
    let email = EmailAddress::new("carol@example.com")?;
    let result = User::new("  ", email);
    ensure!(result == Err(UserDomainError::EmptyDisplayName));
    Ok(())
}

#[rstest]
fn user_name_is_trimmed() -> eyre::Result<()> {
    let user = User::new("  Carol  ", EmailAddress::new("carol@example.com")?)?;
    ensure!(user.name() == "Carol");
    ensure!(user.email().as_str() == "carol@example.com");
    Ok(())
}

#[rstest]
fn rename_validates_the_new_name() -> eyre::Result<()> {
    let mut user = User::new("Carol", EmailAddress::new("carol@example.com")?)?;

    user.rename(" Caroline ")?;
    ensure!(user.name() == "Caroline");

    let result = user.rename("");
    ensure!(result == Err(UserDomainError::EmptyDisplayName));
    ensure!(user.name() == "Caroline");
    Ok(())
}
