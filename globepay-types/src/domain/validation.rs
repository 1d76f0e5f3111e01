//! Form input checks run before anything is sent to the backend.

use crate::error::DomainError;

pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::ValidationError(format!("Invalid email address: {email}"));
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// At least 8 characters with a lowercase letter, an uppercase letter and a
/// digit. Only letters, digits and `@$!%*?&` are accepted.
pub fn validate_password(password: &str) -> Result<(), DomainError> {
    const SPECIALS: &str = "@$!%*?&";
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c));
    let strong = password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit());
    if allowed && strong {
        Ok(())
    } else {
        Err(DomainError::ValidationError(
            "Password must be at least 8 characters and contain upper case, lower case and a digit"
                .into(),
        ))
    }
}

/// Optional leading `+`, then at least 10 digits, spaces, dashes or parentheses.
pub fn validate_phone_number(phone: &str) -> Result<(), DomainError> {
    let body = phone.strip_prefix('+').unwrap_or(phone);
    let ok = body.chars().count() >= 10
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'));
    if ok {
        Ok(())
    } else {
        Err(DomainError::ValidationError(format!(
            "Invalid phone number: {phone}"
        )))
    }
}

/// 8 to 20 ASCII letters or digits.
pub fn validate_account_number(account_number: &str) -> Result<(), DomainError> {
    let len = account_number.len();
    if (8..=20).contains(&len) && account_number.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(DomainError::ValidationError(format!(
            "Invalid account number: {account_number}"
        )))
    }
}

/// Parses a user-entered amount; it must be a positive finite number.
pub fn parse_amount(input: &str) -> Result<f64, DomainError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| DomainError::ValidationError(format!("Not a number: {input}")))?;
    if !value.is_finite() {
        return Err(DomainError::NonFiniteAmount);
    }
    if value <= 0.0 {
        return Err(DomainError::ValidationError(
            "Amount must be positive".into(),
        ));
    }
    Ok(value)
}
