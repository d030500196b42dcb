//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! Rules that guard database check constraints live here so the API can
//! reject bad input before touching the database.

use rust_decimal::Decimal;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
///
/// Policy: at least 8 characters, at least one digit, at least one
/// uppercase letter.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("A senha deve ter pelo menos 8 caracteres".to_string());
    }
    if password.len() > 128 {
        return Err("Senha muito longa".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("A senha deve conter pelo menos um número".to_string());
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("A senha deve conter pelo menos uma letra maiúscula".to_string());
    }
    Ok(())
}

/// Validate a person name field (primeiro_nome / ultimo_nome)
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Name too long".to_string());
    }
    Ok(())
}

/// Validate a phone number, if present
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.len() > 20 {
        return Err("Phone number too long".to_string());
    }
    Ok(())
}

/// Validate the month-close day setting (1..=31)
pub fn validate_closing_day(day: i32) -> Result<(), String> {
    if !(1..=31).contains(&day) {
        return Err("Dia de fechamento deve estar entre 1 e 31".to_string());
    }
    Ok(())
}

/// Validate a hex display color like `#FF6B6B`
pub fn validate_hex_color(color: &str) -> Result<(), String> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err("Color must be a hex value like #FF6B6B".to_string());
    }
    Ok(())
}

/// Validate a monetary amount that must be strictly positive
pub fn validate_positive_amount(amount: Decimal) -> Result<(), String> {
    if amount <= Decimal::ZERO {
        return Err("Amount must be positive".to_string());
    }
    Ok(())
}

/// Validate a monetary amount that must not be negative
pub fn validate_non_negative_amount(amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        return Err("Amount cannot be negative".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("a@x.com")]
    #[case("user.name@example.co.uk")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(validate_email(email).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("a b@x.com")]
    #[case("a@x")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(validate_email(email).is_err());
    }

    #[rstest]
    #[case("Abcdef12")] // minimum acceptable: 8 chars, digit, uppercase
    #[case("Sup3rSecreta")]
    fn test_valid_passwords(#[case] password: &str) {
        assert!(validate_password(password).is_ok());
    }

    #[rstest]
    #[case("Abcdef1")] // 7 chars
    #[case("abcdefg1")] // no uppercase
    #[case("Abcdefgh")] // no digit
    #[case("")]
    fn test_invalid_passwords(#[case] password: &str) {
        assert!(validate_password(password).is_err());
    }

    #[test]
    fn test_closing_day_bounds() {
        assert!(validate_closing_day(1).is_ok());
        assert!(validate_closing_day(31).is_ok());
        assert!(validate_closing_day(0).is_err());
        assert!(validate_closing_day(32).is_err());
    }

    #[rstest]
    #[case("#FF6B6B", true)]
    #[case("#4ecdc4", true)]
    #[case("FF6B6B", false)]
    #[case("#FF6B6", false)]
    #[case("#GG6B6B", false)]
    fn test_hex_color(#[case] color: &str, #[case] ok: bool) {
        assert_eq!(validate_hex_color(color).is_ok(), ok);
    }

    #[test]
    fn test_amount_validation() {
        assert!(validate_positive_amount(dec!(0.01)).is_ok());
        assert!(validate_positive_amount(Decimal::ZERO).is_err());
        assert!(validate_non_negative_amount(Decimal::ZERO).is_ok());
        assert!(validate_non_negative_amount(dec!(-1)).is_err());
    }
}
