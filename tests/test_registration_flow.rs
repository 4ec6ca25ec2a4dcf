//! Tests for the citizen registration flow gates: the only validation is a
//! digit-length check on each of the two identity fields.

use govtrack::core::flow::{
    AADHAAR_DIGITS, OTP_DIGITS, RegistrationFlow, RegistrationStep, digits_only,
};

#[test]
fn non_digits_are_stripped_as_typed() {
    assert_eq!(digits_only("1234 5678 9012", AADHAAR_DIGITS), "123456789012");
    assert_eq!(digits_only("12ab34", AADHAAR_DIGITS), "1234");
    assert_eq!(digits_only("", AADHAAR_DIGITS), "");
    // Truncated at the field length.
    assert_eq!(digits_only("1234567890123456", AADHAAR_DIGITS), "123456789012");
    assert_eq!(digits_only("9876543", OTP_DIGITS), "987654");
}

#[test]
fn aadhaar_gate_requires_exactly_twelve_digits() {
    let mut flow = RegistrationFlow::default();
    flow.start_registration();
    assert_eq!(flow.step, RegistrationStep::Aadhaar);

    flow.set_aadhaar("12345678901");
    assert!(!flow.aadhaar_valid());
    assert!(!flow.submit_aadhaar());
    assert_eq!(flow.step, RegistrationStep::Aadhaar);

    // Non-digit input does not sneak length past the gate.
    flow.set_aadhaar("12345678901x");
    assert!(!flow.aadhaar_valid());
    assert!(!flow.submit_aadhaar());

    flow.set_aadhaar("123456789012");
    assert!(flow.aadhaar_valid());
    assert!(flow.submit_aadhaar());
    assert_eq!(flow.step, RegistrationStep::Otp);
}

#[test]
fn otp_gate_requires_exactly_six_digits() {
    let mut flow = RegistrationFlow::default();
    flow.start_registration();
    flow.set_aadhaar("123456789012");
    assert!(flow.submit_aadhaar());

    flow.set_otp("12345");
    assert!(!flow.submit_otp());
    assert_eq!(flow.step, RegistrationStep::Otp);

    flow.set_otp("123456");
    assert!(flow.submit_otp());
    assert_eq!(flow.step, RegistrationStep::Register);
}

#[test]
fn submitting_out_of_step_is_rejected() {
    let mut flow = RegistrationFlow::default();
    assert_eq!(flow.step, RegistrationStep::Login);

    // Valid input alone is not enough; the flow must be on that step.
    flow.set_aadhaar("123456789012");
    assert!(!flow.submit_aadhaar());
    assert_eq!(flow.step, RegistrationStep::Login);

    flow.set_otp("123456");
    assert!(!flow.submit_otp());
    assert_eq!(flow.step, RegistrationStep::Login);
}

#[test]
fn resend_code_returns_to_the_aadhaar_form() {
    let mut flow = RegistrationFlow::default();
    flow.start_registration();
    flow.set_aadhaar("123456789012");
    assert!(flow.submit_aadhaar());

    flow.back_to_aadhaar();
    assert_eq!(flow.step, RegistrationStep::Aadhaar);

    flow.back_to_login();
    assert_eq!(flow.step, RegistrationStep::Login);
}
