//! Local state for the citizen login/registration flow. The steps are
//! cosmetic: the only gates are client-side digit-length checks, nothing is
//! verified against a real identity provider, and the terminal transition
//! always succeeds.

/// Required length of an Aadhaar number.
pub const AADHAAR_DIGITS: usize = 12;

/// Required length of a verification code.
pub const OTP_DIGITS: usize = 6;

/// Which form the citizen login page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationStep {
    #[default]
    Login,
    Aadhaar,
    Otp,
    Register,
}

/// Input state of the citizen login/registration flow.
#[derive(Debug, Clone, Default)]
pub struct RegistrationFlow {
    pub step: RegistrationStep,
    pub email: String,
    pub aadhaar: String,
    pub otp: String,
}

impl RegistrationFlow {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Non-digits are stripped as typed, mirroring the input mask.
    pub fn set_aadhaar(&mut self, value: &str) {
        self.aadhaar = digits_only(value, AADHAAR_DIGITS);
    }

    pub fn set_otp(&mut self, value: &str) {
        self.otp = digits_only(value, OTP_DIGITS);
    }

    pub fn aadhaar_valid(&self) -> bool {
        self.aadhaar.len() == AADHAAR_DIGITS
    }

    pub fn otp_valid(&self) -> bool {
        self.otp.len() == OTP_DIGITS
    }

    /// "Register with Aadhaar" from the login form.
    pub fn start_registration(&mut self) {
        self.step = RegistrationStep::Aadhaar;
    }

    pub fn back_to_login(&mut self) {
        self.step = RegistrationStep::Login;
    }

    /// "Resend Code" returns to the Aadhaar form.
    pub fn back_to_aadhaar(&mut self) {
        self.step = RegistrationStep::Aadhaar;
    }

    /// Advance to the OTP step. Returns whether the gate passed; anything
    /// other than exactly 12 digits keeps the flow where it is.
    pub fn submit_aadhaar(&mut self) -> bool {
        if self.step == RegistrationStep::Aadhaar && self.aadhaar_valid() {
            self.step = RegistrationStep::Otp;
            true
        } else {
            false
        }
    }

    /// Advance to the registration step. Gated on exactly 6 digits.
    pub fn submit_otp(&mut self) -> bool {
        if self.step == RegistrationStep::Otp && self.otp_valid() {
            self.step = RegistrationStep::Register;
            true
        } else {
            false
        }
    }
}

/// Keep only ASCII digits, truncated to `max` characters.
pub fn digits_only(input: &str, max: usize) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(max)
        .collect()
}
