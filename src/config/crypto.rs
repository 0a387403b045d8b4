use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

use crate::config::config::ConfigError;

pub const MAX_CODE_LENGTH: u32 = 18;

/// Numeric code generator.
///
/// Codes are drawn uniformly from `[10^(N-1), 10^N - 1]`, so the first digit
/// is never zero and every code has exactly `N` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpGenerator {
    code_length: u32,
}

impl OtpGenerator {
    pub fn new(code_length: u32) -> Result<Self, ConfigError> {
        if code_length == 0 || code_length > MAX_CODE_LENGTH {
            return Err(ConfigError::InvalidCodeLength(code_length));
        }
        Ok(Self { code_length })
    }

    pub fn code_length(&self) -> u32 {
        self.code_length
    }

    pub fn generate_otp_code(&self) -> String {
        self.generate_with(&mut OsRng)
    }

    /// `gen_range` rejection-samples, so the range stays uniform.
    pub fn generate_with<R: Rng + CryptoRng>(&self, rng: &mut R) -> String {
        let low = 10u64.pow(self.code_length - 1);
        let high = 10u64.pow(self.code_length) - 1;
        rng.gen_range(low..=high).to_string()
    }
}
