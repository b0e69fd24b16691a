use anchor_lang::prelude::*;

/// Zook Range Engine Error Codes
/// Every failure is local and recoverable by the caller
#[error_code]
pub enum RangeError {
    // ═══════════════════════════════════════════════════════════════════════
    // DOMAIN ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Tick or sqrt price outside the protocol domain
    #[msg("Price or tick out of range")]
    OutOfRange, // 6000

    /// Range factor is zero, negative or not finite
    #[msg("Invalid range factor")]
    InvalidFactor, // 6001

    /// Lower tick must be less than upper tick
    #[msg("Lower tick must be less than upper tick")]
    InvalidRange, // 6002

    /// Slippage is negative or overflows the amount scaling
    #[msg("Invalid slippage")]
    InvalidSlippage, // 6003

    /// Tick spacing is zero or above the maximum
    #[msg("Invalid tick spacing")]
    InvalidTickSpacing, // 6004

    // ═══════════════════════════════════════════════════════════════════════
    // INPUT ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Token decimals above the supported precision
    #[msg("Invalid token decimals")]
    InvalidDecimals, // 6005

    /// Amount text is not a non-negative decimal at the token precision
    #[msg("Invalid amount")]
    InvalidAmount, // 6006

    /// currency0 must sort below currency1
    #[msg("Invalid currency order")]
    InvalidCurrencyOrder, // 6007

    /// Snapshot tick does not match its sqrt price
    #[msg("Inconsistent pool snapshot")]
    InconsistentSnapshot, // 6008

    // ═══════════════════════════════════════════════════════════════════════
    // MATH ERRORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Arithmetic overflow in checked operation
    #[msg("Math overflow")]
    MathOverflow, // 6009

    /// Division by zero attempted
    #[msg("Division by zero")]
    DivisionByZero, // 6010
}
