//!
//! Token amount conversions between base units and decimal strings.
//!

use web3::types::U256;

/// The number of decimals of the native currency.
pub const ETHER_DECIMALS: u32 = 18;

///
/// Formats an amount of base units as a decimal string.
///
/// The fraction keeps at least one digit and drops trailing zeros, so `10^20` with 18 decimals
/// becomes `100.0` and `10^15` becomes `0.001`.
///
pub fn format_units(value: U256, decimals: u32) -> String {
    let base = U256::exp10(decimals as usize);
    let (integer, fraction) = value.div_mod(base);
    if decimals == 0 {
        return format!("{integer}.0");
    }

    let fraction = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    format!("{integer}.{fraction}")
}

///
/// Parses a decimal string into an amount of base units.
///
pub fn parse_units(amount: &str, decimals: u32) -> anyhow::Result<U256> {
    let amount = amount.trim();
    let (integer, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    if integer.is_empty() && fraction.is_empty() {
        anyhow::bail!("Amount `{amount}` is empty");
    }
    if !integer.chars().chain(fraction.chars()).all(|character| character.is_ascii_digit()) {
        anyhow::bail!("Amount `{amount}` is not a non-negative decimal number");
    }
    if fraction.len() > decimals as usize {
        anyhow::bail!("Amount `{amount}` has more than {decimals} fractional digits");
    }

    let digits = format!(
        "{}{:0<width$}",
        if integer.is_empty() { "0" } else { integer },
        fraction,
        width = decimals as usize
    );
    U256::from_dec_str(digits.as_str())
        .map_err(|error| anyhow::anyhow!("Amount `{amount}` is out of range: {error:?}"))
}
