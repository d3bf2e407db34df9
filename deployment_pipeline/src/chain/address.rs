//!
//! Account address helpers.
//!

use web3::types::Address;

///
/// Renders the address in the EIP-55 mixed-case checksum form.
///
pub fn to_checksum(address: &Address) -> String {
    let lowercase = hex::encode(address.as_bytes());
    let hash = web3::signing::keccak256(lowercase.as_bytes());

    let mut result = String::with_capacity(2 + lowercase.len());
    result.push_str("0x");
    for (index, character) in lowercase.chars().enumerate() {
        let nibble = if index % 2 == 0 {
            hash[index / 2] >> 4
        } else {
            hash[index / 2] & 0x0f
        };
        if character.is_ascii_alphabetic() && nibble >= 8 {
            result.push(character.to_ascii_uppercase());
        } else {
            result.push(character);
        }
    }
    result
}

///
/// Parses a hex address with or without the `0x` prefix. The checksum is not verified.
///
pub fn parse(address: &str) -> anyhow::Result<Address> {
    let trimmed = address.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes =
        hex::decode(digits).map_err(|error| anyhow::anyhow!("Address `{address}`: {error}"))?;
    if bytes.len() != Address::len_bytes() {
        anyhow::bail!(
            "Address `{address}` must be {} bytes long, found {}",
            Address::len_bytes(),
            bytes.len()
        );
    }
    Ok(Address::from_slice(bytes.as_slice()))
}

///
/// Derives an address nobody holds the key of from a seed.
///
/// Used for the interaction roles the node has no account for.
///
pub fn throwaway(seed: &str) -> Address {
    let hash = web3::signing::keccak256(seed.as_bytes());
    Address::from_slice(&hash[hash.len() - Address::len_bytes()..])
}
