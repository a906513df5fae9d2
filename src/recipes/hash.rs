/// Derives a recipe id from its title.
///
/// The upstream API hands out no identifiers, so the title is hashed with the
/// `string-hash` scheme (djb2 variant over UTF-16 units, last to first, XOR
/// mixing, unsigned 32-bit result). Different titles may collide.
pub fn recipe_id(title: &str) -> i64 {
    let units: Vec<u16> = title.encode_utf16().collect();
    let hash = units
        .into_iter()
        .rev()
        .fold(5381u32, |h, unit| h.wrapping_mul(33) ^ u32::from(unit));
    i64::from(hash)
}
