use crate::models::address::AliasAddress;
use rand::Rng;

const SUFFIX_MIN: u32 = 10_000;
const SUFFIX_MAX: u32 = 99_999;

fn random_suffix<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(SUFFIX_MIN..=SUFFIX_MAX)
}

fn normalize(name: &str) -> String {
    // Lowercase the string and drop every whitespace character, internal
    // ones included. "John Doe" becomes "johndoe".
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Derives an alias address from a name.
///
/// Takes the raw name rather than a validated one so it stays safe to call
/// on its own: a name that normalizes to nothing yields `None` instead of an
/// address with an empty local-part. The RNG is injected so tests can seed a
/// deterministic one; production callers pass `rand::thread_rng()`.
/// Suffixes are drawn independently per call and are not unique.
pub fn generate_alias<R: Rng>(name: &str, rng: &mut R) -> Option<AliasAddress> {
    let local_part = normalize(name);
    if local_part.is_empty() {
        return None;
    }

    Some(AliasAddress {
        local_part,
        suffix: random_suffix(rng),
    })
}
