use tracing::warn;

const KEY_PREFIX: &str = "OL";
const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_ATTEMPTS: usize = 16;

/// Client-side keys for locally created books: `OL` + 9 base-36 chars.
#[derive(Debug, Default)]
pub struct KeyGenerator {
    fallback_seq: u64,
}

impl KeyGenerator {
    /// Returns a key for which `taken` is false.
    pub fn next(&mut self, taken: impl Fn(&str) -> bool) -> String {
        for _ in 0..RANDOM_ATTEMPTS {
            match random_key() {
                Ok(key) if !taken(&key) => return key,
                Ok(_) => continue,
                Err(err) => {
                    warn!(error = %err, "os randomness unavailable; using local key sequence");
                    break;
                }
            }
        }
        loop {
            self.fallback_seq += 1;
            let key = format!("{}-local-{}", KEY_PREFIX, self.fallback_seq);
            if !taken(&key) {
                return key;
            }
        }
    }
}

fn random_key() -> anyhow::Result<String> {
    let mut bytes = [0u8; SUFFIX_LEN];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    let mut key = String::with_capacity(KEY_PREFIX.len() + SUFFIX_LEN);
    key.push_str(KEY_PREFIX);
    key.extend(
        bytes
            .iter()
            .map(|b| ALPHABET[(*b as usize) % ALPHABET.len()] as char),
    );
    Ok(key)
}
