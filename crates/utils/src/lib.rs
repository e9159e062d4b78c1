use rand::Rng;

const SECRET_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                abcdefghijklmnopqrstuvwxyz\
                                0123456789";
const BASE36_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Fixed length of every share token
pub const SHARE_TOKEN_LENGTH: usize = 32;
const SHARE_TOKEN_BYTES: usize = 24;

pub fn create_random_secret(secret_length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..secret_length)
        .map(|_| {
            let pos = rng.gen_range(0..SECRET_CHARSET.len());
            SECRET_CHARSET[pos] as char
        })
        .collect()
}

/// Mints an unguessable share token: 24 random bytes from the thread
/// CSPRNG, base-36 encoded and padded to a fixed 32 chars. The token
/// carries no structure of any underlying id.
pub fn create_share_token() -> String {
    let mut bytes = [0u8; SHARE_TOKEN_BYTES];
    rand::thread_rng().fill(&mut bytes);
    encode_base36_fixed(&bytes)
}

// Repeated div-mod of the big-endian byte string by 36. Digits are
// collected least significant first and clamped to the fixed token
// length, which still leaves over 160 bits of entropy.
fn encode_base36_fixed(bytes: &[u8]) -> String {
    let mut scratch = bytes.to_vec();
    let mut digits = Vec::with_capacity(SHARE_TOKEN_LENGTH);
    while scratch.iter().any(|&b| b != 0) {
        let mut remainder = 0u32;
        for b in scratch.iter_mut() {
            let acc = remainder * 256 + u32::from(*b);
            *b = (acc / 36) as u8;
            remainder = acc % 36;
        }
        digits.push(BASE36_CHARSET[remainder as usize]);
    }
    digits.truncate(SHARE_TOKEN_LENGTH);
    while digits.len() < SHARE_TOKEN_LENGTH {
        digits.push(b'0');
    }
    digits.reverse();
    String::from_utf8(digits).unwrap()
}
