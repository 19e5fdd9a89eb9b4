//! AES key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{AesKey, RoundKeys, SCHEDULE_WORDS};
use crate::round::{
    add_round_key, inv_mix_column_word, inv_mix_columns, inv_shift_rows, inv_sub_bytes,
    mix_columns, shift_rows, sub_bytes,
};
use crate::sbox::sbox;

/// Round constants; AES-128 consumes all ten, AES-256 only seven.
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a key into `rounds + 1` encryption round keys.
pub fn expand_key(key: &AesKey) -> RoundKeys {
    let size = key.size();
    let nk = size.key_words();
    let total = size.schedule_words();

    let mut w = [0u32; SCHEDULE_WORDS];
    for (slot, word) in w.iter_mut().zip(key.words()) {
        *slot = word;
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[(i / nk) - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    RoundKeys::new(w, size.rounds())
}

/// Derives the equivalent-inverse-cipher schedule from an encryption schedule.
///
/// Round keys are taken in reverse order and every key except the first and
/// last passes through InvMixColumns.
pub fn invert_schedule(enc: &RoundKeys) -> RoundKeys {
    let rounds = enc.rounds();
    let mut w = [0u32; SCHEDULE_WORDS];
    for round in 0..=rounds {
        let src = enc.get(rounds - round);
        let dst = &mut w[round * 4..round * 4 + 4];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = if round == 0 || round == rounds {
                s
            } else {
                inv_mix_column_word(s)
            };
        }
    }
    RoundKeys::new(w, rounds)
}

/// Encrypts a single 16-byte block with an encryption schedule.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, &round_keys.get(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys.get(rounds));

    state
}

/// Decrypts a single 16-byte block with a schedule produced by [`invert_schedule`].
pub fn decrypt_block(block: &Block, inv_round_keys: &RoundKeys) -> Block {
    let rounds = inv_round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, &inv_round_keys.get(0));
    for round in 1..rounds {
        inv_sub_bytes(&mut state);
        inv_shift_rows(&mut state);
        inv_mix_columns(&mut state);
        add_round_key(&mut state, &inv_round_keys.get(round));
    }
    inv_sub_bytes(&mut state);
    inv_shift_rows(&mut state);
    add_round_key(&mut state, &inv_round_keys.get(rounds));

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::AesKey;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    // FIPS-197 Appendix A key expansion examples.
    #[test]
    fn expansion_128_matches_appendix_a1() {
        let key = AesKey::from([
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ]);
        let rks = expand_key(&key);
        assert_eq!(rks.words().len(), 44);
        assert_eq!(rks.words()[4], 0xa0fafe17);
        assert_eq!(rks.words()[43], 0xb6630ca6);
    }

    #[test]
    fn expansion_192_matches_appendix_a2() {
        let key = AesKey::from([
            0x8e, 0x73, 0xb0, 0xf7, 0xda, 0x0e, 0x64, 0x52, 0xc8, 0x10, 0xf3, 0x2b, 0x80, 0x90,
            0x79, 0xe5, 0x62, 0xf8, 0xea, 0xd2, 0x52, 0x2c, 0x6b, 0x7b,
        ]);
        let rks = expand_key(&key);
        assert_eq!(rks.words().len(), 52);
        assert_eq!(rks.words()[6], 0xfe0c91f7);
        assert_eq!(rks.words()[51], 0x01002202);
    }

    #[test]
    fn expansion_256_matches_appendix_a3() {
        let key = AesKey::from([
            0x60, 0x3d, 0xeb, 0x10, 0x15, 0xca, 0x71, 0xbe, 0x2b, 0x73, 0xae, 0xf0, 0x85, 0x7d,
            0x77, 0x81, 0x1f, 0x35, 0x2c, 0x07, 0x3b, 0x61, 0x08, 0xd7, 0x2d, 0x98, 0x10, 0xa3,
            0x09, 0x14, 0xdf, 0xf4,
        ]);
        let rks = expand_key(&key);
        assert_eq!(rks.words().len(), 60);
        assert_eq!(rks.words()[8], 0x9ba35411);
        assert_eq!(rks.words()[59], 0x706c631e);
    }

    #[test]
    fn inverse_schedule_reverses_and_keeps_ends_plain() {
        let enc = expand_key(&AesKey::from(NIST_KEY));
        let dec = invert_schedule(&enc);
        assert_eq!(dec.rounds(), enc.rounds());
        assert_eq!(dec.get(0), enc.get(10));
        assert_eq!(dec.get(10), enc.get(0));
        let mixed = enc.get(9).map(inv_mix_column_word);
        assert_eq!(dec.get(1), mixed);
    }

    #[test]
    fn encrypt_matches_nist_vector() {
        let round_keys = expand_key(&AesKey::from(NIST_KEY));
        let ct = encrypt_block(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let round_keys = invert_schedule(&expand_key(&AesKey::from(NIST_KEY)));
        let pt = decrypt_block(&NIST_CIPHER, &round_keys);
        assert_eq!(pt, NIST_PLAIN);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for size in crate::KeySize::ALL {
            for _ in 0..50 {
                let mut key_bytes = vec![0u8; size.key_len()];
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut key_bytes);
                rng.fill_bytes(&mut block);
                let key = AesKey::from_slice(&key_bytes).unwrap();
                let enc = expand_key(&key);
                let dec = invert_schedule(&enc);
                let ct = encrypt_block(&block, &enc);
                assert_eq!(decrypt_block(&ct, &dec), block);
            }
        }
    }
}
