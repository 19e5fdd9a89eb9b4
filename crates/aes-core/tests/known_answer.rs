//! Published single-block vectors for every key size.

use aes_core::{CipherState, KeySize};

struct Vector {
    key: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
}

// FIPS-197 Appendix C.
const FIPS_197: [Vector; 3] = [
    Vector {
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    Vector {
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    Vector {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
];

// SP 800-38A F.1, first ECB block of each key size.
const SP_800_38A: [Vector; 3] = [
    Vector {
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "3ad77bb40d7a3660a89ecaf32466ef97",
    },
    Vector {
        key: "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "bd334f1d6e45f25ff712a214571fa5cc",
    },
    Vector {
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "f3eed1bdb5d2a03c064b5a7e3db181f8",
    },
];

fn check(vectors: &[Vector]) {
    for (v, size) in vectors.iter().zip(KeySize::ALL) {
        let key = hex::decode(v.key).unwrap();
        let pt = hex::decode(v.plaintext).unwrap();
        let ct = hex::decode(v.ciphertext).unwrap();

        let state = CipherState::new(&key, key.len()).unwrap();
        assert_eq!(state.key_size(), size);
        assert_eq!(state.encrypt_block(&pt).unwrap().as_slice(), ct, "{size} encrypt");
        assert_eq!(state.decrypt_block(&ct).unwrap().as_slice(), pt, "{size} decrypt");
    }
}

#[test]
fn fips_197_appendix_c() {
    check(&FIPS_197);
}

#[test]
fn sp_800_38a_ecb_first_block() {
    check(&SP_800_38A);
}

#[test]
fn all_zero_key_and_block() {
    let cases = [
        (16, "66e94bd4ef8a2c3b884cfa59ca342b2e"),
        (32, "dc95c078a2408989ad48a21492842087"),
    ];
    for (len, expected) in cases {
        let state = CipherState::from_key(&vec![0u8; len]).unwrap();
        assert_eq!(hex::encode(state.encrypt(&[0u8; 16])), expected);
    }
}
