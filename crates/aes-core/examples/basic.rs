//! Encrypts and decrypts one block under each key size.

use aes_core::{CipherState, KeySize};

fn main() -> Result<(), aes_core::Error> {
    let block = *b"single AES block";

    for size in KeySize::ALL {
        // Deterministic key for reproducibility in the example.
        let key: Vec<u8> = (0..size.key_len() as u8).collect();
        let state = CipherState::new(&key, key.len())?;

        let ciphertext = state.encrypt_block(&block)?;
        let recovered = state.decrypt_block(&ciphertext)?;
        assert_eq!(recovered, block);

        println!("{size} ({} rounds): {}", state.rounds(), hex::encode(ciphertext));
    }

    println!("example succeeded; every key size round-trips");
    Ok(())
}
