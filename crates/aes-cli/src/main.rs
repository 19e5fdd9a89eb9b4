//! Command-line interface for single-block AES operations.

#![forbid(unsafe_code)]

mod logging;

use aes_core::{CipherState, KeySize, RoundKeys};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{info, metadata::LevelFilter};

/// Single-block AES CLI.
#[derive(Parser)]
#[command(
    name = "aesblk",
    version,
    author,
    about = "AES-128/192/256 single-block encryption, decryption and self-tests"
)]
struct Cli {
    /// Log level used when RUST_LOG is unset.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Encrypt {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Decrypt {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the expanded key schedule, one round key per line.
    Schedule {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Print the decryption (equivalent inverse cipher) schedule instead.
        #[arg(long, default_value_t = false)]
        inverse: bool,
    },
    /// Check the engine against the FIPS-197 known-answer vectors.
    Selftest,
    /// Encrypt and decrypt a random block under a random key.
    Demo {
        /// Key size in bits.
        #[arg(long, value_enum, default_value_t = Bits::B128)]
        key_size: Bits,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Bits {
    #[value(name = "128")]
    B128,
    #[value(name = "192")]
    B192,
    #[value(name = "256")]
    B256,
}

impl From<Bits> for KeySize {
    fn from(bits: Bits) -> Self {
        match bits {
            Bits::B128 => KeySize::Aes128,
            Bits::B192 => KeySize::Aes192,
            Bits::B256 => KeySize::Aes256,
        }
    }
}

/// FIPS-197 Appendix C: (key, ciphertext) for the shared plaintext.
const KAT_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";
const KAT_VECTORS: [(&str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level);
    match cli.command {
        Commands::Encrypt { key_hex, block_hex } => cmd_encrypt(&key_hex, &block_hex),
        Commands::Decrypt { key_hex, block_hex } => cmd_decrypt(&key_hex, &block_hex),
        Commands::Schedule { key_hex, inverse } => cmd_schedule(&key_hex, inverse),
        Commands::Selftest => cmd_selftest(),
        Commands::Demo { key_size, seed } => cmd_demo(key_size.into(), seed),
    }
}

fn cmd_encrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let state = parse_state(key_hex)?;
    let block = decode_hex(block_hex, "block")?;
    let ct = state.encrypt_block(&block).context("encrypt block")?;
    println!("{}", hex::encode(ct));
    Ok(())
}

fn cmd_decrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let state = parse_state(key_hex)?;
    let block = decode_hex(block_hex, "block")?;
    let pt = state.decrypt_block(&block).context("decrypt block")?;
    println!("{}", hex::encode(pt));
    Ok(())
}

fn cmd_schedule(key_hex: &str, inverse: bool) -> Result<()> {
    let state = parse_state(key_hex)?;
    let round_keys = if inverse {
        state.decryption_round_keys()
    } else {
        state.encryption_round_keys()
    };
    for line in format_schedule(round_keys) {
        println!("{line}");
    }
    Ok(())
}

fn cmd_selftest() -> Result<()> {
    let plaintext = decode_hex(KAT_PLAINTEXT, "plaintext")?;
    for (key_hex, expected) in KAT_VECTORS {
        let state = parse_state(key_hex)?;
        let ct = hex::encode(state.encrypt_block(&plaintext)?);
        if ct != expected {
            bail!("{} encrypt mismatch: got {ct}, expected {expected}", state.key_size());
        }
        let pt = state.decrypt_block(&decode_hex(expected, "ciphertext")?)?;
        if pt.as_slice() != plaintext.as_slice() {
            bail!("{} decrypt mismatch", state.key_size());
        }
        info!(key_size = %state.key_size(), "known-answer vector passed");
        println!("{}: ok", state.key_size());
    }
    Ok(())
}

fn cmd_demo(size: KeySize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = vec![0u8; size.key_len()];
    rng.fill_bytes(&mut key);
    let state = CipherState::new(&key, key.len())?;

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    let ciphertext = state.encrypt(&block);
    let decrypted = state.decrypt(&ciphertext);

    println!("demo key ({size}): {}", hex::encode(&key));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn format_schedule(round_keys: &RoundKeys) -> Vec<String> {
    round_keys
        .words()
        .chunks_exact(4)
        .enumerate()
        .map(|(round, words)| {
            let hex: Vec<String> = words.iter().map(|w| format!("{w:08x}")).collect();
            format!("{round:2}: {}", hex.join(" "))
        })
        .collect()
}

fn decode_hex(hex_str: &str, what: &str) -> Result<Vec<u8>> {
    hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))
}

fn parse_state(key_hex: &str) -> Result<CipherState> {
    let key = decode_hex(key_hex, "key")?;
    CipherState::from_key(&key).context("initialize key schedule")
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}
