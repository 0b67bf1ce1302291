//! Round trips for every key size, mode, padding and message length

use blockcrypt_algorithms::block::Mode;
use blockcrypt_symmetric::{CipherConfig, Padding};
use blockcrypt_tests::{decrypt_all, encrypt_all};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

const KEY_SIZES: [usize; 3] = [16, 24, 32];

#[test]
fn every_length_up_to_1000_round_trips() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xb10c);
    let mut message = vec![0u8; 1000];
    rng.fill_bytes(&mut message);

    for key_len in KEY_SIZES {
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);
        let mut iv = [0u8; 16];
        rng.fill_bytes(&mut iv);

        for mode in Mode::ALL {
            let config = CipherConfig::new(mode).with_iv(&iv).unwrap();
            for len in 0..=1000 {
                let data = &message[..len];
                let ciphertext = encrypt_all(&key, &config, data).unwrap();
                assert_eq!(ciphertext.len(), (len / 16 + 1) * 16);
                let plaintext = decrypt_all(&key, &config, &ciphertext).unwrap();
                assert_eq!(plaintext, data, "AES-{} {} len {}", key_len * 8, mode, len);
            }
        }
    }
}

#[test]
fn zero_padding_round_trips_aligned_lengths() {
    let mut rng = ChaCha20Rng::seed_from_u64(17);
    for key_len in KEY_SIZES {
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);
        for mode in Mode::ALL {
            let config = CipherConfig::new(mode)
                .with_padding(Padding::Zero)
                .with_iv(&[0x5au8; 16])
                .unwrap();
            for blocks in 0..8 {
                let mut data = vec![0u8; blocks * 16];
                rng.fill_bytes(&mut data);
                let ciphertext = encrypt_all(&key, &config, &data).unwrap();
                assert_eq!(ciphertext.len(), data.len());
                assert_eq!(decrypt_all(&key, &config, &ciphertext).unwrap(), data);
            }
        }
    }
}

#[test]
fn iv_changes_ciphertext() {
    let key = [0x11u8; 16];
    let data = [0x22u8; 48];
    for mode in Mode::ALL.into_iter().filter(Mode::requires_iv) {
        let a = CipherConfig::new(mode).with_iv(&[0u8; 16]).unwrap();
        let mut flipped = [0u8; 16];
        flipped[15] = 1;
        let b = CipherConfig::new(mode).with_iv(&flipped).unwrap();

        let ca = encrypt_all(&key, &a, &data).unwrap();
        let cb = encrypt_all(&key, &b, &data).unwrap();
        assert_ne!(ca[..16], cb[..16], "{}", mode);
    }

    // ECB ignores the IV entirely
    let a = CipherConfig::new(Mode::Ecb).with_iv(&[0u8; 16]).unwrap();
    let b = CipherConfig::new(Mode::Ecb).with_iv(&[9u8; 16]).unwrap();
    assert_eq!(
        encrypt_all(&key, &a, &data).unwrap(),
        encrypt_all(&key, &b, &data).unwrap()
    );
}

#[test]
fn ctr_ciphertext_is_plaintext_xor_keystream() {
    let key = [0x33u8; 32];
    let config = CipherConfig::new(Mode::Ctr)
        .with_padding(Padding::Zero)
        .with_iv(&[0xffu8; 16])
        .unwrap();

    let zeros = vec![0u8; 64];
    let keystream = encrypt_all(&key, &config, &zeros).unwrap();

    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let mut data = vec![0u8; 64];
    rng.fill_bytes(&mut data);
    let ciphertext = encrypt_all(&key, &config, &data).unwrap();

    for i in 0..64 {
        assert_eq!(ciphertext[i], data[i] ^ keystream[i]);
    }
}

#[test]
fn keystream_modes_encrypt_equals_decrypt_without_padding() {
    let key = [0x44u8; 24];
    let data = [0x55u8; 64];
    for mode in [Mode::Ofb, Mode::Ctr] {
        let config = CipherConfig::new(mode)
            .with_padding(Padding::Zero)
            .with_iv(&[3u8; 16])
            .unwrap();
        let encrypted = encrypt_all(&key, &config, &data).unwrap();
        let decrypted = decrypt_all(&key, &config, &data).unwrap();
        assert_eq!(encrypted, decrypted, "{}", mode);
    }
}
