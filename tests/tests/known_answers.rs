//! Known-answer tests through every public layer

use blockcrypt_algorithms::block::{Aes, BlockCipher, Direction, ModeEngine};
use blockcrypt_symmetric::{AesDecoder, AesEncoder, CipherConfig, Padding};
use blockcrypt_tests::vectors::{decode, FIPS197, SP800_38A};
use blockcrypt_tests::{decrypt_all, encrypt_all, run_chunked};

#[test]
fn fips197_block_vectors() {
    for vector in FIPS197 {
        let cipher = Aes::new(&vector.key_bytes()).unwrap();
        let mut block = decode(vector.plaintext);
        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(&block), vector.ciphertext, "{}", cipher.name());
        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(&block), vector.plaintext);
    }
}

#[test]
fn sp800_38a_through_mode_engine() {
    for vector in SP800_38A {
        let cipher = Aes::new(&vector.key_bytes()).unwrap();
        let mut data = vector.plaintext_bytes();
        let mut engine =
            ModeEngine::with_iv(cipher, vector.mode, Direction::Encrypt, &vector.iv_bytes())
                .unwrap();
        engine.process_blocks(&mut data).unwrap();
        assert_eq!(hex::encode(&data), vector.ciphertext, "{}", vector.mode);
    }
}

#[test]
fn sp800_38a_through_streams() {
    for vector in SP800_38A {
        let config = CipherConfig::new(vector.mode)
            .with_padding(Padding::Zero)
            .with_iv(&vector.iv_bytes())
            .unwrap();
        let key = vector.key_bytes();

        let ciphertext = encrypt_all(&key, &config, &vector.plaintext_bytes()).unwrap();
        assert_eq!(ciphertext, vector.ciphertext_bytes(), "{}", vector.mode);

        let plaintext = decrypt_all(&key, &config, &ciphertext).unwrap();
        assert_eq!(plaintext, vector.plaintext_bytes(), "{}", vector.mode);
    }
}

#[test]
fn sp800_38a_with_pkcs7_appends_one_block() {
    for vector in SP800_38A {
        let config = CipherConfig::new(vector.mode)
            .with_iv(&vector.iv_bytes())
            .unwrap();
        let key = vector.key_bytes();

        let mut encoder = AesEncoder::with_config(&key, &config).unwrap();
        let ciphertext = run_chunked(&mut encoder, &vector.plaintext_bytes(), 5, 16).unwrap();
        assert_eq!(ciphertext.len(), 80);
        assert_eq!(ciphertext[..64], vector.ciphertext_bytes()[..]);

        let mut decoder = AesDecoder::with_config(&key, &config).unwrap();
        let plaintext = run_chunked(&mut decoder, &ciphertext, 3, 16).unwrap();
        assert_eq!(plaintext, vector.plaintext_bytes());
    }
}
