//! Property-based tests for the streaming interface

use blockcrypt_algorithms::block::Mode;
use blockcrypt_api::{Error, Transform};
use blockcrypt_symmetric::{AesDecoder, AesEncoder, CipherConfig, Padding};
use blockcrypt_tests::{decrypt_all, encrypt_all, run_chunked};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

fn any_key() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 24, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

fn config(mode: Mode, iv: [u8; 16]) -> CipherConfig {
    CipherConfig {
        mode,
        padding: Padding::Pkcs7,
        iv: Some(iv),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn round_trip_any_input(
        key in any_key(),
        mode in any_mode(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..600)
    ) {
        let config = config(mode, iv);
        let ciphertext = encrypt_all(&key, &config, &data).unwrap();
        prop_assert_eq!(ciphertext.len() % 16, 0);
        prop_assert!(ciphertext.len() > data.len());
        prop_assert_eq!(decrypt_all(&key, &config, &ciphertext).unwrap(), data);
    }

    #[test]
    fn chunking_does_not_change_output(
        key in any_key(),
        mode in any_mode(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..300),
        chunk in 1usize..50,
        out_chunk in 16usize..80
    ) {
        let config = config(mode, iv);
        let reference = encrypt_all(&key, &config, &data).unwrap();

        let mut encoder = AesEncoder::with_config(&key, &config).unwrap();
        let ciphertext = run_chunked(&mut encoder, &data, chunk, out_chunk).unwrap();
        prop_assert_eq!(&ciphertext, &reference);

        let mut decoder = AesDecoder::with_config(&key, &config).unwrap();
        let plaintext = run_chunked(&mut decoder, &ciphertext, chunk, out_chunk).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn progress_never_overruns_buffers(
        mode in any_mode(),
        data in prop::collection::vec(any::<u8>(), 0..200),
        out_len in 0usize..40
    ) {
        let mut encoder = AesEncoder::with_config(&[7u8; 16], &config(mode, [1u8; 16])).unwrap();
        let mut out = vec![0u8; out_len];
        let progress = encoder.transform(&data, &mut out).unwrap();

        prop_assert!(progress.consumed <= data.len());
        prop_assert!(progress.written <= out_len);
        prop_assert_eq!(progress.written % 16, 0);
        // Each written block accounts for sixteen consumed bytes
        prop_assert_eq!(progress.consumed / 16, progress.written / 16);
        prop_assert!(encoder.core().pending_len() < 16);
    }

    #[test]
    fn bit_flips_in_last_block_never_leak_bad_padding(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 1..100),
        bit in 0usize..8
    ) {
        let config = config(Mode::Cbc, iv);
        let mut ciphertext = encrypt_all(&key, &config, &data).unwrap();
        let n = ciphertext.len();
        ciphertext[n - 1] ^= 1 << bit;

        match decrypt_all(&key, &config, &ciphertext) {
            // A random final block occasionally carries valid padding
            Ok(plaintext) => prop_assert_ne!(plaintext, data),
            Err(err) => prop_assert_eq!(
                err,
                Error::InvalidPadding {
                    context: "PKCS#7 final block"
                }
            ),
        }
    }
}

#[test]
fn one_byte_output_windows_make_no_progress_on_full_blocks() {
    let mut encoder =
        AesEncoder::with_config(&[1u8; 16], &CipherConfig::new(Mode::Cbc)).unwrap();
    let mut tiny = [0u8; 8];
    let progress = encoder.transform(&[0u8; 64], &mut tiny).unwrap();
    assert_eq!(progress.consumed, 15);
    assert_eq!(progress.written, 0);

    let again = encoder.transform(&[0u8; 49], &mut tiny).unwrap();
    assert_eq!((again.consumed, again.written), (0, 0));
}
