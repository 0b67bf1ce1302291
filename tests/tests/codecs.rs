//! Codecs chained with the cipher through the shared transform contract

use blockcrypt_algorithms::block::Mode;
use blockcrypt_api::Transform;
use blockcrypt_symmetric::CipherConfig;
use blockcrypt_tests::{decrypt_all, encrypt_all, run_chunked};
use blockcrypt_utils::{transform_all, Base64Decoder, Base64Encoder, HexDecoder, HexEncoder};
use proptest::prelude::*;

fn finish_with_capacity<T: Transform>(transform: &mut T) -> Vec<u8> {
    let mut out = vec![0u8; transform.min_finish_capacity()];
    let n = transform.finish(&mut out).unwrap();
    out.truncate(n);
    out
}

#[test]
fn encrypted_text_survives_base64() {
    let key = [0x2au8; 32];
    let config = CipherConfig::new(Mode::Ofb).with_iv(&[0x10u8; 16]).unwrap();
    let message = b"The quick brown fox jumps over the lazy dog";

    let ciphertext = encrypt_all(&key, &config, message).unwrap();
    let armored = transform_all(&mut Base64Encoder::new(), &ciphertext).unwrap();
    assert!(armored.iter().all(|c| c.is_ascii_graphic()));

    let unarmored = transform_all(&mut Base64Decoder::new(), &armored).unwrap();
    assert_eq!(unarmored, ciphertext);
    assert_eq!(decrypt_all(&key, &config, &unarmored).unwrap(), message);
}

#[test]
fn hex_matches_hex_crate() {
    let data: Vec<u8> = (0..=255u8).collect();
    let encoded = run_chunked(&mut HexEncoder::new(), &data, 7, 3).unwrap();
    assert_eq!(encoded, hex::encode(&data).into_bytes());
}

#[test]
fn base64_finish_flushes_partial_group() {
    let mut encoder = Base64Encoder::new();
    let mut out = [0u8; 8];
    let progress = encoder.transform(b"ab", &mut out).unwrap();
    assert_eq!((progress.consumed, progress.written), (2, 0));
    assert_eq!(finish_with_capacity(&mut encoder), b"YWI=");
}

proptest! {
    #[test]
    fn hex_round_trip(data in prop::collection::vec(any::<u8>(), 0..256), chunk in 1usize..20) {
        let encoded = run_chunked(&mut HexEncoder::new(), &data, chunk, 8).unwrap();
        let decoded = run_chunked(&mut HexDecoder::new(), &encoded, chunk, 8).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn base64_round_trip(data in prop::collection::vec(any::<u8>(), 0..256), chunk in 1usize..20) {
        let encoded = run_chunked(&mut Base64Encoder::new(), &data, chunk, 8).unwrap();
        prop_assert_eq!(encoded.len(), data.len().div_ceil(3) * 4);
        let decoded = run_chunked(&mut Base64Decoder::new(), &encoded, chunk, 8).unwrap();
        prop_assert_eq!(decoded, data);
    }
}
