//! Known-answer vectors from FIPS 197 and NIST SP 800-38A

use blockcrypt_algorithms::block::Mode;

/// FIPS 197 appendix C single-block vector
#[derive(Debug, Clone, Copy)]
pub struct BlockVector {
    /// Key, hex
    pub key: &'static str,
    /// Plaintext block, hex
    pub plaintext: &'static str,
    /// Ciphertext block, hex
    pub ciphertext: &'static str,
}

/// SP 800-38A four-block mode vector
#[derive(Debug, Clone, Copy)]
pub struct ModeVector {
    /// Chaining mode
    pub mode: Mode,
    /// Key, hex
    pub key: &'static str,
    /// IV or initial counter block, hex
    pub iv: &'static str,
    /// Plaintext, hex
    pub plaintext: &'static str,
    /// Ciphertext, hex
    pub ciphertext: &'static str,
}

impl BlockVector {
    /// Decoded key bytes
    pub fn key_bytes(&self) -> Vec<u8> {
        decode(self.key)
    }
}

impl ModeVector {
    /// Decoded key bytes
    pub fn key_bytes(&self) -> Vec<u8> {
        decode(self.key)
    }

    /// Decoded IV bytes
    pub fn iv_bytes(&self) -> Vec<u8> {
        decode(self.iv)
    }

    /// Decoded plaintext
    pub fn plaintext_bytes(&self) -> Vec<u8> {
        decode(self.plaintext)
    }

    /// Decoded ciphertext
    pub fn ciphertext_bytes(&self) -> Vec<u8> {
        decode(self.ciphertext)
    }
}

/// Decode a hex literal from this module
pub fn decode(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_default()
}

const FIPS_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

/// FIPS 197 appendix C.1 to C.3
pub const FIPS197: [BlockVector; 3] = [
    BlockVector {
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: FIPS_PLAINTEXT,
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    BlockVector {
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: FIPS_PLAINTEXT,
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    BlockVector {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: FIPS_PLAINTEXT,
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
];

const SP_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const SP_IV: &str = "000102030405060708090a0b0c0d0e0f";
const SP_PLAINTEXT: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
);

/// SP 800-38A appendix F, AES-128 encryption vectors
pub const SP800_38A: [ModeVector; 5] = [
    ModeVector {
        mode: Mode::Ecb,
        key: SP_KEY,
        iv: SP_IV,
        plaintext: SP_PLAINTEXT,
        ciphertext: concat!(
            "3ad77bb40d7a3660a89ecaf32466ef97",
            "f5d3d58503b9699de785895a96fdbaaf",
            "43b1cd7f598ece23881b00e3ed030688",
            "7b0c785e27e8ad3f8223207104725dd4",
        ),
    },
    ModeVector {
        mode: Mode::Cbc,
        key: SP_KEY,
        iv: SP_IV,
        plaintext: SP_PLAINTEXT,
        ciphertext: concat!(
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a7",
        ),
    },
    ModeVector {
        mode: Mode::Cfb,
        key: SP_KEY,
        iv: SP_IV,
        plaintext: SP_PLAINTEXT,
        ciphertext: concat!(
            "3b3fd92eb72dad20333449f8e83cfb4a",
            "c8a64537a0b3a93fcde3cdad9f1ce58b",
            "26751f67a3cbb140b1808cf187a4f4df",
            "c04b05357c5d1c0eeac4c66f9ff7f2e6",
        ),
    },
    ModeVector {
        mode: Mode::Ofb,
        key: SP_KEY,
        iv: SP_IV,
        plaintext: SP_PLAINTEXT,
        ciphertext: concat!(
            "3b3fd92eb72dad20333449f8e83cfb4a",
            "7789508d16918f03f53c52dac54ed825",
            "9740051e9c5fecf64344f7a82260edcc",
            "304c6528f659c77866a510d9c1d6ae5e",
        ),
    },
    ModeVector {
        mode: Mode::Ctr,
        key: SP_KEY,
        iv: "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff",
        plaintext: SP_PLAINTEXT,
        ciphertext: concat!(
            "874d6191b620e3261bef6864990db6ce",
            "9806f66b7970fdff8617187bb9fffdff",
            "5ae4df3edbd5d35e5b4f09020db03eab",
            "1e031dda2fbe03d1792170a0f3009cee",
        ),
    },
];
