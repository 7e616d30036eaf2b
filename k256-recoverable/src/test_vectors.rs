//! secp256k1 recoverable signature test vectors.

use hex_literal::hex;

/// Secret key, message digest and public key shared by
/// [`SIGNING_TEST_VECTORS`].
pub struct SigningKeyVector {
    /// Secret scalar `d`.
    pub d: [u8; 32],

    /// Blake2b-256 digest of the ASCII string `"hello"`.
    pub digest: [u8; 32],

    /// Public key `d·G` as `x ‖ y`.
    pub public_key: [u8; 64],
}

/// Signature produced by [`SIGNING_KEY`] with a fixed nonce.
pub struct SigningTestVector {
    /// Ephemeral scalar `k`.
    pub k: [u8; 32],

    /// Expected `r`.
    pub r: [u8; 32],

    /// Expected `s` (not normalized).
    pub s: [u8; 32],

    /// Recovery ID which recovers [`SIGNING_KEY`]'s public key.
    pub v: u8,
}

/// Externally produced recoverable signature.
pub struct RecoveryTestVector {
    /// SHA-256 digest of the message.
    pub digest: [u8; 32],

    /// Serialized signature: `r ‖ s ‖ v`.
    pub sig: [u8; 65],

    /// Signer's public key as `x ‖ y`.
    pub public_key: [u8; 64],
}

/// Key used by [`SIGNING_TEST_VECTORS`].
pub const SIGNING_KEY: SigningKeyVector = SigningKeyVector {
    d: hex!("bb488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6"),
    digest: hex!("324dcf027dd4a30a932c441f365a25e86b173defa4b8e58948253471b81b72cf"),
    public_key: hex!(
        "411dbd69cf3a6113787b4a2f9ca4913707c2f906ba5258931a3fde8dc8e62978"
        "ee69b88572490cb458bef8b37195ce221ba61ae1577c22851beedcdc703fdb37"
    ),
};

/// Fixed-nonce signatures by [`SIGNING_KEY`] over its digest.
pub const SIGNING_TEST_VECTORS: &[SigningTestVector] = &[
    // Recovery ID 0, high `s`
    SigningTestVector {
        k: hex!("49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a"),
        r: hex!("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795"),
        s: hex!("be600fc4d0ac5699d0ceb40e75bf27915714867c00cbad630fbe2c71aab38c39"),
        v: 0,
    },
    // Recovery ID 1
    SigningTestVector {
        k: hex!("0000000000000000000000000000000000000000000000000000000000000006"),
        r: hex!("fff97bd5755eeea420453a14355235d382f6472f8568a18b2f057a1460297556"),
        s: hex!("0478e6de27ab87e7f3f9788ddd030966401a10ce859e4eebd53c6239eababa5a"),
        v: 1,
    },
    // `r` with a leading zero byte
    SigningTestVector {
        k: hex!("0000000000000000000000000000000000000000000000000000000000000099"),
        r: hex!("00e3ae1974566ca06cc516d47e0fb165a674a3dabcfca15e722f0e3450f45889"),
        s: hex!("30477a8f4be617667a6254aa3d2888fdd39a30adc800e1633e2a65e8064a199d"),
        v: 0,
    },
    // `s` with a leading zero byte
    SigningTestVector {
        k: hex!("000000000000000000000000000000000000000000000000000000000000027e"),
        r: hex!("ad3e3f036c47bb6f75fd4d6fb23a503f0f567785a515979a0a788caa64b7310f"),
        s: hex!("00a1bcd20bbfdb5e27ff2ebbcfc395253a55440686248557a7467e651931c3b2"),
        v: 0,
    },
];

/// Recoverable signatures over SHA-256(`"example message"`).
pub const RECOVERY_TEST_VECTORS: &[RecoveryTestVector] = &[
    // Recovery ID 0
    RecoveryTestVector {
        digest: hex!("ad84cd0b10fc028738971b078124aec2a0e7c6d986a381be0b386f32bee887af"),
        sig: hex!(
            "ce53abb3721bafc561408ce8ff99c909f7f0b18a2f788649d6470162ab1aa032"
            "3971edc523a6d6453f3fb6128d318d9db1a5ff3386feb1047d9816e780039d52"
            "00"
        ),
        public_key: hex!(
            "1a7a569e91dbf60581509c7fc946d1003b60c7dee85299538db6353538d59574"
            "b4e89d60c7d584d084632d296f125f165b4df8e061a49daeba51d36133d03e1a"
        ),
    },
    // Recovery ID 1
    RecoveryTestVector {
        digest: hex!("ad84cd0b10fc028738971b078124aec2a0e7c6d986a381be0b386f32bee887af"),
        sig: hex!(
            "46c05b6368a44b8810d79859441d819b8e7cdc8bfd371e35c53196f4bcacdb51"
            "35c7facce2a97b95eacba8a586d87b7958aaf8368ab29cee481f76e871dbd9cb"
            "01"
        ),
        public_key: hex!(
            "6d6caac248af96f6afa7f904f550253a0f3ef3f5aa2fe6838a95b216691468e2"
            "487e6222a6664e079c8edf7518defd562dbeda1e7593dfd7f0be285880a24dab"
        ),
    },
];
