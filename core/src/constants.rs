// HooliBet Constants
// =================
//
// Values shared by every network's parameter set. Anything that differs between
// main, test, regtest and unittest lives in `params` instead.

/// Number of base units in one coin.
pub const COIN: u64 = 100_000_000;

/// One hundredth of a coin.
pub const CENT: u64 = 1_000_000;

/// One week in seconds.
///
/// Fixed seed peers are stamped with a last-seen time between one and two weeks
/// in the past, so gossiped addresses always look fresher than them.
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Service bit advertised by full nodes.
pub const NODE_NETWORK: u64 = 1;

/// Size of a serialized block header in bytes.
pub const BLOCK_HEADER_SIZE: usize = 80;

/// Compact encoding of the Bitcoin minimum difficulty, 0x1d00ffff.
///
/// It is pushed as the first element of every genesis coinbase scriptSig.
pub const GENESIS_SCRIPT_SIG_BITS: u32 = 486_604_799;

/// Security level of the zerocoin accumulator parameters.
pub const ZEROCOIN_DEFAULT_SECURITY_LEVEL: u32 = 80;

/// RSA-2048 challenge modulus used for the zerocoin accumulator.
///
/// The literal is a string of decimal digits. The legacy ("v1") parameters read it
/// as base 16, which yields a different and larger number. Both readings are part
/// of consensus history and must stay as they are.
pub const ZEROCOIN_MODULUS: &str = concat!(
    "25195908475657893494027183240048398571429282126204032027777137836043662020707595556264018525880784",
    "4069182906412495150821892985591491761845028084891200728449926873928072877767359714183472702618963750149718246911",
    "6507761337985909570009733045974880842840179742910064245869181719511874612151517265463228221686998754918242243363",
    "7259085141865462043576798423387184774447920739934236584823824281198163815010674810451660377306056201619676256133",
    "8441436038339044149526344321901146575444541784240209246165157233507787077498171257724679629263863563732899121548",
    "31438167899885040445364023527381951378636564391212010397122822120720357",
);
