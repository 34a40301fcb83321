use anyhow::{anyhow, Result};
use bitcoin::absolute::LockTime;
use bitcoin::consensus::Encodable;
use bitcoin::opcodes::all::OP_CHECKSIG;
use bitcoin::script::{Builder, PushBytes};
use bitcoin::transaction::Version;
use bitcoin::{Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Witness};
use std::ops::Deref;

use crate::constants::GENESIS_SCRIPT_SIG_BITS;
use crate::hashes::{calculate_double_sha256, Hash256};

/// Marker pushed between the difficulty bits and the message of a genesis scriptSig.
const GENESIS_SCRIPT_SIG_MARKER: [u8; 1] = [4];

/// The single transaction of a genesis block.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CoinbaseTransaction(pub Transaction);

impl CoinbaseTransaction {
    /// Builds the genesis coinbase.
    ///
    /// The input has a null outpoint and carries
    /// `PUSH(0x1d00ffff) PUSH(0x04) PUSH(message)`. The single output pays
    /// `reward` to `PUSH(output_pubkey) OP_CHECKSIG`.
    pub fn new_genesis(message: &[u8], output_pubkey: &[u8], reward: Amount) -> Result<Self> {
        let bits = GENESIS_SCRIPT_SIG_BITS.to_le_bytes();
        let script_sig = Builder::new()
            .push_slice(push_bytes(&bits)?)
            .push_slice(push_bytes(&GENESIS_SCRIPT_SIG_MARKER)?)
            .push_slice(push_bytes(message)?)
            .into_script();
        let script_pubkey = Builder::new()
            .push_slice(push_bytes(output_pubkey)?)
            .push_opcode(OP_CHECKSIG)
            .into_script();

        Ok(Self(Transaction {
            version: Version::ONE,
            lock_time: LockTime::ZERO,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig,
                sequence: Sequence::MAX,
                witness: Witness::default(),
            }],
            output: vec![TxOut {
                value: reward,
                script_pubkey,
            }],
        }))
    }

    pub fn script_sig(&self) -> &ScriptBuf {
        &self.0.input[0].script_sig
    }

    /// Returns the transaction id in internal byte order.
    ///
    /// Only the legacy fields are hashed, so witness data never changes the id.
    pub fn txid(&self) -> Hash256 {
        let mut tx_bytes_vec = vec![];
        self.0
            .version
            .consensus_encode(&mut tx_bytes_vec)
            .expect("encoding into a Vec cannot fail");
        self.0
            .input
            .consensus_encode(&mut tx_bytes_vec)
            .expect("encoding into a Vec cannot fail");
        self.0
            .output
            .consensus_encode(&mut tx_bytes_vec)
            .expect("encoding into a Vec cannot fail");
        self.0
            .lock_time
            .consensus_encode(&mut tx_bytes_vec)
            .expect("encoding into a Vec cannot fail");
        calculate_double_sha256(&tx_bytes_vec)
    }
}

impl Deref for CoinbaseTransaction {
    type Target = Transaction;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn push_bytes(data: &[u8]) -> Result<&PushBytes> {
    <&PushBytes>::try_from(data).map_err(|err| anyhow!("cannot push {} bytes: {err}", data.len()))
}
