//! Request construction, signing, and identification.
//!
//! A request is built in three steps shared by both variants:
//! assemble the essence (the exact bytes that get signed), prepend the
//! 1-byte request-type tag and sign, then derive the request id by hashing
//! the full wire buffer. The two variants differ only in essence layout and
//! submission endpoint.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::codec::{Arguments, Transfer};
use crate::error::CodecError;
use crate::types::{ChainId, Hname, KeyPair, RequestId};

/// Request-type tag prepended to the essence before signing.
const REQUEST_TYPE_TAG: u8 = 1;

/// Reserved request index appended to the hash when deriving the request id.
const REQUEST_INDEX_SUFFIX: [u8; 2] = [0, 0];

/// A fully signed request, ready for verbatim submission.
///
/// Immutable once built. The same essence signed with the same key and nonce
/// always yields the same bytes and the same [`RequestId`].
#[derive(Clone, Debug)]
pub struct SignedRequest {
    bytes: Vec<u8>,
    id: RequestId,
}

impl SignedRequest {
    /// Build and sign an off-ledger request.
    ///
    /// Essence layout: chain id bytes, contract hname (4 bytes LE), function
    /// hname (4 bytes LE), encoded arguments, sender public key, nonce
    /// (8 bytes LE), encoded transfer.
    pub fn off_ledger(
        chain_id: &ChainId,
        contract: Hname,
        function: Hname,
        args: &Arguments,
        transfer: &Transfer,
        key_pair: &KeyPair,
        nonce: u64,
    ) -> Result<Self, CodecError> {
        let args_enc = args.encode()?;
        let xfer_enc = transfer.encode();

        let mut essence = Vec::with_capacity(
            ChainId::SIZE + 8 + args_enc.len() + 32 + 8 + xfer_enc.len(),
        );
        essence.extend_from_slice(chain_id.as_bytes());
        essence.extend_from_slice(&contract.to_le_bytes());
        essence.extend_from_slice(&function.to_le_bytes());
        essence.extend_from_slice(&args_enc);
        essence.extend_from_slice(key_pair.public_key().as_bytes());
        essence.extend_from_slice(&nonce.to_le_bytes());
        essence.extend_from_slice(&xfer_enc);

        Ok(Self::seal(essence, key_pair))
    }

    /// Build and sign an on-ledger request.
    ///
    /// Essence layout: a fixed 13-byte leading header with the contract
    /// hname at byte offset 4 and the function hname at offset 8, followed
    /// by the encoded arguments. The header offsets match the ledger
    /// transaction layout observed on the wire.
    pub fn on_ledger(
        contract: Hname,
        function: Hname,
        args: &Arguments,
    ) -> Result<OnLedgerEssence, CodecError> {
        let mut essence = vec![0u8; 13];
        essence[4..8].copy_from_slice(&contract.to_le_bytes());
        essence[8..12].copy_from_slice(&function.to_le_bytes());
        essence.extend_from_slice(&args.encode()?);
        Ok(OnLedgerEssence { essence })
    }

    /// Prepend the request-type tag, sign, and derive the request id.
    fn seal(essence: Vec<u8>, key_pair: &KeyPair) -> Self {
        let mut bytes = Vec::with_capacity(1 + essence.len() + 64);
        bytes.push(REQUEST_TYPE_TAG);
        bytes.extend_from_slice(&essence);
        let signature = key_pair.sign(&bytes);
        bytes.extend_from_slice(signature.as_bytes());

        let hash = Blake2b::<U32>::digest(&bytes);
        let mut id = [0u8; 34];
        id[..32].copy_from_slice(&hash);
        id[32..].copy_from_slice(&REQUEST_INDEX_SUFFIX);

        Self {
            bytes,
            id: RequestId::from_bytes(id),
        }
    }

    /// The wire bytes, submitted verbatim.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The request id used to poll for completion.
    pub fn id(&self) -> RequestId {
        self.id
    }
}

/// An unsigned on-ledger essence, awaiting a key pair.
#[derive(Clone, Debug)]
pub struct OnLedgerEssence {
    essence: Vec<u8>,
}

impl OnLedgerEssence {
    /// Sign the essence, producing the submittable request.
    pub fn sign(self, key_pair: &KeyPair) -> SignedRequest {
        SignedRequest::seal(self.essence, key_pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_id() -> ChainId {
        ChainId::from_bytes([11; 33])
    }

    fn sample_args() -> Arguments {
        let mut args = Arguments::new();
        args.set_string("name", "donate");
        args.set_uint64("amount", 100);
        args
    }

    #[test]
    fn test_stable_request_id() {
        let kp = KeyPair::from_seed(&[1; 32]);
        let build = || {
            SignedRequest::off_ledger(
                &chain_id(),
                Hname(0x11223344),
                Hname(0x55667788),
                &sample_args(),
                &Transfer::iotas(5),
                &kp,
                42,
            )
            .unwrap()
        };
        let a = build();
        let b = build();
        assert_eq!(a.bytes(), b.bytes());
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_nonce_changes_id() {
        let kp = KeyPair::from_seed(&[1; 32]);
        let args = Arguments::new();
        let xfer = Transfer::new();
        let a = SignedRequest::off_ledger(
            &chain_id(), Hname(1), Hname(2), &args, &xfer, &kp, 1,
        )
        .unwrap();
        let b = SignedRequest::off_ledger(
            &chain_id(), Hname(1), Hname(2), &args, &xfer, &kp, 2,
        )
        .unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_off_ledger_layout() {
        let kp = KeyPair::from_seed(&[2; 32]);
        let args = Arguments::new();
        let xfer = Transfer::new();
        let req = SignedRequest::off_ledger(
            &chain_id(), Hname(0x01020304), Hname(0x0a0b0c0d), &args, &xfer, &kp, 7,
        )
        .unwrap();

        let bytes = req.bytes();
        assert_eq!(bytes[0], 1); // request-type tag
        assert_eq!(&bytes[1..34], chain_id().as_bytes());
        assert_eq!(&bytes[34..38], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&bytes[38..42], &[0x0d, 0x0c, 0x0b, 0x0a]);
        // empty arguments encode as a zero count
        assert_eq!(&bytes[42..46], &[0, 0, 0, 0]);
        assert_eq!(&bytes[46..78], kp.public_key().as_bytes());
        assert_eq!(&bytes[78..86], &7u64.to_le_bytes());
        assert_eq!(&bytes[86..90], &[0, 0, 0, 0]);
        // signature covers tag through transfer
        assert_eq!(bytes.len(), 90 + 64);
    }

    #[test]
    fn test_on_ledger_header_offsets() {
        let kp = KeyPair::from_seed(&[3; 32]);
        let req = SignedRequest::on_ledger(Hname(0x01020304), Hname(0x0a0b0c0d), &Arguments::new())
            .unwrap()
            .sign(&kp);

        let bytes = req.bytes();
        assert_eq!(bytes[0], 1);
        assert_eq!(&bytes[1..5], &[0, 0, 0, 0]);
        assert_eq!(&bytes[5..9], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&bytes[9..13], &[0x0d, 0x0c, 0x0b, 0x0a]);
        assert_eq!(bytes[13], 0);
        assert_eq!(&bytes[14..18], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_variants_produce_distinct_ids() {
        let kp = KeyPair::from_seed(&[4; 32]);
        let args = sample_args();
        let off = SignedRequest::off_ledger(
            &chain_id(), Hname(1), Hname(2), &args, &Transfer::new(), &kp, 1,
        )
        .unwrap();
        let on = SignedRequest::on_ledger(Hname(1), Hname(2), &args).unwrap().sign(&kp);
        assert_ne!(off.id(), on.id());
    }

    #[test]
    fn test_request_id_suffix_reserved() {
        let kp = KeyPair::from_seed(&[5; 32]);
        let req = SignedRequest::off_ledger(
            &chain_id(), Hname(1), Hname(2), &Arguments::new(), &Transfer::new(), &kp, 1,
        )
        .unwrap();
        assert_eq!(&req.id().as_bytes()[32..], &[0, 0]);
    }
}
