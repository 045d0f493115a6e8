//! Message expansion for hash_to_field, `expand_message_xmd` and
//! `expand_message_xof` from RFC 9380 section 5.3.

use core::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
};

use digest::{
    core_api::BlockSizeUser,
    generic_array::{
        typenum::{Unsigned, U32},
        ArrayLength, GenericArray,
    },
    Digest, ExtendableOutput, Output, Update, XofReader,
};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::ExpandMsgError;

const OVERSIZE_DST_SALT: &[u8] = b"H2C-OVERSIZE-DST-";

/// Longest DST used as-is; longer tags are hashed first.
const MAX_DST_LEN: usize = 255;

/// `len_in_bytes` is encoded in two bytes.
const MAX_LEN_IN_BYTES: usize = u16::MAX as usize;

/// The DST of a message expansion, either borrowed or reduced by hashing.
#[derive(Debug)]
enum ExpandMsgDst<'x, L: ArrayLength<u8>> {
    Hashed(GenericArray<u8, L>),
    Raw(&'x [u8]),
}

impl<'x, L: ArrayLength<u8>> ExpandMsgDst<'x, L> {
    fn data(&self) -> &[u8] {
        match self {
            Self::Hashed(arr) => &arr[..],
            Self::Raw(buf) => buf,
        }
    }

    /// `I2OSP(len(DST), 1)`; both variants are at most 255 bytes long.
    fn len_byte(&self) -> [u8; 1] {
        [self.data().len() as u8]
    }
}

/// DST for `expand_message_xof`. Oversize tags become
/// `H("H2C-OVERSIZE-DST-" || DST)` read to 32 bytes.
fn process_dst_xof<H>(dst: &[u8]) -> ExpandMsgDst<'_, U32>
where
    H: Default + Update + ExtendableOutput,
{
    if dst.len() > MAX_DST_LEN {
        tracing::debug!(dst_len = dst.len(), "hashing oversize DST for expand_message_xof");
        let mut data = GenericArray::<u8, U32>::default();
        H::default()
            .chain(OVERSIZE_DST_SALT)
            .chain(dst)
            .finalize_xof()
            .read(&mut data);
        ExpandMsgDst::Hashed(data)
    } else {
        ExpandMsgDst::Raw(dst)
    }
}

/// DST for `expand_message_xmd`. Oversize tags become `H("H2C-OVERSIZE-DST-" || DST)`.
fn process_dst_xmd<H: Digest>(dst: &[u8]) -> ExpandMsgDst<'_, H::OutputSize> {
    if dst.len() > MAX_DST_LEN {
        tracing::debug!(dst_len = dst.len(), "hashing oversize DST for expand_message_xmd");
        ExpandMsgDst::Hashed(
            H::new()
                .chain_update(OVERSIZE_DST_SALT)
                .chain_update(dst)
                .finalize(),
        )
    } else {
        ExpandMsgDst::Raw(dst)
    }
}

/// Checks shared by both expanders.
fn check_request(dst: &[u8], len_in_bytes: usize) -> Result<(), ExpandMsgError> {
    let res = if dst.is_empty() {
        Err(ExpandMsgError::EmptyDst)
    } else if len_in_bytes == 0 {
        Err(ExpandMsgError::ZeroLength)
    } else if len_in_bytes > MAX_LEN_IN_BYTES {
        Err(ExpandMsgError::LengthTooLarge(len_in_bytes))
    } else {
        Ok(())
    };
    if let Err(err) = &res {
        tracing::debug!(%err, len_in_bytes, "rejected message expansion request");
    }
    res
}

/// A message expansion method usable by hash_to_field.
pub trait ExpandMessage {
    /// Streaming output of one expansion. It may borrow the DST.
    type Expander<'x>: ExpandMessageState;

    /// Starts expanding `message` under `dst` into `len_in_bytes` pseudorandom bytes.
    fn init_expand<'x>(
        message: &[u8],
        dst: &'x [u8],
        len_in_bytes: usize,
    ) -> Result<Self::Expander<'x>, ExpandMsgError>;
}

/// Reader over the output of a message expansion.
pub trait ExpandMessageState {
    /// Fills as much of `output` as remains and returns the number of bytes written.
    fn read_into(&mut self, output: &mut [u8]) -> usize;

    /// Retrieve the number of bytes remaining in the generator
    fn remain(&self) -> usize;

    #[cfg(feature = "alloc")]
    /// Construct a Vec containing the remaining bytes of the output
    fn into_vec(&mut self) -> Vec<u8> {
        let mut result = alloc::vec![0u8; self.remain()];
        self.read_into(&mut result[..]);
        result
    }
}

/// `expand_message_xof` over an extendable-output function `H`, such as SHAKE128.
#[derive(Debug)]
pub struct ExpandMsgXof<H>(PhantomData<H>);

/// Output stream of [`ExpandMsgXof`].
pub struct ExpandMsgXofState<H: ExtendableOutput> {
    reader: <H as ExtendableOutput>::Reader,
    remain: usize,
}

impl<H: ExtendableOutput> Debug for ExpandMsgXofState<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandMsgXofState")
            .field("remain", &self.remain)
            .finish()
    }
}

impl<H: ExtendableOutput> ExpandMessageState for ExpandMsgXofState<H> {
    fn read_into(&mut self, output: &mut [u8]) -> usize {
        let len = self.remain.min(output.len());
        self.reader.read(&mut output[..len]);
        self.remain -= len;
        len
    }

    fn remain(&self) -> usize {
        self.remain
    }
}

impl<H> ExpandMessage for ExpandMsgXof<H>
where
    H: Default + Update + ExtendableOutput,
{
    type Expander<'x> = ExpandMsgXofState<H>;

    fn init_expand<'x>(
        message: &[u8],
        dst: &'x [u8],
        len_in_bytes: usize,
    ) -> Result<Self::Expander<'x>, ExpandMsgError> {
        check_request(dst, len_in_bytes)?;
        tracing::trace!(len_in_bytes, dst_len = dst.len(), "expand_message_xof");

        let dst = process_dst_xof::<H>(dst);
        let reader = H::default()
            .chain(message)
            .chain((len_in_bytes as u16).to_be_bytes())
            .chain(dst.data())
            .chain(dst.len_byte())
            .finalize_xof();
        Ok(ExpandMsgXofState {
            reader,
            remain: len_in_bytes,
        })
    }
}

/// `expand_message_xmd` over a Merkle-Damgård hash `H`, such as SHA-256.
#[derive(Debug)]
pub struct ExpandMsgXmd<H>(PhantomData<H>);

/// Output stream of [`ExpandMsgXmd`]. Blocks `b_i` are computed as they are read.
pub struct ExpandMsgXmdState<'x, H: Digest> {
    dst: ExpandMsgDst<'x, H::OutputSize>,
    b_0: Output<H>,
    b_i: Output<H>,
    i: usize,
    b_offs: usize,
    remain: usize,
}

impl<H: Digest> Debug for ExpandMsgXmdState<'_, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandMsgXmdState")
            .field("i", &self.i)
            .field("remain", &self.remain)
            .finish()
    }
}

impl<'x, H: Digest> ExpandMsgXmdState<'x, H> {
    /// `b_i = H(strxor(b_0, b_(i-1)) || I2OSP(i, 1) || DST_prime)`
    fn next_block(&mut self) {
        let mut prev = self.b_0.clone();
        for (p, b) in prev.iter_mut().zip(self.b_i.iter()) {
            *p ^= b;
        }
        self.b_i = H::new()
            .chain_update(prev)
            .chain_update([self.i as u8])
            .chain_update(self.dst.data())
            .chain_update(self.dst.len_byte())
            .finalize();
        self.b_offs = 0;
        self.i += 1;
    }
}

impl<H> ExpandMessage for ExpandMsgXmd<H>
where
    H: Digest + BlockSizeUser,
{
    type Expander<'x> = ExpandMsgXmdState<'x, H>;

    fn init_expand<'x>(
        message: &[u8],
        dst: &'x [u8],
        len_in_bytes: usize,
    ) -> Result<Self::Expander<'x>, ExpandMsgError> {
        check_request(dst, len_in_bytes)?;
        let b_in_bytes = <H as Digest>::output_size();
        let ell = (len_in_bytes + b_in_bytes - 1) / b_in_bytes;
        if ell > 255 {
            let err = ExpandMsgError::TooManyBlocks(ell);
            tracing::debug!(%err, len_in_bytes, "rejected message expansion request");
            return Err(err);
        }
        tracing::trace!(len_in_bytes, ell, dst_len = dst.len(), "expand_message_xmd");

        let dst = process_dst_xmd::<H>(dst);
        let b_0 = H::new()
            .chain_update(GenericArray::<u8, <H as BlockSizeUser>::BlockSize>::default())
            .chain_update(message)
            .chain_update((len_in_bytes as u16).to_be_bytes())
            .chain_update([0u8])
            .chain_update(dst.data())
            .chain_update(dst.len_byte())
            .finalize();
        let b_1 = H::new()
            .chain_update(&b_0)
            .chain_update([1u8])
            .chain_update(dst.data())
            .chain_update(dst.len_byte())
            .finalize();

        Ok(ExpandMsgXmdState {
            dst,
            b_0,
            b_i: b_1,
            i: 2,
            b_offs: 0,
            remain: len_in_bytes,
        })
    }
}

impl<'x, H: Digest> ExpandMessageState for ExpandMsgXmdState<'x, H> {
    fn read_into(&mut self, output: &mut [u8]) -> usize {
        let read_len = self.remain.min(output.len());
        let block_len = H::OutputSize::to_usize();
        let mut offs = 0;
        while offs < read_len {
            if self.b_offs == block_len {
                self.next_block();
            }
            let copy_len = (block_len - self.b_offs).min(read_len - offs);
            output[offs..offs + copy_len]
                .copy_from_slice(&self.b_i[self.b_offs..self.b_offs + copy_len]);
            offs += copy_len;
            self.b_offs += copy_len;
        }
        self.remain -= read_len;
        read_len
    }

    fn remain(&self) -> usize {
        self.remain
    }
}
