//! The rope's node taxonomy, construction algebra and balancer.

mod balance;
mod node;
mod ops;

pub(crate) use balance::is_balanced;
pub(crate) use node::{Flat, Node};
pub(crate) use ops::{concat, reverse, subseq, MAX_ROPE_DEPTH};
