//! The [`LocalGroup`]: an in-process group over a channel mesh.
//!
//! [`LocalGroup::connect`] wires `size` participants together with a full
//! mesh of unbounded token channels. Each handle is `Send`, so participants
//! can run on their own threads. The barrier is counting-based: send one
//! token to every peer, then receive `size - 1` tokens. Each participant
//! sends exactly one token per barrier call, so a participant that has
//! consumed `k * (size - 1)` tokens cannot pass barrier k before every peer
//! has called it k times: tokens from a peer's later barrier may be
//! consumed early, but the total count cannot reach the threshold until
//! every peer has arrived.

use crossbeam_channel::{unbounded, Receiver, Sender};
use epigrid_core::SyncError;

use crate::group::ProcessGroup;

/// One participant's handle into an in-process group of `size` members.
///
/// Created in bulk by [`connect`](LocalGroup::connect); dropped handles
/// poison the group (peers get [`SyncError::GroupDisconnected`] instead of
/// hanging forever).
#[derive(Debug)]
pub struct LocalGroup {
    rank: usize,
    peers: Vec<Sender<()>>,
    inbox: Receiver<()>,
}

impl LocalGroup {
    /// Wire up a group of `size` participants and return one handle per
    /// rank, in rank order.
    ///
    /// `size` must be at least 1; a size-1 group degenerates to a no-op
    /// barrier.
    pub fn connect(size: usize) -> Vec<LocalGroup> {
        assert!(size >= 1, "a process group needs at least one participant");

        let (senders, inboxes): (Vec<Sender<()>>, Vec<Receiver<()>>) =
            (0..size).map(|_| unbounded()).unzip();

        inboxes
            .into_iter()
            .enumerate()
            .map(|(rank, inbox)| {
                // Every peer's sender except our own.
                let peers = senders
                    .iter()
                    .enumerate()
                    .filter(|&(peer, _)| peer != rank)
                    .map(|(_, tx)| tx.clone())
                    .collect();
                LocalGroup { rank, peers, inbox }
            })
            .collect()
    }
}

impl ProcessGroup for LocalGroup {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.peers.len() + 1
    }

    fn barrier(&self) -> Result<(), SyncError> {
        let disconnected = || SyncError::GroupDisconnected { rank: self.rank };

        for peer in &self.peers {
            peer.send(()).map_err(|_| disconnected())?;
        }
        for _ in 0..self.peers.len() {
            self.inbox.recv().map_err(|_| disconnected())?;
        }
        Ok(())
    }
}
