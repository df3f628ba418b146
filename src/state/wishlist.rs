//! Shared wishlist store.
//!
//! Single owner of wishlist membership for the signed-in user. Mutations are
//! optimistic with a per-product tri-state: `Pending` while the call is in
//! flight, then `Confirmed` (store marked stale so it gets re-fetched) or
//! `Failed` (membership reverted).
//!
//! Refreshes are ticketed. A fetch that started before the latest
//! invalidation is dropped on arrival and the store stays stale, so a
//! snapshot taken mid-toggle can never overwrite a confirmed change.

use std::collections::{BTreeSet, HashMap};

use crate::models::Product;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WishlistOp {
    Add,
    Remove,
}

impl WishlistOp {
    pub fn success_message(&self) -> &'static str {
        match self {
            WishlistOp::Add => "Added to wishlist",
            WishlistOp::Remove => "Removed from wishlist",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationState {
    Pending(WishlistOp),
    Confirmed,
    Failed(String),
}

/// A mutation handed out by [`WishlistStore::begin_toggle`]; pass it back to
/// `confirm` or `fail` once the call settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WishlistMutation {
    pub user_id: String,
    pub product_id: String,
    pub op: WishlistOp,
    epoch: u64,
}

/// A refresh handed out by [`WishlistStore::begin_refresh`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshTicket {
    pub user_id: String,
    generation: u64,
    epoch: u64,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct WishlistStore {
    user_id: Option<String>,
    members: BTreeSet<String>,
    /// Product details from the last fetch, for the dropdown
    items: Vec<Product>,
    status: HashMap<String, MutationState>,
    loaded: bool,
    stale: bool,
    /// Bumped by every invalidation; a refresh only lands if it saw the latest
    generation: u64,
    fetching: bool,
    /// Bumped on user switch so late results for the old user are ignored
    epoch: u64,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Bind the store to a user. A different user (or none) drops everything.
    pub fn set_user(&mut self, user_id: Option<String>) {
        if self.user_id != user_id {
            tracing::debug!("Wishlist store switching user");
            let epoch = self.epoch + 1;
            *self = Self {
                user_id,
                epoch,
                ..Self::default()
            };
        }
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.members.contains(product_id)
    }

    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    /// Fetched items still in the membership set.
    pub fn items(&self) -> Vec<&Product> {
        self.items
            .iter()
            .filter(|p| self.members.contains(&p.id))
            .collect()
    }

    pub fn status(&self, product_id: &str) -> Option<&MutationState> {
        self.status.get(product_id)
    }

    pub fn is_pending(&self, product_id: &str) -> bool {
        matches!(self.status.get(product_id), Some(MutationState::Pending(_)))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// True when a refresh from the server is due and none is in flight.
    pub fn needs_refresh(&self) -> bool {
        self.user_id.is_some() && !self.fetching && (!self.loaded || self.stale)
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.stale = true;
    }

    /// Start a refresh. Returns `None` when no user is bound or a refresh is
    /// already in flight; an invalidation that lands meanwhile is picked up
    /// by the next `needs_refresh` once that one settles.
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        let user_id = self.user_id.clone()?;
        if self.fetching {
            return None;
        }
        self.fetching = true;
        self.stale = false;
        Some(RefreshTicket {
            user_id,
            generation: self.generation,
            epoch: self.epoch,
        })
    }

    fn settle(&mut self, ticket: &RefreshTicket) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.fetching = false;
        if ticket.generation != self.generation {
            tracing::debug!("Dropping wishlist snapshot taken before the latest change");
            self.stale = true;
            return false;
        }
        true
    }

    /// Land the server's list. Mutations still in flight are re-applied on
    /// top so the UI does not flicker. Returns `false` when the snapshot was
    /// outdated and dropped.
    pub fn finish_refresh(&mut self, ticket: &RefreshTicket, items: Vec<Product>) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        self.members = items.iter().map(|p| p.id.clone()).collect();
        for (product_id, state) in &self.status {
            match state {
                MutationState::Pending(WishlistOp::Add) => {
                    self.members.insert(product_id.clone());
                }
                MutationState::Pending(WishlistOp::Remove) => {
                    self.members.remove(product_id);
                }
                _ => {}
            }
        }
        self.items = items;
        self.loaded = true;
        true
    }

    /// A refresh failed; keep current membership and stop asking until the
    /// next invalidation.
    pub fn refresh_failed(&mut self, ticket: &RefreshTicket) {
        if self.settle(ticket) {
            self.loaded = true;
        }
    }

    /// Optimistically flip membership of `product_id`. Returns `None` when no
    /// user is bound or a mutation for this product is already pending.
    pub fn begin_toggle(&mut self, product_id: &str) -> Option<WishlistMutation> {
        let user_id = self.user_id.clone()?;
        if self.is_pending(product_id) {
            return None;
        }

        let op = if self.members.contains(product_id) {
            self.members.remove(product_id);
            WishlistOp::Remove
        } else {
            self.members.insert(product_id.to_string());
            WishlistOp::Add
        };
        self.status
            .insert(product_id.to_string(), MutationState::Pending(op));

        Some(WishlistMutation {
            user_id,
            product_id: product_id.to_string(),
            op,
            epoch: self.epoch,
        })
    }

    fn is_current(&self, mutation: &WishlistMutation) -> bool {
        mutation.epoch == self.epoch
            && self.status.get(&mutation.product_id) == Some(&MutationState::Pending(mutation.op))
    }

    pub fn confirm(&mut self, mutation: &WishlistMutation) {
        if !self.is_current(mutation) {
            return;
        }
        self.status
            .insert(mutation.product_id.clone(), MutationState::Confirmed);
        self.invalidate();
    }

    /// Revert the optimistic change.
    pub fn fail(&mut self, mutation: &WishlistMutation, reason: impl Into<String>) {
        if !self.is_current(mutation) {
            return;
        }
        match mutation.op {
            WishlistOp::Add => {
                self.members.remove(&mutation.product_id);
            }
            WishlistOp::Remove => {
                self.members.insert(mutation.product_id.clone());
            }
        }
        self.status.insert(
            mutation.product_id.clone(),
            MutationState::Failed(reason.into()),
        );
    }
}
