//! In-memory join of npcs, props and the gifts linking them.

use std::{cmp::Ordering, collections::HashMap};

use shared::{
    domain::{Gift, Npc, NpcId, Prop, PropId},
    error::CatalogError,
};
use tracing::{debug, info};

pub mod report;

/// Position of a gift in the catalog's link table.
pub type GiftIdx = usize;

/// Npcs and props indexed by id, each owning an ordered list of the gifts
/// that reference it.
///
/// Every gift is stored once; both sides of the relation refer to it by
/// [`GiftIdx`]. Lists are ordered by [`gift_order`].
#[derive(Debug, Clone)]
pub struct GiftCatalog {
    npcs: Vec<Npc>,
    npc_gifts: Vec<Vec<GiftIdx>>,
    npc_index: HashMap<NpcId, usize>,
    props: Vec<Prop>,
    prop_gifts: Vec<Vec<GiftIdx>>,
    prop_index: HashMap<PropId, usize>,
    gifts: Vec<Gift>,
    gift_npcs: Vec<usize>,
    gift_props: Vec<usize>,
}

impl GiftCatalog {
    pub fn build(npcs: Vec<Npc>, props: Vec<Prop>, gifts: Vec<Gift>) -> Result<Self, CatalogError> {
        let mut npc_index = HashMap::with_capacity(npcs.len());
        for (position, npc) in npcs.iter().enumerate() {
            if npc_index.insert(npc.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateNpc(npc.id.clone()));
            }
        }

        let mut prop_index = HashMap::with_capacity(props.len());
        for (position, prop) in props.iter().enumerate() {
            if prop_index.insert(prop.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProp(prop.id.clone()));
            }
        }

        let mut npc_gifts = vec![Vec::new(); npcs.len()];
        let mut prop_gifts = vec![Vec::new(); props.len()];
        let mut gift_npcs = Vec::with_capacity(gifts.len());
        let mut gift_props = Vec::with_capacity(gifts.len());

        for (idx, gift) in gifts.iter().enumerate() {
            let &npc_pos = npc_index
                .get(&gift.npc)
                .ok_or_else(|| CatalogError::UnknownNpc {
                    gift: idx,
                    npc: gift.npc.clone(),
                })?;
            let &prop_pos = prop_index
                .get(&gift.prop)
                .ok_or_else(|| CatalogError::UnknownProp {
                    gift: idx,
                    prop: gift.prop.clone(),
                })?;
            npc_gifts[npc_pos].push(idx);
            prop_gifts[prop_pos].push(idx);
            gift_npcs.push(npc_pos);
            gift_props.push(prop_pos);
        }

        let mut catalog = Self {
            npcs,
            npc_gifts,
            npc_index,
            props,
            prop_gifts,
            prop_index,
            gifts,
            gift_npcs,
            gift_props,
        };
        catalog.resort();

        info!(
            npcs = catalog.npcs.len(),
            props = catalog.props.len(),
            gifts = catalog.gifts.len(),
            "gift catalog joined"
        );
        Ok(catalog)
    }

    /// Sorts every npc and prop gift list in place. Sorting is stable, so
    /// running this on an already sorted catalog changes nothing.
    pub fn resort(&mut self) {
        let gifts = &self.gifts;
        let props = &self.props;
        let gift_props = &self.gift_props;
        let order = |a: &GiftIdx, b: &GiftIdx| {
            gift_order(
                (&gifts[*a], &props[gift_props[*a]]),
                (&gifts[*b], &props[gift_props[*b]]),
            )
        };

        for list in self.npc_gifts.iter_mut().chain(self.prop_gifts.iter_mut()) {
            list.sort_by(order);
        }
        debug!(lists = self.npc_gifts.len() + self.prop_gifts.len(), "gift lists sorted");
    }

    pub fn gift_count(&self) -> usize {
        self.gifts.len()
    }

    pub fn link(&self, idx: GiftIdx) -> Option<GiftLink<'_>> {
        let gift = self.gifts.get(idx)?;
        Some(GiftLink {
            idx,
            gift,
            npc: &self.npcs[self.gift_npcs[idx]],
            prop: &self.props[self.gift_props[idx]],
        })
    }

    /// Npcs in dataset order.
    pub fn npcs(&self) -> impl Iterator<Item = NpcView<'_>> + '_ {
        (0..self.npcs.len()).map(move |position| self.npc_at(position))
    }

    /// Props in dataset order.
    pub fn props(&self) -> impl Iterator<Item = PropView<'_>> + '_ {
        (0..self.props.len()).map(move |position| self.prop_at(position))
    }

    pub fn npc(&self, id: &NpcId) -> Option<NpcView<'_>> {
        self.npc_index.get(id).map(|&position| self.npc_at(position))
    }

    pub fn prop(&self, id: &PropId) -> Option<PropView<'_>> {
        self.prop_index.get(id).map(|&position| self.prop_at(position))
    }

    /// Resolves an exact id first, then a name ignoring case and spacing.
    pub fn find_npc(&self, query: &str) -> Option<NpcView<'_>> {
        if let Some(view) = self.npc(&NpcId::new(query.trim())) {
            return Some(view);
        }
        let wanted = normalize_lookup(query);
        self.npcs().find(|view| normalize_lookup(&view.npc.name) == wanted)
    }

    pub fn find_prop(&self, query: &str) -> Option<PropView<'_>> {
        if let Some(view) = self.prop(&PropId::new(query.trim())) {
            return Some(view);
        }
        let wanted = normalize_lookup(query);
        self.props()
            .find(|view| normalize_lookup(&view.prop.prop_name) == wanted)
    }

    fn npc_at(&self, position: usize) -> NpcView<'_> {
        NpcView {
            npc: &self.npcs[position],
            gifts: &self.npc_gifts[position],
            catalog: self,
        }
    }

    fn prop_at(&self, position: usize) -> PropView<'_> {
        PropView {
            prop: &self.props[position],
            gifts: &self.prop_gifts[position],
            catalog: self,
        }
    }

    fn links<'a>(&'a self, gifts: &'a [GiftIdx]) -> impl Iterator<Item = GiftLink<'a>> + 'a {
        gifts.iter().filter_map(move |&idx| self.link(idx))
    }
}

/// Gift list ordering: favor descending, then prop name ascending.
pub fn gift_order(a: (&Gift, &Prop), b: (&Gift, &Prop)) -> Ordering {
    b.0.favor
        .cmp(&a.0.favor)
        .then_with(|| a.1.prop_name.cmp(&b.1.prop_name))
}

fn normalize_lookup(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One gift with both of its endpoints resolved.
#[derive(Debug, Clone, Copy)]
pub struct GiftLink<'a> {
    pub idx: GiftIdx,
    pub gift: &'a Gift,
    pub npc: &'a Npc,
    pub prop: &'a Prop,
}

#[derive(Debug, Clone, Copy)]
pub struct NpcView<'a> {
    pub npc: &'a Npc,
    gifts: &'a [GiftIdx],
    catalog: &'a GiftCatalog,
}

impl<'a> NpcView<'a> {
    pub fn gift_indices(&self) -> &'a [GiftIdx] {
        self.gifts
    }

    pub fn links(&self) -> impl Iterator<Item = GiftLink<'a>> + 'a {
        self.catalog.links(self.gifts)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PropView<'a> {
    pub prop: &'a Prop,
    gifts: &'a [GiftIdx],
    catalog: &'a GiftCatalog,
}

impl<'a> PropView<'a> {
    pub fn gift_indices(&self) -> &'a [GiftIdx] {
        self.gifts
    }

    pub fn links(&self) -> impl Iterator<Item = GiftLink<'a>> + 'a {
        self.catalog.links(self.gifts)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
