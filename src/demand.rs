use std::collections::HashMap;

use crate::models::{Media, Project, RackId};
use crate::ordering::{natural_cmp, order_pair};

/// Merged demand for one unordered rack pair. `lo < hi` by natural order.
#[derive(Debug, Clone)]
pub struct PairDemand {
    pub lo: RackId,
    pub hi: RackId,
    pub counts: MediaCounts,
}

/// Per-media port counts for a rack pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaCounts {
    pub mmf_lc_duplex: u32,
    pub smf_lc_duplex: u32,
    pub mpo12: u32,
    pub utp_rj45: u32,
}

impl MediaCounts {
    pub fn add(&mut self, media: Media, count: u32) {
        match media {
            Media::MmfLcDuplex => self.mmf_lc_duplex += count,
            Media::SmfLcDuplex => self.smf_lc_duplex += count,
            Media::Mpo12 => self.mpo12 += count,
            Media::UtpRj45 => self.utp_rj45 += count,
        }
    }

    pub fn of(&self, media: Media) -> u32 {
        match media {
            Media::MmfLcDuplex => self.mmf_lc_duplex,
            Media::SmfLcDuplex => self.smf_lc_duplex,
            Media::Mpo12 => self.mpo12,
            Media::UtpRj45 => self.utp_rj45,
        }
    }
}

/// Group demands by unordered rack pair and media, merging counts. The
/// returned list is sorted by (lo, hi) natural order; every per-pair scan in
/// the allocators walks it in that order.
pub fn normalize_demands(project: &Project) -> Vec<PairDemand> {
    let mut merged: HashMap<(RackId, RackId), MediaCounts> = HashMap::new();
    for demand in &project.demands {
        let pair = order_pair(&demand.src, &demand.dst);
        merged
            .entry(pair)
            .or_default()
            .add(demand.endpoint_type, demand.count);
    }

    let mut pairs: Vec<PairDemand> = merged
        .into_iter()
        .map(|((lo, hi), counts)| PairDemand { lo, hi, counts })
        .collect();
    pairs.sort_by(|a, b| natural_cmp(&a.lo, &b.lo).then_with(|| natural_cmp(&a.hi, &b.hi)));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Demand, Rack};

    fn demand(id: &str, src: &str, dst: &str, media: Media, count: u32) -> Demand {
        Demand {
            id: id.into(),
            src: src.into(),
            dst: dst.into(),
            endpoint_type: media,
            count,
        }
    }

    #[test]
    fn merges_both_directions_of_a_pair() {
        let project = Project {
            racks: vec![Rack { id: "R2".into() }, Rack { id: "R10".into() }],
            demands: vec![
                demand("D1", "R10", "R2", Media::Mpo12, 3),
                demand("D2", "R2", "R10", Media::Mpo12, 4),
                demand("D3", "R2", "R10", Media::UtpRj45, 2),
            ],
        };
        let pairs = normalize_demands(&project);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].lo, "R2");
        assert_eq!(pairs[0].hi, "R10");
        assert_eq!(pairs[0].counts.of(Media::Mpo12), 7);
        assert_eq!(pairs[0].counts.of(Media::UtpRj45), 2);
        assert_eq!(pairs[0].counts.of(Media::MmfLcDuplex), 0);
    }

    #[test]
    fn pair_list_sorts_naturally() {
        let project = Project {
            racks: vec![
                Rack { id: "R1".into() },
                Rack { id: "R2".into() },
                Rack { id: "R10".into() },
            ],
            demands: vec![
                demand("D1", "R10", "R1", Media::UtpRj45, 1),
                demand("D2", "R2", "R1", Media::UtpRj45, 1),
            ],
        };
        let pairs = normalize_demands(&project);
        let keys: Vec<(&str, &str)> = pairs.iter().map(|p| (p.lo.as_str(), p.hi.as_str())).collect();
        assert_eq!(keys, vec![("R1", "R2"), ("R1", "R10")]);
    }
}
