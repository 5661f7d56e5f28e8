use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Relative Y tolerance under which two segment endpoints count as coincident.
pub const DEFAULT_OVERLAP_TOLERANCE_RATIO: f64 = 0.01;

/// Dash cycles drawn along one overlapping segment.
pub const DEFAULT_DASH_CYCLES_PER_SEGMENT: f64 = 4.0;

/// One stretch of a dash cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DashPhase {
    On(f64),
    Off(f64),
}

impl DashPhase {
    #[must_use]
    pub fn len(self) -> f64 {
        match self {
            Self::On(len) | Self::Off(len) => len,
        }
    }

    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On(_))
    }
}

/// One repeating dash cycle, in pixels along the stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    phases: SmallVec<[DashPhase; 3]>,
}

impl DashPattern {
    /// Pattern for member `ordinal` of a group of `group_size` coincident
    /// lines: "on" only during its own `cycle / group_size` share.
    ///
    /// Returns `None` for groups smaller than two, which draw solid.
    #[must_use]
    pub fn for_group_member(ordinal: usize, group_size: usize, cycle: f64) -> Option<Self> {
        if group_size < 2 || ordinal >= group_size || !(cycle > 0.0) {
            return None;
        }

        let share = cycle / group_size as f64;
        let before = share * ordinal as f64;
        let after = cycle - before - share;
        let phases: SmallVec<[DashPhase; 3]> = if ordinal == 0 {
            smallvec::smallvec![DashPhase::On(share), DashPhase::Off(after)]
        } else if ordinal == group_size - 1 {
            smallvec::smallvec![DashPhase::Off(before), DashPhase::On(share)]
        } else {
            smallvec::smallvec![
                DashPhase::Off(before),
                DashPhase::On(share),
                DashPhase::Off(after)
            ]
        };
        Some(Self { phases })
    }

    /// Plain alternating pattern starting with `on`.
    #[must_use]
    pub fn alternating(on: f64, off: f64) -> Self {
        Self {
            phases: smallvec::smallvec![DashPhase::On(on), DashPhase::Off(off)],
        }
    }

    #[must_use]
    pub fn phases(&self) -> &[DashPhase] {
        &self.phases
    }

    #[must_use]
    pub fn cycle_len(&self) -> f64 {
        self.phases.iter().map(|phase| phase.len()).sum()
    }

    /// Whether the stroke is drawn at `offset` pixels along the segment.
    #[must_use]
    pub fn is_on_at(&self, offset: f64) -> bool {
        let cycle = self.cycle_len();
        if !(cycle > 0.0) {
            return false;
        }
        let mut position = offset.rem_euclid(cycle);
        for phase in &self.phases {
            if position < phase.len() {
                return phase.is_on();
            }
            position -= phase.len();
        }
        false
    }

    /// On/off lengths starting with "on", as canvas-style sinks expect.
    #[must_use]
    pub fn to_on_off_lengths(&self) -> Vec<f64> {
        let mut lengths = Vec::with_capacity(self.phases.len() + 1);
        if self.phases.first().is_some_and(|phase| !phase.is_on()) {
            lengths.push(0.0);
        }
        lengths.extend(self.phases.iter().map(|phase| phase.len()));
        lengths
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.phases.is_empty() {
            return Err(ChartError::InvalidData(
                "dash pattern must contain at least one phase".to_owned(),
            ));
        }
        if self
            .phases
            .iter()
            .any(|phase| !phase.len().is_finite() || phase.len() < 0.0)
        {
            return Err(ChartError::InvalidData(
                "dash phase lengths must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Disjoint-set forest over series indices.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    pub fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] = self.rank[ra].saturating_add(1);
            }
        }
    }

    /// Sets with two or more members, each sorted ascending, ordered by
    /// their smallest member.
    #[must_use]
    pub fn groups(&mut self) -> Vec<SmallVec<[usize; 4]>> {
        let len = self.parent.len();
        let mut by_root: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); len];
        for node in 0..len {
            let root = self.find(node);
            by_root[root].push(node);
        }
        let mut groups: Vec<_> = by_root.into_iter().filter(|g| g.len() >= 2).collect();
        groups.sort_by_key(|g| g[0]);
        groups
    }
}

/// Whether two Y positions are within `ratio` of the larger magnitude.
#[must_use]
pub fn values_coincide(a: f64, b: f64, ratio: f64) -> bool {
    (a - b).abs() <= ratio * a.abs().max(b.abs())
}

/// Whether two series' lines coincide over segment `segment` (samples
/// `segment` and `segment + 1`).
#[must_use]
pub fn segments_overlap(a: &[f64], b: &[f64], segment: usize, ratio: f64) -> bool {
    match (a.get(segment..=segment + 1), b.get(segment..=segment + 1)) {
        (Some(a), Some(b)) => {
            values_coincide(a[0], b[0], ratio) && values_coincide(a[1], b[1], ratio)
        }
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapConfig {
    pub tolerance_ratio: f64,
    pub dash_cycles_per_segment: f64,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            tolerance_ratio: DEFAULT_OVERLAP_TOLERANCE_RATIO,
            dash_cycles_per_segment: DEFAULT_DASH_CYCLES_PER_SEGMENT,
        }
    }
}

/// Per-segment overlap groups and the dash patterns derived from them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlapAnalysis {
    /// `groups[segment]`: overlap groups on that segment, members ascending.
    pub groups: Vec<Vec<SmallVec<[usize; 4]>>>,
    /// `dash_patterns[series][segment]`; `None` draws solid.
    pub dash_patterns: Vec<Vec<Option<DashPattern>>>,
}

impl OverlapAnalysis {
    #[must_use]
    pub fn dash_pattern(&self, series: usize, segment: usize) -> Option<&DashPattern> {
        self.dash_patterns.get(series)?.get(segment)?.as_ref()
    }
}

/// Groups coincident series per segment and synthesizes interleaving dashes.
///
/// `lines[series][sample]` are pixel Y positions, `x_pixels[sample]` the
/// shared pixel columns. Group membership is the transitive closure of
/// [`segments_overlap`].
#[must_use]
pub fn analyze_overlaps(lines: &[Vec<f64>], x_pixels: &[f64], config: OverlapConfig) -> OverlapAnalysis {
    let segment_count = x_pixels.len().saturating_sub(1);
    let mut groups = Vec::with_capacity(segment_count);
    let mut dash_patterns = vec![vec![None; segment_count]; lines.len()];

    for segment in 0..segment_count {
        let mut sets = UnionFind::new(lines.len());
        for a in 0..lines.len() {
            for b in (a + 1)..lines.len() {
                if segments_overlap(&lines[a], &lines[b], segment, config.tolerance_ratio) {
                    sets.union(a, b);
                }
            }
        }

        let segment_groups = sets.groups();
        if !segment_groups.is_empty() {
            let dx = x_pixels[segment + 1] - x_pixels[segment];
            for group in &segment_groups {
                // Members coincide, so the first one's slope stands for all.
                let first = &lines[group[0]];
                let dy = first[segment + 1] - first[segment];
                let cycle = dx.hypot(dy) / config.dash_cycles_per_segment;
                for (ordinal, &series) in group.iter().enumerate() {
                    dash_patterns[series][segment] =
                        DashPattern::for_group_member(ordinal, group.len(), cycle);
                }
            }
        }
        groups.push(segment_groups);
    }

    OverlapAnalysis {
        groups,
        dash_patterns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_find_closes_transitively() {
        let mut sets = UnionFind::new(5);
        sets.union(0, 2);
        sets.union(2, 4);
        let groups = sets.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].as_slice(), &[0, 2, 4]);
    }

    #[test]
    fn singletons_are_not_groups() {
        let mut sets = UnionFind::new(3);
        assert!(sets.groups().is_empty());
    }

    #[test]
    fn leading_off_phase_gets_zero_on_prefix() {
        let pattern = DashPattern::for_group_member(1, 2, 10.0).expect("pattern");
        assert_eq!(pattern.to_on_off_lengths(), vec![0.0, 5.0, 5.0]);
    }
}
