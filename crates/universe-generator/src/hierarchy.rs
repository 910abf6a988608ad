//! System center selection.
//!
//! The heaviest body of a freshly expanded system becomes its root, wherever
//! it sits in the skeleton. The remaining top-level bodies are re-parented to
//! orbit it. On exactly equal masses the first-generated body wins, so a star
//! always beats a satellite of the same mass.

use scene::{Orbit, kepler_speed};
use tracing::debug;

use crate::config::OrbitConfig;
use crate::topology::SystemDraft;

/// Index of the heaviest body among `candidates`; earliest wins ties.
pub fn heaviest(draft: &SystemDraft, candidates: &[usize]) -> Option<usize> {
    candidates.iter().copied().fold(None, |best, i| match best {
        Some(b) if draft.bodies[b].mass >= draft.bodies[i].mass => Some(b),
        _ => Some(i),
    })
}

/// Promote the heaviest body to root and re-parent the top-level others.
///
/// A satellite that outweighs every star is detached from its host and keeps
/// its own satellites. Companions orbit the root at the companion distance,
/// evenly phased. The root's child list becomes companions first, then its
/// own satellites. Returns the root index, also stored in `draft.root`.
pub fn resolve_center(draft: &mut SystemDraft, config: &OrbitConfig) -> usize {
    let all: Vec<usize> = (0..draft.len()).collect();
    let Some(root) = heaviest(draft, &all) else {
        return draft.root;
    };

    if let Some(host) = draft.bodies[root].parent {
        draft.bodies[host].children.retain(|&c| c != root);
        debug!(
            root,
            kind = ?draft.bodies[root].kind,
            depth = draft.bodies[root].depth,
            "satellite outweighs every star"
        );
    }

    let companions: Vec<usize> = draft
        .top_level()
        .into_iter()
        .filter(|&i| i != root)
        .collect();
    let spacing = 360.0 / companions.len().max(1) as f64;

    for (j, &companion) in companions.iter().enumerate() {
        let body = &mut draft.bodies[companion];
        body.parent = Some(root);
        body.orbit = Orbit::circular(
            config.companion_distance,
            kepler_speed(config.kepler_constant, config.companion_distance),
            spacing * j as f64,
        );
    }

    let center = &mut draft.bodies[root];
    center.parent = None;
    center.orbit = Orbit::fixed();
    let satellites = std::mem::take(&mut center.children);
    center.children = companions;
    center.children.extend(satellites);

    draft.root = root;
    root
}
