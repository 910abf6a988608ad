//! Pipeline entry points.
//!
//! Every system draws from its own stream, `root.fork("system/<index>")`,
//! which is forked again per phase. Rogues, grouping and nebulae fork from
//! the root stream after all systems are committed, so system `0` of a
//! multi-system run matches a single-system run with the same seed.

use std::collections::HashMap;

use entropy::{Seed, Stream};
use nalgebra::Point3;
use scene::{BodyId, BodyKind, GeneratedUniverse, NewBody, UniverseBuilder, validate};
use tracing::{debug, info, info_span, warn};

use crate::config::GenerationConfig;
use crate::error::{ConfigError, Result};
use crate::features::{
    Cluster, SystemView, place_belts, place_comets, place_nebulae, place_rings, place_rogues,
    place_trojans,
};
use crate::grouping::group_systems;
use crate::hierarchy::resolve_center;
use crate::naming::{catalog_name, moon_numeral, planet_letter, star_letter};
use crate::properties::{assign_colors, assign_masses, assign_orbits};
use crate::topology::{SystemDraft, expand_system};

/// Largest number of systems a single call may generate
pub const MAX_SYSTEMS: usize = 10_000;

/// Generate a universe holding a single system.
///
/// # Example
/// ```
/// use universe_generator::{GenerationConfig, generate_system};
///
/// let universe = generate_system(&GenerationConfig::default(), "Kepler-452").unwrap();
/// assert_eq!(universe.roots.len(), 1);
/// ```
pub fn generate_system(
    config: &GenerationConfig,
    seed: impl Into<Seed>,
) -> Result<GeneratedUniverse> {
    let seed = seed.into();
    let span = info_span!("generate_system", seed = seed.value());
    let _enter = span.enter();

    config.validate()?;
    Ok(run(1, false, config, &seed))
}

/// Generate `count` systems and arrange them into spatial groups.
///
/// `count` must lie in `1..=10_000`.
pub fn generate_systems(
    count: usize,
    config: &GenerationConfig,
    seed: impl Into<Seed>,
) -> Result<GeneratedUniverse> {
    let seed = seed.into();
    let span = info_span!("generate_systems", seed = seed.value(), count);
    let _enter = span.enter();

    if !(1..=MAX_SYSTEMS).contains(&count) {
        return Err(ConfigError::out_of_range(
            "count",
            count as f64,
            format!("[1, {}]", MAX_SYSTEMS),
        ));
    }
    config.validate()?;
    Ok(run(count, true, config, &seed))
}

fn run(count: usize, grouped: bool, config: &GenerationConfig, seed: &Seed) -> GeneratedUniverse {
    let root = Stream::seeded(seed);
    let mut builder = UniverseBuilder::new(seed.value());

    let mut extents = Vec::with_capacity(count);
    for index in 0..count {
        let mut system = root.fork(&format!("system/{}", index));
        let view = build_system(&mut builder, index, config, &mut system);
        extents.push((view.root, view.extent(&builder)));
    }

    place_rogues(&mut builder, config, &mut root.fork("rogues"));

    let clusters = if grouped {
        let roots = builder.roots().to_vec();
        group_systems(&mut builder, &roots, &config.grouping, &mut root.fork("grouping"));
        group_clusters(&builder, &extents)
    } else {
        extents
            .iter()
            .map(|&(_, extent)| Cluster {
                center: Point3::origin(),
                extent,
            })
            .collect()
    };

    place_nebulae(&mut builder, &clusters, config, &mut root.fork("nebulae"));

    let universe = builder.build();
    let report = validate(&universe);
    if !report.is_valid() {
        warn!(violations = report.len(), "generated universe failed validation");
    }
    info!(
        systems = universe.stats.systems,
        bodies = universe.stats.bodies,
        "universe generated"
    );
    universe
}

/// Expand, resolve, commit and decorate one system.
fn build_system(
    builder: &mut UniverseBuilder,
    index: usize,
    config: &GenerationConfig,
    stream: &mut Stream,
) -> SystemView {
    let mut draft = expand_system(
        &config.topology,
        &mut stream.fork("topology"),
        &mut stream.fork("topology/black-holes"),
    );
    assign_masses(&mut draft, &config.mass, &mut stream.fork("properties/mass"));
    assign_colors(&mut draft, &config.colors, &mut stream.fork("properties/color"));
    assign_orbits(&mut draft, &config.orbits, &mut stream.fork("properties/orbit"));
    resolve_center(&mut draft, &config.orbits);

    let catalog = catalog_name(&mut stream.fork("names"));
    let view = commit(builder, &draft, index, catalog);
    debug!(
        system = index,
        stars = view.stars.len(),
        planets = view.all_planets().count(),
        bodies = view.bodies.len(),
        "system committed"
    );

    place_belts(builder, &view, config, &mut stream.fork("features/belts"));
    place_rings(builder, &view, config, &mut stream.fork("features/rings"));
    place_comets(builder, &view, config, &mut stream.fork("features/comets"));
    place_trojans(builder, &view, config, &mut stream.fork("features/lagrange"));

    view
}

/// Push the draft into the builder, root first, depth-first.
fn commit(
    builder: &mut UniverseBuilder,
    draft: &SystemDraft,
    index: usize,
    catalog: String,
) -> SystemView {
    builder.reserve_bodies(draft.len());

    let mut ids: Vec<Option<BodyId>> = vec![None; draft.len()];
    let mut names: Vec<String> = vec![String::new(); draft.len()];
    let mut view = SystemView {
        index,
        catalog,
        root: BodyId(0),
        stars: Vec::new(),
        planets: Vec::new(),
        bodies: Vec::with_capacity(draft.len()),
    };

    let multiple_stars = draft.bodies[draft.root]
        .children
        .iter()
        .any(|&c| draft.bodies[c].depth == 0);
    let mut companions = 0;
    let mut stack = vec![draft.root];

    while let Some(i) = stack.pop() {
        let body = &draft.bodies[i];
        let parent = body.parent.and_then(|p| ids[p]);

        let name = match body.parent {
            None if multiple_stars => format!("{} {}", view.catalog, star_letter(0)),
            None => view.catalog.clone(),
            Some(_) if body.depth == 0 => {
                companions += 1;
                format!("{} {}", view.catalog, star_letter(companions))
            }
            Some(p) if body.depth == 1 => {
                let host = if p == draft.root {
                    &view.catalog
                } else {
                    &names[p]
                };
                format!("{} {}", host, planet_letter(body.ordinal))
            }
            Some(p) if body.depth == 2 => format!("{} {}", names[p], moon_numeral(body.ordinal)),
            Some(p) => format!("{}.{}", names[p], body.ordinal + 1),
        };

        let id = builder.push_body(NewBody {
            name: name.clone(),
            kind: body.kind,
            mass: body.mass,
            radius: body.radius,
            color: body.color,
            parent,
            orbit: body.orbit,
            metadata: None,
        });
        ids[i] = Some(id);
        names[i] = name;
        view.bodies.push(id);

        match body.kind {
            BodyKind::Star | BodyKind::BlackHole if body.depth == 0 => {
                view.stars.push(id);
                view.planets.push((id, Vec::new()));
            }
            BodyKind::Planet => {
                let host = view.planets.iter_mut().find(|(h, _)| Some(*h) == parent);
                if let Some((_, planets)) = host {
                    planets.push(id);
                }
            }
            _ => {}
        }

        stack.extend(body.children.iter().rev());
    }

    if let Some(root) = ids[draft.root] {
        view.root = root;
        builder.mark_root(root);
    }
    view
}

/// One nebula-avoidance cluster per group, reaching its farthest system.
pub(crate) fn group_clusters(builder: &UniverseBuilder, extents: &[(BodyId, f64)]) -> Vec<Cluster> {
    let extents: HashMap<BodyId, f64> = extents.iter().copied().collect();
    let extent_of = |root: BodyId| extents.get(&root).copied().unwrap_or(0.0);

    builder
        .groups()
        .iter()
        .map(|group| {
            let extent = group
                .systems()
                .map(|(root, offset)| offset.norm() + extent_of(root))
                .fold(0.0, f64::max);
            Cluster {
                center: group.placement,
                extent,
            }
        })
        .collect()
}
