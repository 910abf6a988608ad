//! Generate a universe with every feature enabled and summarize it as CSV
//!
//! Usage: cargo run -p universe-generator --example generate_universe [seed]
//!
//! One row per system on stdout; universe totals on stderr.

use scene::{BodyKind, BodyMetadata};
use universe_generator::{GenerationConfig, generate_systems, validate};

fn main() {
    let seed = std::env::args().nth(1).unwrap_or_else(|| "Kepler-452".to_string());
    let n_systems = 200;

    let universe = match generate_systems(n_systems, &GenerationConfig::full(), seed.as_str()) {
        Ok(universe) => universe,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    println!("system_id,root,root_kind,root_mass,stars,planets,moons,ringed,comets,trojans,belts,x,y,z");

    for (i, &root) in universe.roots.iter().enumerate() {
        let Some(center) = universe.body(root) else {
            continue;
        };
        let members: Vec<_> = universe
            .descendants(root)
            .into_iter()
            .filter_map(|id| universe.body(id))
            .collect();
        let count = |kind: BodyKind| members.iter().filter(|b| b.kind == kind).count();

        let stars = 1 + members.iter().filter(|b| b.kind.is_stellar()).count();
        let ringed = members
            .iter()
            .filter(|b| matches!(b.metadata, Some(BodyMetadata::Rings(_))))
            .count();
        let trojans = members
            .iter()
            .filter(|b| matches!(b.metadata, Some(BodyMetadata::Lagrange(_))))
            .count();
        let origin = universe.system_origin(root);

        println!(
            "{},{},{},{:.4},{},{},{},{},{},{},{},{:.1},{:.1},{:.1}",
            i,
            center.name,
            center.kind.label(),
            center.mass,
            stars,
            count(BodyKind::Planet),
            count(BodyKind::Moon),
            ringed,
            count(BodyKind::Comet),
            trojans,
            universe.belts_of_system(root).count(),
            origin.x,
            origin.y,
            origin.z,
        );
    }

    let stats = &universe.stats;
    eprintln!(
        "Generated {} systems ({} bodies, {} belts, {} groups, {} nebulae, {} rogues) from seed {}",
        stats.systems,
        stats.bodies,
        stats.belts,
        stats.groups,
        stats.nebulae,
        stats.rogue_planets,
        universe.seed,
    );

    let report = validate(&universe);
    if !report.is_valid() {
        eprintln!("{} validation violations", report.len());
    }
}
