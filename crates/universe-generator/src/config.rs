//! Generation parameters.
//!
//! [`GenerationConfig`] is an immutable, fully serializable record of every
//! tunable value. Each section is `#[serde(default)]`, so a partial TOML or
//! JSON document overrides only the fields it names.
//!
//! ## Example TOML override
//!
//! ```toml
//! [topology]
//! maxDepth = 3
//!
//! [belts]
//! enableAsteroidBelts = true
//! maxBeltsPerSystem = 1
//! ```

use entropy::{Stream, sample_uniform};
use rand::Rng;
use scene::Color;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Tolerance for probability vectors summing to one
const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// Deepest supported nesting: star (0), planet (1), moon (2), two sub-moon levels
pub const MAX_TOPOLOGY_DEPTH: u8 = 4;

// =============================================================================
// Ranges
// =============================================================================

/// Closed float range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Uniform sample in `[min, max)`. One draw.
    pub fn sample(&self, rng: &mut Stream) -> f64 {
        sample_uniform(rng, self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Closed integer range used for counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: usize) -> usize {
        value.clamp(self.min as usize, self.max as usize)
    }

    /// Uniform integer in `[min, max]`.
    pub fn sample(&self, rng: &mut Stream) -> usize {
        rng.random_range(self.min..=self.max) as usize
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Stochastic grammar: how many stars, planets and moons a system holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TopologyConfig {
    /// Probability of 1, 2 or 3 stars
    pub star_count_weights: Vec<f64>,
    /// Per-trial success probability of the planet count
    pub planet_geometric_p: f64,
    /// Per-trial success probability of each moon count
    pub moon_geometric_p: f64,
    pub max_planets_per_star: usize,
    pub max_moons_per_body: usize,
    /// 1 = planets only, 2 = moons, 3-4 = nested sub-moons
    pub max_depth: u8,
    pub black_hole_probability: f64,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            star_count_weights: vec![0.7, 0.25, 0.05],
            planet_geometric_p: 0.22,
            moon_geometric_p: 0.45,
            max_planets_per_star: 10,
            max_moons_per_body: 6,
            max_depth: 2,
            black_hole_probability: 0.0,
        }
    }
}

/// Log-normal masses scaled per body kind; radius follows `mass^radiusExponent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MassConfig {
    pub log_mean: f64,
    pub log_std: f64,
    pub star_multiplier: f64,
    pub black_hole_multiplier: f64,
    pub planet_multiplier: f64,
    pub moon_multiplier: f64,
    pub radius_exponent: f64,
}

impl Default for MassConfig {
    fn default() -> Self {
        Self {
            log_mean: 0.0,
            log_std: 0.8,
            star_multiplier: 1.0,
            black_hole_multiplier: 8.0,
            planet_multiplier: 1e-3,
            moon_multiplier: 2e-5,
            radius_exponent: 0.45,
        }
    }
}

/// Orbital spacing and speeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbitConfig {
    /// Separation of companion stars from the system center
    pub companion_distance: f64,
    pub planet_base_distance: f64,
    pub planet_growth: f64,
    pub moon_base_distance: f64,
    pub moon_growth: f64,
    /// Moon spacing shrinks by this factor per level below depth 2
    pub nested_moon_scale: f64,
    /// Jitter as a fraction of the gap to the next orbital slot
    pub distance_jitter_fraction: f64,
    /// Angular speed is `keplerConstant / sqrt(distance)`
    pub kepler_constant: f64,
    /// Planets and moons tilt uniformly up to this many degrees
    pub max_inclination_deg: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            companion_distance: 2.5,
            planet_base_distance: 4.0,
            planet_growth: 1.6,
            moon_base_distance: 0.12,
            moon_growth: 1.5,
            nested_moon_scale: 0.3,
            distance_jitter_fraction: 0.2,
            kepler_constant: 1.0,
            max_inclination_deg: 2.0,
        }
    }
}

/// A stellar color band: stars with `mass >= minMass` glow at `temperature`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectralBand {
    pub class: char,
    pub min_mass: f64,
    /// Kelvin
    pub temperature: f64,
}

/// Palette anchor for non-stellar bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteStop {
    pub mass: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorConfig {
    /// Ordered by descending `minMass`
    pub spectral_bands: Vec<SpectralBand>,
    /// Ordered by ascending `mass`
    pub palette: Vec<PaletteStop>,
    /// Per-channel uniform variation added to palette colors
    pub variation: f64,
}

impl Default for ColorConfig {
    fn default() -> Self {
        let band = |class, min_mass, temperature| SpectralBand {
            class,
            min_mass,
            temperature,
        };
        let stop = |mass, r, g, b| PaletteStop {
            mass,
            color: Color::new(r, g, b),
        };

        Self {
            spectral_bands: vec![
                band('O', 16.0, 35000.0),
                band('B', 2.1, 15000.0),
                band('A', 1.4, 8500.0),
                band('F', 1.04, 6500.0),
                band('G', 0.8, 5600.0),
                band('K', 0.45, 4300.0),
                band('M', 0.0, 3200.0),
            ],
            palette: vec![
                stop(0.0, 128, 124, 120),
                stop(3e-4, 150, 110, 80),
                stop(1.2e-3, 70, 120, 190),
                stop(3e-3, 210, 180, 140),
            ],
            variation: 12.0,
        }
    }
}

/// Asteroid belts in planet gaps and Kuiper belts beyond the outermost planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BeltConfig {
    pub enable_asteroid_belts: bool,
    pub enable_kuiper_belts: bool,
    pub max_belts_per_system: usize,
    pub member_geometric_p: f64,
    pub member_count: CountRange,
    /// Belts with more members than this store a particle count instead
    pub particle_threshold: u32,
    /// Fraction of a gap kept clear on each side, in `(0, 0.5)`
    pub gap_margin: f64,
    /// Thickness as a fraction of band width
    pub thickness_fraction: Interval,
    pub kuiper_inner_factor: f64,
    pub kuiper_outer_factor: f64,
    pub member_mass: Interval,
}

impl Default for BeltConfig {
    fn default() -> Self {
        Self {
            enable_asteroid_belts: false,
            enable_kuiper_belts: false,
            max_belts_per_system: 2,
            member_geometric_p: 0.01,
            member_count: CountRange::new(20, 5000),
            particle_threshold: 400,
            gap_margin: 0.2,
            thickness_fraction: Interval::new(0.02, 0.08),
            kuiper_inner_factor: 1.3,
            kuiper_outer_factor: 2.0,
            member_mass: Interval::new(1e-9, 1e-7),
        }
    }
}

/// Planetary rings, more likely on heavy and distant planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RingConfig {
    pub enable_rings: bool,
    pub base_probability: f64,
    pub mass_bias: f64,
    pub distance_bias: f64,
    pub mass_reference: f64,
    pub distance_reference: f64,
    /// Inner edge as a multiple of the planet radius
    pub inner_factor: Interval,
    /// Outer edge as a multiple of the planet radius
    pub outer_factor: Interval,
    pub opacity: Interval,
    pub density: Interval,
    pub albedo: Interval,
    pub tilt_deg: Interval,
    pub band_count: CountRange,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            enable_rings: true,
            base_probability: 0.1,
            mass_bias: 0.5,
            distance_bias: 0.2,
            mass_reference: 2e-3,
            distance_reference: 10.0,
            inner_factor: Interval::new(1.3, 1.8),
            outer_factor: Interval::new(2.0, 3.2),
            opacity: Interval::new(0.3, 0.9),
            density: Interval::new(0.2, 1.0),
            albedo: Interval::new(0.2, 0.8),
            tilt_deg: Interval::new(0.0, 30.0),
            band_count: CountRange::new(1, 6),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CometConfig {
    pub enable_comets: bool,
    pub geometric_p: f64,
    pub max_per_system: usize,
    /// Semi-major axis as a multiple of the outermost planet distance
    pub semi_major_factor: Interval,
    pub eccentricity: Interval,
    pub max_inclination_deg: f64,
    pub mass: Interval,
    pub tail_length: Interval,
    pub tail_width_fraction: Interval,
    pub tail_opacity: Interval,
}

impl Default for CometConfig {
    fn default() -> Self {
        Self {
            enable_comets: false,
            geometric_p: 0.35,
            max_per_system: 6,
            semi_major_factor: Interval::new(1.2, 4.0),
            eccentricity: Interval::new(0.5, 0.95),
            max_inclination_deg: 40.0,
            mass: Interval::new(1e-10, 1e-8),
            tail_length: Interval::new(0.5, 3.0),
            tail_width_fraction: Interval::new(0.05, 0.2),
            tail_opacity: Interval::new(0.3, 0.8),
        }
    }
}

/// Trojan companions at a planet's L4/L5 points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LagrangeConfig {
    pub enable_lagrange: bool,
    pub probability: f64,
    pub max_per_point: u32,
    /// Phase scatter around the ±60° point
    pub libration_deg: f64,
    /// Distance scatter as a fraction of the host's distance
    pub libration_fraction: f64,
    /// Companion mass as a fraction of the host's
    pub mass_ratio: Interval,
}

impl Default for LagrangeConfig {
    fn default() -> Self {
        Self {
            enable_lagrange: false,
            probability: 0.3,
            max_per_point: 3,
            libration_deg: 5.0,
            libration_fraction: 0.02,
            mass_ratio: Interval::new(1e-6, 1e-4),
        }
    }
}

/// How often rogue paths curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrajectoryMode {
    AllLinear,
    Mixed,
    MostlyCurved,
}

impl TrajectoryMode {
    /// Probability that a rogue follows a curved path
    pub fn curved_fraction(self) -> f64 {
        match self {
            Self::AllLinear => 0.0,
            Self::Mixed => 0.5,
            Self::MostlyCurved => 0.8,
        }
    }
}

/// Unbound bodies drifting between systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RogueConfig {
    pub enable_rogues: bool,
    pub geometric_p: f64,
    pub count: CountRange,
    /// Distance of the starting point from the galactic origin
    pub radial_band: Interval,
    /// Velocity stays within this many degrees of the galactic plane
    pub max_inclination_deg: f64,
    pub speed: Interval,
    pub trajectory_mode: TrajectoryMode,
    pub curvature: Interval,
    pub black_hole_fraction: f64,
}

impl Default for RogueConfig {
    fn default() -> Self {
        Self {
            enable_rogues: false,
            geometric_p: 0.3,
            count: CountRange::new(0, 8),
            radial_band: Interval::new(150.0, 400.0),
            max_inclination_deg: 30.0,
            speed: Interval::new(0.01, 0.1),
            trajectory_mode: TrajectoryMode::Mixed,
            curvature: Interval::new(0.002, 0.02),
            black_hole_fraction: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NebulaConfig {
    pub enable_nebulae: bool,
    pub geometric_p: f64,
    pub count: CountRange,
    pub radius: Interval,
    /// Candidate distance from the galactic origin
    pub placement_radius: Interval,
    /// Minimum gap kept to clusters and other nebulae
    pub clearance: f64,
    pub max_attempts: u32,
    pub density: Interval,
    /// Emission, reflection, dark, remnant
    pub kind_weights: Vec<f64>,
    pub color_variation: f64,
}

impl Default for NebulaConfig {
    fn default() -> Self {
        Self {
            enable_nebulae: false,
            geometric_p: 0.5,
            count: CountRange::new(0, 4),
            radius: Interval::new(20.0, 80.0),
            placement_radius: Interval::new(100.0, 600.0),
            clearance: 10.0,
            max_attempts: 32,
            density: Interval::new(0.1, 0.6),
            kind_weights: vec![0.4, 0.3, 0.2, 0.1],
            color_variation: 20.0,
        }
    }
}

/// Spatial clustering of systems, used by multi-system generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupingConfig {
    pub top_level_groups: CountRange,
    pub nesting_probability: f64,
    /// Longest allowed containment chain, counting the top-level group
    pub max_depth: u32,
    pub placement_sigma: f64,
    pub nested_sigma_scale: f64,
    pub system_offset_sigma: f64,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            top_level_groups: CountRange::new(3, 7),
            nesting_probability: 0.35,
            max_depth: 3,
            placement_sigma: 250.0,
            nested_sigma_scale: 0.35,
            system_offset_sigma: 40.0,
        }
    }
}

// =============================================================================
// Top-level configuration
// =============================================================================

/// Every tunable parameter of a generation run.
///
/// Identical (seed, config) pairs always produce identical universes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    pub topology: TopologyConfig,
    pub mass: MassConfig,
    pub orbits: OrbitConfig,
    pub colors: ColorConfig,
    pub belts: BeltConfig,
    pub rings: RingConfig,
    pub comets: CometConfig,
    pub lagrange: LagrangeConfig,
    pub rogues: RogueConfig,
    pub nebulae: NebulaConfig,
    pub grouping: GroupingConfig,
}

impl GenerationConfig {
    /// Defaults with every optional feature switched off: only stars,
    /// planets and moons are generated.
    pub fn minimal() -> Self {
        let mut config = Self::default();
        config.belts.enable_asteroid_belts = false;
        config.belts.enable_kuiper_belts = false;
        config.rings.enable_rings = false;
        config.comets.enable_comets = false;
        config.lagrange.enable_lagrange = false;
        config.rogues.enable_rogues = false;
        config.nebulae.enable_nebulae = false;
        config
    }

    /// Defaults with every optional feature switched on.
    pub fn full() -> Self {
        let mut config = Self::default();
        config.belts.enable_asteroid_belts = true;
        config.belts.enable_kuiper_belts = true;
        config.rings.enable_rings = true;
        config.comets.enable_comets = true;
        config.lagrange.enable_lagrange = true;
        config.rogues.enable_rogues = true;
        config.nebulae.enable_nebulae = true;
        config
    }

    /// Check every field, reporting the first offending one.
    pub fn validate(&self) -> Result<()> {
        self.validate_topology()?;
        self.validate_mass()?;
        self.validate_orbits()?;
        self.validate_colors()?;
        self.validate_belts()?;
        self.validate_rings()?;
        self.validate_comets()?;
        self.validate_lagrange()?;
        self.validate_rogues()?;
        self.validate_nebulae()?;
        self.validate_grouping()
    }

    fn validate_topology(&self) -> Result<()> {
        let t = &self.topology;
        probability_vector("topology.starCountWeights", &t.star_count_weights, 3)?;
        success_probability("topology.planetGeometricP", t.planet_geometric_p)?;
        success_probability("topology.moonGeometricP", t.moon_geometric_p)?;
        if !(1..=MAX_TOPOLOGY_DEPTH).contains(&t.max_depth) {
            return Err(ConfigError::out_of_range(
                "topology.maxDepth",
                t.max_depth as f64,
                format!("[1, {}]", MAX_TOPOLOGY_DEPTH),
            ));
        }
        probability("topology.blackHoleProbability", t.black_hole_probability)
    }

    fn validate_mass(&self) -> Result<()> {
        let m = &self.mass;
        finite("mass.logMean", m.log_mean)?;
        non_negative("mass.logStd", m.log_std)?;
        positive("mass.starMultiplier", m.star_multiplier)?;
        positive("mass.blackHoleMultiplier", m.black_hole_multiplier)?;
        positive("mass.planetMultiplier", m.planet_multiplier)?;
        positive("mass.moonMultiplier", m.moon_multiplier)?;
        positive("mass.radiusExponent", m.radius_exponent)?;

        if !(m.star_multiplier > m.planet_multiplier && m.planet_multiplier > m.moon_multiplier) {
            return Err(ConfigError::inconsistent(
                "mass",
                "multipliers must satisfy star > planet > moon",
            ));
        }
        Ok(())
    }

    fn validate_orbits(&self) -> Result<()> {
        let o = &self.orbits;
        positive("orbits.companionDistance", o.companion_distance)?;
        positive("orbits.planetBaseDistance", o.planet_base_distance)?;
        greater_than_one("orbits.planetGrowth", o.planet_growth)?;
        positive("orbits.moonBaseDistance", o.moon_base_distance)?;
        greater_than_one("orbits.moonGrowth", o.moon_growth)?;
        if !(o.nested_moon_scale > 0.0 && o.nested_moon_scale <= 1.0) {
            return Err(ConfigError::out_of_range(
                "orbits.nestedMoonScale",
                o.nested_moon_scale,
                "(0, 1]",
            ));
        }
        half_open_unit("orbits.distanceJitterFraction", o.distance_jitter_fraction)?;
        positive("orbits.keplerConstant", o.kepler_constant)?;
        within("orbits.maxInclinationDeg", o.max_inclination_deg, 0.0, 90.0)
    }

    fn validate_colors(&self) -> Result<()> {
        let c = &self.colors;
        if c.spectral_bands.is_empty() {
            return Err(ConfigError::inconsistent(
                "colors.spectralBands",
                "at least one band is required",
            ));
        }
        for (i, band) in c.spectral_bands.iter().enumerate() {
            non_negative(format!("colors.spectralBands[{}].minMass", i), band.min_mass)?;
            positive(
                format!("colors.spectralBands[{}].temperature", i),
                band.temperature,
            )?;
        }
        if c
            .spectral_bands
            .windows(2)
            .any(|pair| pair[0].min_mass <= pair[1].min_mass)
        {
            return Err(ConfigError::inconsistent(
                "colors.spectralBands",
                "mass thresholds must be strictly descending",
            ));
        }

        if c.palette.is_empty() {
            return Err(ConfigError::inconsistent(
                "colors.palette",
                "at least one stop is required",
            ));
        }
        if c.palette.windows(2).any(|pair| pair[0].mass >= pair[1].mass) {
            return Err(ConfigError::inconsistent(
                "colors.palette",
                "stop masses must be strictly ascending",
            ));
        }
        within("colors.variation", c.variation, 0.0, 255.0)
    }

    fn validate_belts(&self) -> Result<()> {
        let b = &self.belts;
        success_probability("belts.memberGeometricP", b.member_geometric_p)?;
        count_range("belts.memberCount", &b.member_count)?;
        if !(b.gap_margin > 0.0 && b.gap_margin < 0.5) {
            return Err(ConfigError::out_of_range(
                "belts.gapMargin",
                b.gap_margin,
                "(0, 0.5)",
            ));
        }
        interval_within("belts.thicknessFraction", &b.thickness_fraction, 0.0, 1.0)?;
        greater_than_one("belts.kuiperInnerFactor", b.kuiper_inner_factor)?;
        if b.kuiper_outer_factor <= b.kuiper_inner_factor {
            return Err(ConfigError::inconsistent(
                "belts.kuiperOuterFactor",
                "must exceed kuiperInnerFactor",
            ));
        }
        positive_interval("belts.memberMass", &b.member_mass)
    }

    fn validate_rings(&self) -> Result<()> {
        let r = &self.rings;
        non_negative("rings.baseProbability", r.base_probability)?;
        non_negative("rings.massBias", r.mass_bias)?;
        non_negative("rings.distanceBias", r.distance_bias)?;
        positive("rings.massReference", r.mass_reference)?;
        positive("rings.distanceReference", r.distance_reference)?;
        positive_interval("rings.innerFactor", &r.inner_factor)?;
        positive_interval("rings.outerFactor", &r.outer_factor)?;
        if r.inner_factor.max >= r.outer_factor.min {
            return Err(ConfigError::inconsistent(
                "rings.innerFactor",
                "inner factor range overlaps outer factor range",
            ));
        }
        interval_within("rings.opacity", &r.opacity, 0.0, 1.0)?;
        interval_within("rings.density", &r.density, 0.0, 1.0)?;
        interval_within("rings.albedo", &r.albedo, 0.0, 1.0)?;
        interval_within("rings.tiltDeg", &r.tilt_deg, 0.0, 90.0)?;
        count_range("rings.bandCount", &r.band_count)?;
        if r.band_count.min == 0 {
            return Err(ConfigError::out_of_range(
                "rings.bandCount",
                0.0,
                "a minimum of at least 1",
            ));
        }
        Ok(())
    }

    fn validate_comets(&self) -> Result<()> {
        let c = &self.comets;
        success_probability("comets.geometricP", c.geometric_p)?;
        positive_interval("comets.semiMajorFactor", &c.semi_major_factor)?;
        interval_within("comets.eccentricity", &c.eccentricity, 0.0, 1.0)?;
        if c.eccentricity.max >= 1.0 {
            return Err(ConfigError::out_of_range(
                "comets.eccentricity",
                c.eccentricity.max,
                "[0, 1)",
            ));
        }
        within("comets.maxInclinationDeg", c.max_inclination_deg, 0.0, 180.0)?;
        positive_interval("comets.mass", &c.mass)?;
        positive_interval("comets.tailLength", &c.tail_length)?;
        interval_within("comets.tailWidthFraction", &c.tail_width_fraction, 0.0, 1.0)?;
        interval_within("comets.tailOpacity", &c.tail_opacity, 0.0, 1.0)
    }

    fn validate_lagrange(&self) -> Result<()> {
        let l = &self.lagrange;
        probability("lagrange.probability", l.probability)?;
        if l.max_per_point == 0 {
            return Err(ConfigError::out_of_range(
                "lagrange.maxPerPoint",
                0.0,
                "[1, inf)",
            ));
        }
        if !(0.0..60.0).contains(&l.libration_deg) {
            return Err(ConfigError::out_of_range(
                "lagrange.librationDeg",
                l.libration_deg,
                "[0, 60)",
            ));
        }
        half_open_unit("lagrange.librationFraction", l.libration_fraction)?;
        positive_interval("lagrange.massRatio", &l.mass_ratio)?;
        if l.mass_ratio.max > 1.0 {
            return Err(ConfigError::out_of_range(
                "lagrange.massRatio",
                l.mass_ratio.max,
                "(0, 1]",
            ));
        }
        Ok(())
    }

    fn validate_rogues(&self) -> Result<()> {
        let r = &self.rogues;
        success_probability("rogues.geometricP", r.geometric_p)?;
        count_range("rogues.count", &r.count)?;
        positive_interval("rogues.radialBand", &r.radial_band)?;
        within("rogues.maxInclinationDeg", r.max_inclination_deg, 0.0, 90.0)?;
        interval("rogues.speed", &r.speed)?;
        non_negative("rogues.speed.min", r.speed.min)?;
        positive_interval("rogues.curvature", &r.curvature)?;
        probability("rogues.blackHoleFraction", r.black_hole_fraction)
    }

    fn validate_nebulae(&self) -> Result<()> {
        let n = &self.nebulae;
        success_probability("nebulae.geometricP", n.geometric_p)?;
        count_range("nebulae.count", &n.count)?;
        positive_interval("nebulae.radius", &n.radius)?;
        positive_interval("nebulae.placementRadius", &n.placement_radius)?;
        non_negative("nebulae.clearance", n.clearance)?;
        if n.max_attempts == 0 {
            return Err(ConfigError::out_of_range(
                "nebulae.maxAttempts",
                0.0,
                "[1, inf)",
            ));
        }
        interval_within("nebulae.density", &n.density, 0.0, 1.0)?;
        probability_vector("nebulae.kindWeights", &n.kind_weights, 4)?;
        within("nebulae.colorVariation", n.color_variation, 0.0, 255.0)
    }

    fn validate_grouping(&self) -> Result<()> {
        let g = &self.grouping;
        count_range("grouping.topLevelGroups", &g.top_level_groups)?;
        if g.top_level_groups.min == 0 {
            return Err(ConfigError::out_of_range(
                "grouping.topLevelGroups",
                0.0,
                "a minimum of at least 1",
            ));
        }
        probability("grouping.nestingProbability", g.nesting_probability)?;
        if g.max_depth == 0 {
            return Err(ConfigError::out_of_range(
                "grouping.maxDepth",
                0.0,
                "[1, inf)",
            ));
        }
        non_negative("grouping.placementSigma", g.placement_sigma)?;
        non_negative("grouping.nestedSigmaScale", g.nested_sigma_scale)?;
        non_negative("grouping.systemOffsetSigma", g.system_offset_sigma)
    }
}

// =============================================================================
// Field checks
// =============================================================================

fn finite(field: impl Into<String>, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, value, "finite values"))
    }
}

fn positive(field: impl Into<String>, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, value, "(0, inf)"))
    }
}

fn non_negative(field: impl Into<String>, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, value, "[0, inf)"))
    }
}

fn greater_than_one(field: impl Into<String>, value: f64) -> Result<()> {
    if value.is_finite() && value > 1.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, value, "(1, inf)"))
    }
}

fn within(field: impl Into<String>, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(
            field,
            value,
            format!("[{}, {}]", min, max),
        ))
    }
}

fn probability(field: impl Into<String>, value: f64) -> Result<()> {
    within(field, value, 0.0, 1.0)
}

fn half_open_unit(field: impl Into<String>, value: f64) -> Result<()> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, value, "[0, 1)"))
    }
}

/// Geometric success probabilities must be in `(0, 1]`.
fn success_probability(field: impl Into<String>, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, value, "(0, 1]"))
    }
}

fn probability_vector(field: &str, weights: &[f64], len: usize) -> Result<()> {
    if weights.len() != len {
        return Err(ConfigError::inconsistent(
            field,
            format!("expected {} entries, found {}", len, weights.len()),
        ));
    }
    for (i, &w) in weights.iter().enumerate() {
        probability(format!("{}[{}]", field, i), w)?;
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > NORMALIZATION_TOLERANCE {
        return Err(ConfigError::not_normalized(field, sum));
    }
    Ok(())
}

fn interval(field: &str, range: &Interval) -> Result<()> {
    finite(format!("{}.min", field), range.min)?;
    finite(format!("{}.max", field), range.max)?;
    if range.min > range.max {
        return Err(ConfigError::inverted(field, range.min, range.max));
    }
    Ok(())
}

fn positive_interval(field: &str, range: &Interval) -> Result<()> {
    interval(field, range)?;
    positive(format!("{}.min", field), range.min)
}

fn interval_within(field: &str, range: &Interval, min: f64, max: f64) -> Result<()> {
    interval(field, range)?;
    within(format!("{}.min", field), range.min, min, max)?;
    within(format!("{}.max", field), range.max, min, max)
}

fn count_range(field: &str, range: &CountRange) -> Result<()> {
    if range.min > range.max {
        return Err(ConfigError::inverted(
            field,
            range.min as f64,
            range.max as f64,
        ));
    }
    Ok(())
}
