//! Seeded generation of paired heap fixtures.
//!
//! A fixture is an input script of [`Command`]s plus the output lines a
//! correct heap produces for it. [`FixtureGenerator`] samples operations by
//! weight, never picks one the current heap state would reject, feeds every
//! command through a [`HeapSimulator`] and records the rendered line. The
//! same [`FixtureConfig`] always yields the same fixture.
//!
//! ## Step Flow
//!
//! ```text
//!   candidates = all OpKinds
//!   heap empty?  → drop Extract, Find, Replace
//!   heap full?   → drop Insert
//!   kind = weighted pick over candidates
//!
//!   Insert   → "1 x"
//!   Extract  → "2", "8"
//!   Find     → "3"
//!   Print    → "8"
//!   Validate → "9"
//!   Heapify  → "10 k a1..ak", "8"   (k ≤ min(capacity, max_heapify_len);
//!                                     a bare "8" when capacity is 0)
//!   HeapSort → "11"
//!   Replace  → "12 x", "8"
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use heapkit::fixture::{FixtureConfig, FixtureGenerator};
//!
//! let config = FixtureConfig::new(10, 25, 7);
//! let fixture = FixtureGenerator::try_new(config.clone()).unwrap().generate().unwrap();
//! let again = FixtureGenerator::try_new(config).unwrap().generate().unwrap();
//!
//! assert_eq!(fixture, again);
//! assert_eq!(fixture.input.len(), fixture.output.len());
//! ```

use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slog::{Logger, debug, info, o};

use crate::command::{Command, render_script};
use crate::error::ConfigError;
use crate::logging::discard_logger;
use crate::simulator::HeapSimulator;

/// Kinds of generator steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Insert,
    Extract,
    Find,
    Print,
    Validate,
    Heapify,
    HeapSort,
    Replace,
}

impl OpKind {
    pub const ALL: [OpKind; 8] = [
        OpKind::Insert,
        OpKind::Extract,
        OpKind::Find,
        OpKind::Print,
        OpKind::Validate,
        OpKind::Heapify,
        OpKind::HeapSort,
        OpKind::Replace,
    ];

    /// Returns `true` for kinds that need a non-empty heap.
    pub fn needs_elements(self) -> bool {
        matches!(self, OpKind::Extract | OpKind::Find | OpKind::Replace)
    }

    pub fn name(self) -> &'static str {
        match self {
            OpKind::Insert => "insert",
            OpKind::Extract => "extract",
            OpKind::Find => "find",
            OpKind::Print => "print",
            OpKind::Validate => "validate",
            OpKind::Heapify => "heapify",
            OpKind::HeapSort => "heapsort",
            OpKind::Replace => "replace",
        }
    }
}

/// Relative sampling weights per [`OpKind`].
///
/// Weights need not sum to one; they are normalized over the kinds that are
/// valid at each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpWeights {
    pub insert: f64,
    pub extract: f64,
    pub find: f64,
    pub print: f64,
    pub validate: f64,
    pub heapify: f64,
    pub heap_sort: f64,
    pub replace: f64,
}

impl OpWeights {
    pub fn get(&self, kind: OpKind) -> f64 {
        match kind {
            OpKind::Insert => self.insert,
            OpKind::Extract => self.extract,
            OpKind::Find => self.find,
            OpKind::Print => self.print,
            OpKind::Validate => self.validate,
            OpKind::Heapify => self.heapify,
            OpKind::HeapSort => self.heap_sort,
            OpKind::Replace => self.replace,
        }
    }
}

impl Default for OpWeights {
    fn default() -> Self {
        Self {
            insert: 0.25,
            extract: 0.10,
            find: 0.08,
            print: 0.12,
            validate: 0.05,
            heapify: 0.10,
            heap_sort: 0.10,
            replace: 0.20,
        }
    }
}

/// Parameters of one generated fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureConfig {
    /// Heap capacity (`n`).
    pub capacity: usize,
    /// Number of sampled steps (`t`). Some steps emit two commands.
    pub steps: usize,
    pub seed: u64,
    pub weights: OpWeights,
    /// Inclusive value range for `1 x`.
    pub insert_range: (i64, i64),
    /// Inclusive value range for heapify array elements.
    pub heapify_range: (i64, i64),
    /// Inclusive value range for `12 x`.
    pub replace_range: (i64, i64),
    /// Upper bound on generated heapify array lengths, below `capacity`.
    pub max_heapify_len: usize,
}

impl FixtureConfig {
    pub const DEFAULT_CAPACITY: usize = 50;
    pub const DEFAULT_STEPS: usize = 80;
    pub const DEFAULT_SEED: u64 = 42;
    pub const DEFAULT_MAX_HEAPIFY_LEN: usize = 1 << 16;

    /// Creates a config with default weights and value ranges.
    pub fn new(capacity: usize, steps: usize, seed: u64) -> Self {
        Self {
            capacity,
            steps,
            seed,
            weights: OpWeights::default(),
            insert_range: (-100, 200),
            heapify_range: (-200, 300),
            replace_range: (-500, 500),
            max_heapify_len: Self::DEFAULT_MAX_HEAPIFY_LEN,
        }
    }

    /// Checks weights and ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a weight is negative or not finite, if no
    /// kind that is valid on an empty heap has a positive weight, or if a
    /// value range is empty, or if `max_heapify_len` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in OpKind::ALL {
            let weight = self.weights.get(kind);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::new(format!(
                    "weight for {} must be finite and non-negative, got {}",
                    kind.name(),
                    weight
                )));
            }
        }
        // An empty heap that is also full (capacity 0) only admits these.
        let always_valid = [
            OpKind::Print,
            OpKind::Validate,
            OpKind::Heapify,
            OpKind::HeapSort,
        ];
        if always_valid.iter().all(|&kind| self.weights.get(kind) == 0.0) {
            return Err(ConfigError::new(
                "at least one of print, validate, heapify, heapsort must have a positive weight",
            ));
        }
        for (name, (lo, hi)) in [
            ("insert_range", self.insert_range),
            ("heapify_range", self.heapify_range),
            ("replace_range", self.replace_range),
        ] {
            if lo > hi {
                return Err(ConfigError::new(format!(
                    "{} is empty: {} > {}",
                    name, lo, hi
                )));
            }
        }
        if self.max_heapify_len == 0 {
            return Err(ConfigError::new("max_heapify_len must be at least 1"));
        }
        Ok(())
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_CAPACITY,
            Self::DEFAULT_STEPS,
            Self::DEFAULT_SEED,
        )
    }
}

/// A generated input script and its expected output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixture {
    pub input: Vec<Command>,
    pub output: Vec<String>,
}

impl Fixture {
    /// Input script as newline-terminated text.
    pub fn input_text(&self) -> String {
        render_script(&self.input)
    }

    /// Expected output as newline-terminated text.
    pub fn output_text(&self) -> String {
        let mut out = String::new();
        for line in &self.output {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Deterministic fixture generator.
#[derive(Debug)]
pub struct FixtureGenerator {
    config: FixtureConfig,
    log: Logger,
}

impl FixtureGenerator {
    /// Creates a generator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if [`FixtureConfig::validate`] fails.
    pub fn try_new(config: FixtureConfig) -> Result<Self, ConfigError> {
        Self::try_with_logger(config, &discard_logger())
    }

    /// Like [`try_new`](Self::try_new), logging to a child of `log`.
    pub fn try_with_logger(config: FixtureConfig, log: &Logger) -> Result<Self, ConfigError> {
        config.validate()?;
        let log = log.new(o!(
            "component" => "fixture_generator",
            "seed" => config.seed,
        ));
        Ok(Self { config, log })
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Runs all steps and returns the fixture.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the weights of every kind valid at some
    /// step are zero.
    pub fn generate(&self) -> Result<Fixture, ConfigError> {
        let config = &self.config;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut sim = HeapSimulator::with_logger(config.capacity, &self.log);
        let mut fixture = Fixture::default();

        info!(self.log, "generating fixture";
            "capacity" => config.capacity,
            "steps" => config.steps,
        );

        for step in 0..config.steps {
            let kind = self.pick_kind(&mut rng, &sim)?;
            debug!(self.log, "step"; "step" => step, "op" => kind.name());

            for command in self.commands_for(kind, &mut rng) {
                let line = sim.apply(&command);
                fixture.input.push(command);
                fixture.output.push(line);
            }
        }

        info!(self.log, "fixture generated";
            "input_lines" => fixture.input.len(),
            "output_lines" => fixture.output.len(),
        );
        Ok(fixture)
    }

    fn pick_kind(&self, rng: &mut StdRng, sim: &HeapSimulator) -> Result<OpKind, ConfigError> {
        let heap = sim.heap();
        let candidates: Vec<OpKind> = OpKind::ALL
            .into_iter()
            .filter(|kind| !(heap.is_empty() && kind.needs_elements()))
            .filter(|kind| !(heap.is_full() && *kind == OpKind::Insert))
            .collect();

        let weights = candidates.iter().map(|&kind| self.config.weights.get(kind));
        let dist = WeightedIndex::new(weights).map_err(|err| {
            ConfigError::new(format!("no operation can be sampled: {}", err))
        })?;
        Ok(candidates[dist.sample(rng)])
    }

    fn commands_for(&self, kind: OpKind, rng: &mut StdRng) -> Vec<Command> {
        let config = &self.config;
        match kind {
            OpKind::Insert => vec![Command::Insert(sample(rng, config.insert_range))],
            OpKind::Extract => vec![Command::ExtractMin, Command::Print],
            OpKind::Find => vec![Command::FindMin],
            OpKind::Print => vec![Command::Print],
            OpKind::Validate => vec![Command::Validate],
            OpKind::Heapify => {
                if config.capacity == 0 {
                    return vec![Command::Print];
                }
                let max_len = config.capacity.min(config.max_heapify_len);
                let len = rng.random_range(1..=max_len);
                let values = (0..len)
                    .map(|_| sample(rng, config.heapify_range))
                    .collect();
                vec![Command::Heapify(values), Command::Print]
            },
            OpKind::HeapSort => vec![Command::HeapSort],
            OpKind::Replace => vec![
                Command::ReplaceMin(sample(rng, config.replace_range)),
                Command::Print,
            ],
        }
    }
}

fn sample(rng: &mut StdRng, (lo, hi): (i64, i64)) -> i64 {
    rng.random_range(lo..=hi)
}
