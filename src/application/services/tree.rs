//! Tree service
//!
//! Builds trees from key lists, runs the random-sample demo and the
//! large-scale insert scenario.

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::application::keys::{key_rng, random_keys};
use crate::application::ApplicationResult;
use crate::config::{SampleSettings, Settings};
use crate::domain::AvlTree;

/// Output of a demo run.
#[derive(Debug, Clone)]
pub struct DemoOutput {
    /// Keys in insertion order
    pub input: Vec<i64>,
    pub tree: AvlTree<i64>,
}

/// Outcome of a stress run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressReport {
    /// Keys requested
    pub requested: usize,
    /// Nodes in the finished tree
    pub nodes: usize,
    pub height: i32,
    pub balanced: bool,
    pub elapsed: Duration,
}

/// Service for building and exercising AVL trees.
pub struct TreeService {
    settings: Settings,
}

impl TreeService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Insert `keys` in order and audit the result.
    #[instrument(level = "debug", skip(self, keys), fields(count = keys.len()))]
    pub fn build(&self, keys: &[i64]) -> ApplicationResult<AvlTree<i64>> {
        let tree: AvlTree<i64> = keys.iter().copied().collect();
        tree.validate()?;
        debug!(nodes = tree.len(), height = tree.get_height(), "tree built");
        Ok(tree)
    }

    /// Random sample of keys inserted into a fresh tree.
    ///
    /// `count` and `seed` override the configured demo settings.
    pub fn demo(&self, count: Option<usize>, seed: Option<u64>) -> ApplicationResult<DemoOutput> {
        let input = self.sample(&self.settings.demo, count, seed)?;
        info!("demo input: {:?}", input);
        let tree = self.build(&input)?;
        Ok(DemoOutput { input, tree })
    }

    /// Insert a large random sample and check the tree is still balanced.
    #[instrument(level = "debug", skip(self))]
    pub fn stress(&self, count: Option<usize>, seed: Option<u64>) -> ApplicationResult<StressReport> {
        let keys = self.sample(&self.settings.stress, count, seed)?;

        let started = Instant::now();
        let mut tree = AvlTree::new();
        tree.extend(keys.iter().copied());
        let elapsed = started.elapsed();

        let balanced = tree.check_balanced();
        let report = StressReport {
            requested: keys.len(),
            nodes: tree.len(),
            height: tree.get_height(),
            balanced,
            elapsed,
        };
        info!(
            nodes = report.nodes,
            height = report.height,
            balanced = report.balanced,
            "stress run finished in {:?}",
            report.elapsed
        );
        Ok(report)
    }

    fn sample(
        &self,
        defaults: &SampleSettings,
        count: Option<usize>,
        seed: Option<u64>,
    ) -> ApplicationResult<Vec<i64>> {
        let mut rng = key_rng(seed.or(self.settings.seed));
        random_keys(
            &mut rng,
            count.unwrap_or(defaults.count),
            defaults.key_min..defaults.key_max,
        )
    }
}
