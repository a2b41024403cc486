use litlake_model::{AreaKind, DatasetId};

use crate::job::DatasetJob;
use crate::jobs::{
    BusinessMention, OptimizedDrugs, OptimizedJournal, OptimizedPublication, RefinedClinicalTrial,
    RefinedDrugs, RefinedJournal, RefinedPubmed,
};

/// Ordered collection of the pipeline's jobs.
///
/// Registration order is execution order, so a job must be registered
/// after every job whose output it reads.
pub struct JobRegistry {
    jobs: Vec<Box<dyn DatasetJob>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self { jobs: Vec::new() }
    }

    /// The eight standard jobs in dependency order.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RefinedClinicalTrial));
        registry.register(Box::new(RefinedDrugs));
        registry.register(Box::new(RefinedPubmed));
        registry.register(Box::new(RefinedJournal));
        registry.register(Box::new(OptimizedDrugs));
        registry.register(Box::new(OptimizedJournal));
        registry.register(Box::new(OptimizedPublication));
        registry.register(Box::new(BusinessMention));
        registry
    }

    /// Panics when a job for the same target is already registered;
    /// two producers for one dataset is a programming error.
    pub fn register(&mut self, job: Box<dyn DatasetJob>) {
        let target = job.target();
        assert!(
            self.get(target).is_none(),
            "duplicate job registered for {target}"
        );
        self.jobs.push(job);
    }

    pub fn get(&self, target: DatasetId) -> Option<&dyn DatasetJob> {
        self.jobs
            .iter()
            .find(|job| job.target() == target)
            .map(|job| job.as_ref())
    }

    pub fn jobs(&self) -> impl Iterator<Item = &dyn DatasetJob> {
        self.jobs.iter().map(|job| job.as_ref())
    }

    pub fn jobs_for_area(&self, area: AreaKind) -> impl Iterator<Item = &dyn DatasetJob> {
        self.jobs().filter(move |job| job.target().area == area)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}
