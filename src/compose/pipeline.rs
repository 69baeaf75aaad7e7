//! Runtime-built pipelines.
//!
//! [`pipe!`](crate::pipe) fixes its stages at compile time. A [`Pipeline`]
//! collects boxed stages at runtime instead, for chains whose length is
//! only known once the program runs (configuration-driven transforms, for
//! instance). Running a pipeline is a [`fold`] over its stages.

use std::fmt;

use crate::collection::{fold, try_fold};
use crate::error::TraversalError;

type Stage<'a, T> = Box<dyn Fn(T) -> T + 'a>;
type TryStage<'a, T, E> = Box<dyn Fn(T) -> Result<T, E> + 'a>;

/// An ordered list of `T -> T` stages applied left to right.
///
/// # Examples
///
/// ```rust
/// use lambdash::compose::Pipeline;
///
/// let pipeline = Pipeline::new().then(|x: i32| x + 1).then(|x: i32| x * 2);
/// assert_eq!(pipeline.run(3), 8);
///
/// let empty: Pipeline<'_, i32> = Pipeline::new();
/// assert_eq!(empty.run(3), 3);
/// ```
pub struct Pipeline<'a, T> {
    stages: Vec<Stage<'a, T>>,
}

impl<'a, T> Pipeline<'a, T> {
    /// Creates a pipeline with no stages, which returns its input.
    #[must_use]
    pub const fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends `stage` to the end of the pipeline.
    #[must_use]
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'a,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Passes `input` through every stage in order.
    pub fn run(&self, input: T) -> T {
        tracing::trace!(stages = self.stages.len(), "running pipeline");
        fold(&self.stages, input, |value, stage| stage(value))
    }

    /// Converts the pipeline into a plain function.
    pub fn into_fn(self) -> impl Fn(T) -> T + 'a
    where
        T: 'a,
    {
        move |input| self.run(input)
    }
}

impl<T> Default for Pipeline<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> FromIterator<Stage<'a, T>> for Pipeline<'a, T> {
    fn from_iter<I: IntoIterator<Item = Stage<'a, T>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl<T> fmt::Debug for Pipeline<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// An ordered list of fallible `T -> Result<T, E>` stages.
///
/// Running stops at the first failing stage. The returned
/// [`TraversalError`] carries the stage index as both key and position.
///
/// # Examples
///
/// ```rust
/// use lambdash::compose::TryPipeline;
///
/// let pipeline = TryPipeline::new()
///     .then(|x: u8| x.checked_mul(10).ok_or("overflow"))
///     .then(|x: u8| x.checked_add(100).ok_or("overflow"));
///
/// assert_eq!(pipeline.run(5), Ok(150));
///
/// let error = pipeline.run(20).unwrap_err();
/// assert_eq!(error.position(), 1);
/// assert_eq!(*error.source_error(), "overflow");
/// ```
pub struct TryPipeline<'a, T, E> {
    stages: Vec<TryStage<'a, T, E>>,
}

impl<'a, T, E> TryPipeline<'a, T, E> {
    /// Creates a pipeline with no stages, which returns `Ok(input)`.
    #[must_use]
    pub const fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends `stage` to the end of the pipeline.
    #[must_use]
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + 'a,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Passes `input` through every stage in order.
    ///
    /// # Errors
    ///
    /// Returns the first stage error, wrapped with the index of the stage.
    pub fn run(&self, input: T) -> Result<T, TraversalError<E>> {
        tracing::trace!(stages = self.stages.len(), "running fallible pipeline");
        try_fold(&self.stages, input, |value, stage| stage(value))
    }
}

impl<T, E> Default for TryPipeline<'_, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for TryPipeline<'_, T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryPipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::Key;

    #[test]
    fn test_pipeline_runs_stages_in_order() {
        let pipeline = Pipeline::new()
            .then(|text: String| text + "a")
            .then(|text: String| text + "b");
        assert_eq!(pipeline.run(String::new()), "ab");
        assert_eq!(pipeline.len(), 2);
    }

    #[test]
    fn test_pipeline_from_iterator() {
        let stages: Vec<Box<dyn Fn(i32) -> i32>> =
            vec![Box::new(|x: i32| x + 1), Box::new(|x: i32| x * 3)];
        let pipeline: Pipeline<'_, i32> = stages.into_iter().collect();
        assert_eq!(pipeline.run(1), 6);
    }

    #[test]
    fn test_pipeline_into_fn_matches_pipe() {
        let as_fn = Pipeline::new().then(|x: i32| x - 1).then(|x: i32| x * x).into_fn();
        let piped = crate::pipe!(|x: i32| x - 1, |x: i32| x * x);
        assert_eq!(as_fn(4), piped(4));
    }

    #[test]
    fn test_pipeline_borrows_environment() {
        let offset = 7;
        let pipeline = Pipeline::new().then(|x: i32| x + offset);
        assert_eq!(pipeline.run(1), 8);
    }

    #[test]
    fn test_try_pipeline_error_names_failing_stage() {
        let pipeline = TryPipeline::new()
            .then(|x: i32| Ok(x + 1))
            .then(|x: i32| Ok(x + 1))
            .then(|_x: i32| Err("third"));
        let error = pipeline.run(0).unwrap_err();
        assert_eq!(error.key(), &Key::Index(2));
        assert_eq!(error.into_source(), "third");
    }

    #[test]
    fn test_try_pipeline_empty_is_ok() {
        let pipeline: TryPipeline<'_, i32, String> = TryPipeline::default();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.run(9), Ok(9));
    }
}
