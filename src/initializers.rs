//! The module that contains all the available weight initializers for trilayer networks.
//!
//! Every initializer samples from a random number generator given by the caller, so seeding that
//! generator (e.g. with `StdRng::seed_from_u64`) makes the initial weights reproducible.

use std::ops::Range;

use rand::Rng;
use rand_distr::{Distribution, StandardNormal, Uniform};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
/// The errors that can happen when creating an initializer with bad parameters.
pub enum InitializerError {
    /// Happens when a range is empty or has non finite bounds.
    #[error("cannot sample uniformly from the range {start}..{end}")]
    InvalidRange {
        /// The inclusive start of the range
        start: f32,
        /// The exclusive end of the range
        end: f32,
    },
    /// Happens when a standard deviation is negative or not finite, or the mean is not finite.
    #[error("cannot sample from a normal distribution with mean {mean} and standard deviation {standard_deviation}")]
    InvalidNormalDistribution {
        /// The requested mean
        mean: f32,
        /// The requested standard deviation
        standard_deviation: f32,
    },
}

/// A trait implemented by every trilayer weight initializer.
///
/// **fan_in** and **fan_out** are the amount of inputs and outputs of the layer the weights are
/// being generated for, bias not included.
pub trait InitializerTrait {
    /// Generates just one number based on the Initializer's implementation
    fn initialize_0d<R: Rng + ?Sized>(&self, fan_in: usize, fan_out: usize, rng: &mut R) -> f32;

    /// Generates a Vec of numbers initialized based on the Initializer's implementation
    fn initialize_1d<R: Rng + ?Sized>(
        &self,
        count: usize,
        fan_in: usize,
        fan_out: usize,
        rng: &mut R,
    ) -> Vec<f32> {
        (0..count)
            .map(|_| self.initialize_0d(fan_in, fan_out, rng))
            .collect()
    }

    /// Generates a Matrix of numbers initialized based on the Initializer's implementation
    fn initialize_2d<R: Rng + ?Sized>(
        &self,
        shape: (usize, usize),
        fan_in: usize,
        fan_out: usize,
        rng: &mut R,
    ) -> Vec<Vec<f32>> {
        (0..shape.0)
            .map(|_| self.initialize_1d(shape.1, fan_in, fan_out, rng))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A Initializer that pretty much just initializes all values with a constant value
pub struct ConstantInitializer {
    /// The constant that all the weights will be
    pub constant: f32,
}

impl InitializerTrait for ConstantInitializer {
    fn initialize_0d<R: Rng + ?Sized>(&self, _: usize, _: usize, _: &mut R) -> f32 {
        self.constant
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A Initializer that generates random numbers in a uniform distribution over a range
pub struct UniformRandomInitializer {
    interval: Range<f32>,
}

impl UniformRandomInitializer {
    /// The interval the numbers are sampled from.
    pub fn interval(&self) -> Range<f32> {
        self.interval.clone()
    }
}

impl UniformRandomInitializer {
    fn distribution(&self) -> Uniform<f32> {
        Uniform::new(self.interval.start, self.interval.end)
    }
}

impl InitializerTrait for UniformRandomInitializer {
    fn initialize_0d<R: Rng + ?Sized>(&self, _: usize, _: usize, rng: &mut R) -> f32 {
        self.distribution().sample(rng)
    }

    fn initialize_1d<R: Rng + ?Sized>(
        &self,
        count: usize,
        _: usize,
        _: usize,
        rng: &mut R,
    ) -> Vec<f32> {
        sample_vector(&self.distribution(), count, rng)
    }

    fn initialize_2d<R: Rng + ?Sized>(
        &self,
        shape: (usize, usize),
        _: usize,
        _: usize,
        rng: &mut R,
    ) -> Vec<Vec<f32>> {
        sample_matrix(&self.distribution(), shape, rng)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A Initializer that generates random numbers in a normal distribution based on a **mean** and a
/// **standard deviation**
pub struct NormalRandomInitializer {
    mean: f32,
    standard_deviation: f32,
}

impl NormalRandomInitializer {
    /// The mean of the Normal distribution
    pub fn mean(&self) -> f32 {
        self.mean
    }

    /// The standard deviation of the Normal distribution
    pub fn standard_deviation(&self) -> f32 {
        self.standard_deviation
    }
}

fn sample_vector<D: Distribution<f32>, R: Rng + ?Sized>(
    distribution: &D,
    count: usize,
    rng: &mut R,
) -> Vec<f32> {
    (0..count).map(|_| distribution.sample(rng)).collect()
}

fn sample_matrix<D: Distribution<f32>, R: Rng + ?Sized>(
    distribution: &D,
    shape: (usize, usize),
    rng: &mut R,
) -> Vec<Vec<f32>> {
    (0..shape.0)
        .map(|_| sample_vector(distribution, shape.1, rng))
        .collect()
}

fn sample_normal<R: Rng + ?Sized>(mean: f32, standard_deviation: f32, rng: &mut R) -> f32 {
    let z: f32 = StandardNormal.sample(rng);
    mean + standard_deviation * z
}

impl InitializerTrait for NormalRandomInitializer {
    fn initialize_0d<R: Rng + ?Sized>(&self, _: usize, _: usize, rng: &mut R) -> f32 {
        sample_normal(self.mean, self.standard_deviation, rng)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A Initializer that generates random numbers in a uniform distribution based on a range
/// calculated using the inputs and outputs of the layer the initializer is being used on.
/// It is defined in a range of [-limit, limit] where
/// limit = sqrt(6.0 / (inputs_amount + outputs_amount))
pub struct GlorotUniformInitializer;

impl GlorotUniformInitializer {
    fn distribution(fan_in: usize, fan_out: usize) -> Uniform<f32> {
        let limit = (6.0 / (fan_in + fan_out) as f32).sqrt();
        Uniform::new_inclusive(-limit, limit)
    }
}

impl InitializerTrait for GlorotUniformInitializer {
    fn initialize_0d<R: Rng + ?Sized>(&self, fan_in: usize, fan_out: usize, rng: &mut R) -> f32 {
        Self::distribution(fan_in, fan_out).sample(rng)
    }

    fn initialize_1d<R: Rng + ?Sized>(
        &self,
        count: usize,
        fan_in: usize,
        fan_out: usize,
        rng: &mut R,
    ) -> Vec<f32> {
        sample_vector(&Self::distribution(fan_in, fan_out), count, rng)
    }

    fn initialize_2d<R: Rng + ?Sized>(
        &self,
        shape: (usize, usize),
        fan_in: usize,
        fan_out: usize,
        rng: &mut R,
    ) -> Vec<Vec<f32>> {
        sample_matrix(&Self::distribution(fan_in, fan_out), shape, rng)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A Initializer that generates random numbers in a normal distribution with a mean of **0.0**
/// and a standard deviation of **sqrt(2.0 / (inputs_amount + outputs_amount))**
pub struct GlorotNormalInitializer;

impl InitializerTrait for GlorotNormalInitializer {
    fn initialize_0d<R: Rng + ?Sized>(&self, fan_in: usize, fan_out: usize, rng: &mut R) -> f32 {
        let standard_deviation = (2.0 / (fan_in + fan_out) as f32).sqrt();
        sample_normal(0.0, standard_deviation, rng)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The enum that contains all of the possible Initializers
pub enum Initializer {
    /// The Constant initializer
    Constant(ConstantInitializer),
    /// The Uniform Random initializer
    UniformRandom(UniformRandomInitializer),
    /// The Normal Random initializer
    NormalRandom(NormalRandomInitializer),
    /// The Glorot Uniform initializer
    GlorotUniform(GlorotUniformInitializer),
    /// The Glorot Normal initializer
    GlorotNormal(GlorotNormalInitializer),
}

impl Initializer {
    /// Initializes every weight with **constant**.
    pub fn constant(constant: f32) -> Self {
        Initializer::Constant(ConstantInitializer { constant })
    }

    /// Samples every weight uniformly from **interval**, which must be non empty and finite.
    pub fn uniform(interval: Range<f32>) -> Result<Self, InitializerError> {
        if !interval.start.is_finite() || !interval.end.is_finite() || interval.start >= interval.end
        {
            return Err(InitializerError::InvalidRange {
                start: interval.start,
                end: interval.end,
            });
        }

        Ok(Initializer::UniformRandom(UniformRandomInitializer { interval }))
    }

    /// Samples every weight from a normal distribution, the standard deviation must not be
    /// negative.
    pub fn normal(mean: f32, standard_deviation: f32) -> Result<Self, InitializerError> {
        if !mean.is_finite() || !standard_deviation.is_finite() || standard_deviation < 0.0 {
            return Err(InitializerError::InvalidNormalDistribution {
                mean,
                standard_deviation,
            });
        }

        Ok(Initializer::NormalRandom(NormalRandomInitializer {
            mean,
            standard_deviation,
        }))
    }

    /// The Glorot (Xavier) uniform initializer.
    pub fn glorot_uniform() -> Self {
        Initializer::GlorotUniform(GlorotUniformInitializer)
    }

    /// The Glorot (Xavier) normal initializer.
    pub fn glorot_normal() -> Self {
        Initializer::GlorotNormal(GlorotNormalInitializer)
    }
}

impl InitializerTrait for Initializer {
    fn initialize_0d<R: Rng + ?Sized>(&self, fan_in: usize, fan_out: usize, rng: &mut R) -> f32 {
        match self {
            Initializer::Constant(i) => i.initialize_0d(fan_in, fan_out, rng),
            Initializer::UniformRandom(i) => i.initialize_0d(fan_in, fan_out, rng),
            Initializer::NormalRandom(i) => i.initialize_0d(fan_in, fan_out, rng),
            Initializer::GlorotUniform(i) => i.initialize_0d(fan_in, fan_out, rng),
            Initializer::GlorotNormal(i) => i.initialize_0d(fan_in, fan_out, rng),
        }
    }

    fn initialize_1d<R: Rng + ?Sized>(
        &self,
        count: usize,
        fan_in: usize,
        fan_out: usize,
        rng: &mut R,
    ) -> Vec<f32> {
        match self {
            Initializer::Constant(i) => i.initialize_1d(count, fan_in, fan_out, rng),
            Initializer::UniformRandom(i) => i.initialize_1d(count, fan_in, fan_out, rng),
            Initializer::NormalRandom(i) => i.initialize_1d(count, fan_in, fan_out, rng),
            Initializer::GlorotUniform(i) => i.initialize_1d(count, fan_in, fan_out, rng),
            Initializer::GlorotNormal(i) => i.initialize_1d(count, fan_in, fan_out, rng),
        }
    }

    fn initialize_2d<R: Rng + ?Sized>(
        &self,
        shape: (usize, usize),
        fan_in: usize,
        fan_out: usize,
        rng: &mut R,
    ) -> Vec<Vec<f32>> {
        match self {
            Initializer::Constant(i) => i.initialize_2d(shape, fan_in, fan_out, rng),
            Initializer::UniformRandom(i) => i.initialize_2d(shape, fan_in, fan_out, rng),
            Initializer::NormalRandom(i) => i.initialize_2d(shape, fan_in, fan_out, rng),
            Initializer::GlorotUniform(i) => i.initialize_2d(shape, fan_in, fan_out, rng),
            Initializer::GlorotNormal(i) => i.initialize_2d(shape, fan_in, fan_out, rng),
        }
    }
}

impl Default for Initializer {
    fn default() -> Self {
        Self::glorot_uniform()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{Initializer, InitializerError, InitializerTrait};

    #[test]
    fn should_reject_bad_parameters() {
        assert_eq!(
            Initializer::uniform(1.0..1.0),
            Err(InitializerError::InvalidRange { start: 1.0, end: 1.0 })
        );
        assert!(Initializer::uniform(0.0..f32::INFINITY).is_err());
        assert!(Initializer::normal(0.0, -1.0).is_err());
        assert!(Initializer::normal(f32::NAN, 1.0).is_err());
        assert!(Initializer::normal(0.0, 0.0).is_ok());
    }

    #[test]
    fn should_stay_inside_the_uniform_range() {
        let initializer = Initializer::uniform(-0.25..0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let weights = initializer.initialize_2d((20, 7), 7, 20, &mut rng);

        assert_eq!(weights.len(), 20);
        assert!(weights.iter().all(|row| row.len() == 7));
        assert!(weights
            .iter()
            .flatten()
            .all(|weight| (-0.25..0.5).contains(weight)));
    }

    #[test]
    fn should_respect_the_glorot_limit() {
        let mut rng = StdRng::seed_from_u64(11);
        let limit = (6.0_f32 / (4 + 2) as f32).sqrt();

        let weights = Initializer::glorot_uniform().initialize_1d(500, 4, 2, &mut rng);

        assert!(weights.iter().all(|weight| weight.abs() <= limit));
    }

    #[test]
    fn should_sample_the_same_matrix_through_the_enum_and_the_initializer() {
        let initializer = Initializer::uniform(-1.0..1.0).unwrap();
        let direct = match &initializer {
            Initializer::UniformRandom(uniform) => {
                uniform.initialize_2d((4, 3), 2, 4, &mut StdRng::seed_from_u64(5))
            }
            _ => unreachable!(),
        };

        let dispatched = initializer.initialize_2d((4, 3), 2, 4, &mut StdRng::seed_from_u64(5));
        let flat = initializer.initialize_1d(12, 2, 4, &mut StdRng::seed_from_u64(5));

        assert_eq!(dispatched, direct);
        assert_eq!(dispatched.concat(), flat);
    }

    #[test]
    fn should_be_reproducible_with_the_same_seed() {
        let initializer = Initializer::glorot_normal();

        let first = initializer.initialize_1d(16, 3, 3, &mut StdRng::seed_from_u64(42));
        let second = initializer.initialize_1d(16, 3, 3, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn should_generate_constants() {
        let mut rng = StdRng::seed_from_u64(0);

        let weights = Initializer::constant(0.0).initialize_2d((2, 3), 3, 2, &mut rng);

        assert_eq!(weights, vec![vec![0.0; 3]; 2]);
    }
}
