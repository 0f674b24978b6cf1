//! Random value source for seed data.
//!
//! The generator only talks to the [`ValueSource`] trait. [`FakeValues`] is the
//! default implementation, backed by the `fake` crate and a seedable RNG so
//! that a given seed always reproduces the same script.

use anyhow::bail;
use fake::faker::internet::en::{Password, SafeEmail, Username};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Letters used for titles and card bodies
const ALPHA: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Supplies randomized field values to the generator.
///
/// Every method is fallible; an error aborts the whole generation pass.
pub trait ValueSource {
    fn username(&mut self) -> anyhow::Result<String>;
    fn first_name(&mut self) -> anyhow::Result<String>;
    fn last_name(&mut self) -> anyhow::Result<String>;
    fn email(&mut self) -> anyhow::Result<String>;

    /// Password of exactly `length` characters
    fn password(&mut self, length: usize) -> anyhow::Result<String>;

    /// Alphabetic string of exactly `length` characters
    fn alpha(&mut self, length: usize) -> anyhow::Result<String>;

    /// Color as `#rrggbb`
    fn rgb_color(&mut self) -> anyhow::Result<String>;

    /// Integer in `min..=max`
    fn int_range(&mut self, min: i64, max: i64) -> anyhow::Result<i64>;
}

/// Fake data source with deterministic RNG
pub struct FakeValues<R: Rng> {
    rng: R,
}

impl FakeValues<StdRng> {
    /// Create a source seeded for reproducible output
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FakeValues<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ValueSource for FakeValues<R> {
    fn username(&mut self) -> anyhow::Result<String> {
        Ok(Username().fake_with_rng(&mut self.rng))
    }

    fn first_name(&mut self) -> anyhow::Result<String> {
        Ok(FirstName().fake_with_rng(&mut self.rng))
    }

    fn last_name(&mut self) -> anyhow::Result<String> {
        Ok(LastName().fake_with_rng(&mut self.rng))
    }

    fn email(&mut self) -> anyhow::Result<String> {
        Ok(SafeEmail().fake_with_rng(&mut self.rng))
    }

    fn password(&mut self, length: usize) -> anyhow::Result<String> {
        if length == 0 {
            bail!("password length must be greater than 0");
        }
        Ok(Password(length..length + 1).fake_with_rng(&mut self.rng))
    }

    fn alpha(&mut self, length: usize) -> anyhow::Result<String> {
        if length == 0 {
            bail!("text length must be greater than 0");
        }
        Ok((0..length)
            .map(|_| ALPHA[self.rng.random_range(0..ALPHA.len())] as char)
            .collect())
    }

    fn rgb_color(&mut self) -> anyhow::Result<String> {
        let (r, g, b): (u8, u8, u8) = (self.rng.random(), self.rng.random(), self.rng.random());
        Ok(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    fn int_range(&mut self, min: i64, max: i64) -> anyhow::Result<i64> {
        if min > max {
            bail!("empty integer range: {}..={}", min, max);
        }
        Ok(self.rng.random_range(min..=max))
    }
}
