use ::rand::CryptoRng;
use ::rand::RngCore;
use ::rand::rngs::OsRng;
use ::std::fmt::Debug;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

/// Number of random bytes behind each generated boundary.
/// Rendered as hex this gives a 60 character token.
const BOUNDARY_ENTROPY_LEN: usize = 30;

///
/// Produces random boundaries for a [`Composer`](crate::Composer).
///
/// By default this draws from the operating system's CSPRNG.
/// A seeded generator can be supplied for reproducible output:
///
/// ```rust
/// use ::multipart_composer::BoundaryGenerator;
/// use ::rand::SeedableRng;
/// use ::rand::rngs::StdRng;
///
/// let mut generator = BoundaryGenerator::from_rng(StdRng::seed_from_u64(7));
/// let boundary = generator.generate();
///
/// assert_eq!(boundary.len(), 60);
/// ```
///
pub struct BoundaryGenerator {
    rng: Box<dyn RngCore + Send>,
}

impl BoundaryGenerator {
    pub fn new() -> Self {
        Self::from_rng(OsRng)
    }

    pub fn from_rng<R>(rng: R) -> Self
    where
        R: RngCore + CryptoRng + Send + 'static,
    {
        Self { rng: Box::new(rng) }
    }

    /// Returns a fresh lowercase hexadecimal boundary.
    pub fn generate(&mut self) -> String {
        let mut entropy = [0u8; BOUNDARY_ENTROPY_LEN];
        self.rng.fill_bytes(&mut entropy);

        ::hex::encode(entropy)
    }
}

impl Default for BoundaryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for BoundaryGenerator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("BoundaryGenerator").finish_non_exhaustive()
    }
}
