//! Random generation of sample campgrounds
use crate::{
    campground::{Campground, Geometry, Image},
    error::{Error, Result},
    seeds::{
        CITIES, DEFAULT_AUTHOR, DESCRIPTION, DESCRIPTORS, HOSTED_IMAGES, PLACEHOLDER_IMAGE_FILENAME,
        PLACEHOLDER_IMAGE_URL, PLACES,
    },
};
use mongodb::bson::oid::ObjectId;
use rand::{Rng, SeedableRng, rngs::StdRng};
use strum_macros::{Display, EnumIter, EnumString};

/// Where the images of a generated campground come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ImageSource {
    /// The pair of images uploaded to the application's image host
    #[default]
    Hosted,
    /// A single url that serves a random photo
    Placeholder,
}

/// The settings that control which campgrounds get generated
#[derive(Debug, Clone, PartialEq)]
pub struct SeedProfile {
    /// How many campgrounds to generate
    pub count: usize,
    /// The object id of the user who will own every generated campground
    pub author: String,
    pub images: ImageSource,
    /// Whether to attach a map location to each campground
    pub geometry: bool,
    /// The lowest price that will be generated
    pub price_min: u32,
    /// The number of distinct prices that can be generated, starting at
    /// `price_min`
    pub price_span: u32,
}

impl Default for SeedProfile {
    fn default() -> Self {
        Self {
            count: 50,
            author: DEFAULT_AUTHOR.to_string(),
            images: ImageSource::default(),
            geometry: false,
            price_min: 10,
            price_span: 20,
        }
    }
}

impl SeedProfile {
    /// Check that campgrounds generated from this profile can be stored
    pub fn validate(&self) -> Result<()> {
        if ObjectId::parse_str(&self.author).is_err() {
            return Err(Error::InvalidData(format!(
                "author '{}' is not a valid object id",
                self.author
            )));
        }
        if self.price_span == 0 {
            return Err(Error::InvalidData(
                "price range must contain at least one price".to_string(),
            ));
        }
        if self.price_min.checked_add(self.price_span - 1).is_none() {
            return Err(Error::InvalidData("price range is too large".to_string()));
        }
        Ok(())
    }

    /// The highest price that can be generated
    pub fn price_max(&self) -> u32 {
        self.price_min
            .saturating_add(self.price_span.saturating_sub(1))
    }
}

/// Pick a random element from `items`.
///
/// # Panics
/// Panics if `items` is empty.
pub fn sample<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// A source of random sample campgrounds
pub struct Generator<R = StdRng> {
    rng: R,
}

impl Generator<StdRng> {
    /// A generator seeded from the operating system's entropy source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A generator that always produces the same campgrounds for a given seed
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a single campground. `profile` is expected to be valid; an
    /// empty price range is treated as a single price of `price_min`, and
    /// prices past `u32::MAX` are clamped to it.
    pub fn campground(&mut self, profile: &SeedProfile) -> Campground {
        let city = sample(CITIES, &mut self.rng);
        let price = profile
            .price_min
            .saturating_add(self.rng.gen_range(0..profile.price_span.max(1)));
        let title = format!(
            "{} {}",
            sample(DESCRIPTORS, &mut self.rng),
            sample(PLACES, &mut self.rng)
        );
        let images = match profile.images {
            ImageSource::Hosted => HOSTED_IMAGES
                .iter()
                .map(|(url, filename)| Image {
                    url: url.to_string(),
                    filename: filename.to_string(),
                })
                .collect(),
            ImageSource::Placeholder => vec![Image {
                url: PLACEHOLDER_IMAGE_URL.to_string(),
                filename: PLACEHOLDER_IMAGE_FILENAME.to_string(),
            }],
        };

        Campground {
            id: None,
            title,
            price,
            description: DESCRIPTION.to_string(),
            location: format!("{}, {}", city.city, city.state),
            author: profile.author.clone(),
            images,
            geometry: profile
                .geometry
                .then(|| Geometry::point(city.longitude, city.latitude)),
        }
    }

    /// Generate `profile.count` campgrounds
    pub fn campgrounds(&mut self, profile: &SeedProfile) -> Vec<Campground> {
        (0..profile.count).map(|_| self.campground(profile)).collect()
    }
}
