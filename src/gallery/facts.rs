use rand::Rng;

/// Facts shown in the "Did You Know?" banner above the gallery.
pub const SPACE_FACTS: &[&str] = &[
    "A day on Venus is longer than its year - it takes 243 Earth days to rotate once but only 225 Earth days to orbit the Sun!",
    "One teaspoon of neutron star material would weigh about 6 billion tons on Earth.",
    "The Milky Way galaxy is on a collision course with the Andromeda galaxy, but don't worry - it won't happen for about 4.5 billion years!",
    "Jupiter's Great Red Spot is a storm that has been raging for at least 400 years and is twice the size of Earth.",
    "Saturn's moon Titan has lakes and rivers of liquid methane and ethane instead of water.",
    "The footprints left by Apollo astronauts on the Moon will last for millions of years due to the lack of atmosphere.",
    "If you could drive a car to the Sun at highway speeds, it would take you over 100 years to get there.",
    "The International Space Station travels at 17,500 mph and orbits Earth every 90 minutes.",
    "A single bolt of lightning is five times hotter than the surface of the Sun.",
    "There are more possible games of chess than there are atoms in the observable universe!",
];

/// One entry of [`SPACE_FACTS`].
///
/// Carried between page renders by index so opening an entry or refusing a
/// search keeps the banner unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceFact(usize);

impl SpaceFact {
    /// Pick a fact uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..SPACE_FACTS.len()))
    }

    /// The fact at `index`, if there is one.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SPACE_FACTS.len()).then_some(Self(index))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        SPACE_FACTS[self.0]
    }
}
