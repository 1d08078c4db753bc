/// High score storage configuration.
pub const HIGH_SCORE_FILE: &str = "turkmen_hero_score.txt";

/// Environment variable overriding the high score file location.
pub const HIGH_SCORE_FILE_ENV: &str = "DESERT_HIGH_SCORE_FILE";

/// Environment variable holding an optional u64 world seed.
pub const SEED_ENV: &str = "DESERT_SEED";
