//! Sprite catalog and loader
//!
//! Every visual asset is fetched once at startup by logical name. A failed
//! load yields a placeholder of the same dimensions and a category color, so
//! drawing code never has to special-case a missing asset - it just draws
//! whatever [`Sprite`] the store hands back.

/// Logical names for every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    RunnerIdle,
    RunnerDead,
    RunnerRun1,
    RunnerRun2,
    RunnerDuck1,
    RunnerDuck2,
    RunnerJump,
    Bird1,
    Bird2,
    SmallCactus1,
    SmallCactus2,
    SmallCactus3,
    LargeCactus1,
    LargeCactus2,
    LargeCactus3,
    Cloud,
    Track,
    GameOver,
    Reset,
}

impl AssetKey {
    /// Every key, for batch loading
    pub const ALL: [AssetKey; 19] = [
        AssetKey::RunnerIdle,
        AssetKey::RunnerDead,
        AssetKey::RunnerRun1,
        AssetKey::RunnerRun2,
        AssetKey::RunnerDuck1,
        AssetKey::RunnerDuck2,
        AssetKey::RunnerJump,
        AssetKey::Bird1,
        AssetKey::Bird2,
        AssetKey::SmallCactus1,
        AssetKey::SmallCactus2,
        AssetKey::SmallCactus3,
        AssetKey::LargeCactus1,
        AssetKey::LargeCactus2,
        AssetKey::LargeCactus3,
        AssetKey::Cloud,
        AssetKey::Track,
        AssetKey::GameOver,
        AssetKey::Reset,
    ];

    /// Static path the asset is served from
    pub fn source_path(self) -> &'static str {
        match self {
            AssetKey::RunnerIdle => "/images/DinoStart.png",
            AssetKey::RunnerDead => "/images/DinoDead.png",
            AssetKey::RunnerRun1 => "/images/DinoRun1.png",
            AssetKey::RunnerRun2 => "/images/DinoRun2.png",
            AssetKey::RunnerDuck1 => "/images/DinoDuck1.png",
            AssetKey::RunnerDuck2 => "/images/DinoDuck2.png",
            AssetKey::RunnerJump => "/images/DinoJump.png",
            AssetKey::Bird1 => "/images/Bird1.png",
            AssetKey::Bird2 => "/images/Bird2.png",
            AssetKey::SmallCactus1 => "/images/SmallCactus1.png",
            AssetKey::SmallCactus2 => "/images/SmallCactus2.png",
            AssetKey::SmallCactus3 => "/images/SmallCactus3.png",
            AssetKey::LargeCactus1 => "/images/LargeCactus1.png",
            AssetKey::LargeCactus2 => "/images/LargeCactus2.png",
            AssetKey::LargeCactus3 => "/images/LargeCactus3.png",
            AssetKey::Cloud => "/images/Cloud.png",
            AssetKey::Track => "/images/Track.png",
            AssetKey::GameOver => "/images/GameOver.png",
            AssetKey::Reset => "/images/Reset.png",
        }
    }

    /// Placeholder dimensions matching the real asset's category
    pub fn placeholder_size(self) -> (f32, f32) {
        use crate::consts::*;
        match self {
            AssetKey::RunnerIdle
            | AssetKey::RunnerDead
            | AssetKey::RunnerRun1
            | AssetKey::RunnerRun2
            | AssetKey::RunnerDuck1
            | AssetKey::RunnerDuck2
            | AssetKey::RunnerJump => (RUNNER_WIDTH, RUNNER_HEIGHT),
            AssetKey::Bird1 | AssetKey::Bird2 => (BIRD_WIDTH, BIRD_HEIGHT),
            AssetKey::SmallCactus1 => (17.0, 35.0),
            AssetKey::SmallCactus2 => (34.0, 35.0),
            AssetKey::SmallCactus3 => (51.0, 35.0),
            AssetKey::LargeCactus1 => (25.0, 50.0),
            AssetKey::LargeCactus2 => (50.0, 50.0),
            AssetKey::LargeCactus3 => (75.0, 50.0),
            AssetKey::Cloud => (CLOUD_WIDTH, CLOUD_HEIGHT),
            AssetKey::Track => (TRACK_TILE_WIDTH, 1.0),
            AssetKey::GameOver => (191.0, 11.0),
            AssetKey::Reset => (36.0, 32.0),
        }
    }

    /// Placeholder fill color per category
    pub fn placeholder_color(self) -> &'static str {
        match self {
            AssetKey::RunnerIdle
            | AssetKey::RunnerDead
            | AssetKey::RunnerRun1
            | AssetKey::RunnerRun2
            | AssetKey::RunnerDuck1
            | AssetKey::RunnerDuck2
            | AssetKey::RunnerJump
            | AssetKey::Track => "#535353",
            AssetKey::SmallCactus1
            | AssetKey::SmallCactus2
            | AssetKey::SmallCactus3
            | AssetKey::LargeCactus1
            | AssetKey::LargeCactus2
            | AssetKey::LargeCactus3 => "#2e8b57",
            AssetKey::Bird1 | AssetKey::Bird2 => "#4682b4",
            AssetKey::Cloud => "#ffffff",
            AssetKey::GameOver | AssetKey::Reset => "#cccccc",
        }
    }
}

/// Map a ground-obstacle variant index to its sprite
pub fn cactus_asset(variant: usize) -> AssetKey {
    match variant {
        0 => AssetKey::SmallCactus1,
        1 => AssetKey::SmallCactus2,
        2 => AssetKey::SmallCactus3,
        3 => AssetKey::LargeCactus1,
        4 => AssetKey::LargeCactus2,
        _ => AssetKey::LargeCactus3,
    }
}

#[cfg(target_arch = "wasm32")]
mod loader {
    use std::collections::HashMap;

    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlImageElement;

    use super::AssetKey;

    /// A drawable: either the decoded image or a same-dimension stand-in
    #[derive(Debug, Clone)]
    pub enum Sprite {
        Image(HtmlImageElement),
        Placeholder {
            width: f32,
            height: f32,
            color: &'static str,
        },
    }

    impl Sprite {
        pub fn placeholder(key: AssetKey) -> Self {
            let (width, height) = key.placeholder_size();
            Sprite::Placeholder {
                width,
                height,
                color: key.placeholder_color(),
            }
        }

        /// Natural size for layout (images report their decoded size)
        pub fn size(&self) -> (f32, f32) {
            match self {
                Sprite::Image(img) => (img.natural_width() as f32, img.natural_height() as f32),
                Sprite::Placeholder { width, height, .. } => (*width, *height),
            }
        }
    }

    /// Read-only sprite cache, populated once at startup
    pub struct AssetStore {
        sprites: HashMap<AssetKey, Sprite>,
        /// How many assets fell back to placeholders
        pub failed: usize,
    }

    impl AssetStore {
        /// Fetch every asset; failures degrade to placeholders, never errors
        pub async fn load_all() -> Self {
            let mut sprites = HashMap::with_capacity(AssetKey::ALL.len());
            let mut failed = 0;
            for key in AssetKey::ALL {
                let sprite = load_image(key).await;
                if matches!(sprite, Sprite::Placeholder { .. }) {
                    failed += 1;
                }
                sprites.insert(key, sprite);
            }
            if failed > 0 {
                log::warn!("{failed} assets failed to load, using placeholders");
            } else {
                log::info!("Loaded {} assets", sprites.len());
            }
            Self { sprites, failed }
        }

        pub fn get(&self, key: AssetKey) -> &Sprite {
            // Every key is inserted by load_all
            &self.sprites[&key]
        }
    }

    /// Load one image, resolving to a placeholder on any failure
    async fn load_image(key: AssetKey) -> Sprite {
        let Ok(img) = HtmlImageElement::new() else {
            return Sprite::placeholder(key);
        };
        img.set_cross_origin(Some("anonymous"));

        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            img.set_onload(Some(&resolve));
            img.set_onerror(Some(&reject));
        });
        img.set_src(key.source_path());

        match JsFuture::from(loaded).await {
            Ok(_) => Sprite::Image(img),
            Err(_) => {
                log::warn!("failed to load {}", key.source_path());
                Sprite::placeholder(key)
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use loader::{AssetStore, Sprite};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_dimensions_match_category() {
        assert_eq!(
            AssetKey::RunnerRun1.placeholder_size(),
            (crate::consts::RUNNER_WIDTH, crate::consts::RUNNER_HEIGHT)
        );
        assert_eq!(
            AssetKey::Bird2.placeholder_size(),
            (crate::consts::BIRD_WIDTH, crate::consts::BIRD_HEIGHT)
        );
        // Cactus placeholders line up with the sim's variant table
        use crate::sim::CACTUS_VARIANTS;
        for (variant, size) in CACTUS_VARIANTS.iter().enumerate() {
            let (w, h) = cactus_asset(variant).placeholder_size();
            assert_eq!((w, h), (size.x, size.y), "variant {variant}");
        }
    }

    #[test]
    fn test_every_key_has_a_path_and_color() {
        for key in AssetKey::ALL {
            assert!(key.source_path().starts_with("/images/"));
            assert!(key.placeholder_color().starts_with('#'));
        }
    }

    #[test]
    fn test_cactus_mapping_is_total() {
        for variant in 0..crate::sim::CACTUS_VARIANTS.len() {
            // Must not panic and must map small/large consistently
            let key = cactus_asset(variant);
            let is_small = variant < 3;
            let name = format!("{key:?}");
            assert_eq!(name.starts_with("SmallCactus"), is_small);
        }
    }
}
